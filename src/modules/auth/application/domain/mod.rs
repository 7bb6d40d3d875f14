pub mod entities;

pub use entities::{User, UserIdentity};
