pub mod gadget_query;
pub mod gadget_repository;
pub mod random_source;

pub use gadget_query::{GadgetQuery, GadgetQueryError};
pub use gadget_repository::{GadgetRepository, GadgetRepositoryError, NewGadget};
pub use random_source::RandomSource;
