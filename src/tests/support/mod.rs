pub mod app_state_builder;
pub mod auth_helper;
pub mod harness;
pub mod in_memory;
pub mod stubs;

