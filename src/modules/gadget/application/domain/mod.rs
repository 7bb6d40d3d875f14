mod codename;
mod gadget;

pub use codename::CODENAMES;
pub use gadget::{
    round_probability, Gadget, GadgetStatus, LifecycleError, UnknownStatus, MAX_GADGET_NAME_LEN,
};
