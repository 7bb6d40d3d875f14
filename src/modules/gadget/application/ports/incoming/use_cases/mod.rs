mod create_gadget;
mod decommission_gadget;
mod destroy_gadget;
mod list_gadgets;
mod update_gadget;

pub use create_gadget::{CreateGadgetCommand, CreateGadgetError, CreateGadgetUseCase};
pub use decommission_gadget::{DecommissionGadgetError, DecommissionGadgetUseCase};
pub use destroy_gadget::{DestroyGadgetError, DestroyGadgetUseCase};
pub use list_gadgets::{ListGadgetsError, ListGadgetsUseCase};
pub use update_gadget::{UpdateGadgetCommand, UpdateGadgetError, UpdateGadgetUseCase};
