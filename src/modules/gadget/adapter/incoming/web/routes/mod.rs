mod create_gadget;
mod decommission_gadget;
mod list_gadgets;
mod self_destruct_gadget;
mod update_gadget;

pub use create_gadget::{__path_create_gadget_handler, create_gadget_handler};
pub use decommission_gadget::{__path_decommission_gadget_handler, decommission_gadget_handler};
pub use list_gadgets::{__path_list_gadgets_handler, list_gadgets_handler};
pub use self_destruct_gadget::{__path_self_destruct_gadget_handler, self_destruct_gadget_handler};
pub use update_gadget::{__path_update_gadget_handler, update_gadget_handler};
