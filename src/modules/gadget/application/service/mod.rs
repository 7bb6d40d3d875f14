mod create_gadget_service;
mod decommission_gadget_service;
mod destroy_gadget_service;
mod list_gadgets_service;
mod update_gadget_service;

pub use create_gadget_service::CreateGadgetService;
pub use decommission_gadget_service::DecommissionGadgetService;
pub use destroy_gadget_service::DestroyGadgetService;
pub use list_gadgets_service::ListGadgetsService;
pub use update_gadget_service::UpdateGadgetService;
