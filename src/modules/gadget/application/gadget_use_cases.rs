use std::sync::Arc;

use crate::gadget::application::ports::incoming::use_cases::{
    CreateGadgetUseCase, DecommissionGadgetUseCase, DestroyGadgetUseCase, ListGadgetsUseCase,
    UpdateGadgetUseCase,
};

#[derive(Clone)]
pub struct GadgetUseCases {
    pub list: Arc<dyn ListGadgetsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateGadgetUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateGadgetUseCase + Send + Sync>,
    pub decommission: Arc<dyn DecommissionGadgetUseCase + Send + Sync>,
    pub destroy: Arc<dyn DestroyGadgetUseCase + Send + Sync>,
}
