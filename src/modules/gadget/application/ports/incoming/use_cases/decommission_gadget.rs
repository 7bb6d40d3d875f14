use async_trait::async_trait;
use uuid::Uuid;

use crate::gadget::application::domain::Gadget;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecommissionGadgetError {
    #[error("Gadget not found")]
    NotFound,

    #[error("Gadget already decommissioned")]
    AlreadyDecommissioned,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DecommissionGadgetUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Gadget, DecommissionGadgetError>;
}
