use async_trait::async_trait;
use uuid::Uuid;

use crate::gadget::application::domain::Gadget;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DestroyGadgetError {
    #[error("Gadget not found")]
    NotFound,

    #[error("Gadget already destroyed")]
    AlreadyDestroyed,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DestroyGadgetUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Gadget, DestroyGadgetError>;
}
