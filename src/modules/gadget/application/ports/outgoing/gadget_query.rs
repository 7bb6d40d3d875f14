use async_trait::async_trait;
use uuid::Uuid;

use crate::gadget::application::domain::{Gadget, GadgetStatus};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GadgetQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait GadgetQuery: Send + Sync {
    /// Every gadget, oldest first, optionally narrowed to one exact status.
    async fn list(&self, status: Option<GadgetStatus>) -> Result<Vec<Gadget>, GadgetQueryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Gadget>, GadgetQueryError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Gadget>, GadgetQueryError>;
}
