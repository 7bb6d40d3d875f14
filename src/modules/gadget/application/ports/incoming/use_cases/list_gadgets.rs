use async_trait::async_trait;

use crate::gadget::application::domain::{Gadget, GadgetStatus};
use crate::gadget::application::ports::outgoing::GadgetQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListGadgetsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<GadgetQueryError> for ListGadgetsError {
    fn from(err: GadgetQueryError) -> Self {
        match err {
            GadgetQueryError::DatabaseError(msg) => ListGadgetsError::QueryError(msg),
        }
    }
}

#[async_trait]
pub trait ListGadgetsUseCase: Send + Sync {
    async fn execute(&self, status: Option<GadgetStatus>) -> Result<Vec<Gadget>, ListGadgetsError>;
}
