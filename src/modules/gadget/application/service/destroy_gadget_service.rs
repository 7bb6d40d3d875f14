use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::gadget::application::domain::Gadget;
use crate::gadget::application::ports::incoming::use_cases::{
    DestroyGadgetError, DestroyGadgetUseCase,
};
use crate::gadget::application::ports::outgoing::{
    GadgetQuery, GadgetRepository, GadgetRepositoryError,
};

pub struct DestroyGadgetService<Q, R>
where
    Q: GadgetQuery,
    R: GadgetRepository,
{
    gadget_query: Q,
    gadget_repository: R,
}

impl<Q, R> DestroyGadgetService<Q, R>
where
    Q: GadgetQuery,
    R: GadgetRepository,
{
    pub fn new(gadget_query: Q, gadget_repository: R) -> Self {
        Self {
            gadget_query,
            gadget_repository,
        }
    }
}

#[async_trait]
impl<Q, R> DestroyGadgetUseCase for DestroyGadgetService<Q, R>
where
    Q: GadgetQuery + Send + Sync,
    R: GadgetRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Gadget, DestroyGadgetError> {
        let mut gadget = self
            .gadget_query
            .find_by_id(id)
            .await
            .map_err(|e| DestroyGadgetError::RepositoryError(e.to_string()))?
            .ok_or(DestroyGadgetError::NotFound)?;

        if gadget.destroy(Utc::now()).is_err() {
            warn!(gadget_id = %id, "Gadget already destroyed");
            return Err(DestroyGadgetError::AlreadyDestroyed);
        }

        let saved = self
            .gadget_repository
            .save(&gadget)
            .await
            .map_err(|e| match e {
                GadgetRepositoryError::NotFound => DestroyGadgetError::NotFound,
                other => DestroyGadgetError::RepositoryError(other.to_string()),
            })?;

        info!(gadget_id = %saved.id, "Gadget destroyed");
        Ok(saved)
    }
}
