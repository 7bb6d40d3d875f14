use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::gadget::application::domain::Gadget;
use crate::gadget::application::ports::incoming::use_cases::{
    DecommissionGadgetError, DecommissionGadgetUseCase,
};
use crate::gadget::application::ports::outgoing::{
    GadgetQuery, GadgetRepository, GadgetRepositoryError,
};

pub struct DecommissionGadgetService<Q, R>
where
    Q: GadgetQuery,
    R: GadgetRepository,
{
    gadget_query: Q,
    gadget_repository: R,
}

impl<Q, R> DecommissionGadgetService<Q, R>
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
impl<Q, R> DecommissionGadgetUseCase for DecommissionGadgetService<Q, R>
where
    Q: GadgetQuery + Send + Sync,
    R: GadgetRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Gadget, DecommissionGadgetError> {
        let mut gadget = self
            .gadget_query
            .find_by_id(id)
            .await
            .map_err(|e| DecommissionGadgetError::RepositoryError(e.to_string()))?
            .ok_or(DecommissionGadgetError::NotFound)?;

        if gadget.decommission(Utc::now()).is_err() {
            warn!(gadget_id = %id, "Gadget already decommissioned");
            return Err(DecommissionGadgetError::AlreadyDecommissioned);
        }

        let saved = self
            .gadget_repository
            .save(&gadget)
            .await
            .map_err(|e| match e {
                GadgetRepositoryError::NotFound => DecommissionGadgetError::NotFound,
                other => DecommissionGadgetError::RepositoryError(other.to_string()),
            })?;

        info!(gadget_id = %saved.id, "Gadget decommissioned");
        Ok(saved)
    }
}
