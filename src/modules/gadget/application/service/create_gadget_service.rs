use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::gadget::application::domain::{round_probability, Gadget, CODENAMES};
use crate::gadget::application::ports::incoming::use_cases::{
    CreateGadgetCommand, CreateGadgetError, CreateGadgetUseCase,
};
use crate::gadget::application::ports::outgoing::{
    GadgetQuery, GadgetRepository, GadgetRepositoryError, NewGadget, RandomSource,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateGadgetService<Q, R>
where
    Q: GadgetQuery,
    R: GadgetRepository,
{
    gadget_query: Q,
    gadget_repository: R,
    random: Arc<dyn RandomSource>,
}

impl<Q, R> CreateGadgetService<Q, R>
where
    Q: GadgetQuery,
    R: GadgetRepository,
{
    pub fn new(gadget_query: Q, gadget_repository: R, random: Arc<dyn RandomSource>) -> Self {
        Self {
            gadget_query,
            gadget_repository,
            random,
        }
    }

    fn pick_codename(&self) -> String {
        CODENAMES[self.random.index(CODENAMES.len())].to_string()
    }

    fn roll_success_probability(&self) -> f64 {
        round_probability(self.random.unit() * 100.0)
    }
}

#[async_trait]
impl<Q, R> CreateGadgetUseCase for CreateGadgetService<Q, R>
where
    Q: GadgetQuery + Send + Sync,
    R: GadgetRepository + Send + Sync,
{
    async fn execute(&self, command: CreateGadgetCommand) -> Result<Gadget, CreateGadgetError> {
        // 1️⃣ Initial status
        let status = command.status().unwrap_or_default();
        if !status.is_valid_initial() {
            return Err(CreateGadgetError::InvalidStatus);
        }

        // 2️⃣ Name and odds. A random codename is not retried on collision.
        let name = match command.name() {
            Some(name) => name.to_string(),
            None => self.pick_codename(),
        };
        let success_probability = self.roll_success_probability();

        // 3️⃣ Uniqueness, backed by the unique index on insert
        let existing = self
            .gadget_query
            .find_by_name(&name)
            .await
            .map_err(|e| CreateGadgetError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            warn!(name = %name, "Gadget name already taken");
            return Err(CreateGadgetError::NameAlreadyExists);
        }

        // 4️⃣ Persist
        let gadget = self
            .gadget_repository
            .insert(NewGadget {
                name,
                status,
                success_probability,
            })
            .await
            .map_err(|e| match e {
                GadgetRepositoryError::NameAlreadyExists => CreateGadgetError::NameAlreadyExists,
                GadgetRepositoryError::DatabaseError(msg) => {
                    CreateGadgetError::RepositoryError(msg)
                }
                GadgetRepositoryError::NotFound => CreateGadgetError::RepositoryError(
                    "unexpected not found while creating gadget".to_string(),
                ),
            })?;

        info!(gadget_id = %gadget.id, name = %gadget.name, "Gadget created");
        Ok(gadget)
    }
}
