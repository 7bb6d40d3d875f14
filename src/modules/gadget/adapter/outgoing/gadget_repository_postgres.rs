use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::gadget::adapter::outgoing::sea_orm_entity::gadgets::{self, ActiveModel};
use crate::gadget::application::domain::Gadget;
use crate::gadget::application::ports::outgoing::{
    GadgetRepository, GadgetRepositoryError, NewGadget,
};
use crate::shared::db::is_unique_violation;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone, Debug)]
pub struct GadgetRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GadgetRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GadgetRepository for GadgetRepositoryPostgres {
    async fn insert(&self, gadget: NewGadget) -> Result<Gadget, GadgetRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(gadget.name),
            status: Set(gadget.status.as_str().to_string()),
            success_probability: Set(gadget.success_probability),
            created_at: Set(Utc::now().fixed_offset()),
            decommissioned_at: Set(None),
            destroyed_at: Set(None),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_write_error)?;

        to_domain(inserted)
    }

    async fn save(&self, gadget: &Gadget) -> Result<Gadget, GadgetRepositoryError> {
        // Every column but the immutable ones
        let model = ActiveModel {
            id: sea_orm::ActiveValue::Unchanged(gadget.id),
            name: Set(gadget.name.clone()),
            status: Set(gadget.status.as_str().to_string()),
            decommissioned_at: Set(gadget.decommissioned_at.map(|t| t.fixed_offset())),
            destroyed_at: Set(gadget.destroyed_at.map(|t| t.fixed_offset())),
            ..Default::default()
        };

        let updated = model.update(&*self.db).await.map_err(map_write_error)?;

        to_domain(updated)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn to_domain(model: gadgets::Model) -> Result<Gadget, GadgetRepositoryError> {
    Gadget::try_from(model).map_err(|e| GadgetRepositoryError::DatabaseError(e.to_string()))
}

fn map_write_error(e: DbErr) -> GadgetRepositoryError {
    match e {
        DbErr::RecordNotUpdated => GadgetRepositoryError::NotFound,
        e if is_unique_violation(&e) => GadgetRepositoryError::NameAlreadyExists,
        e => GadgetRepositoryError::DatabaseError(e.to_string()),
    }
}

// ============================================================================
// Tests
// ============================================================================
