use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::gadget::adapter::outgoing::sea_orm_entity::gadgets::{self, Column, Entity};
use crate::gadget::application::domain::{Gadget, GadgetStatus};
use crate::gadget::application::ports::outgoing::{GadgetQuery, GadgetQueryError};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone, Debug)]
pub struct GadgetQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GadgetQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GadgetQuery for GadgetQueryPostgres {
    async fn list(&self, status: Option<GadgetStatus>) -> Result<Vec<Gadget>, GadgetQueryError> {
        let mut query = Entity::find();

        if let Some(status) = status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }

        let models = query
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(to_domain).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Gadget>, GadgetQueryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_domain)
            .transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Gadget>, GadgetQueryError> {
        Entity::find()
            .filter(Column::Name.eq(name))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_domain)
            .transpose()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn to_domain(model: gadgets::Model) -> Result<Gadget, GadgetQueryError> {
    Gadget::try_from(model).map_err(|e| GadgetQueryError::DatabaseError(e.to_string()))
}

fn map_db_err(e: DbErr) -> GadgetQueryError {
    GadgetQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
