use async_trait::async_trait;

use crate::gadget::application::domain::{Gadget, GadgetStatus};

//
// ──────────────────────────────────────────────────────────
// Write DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct NewGadget {
    pub name: String,
    pub status: GadgetStatus,
    pub success_probability: f64,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GadgetRepositoryError {
    #[error("Gadget not found")]
    NotFound,

    #[error("Gadget name already exists")]
    NameAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GadgetRepository: Send + Sync {
    /// Assigns id and `created_at`.
    async fn insert(&self, gadget: NewGadget) -> Result<Gadget, GadgetRepositoryError>;

    /// Writes name, status and both lifecycle timestamps of an existing row.
    async fn save(&self, gadget: &Gadget) -> Result<Gadget, GadgetRepositoryError>;
}
