use async_trait::async_trait;
use uuid::Uuid;

use crate::gadget::application::domain::{Gadget, GadgetStatus};
use crate::shared::validation::ValidationErrors;

use super::create_gadget::check_name_length;

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateGadgetCommand {
    pub id: Uuid,
    pub name: Option<String>,
    pub status: Option<GadgetStatus>,
}

impl UpdateGadgetCommand {
    /// A blank name leaves the current one in place.
    pub fn new(
        id: Uuid,
        name: Option<String>,
        status: Option<GadgetStatus>,
    ) -> Result<Self, ValidationErrors> {
        let name = name.filter(|n| !n.trim().is_empty());

        let mut errors = ValidationErrors::default();
        check_name_length(name.as_deref(), &mut errors);

        errors.into_result(Self { id, name, status })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateGadgetError {
    #[error("Gadget not found")]
    NotFound,

    #[error("Gadget name already exists")]
    NameAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateGadgetUseCase: Send + Sync {
    async fn execute(&self, command: UpdateGadgetCommand) -> Result<Gadget, UpdateGadgetError>;
}
