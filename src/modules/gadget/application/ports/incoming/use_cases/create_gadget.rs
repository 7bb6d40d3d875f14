use async_trait::async_trait;

use crate::gadget::application::domain::{Gadget, GadgetStatus, MAX_GADGET_NAME_LEN};
use crate::shared::validation::ValidationErrors;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateGadgetCommand {
    name: Option<String>,
    status: Option<GadgetStatus>,
}

impl CreateGadgetCommand {
    /// A blank name counts as no name. A supplied name is kept verbatim.
    pub fn new(
        name: Option<String>,
        status: Option<GadgetStatus>,
    ) -> Result<Self, ValidationErrors> {
        let name = name.filter(|n| !n.trim().is_empty());

        let mut errors = ValidationErrors::default();
        check_name_length(name.as_deref(), &mut errors);

        errors.into_result(Self { name, status })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn status(&self) -> Option<GadgetStatus> {
        self.status
    }
}

pub(super) fn check_name_length(name: Option<&str>, errors: &mut ValidationErrors) {
    if name.is_some_and(|n| n.chars().count() > MAX_GADGET_NAME_LEN) {
        errors.push("name", "Name must be at most 255 characters");
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateGadgetError {
    #[error("Invalid status")]
    InvalidStatus,

    #[error("Gadget name already exists")]
    NameAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateGadgetUseCase: Send + Sync {
    async fn execute(&self, command: CreateGadgetCommand) -> Result<Gadget, CreateGadgetError>;
}
