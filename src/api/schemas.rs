// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::validation::FieldViolation;

/// Body of every non-2xx answer
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "Gadget not found")]
    pub message: String,

    /// Present only when input validation failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldViolation>>,
}

/// Answer that carries nothing but a confirmation message
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Successfully logged out")]
    pub message: String,
}
