use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::gadget::application::domain::{Gadget, GadgetStatus, UnknownStatus};

//
// ──────────────────────────────────────────────────────────
// Responses
// ──────────────────────────────────────────────────────────
//

/// Outward shape of a gadget. Lifecycle stamps are `null` until set.
#[derive(Debug, Serialize, ToSchema)]
pub struct GadgetResponse {
    pub id: Uuid,
    #[schema(example = "Viperfang")]
    pub name: String,
    pub status: GadgetStatus,
    #[schema(example = 87.42)]
    pub success_probability: f64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "decommissionedAt")]
    pub decommissioned_at: Option<DateTime<Utc>>,
    #[serde(rename = "destroyedAt")]
    pub destroyed_at: Option<DateTime<Utc>>,
}

impl From<Gadget> for GadgetResponse {
    fn from(g: Gadget) -> Self {
        Self {
            id: g.id,
            name: g.name,
            status: g.status,
            success_probability: g.success_probability,
            created_at: g.created_at,
            decommissioned_at: g.decommissioned_at,
            destroyed_at: g.destroyed_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GadgetEnvelope {
    #[schema(example = "Gadget created successfully!")]
    pub message: String,
    pub gadget: GadgetResponse,
}

impl GadgetEnvelope {
    pub fn new(message: &str, gadget: Gadget) -> Self {
        Self {
            message: message.to_string(),
            gadget: gadget.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DestroyedGadgetEnvelope {
    #[schema(example = "Gadget destroyed successfully")]
    pub message: String,
    #[serde(rename = "destroyedGadget")]
    pub destroyed_gadget: GadgetResponse,
}

//
// ──────────────────────────────────────────────────────────
// Requests
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListGadgetsQuery {
    /// One of `Available`, `Deployed`, `Destroyed`, `Decommissioned`
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateGadgetRequest {
    /// Random codename when omitted
    #[serde(default)]
    #[schema(example = "Viperfang")]
    pub name: Option<String>,

    /// `Available` (default), `Deployed` or `Destroyed`
    #[serde(default)]
    #[schema(example = "Available")]
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateGadgetRequest {
    #[serde(default)]
    #[schema(example = "5b0f4a51-9a51-4c57-8b4e-0a2a1c9f2c11")]
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    #[schema(example = "Deployed")]
    pub status: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Parsing helpers
// ──────────────────────────────────────────────────────────
//

/// Empty means "not supplied".
pub fn parse_status(raw: Option<&str>) -> Result<Option<GadgetStatus>, UnknownStatus> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}

pub fn parse_gadget_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}
