use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum GadgetStatus {
    #[default]
    Available,
    Deployed,
    Destroyed,
    Decommissioned,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown gadget status: {0}")]
pub struct UnknownStatus(pub String);

impl GadgetStatus {
    pub const ALL: [GadgetStatus; 4] = [
        GadgetStatus::Available,
        GadgetStatus::Deployed,
        GadgetStatus::Destroyed,
        GadgetStatus::Decommissioned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GadgetStatus::Available => "Available",
            GadgetStatus::Deployed => "Deployed",
            GadgetStatus::Destroyed => "Destroyed",
            GadgetStatus::Decommissioned => "Decommissioned",
        }
    }

    /// A gadget cannot be born decommissioned.
    pub fn is_valid_initial(&self) -> bool {
        !matches!(self, GadgetStatus::Decommissioned)
    }
}

/// Exact, case-sensitive match on the status name.
impl FromStr for GadgetStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GadgetStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

impl fmt::Display for GadgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Gadget
// ============================================================================

/// Width of the `gadgets.name` column, in characters.
pub const MAX_GADGET_NAME_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LifecycleError {
    #[error("Gadget already decommissioned")]
    AlreadyDecommissioned,

    #[error("Gadget already destroyed")]
    AlreadyDestroyed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gadget {
    pub id: Uuid,
    pub name: String,
    pub status: GadgetStatus,
    pub success_probability: f64,
    pub created_at: DateTime<Utc>,
    pub decommissioned_at: Option<DateTime<Utc>>,
    pub destroyed_at: Option<DateTime<Utc>>,
}

impl Gadget {
    pub fn decommission(&mut self, now: DateTime<Utc>) -> Result<(), LifecycleError> {
        if self.status == GadgetStatus::Decommissioned {
            return Err(LifecycleError::AlreadyDecommissioned);
        }

        self.status = GadgetStatus::Decommissioned;
        self.decommissioned_at = Some(now);
        Ok(())
    }

    pub fn destroy(&mut self, now: DateTime<Utc>) -> Result<(), LifecycleError> {
        if self.status == GadgetStatus::Destroyed {
            return Err(LifecycleError::AlreadyDestroyed);
        }

        self.status = GadgetStatus::Destroyed;
        self.destroyed_at = Some(now);
        Ok(())
    }

    /// Plain overwrite of whatever was supplied. Lifecycle timestamps are
    /// left alone, only decommission/destroy stamp them.
    pub fn apply_update(&mut self, name: Option<String>, status: Option<GadgetStatus>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(status) = status {
            self.status = status;
        }
    }
}

/// Clamps to [0, 100] and keeps two decimals.
pub fn round_probability(raw: f64) -> f64 {
    ((raw * 100.0).round() / 100.0).clamp(0.0, 100.0)
}
