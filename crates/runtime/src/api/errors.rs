//! Unified error types surfaced by the runtime API.
use std::path::PathBuf;

use duel_core::{CombatError, CombatFault, ConfigError, ErrorSeverity};
use thiserror::Error;

use super::ActorId;

pub type Result<T> = std::result::Result<T, HostError>;

/// Failures of [`crate::EncounterHost`] entry points.
///
/// Every variant leaves the host exactly as it was; the per-frame driver can
/// log the error and keep going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("encounter with {active} already running; start for {requested} rejected")]
    ConcurrentEncounter { active: ActorId, requested: ActorId },

    #[error("no encounter is active")]
    NoActiveEncounter,

    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error("invalid combat config: {0}")]
    InvalidConfig(String),
}

impl From<ConfigError> for HostError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

impl CombatFault for HostError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConcurrentEncounter { .. } | Self::NoActiveEncounter => {
                ErrorSeverity::Recoverable
            }
            Self::Combat(inner) => inner.severity(),
            Self::InvalidConfig(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ConcurrentEncounter { .. } => "HOST_CONCURRENT_ENCOUNTER",
            Self::NoActiveEncounter => "HOST_NO_ACTIVE_ENCOUNTER",
            Self::Combat(inner) => inner.error_code(),
            Self::InvalidConfig(_) => "HOST_INVALID_CONFIG",
        }
    }
}

/// Failures while assembling [`crate::RuntimeConfig`].
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read combat config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse combat config RON: {0}")]
    Parse(String),

    #[error("environment variable {key} has invalid value {value:?}")]
    InvalidEnv { key: &'static str, value: String },

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}
