//! Error types for encounter entry points.

use crate::error::{CombatFault, ErrorSeverity};

use super::{Outcome, Phase};

/// Entry point that produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CombatAction {
    Begin,
    PlayerAttack,
    AttemptReaction,
    Tick,
}

/// Errors surfaced by [`super::CombatEncounter`].
///
/// None of these mutate state: the encounter is exactly as it was before the
/// rejected call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    #[error("{action} is not allowed during {phase}")]
    InvalidTransition { action: CombatAction, phase: Phase },

    #[error("reaction already attempted during this charge-up")]
    DuplicateReaction,

    #[error("encounter is over ({outcome}); {action} ignored")]
    EncounterOver {
        action: CombatAction,
        outcome: Outcome,
    },

    #[error("enemy is charging without an active timing window")]
    MissingWindow,
}

impl CombatError {
    pub fn invalid_transition(action: CombatAction, phase: Phase) -> Self {
        Self::InvalidTransition { action, phase }
    }
}

impl CombatFault for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuplicateReaction => ErrorSeverity::Recoverable,
            Self::InvalidTransition { .. } | Self::EncounterOver { .. } => {
                ErrorSeverity::Validation
            }
            Self::MissingWindow => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "COMBAT_INVALID_TRANSITION",
            Self::DuplicateReaction => "COMBAT_DUPLICATE_REACTION",
            Self::EncounterOver { .. } => "COMBAT_ENCOUNTER_OVER",
            Self::MissingWindow => "COMBAT_MISSING_WINDOW",
        }
    }
}
