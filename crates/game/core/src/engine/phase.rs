//! Discrete state of an encounter.

/// Which side currently holds the initiative.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Turn {
    Player,
    Enemy,
}

/// Encounter phase.
///
/// Transitions are monotonic except for the player/enemy alternation:
///
/// ```text
/// Idle → PlayerDeciding → [PostAttackDelay] → EnemyCharging → [ReactionResolved] ─┐
///              ↑                                                                  │
///              └──────────────────────────────────────────────────────────────────┘
/// any attack that empties a health pool → EncounterOver
/// ```
///
/// The bracketed phases are scheduled pauses that only exist when the
/// configured turn delay is non-zero.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Phase {
    /// Built but not yet begun.
    Idle,
    /// Waiting for the player's attack.
    PlayerDeciding,
    /// Pause between the player's attack and the enemy charge-up.
    PostAttackDelay,
    /// Attack indicator filling; the only phase with an active timing window.
    EnemyCharging,
    /// Pause after an enemy attack was resolved, before the player's turn.
    ReactionResolved,
    /// Terminal.
    EncounterOver,
}

impl Phase {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::EncounterOver)
    }

    /// Side holding the initiative in this phase, if any.
    pub const fn turn(self) -> Option<Turn> {
        match self {
            Phase::PlayerDeciding => Some(Turn::Player),
            Phase::PostAttackDelay | Phase::EnemyCharging | Phase::ReactionResolved => {
                Some(Turn::Enemy)
            }
            Phase::Idle | Phase::EncounterOver => None,
        }
    }
}

/// Terminal result of an encounter, from the player's point of view.
///
/// Kept distinct all the way to the caller; deciding what defeat means
/// (game over, respawn) belongs to whoever owns the actors.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Outcome {
    Victory,
    Defeat,
}

/// Reaction bookkeeping for the current charge-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReactionState {
    /// Set at most once per charge-up.
    pub attempted: bool,
    pub succeeded: bool,
}

impl ReactionState {
    /// Whether the incoming attack is negated.
    #[inline]
    pub const fn negates_attack(&self) -> bool {
        self.attempted && self.succeeded
    }
}
