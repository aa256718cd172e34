//! Deterministic duel rules shared by the runtime and tools.
//!
//! `duel-core` defines the canonical rules of a turn-based duel whose enemy
//! attacks are resolved through a timed reaction check. It exposes pure APIs:
//! time only enters through [`CombatEncounter::tick`], and nothing here logs
//! or performs I/O. All encounter state mutation flows through
//! [`engine::CombatEncounter`].
pub mod config;
pub mod engine;
pub mod error;
pub mod stats;
pub mod timing;

pub use config::{CombatConfig, ConfigError};
pub use engine::{
    AttackReport, CombatAction, CombatEncounter, CombatError, CombatEvent, EncounterSnapshot,
    Outcome, Phase, ReactionState, Turn,
};
pub use error::{CombatFault, ErrorSeverity};
pub use stats::{CombatantStats, StatsError};
pub use timing::{Easing, ReactionWindow, TimingError, TimingWindow};
