//! Runtime orchestration around the deterministic duel rules.
//!
//! This crate wires `duel-core` encounters into the surrounding game: it owns
//! the single active encounter, suspends and resumes the external mover,
//! forwards combat log lines, persists the player's health between fights,
//! and loads configuration.
//!
//! Modules are organized by responsibility:
//! - [`host`] hosts the [`EncounterHost`] boundary adapter
//! - [`api`] exposes the types downstream clients interact with
//! - [`progress`] keeps the player's long-lived state
//! - [`config`] reads tuning from RON files and the environment
pub mod api;
pub mod config;
pub mod host;
pub mod progress;

pub use api::{ActorId, ConfigLoadError, EncounterEnd, EncounterReport, HostError, Mover, Result};
pub use config::{CombatConfigLoader, HostConfig, RuntimeConfig};
pub use host::EncounterHost;
pub use progress::Progress;
