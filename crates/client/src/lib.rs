//! Headless driver for the duel runtime.
//!
//! The binary is the composition root: it owns the player's [`Progress`],
//! the enemy roster, and the movement controller, and feeds a scripted
//! player's inputs into an [`EncounterHost`] on a fixed tick.
//!
//! [`Progress`]: duel_runtime::Progress
//! [`EncounterHost`]: duel_runtime::EncounterHost
pub mod config;
pub mod demo;
pub mod logging;

pub use config::{ClientConfig, ScriptConfig};
pub use demo::{Demo, Roster, RunStatus, RunSummary, WorldMover};
