//! Health values for the two sides of an encounter.
//!
//! [`CombatantStats`] is the only stat type the duel rules need. The player's
//! instance is long-lived (checked out of the runtime's progress store for the
//! length of an encounter); the enemy's instance is built per encounter and
//! dropped with it.
//!
//! ## Principles
//!
//! 1. **Clamped**: `0 ≤ current_hp ≤ max_hp` after every mutation
//! 2. **Deterministic**: Pure arithmetic, no I/O or randomness

pub mod combatant;

pub use combatant::{CombatantStats, StatsError};
