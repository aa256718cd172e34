//! Types consumed by callers embedding the encounter host.
//!
//! The host talks to three external systems, each behind a small seam:
//! - a [`Mover`] it suspends for the duration of an encounter
//! - an outcome callback owned by whoever removes or respawns actors
//! - an optional log sink fed with player-facing combat lines
mod errors;
mod mover;
mod types;

pub use errors::{ConfigLoadError, HostError, Result};
pub use mover::Mover;
pub use types::{ActorId, EncounterEnd, EncounterReport};
