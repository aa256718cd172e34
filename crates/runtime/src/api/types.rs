use std::fmt;

use duel_core::{CombatantStats, Outcome};

/// Opaque handle naming an actor owned by the caller (typically the enemy).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Delivered to the actor lifecycle owner when an encounter finishes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct EncounterReport {
    pub enemy: ActorId,
    pub outcome: Outcome,
    /// Player stats as committed back to the progress store.
    pub player: CombatantStats,
}

/// How an encounter left the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EncounterEnd {
    Finished(EncounterReport),
    /// Force-terminated before an outcome; the outcome callback was not run.
    Aborted { enemy: ActorId },
}
