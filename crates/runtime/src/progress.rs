//! Player progress carried between encounters.
//!
//! [`Progress`] is owned by the composition root and handed to the host by
//! reference. The host checks the player's stats out when an encounter starts
//! and commits them back when it ends, so damage taken in one fight carries
//! into the next.
use duel_core::{CombatantStats, Outcome, StatsError};

/// Long-lived player state.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Progress {
    starting_max_hp: f32,
    player: CombatantStats,
    victories: u32,
    defeats: u32,
}

impl Progress {
    pub const DEFAULT_PLAYER_MAX_HP: f32 = 100.0;

    /// Fresh progress with the player at full health.
    pub fn new(player_max_hp: f32) -> Self {
        Self {
            starting_max_hp: player_max_hp,
            player: CombatantStats::new(player_max_hp),
            victories: 0,
            defeats: 0,
        }
    }

    pub fn try_new(player_max_hp: f32) -> Result<Self, StatsError> {
        CombatantStats::try_new(player_max_hp)?;
        Ok(Self::new(player_max_hp))
    }

    #[inline]
    pub fn player(&self) -> CombatantStats {
        self.player
    }

    pub fn victories(&self) -> u32 {
        self.victories
    }

    pub fn defeats(&self) -> u32 {
        self.defeats
    }

    /// Restores the player to full health (save points, new run).
    pub fn full_heal(&mut self) {
        self.player.reset();
    }

    pub fn heal(&mut self, amount: f32) {
        self.player.heal(amount);
    }

    /// Back to the starting state of a new game.
    pub fn reset(&mut self) {
        *self = Self::new(self.starting_max_hp);
    }

    /// Writes back the player's stats after an encounter.
    pub fn commit(&mut self, player: CombatantStats) {
        self.player = player;
    }

    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Victory => self.victories += 1,
            Outcome::Defeat => self.defeats += 1,
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PLAYER_MAX_HP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_persists_damage() {
        let mut progress = Progress::default();
        let mut player = progress.player();
        player.take_damage(30.0);
        progress.commit(player);
        assert_eq!(progress.player().current_hp(), 70.0);

        progress.full_heal();
        assert_eq!(progress.player().current_hp(), 100.0);
    }

    #[test]
    fn reset_clears_record_and_health() {
        let mut progress = Progress::new(80.0);
        progress.commit(CombatantStats::with_current(80.0, 10.0));
        progress.record(Outcome::Victory);
        progress.record(Outcome::Defeat);
        assert_eq!((progress.victories(), progress.defeats()), (1, 1));

        progress.reset();
        assert_eq!(progress, Progress::new(80.0));
    }

    #[test]
    fn heal_is_clamped() {
        let mut progress = Progress::default();
        progress.commit(CombatantStats::with_current(100.0, 95.0));
        progress.heal(50.0);
        assert_eq!(progress.player().current_hp(), 100.0);
    }

    #[test]
    fn rejects_bad_max() {
        assert!(Progress::try_new(0.0).is_err());
    }
}
