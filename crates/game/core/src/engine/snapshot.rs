use super::{Outcome, Phase, Turn};

/// Read-only view of an encounter for UI polling.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterSnapshot {
    pub phase: Phase,
    pub turn: Option<Turn>,
    /// Eased fill of the attack indicator; `None` outside a charge-up.
    pub charge_progress: Option<f32>,
    pub in_reaction_window: bool,
    /// Cosmetic reaction pose is showing.
    pub reacting: bool,
    pub player_hp: f32,
    pub player_max_hp: f32,
    pub enemy_hp: f32,
    pub enemy_max_hp: f32,
    pub outcome: Option<Outcome>,
}

impl EncounterSnapshot {
    pub fn player_hp_ratio(&self) -> f32 {
        self.player_hp / self.player_max_hp
    }

    pub fn enemy_hp_ratio(&self) -> f32 {
        self.enemy_hp / self.enemy_max_hp
    }
}
