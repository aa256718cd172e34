//! Player-facing combat log entries.

use core::fmt;

use super::{Outcome, Turn};

/// Something the presentation layer should tell the player.
///
/// Emitted on every state-changing action; `Display` renders the log line.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    Started { player_hp: f32, player_max_hp: f32 },
    PlayerAttacked { damage: f32, enemy_hp: f32 },
    EnemyCharging,
    ReactionAttempted { success: bool },
    AttackNegated,
    EnemyAttacked { damage: f32, player_hp: f32 },
    TurnChanged(Turn),
    Finished(Outcome),
}

impl CombatEvent {
    /// Events that change whose move it is or end the encounter.
    pub fn is_milestone(&self) -> bool {
        matches!(
            self,
            Self::Started { .. } | Self::TurnChanged(_) | Self::Finished(_)
        )
    }
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started {
                player_hp,
                player_max_hp,
            } => write!(f, "Combat started! HP: {player_hp}/{player_max_hp}"),
            Self::PlayerAttacked { damage, .. } => write!(f, "You deal {damage} damage!"),
            Self::EnemyCharging => f.write_str("Enemy is attacking! React to dodge!"),
            Self::ReactionAttempted { success: true } => f.write_str("Perfect dodge!"),
            Self::ReactionAttempted { success: false } => f.write_str("Missed timing!"),
            Self::AttackNegated => f.write_str("You dodged the attack!"),
            Self::EnemyAttacked { damage, .. } => write!(f, "Enemy deals {damage} damage!"),
            Self::TurnChanged(Turn::Player) => f.write_str("Your turn!"),
            Self::TurnChanged(Turn::Enemy) => f.write_str("Enemy's turn!"),
            Self::Finished(Outcome::Victory) => f.write_str("Victory! Enemy defeated!"),
            Self::Finished(Outcome::Defeat) => f.write_str("Defeat! You died!"),
        }
    }
}
