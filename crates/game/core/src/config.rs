use crate::error::{CombatFault, ErrorSeverity};
use crate::stats::CombatantStats;
use crate::timing::{Easing, ReactionWindow, TimingError};

/// Rejected configuration values.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be positive and finite (got {value})")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be non-negative and finite (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error(transparent)]
    Timing(#[from] TimingError),
}

impl CombatFault for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositive { .. } => "CONFIG_NON_POSITIVE",
            Self::Negative { .. } => "CONFIG_NEGATIVE",
            Self::Timing(inner) => inner.error_code(),
        }
    }
}

/// Tunable parameters for one encounter.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Enemy health at the start of every encounter.
    pub enemy_max_hp: f32,
    /// Damage of one player attack.
    pub player_damage: f32,
    /// Damage of one landed enemy attack.
    pub enemy_damage: f32,
    /// Seconds for the attack indicator to fill.
    pub charge_time: f32,
    pub easing: Easing,
    pub reaction_window: ReactionWindow,
    /// Seconds the cosmetic reaction pose stays up after an input.
    pub reaction_animation: f32,
    /// Pause after each attack before the other side acts. Zero skips the
    /// scheduled sub-states entirely.
    pub turn_delay: f32,
}

impl CombatConfig {
    pub const DEFAULT_ENEMY_MAX_HP: f32 = 50.0;
    pub const DEFAULT_PLAYER_DAMAGE: f32 = 15.0;
    pub const DEFAULT_ENEMY_DAMAGE: f32 = 10.0;
    pub const DEFAULT_CHARGE_TIME: f32 = 1.5;
    pub const DEFAULT_REACTION_ANIMATION: f32 = 0.2;
    /// Beat between attacks when playing with on-screen pacing.
    pub const PACED_TURN_DELAY: f32 = 0.5;

    pub fn new() -> Self {
        Self {
            enemy_max_hp: Self::DEFAULT_ENEMY_MAX_HP,
            player_damage: Self::DEFAULT_PLAYER_DAMAGE,
            enemy_damage: Self::DEFAULT_ENEMY_DAMAGE,
            charge_time: Self::DEFAULT_CHARGE_TIME,
            easing: Easing::QuadraticIn,
            reaction_window: ReactionWindow::DEFAULT,
            reaction_animation: Self::DEFAULT_REACTION_ANIMATION,
            turn_delay: 0.0,
        }
    }

    /// Defaults with a visible pause between turns.
    pub fn paced() -> Self {
        Self::new().with_turn_delay(Self::PACED_TURN_DELAY)
    }

    pub fn with_turn_delay(mut self, turn_delay: f32) -> Self {
        self.turn_delay = turn_delay;
        self
    }

    pub fn with_enemy_max_hp(mut self, enemy_max_hp: f32) -> Self {
        self.enemy_max_hp = enemy_max_hp;
        self
    }

    pub fn with_damage(mut self, player_damage: f32, enemy_damage: f32) -> Self {
        self.player_damage = player_damage;
        self.enemy_damage = enemy_damage;
        self
    }

    pub fn with_charge(mut self, charge_time: f32, easing: Easing) -> Self {
        self.charge_time = charge_time;
        self.easing = easing;
        self
    }

    pub fn with_reaction_window(mut self, reaction_window: ReactionWindow) -> Self {
        self.reaction_window = reaction_window;
        self
    }

    /// Fresh enemy stats for a new encounter.
    pub fn enemy_stats(&self) -> CombatantStats {
        CombatantStats::new(self.enemy_max_hp)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("enemy_max_hp", self.enemy_max_hp)?;
        positive("charge_time", self.charge_time)?;
        non_negative("player_damage", self.player_damage)?;
        non_negative("enemy_damage", self.enemy_damage)?;
        non_negative("reaction_animation", self.reaction_animation)?;
        non_negative("turn_delay", self.turn_delay)?;
        self.reaction_window.validate()?;
        Ok(())
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = CombatConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.enemy_max_hp, 50.0);
        assert_eq!(config.reaction_window, ReactionWindow::DEFAULT);
        assert_eq!(config.turn_delay, 0.0);
        assert_eq!(CombatConfig::paced().turn_delay, 0.5);
    }

    #[test]
    fn rejects_contract_violations() {
        let config = CombatConfig::new().with_charge(0.0, Easing::Linear);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "charge_time",
                value: 0.0
            })
        );

        let config = CombatConfig::new().with_damage(-1.0, 10.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "player_damage",
                ..
            })
        ));

        let config = CombatConfig::new().with_reaction_window(ReactionWindow {
            start: 1.0,
            end: 0.5,
        });
        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "TIMING_INVALID_WINDOW");
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
    }
}
