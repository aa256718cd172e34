//! Clamped hit-point pool.

use crate::error::{CombatFault, ErrorSeverity};

/// Errors raised when constructing stats from untrusted values.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error("max hp must be positive and finite (got {0})")]
    NonPositiveMax(f32),
}

impl CombatFault for StatsError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveMax(_) => "STATS_NON_POSITIVE_MAX",
        }
    }
}

/// Current and maximum hit points of one combatant.
///
/// Every mutation clamps `current_hp` into `[0, max_hp]`, so the invariant
/// holds at every observation point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantStats {
    max_hp: f32,
    current_hp: f32,
}

impl CombatantStats {
    /// Creates stats at full health.
    ///
    /// A non-positive `max_hp` is a caller contract violation; it trips a
    /// debug assertion. Use [`CombatantStats::try_new`] for untrusted input.
    pub fn new(max_hp: f32) -> Self {
        debug_assert!(max_hp > 0.0, "max_hp must be positive, got {max_hp}");
        Self {
            max_hp,
            current_hp: max_hp,
        }
    }

    /// Creates stats at full health, rejecting non-positive or non-finite maxima.
    pub fn try_new(max_hp: f32) -> Result<Self, StatsError> {
        if !max_hp.is_finite() || max_hp <= 0.0 {
            return Err(StatsError::NonPositiveMax(max_hp));
        }
        Ok(Self::new(max_hp))
    }

    /// Creates stats with an explicit current value, clamped into range.
    pub fn with_current(max_hp: f32, current_hp: f32) -> Self {
        let mut stats = Self::new(max_hp);
        stats.current_hp = current_hp.clamp(0.0, max_hp);
        stats
    }

    #[inline]
    pub fn max_hp(&self) -> f32 {
        self.max_hp
    }

    #[inline]
    pub fn current_hp(&self) -> f32 {
        self.current_hp
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0.0
    }

    /// Fraction of health remaining, for HP bars.
    pub fn hp_ratio(&self) -> f32 {
        self.current_hp / self.max_hp
    }

    /// Subtracts `amount` and returns whether the combatant is still alive.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        debug_assert!(amount >= 0.0, "damage must be non-negative, got {amount}");
        let amount = amount.max(0.0);
        self.current_hp = (self.current_hp - amount).clamp(0.0, self.max_hp);
        self.is_alive()
    }

    /// Adds `amount`, never exceeding `max_hp`.
    pub fn heal(&mut self, amount: f32) {
        debug_assert!(amount >= 0.0, "heal must be non-negative, got {amount}");
        let amount = amount.max(0.0);
        self.current_hp = (self.current_hp + amount).clamp(0.0, self.max_hp);
    }

    /// Restores full health.
    pub fn reset(&mut self) {
        self.current_hp = self.max_hp;
    }
}
