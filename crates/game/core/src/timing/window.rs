use crate::error::{CombatFault, ErrorSeverity};

use super::Easing;

/// Errors raised when constructing timing values from untrusted input.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum TimingError {
    #[error("charge duration must be positive and finite (got {0})")]
    NonPositiveDuration(f32),

    #[error("reaction window [{start}, {end}] must satisfy 0 <= start <= end <= 1")]
    InvalidWindow { start: f32, end: f32 },
}

impl CombatFault for TimingError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveDuration(_) => "TIMING_NON_POSITIVE_DURATION",
            Self::InvalidWindow { .. } => "TIMING_INVALID_WINDOW",
        }
    }
}

/// Inclusive progress interval in which a reaction counts.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReactionWindow {
    pub start: f32,
    pub end: f32,
}

impl ReactionWindow {
    /// The last 10% of the fill.
    pub const DEFAULT: Self = Self {
        start: 0.9,
        end: 1.0,
    };

    pub fn new(start: f32, end: f32) -> Result<Self, TimingError> {
        let window = Self { start, end };
        window.validate()?;
        Ok(window)
    }

    pub fn validate(&self) -> Result<(), TimingError> {
        let in_unit = |v: f32| (0.0..=1.0).contains(&v);
        if !in_unit(self.start) || !in_unit(self.end) || self.start > self.end {
            return Err(TimingError::InvalidWindow {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// True iff `progress ∈ [start, end]`, inclusive at both ends.
    #[inline]
    pub fn contains(&self, progress: f32) -> bool {
        progress >= self.start && progress <= self.end
    }
}

impl Default for ReactionWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Fill-over-duration progress for one enemy charge-up.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingWindow {
    elapsed: f32,
    duration: f32,
    easing: Easing,
    progress: f32,
}

impl TimingWindow {
    /// Starts an empty window. `duration` must be positive (debug-asserted).
    pub fn new(duration: f32, easing: Easing) -> Self {
        debug_assert!(duration > 0.0, "duration must be positive, got {duration}");
        Self {
            elapsed: 0.0,
            duration,
            easing,
            progress: 0.0,
        }
    }

    pub fn try_new(duration: f32, easing: Easing) -> Result<Self, TimingError> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(TimingError::NonPositiveDuration(duration));
        }
        Ok(Self::new(duration, easing))
    }

    /// Accumulates `dt` seconds and returns the eased progress.
    pub fn advance(&mut self, dt: f32) -> f32 {
        debug_assert!(dt >= 0.0, "dt must be non-negative, got {dt}");
        self.elapsed += dt.max(0.0);
        self.progress = self
            .easing
            .apply(self.elapsed / self.duration)
            .clamp(0.0, 1.0);
        self.progress
    }

    /// Eased fill in `[0,1]`.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// The charge is complete once accumulated time reaches the duration.
    ///
    /// Checked on raw time so the eased curve's rounding cannot hold the
    /// window open past its duration.
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn in_window(&self, window: ReactionWindow) -> bool {
        window.contains(self.progress)
    }
}
