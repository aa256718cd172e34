//! Common error infrastructure for duel-core.
//!
//! This module provides shared types and traits used across all error types in
//! duel-core. Domain-specific errors (e.g., `CombatError`, `StatsError`) are
//! defined in their respective modules alongside the operations they guard.
//!
//! # Design Principles
//!
//! - **Never fatal to the driver**: rejected calls return an error value and
//!   leave state untouched, so a per-frame loop can simply log and continue
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Deterministic**: No error carries wall-clock or I/O state

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: Expected during normal play, safe to ignore
/// - **Validation**: The caller issued an action the current phase does not permit
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Contract violations (bad configuration) that prevent an encounter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the request was ignored and nothing changed.
    ///
    /// Examples: a second reaction input during the same charge-up
    Recoverable,

    /// Validation error - invalid request for the current phase.
    ///
    /// Examples: attacking while the enemy is charging, ticking a finished encounter
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - contract violation, the encounter cannot be built.
    ///
    /// Examples: non-positive max HP, zero charge duration
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug or broken contract.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all duel-core errors.
///
/// This trait provides a uniform interface for error classification across
/// all error types in the crate.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait CombatFault: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and for asserting on error kinds in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
