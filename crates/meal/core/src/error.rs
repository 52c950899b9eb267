//! Common error infrastructure for meal-core.
//!
//! Domain-specific errors (e.g., `BattleError`, `RandomError`) are defined in
//! their respective modules next to the operations that raise them. This
//! module only provides the shared classification used by all of them.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: transient conditions, the same call may succeed on retry
/// - **Validation**: invalid input, should not be retried without changes
/// - **Internal**: unexpected backend failure that needs investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - retrying the same operation may succeed.
    ///
    /// Examples: random.org unreachable, request timed out
    Recoverable,

    /// Validation error - invalid input or state for the requested operation.
    ///
    /// Examples: third combatant prepped, meal not found
    Validation,

    /// Internal error - storage or protocol failure.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all meal-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait DomainError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log filtering and for asserting on variants in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
