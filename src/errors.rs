// Copyright 2025 Cowboy AI, LLC.

//! Error types for Maybe operations

use thiserror::Error;

/// Errors that can escape a Maybe operation
///
/// Absorbed failures inside a decorated call never surface here; the only
/// loud failure is reaching for the payload of a `Nothing`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaybeError {
    /// Payload access on `Nothing`
    #[error("Attempted to access the value of Nothing")]
    NothingAccessed,
}

/// Result type for payload access
pub type MaybeResult<T> = Result<T, MaybeError>;

/// Why a decorated invocation collapsed to `Nothing` (or to its default)
///
/// The panic payload, error value and warning text are discarded;
/// only the cause and, for warnings, how many were seen are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The wrapped callable panicked or returned `Err`
    #[error("Wrapped call raised")]
    Raised,

    /// Warnings were emitted while warnings were not allowed
    #[error("Wrapped call emitted {count} warning(s)")]
    Warning {
        /// Number of warnings captured during the call
        count: usize,
    },

    /// The ensure predicate did not return literal `true`
    #[error("Ensure predicate rejected the result")]
    Predicate,
}

impl Rejection {
    /// Short, stable label used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            Rejection::Raised => "raised",
            Rejection::Warning { .. } => "warning",
            Rejection::Predicate => "predicate",
        }
    }
}
