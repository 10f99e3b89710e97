//! Common error infrastructure for dungeon-core.
//!
//! This module provides shared types and traits used across all error types in dungeon-core.
//! Domain-specific errors (e.g., `TemplateError`, `ChainError`) are defined in their
//! respective modules alongside the code that produces them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each stage has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Deterministic**: Errors carry plain data (seeds, steps, counts), never I/O handles

/// How a caller should react to an error.
///
/// - **Recoverable**: retry from scratch with the next seed
/// - **Validation**: bad input; retrying without changes fails again
/// - **Fatal**: no dungeon can be produced from this request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// A chain step ran out of free directions.
    Recoverable,

    /// Malformed template rows or infeasible partition requests.
    Validation,

    /// Every seed in the retry budget failed.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all dungeon-core errors.
///
/// This trait provides a uniform interface for error classification across
/// all error types in the crate.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, logging, and testing.
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
