//! Common error infrastructure for bulk-core.
//!
//! This module provides shared types and traits used across all error types in bulk-core.
//! Domain-specific errors (e.g., `BulkError`, `ContainerError`) are defined in their
//! respective modules alongside the computations they guard.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each subsystem has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **No Partial Results**: A computation either returns a full result or an error
//!
//! Unparseable weight text is not an error: the parser returns
//! `None` and callers substitute a negligible value.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Fatal**: Configuration or data errors the engine cannot compute around
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: assigning a container that would create a cycle, unknown item id
    Validation,

    /// Fatal error - the supplied configuration cannot describe the inventory.
    ///
    /// Examples: item references a stack group missing from the stack table
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates a configuration or data bug.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all bulk-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait InventoryError: core::fmt::Display + core::fmt::Debug {
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

/// Errors raised while computing Bulk.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BulkError {
    /// An item names a stack group that has no entry in the stack table.
    #[error("no stack definition found for stack group '{0}'")]
    UnknownStackGroup(String),
}

impl InventoryError for BulkError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            BulkError::UnknownStackGroup(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            BulkError::UnknownStackGroup(_) => "BULK_UNKNOWN_STACK_GROUP",
        }
    }
}

/// Common result type for Bulk computations.
pub type BulkResult<T> = Result<T, BulkError>;
