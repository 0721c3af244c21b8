//! Common error infrastructure for realm-core.
//!
//! Domain-specific errors (`AuthorityError`, `DefinitionError`, `RegistryError`)
//! live next to the types they validate. This module holds the shared
//! classification used by callers to decide how to react to them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each module has its own error enum with specific variants
//! - **Fail Fast**: Bad static data aborts loading; lookups never fall back to defaults
//! - **Severity Classification**: Errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid input at a call site; the caller decides how to proceed
/// - **Fatal**: Corrupt or mismatched static data; startup must abort
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: lookup of an item id that has no equipment definition
    Validation,

    /// Fatal error - static configuration is corrupt, cannot continue.
    ///
    /// Examples: requirement naming an unknown skill, external rank out of range
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

    /// Returns true if loading or startup must be aborted.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all realm-core errors.
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
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
