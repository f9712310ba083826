//! Error types for generator operations.
//!
//! Every failure here is structural: a capability the algorithm lacks, text
//! that does not describe a valid state, or a tag nobody registered. None of
//! them is transient, so nothing is retried.

use thiserror::Error;

/// Convenience alias for results carrying a [`GeneratorError`].
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Categorised generator errors.
///
/// # Variants
/// - `UnsupportedOperation`: the generator's capability flags exclude the call
/// - `MalformedState`: serialised text has the wrong shape, tag or word count
/// - `UnknownTag`: no prototype is registered for the parsed tag
/// - `InvalidConfig`: a `GeneratorConfig` failed validation
///
/// # Examples
/// ```
/// use prng_core::types::GeneratorError;
///
/// let err = GeneratorError::UnknownTag("ZzzR".to_string());
/// assert_eq!(format!("{}", err), "Unknown generator tag: ZzzR");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// The generator does not implement the requested operation.
    #[error("Operation '{operation}' is not supported by generator {tag}")]
    UnsupportedOperation {
        /// Operation name, e.g. `"skip"`.
        operation: &'static str,
        /// Tag of the refusing generator.
        tag: &'static str,
    },

    /// Serialised state could not be decoded.
    #[error("Malformed state data: {0}")]
    MalformedState(String),

    /// No prototype is registered under this tag.
    #[error("Unknown generator tag: {0}")]
    UnknownTag(String),

    /// Configuration failed validation.
    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),
}

impl GeneratorError {
    /// Builds an `UnsupportedOperation` error.
    #[inline]
    pub fn unsupported(operation: &'static str, tag: &'static str) -> Self {
        Self::UnsupportedOperation { operation, tag }
    }

    /// Returns `true` if the error reports a missing capability.
    #[inline]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedOperation { .. })
    }
}
