//! Error types for GL state bindings

use thiserror::Error;

/// Errors surfaced by the binding layer
///
/// All of these are programmer errors: the call is rejected before any GPU
/// state is touched and nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GlError {
    /// A value is outside the range its enum or limit declares
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A uniform value has the wrong number of components, rows or elements
    #[error("Shape mismatch for `{uniform}`: expected {expected}, got {found}")]
    ShapeMismatch {
        /// Uniform being set
        uniform: String,
        /// Accepted shape(s)
        expected: String,
        /// Shape that was passed
        found: String,
    },

    /// No context is current on the calling thread
    #[error("No GL context is current on this thread")]
    ContextMissing,

    /// The current context is already borrowed further up the call stack
    #[error("The current GL context is already in use")]
    ContextBusy,

    /// A uniform exists only when the shader was created with a given flag
    #[error("`{uniform}` requires the shader to be created with {flag}")]
    MissingFlag {
        /// Uniform being set
        uniform: String,
        /// Flag the shader lacks
        flag: String,
    },

    /// The program handle does not belong to the current context
    #[error("Program does not exist in the current GL context")]
    InvalidProgram,
}

impl GlError {
    /// Build a [`GlError::ShapeMismatch`]
    pub fn shape(uniform: &str, expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            uniform: uniform.to_string(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Build a [`GlError::MissingFlag`]
    pub fn missing_flag(uniform: &str, flag: impl std::fmt::Debug) -> Self {
        Self::MissingFlag {
            uniform: uniform.to_string(),
            flag: format!("{flag:?}"),
        }
    }
}

/// Result type for GL binding operations
pub type GlResult<T> = Result<T, GlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_message() {
        let err = GlError::shape("light_positions", "1 element", "2 elements");
        assert_eq!(
            err.to_string(),
            "Shape mismatch for `light_positions`: expected 1 element, got 2 elements"
        );
    }

    #[test]
    fn test_context_missing_message() {
        assert_eq!(GlError::ContextMissing.to_string(), "No GL context is current on this thread");
    }
}
