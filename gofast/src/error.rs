//! Error types for schema resolution and code generation.
//!
//! Every error aborts the generation pass; there is no partial output.

use thiserror::Error;

/// Result type alias for generation operations.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Error raised while loading, resolving or emitting a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The schema source is not valid against the expected shape.
    #[error("Invalid schema at line {line}, column {column}: {message}")]
    SchemaParse {
        message: String,
        line: usize,
        column: usize,
    },

    /// A dotted path does not name a known record or field.
    #[error("Unable to find struct field for path '{path}'")]
    NotFound { path: String },

    /// A symbolic expression handler failed.
    #[error("Failed to resolve expression '{expr}': {message}")]
    Resolution { expr: String, message: String },

    /// A method references a receiver with an empty record name.
    #[error("Method '{method}' has an empty receiver name")]
    EmptyReceiver { method: String },
}

impl GenerateError {
    /// Create a not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a resolution error.
    pub fn resolution(expr: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Resolution {
            expr: expr.into(),
            message: message.into(),
        }
    }

    /// Check whether this error came from a failed path lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<serde_json::Error> for GenerateError {
    fn from(err: serde_json::Error) -> Self {
        Self::SchemaParse {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}
