//! Error types for the orrery engine and the simulations built on it.
//!
//! Everything here is a start-up failure: configuration tables are parsed
//! once, bodies are registered once. Nothing is recovered at runtime.

use thiserror::Error;

/// Result type alias for orrery operations.
pub type OrreryResult<T> = Result<T, OrreryError>;

#[derive(Debug, Error)]
pub enum OrreryError {
    /// Embedded or supplied JSON configuration failed to parse.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// A color string was not of the form `#rrggbb`.
    #[error("invalid color '{value}': expected #rrggbb")]
    InvalidColor { value: String },

    /// A body with this name is already registered.
    #[error("body '{name}' is already registered")]
    DuplicateBody { name: String },

    /// No body with this name is registered.
    #[error("unknown body '{name}'")]
    UnknownBody { name: String },
}
