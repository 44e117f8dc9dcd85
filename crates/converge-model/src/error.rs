//! Error types for the converge model

use thiserror::Error;

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while building or parsing model types
#[derive(Error, Debug)]
pub enum ModelError {
    /// Action name is empty or contains invalid characters
    #[error("Invalid action name: {0:?}")]
    InvalidAction(String),

    /// Recipe name is empty or malformed
    #[error("Invalid recipe name: {0:?}")]
    InvalidRecipeName(String),

    /// Resource declaration is missing a required field
    #[error("Invalid resource declaration: {0}")]
    InvalidResource(String),
}
