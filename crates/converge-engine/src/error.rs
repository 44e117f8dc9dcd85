//! Error types for the converge engine

use converge_model::ModelError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur during model loading, expansion, or execution
#[derive(Error, Debug)]
pub enum EngineError {
    /// Model-source root does not exist or is not a directory
    #[error("Model source not found: {0}")]
    ModelSourceNotFound(PathBuf),

    /// A run-list or include names a recipe with no recipe file
    #[error("Unknown recipe {name}: no recipe file at {path}")]
    UnknownRecipe {
        /// Qualified recipe name
        name: String,
        /// The path that was probed
        path: PathBuf,
    },

    /// Recipe file exists but could not be read
    #[error("Failed to read recipe {name} from {path}")]
    RecipeRead {
        /// Qualified recipe name
        name: String,
        /// Recipe file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Recipe file is not valid JSON or not a valid entry list
    #[error("Invalid recipe {name} at {path}")]
    RecipeParse {
        /// Qualified recipe name
        name: String,
        /// Recipe file path
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A loaded declaration failed model validation
    #[error(transparent)]
    Model(#[from] ModelError),

    /// An executor refused or failed a resource action
    #[error("Action execution failed for {resource}: {reason}")]
    ExecutionFailed {
        /// Display form of the resource
        resource: String,
        /// Executor-supplied reason
        reason: String,
    },
}
