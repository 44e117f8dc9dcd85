//! Error types for the dry-run harness

use converge_engine::EngineError;
use converge_model::ModelError;
use thiserror::Error;

/// Result type for harness operations
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Errors that can abort a convergence pass.
///
/// Lookup misses are not errors: `find` returns `Option`, so tests can
/// assert non-existence without exception-based control flow.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// Resolution or execution failure from the model engine
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A recipe name passed to `converge` failed to parse
    #[error(transparent)]
    Model(#[from] ModelError),
}
