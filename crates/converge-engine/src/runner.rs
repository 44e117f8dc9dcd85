//! Convergence runner and the action-dispatch extension point.

use converge_model::ResourceDeclaration;
use tracing::debug;

use crate::error::EngineError;
use crate::expansion::Expansion;

/// The engine's action-dispatch capability.
///
/// The runner hands every in-flight resource to the executor instead of
/// dispatching to provider logic itself. Supplying an executor is the
/// supported way to intercept dispatch - the dry-run harness records here,
/// a real deployment would mutate the host here.
pub trait ActionExecutor {
    /// Execute (or intercept) one resource's intended action.
    fn execute(&mut self, resource: &ResourceDeclaration) -> Result<(), EngineError>;
}

/// Drives an expansion through an executor in order.
pub struct Runner;

impl Runner {
    /// Dispatch every declaration in the expansion, in expansion order,
    /// exactly once each. Stops at the first executor error.
    pub fn converge(
        expansion: &Expansion,
        executor: &mut dyn ActionExecutor,
    ) -> Result<usize, EngineError> {
        for resource in expansion.resources() {
            debug!(resource = %resource, "Dispatching resource action");
            executor.execute(resource)?;
        }
        Ok(expansion.len())
    }
}
