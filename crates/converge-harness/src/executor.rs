//! The interception layer: an executor that records instead of acting.

use converge_engine::{ActionExecutor, EngineError};
use converge_model::ResourceDeclaration;
use tracing::info;

use crate::store::RecordingStore;

/// An [`ActionExecutor`] that appends a snapshot of every in-flight resource
/// to a [`RecordingStore`] and never invokes provider logic. The host system
/// is never mutated.
///
/// Constructed per pass over the harness's own store, so interception is
/// instance-scoped: no global dispatch state exists to double-install, and
/// multiple harnesses in one process never see each other's records.
pub struct RecordingExecutor<'a> {
    store: &'a mut RecordingStore,
}

impl<'a> RecordingExecutor<'a> {
    /// Bind a recording executor to the given store for one pass.
    pub fn new(store: &'a mut RecordingStore) -> Self {
        Self { store }
    }
}

impl ActionExecutor for RecordingExecutor<'_> {
    fn execute(&mut self, resource: &ResourceDeclaration) -> Result<(), EngineError> {
        // Provenance is best-effort: logged when the declaration carries it,
        // recording succeeds either way.
        match &resource.declared_at {
            Some(declared_at) => info!(
                resource = %resource,
                declared_at = %declared_at,
                "Recording resource action"
            ),
            None => info!(resource = %resource, "Recording resource action"),
        }
        self.store.append(resource);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use converge_model::{Action, Provenance};

    #[test]
    fn test_executor_records_instead_of_acting() {
        let mut store = RecordingStore::new();
        let decl = ResourceDeclaration::new("file", "/etc/foo", Action::create());

        let mut executor = RecordingExecutor::new(&mut store);
        executor.execute(&decl).expect("execute failed");

        let record = store.find("file", "/etc/foo").expect("not recorded");
        assert_eq!(record.action, Action::create());
        assert_eq!(record.seq, 0);
    }

    #[test]
    fn test_executor_accepts_missing_provenance() {
        let mut store = RecordingStore::new();
        let decl = ResourceDeclaration::new("file", "/no/provenance", Action::delete());
        assert!(decl.declared_at.is_none());

        let mut executor = RecordingExecutor::new(&mut store);
        executor.execute(&decl).expect("interception must not require provenance");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_executor_preserves_provenance() {
        let mut store = RecordingStore::new();
        let decl = ResourceDeclaration::new("directory", "/var/app", Action::create())
            .with_provenance(Provenance {
                recipe: "base::default".to_string(),
                source: None,
                entry: 3,
            });

        let mut executor = RecordingExecutor::new(&mut store);
        executor.execute(&decl).expect("execute failed");

        let record = store.find("directory", "/var/app").expect("not recorded");
        let declared_at = record.declared_at.as_ref().expect("provenance dropped");
        assert_eq!(declared_at.recipe, "base::default");
        assert_eq!(declared_at.entry, 3);
    }
}
