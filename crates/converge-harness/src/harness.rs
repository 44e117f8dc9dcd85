//! The public harness surface: construct, converge, query.

use std::path::PathBuf;
use std::time::Instant;

use converge_engine::{expand, ModelSource, Runner};
use converge_model::{run_list_digest, Node, RecipeName};
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::error::HarnessError;
use crate::executor::RecordingExecutor;
use crate::store::{RecordedResource, RecordingStore};

/// Summary of one completed convergence pass.
#[derive(Debug, Clone, Serialize)]
pub struct ConvergeSummary {
    /// Unique id of this pass
    pub pass_id: String,

    /// Digest of the ordered recipe names this pass expanded
    pub run_list_digest: String,

    /// Number of resources recorded
    pub resources_recorded: usize,

    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
}

/// Dry-run convergence harness.
///
/// Owns the target node state, the model source, and the recording store.
/// Each `converge` call expands the given recipes and drives them through a
/// [`RecordingExecutor`], so every action is recorded and none is performed.
pub struct DryRunHarness {
    source: ModelSource,
    node: Node,
    store: RecordingStore,
}

impl DryRunHarness {
    /// Default node name for harnesses that don't set one.
    const DEFAULT_NODE_NAME: &'static str = "converge-test-node";

    /// Open a harness against the given model-source directory.
    ///
    /// The path is explicit and required; fails immediately if it is not an
    /// existing directory.
    pub fn new(model_source_path: impl Into<PathBuf>) -> Result<Self, HarnessError> {
        let source = ModelSource::new(model_source_path)?;
        info!(model_source = %source.root().display(), "Opened dry-run harness");
        Ok(Self {
            source,
            node: Node::new(Self::DEFAULT_NODE_NAME),
            store: RecordingStore::new(),
        })
    }

    /// Rename the target node.
    pub fn with_node_name(mut self, name: impl Into<String>) -> Self {
        self.node = Node::new(name);
        self
    }

    /// Set a node attribute at a dotted path.
    pub fn set_attribute(&mut self, path: &str, value: Value) {
        self.node.set_attribute(path, value);
    }

    /// Run one convergence pass over the given recipe names.
    ///
    /// The names are appended to the node's cumulative run-list, but only
    /// THIS call's names are expanded and recorded: the store is reset before
    /// expansion, so queries afterwards reflect exactly this pass. On a
    /// resolution error the pass aborts, the error propagates, and the store
    /// stays empty - recording is all-or-nothing relative to expansion.
    pub fn converge<I, S>(&mut self, recipes: I) -> Result<ConvergeSummary, HarnessError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        self.store.reset();

        let names = recipes
            .into_iter()
            .map(|s| RecipeName::parse(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        self.node.run_list_mut().extend(names.iter().cloned());

        let pass_id = Uuid::new_v4().to_string();
        let digest = run_list_digest(&names);
        let digest_short = &digest[..12];
        info!(
            pass_id = %pass_id,
            run_list_digest = %digest_short,
            node = %self.node.name(),
            "Starting dry-run convergence pass"
        );

        let expansion = expand(&self.source, &names)?;
        let mut executor = RecordingExecutor::new(&mut self.store);
        let resources_recorded = Runner::converge(&expansion, &mut executor)?;

        let duration_ms = start.elapsed().as_millis() as u64;
        info!(
            pass_id = %pass_id,
            resources = resources_recorded,
            duration_ms,
            "Dry-run convergence pass complete"
        );

        Ok(ConvergeSummary {
            pass_id,
            run_list_digest: digest,
            resources_recorded,
            duration_ms,
        })
    }

    /// Find the FIRST resource of the given type and name recorded in the
    /// most recent pass, or `None` if absent.
    ///
    /// Redeclaration of the same (type, name) is legal; first-recorded wins
    /// here, deliberately, for query stability across test runs. (The real
    /// execution engine resolves duplicate declarations last-wins when
    /// merging attributes; a dry run merges nothing, so queries pin the
    /// first occurrence instead.)
    pub fn find(&self, type_name: &str, name: &str) -> Option<&RecordedResource> {
        self.store.find(type_name, name)
    }

    /// Find a `file` resource declared with the given path.
    pub fn file(&self, path: &str) -> Option<&RecordedResource> {
        self.find("file", path)
    }

    /// Find a `directory` resource declared with the given path.
    pub fn directory(&self, path: &str) -> Option<&RecordedResource> {
        self.find("directory", path)
    }

    /// All resources recorded in the most recent pass, in execution order.
    pub fn resources(&self) -> &[RecordedResource] {
        self.store.all()
    }

    /// The target node.
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Mutable access to the target node (environment construction).
    pub fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_rejects_missing_model_source() {
        let result = DryRunHarness::new("/nonexistent/model/source");
        assert!(result.is_err());
    }

    #[test]
    fn test_environment_construction() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let mut harness = DryRunHarness::new(dir.path())
            .expect("open failed")
            .with_node_name("web01");
        harness.set_attribute("app.port", json!(8080));

        assert_eq!(harness.node().name(), "web01");
        assert_eq!(harness.node().attribute("app.port"), Some(&json!(8080)));
        assert!(harness.node().run_list().is_empty());
    }

    #[test]
    fn test_converge_rejects_malformed_recipe_name() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let mut harness = DryRunHarness::new(dir.path()).expect("open failed");

        let result = harness.converge(["not a recipe name"]);
        assert!(matches!(result, Err(HarnessError::Model(_))));
        assert!(harness.resources().is_empty());
    }
}
