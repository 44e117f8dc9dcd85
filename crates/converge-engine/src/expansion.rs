//! Run-list expansion: recipes to an ordered resource sequence.

use converge_model::{RecipeEntry, RecipeName, ResourceDeclaration};
use tracing::debug;

use crate::error::EngineError;
use crate::source::ModelSource;

/// The ordered result of expanding a run-list.
///
/// Expansion order is execution order: nothing downstream re-sorts.
#[derive(Debug, Clone, Default)]
pub struct Expansion {
    resources: Vec<ResourceDeclaration>,
    expanded: Vec<RecipeName>,
}

impl Expansion {
    /// The declarations in execution order.
    pub fn resources(&self) -> &[ResourceDeclaration] {
        &self.resources
    }

    /// Consume the expansion, yielding the ordered declarations.
    pub fn into_resources(self) -> Vec<ResourceDeclaration> {
        self.resources
    }

    /// Every recipe that was expanded, in first-seen order.
    pub fn expanded_recipes(&self) -> &[RecipeName] {
        &self.expanded
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the expansion produced no declarations.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

/// Expand a run-list into an ordered resource sequence.
///
/// Depth-first splice: each recipe's entries are walked in order and
/// `include` directives expand in place, so an included recipe's resources
/// appear exactly where the include was declared. A recipe already expanded
/// earlier in the same pass is skipped (include-once), which also terminates
/// include cycles. An unknown recipe anywhere in the graph aborts the whole
/// expansion.
pub fn expand(source: &ModelSource, run_list: &[RecipeName]) -> Result<Expansion, EngineError> {
    let mut expansion = Expansion::default();
    for name in run_list {
        expand_recipe(source, name, &mut expansion)?;
    }
    debug!(
        recipes = expansion.expanded.len(),
        resources = expansion.resources.len(),
        "Run-list expansion complete"
    );
    Ok(expansion)
}

fn expand_recipe(
    source: &ModelSource,
    name: &RecipeName,
    expansion: &mut Expansion,
) -> Result<(), EngineError> {
    if expansion.expanded.contains(name) {
        debug!(recipe = %name, "Skipping already-expanded recipe");
        return Ok(());
    }
    expansion.expanded.push(name.clone());

    let recipe = source.load_recipe(name)?;
    for entry in recipe.entries {
        match entry {
            RecipeEntry::Include { include } => expand_recipe(source, &include, expansion)?,
            RecipeEntry::Resource(decl) => expansion.resources.push(decl),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_recipe(root: &Path, cookbook: &str, recipe: &str, body: &str) {
        let dir = root.join(cookbook);
        std::fs::create_dir_all(&dir).expect("mkdir failed");
        std::fs::write(dir.join(format!("{recipe}.json")), body).expect("write failed");
    }

    fn names(raw: &[&str]) -> Vec<RecipeName> {
        raw.iter()
            .map(|n| RecipeName::parse(n).expect("parse failed"))
            .collect()
    }

    #[test]
    fn test_expand_single_recipe_preserves_order() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        write_recipe(
            dir.path(),
            "base",
            "default",
            r#"[
                {"type": "directory", "name": "/var/app"},
                {"type": "file", "name": "/var/app/a"},
                {"type": "file", "name": "/var/app/b"}
            ]"#,
        );

        let source = ModelSource::new(dir.path()).expect("open failed");
        let expansion = expand(&source, &names(&["base"])).expect("expand failed");

        let order: Vec<&str> = expansion.resources().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["/var/app", "/var/app/a", "/var/app/b"]);
    }

    #[test]
    fn test_expand_splices_include_in_place() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        write_recipe(
            dir.path(),
            "app",
            "default",
            r#"[
                {"type": "file", "name": "/before"},
                {"include": "base"},
                {"type": "file", "name": "/after"}
            ]"#,
        );
        write_recipe(
            dir.path(),
            "base",
            "default",
            r#"[{"type": "directory", "name": "/included"}]"#,
        );

        let source = ModelSource::new(dir.path()).expect("open failed");
        let expansion = expand(&source, &names(&["app"])).expect("expand failed");

        let order: Vec<&str> = expansion.resources().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["/before", "/included", "/after"]);
        assert_eq!(expansion.expanded_recipes().len(), 2);
    }

    #[test]
    fn test_expand_includes_each_recipe_once() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        write_recipe(
            dir.path(),
            "app",
            "default",
            r#"[{"include": "base"}, {"include": "base"}]"#,
        );
        write_recipe(
            dir.path(),
            "base",
            "default",
            r#"[{"type": "directory", "name": "/once"}]"#,
        );

        let source = ModelSource::new(dir.path()).expect("open failed");
        let expansion = expand(&source, &names(&["app", "base"])).expect("expand failed");

        assert_eq!(expansion.len(), 1, "base must expand exactly once");
    }

    #[test]
    fn test_expand_terminates_on_include_cycle() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        write_recipe(
            dir.path(),
            "a",
            "default",
            r#"[{"type": "file", "name": "/a"}, {"include": "b"}]"#,
        );
        write_recipe(
            dir.path(),
            "b",
            "default",
            r#"[{"type": "file", "name": "/b"}, {"include": "a"}]"#,
        );

        let source = ModelSource::new(dir.path()).expect("open failed");
        let expansion = expand(&source, &names(&["a"])).expect("expand failed");

        let order: Vec<&str> = expansion.resources().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["/a", "/b"]);
    }

    #[test]
    fn test_expand_propagates_unknown_recipe() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        write_recipe(
            dir.path(),
            "app",
            "default",
            r#"[{"include": "missing_recipe"}]"#,
        );

        let source = ModelSource::new(dir.path()).expect("open failed");
        let result = expand(&source, &names(&["app"]));
        assert!(matches!(result, Err(EngineError::UnknownRecipe { .. })));
    }
}
