//! Model-source resolution and recipe loading.

use std::path::{Path, PathBuf};

use converge_model::{Provenance, Recipe, RecipeEntry, RecipeName};
use tracing::debug;

use crate::error::EngineError;

/// A model-source directory holding cookbooks.
///
/// Layout: `<root>/<cookbook>/<recipe>.json`, one JSON array of recipe
/// entries per file. `base` resolves to `<root>/base/default.json`.
#[derive(Debug, Clone)]
pub struct ModelSource {
    root: PathBuf,
}

impl ModelSource {
    /// Open a model source rooted at the given directory.
    ///
    /// Fails with [`EngineError::ModelSourceNotFound`] if the path is not an
    /// existing directory; resolution errors are never deferred to converge
    /// time when the whole source is missing.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, EngineError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(EngineError::ModelSourceNotFound(root));
        }
        Ok(Self { root })
    }

    /// The model-source root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The file a recipe name resolves to.
    pub fn recipe_path(&self, name: &RecipeName) -> PathBuf {
        self.root
            .join(name.cookbook())
            .join(format!("{}.json", name.recipe()))
    }

    /// Load and validate a recipe, stamping provenance on every declaration.
    ///
    /// Fails with [`EngineError::UnknownRecipe`] when no recipe file exists
    /// at the resolved path.
    pub fn load_recipe(&self, name: &RecipeName) -> Result<Recipe, EngineError> {
        let path = self.recipe_path(name);
        if !path.is_file() {
            return Err(EngineError::UnknownRecipe {
                name: name.qualified(),
                path,
            });
        }

        let raw = std::fs::read_to_string(&path).map_err(|source| EngineError::RecipeRead {
            name: name.qualified(),
            path: path.clone(),
            source,
        })?;

        let mut entries: Vec<RecipeEntry> =
            serde_json::from_str(&raw).map_err(|source| EngineError::RecipeParse {
                name: name.qualified(),
                path: path.clone(),
                source,
            })?;

        for (index, entry) in entries.iter_mut().enumerate() {
            if let RecipeEntry::Resource(decl) = entry {
                decl.validate()?;
                decl.declared_at = Some(Provenance {
                    recipe: name.qualified(),
                    source: Some(path.clone()),
                    entry: index,
                });
            }
        }

        debug!(
            recipe = %name,
            path = %path.display(),
            entries = entries.len(),
            "Loaded recipe"
        );

        Ok(Recipe {
            name: name.clone(),
            entries,
        })
    }
}
