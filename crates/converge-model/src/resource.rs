//! Resource declarations and their provenance.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::action::Action;
use crate::error::ModelError;

/// Where a resource declaration was made: recipe name, source file when the
/// declaration was loaded from disk, and the zero-based entry index within
/// the recipe.
///
/// Provenance is best-effort. Declarations constructed in code carry none,
/// and nothing downstream requires it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    /// Qualified recipe name (`cookbook::recipe`)
    pub recipe: String,

    /// Source file the recipe was loaded from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    /// Zero-based entry index within the recipe
    pub entry: usize,
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            Some(path) => write!(f, "{}[{}] ({})", self.recipe, self.entry, path.display()),
            None => write!(f, "{}[{}]", self.recipe, self.entry),
        }
    }
}

/// A single intended state change: a typed, named, idempotent declaration.
///
/// The `type` tag (`file`, `directory`, `package`, ...) is open-ended; what a
/// type means at execution time belongs to providers, which the dry-run
/// harness never invokes. `name` is the resource identifier (a path for
/// filesystem types) and is not enforced unique - redeclaration is legal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDeclaration {
    /// Resource type tag, e.g. "file" or "directory"
    #[serde(rename = "type")]
    pub type_name: String,

    /// Resource identifier, e.g. a filesystem path
    pub name: String,

    /// Intended operation; defaults to `create` when a recipe file omits it
    #[serde(default = "Action::create")]
    pub action: Action,

    /// Opaque resource attributes, carried but never interpreted here
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,

    /// Where this declaration was made, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_at: Option<Provenance>,
}

impl ResourceDeclaration {
    /// Create a declaration with the given type, name and action.
    pub fn new(
        type_name: impl Into<String>,
        name: impl Into<String>,
        action: Action,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            action,
            attributes: Map::new(),
            declared_at: None,
        }
    }

    /// Attach provenance to this declaration.
    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.declared_at = Some(provenance);
        self
    }

    /// Set an attribute on this declaration.
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Validate the declaration has a non-empty type and name.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.type_name.trim().is_empty() {
            return Err(ModelError::InvalidResource(format!(
                "empty resource type for name {:?}",
                self.name
            )));
        }
        if self.name.trim().is_empty() {
            return Err(ModelError::InvalidResource(format!(
                "empty resource name for type {:?}",
                self.type_name
            )));
        }
        Ok(())
    }

    /// Whether this declaration matches the given (type, name) pair.
    pub fn matches(&self, type_name: &str, name: &str) -> bool {
        self.type_name == type_name && self.name == name
    }
}

impl std::fmt::Display for ResourceDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}] action {}", self.type_name, self.name, self.action)
    }
}
