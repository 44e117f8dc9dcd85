//! Recipes: named, ordered collections of resource declarations.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::resource::ResourceDeclaration;

/// Parsed recipe identifier.
///
/// Accepts three spellings:
/// - `cookbook` - shorthand for the cookbook's `default` recipe
/// - `cookbook::recipe` - fully qualified
/// - `recipe[cookbook::recipe]` - run-list wrapper syntax
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecipeName {
    cookbook: String,
    recipe: String,
}

impl RecipeName {
    /// Parse a recipe name from any of the accepted spellings.
    pub fn parse(name: &str) -> Result<Self, ModelError> {
        let trimmed = name.trim();

        // Unwrap run-list syntax: recipe[cookbook::recipe]
        let inner = match trimmed.strip_prefix("recipe[") {
            Some(rest) => rest
                .strip_suffix(']')
                .ok_or_else(|| ModelError::InvalidRecipeName(name.to_string()))?,
            None => trimmed,
        };

        let (cookbook, recipe) = match inner.split_once("::") {
            Some((cookbook, recipe)) => (cookbook, recipe),
            None => (inner, "default"),
        };

        if !is_valid_segment(cookbook) || !is_valid_segment(recipe) {
            return Err(ModelError::InvalidRecipeName(name.to_string()));
        }

        Ok(RecipeName {
            cookbook: cookbook.to_string(),
            recipe: recipe.to_string(),
        })
    }

    /// The cookbook part of the name.
    pub fn cookbook(&self) -> &str {
        &self.cookbook
    }

    /// The recipe part of the name.
    pub fn recipe(&self) -> &str {
        &self.recipe
    }

    /// The fully qualified `cookbook::recipe` form.
    pub fn qualified(&self) -> String {
        format!("{}::{}", self.cookbook, self.recipe)
    }
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl TryFrom<String> for RecipeName {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        RecipeName::parse(&s)
    }
}

impl From<RecipeName> for String {
    fn from(name: RecipeName) -> String {
        name.qualified()
    }
}

impl std::fmt::Display for RecipeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}", self.cookbook, self.recipe)
    }
}

/// One entry in a recipe file: either a resource declaration or an include
/// directive that splices another recipe's entries at this point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeEntry {
    /// Splice another recipe into the expansion at this position
    Include {
        /// The recipe to include
        include: RecipeName,
    },

    /// A resource declaration
    Resource(ResourceDeclaration),
}

/// A loaded recipe: the name it was resolved as plus its ordered entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    /// The name this recipe was loaded as
    pub name: RecipeName,

    /// Ordered entries, includes interleaved with declarations
    pub entries: Vec<RecipeEntry>,
}

impl Recipe {
    /// Number of resource declarations (excluding includes).
    pub fn resource_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, RecipeEntry::Resource(_)))
            .count()
    }
}
