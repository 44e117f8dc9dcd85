//! Converge declarative resource model
//!
//! Defines the data types shared by the model engine and the dry-run harness:
//! - `ResourceDeclaration`: a typed, named, idempotent statement of intended state
//! - `Action`: the named operation a resource intends (create, delete, ...)
//! - `Recipe` / `RecipeEntry`: an ordered collection of declarations and includes
//! - `RecipeName`: parsed `cookbook::recipe` identifiers (run-list syntax accepted)
//! - `RunList` / `Node`: the target environment a convergence pass runs against
//!
//! All types are serializable; recipe files are plain JSON arrays of entries.

pub mod action;
pub mod digest;
pub mod error;
pub mod node;
pub mod recipe;
pub mod resource;

pub use action::Action;
pub use digest::run_list_digest;
pub use error::{ModelError, Result};
pub use node::{Node, RunList};
pub use recipe::{Recipe, RecipeEntry, RecipeName};
pub use resource::{Provenance, ResourceDeclaration};

/// Converge model version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
