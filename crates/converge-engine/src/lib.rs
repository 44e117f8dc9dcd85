//! Converge configuration-model engine
//!
//! Loads recipes from a model-source directory, expands run-lists into an
//! ordered resource sequence, and drives that sequence through a pluggable
//! [`ActionExecutor`]:
//! - `ModelSource`: resolves `cookbook::recipe` names to recipe files
//! - `expand`: depth-first, include-once run-list expansion
//! - `Runner` + `ActionExecutor`: the action-dispatch extension point
//!
//! The engine ships no side-effecting executor. What a resource type "really
//! does" belongs to providers; callers supply the executor, which is how the
//! dry-run harness intercepts every action without patching any dispatch table.

pub mod error;
pub mod expansion;
pub mod runner;
pub mod source;

pub use error::{EngineError, Result};
pub use expansion::{expand, Expansion};
pub use runner::{ActionExecutor, Runner};
pub use source::ModelSource;
