//! Resource action names.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The named operation a resource declaration intends (e.g. `create`, `delete`).
///
/// The inner field is private to guarantee the name is always a validated,
/// lowercase identifier produced by [`Action::parse`] or deserialization.
/// Actions are open-ended: the model carries them, it does not interpret them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Action(String);

impl Action {
    /// Parse and normalize an action name.
    ///
    /// Names are lowercased; only ASCII alphanumerics and underscores are
    /// accepted. Empty names are rejected.
    pub fn parse(name: &str) -> Result<Self, ModelError> {
        let normalized = name.trim().to_ascii_lowercase();
        if normalized.is_empty()
            || !normalized
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(ModelError::InvalidAction(name.to_string()));
        }
        Ok(Action(normalized))
    }

    /// The `create` action (the default for most resource types).
    pub fn create() -> Self {
        Action("create".to_string())
    }

    /// The `delete` action.
    pub fn delete() -> Self {
        Action("delete".to_string())
    }

    /// The `nothing` action (declared but not intended to run).
    pub fn nothing() -> Self {
        Action("nothing".to_string())
    }

    /// Return the action name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Action {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Action::parse(&s)
    }
}

impl From<Action> for String {
    fn from(action: Action) -> String {
        action.0
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
