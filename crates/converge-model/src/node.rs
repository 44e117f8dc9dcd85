//! Node state: the target environment a convergence pass runs against.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::recipe::RecipeName;

/// Ordered list of recipe names to expand and converge.
///
/// The run-list is cumulative across convergence passes on the same node;
/// repeats are preserved, nothing is deduplicated here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunList {
    items: Vec<RecipeName>,
}

impl RunList {
    /// Create an empty run-list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a recipe name.
    pub fn push(&mut self, name: RecipeName) {
        self.items.push(name);
    }

    /// Append several recipe names in order.
    pub fn extend(&mut self, names: impl IntoIterator<Item = RecipeName>) {
        self.items.extend(names);
    }

    /// The names in run-list order.
    pub fn as_slice(&self) -> &[RecipeName] {
        &self.items
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the run-list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl std::fmt::Display for RunList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self.items.iter().map(|n| n.qualified()).collect();
        write!(f, "{}", names.join(", "))
    }
}

/// Mutable state representing the target system: a named node with a JSON
/// attribute tree and a cumulative run-list.
///
/// Owned exclusively by the harness; `converge` appends to the run-list,
/// nothing else mutates it mid-pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    name: String,
    attributes: Map<String, Value>,
    run_list: RunList,
}

impl Node {
    /// Create a node with the given name, no attributes, and an empty run-list.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Map::new(),
            run_list: RunList::new(),
        }
    }

    /// The node name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set an attribute at a dotted path (`"app.port"` creates nested
    /// objects as needed). An intermediate non-object value is replaced.
    pub fn set_attribute(&mut self, path: &str, value: Value) {
        let mut segments = path.split('.').peekable();
        let mut current = &mut self.attributes;

        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                current.insert(segment.to_string(), value);
                return;
            }
            let slot = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            match slot.as_object_mut() {
                Some(map) => current = map,
                // unreachable after the is_object guard above
                None => return,
            }
        }
    }

    /// Look up an attribute by dotted path.
    pub fn attribute(&self, path: &str) -> Option<&Value> {
        let mut current: Option<&Value> = None;
        for segment in path.split('.') {
            current = match current {
                None => self.attributes.get(segment),
                Some(value) => value.as_object()?.get(segment),
            };
            current?;
        }
        current
    }

    /// The full attribute tree.
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// The cumulative run-list.
    pub fn run_list(&self) -> &RunList {
        &self.run_list
    }

    /// Mutable access to the run-list (used by the convergence driver).
    pub fn run_list_mut(&mut self) -> &mut RunList {
        &mut self.run_list
    }
}
