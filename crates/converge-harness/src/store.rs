//! The recording store: ordered results of one convergence pass.

use chrono::{DateTime, Utc};
use converge_model::{Action, Provenance, ResourceDeclaration};
use serde::Serialize;

/// Snapshot of a resource taken at interception time.
///
/// Immutable once recorded. `seq` is the zero-based recording order, which
/// equals the order the engine fired actions during the pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedResource {
    /// Zero-based recording order within the pass
    pub seq: u64,

    /// Resource type tag
    #[serde(rename = "type")]
    pub type_name: String,

    /// Resource identifier
    pub name: String,

    /// The action that would have run
    pub action: Action,

    /// Where the resource was declared, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_at: Option<Provenance>,

    /// When the interception happened
    pub recorded_at: DateTime<Utc>,
}

impl RecordedResource {
    /// Whether this record matches the given (type, name) pair.
    pub fn matches(&self, type_name: &str, name: &str) -> bool {
        self.type_name == type_name && self.name == name
    }
}

impl std::fmt::Display for RecordedResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}] action {}", self.type_name, self.name, self.action)
    }
}

/// Ordered, mutable collection of every resource intercepted during the most
/// recent convergence pass.
///
/// Reset at the start of every pass: a query reflects only the latest pass,
/// never accumulated history.
#[derive(Debug, Default)]
pub struct RecordingStore {
    records: Vec<RecordedResource>,
}

impl RecordingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all records. Called at the start of every convergence pass.
    pub fn reset(&mut self) {
        self.records.clear();
    }

    /// Append a snapshot of the declaration, returning its sequence number.
    pub fn append(&mut self, decl: &ResourceDeclaration) -> u64 {
        let seq = self.records.len() as u64;
        self.records.push(RecordedResource {
            seq,
            type_name: decl.type_name.clone(),
            name: decl.name.clone(),
            action: decl.action.clone(),
            declared_at: decl.declared_at.clone(),
            recorded_at: Utc::now(),
        });
        seq
    }

    /// Read-only ordered view of all records.
    pub fn all(&self) -> &[RecordedResource] {
        &self.records
    }

    /// The FIRST record matching (type, name), in recording order.
    ///
    /// Redeclaration is legal, so multiple records may match; the first one
    /// recorded wins. Returns `None` for absence - never an error.
    pub fn find(&self, type_name: &str, name: &str) -> Option<&RecordedResource> {
        self.records.iter().find(|r| r.matches(type_name, name))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(type_name: &str, name: &str, action: Action) -> ResourceDeclaration {
        ResourceDeclaration::new(type_name, name, action)
    }

    #[test]
    fn test_append_assigns_sequential_seq() {
        let mut store = RecordingStore::new();
        let a = store.append(&decl("file", "/a", Action::create()));
        let b = store.append(&decl("file", "/b", Action::create()));
        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_reset_clears_records() {
        let mut store = RecordingStore::new();
        store.append(&decl("file", "/a", Action::create()));
        store.reset();
        assert!(store.is_empty());
        assert!(store.find("file", "/a").is_none());

        // seq restarts from zero after a reset
        let seq = store.append(&decl("file", "/b", Action::create()));
        assert_eq!(seq, 0);
    }

    #[test]
    fn test_find_first_match_wins() {
        let mut store = RecordingStore::new();
        store.append(&decl("file", "/etc/foo", Action::create()));
        store.append(&decl("file", "/etc/foo", Action::delete()));

        let found = store.find("file", "/etc/foo").expect("not found");
        assert_eq!(found.seq, 0);
        assert_eq!(found.action, Action::create());
    }

    #[test]
    fn test_find_distinguishes_type() {
        let mut store = RecordingStore::new();
        store.append(&decl("directory", "/var/app", Action::create()));

        assert!(store.find("directory", "/var/app").is_some());
        assert!(store.find("file", "/var/app").is_none());
    }

    #[test]
    fn test_all_preserves_insertion_order() {
        let mut store = RecordingStore::new();
        store.append(&decl("directory", "/var/app", Action::create()));
        store.append(&decl("file", "/var/app/a", Action::create()));
        store.append(&decl("file", "/var/app/b", Action::delete()));

        let names: Vec<&str> = store.all().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["/var/app", "/var/app/a", "/var/app/b"]);
    }
}
