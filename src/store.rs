use std::path::PathBuf;

use chrono::Utc;

use crate::io::gateway;
use crate::model::{Todo, clamp_text};

/// Pending/completed tallies for the filter bar and CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

/// Owns the canonical todo collection.
///
/// The vector is private: every mutation goes through the operations below,
/// and each one writes the full collection back to disk before returning.
/// New todos are prepended (most-recent-first); toggle and edit never
/// reorder; delete removes without reordering the remainder.
pub struct TodoStore {
    dir: PathBuf,
    todos: Vec<Todo>,
}

impl TodoStore {
    /// Open the store backed by `dir/todos.json`.
    /// Missing or corrupt data starts the store empty.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let todos = gateway::load(&dir);
        TodoStore { dir, todos }
    }

    /// Ordered read-only view of the collection
    pub fn all(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: i64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn counts(&self) -> Counts {
        let completed = self.todos.iter().filter(|t| t.completed).count();
        Counts {
            total: self.todos.len(),
            pending: self.todos.len() - completed,
            completed,
        }
    }

    // -----------------------------------------------------------------------
    // Mutations (each persists before returning)
    // -----------------------------------------------------------------------

    /// Add a new todo at the front and return its id.
    /// Whitespace-only text is silently discarded.
    pub fn add(&mut self, text: &str) -> Option<i64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id();
        self.todos.insert(0, Todo::new(id, clamp_text(text).to_string()));
        self.persist();
        Some(id)
    }

    /// Flip the completed flag. Returns false if the id is absent.
    pub fn toggle(&mut self, id: i64) -> bool {
        let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        todo.completed = !todo.completed;
        self.persist();
        true
    }

    /// Replace a todo's text with the trimmed value.
    /// An empty trimmed value leaves the todo unchanged (the edit is
    /// discarded, not cleared). Returns false when nothing changed.
    pub fn edit(&mut self, id: i64, new_text: &str) -> bool {
        let trimmed = new_text.trim();
        if trimmed.is_empty() {
            return false;
        }
        let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        todo.text = clamp_text(trimmed).to_string();
        self.persist();
        true
    }

    /// Remove a todo permanently. Returns false if the id is absent.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        let removed = self.todos.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Millisecond timestamp, bumped past any existing id so two adds in
    /// the same millisecond stay distinguishable
    fn next_id(&self) -> i64 {
        let mut id = Utc::now().timestamp_millis();
        while self.todos.iter().any(|t| t.id == id) {
            id += 1;
        }
        id
    }

    // Fire-and-forget full-state write; the interaction layer has no
    // user-visible error channel (failures degrade to an unsaved session).
    fn persist(&self) {
        let _ = gateway::save(&self.dir, &self.todos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn open_store() -> (TempDir, TodoStore) {
        let dir = TempDir::new().unwrap();
        let store = TodoStore::open(dir.path());
        (dir, store)
    }

    #[test]
    fn add_trims_and_prepends() {
        let (_dir, mut store) = open_store();
        store.add("first").unwrap();
        store.add("  second  ").unwrap();

        let texts: Vec<&str> = store.all().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["second", "first"]);
        assert!(store.all().iter().all(|t| !t.completed));
    }

    #[test]
    fn add_whitespace_only_is_a_no_op() {
        let (_dir, mut store) = open_store();
        store.add("Buy milk").unwrap();
        assert_eq!(store.add("   "), None);
        assert_eq!(store.add(""), None);
        assert_eq!(store.add("\t\n"), None);
        assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn add_clamps_overlong_text() {
        let (_dir, mut store) = open_store();
        let id = store.add(&"x".repeat(500)).unwrap();
        assert_eq!(store.get(id).unwrap().text.chars().count(), 100);
    }

    #[test]
    fn ids_are_unique_within_one_millisecond() {
        let (_dir, mut store) = open_store();
        let a = store.add("a").unwrap();
        let b = store.add("b").unwrap();
        let c = store.add("c").unwrap();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn toggle_twice_is_identity() {
        let (_dir, mut store) = open_store();
        let id = store.add("task").unwrap();
        assert!(store.toggle(id));
        assert!(store.get(id).unwrap().completed);
        assert!(store.toggle(id));
        assert!(!store.get(id).unwrap().completed);
    }

    #[test]
    fn toggle_missing_id_is_a_no_op() {
        let (_dir, mut store) = open_store();
        store.add("task").unwrap();
        assert!(!store.toggle(999));
        assert!(!store.all()[0].completed);
    }

    #[test]
    fn edit_replaces_with_trimmed_text() {
        let (_dir, mut store) = open_store();
        let id = store.add("Old").unwrap();
        assert!(store.edit(id, "  New  "));
        assert_eq!(store.get(id).unwrap().text, "New");
    }

    #[test]
    fn edit_with_empty_text_keeps_prior_text() {
        let (_dir, mut store) = open_store();
        let id = store.add("Old").unwrap();
        assert!(!store.edit(id, "   "));
        assert_eq!(store.get(id).unwrap().text, "Old");
    }

    #[test]
    fn edit_never_changes_created_at_or_order() {
        let (_dir, mut store) = open_store();
        let first = store.add("first").unwrap();
        let second = store.add("second").unwrap();
        let stamp = store.get(first).unwrap().created_at.clone();

        store.edit(first, "renamed");
        assert_eq!(store.get(first).unwrap().created_at, stamp);
        let ids: Vec<i64> = store.all().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[test]
    fn delete_removes_without_reordering() {
        let (_dir, mut store) = open_store();
        let a = store.add("a").unwrap();
        let b = store.add("b").unwrap();
        let c = store.add("c").unwrap();

        assert!(store.delete(b));
        let ids: Vec<i64> = store.all().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![c, a]);
        assert!(!store.delete(b));
    }

    #[test]
    fn counts_partition_by_completed() {
        let (_dir, mut store) = open_store();
        let a = store.add("a").unwrap();
        store.add("b").unwrap();
        store.toggle(a);

        let counts = store.counts();
        assert_eq!(counts.total, 2);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.completed, 1);
    }

    #[test]
    fn mutations_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let id = {
            let mut store = TodoStore::open(dir.path());
            let id = store.add("persisted").unwrap();
            store.toggle(id);
            id
        };

        let reopened = TodoStore::open(dir.path());
        assert_eq!(reopened.all().len(), 1);
        let todo = reopened.get(id).unwrap();
        assert_eq!(todo.text, "persisted");
        assert!(todo.completed);
    }

    #[test]
    fn scenario_add_then_blank_add() {
        let (_dir, mut store) = open_store();
        store.add("Buy milk").unwrap();
        assert_eq!(store.all()[0].text, "Buy milk");
        assert!(!store.all()[0].completed);

        store.add("  ");
        assert_eq!(store.all().len(), 1);
    }
}
