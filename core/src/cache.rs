//! Local copy of the `todos` query result.
//!
//! # Design
//! Entries are normalized by id, so a mutation result patches exactly one
//! entity instead of rewriting the whole list. Insertion order is kept so the
//! list view matches the order the server returned. Patches are applied only
//! after the server confirmed the mutation; nothing here is optimistic.

use indexmap::IndexMap;
use tracing::debug;
use uuid::Uuid;

use crate::types::{MutationOutcome, Todo};

#[derive(Debug, Clone, Default)]
pub struct TodoCache {
    entries: IndexMap<Uuid, Todo>,
    loaded: bool,
}

impl TodoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a full `todos` result has been installed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Todo> {
        self.entries.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Todo> {
        self.entries.values()
    }

    /// The cached list, in order.
    pub fn todos(&self) -> Vec<Todo> {
        self.entries.values().cloned().collect()
    }

    /// Install a full `todos` result, dropping whatever was cached before.
    pub fn replace(&mut self, todos: Vec<Todo>) {
        self.entries = todos.into_iter().map(|todo| (todo.id, todo)).collect();
        self.loaded = true;
        debug!(count = self.entries.len(), "cache replaced");
    }

    /// Append a created todo. An id already present is overwritten in place,
    /// so a repeated write never duplicates the entry.
    pub fn apply_created(&mut self, todo: Todo) {
        debug!(id = %todo.id, "cache: created");
        self.entries.insert(todo.id, todo);
    }

    /// Patch one entry after `updateTodo`. The server reporting `NotFound`
    /// means the todo is gone, so the stale entry is evicted.
    pub fn apply_updated(&mut self, id: Uuid, complete: bool, outcome: MutationOutcome) {
        match outcome {
            MutationOutcome::Applied => {
                if let Some(todo) = self.entries.get_mut(&id) {
                    todo.complete = complete;
                    debug!(%id, complete, "cache: updated");
                }
            }
            MutationOutcome::NotFound => self.apply_removed(id),
        }
    }

    /// Evict one entry. Unknown ids are ignored.
    pub fn apply_removed(&mut self, id: Uuid) {
        if self.entries.shift_remove(&id).is_some() {
            debug!(%id, "cache: removed");
        }
    }
}
