//! The todo collection behind the GraphQL resolvers.
//!
//! # Design
//! Resolvers only see the `TodoStore` trait, so a document database can be
//! plugged in without touching the schema. `MemoryStore` keeps records in
//! insertion order, which is the only ordering `todos` promises. Each call
//! takes the lock once; there is no locking across requests.

use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A stored todo record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub text: String,
    pub complete: bool,
}

/// Result of a mutation addressed to a single record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The record existed and the change was applied.
    Applied,
    /// No record has that id. Nothing changed.
    NotFound,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Every record, in storage order.
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;

    /// Persist a new record with `complete = false` and return it.
    async fn insert(&self, text: String) -> Result<Todo, StoreError>;

    async fn set_complete(&self, id: Uuid, complete: bool) -> Result<Outcome, StoreError>;

    async fn remove(&self, id: Uuid) -> Result<Outcome, StoreError>;
}

/// Store handle shared by every request.
pub type SharedStore = Arc<dyn TodoStore>;

/// In-process store. Cloning shares the underlying collection.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    todos: Arc<RwLock<IndexMap<Uuid, Todo>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = self.todos.read().await;
        Ok(todos.values().cloned().collect())
    }

    async fn insert(&self, text: String) -> Result<Todo, StoreError> {
        let todo = Todo {
            id: Uuid::new_v4(),
            text,
            complete: false,
        };
        self.todos.write().await.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn set_complete(&self, id: Uuid, complete: bool) -> Result<Outcome, StoreError> {
        let mut todos = self.todos.write().await;
        Ok(match todos.get_mut(&id) {
            Some(todo) => {
                todo.complete = complete;
                Outcome::Applied
            }
            None => Outcome::NotFound,
        })
    }

    async fn remove(&self, id: Uuid) -> Result<Outcome, StoreError> {
        let mut todos = self.todos.write().await;
        // shift_remove keeps the remaining records in storage order
        Ok(match todos.shift_remove(&id) {
            Some(_) => Outcome::Applied,
            None => Outcome::NotFound,
        })
    }
}
