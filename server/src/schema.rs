//! GraphQL schema and resolvers.
//!
//! Each resolver wraps one store call. Bad input and store failures come back
//! as GraphQL errors tagged with an `extensions.code`; an unknown id is not an
//! error, the mutation just reports `false`.

use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, Object, Result, Schema, ID,
};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::store::{Outcome, SharedStore, StoreError, Todo};

pub type TodoSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Error code attached to input validation failures.
pub const BAD_USER_INPUT: &str = "BAD_USER_INPUT";

/// Error code attached to storage failures.
pub const INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";

pub fn build(store: SharedStore) -> TodoSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

#[derive(Debug, Error)]
pub enum GqlError {
    #[error("{0}")]
    BadInput(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ErrorExtensions for GqlError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| match self {
            GqlError::BadInput(_) => e.set("code", BAD_USER_INPUT),
            GqlError::Store(_) => e.set("code", INTERNAL_SERVER_ERROR),
        })
    }
}

fn store_failure(err: StoreError) -> async_graphql::Error {
    error!(%err, "store call failed");
    GqlError::from(err).extend()
}

fn parse_id(id: &ID) -> Result<Uuid> {
    Uuid::parse_str(id.as_str()).map_err(|_| {
        warn!(id = id.as_str(), "rejected malformed todo id");
        GqlError::BadInput(format!("malformed todo id `{}`", id.as_str())).extend()
    })
}

#[Object]
impl Todo {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    async fn text(&self) -> &str {
        &self.text
    }

    async fn complete(&self) -> bool {
        self.complete
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every stored todo, in storage order.
    async fn todos(&self, ctx: &Context<'_>) -> Result<Vec<Todo>> {
        let store = ctx.data::<SharedStore>()?;
        store.list().await.map_err(store_failure)
    }

    async fn hello(&self, name: Option<String>) -> String {
        let name = name.filter(|n| !n.is_empty());
        format!("Hello {}", name.as_deref().unwrap_or("World"))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Persist a new todo. `complete` always starts out false.
    async fn create_todo(&self, ctx: &Context<'_>, text: String) -> Result<Todo> {
        if text.trim().is_empty() {
            warn!("rejected todo with empty text");
            return Err(GqlError::BadInput("todo text must not be empty".to_string()).extend());
        }
        let store = ctx.data::<SharedStore>()?;
        let todo = store.insert(text).await.map_err(store_failure)?;
        info!(id = %todo.id, "created todo");
        Ok(todo)
    }

    /// Set the completion flag. Returns false when no todo has `id`.
    async fn update_todo(&self, ctx: &Context<'_>, id: ID, complete: bool) -> Result<bool> {
        let id = parse_id(&id)?;
        let store = ctx.data::<SharedStore>()?;
        let outcome = store.set_complete(id, complete).await.map_err(store_failure)?;
        info!(%id, complete, ?outcome, "updated todo");
        Ok(outcome.is_applied())
    }

    /// Delete a todo. Returns false when no todo has `id`.
    async fn remove_todo(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let id = parse_id(&id)?;
        let store = ctx.data::<SharedStore>()?;
        let outcome = store.remove(id).await.map_err(store_failure)?;
        if outcome == Outcome::Applied {
            info!(%id, "removed todo");
        }
        Ok(outcome.is_applied())
    }
}
