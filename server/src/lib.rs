//! GraphQL API server for the todo list.
//!
//! # Overview
//! One HTTP endpoint at `/`: `POST` executes GraphQL against the schema in
//! [`schema`], `GET` serves a GraphiQL page pointed at the same endpoint.
//! Records live behind the [`store::TodoStore`] trait; the binary uses
//! [`store::MemoryStore`].

pub mod config;
pub mod schema;
pub mod store;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tracing::info;

pub use config::Config;
pub use schema::{build, TodoSchema};
pub use store::{MemoryStore, Outcome, SharedStore, StoreError, Todo, TodoStore};

/// Path of the GraphQL endpoint.
pub const ENDPOINT: &str = "/";

/// Router backed by a fresh in-memory store.
pub fn app() -> Router {
    app_with_store(MemoryStore::shared())
}

pub fn app_with_store(store: SharedStore) -> Router {
    let schema = schema::build(store);
    Router::new().route(ENDPOINT, get(graphiql).post_service(GraphQL::new(schema)))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, MemoryStore::shared()).await
}

pub async fn serve(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!("listening on {addr}");
    }
    axum::serve(listener, app_with_store(store)).await
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(ENDPOINT).finish())
}
