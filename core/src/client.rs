//! Stateless GraphQL request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only the endpoint URL and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping the
//! core deterministic and free of I/O dependencies.

use serde::de::DeserializeOwned;
use serde_json::json;
use uuid::Uuid;

use crate::error::ApiError;
use crate::graphql::{
    CreateTodoData, Envelope, HelloData, Operation, RemoveTodoData, TodosData, UpdateTodoData,
    CREATE_TODO_MUTATION, HELLO_QUERY, REMOVE_TODO_MUTATION, TODOS_QUERY, UPDATE_TODO_MUTATION,
};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{MutationOutcome, Todo};

/// Synchronous, stateless client for the todo GraphQL API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct TodoClient {
    endpoint: String,
}

impl TodoClient {
    /// `base_url` is the server root, e.g. `http://localhost:4000`.
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: format!("{}/", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn build_todos(&self) -> Result<HttpRequest, ApiError> {
        self.build(TODOS_QUERY, json!({}))
    }

    pub fn build_hello(&self, name: Option<&str>) -> Result<HttpRequest, ApiError> {
        self.build(HELLO_QUERY, json!({ "name": name }))
    }

    /// Fails with `ApiError::Validation` on blank text without building a
    /// request.
    pub fn build_create_todo(&self, text: &str) -> Result<HttpRequest, ApiError> {
        if text.trim().is_empty() {
            return Err(ApiError::Validation("todo text must not be empty".to_string()));
        }
        self.build(CREATE_TODO_MUTATION, json!({ "text": text }))
    }

    pub fn build_update_todo(&self, id: Uuid, complete: bool) -> Result<HttpRequest, ApiError> {
        self.build(
            UPDATE_TODO_MUTATION,
            json!({ "id": id.to_string(), "complete": complete }),
        )
    }

    pub fn build_remove_todo(&self, id: Uuid) -> Result<HttpRequest, ApiError> {
        self.build(REMOVE_TODO_MUTATION, json!({ "id": id.to_string() }))
    }

    pub fn parse_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        parse_data::<TodosData>(response).map(|data| data.todos)
    }

    pub fn parse_hello(&self, response: HttpResponse) -> Result<String, ApiError> {
        parse_data::<HelloData>(response).map(|data| data.hello)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_data::<CreateTodoData>(response).map(|data| data.create_todo)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<MutationOutcome, ApiError> {
        parse_data::<UpdateTodoData>(response).map(|data| data.update_todo.into())
    }

    pub fn parse_remove_todo(&self, response: HttpResponse) -> Result<MutationOutcome, ApiError> {
        parse_data::<RemoveTodoData>(response).map(|data| data.remove_todo.into())
    }

    fn build(&self, query: &str, variables: serde_json::Value) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(&Operation { query, variables })
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            url: self.endpoint.clone(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body,
        })
    }
}

/// Check the status, decode the envelope, and surface the first GraphQL error.
fn parse_data<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    let envelope: Envelope<T> = serde_json::from_str(&response.body)
        .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
    if let Some(err) = envelope.errors.into_iter().next() {
        return Err(err.into());
    }
    envelope
        .data
        .ok_or_else(|| ApiError::DeserializationError("response carried no data".to_string()))
}

/// Anything but 200 means the request never reached a resolver.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
