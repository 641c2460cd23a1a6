//! Operation documents and the GraphQL response envelope.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::types::Todo;

/// `extensions.code` the server attaches to rejected input.
pub const BAD_USER_INPUT: &str = "BAD_USER_INPUT";

pub const TODOS_QUERY: &str = "query Todos { todos { id text complete } }";

pub const HELLO_QUERY: &str = "query Hello($name: String) { hello(name: $name) }";

pub const CREATE_TODO_MUTATION: &str =
    "mutation CreateTodo($text: String!) { createTodo(text: $text) { id text complete } }";

pub const UPDATE_TODO_MUTATION: &str = "mutation UpdateTodo($id: ID!, $complete: Boolean!) { updateTodo(id: $id, complete: $complete) }";

pub const REMOVE_TODO_MUTATION: &str = "mutation RemoveTodo($id: ID!) { removeTodo(id: $id) }";

/// Request body posted to the endpoint.
#[derive(Debug, Serialize)]
pub struct Operation<'a> {
    pub query: &'a str,
    pub variables: serde_json::Value,
}

/// Response body. `data` is absent or null when a non-null field failed.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub extensions: Option<Extensions>,
}

#[derive(Debug, Deserialize)]
pub struct Extensions {
    pub code: Option<String>,
}

impl GraphQlError {
    pub fn code(&self) -> Option<&str> {
        self.extensions.as_ref()?.code.as_deref()
    }
}

impl From<GraphQlError> for ApiError {
    fn from(err: GraphQlError) -> Self {
        let code = err.code().map(str::to_owned);
        if code.as_deref() == Some(BAD_USER_INPUT) {
            return ApiError::Validation(err.message);
        }
        ApiError::GraphQl {
            code,
            message: err.message,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TodosData {
    pub todos: Vec<Todo>,
}

#[derive(Debug, Deserialize)]
pub struct HelloData {
    pub hello: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoData {
    pub create_todo: Todo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoData {
    pub update_todo: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveTodoData {
    pub remove_todo: bool,
}
