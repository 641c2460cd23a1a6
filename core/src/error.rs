//! Error types for the todo API client.
//!
//! # Design
//! Failures are kept apart by cause: input the server (or the client itself)
//! refused, an id the local cache does not know, a GraphQL error from the server, an
//! unexpected HTTP status, and a transport that never produced a response.

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods and `TodoSync` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The input was rejected, either locally or with `BAD_USER_INPUT`.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The todo is not in the local cache.
    #[error("resource not found")]
    NotFound,

    /// The server answered with a GraphQL error other than bad input.
    #[error("GraphQL error: {message}")]
    GraphQl {
        code: Option<String>,
        message: String,
    },

    /// The server returned a status other than 200.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The host failed to complete the round-trip.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
