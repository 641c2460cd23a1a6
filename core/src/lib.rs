//! Synchronous GraphQL client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and keeps a local cache of
//! the `todos` query in step with confirmed mutations.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only the endpoint URL.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - `TodoCache` is normalized by id; `TodoSync` runs one round-trip per
//!   action through the host's `Transport` and then patches the cache.
//! - Types are defined independently from the server crate; integration
//!   tests catch schema drift.

pub mod cache;
pub mod client;
pub mod error;
pub mod graphql;
pub mod http;
pub mod sync;
pub mod types;

pub use cache::TodoCache;
pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse, Transport};
pub use sync::TodoSync;
pub use types::{MutationOutcome, Todo};
