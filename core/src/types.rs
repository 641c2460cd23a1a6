//! Domain types for the todo API.
//!
//! # Design
//! These mirror the server's GraphQL `Todo` type but are defined
//! independently; the integration test catches schema drift between the two
//! crates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub text: String,
    pub complete: bool,
}

/// What a mutation addressed to one todo did on the server.
///
/// Travels over the wire as the schema's `Boolean`: `true` when applied,
/// `false` when the id was unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    NotFound,
}

impl From<bool> for MutationOutcome {
    fn from(applied: bool) -> Self {
        if applied {
            MutationOutcome::Applied
        } else {
            MutationOutcome::NotFound
        }
    }
}
