//! Drives one UI session: each action does one round-trip, then reconciles
//! the cache with what the server confirmed.
//!
//! # Design
//! `TodoSync` owns the client, the host's `Transport`, and the `TodoCache`.
//! The cache is only touched after a successful response; any error returns
//! before reconciliation, leaving the cache as it was.

use uuid::Uuid;

use crate::cache::TodoCache;
use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{MutationOutcome, Todo};

pub struct TodoSync<T> {
    client: TodoClient,
    transport: T,
    cache: TodoCache,
}

impl<T: Transport> TodoSync<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            client,
            transport,
            cache: TodoCache::new(),
        }
    }

    pub fn cache(&self) -> &TodoCache {
        &self.cache
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch `todos` and install it as the cached list.
    pub fn load(&mut self) -> Result<(), ApiError> {
        let request = self.client.build_todos()?;
        let todos = self.client.parse_todos(self.transport.send(request)?)?;
        self.cache.replace(todos);
        Ok(())
    }

    pub fn create(&mut self, text: &str) -> Result<Todo, ApiError> {
        let request = self.client.build_create_todo(text)?;
        let todo = self.client.parse_create_todo(self.transport.send(request)?)?;
        self.cache.apply_created(todo.clone());
        Ok(todo)
    }

    pub fn set_complete(&mut self, id: Uuid, complete: bool) -> Result<MutationOutcome, ApiError> {
        let request = self.client.build_update_todo(id, complete)?;
        let outcome = self.client.parse_update_todo(self.transport.send(request)?)?;
        self.cache.apply_updated(id, complete, outcome);
        Ok(outcome)
    }

    /// Flip the cached `complete` flag of `id`. Fails with `NotFound` without
    /// a round-trip when the todo is not cached.
    pub fn toggle(&mut self, id: Uuid) -> Result<MutationOutcome, ApiError> {
        let complete = self.cache.get(id).ok_or(ApiError::NotFound)?.complete;
        self.set_complete(id, !complete)
    }

    pub fn remove(&mut self, id: Uuid) -> Result<MutationOutcome, ApiError> {
        let request = self.client.build_remove_todo(id)?;
        let outcome = self.client.parse_remove_todo(self.transport.send(request)?)?;
        self.cache.apply_removed(id);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::http::{HttpRequest, HttpResponse};

    /// Replays canned response bodies and records what was sent.
    #[derive(Default)]
    struct Scripted {
        responses: VecDeque<Result<HttpResponse, ApiError>>,
        sent: Vec<HttpRequest>,
    }

    impl Scripted {
        fn reply(mut self, body: &str) -> Self {
            self.responses.push_back(Ok(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: body.to_string(),
            }));
            self
        }

        fn fail(mut self, message: &str) -> Self {
            self.responses
                .push_back(Err(ApiError::Transport(message.to_string())));
            self
        }
    }

    impl Transport for Scripted {
        fn send(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.sent.push(request);
            self.responses
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_string())))
        }
    }

    const A: &str = "00000000-0000-0000-0000-00000000000a";
    const B: &str = "00000000-0000-0000-0000-00000000000b";

    fn session(transport: Scripted) -> TodoSync<Scripted> {
        TodoSync::new(TodoClient::new("http://localhost:4000"), transport)
    }

    fn loaded_body() -> String {
        format!(
            r#"{{"data":{{"todos":[{{"id":"{A}","text":"Test A","complete":false}},{{"id":"{B}","text":"Test B","complete":false}}]}}}}"#
        )
    }

    #[test]
    fn create_grows_cache_by_one() {
        let mut sync = session(Scripted::default().reply(&loaded_body()).reply(
            r#"{"data":{"createTodo":{"id":"00000000-0000-0000-0000-00000000000c","text":"Buy milk","complete":false}}}"#,
        ));
        sync.load().unwrap();

        let created = sync.create("Buy milk").unwrap();

        assert_eq!(sync.cache().len(), 3);
        assert_eq!(
            sync.cache().iter().filter(|t| t.id == created.id).count(),
            1
        );
        assert!(!created.complete);
    }

    #[test]
    fn blank_text_never_reaches_the_transport() {
        let mut sync = session(Scripted::default());
        let err = sync.create("").unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(sync.transport().sent.is_empty());
    }

    #[test]
    fn toggle_flips_cached_flag() {
        let mut sync = session(
            Scripted::default()
                .reply(&loaded_body())
                .reply(r#"{"data":{"updateTodo":true}}"#),
        );
        sync.load().unwrap();
        let a: Uuid = A.parse().unwrap();

        assert_eq!(sync.toggle(a).unwrap(), MutationOutcome::Applied);

        assert!(sync.cache().get(a).unwrap().complete);
        assert!(!sync.cache().get(B.parse().unwrap()).unwrap().complete);
        let sent: serde_json::Value = serde_json::from_str(&sync.transport().sent[1].body).unwrap();
        assert_eq!(sent["variables"]["complete"], true);
    }

    #[test]
    fn toggle_uncached_id_is_not_found() {
        let mut sync = session(Scripted::default());
        let err = sync.toggle(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
        assert!(sync.transport().sent.is_empty());
    }

    #[test]
    fn remove_unknown_id_is_not_an_error() {
        let mut sync = session(
            Scripted::default()
                .reply(&loaded_body())
                .reply(r#"{"data":{"removeTodo":false}}"#),
        );
        sync.load().unwrap();

        let outcome = sync.remove(Uuid::new_v4()).unwrap();

        assert_eq!(outcome, MutationOutcome::NotFound);
        assert_eq!(sync.cache().len(), 2);
    }

    #[test]
    fn failed_round_trip_leaves_cache_untouched() {
        let mut sync = session(
            Scripted::default()
                .reply(&loaded_body())
                .fail("connection reset"),
        );
        sync.load().unwrap();
        let before = sync.cache().todos();

        let err = sync.remove(A.parse().unwrap()).unwrap_err();

        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(sync.cache().todos(), before);
    }

    #[test]
    fn server_error_leaves_cache_untouched() {
        let mut sync = session(
            Scripted::default().reply(&loaded_body()).reply(
                r#"{"data":null,"errors":[{"message":"store unavailable","extensions":{"code":"INTERNAL_SERVER_ERROR"}}]}"#,
            ),
        );
        sync.load().unwrap();

        let err = sync.set_complete(A.parse().unwrap(), true).unwrap_err();

        assert!(matches!(err, ApiError::GraphQl { .. }));
        assert!(!sync.cache().get(A.parse().unwrap()).unwrap().complete);
    }
}
