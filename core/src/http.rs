//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! The core builds `HttpRequest` values and parses `HttpResponse` values
//! without ever touching the network. GraphQL goes over a single endpoint, so
//! every request is a `POST` with a JSON body; the host only has to send the
//! bytes and hand back what came in.

/// A GraphQL-over-HTTP request described as plain data. Always sent as `POST`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// An HTTP response described as plain data.
///
/// Constructed by the host after executing an `HttpRequest`, then passed to
/// `TodoClient::parse_*` methods for deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes requests on behalf of the core.
pub trait Transport {
    fn send(&mut self, request: HttpRequest) -> Result<HttpResponse, crate::ApiError>;
}
