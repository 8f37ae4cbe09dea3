//! GraphQL transport over HTTP POST.
//!
//! DESIGN
//! ======
//! `GraphqlClient` carries the endpoint configuration and is provided once
//! at startup through Leptos context, so the data layer can be pointed at a
//! mock transport in tests instead of reading a module-level singleton.
//! Response decoding is a pure function over the body text, kept separate
//! from the network call so it is testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode maps to one `GraphqlError` variant; views flatten the
//! error to a static message at the render boundary. No retry, no backoff.

#[cfg(test)]
#[path = "graphql_test.rs"]
mod graphql_test;

use serde::{Deserialize, Serialize};

/// Default endpoint path, relative to the page origin.
pub const DEFAULT_ENDPOINT: &str = "/graphql";

/// Handle to the configured GraphQL endpoint.
///
/// Cheap to clone; components grab it from context and hand it to the
/// operation functions in [`super::api`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphqlClient {
    endpoint: String,
}

impl GraphqlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for GraphqlClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

/// A single GraphQL operation as posted to the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphqlRequest {
    /// The operation document (query or mutation text).
    pub query: String,
    /// Operation variables; `null` when the operation takes none.
    #[serde(skip_serializing_if = "serde_json::Value::is_null", default)]
    pub variables: serde_json::Value,
}

/// The standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlErrorEntry>,
}

/// One entry of the response `errors` array. Only the message is kept;
/// locations and paths are not surfaced to the user.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GraphqlErrorEntry {
    pub message: String,
}

/// Failure modes of a GraphQL operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GraphqlError {
    /// The HTTP request never completed (network failure, bad endpoint).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success HTTP status.
    #[error("server returned status {0}")]
    Status(u16),
    /// The server resolved the request but reported GraphQL errors.
    #[error("graphql error: {0}")]
    Server(String),
    /// The body was not a decodable response envelope, or `data` was absent.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Operations are stubbed out during server-side rendering.
    #[error("not available during server rendering")]
    Unavailable,
}

/// Decode a response body into the operation's data type.
///
/// A non-empty `errors` array wins over partial `data`, matching the
/// all-or-nothing contract the views rely on.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn decode_response<T: serde::de::DeserializeOwned>(
    body: &str,
) -> Result<T, GraphqlError> {
    let envelope: GraphqlResponse<T> =
        serde_json::from_str(body).map_err(|e| GraphqlError::Decode(e.to_string()))?;
    if !envelope.errors.is_empty() {
        let joined = envelope
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(GraphqlError::Server(joined));
    }
    envelope
        .data
        .ok_or_else(|| GraphqlError::Decode("response has neither data nor errors".to_owned()))
}

/// Execute one operation against the configured endpoint.
///
/// Client-side (hydrate): real HTTP POST via `gloo-net`, same-origin
/// credentials. Server-side (SSR): returns [`GraphqlError::Unavailable`].
///
/// # Errors
///
/// Returns a [`GraphqlError`] for transport, HTTP status, GraphQL server,
/// and decode failures.
#[allow(clippy::unused_async)]
pub async fn execute<T: serde::de::DeserializeOwned>(
    client: &GraphqlClient,
    request: &GraphqlRequest,
) -> Result<T, GraphqlError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(client.endpoint())
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .json(request)
            .map_err(|e| GraphqlError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| GraphqlError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(GraphqlError::Status(resp.status()));
        }
        let body = resp
            .text()
            .await
            .map_err(|e| GraphqlError::Transport(e.to_string()))?;
        decode_response(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (client, request);
        Err(GraphqlError::Unavailable)
    }
}
