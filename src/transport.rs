//! GraphQL-over-HTTP transport.
//!
//! A single POST per operation: `{"query": ..., "variables": ...}` with an
//! `Api-Key` header. No retry, no backoff, no cache -- every operation is one
//! request-response round trip against the Doma API.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{DomaError, Result};

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// Executes a GraphQL document and returns the `data` payload.
///
/// The SDK talks to the API exclusively through this trait, so tests can
/// substitute a scripted fake instead of a live endpoint.
pub trait Transport: Send + Sync {
    /// Execute `query` with `variables` and return the raw `data` value.
    ///
    /// A non-empty `errors` array in the response surfaces as
    /// [`DomaError::Graphql`]; a missing `data` field is also an error.
    fn execute(&self, query: &str, variables: Value) -> Result<Value>;
}

/// Execute a query and deserialize the `data` payload into `T`.
///
/// Malformed responses fail fast with a precise serde error instead of
/// propagating nulls into calling code.
pub fn request<T: DeserializeOwned>(
    transport: &dyn Transport,
    query: &str,
    variables: Value,
) -> Result<T> {
    let data = transport.execute(query, variables)?;
    Ok(serde_json::from_value(data)?)
}

// ---------------------------------------------------------------------------
// Wire envelope
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<Value>,
    errors: Option<Vec<GraphqlErrorItem>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorItem {
    message: String,
    locations: Option<Vec<GraphqlErrorLocation>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorLocation {
    line: u32,
}

impl GraphqlErrorItem {
    fn describe(&self) -> String {
        match self.locations.as_ref().and_then(|l| l.first()) {
            Some(loc) => format!("{} (line {})", self.message, loc.line),
            None => format!("{} (no location)", self.message),
        }
    }
}

// ---------------------------------------------------------------------------
// HttpTransport
// ---------------------------------------------------------------------------

/// Live transport backed by a blocking reqwest [`Client`].
pub struct HttpTransport {
    api_url: String,
    api_key: String,
    client: Client,
}

impl HttpTransport {
    /// Build a transport for the given endpoint and key.
    pub fn new(api_url: String, api_key: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            api_url,
            api_key,
            client,
        })
    }

    /// The endpoint this transport posts to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl Transport for HttpTransport {
    fn execute(&self, query: &str, variables: Value) -> Result<Value> {
        tracing::debug!(endpoint = %self.api_url, "executing GraphQL query");

        let resp = self
            .client
            .post(&self.api_url)
            .header("Api-Key", &self.api_key)
            .json(&serde_json::json!({ "query": query, "variables": variables }))
            .send()?
            .error_for_status()?;

        let body: GraphqlResponse = resp.json()?;

        if let Some(errors) = body.errors {
            if !errors.is_empty() {
                let joined = errors
                    .iter()
                    .map(GraphqlErrorItem::describe)
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(DomaError::Graphql(joined));
            }
        }

        body.data
            .ok_or_else(|| DomaError::Graphql("no data returned from GraphQL query".into()))
    }
}
