// ABOUTME: Linear fetch SDK: blocking GraphQL transport plus the planner's core logic
// ABOUTME: Covers config, env files, credentials, identifiers, queries, and responses

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, USER_AGENT};
use secrecy::ExposeSecret;
use serde_json::Value;
use url::Url;

pub mod auth;
pub mod builder;
pub mod config;
pub mod constants;
pub mod envfile;
pub mod error;
pub mod identifier;
pub mod queries;
pub mod response;

pub use builder::LinearClientConfig;
pub use config::{ConfigUpdate, PlannerConfig};
pub use error::FetchError;
pub use identifier::IssueRef;
pub use queries::{QueryEnvelope, QueryRequest};

pub type Result<T> = std::result::Result<T, FetchError>;

/// Blocking GraphQL transport for the Linear API.
///
/// Issues a single POST per request with no retries; callers own the
/// one-call-per-invocation contract.
#[derive(Debug)]
pub struct LinearClient {
    client: reqwest::blocking::Client,
    endpoint: Url,
}

impl LinearClient {
    pub(crate) fn from_config(config: LinearClientConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| FetchError::Configuration(format!("Invalid endpoint URL: {e}")))?;

        let mut headers = HeaderMap::new();
        let auth_value = auth::authorization_header(
            config.auth_token.expose_secret(),
            config.scheme_hint.as_deref(),
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value)
                .map_err(|e| FetchError::Configuration(format!("Invalid auth token: {e}")))?,
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("linear-fetch/", env!("CARGO_PKG_VERSION"))),
        );
        for (name, value) in &config.extra_headers {
            headers.insert(
                HeaderName::from_bytes(name.as_bytes())
                    .map_err(|e| FetchError::Configuration(format!("Invalid header name: {e}")))?,
                HeaderValue::from_str(value)
                    .map_err(|e| FetchError::Configuration(format!("Invalid header value: {e}")))?,
            );
        }

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, endpoint })
    }

    /// Execute one query and decode the reply.
    ///
    /// Non-2xx statuses embed the code and best-effort body text; network
    /// faults propagate as transport errors. Upstream `errors` lists are
    /// left in the decoded value for `response::raise_on_errors`.
    pub fn execute(&self, request: &QueryRequest) -> Result<Value> {
        let envelope = request.envelope();
        log::debug!("POST {} ({} byte query)", self.endpoint, envelope.query.len());

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&envelope)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(FetchError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let decoded = response.json::<Value>()?;
        log::debug!("response decoded, top-level keys: {}", top_level_keys(&decoded));
        Ok(decoded)
    }
}

fn top_level_keys(value: &Value) -> String {
    match value.as_object() {
        Some(map) => map.keys().cloned().collect::<Vec<_>>().join(","),
        None => "(non-object)".to_string(),
    }
}
