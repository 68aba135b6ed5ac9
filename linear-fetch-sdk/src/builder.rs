// ABOUTME: Builder pattern implementation for LinearClient configuration
// ABOUTME: Provides type-safe configuration with defaults for endpoint and timeout

use secrecy::SecretString;
use std::time::Duration;
use typed_builder::TypedBuilder;

use crate::constants::{timeouts, urls};
use crate::error::FetchError;
use crate::LinearClient;

#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = Result<LinearClient, FetchError>))]
pub struct LinearClientConfig {
    pub auth_token: SecretString,

    /// Caller-supplied scheme hint; unrecognized values behave like none
    #[builder(default = None)]
    pub scheme_hint: Option<String>,

    #[builder(default = urls::GRAPHQL_ENDPOINT.to_string(), setter(into))]
    pub endpoint: String,

    #[builder(default = timeouts::HTTP_REQUEST_TIMEOUT)]
    pub timeout: Duration,

    /// Extra request headers applied verbatim, e.g. signed-URL expiry
    #[builder(default = Vec::new())]
    pub extra_headers: Vec<(String, String)>,
}

impl From<LinearClientConfig> for Result<LinearClient, FetchError> {
    fn from(config: LinearClientConfig) -> Self {
        LinearClient::from_config(config)
    }
}

impl LinearClient {
    pub fn builder() -> LinearClientConfigBuilder<((), (), (), (), ())> {
        LinearClientConfig::builder()
    }
}
