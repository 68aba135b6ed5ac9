// ABOUTME: Credential resolution chain and Authorization header construction
// ABOUTME: Resolves the API token from argument, process env, or env file, in that order

use secrecy::SecretString;
use std::collections::HashMap;

use crate::constants::env::API_TOKEN_VAR;
use crate::error::FetchError;

/// Authorization header style. Callers opt in to bearer formatting with a
/// scheme hint; without one the token always passes through verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// Prefix the token with `Bearer ` (OAuth-style access tokens)
    Bearer,
    /// Send the token verbatim (personal API keys)
    Raw,
}

impl AuthScheme {
    /// Interpret a scheme hint, case-insensitively. Unrecognized hints
    /// yield `None` and behave like the absent hint.
    pub fn parse(hint: &str) -> Option<Self> {
        match hint.trim().to_ascii_lowercase().as_str() {
            "bearer" | "oauth" => Some(AuthScheme::Bearer),
            "raw" | "token" => Some(AuthScheme::Raw),
            _ => None,
        }
    }
}

/// Refuse token resolution when the stored auth mode routes this workspace
/// through MCP connectivity instead.
pub fn ensure_token_auth(auth_mode: &str) -> Result<(), FetchError> {
    if auth_mode == "mcp" {
        return Err(FetchError::McpAuthMode);
    }
    Ok(())
}

/// Resolve the API token: explicit argument, then the process environment,
/// then the env-file mapping. First non-empty value wins.
pub fn resolve_token(
    explicit: Option<&str>,
    env_data: &HashMap<String, String>,
) -> Result<SecretString, FetchError> {
    let process_env = std::env::var(API_TOKEN_VAR).ok();
    resolve_token_from(
        explicit,
        process_env.as_deref(),
        env_data.get(API_TOKEN_VAR).map(String::as_str),
    )
}

fn resolve_token_from(
    explicit: Option<&str>,
    process_env: Option<&str>,
    env_file: Option<&str>,
) -> Result<SecretString, FetchError> {
    [explicit, process_env, env_file]
        .into_iter()
        .flatten()
        .find(|token| !token.is_empty())
        .map(|token| SecretString::from(token.to_string()))
        .ok_or(FetchError::MissingToken)
}

/// Build the Authorization header value from a token and an optional
/// scheme hint.
pub fn authorization_header(token: &str, scheme_hint: Option<&str>) -> String {
    match scheme_hint.and_then(AuthScheme::parse) {
        Some(AuthScheme::Bearer) if !has_bearer_prefix(token) => format!("Bearer {token}"),
        // Raw hints, unrecognized hints, and the absent hint all pass the
        // token through unchanged, as does an already-prefixed bearer token.
        _ => token.to_string(),
    }
}

fn has_bearer_prefix(token: &str) -> bool {
    token
        .get(..7)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("bearer "))
}
