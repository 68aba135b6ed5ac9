// ABOUTME: Custom error types for the Linear fetch SDK with user-friendly messages
// ABOUTME: Maps configuration, validation, transport, and upstream failures to one taxonomy

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("LINEAR_API_TOKEN not found in env or args")]
    MissingToken,

    #[error("Auth mode is set to mcp. Use MCP connectivity for this workspace.")]
    McpAuthMode,

    #[error("Invalid issue identifier '{0}'. Expected format TEAM-123.")]
    InvalidIdentifier(String),

    #[error("No issue found for identifier {0}")]
    IssueNotFound(String),

    #[error("Multiple issues matched identifier. Use --id instead. Matches: {0}")]
    AmbiguousIdentifier(String),

    #[error("Request failed: HTTP {status} {body}")]
    Http { status: u16, body: String },

    #[error("GraphQL error: {0}")]
    GraphQL(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid API response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            FetchError::MissingToken => Some(
                "Create a personal API key at https://linear.app/settings/api and export LINEAR_API_TOKEN",
            ),
            FetchError::McpAuthMode => {
                Some("Run `init --auth-mode token` to switch back to API token auth")
            }
            FetchError::InvalidIdentifier(_) => {
                Some("Issue identifiers combine a team key and a number, e.g. ENG-123")
            }
            _ => None,
        }
    }
}
