// ABOUTME: Centralized constants for the Linear fetch SDK
// ABOUTME: Contains API URLs, environment and config file names, and timeouts

/// Linear API URLs
pub mod urls {
    /// GraphQL endpoint used when no --endpoint override is given
    pub const GRAPHQL_ENDPOINT: &str = "https://api.linear.app/graphql";
}

/// Environment variable and dotenv file names
pub mod env {
    /// Environment variable consulted for the API token
    pub const API_TOKEN_VAR: &str = "LINEAR_API_TOKEN";

    /// Dotenv candidates probed in order when no env file is configured
    pub const DEFAULT_ENV_FILES: &[&str] = &[".env.local", ".env"];
}

/// Config file defaults
pub mod config {
    /// Default config file name, resolved relative to the working directory
    pub const DEFAULT_CONFIG_FILE: &str = ".linear-task-planner.json";
}

/// HTTP and request timeouts
pub mod timeouts {
    use std::time::Duration;

    /// Default timeout for HTTP requests
    pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
}

/// Request header names
pub mod headers {
    /// Header controlling signed attachment URL expiry, passed through verbatim
    pub const PUBLIC_FILE_URLS_EXPIRE_IN: &str = "public-file-urls-expire-in";
}
