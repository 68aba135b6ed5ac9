// ABOUTME: CLI argument definitions for the linear-fetch application
// ABOUTME: Defines global options and the five operations using clap derive macros

use clap::{Parser, Subcommand};
use linear_fetch_sdk::constants::{config, urls};

#[derive(Parser, Debug)]
#[command(name = "linear-fetch")]
#[command(about = "Fetch Linear data for task planning", long_about = None)]
#[command(version)]
pub struct Cli {
    /// GraphQL endpoint URL
    #[arg(long, global = true, default_value = urls::GRAPHQL_ENDPOINT)]
    pub endpoint: String,

    /// Override LINEAR_API_TOKEN
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Path to env file containing LINEAR_API_TOKEN
    #[arg(long, global = true)]
    pub env: Option<String>,

    /// Path to config JSON
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Auth scheme override: raw (personal key) or bearer (OAuth)
    #[arg(long, global = true)]
    pub auth_scheme: Option<String>,

    /// Seconds for signed attachment URLs
    #[arg(long, global = true, value_name = "SECONDS")]
    pub public_file_urls_expire_in: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize or update Linear context
    Init {
        /// Workspace slug or name
        #[arg(long)]
        workspace: Option<String>,

        /// Team id
        #[arg(long)]
        team_id: Option<String>,

        /// Team key (e.g., ENG)
        #[arg(long)]
        team_key: Option<String>,

        /// Project id
        #[arg(long)]
        project_id: Option<String>,

        /// Project name
        #[arg(long)]
        project_name: Option<String>,

        /// Board URL
        #[arg(long)]
        board_url: Option<String>,

        /// Auth mode to use for future requests
        #[arg(long, value_parser = ["token", "mcp"])]
        auth_mode: Option<String>,

        /// MCP server name (if auth-mode=mcp)
        #[arg(long)]
        mcp_server: Option<String>,
    },
    /// Fetch issue detail
    Issue {
        /// Issue id
        #[arg(long, conflicts_with = "identifier")]
        id: Option<String>,

        /// Issue identifier (e.g., ENG-123)
        #[arg(long)]
        identifier: Option<String>,

        /// Include comments/attachments
        #[arg(long)]
        details: bool,

        /// Output path (default: stdout)
        #[arg(long)]
        out: Option<String>,
    },
    /// Fetch project detail and issues
    Project {
        /// Project id (defaults to config projectId)
        #[arg(long)]
        id: Option<String>,

        /// Number of issues to fetch
        #[arg(long, default_value_t = 50)]
        first: i32,

        /// Output path (default: stdout)
        #[arg(long)]
        out: Option<String>,
    },
    /// Fetch team issues
    Team {
        /// Team id (defaults to config teamId)
        #[arg(long)]
        id: Option<String>,

        /// Number of issues to fetch
        #[arg(long, default_value_t = 50)]
        first: i32,

        /// Output path (default: stdout)
        #[arg(long)]
        out: Option<String>,
    },
    /// Run a custom GraphQL query
    Custom {
        /// Path to .graphql file
        #[arg(long)]
        query: String,

        /// JSON string, @file, or path
        #[arg(long)]
        variables: Option<String>,

        /// Output path (default: stdout)
        #[arg(long)]
        out: Option<String>,
    },
}
