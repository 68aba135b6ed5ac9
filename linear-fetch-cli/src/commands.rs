// ABOUTME: Command dispatcher wiring config, credentials, transport, and output
// ABOUTME: Implements the init, issue, project, team, and custom operations

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use linear_fetch_sdk::auth;
use linear_fetch_sdk::config::non_empty;
use linear_fetch_sdk::constants::headers;
use linear_fetch_sdk::envfile;
use linear_fetch_sdk::response;
use linear_fetch_sdk::{ConfigUpdate, IssueRef, LinearClient, PlannerConfig, QueryRequest};

use crate::cli::{Cli, Commands};
use crate::output::write_output;

/// Global options shared by every network-bound operation.
struct Globals {
    endpoint: String,
    token: Option<String>,
    env: Option<String>,
    auth_scheme: Option<String>,
    public_file_urls_expire_in: Option<String>,
}

pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        endpoint,
        token,
        env,
        config: config_path,
        auth_scheme,
        public_file_urls_expire_in,
        command,
    } = cli;
    let globals = Globals {
        endpoint,
        token,
        env,
        auth_scheme,
        public_file_urls_expire_in,
    };

    let config_path = PathBuf::from(config_path);
    let config = PlannerConfig::load(&config_path);

    match command {
        Commands::Init {
            workspace,
            team_id,
            team_key,
            project_id,
            project_name,
            board_url,
            auth_mode,
            mcp_server,
        } => {
            let update = ConfigUpdate {
                workspace,
                team_id,
                team_key,
                project_id,
                project_name,
                board_url,
                env_file: globals.env,
                auth_mode,
                auth_scheme: validated_init_scheme(globals.auth_scheme)?,
                mcp_server,
            };
            run_init(config, &config_path, update)
        }
        Commands::Issue {
            id,
            identifier,
            details,
            out,
        } => {
            let client = connect(&config, globals)?;
            run_issue(&client, id, identifier, details, out.as_deref())
        }
        Commands::Project { id, first, out } => {
            let client = connect(&config, globals)?;
            let project_id = id
                .filter(|v| !v.is_empty())
                .or_else(|| non_empty(&config.project_id).map(str::to_string))
                .context("project requires --id or config projectId")?;
            run_listing(
                &client,
                QueryRequest::ProjectDetail { project_id, first },
                out.as_deref(),
            )
        }
        Commands::Team { id, first, out } => {
            let client = connect(&config, globals)?;
            let team_id = id
                .filter(|v| !v.is_empty())
                .or_else(|| non_empty(&config.team_id).map(str::to_string))
                .context("team requires --id or config teamId")?;
            run_listing(
                &client,
                QueryRequest::TeamIssues { team_id, first },
                out.as_deref(),
            )
        }
        Commands::Custom {
            query,
            variables,
            out,
        } => {
            let client = connect(&config, globals)?;
            run_custom(&client, &query, variables.as_deref(), out.as_deref())
        }
    }
}

/// Shared setup for every network-bound operation: auth-mode guard, env
/// file resolution, token resolution, and client construction. `init`
/// never comes through here.
fn connect(config: &PlannerConfig, globals: Globals) -> Result<LinearClient> {
    auth::ensure_token_auth(config.auth_mode_or_default())?;

    let env_path = envfile::resolve_env_path(globals.env.as_deref(), config.env_file.as_deref());
    let env_data = match &env_path {
        Some(path) => {
            log::debug!("reading env file {}", path.display());
            envfile::load_env_file(path)
        }
        None => Default::default(),
    };
    let token = auth::resolve_token(globals.token.as_deref(), &env_data)?;

    let scheme_hint = globals
        .auth_scheme
        .filter(|v| !v.is_empty())
        .or_else(|| non_empty(&config.auth_scheme).map(str::to_string));

    let mut extra_headers = Vec::new();
    if let Some(expiry) = globals.public_file_urls_expire_in.filter(|v| !v.is_empty()) {
        extra_headers.push((headers::PUBLIC_FILE_URLS_EXPIRE_IN.to_string(), expiry));
    }

    let client = LinearClient::builder()
        .auth_token(token)
        .scheme_hint(scheme_hint)
        .endpoint(globals.endpoint)
        .extra_headers(extra_headers)
        .build()?;
    Ok(client)
}

fn run_init(mut config: PlannerConfig, path: &Path, update: ConfigUpdate) -> Result<()> {
    config.apply(update);
    config.save(path)?;
    println!("Saved config to {}", path.display());
    Ok(())
}

/// `init` persists the scheme for later runs, so it only accepts the values
/// later runs understand as stored hints.
fn validated_init_scheme(scheme: Option<String>) -> Result<Option<String>> {
    match scheme {
        Some(value) if !value.is_empty() && value != "raw" && value != "bearer" => {
            bail!("invalid --auth-scheme '{value}' for init (expected raw or bearer)")
        }
        other => Ok(other),
    }
}

fn run_issue(
    client: &LinearClient,
    id: Option<String>,
    identifier: Option<String>,
    details: bool,
    out: Option<&str>,
) -> Result<()> {
    let (request, identifier) = match (id, identifier) {
        (Some(issue_id), _) => (
            QueryRequest::IssueById {
                issue_id,
                include_details: details,
            },
            None,
        ),
        (None, Some(raw)) => {
            let issue: IssueRef = raw.parse()?;
            (
                QueryRequest::IssueByIdentifier {
                    issue,
                    include_details: details,
                },
                Some(raw),
            )
        }
        (None, None) => bail!("issue requires --id or --identifier"),
    };

    let response_body = client.execute(&request)?;
    response::raise_on_errors(&response_body)?;
    if let Some(raw) = &identifier {
        // Validate that the lookup resolved to exactly one issue; the raw
        // response is still what gets emitted.
        response::single_identifier_match(&response_body, raw)?;
    }
    write_output(&response_body, out)
}

fn run_listing(client: &LinearClient, request: QueryRequest, out: Option<&str>) -> Result<()> {
    let response_body = client.execute(&request)?;
    response::raise_on_errors(&response_body)?;
    write_output(&response_body, out)
}

fn run_custom(
    client: &LinearClient,
    query: &str,
    variables: Option<&str>,
    out: Option<&str>,
) -> Result<()> {
    let query_path = Path::new(query);
    if !query_path.exists() {
        bail!("Query file not found: {}", query_path.display());
    }
    let document = std::fs::read_to_string(query_path)
        .with_context(|| format!("Failed to read query file {}", query_path.display()))?;

    let request = QueryRequest::Custom {
        document,
        variables: parse_variables(variables)?,
    };
    run_listing(client, request, out)
}

/// Custom-query variables: inline JSON text, an `@`-prefixed file path, or
/// a bare path to an existing file. Absent means no variables.
fn parse_variables(value: Option<&str>) -> Result<serde_json::Value> {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return Ok(serde_json::json!({}));
    };

    if let Some(path) = value.strip_prefix('@') {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read variables file {path}"))?;
        return serde_json::from_str(&raw)
            .with_context(|| format!("Invalid variables JSON in {path}"));
    }

    let candidate = Path::new(value);
    if candidate.exists() {
        let raw = std::fs::read_to_string(candidate)
            .with_context(|| format!("Failed to read variables file {}", candidate.display()))?;
        return serde_json::from_str(&raw)
            .with_context(|| format!("Invalid variables JSON in {}", candidate.display()));
    }

    serde_json::from_str(value).context("Invalid variables JSON")
}
