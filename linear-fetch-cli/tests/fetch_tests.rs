// ABOUTME: End-to-end tests for the network-bound operations against a mock server
// ABOUTME: Covers credential failures, disambiguation, error surfacing, and output

use clap::Parser;
use linear_fetch_cli::cli::Cli;
use linear_fetch_cli::commands;
use serde_json::json;
use serial_test::serial;
use tempfile::TempDir;

fn run(args: &[&str]) -> anyhow::Result<()> {
    let cli = Cli::try_parse_from(args).expect("Arguments should parse");
    commands::run(cli)
}

fn empty_config(dir: &TempDir) -> String {
    dir.path()
        .join(".linear-task-planner.json")
        .to_str()
        .unwrap()
        .to_string()
}

#[test]
fn test_issue_by_identifier_writes_response_to_out_file() {
    let dir = TempDir::new().expect("Should create temp dir");
    let config = empty_config(&dir);
    let out = dir.path().join("planning").join("issue.json");

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_header("authorization", "lin_api_abc")
        .match_body(mockito::Matcher::PartialJson(json!({
            "variables": {"teamKey": "ENG", "number": 42.0, "includeDetails": false}
        })))
        .with_status(200)
        .with_body(
            json!({
                "data": {"issues": {"nodes": [
                    {"id": "uuid-1", "identifier": "ENG-42", "title": "One match"}
                ]}}
            })
            .to_string(),
        )
        .create();

    run(&[
        "linear-fetch",
        "--endpoint",
        &server.url(),
        "--token",
        "lin_api_abc",
        "--config",
        &config,
        "issue",
        "--identifier",
        "eng-42",
        "--out",
        out.to_str().unwrap(),
    ])
    .expect("issue fetch should succeed");

    mock.assert();

    let contents = std::fs::read_to_string(&out).expect("Should read output");
    assert!(contents.ends_with('\n'));
    let parsed: serde_json::Value = serde_json::from_str(&contents).expect("Should parse output");
    assert_eq!(parsed["data"]["issues"]["nodes"][0]["identifier"], "ENG-42");
}

#[test]
fn test_issue_by_identifier_not_found() {
    let dir = TempDir::new().expect("Should create temp dir");
    let config = empty_config(&dir);

    let mut server = mockito::Server::new();
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body(json!({"data": {"issues": {"nodes": []}}}).to_string())
        .create();

    let result = run(&[
        "linear-fetch",
        "--endpoint",
        &server.url(),
        "--token",
        "lin_api_abc",
        "--config",
        &config,
        "issue",
        "--identifier",
        "ENG-9",
    ]);

    let message = result.unwrap_err().to_string();
    assert!(message.contains("No issue found for identifier ENG-9"));
}

#[test]
fn test_issue_by_identifier_ambiguous_lists_matches() {
    let dir = TempDir::new().expect("Should create temp dir");
    let config = empty_config(&dir);

    let mut server = mockito::Server::new();
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body(
            json!({
                "data": {"issues": {"nodes": [
                    {"identifier": "ENG-42"},
                    {"identifier": "ENG2-42"}
                ]}}
            })
            .to_string(),
        )
        .create();

    let result = run(&[
        "linear-fetch",
        "--endpoint",
        &server.url(),
        "--token",
        "lin_api_abc",
        "--config",
        &config,
        "issue",
        "--identifier",
        "ENG-42",
    ]);

    let message = result.unwrap_err().to_string();
    assert!(message.contains("Use --id instead"));
    assert!(message.contains("ENG-42, ENG2-42"));
}

#[test]
fn test_issue_rejects_malformed_identifier_before_any_request() {
    let dir = TempDir::new().expect("Should create temp dir");
    let config = empty_config(&dir);

    // Unroutable endpoint: a network call would fail loudly
    let result = run(&[
        "linear-fetch",
        "--endpoint",
        "http://127.0.0.1:1",
        "--token",
        "lin_api_abc",
        "--config",
        &config,
        "issue",
        "--identifier",
        "not-an-identifier!",
    ]);

    let message = result.unwrap_err().to_string();
    assert!(message.contains("Invalid issue identifier"));
    assert!(message.contains("TEAM-123"));
}

#[test]
fn test_issue_requires_id_or_identifier() {
    let dir = TempDir::new().expect("Should create temp dir");
    let config = empty_config(&dir);

    let result = run(&[
        "linear-fetch",
        "--token",
        "lin_api_abc",
        "--config",
        &config,
        "issue",
    ]);

    let message = result.unwrap_err().to_string();
    assert!(message.contains("issue requires --id or --identifier"));
}

#[test]
fn test_graphql_errors_are_surfaced_joined() {
    let dir = TempDir::new().expect("Should create temp dir");
    let config = empty_config(&dir);

    let mut server = mockito::Server::new();
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body(
            json!({"errors": [{"message": "bad token"}, {"message": "rate limited"}]}).to_string(),
        )
        .create();

    let result = run(&[
        "linear-fetch",
        "--endpoint",
        &server.url(),
        "--token",
        "lin_api_abc",
        "--config",
        &config,
        "team",
        "--id",
        "team-1",
    ]);

    let message = result.unwrap_err().to_string();
    assert!(message.contains("GraphQL error: bad token; rate limited"));
}

#[test]
fn test_http_failure_embeds_status_and_body() {
    let dir = TempDir::new().expect("Should create temp dir");
    let config = empty_config(&dir);

    let mut server = mockito::Server::new();
    server
        .mock("POST", "/")
        .with_status(500)
        .with_body("internal error")
        .create();

    let result = run(&[
        "linear-fetch",
        "--endpoint",
        &server.url(),
        "--token",
        "lin_api_abc",
        "--config",
        &config,
        "team",
        "--id",
        "team-1",
    ]);

    let message = result.unwrap_err().to_string();
    assert!(message.contains("HTTP 500"));
    assert!(message.contains("internal error"));
}

#[test]
fn test_project_defaults_to_config_project_id() {
    let dir = TempDir::new().expect("Should create temp dir");
    let config_path = dir.path().join(".linear-task-planner.json");
    std::fs::write(&config_path, r#"{"projectId": "proj-uuid"}"#).expect("Should write config");

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_body(mockito::Matcher::PartialJson(json!({
            "variables": {"projectId": "proj-uuid", "first": 50}
        })))
        .with_status(200)
        .with_body(json!({"data": {"project": {"id": "proj-uuid"}}}).to_string())
        .create();

    let out = dir.path().join("project.json");
    run(&[
        "linear-fetch",
        "--endpoint",
        &server.url(),
        "--token",
        "lin_api_abc",
        "--config",
        config_path.to_str().unwrap(),
        "project",
        "--out",
        out.to_str().unwrap(),
    ])
    .expect("project fetch should succeed");

    mock.assert();
}

#[test]
fn test_project_without_id_or_config_is_usage_error() {
    let dir = TempDir::new().expect("Should create temp dir");
    let config = empty_config(&dir);

    let result = run(&[
        "linear-fetch",
        "--token",
        "lin_api_abc",
        "--config",
        &config,
        "project",
    ]);

    let message = result.unwrap_err().to_string();
    assert!(message.contains("project requires --id or config projectId"));
}

#[test]
fn test_team_without_id_or_config_is_usage_error() {
    let dir = TempDir::new().expect("Should create temp dir");
    let config = empty_config(&dir);

    let result = run(&[
        "linear-fetch",
        "--token",
        "lin_api_abc",
        "--config",
        &config,
        "team",
    ]);

    let message = result.unwrap_err().to_string();
    assert!(message.contains("team requires --id or config teamId"));
}

#[test]
fn test_mcp_auth_mode_refuses_before_any_request() {
    let dir = TempDir::new().expect("Should create temp dir");
    let config_path = dir.path().join(".linear-task-planner.json");
    std::fs::write(&config_path, r#"{"authMode": "mcp"}"#).expect("Should write config");

    let result = run(&[
        "linear-fetch",
        "--token",
        "lin_api_abc",
        "--config",
        config_path.to_str().unwrap(),
        "team",
        "--id",
        "team-1",
    ]);

    let message = result.unwrap_err().to_string();
    assert!(message.contains("Auth mode is set to mcp"));
    assert!(message.contains("MCP connectivity"));
}

#[test]
#[serial]
fn test_missing_token_is_a_configuration_error() {
    let dir = TempDir::new().expect("Should create temp dir");
    let config = empty_config(&dir);
    let env_path = dir.path().join(".env");
    std::fs::write(&env_path, "# no token here\n").expect("Should write env file");

    std::env::remove_var("LINEAR_API_TOKEN");

    let result = run(&[
        "linear-fetch",
        "--config",
        &config,
        "--env",
        env_path.to_str().unwrap(),
        "team",
        "--id",
        "team-1",
    ]);

    let message = result.unwrap_err().to_string();
    assert!(message.contains("LINEAR_API_TOKEN not found in env or args"));
}

#[test]
#[serial]
fn test_token_resolved_from_env_file() {
    let dir = TempDir::new().expect("Should create temp dir");
    let config = empty_config(&dir);
    let env_path = dir.path().join(".env");
    std::fs::write(&env_path, "export LINEAR_API_TOKEN=\"file-token\"\n")
        .expect("Should write env file");

    std::env::remove_var("LINEAR_API_TOKEN");

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_header("authorization", "file-token")
        .with_status(200)
        .with_body("{}")
        .create();

    let out = dir.path().join("team.json");
    run(&[
        "linear-fetch",
        "--endpoint",
        &server.url(),
        "--config",
        &config,
        "--env",
        env_path.to_str().unwrap(),
        "team",
        "--id",
        "team-1",
        "--out",
        out.to_str().unwrap(),
    ])
    .expect("team fetch should succeed");

    mock.assert();
}

#[test]
fn test_bearer_scheme_hint_prefixes_header_end_to_end() {
    let dir = TempDir::new().expect("Should create temp dir");
    let config = empty_config(&dir);

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_header("authorization", "Bearer abc123")
        .with_status(200)
        .with_body("{}")
        .create();

    let out = dir.path().join("team.json");
    run(&[
        "linear-fetch",
        "--endpoint",
        &server.url(),
        "--token",
        "abc123",
        "--auth-scheme",
        "bearer",
        "--config",
        &config,
        "team",
        "--id",
        "team-1",
        "--out",
        out.to_str().unwrap(),
    ])
    .expect("team fetch should succeed");

    mock.assert();
}

#[test]
fn test_signed_url_expiry_header_passes_through() {
    let dir = TempDir::new().expect("Should create temp dir");
    let config = empty_config(&dir);

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_header("public-file-urls-expire-in", "3600")
        .with_status(200)
        .with_body(json!({"data": {"issue": null}}).to_string())
        .create();

    let out = dir.path().join("issue.json");
    run(&[
        "linear-fetch",
        "--endpoint",
        &server.url(),
        "--token",
        "lin_api_abc",
        "--public-file-urls-expire-in",
        "3600",
        "--config",
        &config,
        "issue",
        "--id",
        "uuid-1",
        "--details",
        "--out",
        out.to_str().unwrap(),
    ])
    .expect("issue fetch should succeed");

    mock.assert();
}

#[test]
fn test_custom_query_sends_document_and_variables() {
    let dir = TempDir::new().expect("Should create temp dir");
    let config = empty_config(&dir);

    let query_path = dir.path().join("viewer.graphql");
    std::fs::write(&query_path, "query Viewer { viewer { id } }").expect("Should write query");

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_body(mockito::Matcher::PartialJson(json!({
            "query": "query Viewer { viewer { id } }",
            "variables": {"first": 5}
        })))
        .with_status(200)
        .with_body(json!({"data": {"viewer": {"id": "user-1"}}}).to_string())
        .create();

    let out = dir.path().join("viewer.json");
    run(&[
        "linear-fetch",
        "--endpoint",
        &server.url(),
        "--token",
        "lin_api_abc",
        "--config",
        &config,
        "custom",
        "--query",
        query_path.to_str().unwrap(),
        "--variables",
        r#"{"first": 5}"#,
        "--out",
        out.to_str().unwrap(),
    ])
    .expect("custom query should succeed");

    mock.assert();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).expect("Should parse output");
    assert_eq!(parsed["data"]["viewer"]["id"], "user-1");
}

#[test]
fn test_custom_query_missing_file_is_an_error() {
    let dir = TempDir::new().expect("Should create temp dir");
    let config = empty_config(&dir);

    let result = run(&[
        "linear-fetch",
        "--token",
        "lin_api_abc",
        "--config",
        &config,
        "custom",
        "--query",
        "/nonexistent/query.graphql",
    ]);

    let message = result.unwrap_err().to_string();
    assert!(message.contains("Query file not found"));
}
