// ABOUTME: Persisted planner context: workspace, team, project, and auth settings
// ABOUTME: Loads and saves a flat JSON document with soft-failure semantics

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::FetchError;

/// Saved defaults for the planner, stored as a flat JSON object.
///
/// A missing or malformed file loads as the empty config so the tool stays
/// usable with zero prior configuration. Keys outside the known set are
/// carried through load/save untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcp_server: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Candidate update for the `init` operation. Empty values never overwrite
/// previously stored ones.
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub workspace: Option<String>,
    pub team_id: Option<String>,
    pub team_key: Option<String>,
    pub project_id: Option<String>,
    pub project_name: Option<String>,
    pub board_url: Option<String>,
    pub env_file: Option<String>,
    pub auth_mode: Option<String>,
    pub auth_scheme: Option<String>,
    pub mcp_server: Option<String>,
}

impl PlannerConfig {
    /// Load the config from disk. Missing or unparseable files degrade to
    /// the empty config rather than failing.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Persist the config as 2-space-indented JSON with a trailing newline.
    pub fn save(&self, path: &Path) -> Result<(), FetchError> {
        let mut contents = serde_json::to_string_pretty(self)?;
        contents.push('\n');
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Shallow-merge the non-empty fields of an update over this config.
    pub fn apply(&mut self, update: ConfigUpdate) {
        merge_field(&mut self.workspace, update.workspace);
        merge_field(&mut self.team_id, update.team_id);
        merge_field(&mut self.team_key, update.team_key);
        merge_field(&mut self.project_id, update.project_id);
        merge_field(&mut self.project_name, update.project_name);
        merge_field(&mut self.board_url, update.board_url);
        merge_field(&mut self.env_file, update.env_file);
        merge_field(&mut self.auth_mode, update.auth_mode);
        merge_field(&mut self.auth_scheme, update.auth_scheme);
        merge_field(&mut self.mcp_server, update.mcp_server);
    }

    /// Auth mode with the `token` default applied.
    pub fn auth_mode_or_default(&self) -> &str {
        non_empty(&self.auth_mode).unwrap_or("token")
    }
}

fn merge_field(existing: &mut Option<String>, update: Option<String>) {
    if let Some(value) = update.filter(|v| !v.is_empty()) {
        *existing = Some(value);
    }
}

/// Treat stored empty strings the same as absent values.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
