// ABOUTME: Minimal KEY=VALUE env file parser for resolving the Linear API token
// ABOUTME: Supports comments, blank lines, an optional export prefix, and quoted values

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::constants::env::DEFAULT_ENV_FILES;

/// Parse a dotenv-style file into a flat string map.
///
/// A missing file yields an empty map. No interpolation, no multi-line
/// values, no escaping.
pub fn load_env_file(path: &Path) -> HashMap<String, String> {
    let mut env = HashMap::new();

    let Ok(contents) = std::fs::read_to_string(path) else {
        return env;
    };

    for line in contents.lines() {
        let mut line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(rest) = line.strip_prefix("export ") {
            line = rest.trim();
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        env.insert(
            key.trim().to_string(),
            strip_quotes(value.trim()).to_string(),
        );
    }

    env
}

/// Determine which env file a run should read, if any.
///
/// Precedence: explicit argument, then the config's `envFile`, then the
/// first default candidate that exists in the working directory.
pub fn resolve_env_path(explicit: Option<&str>, config_env_file: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    if let Some(path) = config_env_file.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    DEFAULT_ENV_FILES
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

/// Strip one matching pair of double quotes, then one matching pair of
/// single quotes, from an already-trimmed value.
fn strip_quotes(value: &str) -> &str {
    strip_pair(strip_pair(value, '"'), '\'')
}

fn strip_pair(value: &str, quote: char) -> &str {
    if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
