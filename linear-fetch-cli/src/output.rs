// ABOUTME: Output sink for decoded responses: stdout or a file path
// ABOUTME: Pretty-prints JSON; creates parent directories for file targets

use anyhow::{Context, Result};
use std::path::Path;

/// Write pretty-printed JSON to stdout, or to a file when a path is given.
/// A literal `-` path also means stdout; file output gets a trailing
/// newline and missing parent directories are created.
pub fn write_output(data: &serde_json::Value, out_path: Option<&str>) -> Result<()> {
    let output = serde_json::to_string_pretty(data)?;

    match out_path {
        None | Some("-") => println!("{output}"),
        Some(out_path) => {
            let path = Path::new(out_path);
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory {}", parent.display())
                    })?;
                }
            }
            std::fs::write(path, format!("{output}\n"))
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
        }
    }

    Ok(())
}
