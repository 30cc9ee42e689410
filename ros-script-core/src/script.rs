use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::{RouterConfig, COMMENT_BLOCK};

/// Errors that can occur while emitting a rendered script.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to write the output file.
    #[error("failed to write script file: {0}")]
    Io(#[from] std::io::Error),
}

/// Render a [`RouterConfig`] into RouterOS script text.
///
/// Each section header line is followed by its commands, in map-insertion
/// order. The [`COMMENT_BLOCK`] section emits its lines with no header.
pub fn render(config: &RouterConfig) -> String {
    let mut out = String::new();
    for (section, commands) in config.sections() {
        if commands.is_empty() {
            continue;
        }
        if section != COMMENT_BLOCK {
            out.push_str(section);
            out.push('\n');
        }
        for command in commands {
            out.push_str(command);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// Render a configuration and write it to `path`.
pub fn write_file(config: &RouterConfig, path: &Path) -> Result<(), WriteError> {
    fs::write(path, render(config))?;
    Ok(())
}

/// Serialize a configuration as pretty JSON (section map, insertion order).
pub fn format_json(config: &RouterConfig) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(config)
}

/// Parse free-form script text back into a [`RouterConfig`].
///
/// Lines beginning with `/` open a section; every other non-empty line is
/// appended to the current section. Lines before the first header land in the
/// [`COMMENT_BLOCK`] section. Total: any input produces a configuration.
pub fn parse(text: &str) -> RouterConfig {
    let mut out = RouterConfig::new();
    let mut current = COMMENT_BLOCK.to_string();
    for line in text.lines() {
        let line = line.trim_end();
        if line.trim().is_empty() {
            continue;
        }
        if line.starts_with('/') {
            current = line.trim().to_string();
            continue;
        }
        out.push(current.clone(), line);
    }
    out
}
