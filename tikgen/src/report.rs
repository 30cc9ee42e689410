use colored::Colorize;
use ros_script_core::{render, RouterConfig};

/// Render a script for terminal preview: section headers cyan, comments
/// yellow, WARNING comments red. The written file stays plain text.
pub fn render_colored(config: &RouterConfig) -> String {
    let raw = render(config);
    let mut out = Vec::new();

    for line in raw.lines() {
        let colored = if line.starts_with('/') {
            line.cyan().to_string()
        } else if line.contains("WARNING") {
            line.red().to_string()
        } else if line.starts_with('#') {
            line.yellow().to_string()
        } else {
            line.to_string()
        };
        out.push(colored);
    }

    out.join("\n")
}
