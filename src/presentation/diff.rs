//! Unified diff coloring for `--dry-run`

use crossterm::style::Stylize;

/// Color a unified diff line by line; headers cyan, hunks dim
pub fn colorize_diff(diff: &str, supports_color: bool) -> String {
    if !supports_color {
        return diff.to_string();
    }

    let mut out = String::with_capacity(diff.len());
    for line in diff.lines() {
        let styled = if line.starts_with("+++") || line.starts_with("---") {
            line.cyan().to_string()
        } else if line.starts_with("@@") {
            line.dark_grey().to_string()
        } else if line.starts_with('+') {
            line.green().to_string()
        } else if line.starts_with('-') {
            line.red().to_string()
        } else {
            line.to_string()
        };
        out.push_str(&styled);
        out.push('\n');
    }
    out
}
