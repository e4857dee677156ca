//! Output Rendering
//!
//! Renders use case results as text or JSON. Renderers return the text and
//! leave printing to the command handlers.

use std::fmt::Write as _;
use std::path::Path;

use crossterm::style::Stylize;

use crate::application::{CheckResult, EditResult, RestoreResult};
use crate::domain::entities::{Change, Diagnostic};

use super::diff::colorize_diff;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    add: &'static str,
    remove: &'static str,
    change: &'static str,
    skip: &'static str,
    warn: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            add: "+",
            remove: "−",
            change: "→",
            skip: "○",
            warn: "⚠",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            add: "+",
            remove: "-",
            change: "->",
            skip: "[ ]",
            warn: "[!]",
        }
    }
}

/// Renders every result type the CLI prints
pub trait ResultRenderer {
    fn render_edit(&self, result: &EditResult) -> String;
    fn render_check(&self, result: &CheckResult) -> String;
    fn render_restore(&self, result: &RestoreResult) -> String;
    /// A fatal error, with the backup path when one was written
    fn render_error(&self, message: &str, backup: Option<&Path>) -> String;
}

/// Text renderer
pub struct TextRenderer {
    /// Whether to use colors
    pub color: bool,
    /// Whether to use unicode
    pub unicode: bool,
    /// Verbosity level
    pub verbose: u8,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            color: true,
            unicode: true,
            verbose: 0,
        }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    fn ok(&self, icon: &str) -> String {
        if self.color {
            icon.green().to_string()
        } else {
            icon.to_string()
        }
    }

    fn bad(&self, icon: &str) -> String {
        if self.color {
            icon.red().to_string()
        } else {
            icon.to_string()
        }
    }

    fn change_line(&self, icons: &Icons, change: &Change) -> String {
        match change {
            Change::Added { file, section, id } => {
                format!("{} {} [{}] {}", icons.add, file, section, id)
            }
            Change::Removed { file, section, id } => {
                format!("{} {} [{}] {}", icons.remove, file, section, id)
            }
            Change::Moved { file, group } => {
                format!("{} {} {} group {}", icons.change, file, icons.change, group)
            }
            Change::Renumbered {
                file,
                section,
                old,
                new,
            } => format!(
                "{} {} [{}] {} {} {}",
                icons.change, file, section, old, icons.change, new
            ),
            Change::SyntaxFixed { line } => {
                format!("{} line {}: list close moved to its own line", icons.change, line)
            }
        }
    }

    fn diagnostics(&self, out: &mut String, icons: &Icons, diagnostics: &[Diagnostic]) {
        let (errors, warnings): (Vec<&Diagnostic>, Vec<&Diagnostic>) =
            diagnostics.iter().partition(|d| d.is_error());
        if !warnings.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "  Warnings ({}):", warnings.len());
            for diag in warnings {
                let _ = writeln!(out, "    {} {}", icons.warn, diag);
            }
        }
        if !errors.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "  Errors ({}):", errors.len());
            for diag in errors {
                let _ = writeln!(out, "    {} {}", self.bad(icons.cross), diag);
            }
        }
    }
}

impl ResultRenderer for TextRenderer {
    fn render_edit(&self, result: &EditResult) -> String {
        let icons = self.icons();
        let mut out = String::new();
        let ops = result.operations.join(" + ");
        let changes = result.report.changes.len();

        if !result.has_changes() {
            let _ = writeln!(out, "{} Already up-to-date ({})", self.ok(icons.check), ops);
            let _ = writeln!(out);
            let _ = writeln!(out, "  Project: {}", result.project.display());
            for file in &result.report.unchanged {
                let _ = writeln!(out, "    {} {}", icons.skip, file);
            }
        } else if result.dry_run {
            let _ = writeln!(
                out,
                "{} Dry run: {} change(s) pending ({})",
                icons.skip, changes, ops
            );
            let _ = writeln!(out);
            let _ = writeln!(out, "  Project: {}", result.project.display());
        } else {
            let _ = writeln!(
                out,
                "{} {} change(s) written ({})",
                self.ok(icons.check),
                changes,
                ops
            );
            let _ = writeln!(out);
            let _ = writeln!(out, "  Project: {}", result.project.display());
            if let Some(backup) = &result.backup {
                let _ = writeln!(out, "  Backup:  {}", backup.display());
            }
        }

        if result.has_changes() {
            let _ = writeln!(out);
            for change in &result.report.changes {
                let _ = writeln!(out, "    {}", self.change_line(&icons, change));
            }
            if self.verbose > 0 && !result.report.unchanged.is_empty() {
                let _ = writeln!(out, "  Unchanged ({}):", result.report.unchanged.len());
                for file in &result.report.unchanged {
                    let _ = writeln!(out, "    {} {}", icons.skip, file);
                }
            }
        }

        self.diagnostics(&mut out, &icons, &result.report.diagnostics);

        if let Some(diff) = &result.diff {
            let _ = writeln!(out);
            out.push_str(&colorize_diff(diff, self.color));
        }
        out
    }

    fn render_check(&self, result: &CheckResult) -> String {
        let icons = self.icons();
        let mut out = String::new();
        if result.is_clean() {
            let _ = writeln!(out, "{} Project is consistent", self.ok(icons.check));
        } else if result.is_success() {
            let _ = writeln!(
                out,
                "{} Project is usable with {} warning(s)",
                self.ok(icons.check),
                result.warnings
            );
        } else {
            let _ = writeln!(
                out,
                "{} Project has {} error(s) and {} warning(s)",
                self.bad(icons.cross),
                result.errors,
                result.warnings
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "  Project: {}", result.project.display());
        self.diagnostics(&mut out, &icons, &result.diagnostics);
        out
    }

    fn render_restore(&self, result: &RestoreResult) -> String {
        let icons = self.icons();
        let mut out = String::new();
        let headline = if result.written {
            format!("{} Restored from backup", self.ok(icons.check))
        } else if result.dry_run {
            format!("{} Dry run: would restore from backup", icons.skip)
        } else {
            format!("{} Project already matches the backup", self.ok(icons.check))
        };
        let _ = writeln!(out, "{}", headline);
        let _ = writeln!(out);
        let _ = writeln!(out, "  Project: {}", result.project.display());
        let _ = writeln!(out, "  Backup:  {}", result.backup.display());
        out
    }

    fn render_error(&self, message: &str, backup: Option<&Path>) -> String {
        let icons = self.icons();
        let mut out = format!("{} {}\n", self.bad(icons.cross), message);
        if let Some(backup) = backup {
            let _ = writeln!(out, "  The original project is saved at {}", backup.display());
        }
        out
    }
}

/// JSON renderer
pub struct JsonRenderer;

impl JsonRenderer {
    fn pretty(value: serde_json::Value) -> String {
        let mut out = serde_json::to_string_pretty(&value).unwrap_or_default();
        out.push('\n');
        out
    }
}

impl ResultRenderer for JsonRenderer {
    fn render_edit(&self, result: &EditResult) -> String {
        Self::pretty(serde_json::json!({
            "type": "edit",
            "success": result.is_success(),
            "project": result.project.display().to_string(),
            "operations": result.operations,
            "dry_run": result.dry_run,
            "written": result.written,
            "backup": result.backup.as_ref().map(|p| p.display().to_string()),
            "changes": result.report.changes,
            "unchanged": result.report.unchanged,
            "diagnostics": result.report.diagnostics,
            "diff": result.diff,
        }))
    }

    fn render_check(&self, result: &CheckResult) -> String {
        Self::pretty(serde_json::json!({
            "type": "check",
            "success": result.is_success(),
            "project": result.project.display().to_string(),
            "errors": result.errors,
            "warnings": result.warnings,
            "diagnostics": result.diagnostics,
        }))
    }

    fn render_restore(&self, result: &RestoreResult) -> String {
        Self::pretty(serde_json::json!({
            "type": "restore",
            "success": true,
            "project": result.project.display().to_string(),
            "backup": result.backup.display().to_string(),
            "written": result.written,
            "dry_run": result.dry_run,
        }))
    }

    fn render_error(&self, message: &str, backup: Option<&Path>) -> String {
        Self::pretty(serde_json::json!({
            "type": "error",
            "success": false,
            "message": message,
            "backup": backup.map(|p| p.display().to_string()),
        }))
    }
}

/// Create a renderer based on format
pub fn create_renderer(
    format: OutputFormat,
    color: bool,
    unicode: bool,
    verbose: u8,
) -> Box<dyn ResultRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer {
            color,
            unicode,
            verbose,
        }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
