//! Command handlers
//!
//! Each handler loads configuration for the project, runs one use case and
//! prints the rendered result. Handlers return whether the command succeeded.

pub mod check;
pub mod edit;
pub mod restore;

use std::path::{Path, PathBuf};

use anyhow::Result;
use is_terminal::IsTerminal;

use pbxmend::application::{project_root, PROJECT_FILE};
use pbxmend::config::{self, Config};
use pbxmend::domain::services::IdStrategy;
use pbxmend::presentation::{create_renderer, OutputFormat, ResultRenderer};
use pbxmend::PbxError;

use crate::cli::Cli;

/// Flags shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct Globals {
    pub json: bool,
    pub verbose: u8,
    pub dry_run: bool,
    pub repair: bool,
    pub tail_fallback: bool,
    pub id_strategy: Option<IdStrategy>,
    pub no_backup: bool,
    pub ascii: bool,
}

impl Globals {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json: cli.json,
            verbose: cli.verbose,
            dry_run: cli.dry_run,
            repair: cli.repair,
            tail_fallback: cli.tail_fallback,
            id_strategy: cli.id_strategy,
            no_backup: cli.no_backup,
            ascii: cli.ascii,
        }
    }

    pub fn renderer(&self) -> Box<dyn ResultRenderer> {
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        create_renderer(format, color, !self.ascii, self.verbose)
    }

    /// Configuration for the project with the CLI flags applied on top
    pub fn config_for(&self, project: &Path) -> Result<Config> {
        let pbxproj = if project.is_dir() {
            project.join(PROJECT_FILE)
        } else {
            project.to_path_buf()
        };
        let (mut config, warnings) = config::load_or_default(project_root(&pbxproj))?;
        for warning in warnings {
            eprintln!("Warning: {}", warning);
        }

        if let Some(strategy) = self.id_strategy {
            config.ids.strategy = strategy;
        }
        if self.tail_fallback {
            config.edit.tail_fallback = true;
        }
        if self.no_backup {
            config.backup.enabled = false;
        }
        Ok(config)
    }
}

/// Print a fatal error, naming the backup when the project was backed up
pub fn report_error(globals: &Globals, err: &anyhow::Error) {
    let backup: Option<PathBuf> = err
        .downcast_ref::<PbxError>()
        .and_then(|e| e.backup_path().cloned());
    let message = format!("{:#}", err);
    let rendered = globals.renderer().render_error(&message, backup.as_deref());
    if globals.json {
        print!("{}", rendered);
    } else {
        eprint!("{}", rendered);
        if err
            .downcast_ref::<PbxError>()
            .is_some_and(PbxError::is_repairable)
        {
            eprintln!("  Run `pbxmend repair` or pass --repair to fix this first.");
        }
    }
}
