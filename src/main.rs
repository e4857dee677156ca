//! pbxmend CLI
//!
//! Usage: pbxmend <COMMAND> <PROJECT> [FILES]...
//!
//! Commands:
//!   add      Register files in every section of the project
//!   remove   Delete every entry naming the files
//!   move     Move files to another group
//!   repair   Renumber duplicate identifiers and split fused list closes
//!   check    Report consistency problems
//!   prune    Remove entries whose files are gone from disk
//!   restore  Put the newest backup back

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};
use commands::Globals;

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env("PBXMEND_LOG").unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "error",
            1 => "pbxmend=debug",
            _ => "pbxmend=trace",
        })
    });
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let globals = Globals::from_cli(&cli);

    let outcome = match cli.command {
        Commands::Add {
            project,
            files,
            placement,
            role,
            source_root,
        } => commands::edit::cmd_add(
            &globals,
            &project,
            files,
            placement,
            role,
            source_root.as_deref(),
        ),
        Commands::Remove { project, files } => {
            commands::edit::cmd_remove(&globals, &project, files)
        }
        Commands::Move {
            project,
            files,
            placement,
        } => commands::edit::cmd_move(&globals, &project, files, placement),
        Commands::Repair { project } => commands::edit::cmd_repair(&globals, &project),
        Commands::Check { project } => commands::check::cmd_check(&globals, &project),
        Commands::Prune {
            project,
            source_root,
        } => commands::edit::cmd_prune(&globals, &project, source_root.as_deref()),
        Commands::Restore { project } => commands::restore::cmd_restore(&globals, &project),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            commands::report_error(&globals, &err);
            ExitCode::FAILURE
        }
    }
}
