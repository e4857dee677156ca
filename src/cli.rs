use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use pbxmend::domain::services::IdStrategy;
use pbxmend::FileRole;

/// pbxmend - add, move and remove files in Xcode projects without breaking them
#[derive(Parser, Debug)]
#[command(name = "pbxmend")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Show what would change without writing
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Renumber duplicate identifiers and split fused list closes before editing
    #[arg(long, global = true)]
    pub repair: bool,

    /// Append to the end of the group when the anchor file is not in it
    #[arg(long, global = true)]
    pub tail_fallback: bool,

    /// How new identifiers are generated
    #[arg(long, global = true, value_enum)]
    pub id_strategy: Option<IdStrategy>,

    /// Skip the backup copy before writing
    #[arg(long, global = true)]
    pub no_backup: bool,

    /// Plain ASCII output
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Target group and anchor for new or moved entries
#[derive(Args, Debug, Clone, Default)]
pub struct PlacementArgs {
    /// Group name, or the bare identifier of a group without a name
    #[arg(short, long)]
    pub group: Option<String>,

    /// Existing file to insert after
    #[arg(short, long)]
    pub after: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register files in every section of the project
    Add {
        /// `.xcodeproj` bundle or `project.pbxproj` file
        project: PathBuf,

        /// File names to add
        #[arg(required = true)]
        files: Vec<String>,

        #[command(flatten)]
        placement: PlacementArgs,

        /// What the build does with the files
        #[arg(short, long, value_enum)]
        role: Option<FileRole>,

        /// Refuse files that do not exist below this directory
        #[arg(long)]
        source_root: Option<PathBuf>,
    },

    /// Delete every entry naming the files
    Remove {
        project: PathBuf,

        #[arg(required = true)]
        files: Vec<String>,
    },

    /// Move files to another group
    Move {
        project: PathBuf,

        #[arg(required = true)]
        files: Vec<String>,

        #[command(flatten)]
        placement: PlacementArgs,
    },

    /// Renumber duplicate build-file identifiers and split fused list closes
    Repair { project: PathBuf },

    /// Report consistency problems without changing anything
    Check { project: PathBuf },

    /// Remove entries whose files no longer exist on disk
    Prune {
        project: PathBuf,

        /// Directory the project's sources live under (defaults to the project's directory)
        #[arg(long)]
        source_root: Option<PathBuf>,
    },

    /// Put the newest backup back over the project file
    Restore { project: PathBuf },
}
