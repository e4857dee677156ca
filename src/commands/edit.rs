//! add / remove / move / repair / prune

use std::path::Path;

use anyhow::{bail, Result};

use pbxmend::application::{EditOptions, Operation};
use pbxmend::config::Config;
use pbxmend::domain::entities::{FileDescriptor, Placement};
use pbxmend::domain::value_objects::FileRole;
use pbxmend::infrastructure::scan_file_names;
use pbxmend::presentation::create_edit_use_case;

use super::Globals;
use crate::cli::PlacementArgs;

impl From<PlacementArgs> for Placement {
    fn from(args: PlacementArgs) -> Self {
        Placement {
            group: args.group,
            after: args.after,
        }
    }
}

pub fn cmd_add(
    globals: &Globals,
    project: &Path,
    files: Vec<String>,
    placement: PlacementArgs,
    role: Option<FileRole>,
    source_root: Option<&Path>,
) -> Result<bool> {
    let config = globals.config_for(project)?;
    let role = role.unwrap_or(config.edit.default_role);

    if let Some(root) = source_root {
        let present = scan_file_names(root)?;
        let missing: Vec<&str> = files
            .iter()
            .map(String::as_str)
            .filter(|f| !present.contains(file_name(f)))
            .collect();
        if !missing.is_empty() {
            bail!(
                "not found under {}: {}",
                root.display(),
                missing.join(", ")
            );
        }
    }

    let files = files
        .iter()
        .map(|f| FileDescriptor::new(file_name(f), role))
        .collect();
    run(
        globals,
        project,
        &config,
        Operation::Add {
            files,
            placement: placement.into(),
        },
    )
}

pub fn cmd_remove(globals: &Globals, project: &Path, files: Vec<String>) -> Result<bool> {
    let config = globals.config_for(project)?;
    let files = files.iter().map(|f| file_name(f).to_string()).collect();
    run(globals, project, &config, Operation::Remove { files })
}

pub fn cmd_move(
    globals: &Globals,
    project: &Path,
    files: Vec<String>,
    placement: PlacementArgs,
) -> Result<bool> {
    let config = globals.config_for(project)?;
    let files = files.iter().map(|f| file_name(f).to_string()).collect();
    run(
        globals,
        project,
        &config,
        Operation::Move {
            files,
            placement: placement.into(),
        },
    )
}

pub fn cmd_repair(globals: &Globals, project: &Path) -> Result<bool> {
    let config = globals.config_for(project)?;
    run(globals, project, &config, Operation::Repair)
}

pub fn cmd_prune(globals: &Globals, project: &Path, source_root: Option<&Path>) -> Result<bool> {
    let default_root;
    let root = match source_root {
        Some(root) => root,
        None => {
            default_root = default_source_root(project)?;
            default_root.as_path()
        }
    };
    let config = globals.config_for(project)?;
    let present = scan_file_names(root)?;
    run(globals, project, &config, Operation::Prune { present })
}

fn run(globals: &Globals, project: &Path, config: &Config, operation: Operation) -> Result<bool> {
    let options = EditOptions::new()
        .with_dry_run(globals.dry_run)
        .with_repair_first(globals.repair)
        .with_backup(config.backup.enabled)
        .with_locator(config.locator())
        .with_patch_options(config.patch_options())
        .with_ids(config.ids.strategy, config.ids.scheme.clone());

    let use_case = create_edit_use_case(config);
    let result = use_case.execute(project, &[operation], &options)?;

    print!("{}", globals.renderer().render_edit(&result));
    Ok(result.is_success())
}

/// Entries are keyed by bare file name; `Sources/Foo.swift` means `Foo.swift`
fn file_name(arg: &str) -> &str {
    Path::new(arg)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(arg)
}

/// Directory holding the `.xcodeproj` bundle
fn default_source_root(project: &Path) -> Result<std::path::PathBuf> {
    let project = std::fs::canonicalize(project)?;
    let bundle = if project.is_dir() {
        project.as_path()
    } else {
        project.parent().unwrap_or(&project)
    };
    Ok(bundle
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| bundle.to_path_buf()))
}
