use std::path::Path;

use anyhow::Result;

use pbxmend::presentation::create_restore_use_case;

use super::Globals;

pub fn cmd_restore(globals: &Globals, project: &Path) -> Result<bool> {
    let config = globals.config_for(project)?;
    let result = create_restore_use_case(&config).execute(project, globals.dry_run)?;
    print!("{}", globals.renderer().render_restore(&result));
    Ok(true)
}
