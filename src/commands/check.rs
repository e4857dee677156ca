use std::path::Path;

use anyhow::Result;

use pbxmend::presentation::create_check_use_case;

use super::Globals;

/// Read-only; fails when the project has error-level findings
pub fn cmd_check(globals: &Globals, project: &Path) -> Result<bool> {
    let config = globals.config_for(project)?;
    let result = create_check_use_case(&config).execute(project)?;
    print!("{}", globals.renderer().render_check(&result));
    Ok(result.is_success())
}
