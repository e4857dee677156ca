//! Configuration module for pbxmend
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Environment variables (PBXMEND_*)
//! 3. Project config (`.pbxmend.toml` next to the `.xcodeproj`)
//! 4. User config (`<config dir>/pbxmend/config.toml`)
//! 5. Built-in defaults

mod loader;
mod types;

pub use loader::{
    candidate_files, load_or_default, load_with_warnings, with_env_overrides, ConfigWarning,
    PROJECT_CONFIG_FILE,
};
pub use types::{BackupConfig, Config, EditConfig, IdsConfig};
