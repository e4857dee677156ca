//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::services::{IdStrategy, PatchOptions, SectionLocator, SequentialScheme};
use crate::domain::value_objects::FileRole;
use crate::error::PbxResult;
use crate::infrastructure::backup::DEFAULT_LABEL_FORMAT;

use super::loader::{self, ConfigWarning};

/// Identifier generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IdsConfig {
    #[serde(default)]
    pub strategy: IdStrategy,

    /// Used when `strategy = "sequential"`
    #[serde(default)]
    pub scheme: SequentialScheme,
}

/// Defaults for add / remove / move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditConfig {
    /// Group for `add` when neither `--group` nor `--after` is given
    #[serde(default)]
    pub default_group: Option<String>,

    #[serde(default)]
    pub default_role: FileRole,

    #[serde(default)]
    pub tail_fallback: bool,

    /// Separator for the first member of an empty list
    #[serde(default = "default_true")]
    pub trailing_comma: bool,

    /// Lines a list may span before it counts as unterminated
    #[serde(default = "default_scan_limit")]
    pub scan_limit: usize,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            default_group: None,
            default_role: FileRole::default(),
            tail_fallback: false,
            trailing_comma: true,
            scan_limit: default_scan_limit(),
        }
    }
}

/// Backup sibling written before every edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// `chrono` format string for the label after `.backup_`
    #[serde(default = "default_label_format")]
    pub label_format: String,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            label_format: default_label_format(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_scan_limit() -> usize {
    SectionLocator::DEFAULT_SCAN_LIMIT
}

fn default_label_format() -> String {
    DEFAULT_LABEL_FORMAT.to_string()
}

/// Main configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ids: IdsConfig,

    #[serde(default)]
    pub edit: EditConfig,

    #[serde(default)]
    pub backup: BackupConfig,
}

impl Config {
    /// Load configuration from a TOML file, dropping unknown-key warnings
    pub fn load(path: &Path) -> PbxResult<Self> {
        Ok(loader::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> PbxResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    pub fn locator(&self) -> SectionLocator {
        SectionLocator::new(self.edit.scan_limit)
    }

    pub fn patch_options(&self) -> PatchOptions {
        PatchOptions {
            tail_fallback: self.edit.tail_fallback,
            trailing_comma: self.edit.trailing_comma,
            default_group: self.edit.default_group.clone(),
        }
    }
}
