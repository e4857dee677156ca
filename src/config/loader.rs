//! Configuration discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::services::IdStrategy;
use crate::domain::value_objects::FileRole;
use crate::error::{PbxError, PbxResult};

use super::types::Config;

/// File name looked up next to the `.xcodeproj` bundle
pub const PROJECT_CONFIG_FILE: &str = ".pbxmend.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PbxResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PbxError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    config.ids.scheme.validate().map_err(|e| PbxError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Config files that apply to a project, most specific first
pub fn candidate_files(project_root: Option<&Path>) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Some(root) = project_root {
        files.push(root.join(PROJECT_CONFIG_FILE));
    }
    if let Some(dir) = dirs::config_dir() {
        files.push(dir.join("pbxmend").join("config.toml"));
    }
    files
}

/// First existing config file for the project, else defaults; environment
/// overrides are applied on top either way.
///
/// `project_root` is the directory holding the `.xcodeproj` bundle.
pub fn load_or_default(project_root: Option<&Path>) -> PbxResult<(Config, Vec<ConfigWarning>)> {
    let found = candidate_files(project_root)
        .into_iter()
        .find(|path| path.is_file());

    let (config, warnings) = match found {
        Some(path) => {
            tracing::debug!(config = %path.display(), "loading configuration");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (PBXMEND_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_overrides<F>(mut config: Config, var: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = var("PBXMEND_ID_STRATEGY") {
        match value.to_lowercase().as_str() {
            "random" => config.ids.strategy = IdStrategy::Random,
            "sequential" => config.ids.strategy = IdStrategy::Sequential,
            _ => tracing::warn!(value, "ignoring invalid PBXMEND_ID_STRATEGY"),
        }
    }

    if let Some(value) = var("PBXMEND_DEFAULT_ROLE") {
        match value.to_lowercase().as_str() {
            "compile" => config.edit.default_role = FileRole::Compile,
            "resource" => config.edit.default_role = FileRole::Resource,
            "reference" => config.edit.default_role = FileRole::Reference,
            _ => tracing::warn!(value, "ignoring invalid PBXMEND_DEFAULT_ROLE"),
        }
    }

    if let Some(group) = var("PBXMEND_DEFAULT_GROUP") {
        config.edit.default_group = Some(group).filter(|g| !g.is_empty());
    }

    if let Some(value) = var("PBXMEND_SCAN_LIMIT") {
        match value.parse() {
            Ok(limit) => config.edit.scan_limit = limit,
            Err(_) => tracing::warn!(value, "ignoring invalid PBXMEND_SCAN_LIMIT"),
        }
    }

    if let Some(value) = var("PBXMEND_BACKUP") {
        config.backup.enabled = value.to_lowercase() != "false" && value != "0";
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "ids",
        "strategy",
        "scheme",
        "prefix",
        "width",
        "suffix",
        "edit",
        "default_group",
        "default_role",
        "tail_fallback",
        "trailing_comma",
        "scan_limit",
        "backup",
        "enabled",
        "label_format",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
