// keg-core/src/infrastructure/config/settings.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::infrastructure::error::InfrastructureError;

pub const CONFIG_CANDIDATES: [&str; 2] = ["keg.yaml", ".keg.yaml"];

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Validate)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Settings {
    /// Catalog directory, relative to the directory holding keg.yaml.
    pub manifest_dir: PathBuf,

    #[validate(length(min = 1, message = "extension cannot be empty"))]
    pub extension: String,

    #[validate(range(
        min = 1,
        max = 16_777_216,
        message = "max-manifest-bytes must be between 1 and 16777216"
    ))]
    pub max_manifest_bytes: u64,

    /// Abort catalog loading on the first invalid manifest.
    pub strict: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            manifest_dir: PathBuf::from("Casks"),
            extension: "keg".to_string(),
            max_manifest_bytes: 1024 * 1024,
            strict: false,
        }
    }
}

impl Settings {
    pub fn manifest_root(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.manifest_dir)
    }
}

#[instrument(skip(config_dir))]
pub fn load_settings(config_dir: &Path) -> Result<Settings, InfrastructureError> {
    if !config_dir.is_dir() {
        return Err(InfrastructureError::ConfigNotFound(format!(
            "{:?} is not a directory",
            config_dir
        )));
    }

    let mut settings = match find_config(config_dir) {
        Some(path) => {
            info!(path = ?path, "Loading keg settings");
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Settings::default()
            } else {
                serde_yaml::from_str(&content)?
            }
        }
        None => {
            debug!(dir = ?config_dir, "No keg.yaml found, using defaults");
            Settings::default()
        }
    };

    // Layering: KEG_MANIFEST_DIR=/srv/casks keg list
    apply_env_overrides(&mut settings);

    settings
        .validate()
        .map_err(|e| InfrastructureError::InvalidConfig(e.to_string()))?;

    Ok(settings)
}

fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.is_file())
}

pub fn apply_env_overrides(settings: &mut Settings) {
    apply_overrides_from(settings, |key| std::env::var(key).ok());
}

fn apply_overrides_from(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(val) = lookup("KEG_MANIFEST_DIR") {
        info!(old = ?settings.manifest_dir, new = ?val, "Overriding manifest dir via ENV");
        settings.manifest_dir = PathBuf::from(val);
    }
    if let Some(val) = lookup("KEG_STRICT") {
        match parse_flag(&val) {
            Some(strict) => settings.strict = strict,
            None => warn!(value = %val, "Ignoring KEG_STRICT, expected true/false/1/0"),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
