// keg-core/src/infrastructure/error.rs

use crate::infrastructure::parser::SyntaxError;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(keg::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    #[error("Failed to read manifest {path:?}: {source}")]
    #[diagnostic(code(keg::infra::manifest_read))]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest {path:?} is {size} bytes, above the {limit} byte limit")]
    #[diagnostic(
        code(keg::infra::manifest_too_large),
        help("Raise `max-manifest-bytes` in keg.yaml if this file is legitimate.")
    )]
    ManifestTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("Manifest directory not found: {path:?}")]
    #[diagnostic(
        code(keg::infra::manifest_dir_missing),
        help("Pass an existing directory to `--dir`, or omit it to use `manifest-dir` from keg.yaml.")
    )]
    ManifestDirNotFound { path: PathBuf },

    // --- MANIFEST GRAMMAR ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),

    // --- CONFIG / SERIALIZATION ---
    #[error("YAML Error: {0}")]
    #[diagnostic(
        code(keg::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON Error: {0}")]
    #[diagnostic(code(keg::infra::json))]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration directory not found: {0}")]
    #[diagnostic(code(keg::infra::config_missing))]
    ConfigNotFound(String),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(code(keg::infra::config_invalid))]
    InvalidConfig(String),
}
