// keg/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "keg")]
#[command(about = "Loads, validates and resolves declarative package manifests", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding keg.yaml
    #[arg(long, global = true, default_value = ".", env = "KEG_CONFIG_DIR")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Yaml,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ✅ Validates one or more manifests
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// 📦 Prints a human summary of a manifest
    Show { file: PathBuf },

    /// 🔗 Prints the download URL with the version substituted
    Resolve { file: PathBuf },

    /// 🔐 Checks a downloaded artifact against the manifest checksum
    Verify {
        file: PathBuf,

        /// Path to the downloaded artifact
        #[arg(long, short)]
        artifact: PathBuf,
    },

    /// 📚 Lists every manifest of the catalog directory
    List {
        /// Catalog directory (default: `manifest-dir` from keg.yaml)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Fail on the first invalid manifest instead of skipping it
        #[arg(long)]
        strict: bool,
    },

    /// 📝 Serializes the validated descriptor
    Export {
        file: PathBuf,

        #[arg(long, value_enum, default_value = "json")]
        format: Format,

        /// Write to this file instead of stdout
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
}
