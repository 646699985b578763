// keg/src/commands/export.rs
//
// USE CASE: hand the validated descriptor to another tool as JSON or YAML.

use std::path::Path;

use keg_core::infrastructure::Settings;
use keg_core::infrastructure::export::{ExportFormat, render_descriptor};
use keg_core::infrastructure::fs::write_atomically;

use super::load_descriptor;
use crate::cli::Format;

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => ExportFormat::Json,
            Format::Yaml => ExportFormat::Yaml,
        }
    }
}

pub fn execute(
    file: &Path,
    format: Format,
    out: Option<&Path>,
    settings: &Settings,
) -> miette::Result<()> {
    let descriptor = load_descriptor(file, settings)?;
    let rendered = render_descriptor(&descriptor, format.into())?;

    match out {
        Some(path) => {
            write_atomically(path, rendered.as_bytes())?;
            tracing::info!(path = ?path, "Descriptor exported");
            println!("wrote {}", path.display());
        }
        None => println!("{}", rendered.trim_end()),
    }
    Ok(())
}
