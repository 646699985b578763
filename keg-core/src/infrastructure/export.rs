// keg-core/src/infrastructure/export.rs

use crate::domain::PackageDescriptor;
use crate::infrastructure::error::InfrastructureError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
}

/// Serializes a descriptor for the installer side (or a human).
pub fn render_descriptor(
    descriptor: &PackageDescriptor,
    format: ExportFormat,
) -> Result<String, InfrastructureError> {
    Ok(match format {
        ExportFormat::Json => serde_json::to_string_pretty(descriptor)?,
        ExportFormat::Yaml => serde_yaml::to_string(descriptor)?,
    })
}
