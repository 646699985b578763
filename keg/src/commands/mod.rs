// keg/src/commands/mod.rs

pub mod check;
pub mod export;
pub mod list;
pub mod resolve;
pub mod show;
pub mod verify;

use keg_core::PackageDescriptor;
use keg_core::application::ManifestLoader;
use keg_core::infrastructure::Settings;
use keg_core::infrastructure::source::FileManifestSource;
use std::path::Path;

/// Loads one manifest file under the configured size cap.
pub(crate) fn load_descriptor(
    file: &Path,
    settings: &Settings,
) -> Result<PackageDescriptor, keg_core::KegError> {
    let source = FileManifestSource::new(settings.max_manifest_bytes);
    ManifestLoader.load_from(&source, file)
}
