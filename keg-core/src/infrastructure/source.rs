// keg-core/src/infrastructure/source.rs

use std::fs;
use std::path::Path;

use crate::error::KegError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::ManifestSource;

/// Reads manifests from the local filesystem, refusing oversized files.
#[derive(Debug, Clone, Copy)]
pub struct FileManifestSource {
    max_bytes: u64,
}

impl FileManifestSource {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }
}

impl ManifestSource for FileManifestSource {
    fn read_manifest(&self, location: &Path) -> Result<String, KegError> {
        let read_error = |source| InfrastructureError::ManifestRead {
            path: location.to_path_buf(),
            source,
        };

        let size = fs::metadata(location).map_err(read_error)?.len();
        if size > self.max_bytes {
            return Err(InfrastructureError::ManifestTooLarge {
                path: location.to_path_buf(),
                size,
                limit: self.max_bytes,
            }
            .into());
        }

        Ok(fs::read_to_string(location).map_err(read_error)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_reads_small_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("a.keg");
        fs::write(&path, "package \"a\" {}")?;
        assert_eq!(FileManifestSource::new(1024).read_manifest(&path)?, "package \"a\" {}");
        Ok(())
    }

    #[test]
    fn test_rejects_oversized_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("big.keg");
        fs::write(&path, "#".repeat(64))?;
        let err = FileManifestSource::new(16).read_manifest(&path).unwrap_err();
        assert!(matches!(
            err,
            KegError::Infrastructure(InfrastructureError::ManifestTooLarge { size: 64, limit: 16, .. })
        ));
        Ok(())
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = FileManifestSource::new(1024)
            .read_manifest(Path::new("/no/such/manifest.keg"))
            .unwrap_err();
        assert!(err.to_string().contains("/no/such/manifest.keg"));
    }
}
