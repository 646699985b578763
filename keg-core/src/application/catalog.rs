// keg-core/src/application/catalog.rs
//
// USE CASE: load every manifest of a directory tree, keyed by identifier.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::application::loader::ManifestLoader;
use crate::domain::PackageDescriptor;
use crate::domain::error::DomainError;
use crate::error::KegError;
use crate::infrastructure::config::Settings;
use crate::infrastructure::discovery::discover_manifests;
use crate::infrastructure::source::FileManifestSource;
use crate::ports::ManifestSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub path: PathBuf,
    pub descriptor: PackageDescriptor,
}

/// A manifest skipped in lenient mode.
#[derive(Debug)]
pub struct CatalogFailure {
    pub path: PathBuf,
    pub error: KegError,
}

#[derive(Debug, Default)]
pub struct Catalog {
    entries: BTreeMap<String, CatalogEntry>,
    failures: Vec<CatalogFailure>,
}

impl Catalog {
    #[instrument(skip(settings))]
    pub fn load(dir: &Path, settings: &Settings) -> Result<Self, KegError> {
        let source = FileManifestSource::new(settings.max_manifest_bytes);
        let paths = discover_manifests(dir, &settings.extension);
        let catalog = Self::from_paths(&source, paths, settings.strict)?;
        info!(
            packages = catalog.len(),
            skipped = catalog.failures.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Loads `paths` in order. Duplicate identifiers always fail; other
    /// failures fail only when `strict`.
    pub fn from_paths(
        source: &dyn ManifestSource,
        paths: impl IntoIterator<Item = PathBuf>,
        strict: bool,
    ) -> Result<Self, KegError> {
        let loader = ManifestLoader;
        let mut catalog = Self::default();

        for path in paths {
            let descriptor = match loader.load_from(source, &path) {
                Ok(d) => d,
                Err(error) if !strict => {
                    warn!(path = ?path, error = %error, "Skipping invalid manifest");
                    catalog.failures.push(CatalogFailure { path, error });
                    continue;
                }
                Err(error) => return Err(error),
            };

            if let Some(existing) = catalog.entries.get(descriptor.identifier()) {
                return Err(DomainError::DuplicateIdentifier {
                    identifier: descriptor.identifier().to_string(),
                    first: existing.path.display().to_string(),
                    second: path.display().to_string(),
                }
                .into());
            }

            catalog.entries.insert(
                descriptor.identifier().to_string(),
                CatalogEntry { path, descriptor },
            );
        }

        Ok(catalog)
    }

    pub fn get(&self, identifier: &str) -> Option<&PackageDescriptor> {
        self.entries.get(identifier).map(|e| &e.descriptor)
    }

    /// Entries ordered by identifier.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    pub fn failures(&self) -> &[CatalogFailure] {
        &self.failures
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    fn manifest(identifier: &str, version: &str) -> String {
        format!(
            "package \"{identifier}\" {{\n  version \"{version}\"\n  checksum \"{}\"\n  url-template \"https://example.com/{identifier}/{{version}}.zip\"\n  display-name \"{identifier}\"\n  install-target \"{identifier}.app\"\n}}\n",
            "0".repeat(64)
        )
    }

    fn write(root: &Path, rel: &str, content: &str) -> Result<()> {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    #[test]
    fn test_loads_tree_in_identifier_order() -> Result<()> {
        let dir = tempdir()?;
        write(dir.path(), "z/zeta.keg", &manifest("zeta", "2.0"))?;
        write(dir.path(), "alpha.keg", &manifest("alpha", "1.0"))?;
        write(dir.path(), ".draft.keg", &manifest("draft", "0.1"))?;

        let catalog = Catalog::load(dir.path(), &Settings::default())?;
        let ids: Vec<_> = catalog.entries().map(|e| e.descriptor.identifier()).collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
        assert_eq!(catalog.get("zeta").unwrap().version(), "2.0");
        assert!(catalog.get("draft").is_none());
        assert!(catalog.failures().is_empty());
        Ok(())
    }

    #[test]
    fn test_lenient_mode_records_failures() -> Result<()> {
        let dir = tempdir()?;
        write(dir.path(), "good.keg", &manifest("good", "1"))?;
        write(dir.path(), "bad.keg", &manifest("bad", "1").replace(&"0".repeat(64), "abc"))?;

        let catalog = Catalog::load(dir.path(), &Settings::default())?;
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.failures().len(), 1);
        assert_eq!(catalog.failures()[0].path, dir.path().join("bad.keg"));
        assert_eq!(
            catalog.failures()[0].error.kind(),
            Some(ErrorKind::MalformedChecksum)
        );
        Ok(())
    }

    #[test]
    fn test_strict_mode_aborts() -> Result<()> {
        let dir = tempdir()?;
        write(dir.path(), "good.keg", &manifest("good", "1"))?;
        write(dir.path(), "bad.keg", "package \"bad\" {")?;

        let settings = Settings {
            strict: true,
            ..Settings::default()
        };
        assert!(Catalog::load(dir.path(), &settings).is_err());
        Ok(())
    }

    #[test]
    fn test_duplicate_identifier_fails_even_when_lenient() -> Result<()> {
        let dir = tempdir()?;
        write(dir.path(), "a/lumen.keg", &manifest("lumen", "1.0"))?;
        write(dir.path(), "b/lumen.keg", &manifest("lumen", "1.1"))?;

        let err = Catalog::load(dir.path(), &Settings::default()).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::DuplicateIdentifier));
        assert!(err.to_string().contains("a/lumen.keg"));
        Ok(())
    }

    #[test]
    fn test_oversized_manifest_skipped() -> Result<()> {
        let dir = tempdir()?;
        write(dir.path(), "huge.keg", &manifest("huge", "1"))?;
        let settings = Settings {
            max_manifest_bytes: 8,
            ..Settings::default()
        };
        let catalog = Catalog::load(dir.path(), &settings)?;
        assert!(catalog.is_empty());
        assert_eq!(catalog.failures().len(), 1);
        Ok(())
    }

    #[test]
    fn test_custom_extension() -> Result<()> {
        let dir = tempdir()?;
        write(dir.path(), "one.cask", &manifest("one", "1"))?;
        write(dir.path(), "two.keg", &manifest("two", "1"))?;
        let settings = Settings {
            extension: "cask".to_string(),
            ..Settings::default()
        };
        let catalog = Catalog::load(dir.path(), &settings)?;
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("one").is_some());
        Ok(())
    }
}
