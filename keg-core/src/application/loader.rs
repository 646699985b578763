// keg-core/src/application/loader.rs
//
// USE CASE: manifest text -> PackageDescriptor.

use std::path::Path;
use tracing::{debug, instrument};
use url::Url;

use crate::domain::error::DomainError;
use crate::domain::package::descriptor::DescriptorParts;
use crate::domain::package::{
    Checksum, Hook, HookParam, License, PackageDescriptor, field, substitute_version,
    template::has_version_placeholder, url_unsafe_version,
};
use crate::error::KegError;
use crate::infrastructure::parser::{RawManifest, parse_manifest};
use crate::ports::ManifestSource;

/// Pure parse + validate. Holds no state, so one instance can serve any
/// number of callers and threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestLoader;

impl ManifestLoader {
    pub fn load(&self, text: &str) -> Result<PackageDescriptor, KegError> {
        self.load_named("manifest", text)
    }

    /// Same as [`load`](Self::load), `name` labels the text in diagnostics.
    #[instrument(level = "debug", skip(self, text))]
    pub fn load_named(&self, name: &str, text: &str) -> Result<PackageDescriptor, KegError> {
        let raw = parse_manifest(name, text)?;
        let descriptor = validate(raw)?;
        debug!(
            identifier = descriptor.identifier(),
            version = descriptor.version(),
            "Manifest validated"
        );
        Ok(descriptor)
    }

    pub fn load_from(
        &self,
        source: &dyn ManifestSource,
        location: &Path,
    ) -> Result<PackageDescriptor, KegError> {
        let text = source.read_manifest(location)?;
        self.load_named(&location.display().to_string(), &text)
    }
}

fn non_empty(value: Option<String>, name: &str) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DomainError::missing(name)),
    }
}

pub(crate) fn parse_absolute_url(name: &str, value: &str) -> Result<Url, DomainError> {
    let malformed = |reason: String| DomainError::MalformedUrl {
        field: name.to_string(),
        value: value.to_string(),
        reason,
    };
    let url = Url::parse(value).map_err(|e| malformed(e.to_string()))?;
    if !url.has_host() {
        return Err(malformed("URL has no host".to_string()));
    }
    Ok(url)
}

/// Applies the package rules in order; the first failing rule wins.
pub fn validate(raw: RawManifest) -> Result<PackageDescriptor, DomainError> {
    // 1. Identity
    let identifier = non_empty(Some(raw.identifier), field::IDENTIFIER)?;
    let version = non_empty(raw.version, field::VERSION)?;

    // 2. Checksum
    let checksum = match raw.checksum {
        Some(c) => Checksum::parse(&c)?,
        None => {
            return Err(DomainError::MalformedChecksum {
                field: field::CHECKSUM.to_string(),
                reason: "checksum is missing".to_string(),
            });
        }
    };

    // 3. URL template
    let url_template = match raw.url_template {
        Some(t) if has_version_placeholder(&t) => t,
        Some(t) => {
            return Err(DomainError::MalformedUrl {
                field: field::URL_TEMPLATE.to_string(),
                value: t,
                reason: "missing the `{version}` placeholder".to_string(),
            });
        }
        None => {
            return Err(DomainError::MalformedUrl {
                field: field::URL_TEMPLATE.to_string(),
                value: String::new(),
                reason: "url-template is missing".to_string(),
            });
        }
    };

    // 4. Install targets
    if raw.install_targets.is_empty() {
        return Err(DomainError::MissingInstallTarget {
            field: field::INSTALL_TARGET.to_string(),
        });
    }

    // 5. Display name
    let display_name = non_empty(raw.display_name, field::DISPLAY_NAME)?;

    // 6. URLs must parse once resolved, with the version left untouched
    let version_error = |reason: &str| DomainError::MalformedUrl {
        field: field::VERSION.to_string(),
        value: version.clone(),
        reason: reason.to_string(),
    };
    if let Some(reason) = url_unsafe_version(&version) {
        return Err(version_error(reason));
    }
    let resolved = substitute_version(&url_template, &version).unwrap_or_default();
    let url = parse_absolute_url(field::URL_TEMPLATE, &resolved)?;
    if !url.as_str().contains(version.as_str()) {
        return Err(version_error("version is altered by URL normalization"));
    }
    if let Some(homepage) = &raw.homepage {
        parse_absolute_url(field::HOMEPAGE, homepage)?;
    }

    // 7. No blank entries in optional or repeated fields
    if raw.install_targets.iter().any(|t| t.trim().is_empty()) {
        return Err(DomainError::missing(field::INSTALL_TARGET));
    }
    let license = match raw.license {
        Some(token) => Some(
            non_empty(Some(token), field::LICENSE)?
                .parse::<License>()
                .unwrap_or_else(|never| match never {}),
        ),
        None => None,
    };

    let post_install = raw
        .post_install
        .into_iter()
        .map(|hook| {
            let params = hook
                .params
                .into_iter()
                .map(|(key, value)| HookParam { key, value })
                .collect();
            Hook::new(hook.name, params)
        })
        .collect();

    Ok(PackageDescriptor::from_parts(DescriptorParts {
        identifier,
        version,
        checksum,
        url_template,
        display_name,
        homepage: raw.homepage,
        license,
        install_targets: raw.install_targets,
        post_install,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::error::ErrorKind;
    use anyhow::Result;
    use std::collections::HashMap;
    use std::path::PathBuf;

    const CHECKSUM: &str =
        "d5ad8dea570063860086df09802cde876070ec7b28694f292e0aa3ce333a1ef9";

    /// Builds a manifest from (key, value) lines; `None` values are omitted.
    fn manifest(overrides: &[(&str, Option<&str>)]) -> String {
        let mut lines: Vec<(String, Option<String>)> = vec![
            ("version".into(), Some("\"1.0.0\"".into())),
            ("checksum".into(), Some(format!("\"{CHECKSUM}\""))),
            (
                "url-template".into(),
                Some("\"https://x/y/v{version}/pkg.zip\"".into()),
            ),
            ("display-name".into(), Some("\"Pkg\"".into())),
            ("install-target".into(), Some("\"Pkg.app\"".into())),
        ];
        for (key, value) in overrides {
            match lines.iter_mut().find(|(k, _)| k == key) {
                Some(line) => line.1 = value.map(str::to_string),
                None => lines.push((key.to_string(), value.map(str::to_string))),
            }
        }
        let body: String = lines
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| format!("  {k} {v}\n")))
            .collect();
        format!("package \"pkg\" {{\n{body}}}\n")
    }

    fn load_err(text: &str) -> DomainError {
        match ManifestLoader.load(text) {
            Err(KegError::Domain(e)) => e,
            other => panic!("expected a domain error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_manifest() -> Result<()> {
        let descriptor = ManifestLoader.load(&manifest(&[]))?;
        assert_eq!(descriptor.identifier(), "pkg");
        assert_eq!(descriptor.version(), "1.0.0");
        assert_eq!(descriptor.checksum().as_str(), CHECKSUM);
        assert_eq!(descriptor.display_name(), "Pkg");
        assert_eq!(descriptor.install_targets(), ["Pkg.app".to_string()]);
        assert!(descriptor.post_install_hooks().is_empty());
        assert!(descriptor.homepage().is_none());
        assert!(descriptor.license().is_none());
        Ok(())
    }

    #[test]
    fn test_reload_is_field_for_field_equal() -> Result<()> {
        let text = manifest(&[("license", Some(":gpl")), ("homepage", Some("\"https://x/\""))]);
        assert_eq!(ManifestLoader.load(&text)?, ManifestLoader.load(&text)?);
        Ok(())
    }

    #[test]
    fn test_missing_identifier() {
        let text = manifest(&[]).replacen("\"pkg\"", "\"  \"", 1);
        let err = load_err(&text);
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(err.field(), Some("identifier"));
    }

    #[test]
    fn test_missing_version() {
        let err = load_err(&manifest(&[("version", None)]));
        assert_eq!(err, DomainError::missing("version"));
    }

    #[test]
    fn test_short_checksum() {
        let err = load_err(&manifest(&[("checksum", Some("\"abc\""))]));
        assert_eq!(err.kind(), ErrorKind::MalformedChecksum);
        assert_eq!(err.field(), Some("checksum"));
    }

    #[test]
    fn test_absent_checksum() {
        let err = load_err(&manifest(&[("checksum", None)]));
        assert_eq!(err.kind(), ErrorKind::MalformedChecksum);
    }

    #[test]
    fn test_template_without_placeholder() {
        let err = load_err(&manifest(&[(
            "url-template",
            Some("\"https://x/y/pkg.zip\""),
        )]));
        assert_eq!(err.kind(), ErrorKind::MalformedUrl);
        assert_eq!(err.field(), Some("url-template"));
    }

    #[test]
    fn test_absent_template() {
        let err = load_err(&manifest(&[("url-template", None)]));
        assert_eq!(err.kind(), ErrorKind::MalformedUrl);
    }

    #[test]
    fn test_no_install_target() {
        let err = load_err(&manifest(&[("install-target", None)]));
        assert_eq!(err.kind(), ErrorKind::MissingInstallTarget);
        assert_eq!(err.field(), Some("install-target"));
    }

    #[test]
    fn test_first_failure_wins() {
        // Bad checksum and no install target: rule 2 reports first.
        let err = load_err(&manifest(&[
            ("checksum", Some("\"abc\"")),
            ("install-target", None),
        ]));
        assert_eq!(err.kind(), ErrorKind::MalformedChecksum);

        // Missing version beats everything else.
        let err = load_err(&manifest(&[
            ("version", None),
            ("checksum", None),
            ("url-template", None),
            ("install-target", None),
        ]));
        assert_eq!(err.field(), Some("version"));
    }

    #[test]
    fn test_missing_display_name() {
        let err = load_err(&manifest(&[("display-name", None)]));
        assert_eq!(err, DomainError::missing("display-name"));
    }

    #[test]
    fn test_template_not_a_url_once_resolved() {
        let err = load_err(&manifest(&[("url-template", Some("\"pkg-{version}.zip\""))]));
        assert_eq!(err.kind(), ErrorKind::MalformedUrl);
        assert_eq!(err.field(), Some("url-template"));
    }

    #[test]
    fn test_version_must_survive_in_url() {
        let cases = [
            ("1.0 beta", "https://x/y/v{version}/pkg.zip"),
            ("1.0-\u{e9}", "https://x/y/v{version}/pkg.zip"),
            ("..", "https://x/{version}/pkg.zip"),
            ("1.0#frag", "https://x/y/v{version}/pkg.zip"),
            ("1.0?x", "https://x/y/v{version}/pkg.zip"),
            // Hosts are lowercased.
            ("BETA", "https://{version}.example.com/pkg.zip"),
        ];
        for (version, template) in cases {
            let text = manifest(&[
                ("version", Some(format!("\"{version}\"").as_str())),
                ("url-template", Some(format!("\"{template}\"").as_str())),
            ]);
            let err = load_err(&text);
            assert_eq!(err.kind(), ErrorKind::MalformedUrl, "{version:?}");
            assert_eq!(err.field(), Some("version"), "{version:?}");
        }
    }

    #[test]
    fn test_bad_homepage() {
        let err = load_err(&manifest(&[("homepage", Some("\"not a url\""))]));
        assert_eq!(err.field(), Some("homepage"));
    }

    #[test]
    fn test_blank_install_target_and_license() {
        let text = manifest(&[]).replace(
            "  install-target \"Pkg.app\"\n",
            "  install-target \"Pkg.app\"\n  install-target \"\"\n",
        );
        assert_eq!(load_err(&text), DomainError::missing("install-target"));

        let err = load_err(&manifest(&[("license", Some("\"\""))]));
        assert_eq!(err, DomainError::missing("license"));
    }

    #[test]
    fn test_hooks_are_passed_through() -> Result<()> {
        let text = manifest(&[]).replace(
            "}\n",
            "  post-install {\n    suppress_move_to_applications key: \"suppressMoveToApplications\"\n  }\n}\n",
        );
        let descriptor = ManifestLoader.load(&text)?;
        let hooks = descriptor.post_install_hooks();
        assert_eq!(hooks.len(), 1);
        assert_eq!(hooks[0].name(), "suppress_move_to_applications");
        assert_eq!(hooks[0].param("key"), Some("suppressMoveToApplications"));
        Ok(())
    }

    #[test]
    fn test_syntax_error_is_infrastructure() {
        let err = ManifestLoader.load("package \"pkg\" {\n").unwrap_err();
        assert!(err.kind().is_none());
        assert!(err.to_string().contains("unclosed package block"));
    }

    struct MemorySource(HashMap<PathBuf, String>);

    impl ManifestSource for MemorySource {
        fn read_manifest(&self, location: &Path) -> Result<String, KegError> {
            self.0.get(location).cloned().ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::NotFound, "not in memory").into()
            })
        }
    }

    #[test]
    fn test_load_from_source() -> Result<()> {
        let source = MemorySource(HashMap::from([(PathBuf::from("mem/pkg.keg"), manifest(&[]))]));
        let descriptor = ManifestLoader.load_from(&source, Path::new("mem/pkg.keg"))?;
        assert_eq!(descriptor.identifier(), "pkg");
        assert!(ManifestLoader
            .load_from(&source, Path::new("mem/other.keg"))
            .is_err());
        Ok(())
    }

    #[test]
    fn test_loader_is_shareable_across_threads() -> Result<()> {
        let text = manifest(&[]);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let text = text.clone();
                std::thread::spawn(move || ManifestLoader.load(&text).map(|d| d.identifier().to_string()))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("thread panicked")?, "pkg");
        }
        Ok(())
    }
}
