// keg-core/src/domain/package/descriptor.rs

use super::checksum::Checksum;
use super::hook::Hook;
use super::license::License;
use serde::Serialize;

/// The validated, immutable form of a manifest.
///
/// Only the loader builds descriptors, so every instance satisfies the
/// manifest invariants: non-empty identity fields, a well-formed checksum,
/// a `url-template` carrying the version placeholder and at least one
/// install target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PackageDescriptor {
    identifier: String,
    version: String,
    checksum: Checksum,
    url_template: String,
    display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    license: Option<License>,
    install_targets: Vec<String>,
    post_install: Vec<Hook>,
}

/// Validated parts handed over by the loader.
pub(crate) struct DescriptorParts {
    pub identifier: String,
    pub version: String,
    pub checksum: Checksum,
    pub url_template: String,
    pub display_name: String,
    pub homepage: Option<String>,
    pub license: Option<License>,
    pub install_targets: Vec<String>,
    pub post_install: Vec<Hook>,
}

impl PackageDescriptor {
    pub(crate) fn from_parts(parts: DescriptorParts) -> Self {
        Self {
            identifier: parts.identifier,
            version: parts.version,
            checksum: parts.checksum,
            url_template: parts.url_template,
            display_name: parts.display_name,
            homepage: parts.homepage,
            license: parts.license,
            install_targets: parts.install_targets,
            post_install: parts.post_install,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn checksum(&self) -> &Checksum {
        &self.checksum
    }

    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref()
    }

    pub fn license(&self) -> Option<&License> {
        self.license.as_ref()
    }

    pub fn install_targets(&self) -> &[String] {
        &self.install_targets
    }

    pub fn post_install_hooks(&self) -> &[Hook] {
        &self.post_install
    }
}
