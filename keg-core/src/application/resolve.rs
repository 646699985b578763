// keg-core/src/application/resolve.rs
//
// USE CASE: descriptor -> concrete download URL.

use url::Url;

use crate::domain::error::DomainError;
use crate::domain::package::{
    PackageDescriptor, VERSION_PLACEHOLDER, field, substitute_version, url_unsafe_version,
};

/// Substitutes the version into `url-template`.
///
/// The loader already guarantees the placeholder and the URL shape, but a
/// descriptor may come from elsewhere in the future, so both are checked
/// again here. The version always appears verbatim in the result.
pub fn resolve_download_url(descriptor: &PackageDescriptor) -> Result<Url, DomainError> {
    let template = descriptor.url_template();
    let failure = |reason: String| DomainError::TemplateSubstitution {
        field: field::URL_TEMPLATE.to_string(),
        template: template.to_string(),
        reason,
    };

    let version = descriptor.version();
    if let Some(reason) = url_unsafe_version(version) {
        return Err(failure(reason.to_string()));
    }
    let substituted = substitute_version(template, version)
        .ok_or_else(|| failure(format!("placeholder `{VERSION_PLACEHOLDER}` not found")))?;

    let url = Url::parse(&substituted).map_err(|e| failure(e.to_string()))?;
    if !url.as_str().contains(version) {
        return Err(failure(format!("URL normalization altered version `{version}`")));
    }
    Ok(url)
}
