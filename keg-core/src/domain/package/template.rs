// keg-core/src/domain/package/template.rs

/// Placeholder replaced by the package version in `url-template`.
pub const VERSION_PLACEHOLDER: &str = "{version}";

pub fn has_version_placeholder(template: &str) -> bool {
    template.contains(VERSION_PLACEHOLDER)
}

/// Replaces every `{version}` occurrence. `None` when the template has none.
pub fn substitute_version(template: &str, version: &str) -> Option<String> {
    has_version_placeholder(template).then(|| template.replace(VERSION_PLACEHOLDER, version))
}

/// Why `version` cannot be placed in a URL verbatim, if it cannot.
///
/// URL parsing percent-encodes spaces and non-ASCII text, treats `?` and `#`
/// as delimiters and collapses `.`/`..` segments; any of those would alter
/// the version inside the resolved URL.
pub fn url_unsafe_version(version: &str) -> Option<&'static str> {
    if version.chars().any(|c| !c.is_ascii_graphic()) {
        return Some("version must be printable ASCII without whitespace");
    }
    if version.contains(['/', '\\', '?', '#', '%']) {
        return Some("version must not contain `/`, `\\`, `?`, `#` or `%`");
    }
    if version == "." || version == ".." {
        return Some("version must not be a `.` or `..` path segment");
    }
    None
}
