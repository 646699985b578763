// keg-core/src/domain/package/mod.rs

pub mod checksum;
pub mod descriptor;
pub mod hook;
pub mod license;
pub mod template;

pub use checksum::{Checksum, SHA256_HEX_LEN};
pub use descriptor::PackageDescriptor;
pub use hook::{Hook, HookParam};
pub use license::License;
pub use template::{VERSION_PLACEHOLDER, substitute_version, url_unsafe_version};

/// Manifest keys, as written in manifest text and reported in errors.
pub mod field {
    pub const IDENTIFIER: &str = "identifier";
    pub const VERSION: &str = "version";
    pub const CHECKSUM: &str = "checksum";
    pub const URL_TEMPLATE: &str = "url-template";
    pub const DISPLAY_NAME: &str = "display-name";
    pub const HOMEPAGE: &str = "homepage";
    pub const LICENSE: &str = "license";
    pub const INSTALL_TARGET: &str = "install-target";
    pub const POST_INSTALL: &str = "post-install";
}
