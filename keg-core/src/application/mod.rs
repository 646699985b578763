// keg-core/src/application/mod.rs

pub mod catalog;
pub mod loader;
pub mod resolve;
pub mod verify;

// --- RE-EXPORTS (FACADE PATTERN) ---
// The CLI can write `use keg_core::application::{ManifestLoader, Catalog};`
// without knowing the file layout.

pub use catalog::{Catalog, CatalogEntry, CatalogFailure};
pub use loader::ManifestLoader;
pub use resolve::resolve_download_url;
pub use verify::{ArtifactDigest, verify_artifact, verify_bytes};
