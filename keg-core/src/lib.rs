// keg-core/src/lib.rs

// 1. Memory safety
#![deny(unsafe_code)]
// 2. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 3. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// Ports: what the loader needs from the outside (manifest text).
pub mod ports;

// Domain: descriptor, checksum, hooks and the validation taxonomy.
// Depends on nothing else in the crate.
pub mod domain;

// Infrastructure: grammar, filesystem, settings, serialization.
pub mod infrastructure;

// Application: load, resolve, verify, catalog.
pub mod application;

pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use application::{Catalog, ManifestLoader, resolve_download_url, verify_artifact};
pub use domain::{DomainError, ErrorKind, PackageDescriptor};
pub use error::KegError;
