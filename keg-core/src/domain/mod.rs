pub mod error;
pub mod package;

// Re-exports pour raccourcir les imports côté application et CLI
pub use error::{DomainError, ErrorKind};
pub use package::PackageDescriptor;
