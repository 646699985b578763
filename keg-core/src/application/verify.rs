// keg-core/src/application/verify.rs
//
// USE CASE: check a downloaded artifact against the manifest checksum
// before anything gets installed.

use sha2::{Digest, Sha256};
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::{info, instrument};

use crate::domain::PackageDescriptor;
use crate::domain::error::DomainError;
use crate::error::KegError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDigest {
    pub algorithm: &'static str,
    pub hex: String,
}

impl fmt::Display for ArtifactDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.hex)
    }
}

fn compare(descriptor: &PackageDescriptor, hasher: Sha256) -> Result<ArtifactDigest, DomainError> {
    let hex = hex::encode(hasher.finalize());
    if !descriptor.checksum().matches(&hex) {
        return Err(DomainError::ChecksumMismatch {
            expected: descriptor.checksum().to_string(),
            actual: hex,
        });
    }
    Ok(ArtifactDigest {
        algorithm: "sha256",
        hex,
    })
}

pub fn verify_bytes(
    descriptor: &PackageDescriptor,
    artifact: &[u8],
) -> Result<ArtifactDigest, DomainError> {
    let mut hasher = Sha256::new();
    hasher.update(artifact);
    compare(descriptor, hasher)
}

/// Streams the file through SHA-256; the artifact is never held in memory.
#[instrument(skip(descriptor), fields(identifier = descriptor.identifier()))]
pub fn verify_artifact(
    descriptor: &PackageDescriptor,
    artifact: &Path,
) -> Result<ArtifactDigest, KegError> {
    let mut reader = BufReader::new(File::open(artifact)?);
    let mut hasher = Sha256::new();
    io::copy(&mut reader, &mut hasher)?;

    let digest = compare(descriptor, hasher)?;
    info!(digest = %digest, "Artifact checksum verified");
    Ok(digest)
}
