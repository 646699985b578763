// keg-core/src/ports/source.rs

// What the loader needs from the outside world: manifest text for a location.
// Whether it comes from disk, an archive or memory is the adapter's business.

use crate::error::KegError;
use std::path::Path;

pub trait ManifestSource: Send + Sync {
    fn read_manifest(&self, location: &Path) -> Result<String, KegError>;
}
