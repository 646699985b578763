// keg-core/src/infrastructure/fs.rs

use crate::infrastructure::error::InfrastructureError;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Replaces `path` with `content` through a sibling temp file and a rename,
/// so readers never observe a half-written export. Missing parent
/// directories are created.
pub fn write_atomically(path: &Path, content: &[u8]) -> Result<(), InfrastructureError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut staged = tempfile::Builder::new()
        .prefix(".keg-export")
        .tempfile_in(parent)?;
    staged.write_all(content)?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}
