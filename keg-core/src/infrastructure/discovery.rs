// keg-core/src/infrastructure/discovery.rs

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

// Dotfiles and editor leftovers never count as manifests.
fn is_ignored(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    entry.file_name().to_str().is_some_and(|name| {
        name.starts_with('.') || name.ends_with(".tmp") || name.ends_with(".swp")
    })
}

/// Recursively lists manifest files under `root` with the given extension,
/// sorted by path. A missing root yields an empty list.
pub fn discover_manifests(root: &Path, extension: &str) -> Vec<PathBuf> {
    if !root.exists() {
        info!(dir = ?root, "Manifest directory does not exist");
        return Vec::new();
    }

    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_ignored(e))
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                warn!(error = %err, "Skipping unreadable entry");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(DirEntry::into_path)
        .filter(|p| p.extension().is_some_and(|ext| ext == extension))
        .collect();

    found.sort();
    debug!(count = found.len(), dir = ?root, "Discovered manifests");
    found
}
