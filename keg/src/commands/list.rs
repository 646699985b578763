// keg/src/commands/list.rs
//
// USE CASE: load the catalog directory and print one row per package.

use std::path::{Path, PathBuf};

use comfy_table::Table;
use keg_core::Catalog;
use keg_core::infrastructure::{InfrastructureError, Settings};

pub fn execute(
    config_dir: &Path,
    dir: Option<PathBuf>,
    strict: bool,
    settings: &Settings,
) -> miette::Result<()> {
    // An explicit --dir must exist; the configured one may not be created yet.
    let root = match dir {
        Some(dir) if !dir.is_dir() => {
            return Err(InfrastructureError::ManifestDirNotFound { path: dir }.into());
        }
        Some(dir) => dir,
        None => settings.manifest_root(config_dir),
    };
    let settings = Settings {
        strict: settings.strict || strict,
        ..settings.clone()
    };

    let catalog = Catalog::load(&root, &settings)?;

    let mut table = Table::new();
    table.set_header(vec!["Identifier", "Version", "Name", "Install targets"]);
    for entry in catalog.entries() {
        let d = &entry.descriptor;
        table.add_row(vec![
            d.identifier().to_string(),
            d.version().to_string(),
            d.display_name().to_string(),
            d.install_targets().join(", "),
        ]);
    }
    println!("{table}");

    for failure in catalog.failures() {
        eprintln!("⚠️  skipped {}: {}", failure.path.display(), failure.error);
    }
    println!("{} package(s) in {}", catalog.len(), root.display());
    Ok(())
}
