// keg/src/commands/resolve.rs

use std::path::Path;

use keg_core::infrastructure::Settings;
use keg_core::resolve_download_url;

use super::load_descriptor;

pub fn execute(file: &Path, settings: &Settings) -> miette::Result<()> {
    let descriptor = load_descriptor(file, settings)?;
    println!("{}", resolve_download_url(&descriptor)?);
    Ok(())
}
