// keg/src/commands/verify.rs
//
// USE CASE: compare an already-downloaded artifact with the manifest checksum.

use std::path::Path;

use keg_core::infrastructure::Settings;
use keg_core::verify_artifact;

use super::load_descriptor;

pub fn execute(file: &Path, artifact: &Path, settings: &Settings) -> miette::Result<()> {
    let descriptor = load_descriptor(file, settings)?;
    let digest = verify_artifact(&descriptor, artifact)?;
    println!("ok {} {}", descriptor.identifier(), digest);
    Ok(())
}
