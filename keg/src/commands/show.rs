// keg/src/commands/show.rs
//
// USE CASE: human summary of one manifest.

use std::path::Path;

use keg_core::infrastructure::Settings;
use keg_core::resolve_download_url;

use super::load_descriptor;

pub fn execute(file: &Path, settings: &Settings) -> miette::Result<()> {
    let d = load_descriptor(file, settings)?;
    let url = resolve_download_url(&d)?;

    println!("{} ({})", d.display_name(), d.identifier());
    println!("  version:        {}", d.version());
    println!("  checksum:       sha256:{}", d.checksum());
    println!("  url:            {}", url);
    if let Some(homepage) = d.homepage() {
        println!("  homepage:       {}", homepage);
    }
    if let Some(license) = d.license() {
        println!("  license:        {}", license);
    }
    for target in d.install_targets() {
        println!("  install target: {}", target);
    }
    for hook in d.post_install_hooks() {
        println!("  post-install:   {}", hook);
    }
    Ok(())
}
