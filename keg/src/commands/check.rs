// keg/src/commands/check.rs
//
// USE CASE: validate manifests, report every failure, exit non-zero if any.

use std::path::PathBuf;

use keg_core::infrastructure::Settings;
use miette::Report;

use super::load_descriptor;

pub fn execute(files: &[PathBuf], settings: &Settings) -> miette::Result<()> {
    let mut failed = 0;

    for file in files {
        match load_descriptor(file, settings) {
            Ok(descriptor) => {
                println!("ok {} {}", descriptor.identifier(), descriptor.version())
            }
            Err(e) => {
                failed += 1;
                eprintln!("{:?}", Report::new(e));
            }
        }
    }

    if failed > 0 {
        return Err(miette::miette!(
            "{} of {} manifest(s) failed validation",
            failed,
            files.len()
        ));
    }
    Ok(())
}
