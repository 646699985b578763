// keg-core/src/infrastructure/mod.rs

pub mod config;
pub mod discovery;
pub mod error;
pub mod export;
pub mod fs;
pub mod parser;
pub mod source;

pub use config::{Settings, load_settings};
pub use error::InfrastructureError;
