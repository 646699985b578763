pub mod settings;

pub use settings::{Settings, load_settings};
