//! Configuration loading.

mod file;
mod paths;
mod types;
mod validate;

pub use file::{load_config, load_config_file};
pub use paths::{config_dir, config_file_path};
pub use types::{Config, EncodingConfig, ToolsConfig};
pub use validate::validate_config;
