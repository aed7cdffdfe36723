//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod export;
pub mod remark;
pub mod validate;

use std::path::Path;

use remit_core::RemitConfig;

/// Load configuration from an explicit path, the default location, or
/// fall back to built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<RemitConfig> {
    match config_path {
        Some(path) => Ok(RemitConfig::from_file(Path::new(path))?),
        None => {
            let default_path = config::default_config_path();
            if default_path.exists() {
                Ok(RemitConfig::from_file(&default_path)?)
            } else {
                Ok(RemitConfig::default())
            }
        }
    }
}
