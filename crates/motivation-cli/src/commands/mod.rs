pub mod config;
pub mod replay;

use std::path::Path;

use motivation_core::{CoreError, MotivationConfig};

/// Load the config from `path`, or from the default location if none was given.
pub fn load_config(path: Option<&Path>) -> Result<MotivationConfig, CoreError> {
    let config = match path {
        Some(path) => MotivationConfig::load(path)?,
        None => MotivationConfig::load(&MotivationConfig::default_path())?,
    };
    Ok(config)
}
