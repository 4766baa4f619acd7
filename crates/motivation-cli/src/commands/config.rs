use std::path::PathBuf;

use clap::Subcommand;
use motivation_core::MotivationConfig;

use super::load_config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as JSON
    Show {
        /// Config file (defaults to ~/.config/motivation/config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Get a config value
    Get {
        /// Config key (e.g. "charThreshold", "motivation.idleMinutes")
        key: String,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the default config file path
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show { config } => {
            let cfg = load_config(config.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&cfg)?);
        }
        ConfigAction::Get { key, config } => {
            let cfg = load_config(config.as_deref())?;
            match cfg.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::Path => {
            println!("{}", MotivationConfig::default_path().display());
        }
    }
    Ok(())
}
