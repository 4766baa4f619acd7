use std::path::PathBuf;

use clap::Args;
use motivation_core::replay::read_events_file;
use motivation_core::{
    CoreError, DefaultCatalog, Diagnostic, Extension, Host, MotivationConfig,
    RandomSource, SeededRandom, StatusSurface, ThreadRandom,
};
use tracing::info;

use super::load_config;

#[derive(Args)]
pub struct ReplayArgs {
    /// JSON Lines file of recorded editor events
    file: PathBuf,
    /// Config file (defaults to ~/.config/motivation/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for reproducible message choice
    #[arg(long)]
    seed: Option<u64>,
    /// Print the final session stats as JSON instead of the status
    #[arg(long)]
    json: bool,
}

/// Stands in for the editor: settings come from the config file. Recorded
/// save events carry their own diagnostics; saves without any are clean.
struct ReplayHost {
    settings: serde_json::Value,
    quiet: bool,
}

impl ReplayHost {
    fn new(config: &MotivationConfig, quiet: bool) -> Result<Self, serde_json::Error> {
        Ok(Self {
            settings: serde_json::to_value(config)?,
            quiet,
        })
    }
}

impl Host for ReplayHost {
    fn diagnostics(&self, _uri: &str) -> Vec<Diagnostic> {
        Vec::new()
    }

    fn configuration(&self, _namespace: &str) -> serde_json::Value {
        self.settings.clone()
    }

    fn show_notification(&mut self, text: &str, modal: bool) {
        if self.quiet {
            return;
        }
        if modal {
            println!("── stats ──\n{text}\n───────────");
        } else {
            println!("» {text}");
        }
    }

    fn set_status(&mut self, _status: &StatusSurface) {}
}

pub fn run(args: ReplayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args.config.as_deref())?;
    let events = read_events_file(&args.file).map_err(CoreError::from)?;
    let Some(first) = events.first() else {
        return Err(format!("no events in {}", args.file.display()).into());
    };

    let rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };
    let host = ReplayHost::new(&config, args.json)?;
    let mut ext = Extension::activate_with(host, first.at(), Box::new(DefaultCatalog), rng);
    info!(events = events.len(), file = %args.file.display(), "replaying");

    for event in &events {
        ext.dispatch(event);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(ext.session().stats())?);
    } else {
        let status = ext.status();
        println!("{}", status.text);
        println!();
        println!("{}", status.detail);
    }
    Ok(())
}
