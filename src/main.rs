use std::path::PathBuf;

use clap::Parser;

use ticklist::io::config_io::{default_config_path, read_config};
use ticklist::model::config::AppConfig;

/// A tiny terminal to-do list
#[derive(Parser)]
#[command(name = "tick", version, about)]
struct Cli {
    /// Path to the config file (default: ~/.config/ticklist/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = ticklist::tui::run(config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<PathBuf>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    match path.or_else(default_config_path) {
        Some(path) => Ok(read_config(&path)?),
        None => Ok(AppConfig::default()),
    }
}
