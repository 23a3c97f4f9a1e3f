use std::path::PathBuf;

use anyhow::{Context, Result};
use evento_core::config::EventoConfig;
use owo_colors::OwoColorize;

pub fn run(mut config: EventoConfig, set_data_file: Option<PathBuf>) -> Result<()> {
    let config_path = EventoConfig::config_path()?;

    if let Some(data_file) = set_data_file {
        config.data_file = data_file;
        config
            .save()
            .with_context(|| format!("Failed to update {}", config_path.display()))?;
        println!("{}", "Config updated".green());
    }

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Events:  {}", config.data_path().display());
    println!("{}", "Logging".bold());
    println!("  Level:   {}", config.log_level);

    Ok(())
}
