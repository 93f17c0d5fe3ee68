use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();
    let defaults = config.defaults.unwrap_or_default();

    println!();
    println!("  {} {}", "config".bold(), path.display().to_string().dimmed());
    println!();
    let show_opt = |key: &str, value: Option<String>| match value {
        Some(v) => println!("  {key} = {v}"),
        None => println!("  {key} = {}", "(unset)".dimmed()),
    };
    show_opt(
        "defaults.start_slide",
        defaults.start_slide.map(|n| n.to_string()),
    );
    show_opt(
        "defaults.audio",
        defaults.audio.map(|p| p.display().to_string()),
    );
    show_opt("defaults.volume", defaults.volume.map(|v| v.to_string()));
    show_opt(
        "defaults.windowed",
        defaults.windowed.map(|b| b.to_string()),
    );
    println!();
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!("Updated {key} in {}", path.display());
    Ok(())
}
