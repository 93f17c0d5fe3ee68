mod app;
mod banner;
mod chrome;
mod cli;
mod commands;
mod config;
mod deck;
mod input;
mod render;
mod sequencer;
mod theme;
mod transport;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    cli.run()
}
