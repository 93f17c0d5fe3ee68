use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::deck;
use crate::transport::{Transport, BASE_VOLUME};

const DEFAULT_NARRATION: &str = "narration.mp3";

#[derive(Parser)]
#[command(name = "autodeck")]
#[command(author, version, about)]
#[command(long_about = "A self-running, narrated presentation.\n\n\
    Plays the built-in deck fullscreen with timed slide advancement and an\n\
    audio narration track.\n\n\
    Examples:\n  \
    autodeck                     Play fullscreen\n  \
    autodeck --windowed          Play in a window\n  \
    autodeck --slide 5           Open on slide 5\n  \
    autodeck --no-audio          Play without narration")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Start on a specific slide (1-indexed; bad values open slide 1)
    #[arg(long, global = false)]
    pub slide: Option<String>,

    /// Play without the narration track
    #[arg(long, global = false)]
    pub no_audio: bool,

    /// Narration audio file
    #[arg(long, global = false)]
    pub audio: Option<PathBuf>,

    /// Narration volume, 0.0 to 0.8
    #[arg(long, global = false)]
    pub volume: Option<f32>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.start_slide, defaults.volume)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::banner::print_banner_with_version();
                Ok(())
            }
            None => self.play(),
        }
    }

    fn play(self) -> anyhow::Result<()> {
        let config = crate::config::Config::load_or_default();
        let defaults = config.defaults.unwrap_or_default();

        let start_slide = match &self.slide {
            Some(param) => deck::resolve(param),
            None => defaults
                .start_slide
                .unwrap_or(deck::FIRST_SLIDE)
                .clamp(deck::FIRST_SLIDE, deck::SLIDE_COUNT),
        };
        let windowed = self.windowed || defaults.windowed.unwrap_or(false);
        let volume = self
            .volume
            .or(defaults.volume)
            .unwrap_or(BASE_VOLUME)
            .clamp(0.0, BASE_VOLUME);

        let source = if self.no_audio {
            None
        } else if let Some(path) = self.audio.or(defaults.audio) {
            // An explicitly requested file must exist.
            if !path.exists() {
                anyhow::bail!("Audio file not found: {}", path.display());
            }
            Some(path)
        } else {
            let default = PathBuf::from(DEFAULT_NARRATION);
            if default.exists() {
                Some(default)
            } else {
                log::warn!("no {DEFAULT_NARRATION} next to the binary; playing silent");
                None
            }
        };

        let scripted: std::time::Duration = (deck::FIRST_SLIDE..deck::SLIDE_COUNT)
            .filter_map(|n| deck::descriptor(n).auto_advance_after())
            .sum();
        log::debug!("scripted runtime before the terminal slide: {scripted:?}");

        let transport = Transport::new(source, volume);
        crate::app::run(start_slide, transport, windowed)
    }
}
