//! Wordle Daily - CLI
//!
//! Daily five-letter word puzzle with TUI and line modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use wordle_daily::{
    commands::{run_simple, score_guess},
    config::Config,
    logging::{self, LogTarget},
    output::print_score_result,
    service::DEFAULT_API_URL,
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Guess the word of the day in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the word API
    #[arg(long, global = true, env = "WORDLE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Seconds to wait for the word API before giving up
    #[arg(long, global = true, default_value = "10")]
    timeout_secs: u64,

    /// Play offline: pick the target from this word list and accept only its words
    #[arg(short = 'w', long, global = true)]
    word_list: Option<PathBuf>,

    /// Write logs to this file (the TUI logs nowhere else)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against a target word, offline
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            api_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            word_list: self.word_list.clone(),
        }
    }

    fn log_target(&self, tui: bool) -> LogTarget {
        match (&self.log_file, tui) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, true) => LogTarget::Off,
            (None, false) => LogTarget::Stderr,
        }
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    let config = cli.config();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    logging::init(&cli.log_target(matches!(command, Commands::Play)), cli.verbose)?;

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Score { guess, target } => run_score_command(&guess, &target),
    }
}

fn run_play_command(config: &Config) -> Result<()> {
    use wordle_daily::interactive::run_tui;

    let service = config.word_service()?;
    run_tui(service)
}

fn run_simple_command(config: &Config) -> Result<()> {
    let service = config.word_service()?;
    run_simple(service.as_ref())
}

fn run_score_command(guess: &str, target: &str) -> Result<()> {
    let result = score_guess(guess, target).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result.guess, &result.target, &result.feedback);
    Ok(())
}
