//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Auther : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-06-30
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password generator command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rpawogen::configtool::{self, AppConfig};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "rpawogen", version)]
#[command(about = "Generate random, memorable and PIN passwords", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a random password from letters, numbers and symbols
    Random {
        /// Length of the password (4-32)
        #[arg(short, long)]
        length: Option<usize>,

        /// Include numbers
        #[arg(long, conflicts_with = "no_numbers")]
        numbers: bool,

        /// Exclude numbers
        #[arg(long)]
        no_numbers: bool,

        /// Include symbols
        #[arg(long, conflicts_with = "no_symbols")]
        symbols: bool,

        /// Exclude symbols
        #[arg(long)]
        no_symbols: bool,
    },

    /// Generate a memorable password from dictionary words
    Memorable {
        /// Number of words (4-10)
        #[arg(short, long)]
        words: Option<usize>,

        /// Separator placed between words
        #[arg(short, long, allow_hyphen_values = true)]
        separator: Option<String>,

        /// Randomly capitalize words
        #[arg(short, long, conflicts_with = "no_capitalize")]
        capitalize: bool,

        /// Keep words exactly as listed
        #[arg(long)]
        no_capitalize: bool,

        /// Word list file, one word per line
        #[arg(long)]
        wordlist: Option<PathBuf>,
    },

    /// Generate a numeric pin code
    Pin {
        /// Length of the pin code (4-32)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Choose a password type and its options step by step
    Interactive,

    /// Show the effective configuration
    Config {
        /// Write the default configuration file
        #[arg(long)]
        init: bool,
    },
}

fn flag(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn init_logging() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);

    if log_format.eq_ignore_ascii_case("json") {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config_path = configtool::resolve_config_path(cli.config.as_deref())?;
    let config = AppConfig::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    debug!(path = %config_path.display(), "config resolved");

    match cli.command {
        Commands::Random { length, numbers, no_numbers, symbols, no_symbols } => {
            commands::password_gen::generate_random(
                &config,
                length,
                flag(numbers, no_numbers),
                flag(symbols, no_symbols),
            )
        },
        Commands::Memorable { words, separator, capitalize, no_capitalize, wordlist } => {
            commands::password_gen::generate_memorable(
                &config,
                words,
                separator,
                flag(capitalize, no_capitalize),
                wordlist.as_deref(),
            )
        },
        Commands::Pin { length } => {
            commands::password_gen::generate_pin(&config, length)
        },
        Commands::Interactive => {
            commands::interactive::run(&config)
        },
        Commands::Config { init } => {
            if init {
                commands::config::init_config(&config_path)
            } else {
                commands::config::show_config(&config_path, &config)
            }
        },
    }
}
