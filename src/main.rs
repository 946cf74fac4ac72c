//! TweetClean - Tweet normalization service
//!
//! Serves the HTTP API, or cleans text given on the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tweetclean::config::Config;
use tweetclean::http::{serve, AppState};
use tweetclean::lexicon::{load_lexicon_files, LexiconOptions, Lexicons};
use tweetclean::TextNormalizer;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to the per-user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(short, long)]
        port: Option<u16>,

        /// SQLite database file
        #[arg(long)]
        db: Option<String>,

        /// Slang dictionary CSV (informal,canonical)
        #[arg(long)]
        slang: Option<String>,

        /// Profanity CSV with an ABUSIVE column
        #[arg(long)]
        profanity: Option<String>,
    },

    /// Print the cleaned form of each argument
    Clean {
        #[arg(long)]
        slang: Option<String>,

        #[arg(long)]
        profanity: Option<String>,

        #[arg(required = true)]
        text: Vec<String>,
    },
}

fn init_logging(verbose: bool, config: &Config) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))
}

fn load_lexicons(config: &Config) -> Result<Arc<Lexicons>> {
    let options = LexiconOptions::from_config(config)?;
    let lexicons = load_lexicon_files(
        Path::new(&config.slang_path),
        Path::new(&config.profanity_path),
        &options,
    )
    .context("loading lexicons")?;
    Ok(Arc::new(lexicons))
}

#[actix_web::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_logging(args.verbose, &config)?;

    match args.command {
        Command::Serve {
            host,
            port,
            db,
            slang,
            profanity,
        } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(db) = db {
                config.db_path = db;
            }
            if let Some(slang) = slang {
                config.slang_path = slang;
            }
            if let Some(profanity) = profanity {
                config.profanity_path = profanity;
            }

            info!("🧹 TweetClean v{} starting...", env!("CARGO_PKG_VERSION"));
            let lexicons = load_lexicons(&config)?;
            let state = AppState::from_config(&config, lexicons)?;
            info!("🗄️ Storing tweets in {}", state.store.path().display());

            serve(&config, state).await?;
            info!("👋 TweetClean stopped");
        }
        Command::Clean {
            slang,
            profanity,
            text,
        } => {
            if let Some(slang) = slang {
                config.slang_path = slang;
            }
            if let Some(profanity) = profanity {
                config.profanity_path = profanity;
            }

            let normalizer = TextNormalizer::new(load_lexicons(&config)?);
            for pair in normalizer.normalize_all(text) {
                println!("{}", pair.cleaned);
            }
        }
    }

    Ok(())
}
