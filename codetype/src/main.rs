use std::{error::Error, path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser, Subcommand};
use retype::{NamedKey, PracticeSession, Snippet};
use strum::IntoEnumIterator;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::{config::Settings, error::AppError, report::Report};

mod config;
mod error;
mod keys;
mod report;

#[derive(Debug, Parser)]
#[command(name = "codetype", version, about)]
struct Cli {
    /// Directory holding `settings.toml`. Defaults to the platform's config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log more. Repeat for trace output. `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print how a snippet is split into lines, indentation and words
    Tokenize {
        /// Snippet file
        file: PathBuf,
    },

    /// Type a snippet with a key script and print the resulting state as TOML
    Replay {
        /// Snippet file
        file: PathBuf,

        /// Key script, e.g. "if<BS>f (true) {\n"
        #[arg(long, required_unless_present = "keys_file", conflicts_with = "keys_file")]
        keys: Option<String>,

        /// Read the key script from a file. A single trailing newline is dropped.
        #[arg(long)]
        keys_file: Option<PathBuf>,
    },

    /// List the key names understood in key scripts
    Keys,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::Tokenize { file } => {
            let snippet = Snippet::new(&error::read_to_string(file)?);
            print!("{}", report::token_listing(&snippet));
        }
        Command::Replay {
            file,
            keys,
            keys_file,
        } => {
            let settings = Settings::get(cli.config)?;
            debug!(?settings, "Loaded settings");

            let script = match (keys, keys_file) {
                (Some(keys), _) => keys,
                (None, Some(path)) => {
                    let mut script = error::read_to_string(path)?;
                    if script.ends_with('\n') {
                        script.pop();
                        if script.ends_with('\r') {
                            script.pop();
                        }
                    }
                    script
                }
                (None, None) => String::new(),
            };
            let keys = keys::parse(&script)?;

            let mut session = PracticeSession::new(&error::read_to_string(file)?)
                .with_configuration(settings.caret);
            for key in keys {
                session.input(key);
            }

            let progress = session.progress();
            info!(
                accepted = progress.accepted,
                ignored = progress.ignored,
                "Replayed key script"
            );

            print!("{}", Report::from(&session).to_toml()?);
        }
        Command::Keys => {
            for key in NamedKey::iter() {
                println!("<{key}>");
            }
            println!("<<  a literal '<'");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            let mut source = error.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
