mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use regform::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "regform")]
#[command(version, about = "Conference registration form", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = "regform.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the empty form page as HTML
    Render {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Validate one value against one field
    Check {
        /// Field name, e.g. "username"
        field: String,

        /// Raw input value
        value: String,
    },

    /// Drive the form with events read line by line
    Session {
        /// Read events from a file instead of stdin
        #[arg(short, long)]
        script: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Render { out } => {
            commands::render::execute(&config, out.as_deref())?;
        }
        Commands::Check { field, value } => {
            if !commands::check::execute(&config, &field, &value)? {
                std::process::exit(1);
            }
        }
        Commands::Session { script } => {
            tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?
                .block_on(commands::session::execute(&config, script.as_deref()))?;
        }
    }

    Ok(())
}
