//! Command-line front end

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod params;
pub mod tokenize;

/// Major/minor separator tokenizer
#[derive(Debug, Parser)]
#[command(name = "dualtok", version, about)]
pub struct Cli {
    /// Parameter store file
    #[arg(long, global = true, env = "DUALTOK_STORE", default_value = "dualtok.sqlite")]
    pub store: PathBuf,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Set one tokenizer parameter, creating the store with defaults if needed
    Set(params::SetArgs),

    /// Print every stored parameter as a JSON line
    Show,

    /// Delete the parameter store
    Delete,

    /// Write the stored parameters to a snapshot record file
    Export(params::ExportArgs),

    /// Replace the stored parameters with a snapshot record file
    Import(params::ImportArgs),

    /// Tokenize JSON-lines rows
    Tokenize(tokenize::TokenizeArgs),
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        self.init_logging();
        log::debug!("Arguments: {:?}", self);

        match &self.command {
            Commands::Set(args) => params::set(&self.store, args),
            Commands::Show => params::show(&self.store),
            Commands::Delete => params::delete(&self.store),
            Commands::Export(args) => params::export(&self.store, args),
            Commands::Import(args) => params::import(&self.store, args),
            Commands::Tokenize(args) => args.execute(&self.store),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // a second init (e.g. in tests) is harmless
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}
