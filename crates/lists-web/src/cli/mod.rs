use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use lists_config::ListsConfig;

/// Top-level CLI parser for the `superlists` binary.
#[derive(Debug, Parser)]
#[command(name = "superlists", version, about = "superlists - to-do lists on the web")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Extra TOML config file, layered above ./superlists.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the web server
    Serve(ServeArgs),
    /// Create or upgrade the database schema, then exit
    Migrate(MigrateArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen address, overrides server.bind_addr
    #[arg(long)]
    pub bind: Option<String>,

    /// Database path (or :memory:), overrides database.path
    #[arg(long)]
    pub database: Option<String>,
}

#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Database path, overrides database.path
    #[arg(long)]
    pub database: Option<String>,
}

impl ServeArgs {
    /// Command-line flags win over every config source.
    pub fn apply(&self, config: &mut ListsConfig) {
        if let Some(bind) = &self.bind {
            config.server.bind_addr.clone_from(bind);
        }
        if let Some(database) = &self.database {
            config.database.path.clone_from(database);
        }
    }
}

impl MigrateArgs {
    pub fn apply(&self, config: &mut ListsConfig) {
        if let Some(database) = &self.database {
            config.database.path.clone_from(database);
        }
    }
}
