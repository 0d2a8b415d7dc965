use anyhow::Context;
use clap::Parser;
use lists_config::ListsConfig;

mod cli;
mod commands;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("superlists error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = ListsConfig::load_with_dotenv(cli.config.as_deref())
        .context("failed to load configuration")?;

    match cli.command {
        cli::Commands::Serve(args) => {
            args.apply(&mut config);
            commands::serve(config).await
        }
        cli::Commands::Migrate(args) => {
            args.apply(&mut config);
            commands::migrate(config).await
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SUPERLISTS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
