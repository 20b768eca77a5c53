//! CLI entry point - the composition root.
//!
//! This is the only place where the HTTP backend and logging are wired
//! together. Command dispatch routes to handlers.

use clap::Parser;

use nodefetch_cli::handlers::download::DownloadArgs;
use nodefetch_cli::{Cli, Commands, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; --verbose raises the default filter to debug
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Download {
            url,
            dir,
            file_name,
            force,
            token,
            token_source,
            token_value,
        } => {
            handlers::download::execute(DownloadArgs {
                url,
                dir,
                file_name,
                force,
                token,
                token_source,
                token_value,
            })
            .await?;
        }
        Commands::Token { value, source } => {
            handlers::token::execute(&value, source)?;
        }
        Commands::Nodes => {
            handlers::nodes::execute()?;
        }
    }

    Ok(())
}
