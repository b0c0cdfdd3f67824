//! CLI entry point, the composition root.
//!
//! Infrastructure is wired together here and nowhere else: the command
//! handlers receive a ready [`pressroom_core::Repos`] or a full server
//! configuration.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pressroom_axum::{CorsConfig, ServerConfig, start_server};
use pressroom_cli::{Cli, Commands};
use pressroom_db::{StoreFactory, setup_database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve {
            app,
            port,
            allow_origins,
        } => {
            let cors = if allow_origins.is_empty() {
                CorsConfig::AllowAll
            } else {
                CorsConfig::AllowOrigins(allow_origins)
            };
            let config = ServerConfig {
                app: app.into(),
                port,
                db_path: cli.db_path,
                cors,
            };
            println!("Listening on http://127.0.0.1:{port}");
            start_server(config).await?;
        }
        Commands::Seed => {
            let pool = setup_database(&cli.db_path).await?;
            let repos = StoreFactory::build_repos(pool);
            pressroom_cli::seed::execute(&repos).await?;
        }
    }

    Ok(())
}
