//! Top-level argument parser.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the pressroom server.
#[derive(Parser)]
#[command(name = "pressroom")]
#[command(about = "Serve the news site or the notes app over HTTP")]
#[command(version)]
pub struct Cli {
    /// Path to the SQLite database file
    #[arg(long = "db", global = true, env = "PRESSROOM_DB", default_value = "pressroom.db")]
    pub db_path: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    use crate::commands::AppArg;

    #[test]
    fn parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_args_parse() {
        let cli = Cli::parse_from(["pressroom", "--db", "/tmp/press.db", "serve", "notes", "--port", "9000"]);
        assert_eq!(cli.db_path, PathBuf::from("/tmp/press.db"));
        match cli.command {
            Some(Commands::Serve { app, port, .. }) => {
                assert_eq!(app, AppArg::Notes);
                assert_eq!(port, 9000);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
