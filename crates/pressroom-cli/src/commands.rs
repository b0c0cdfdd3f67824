//! Subcommand definitions.

use clap::{Subcommand, ValueEnum};

use pressroom_axum::AppSelect;

/// Which application a server instance hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AppArg {
    /// News site with comments
    News,
    /// Personal notes application
    Notes,
}

impl From<AppArg> for AppSelect {
    fn from(app: AppArg) -> Self {
        match app {
            AppArg::News => Self::News,
            AppArg::Notes => Self::Notes,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server for one application
    Serve {
        /// Application to serve
        #[arg(value_enum)]
        app: AppArg,

        /// Port to listen on
        #[arg(long, default_value_t = 8000)]
        port: u16,

        /// Allowed CORS origins; all origins when omitted
        #[arg(long = "allow-origin")]
        allow_origins: Vec<String>,
    },
    /// Fill the database with demo users, news and notes
    Seed,
}
