use std::net::SocketAddr;

use clap::{Parser, Subcommand};

pub const SQLITE_CONNECTION_STRING: &str = "sqlite://click_ferris.db?mode=rwc";

/// Configure either Postgres or Sqlite connection string
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Postgres Db Connection String
    #[arg(short, long, env, default_value = None)]
    pub pg: Option<String>,

    /// Sqlite Db Connection String, used when no Postgres connection is configured
    #[arg(short, long, env, default_value = SQLITE_CONNECTION_STRING)]
    pub sqlite: String,

    /// Address the web server binds to
    #[arg(short, long, env, default_value = "127.0.0.1:3000")]
    pub listen: SocketAddr,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve the dashboard and the click data endpoints (default)
    Serve,
    /// Fill the clicks table with synthetic events from the last 24 hours
    Seed {
        /// Number of clicks generated for every page/event pair
        #[arg(short, long, default_value_t = crate::seed::NUM_EVENTS_TO_GENERATE)]
        events_per_kind: usize,
    },
}

impl Args {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }

    /// The Postgres connection string, if one was given and it isn't blank.
    pub fn postgres_url(&self) -> Option<&str> {
        self.pg.as_deref().filter(|pg| !pg.trim().is_empty())
    }
}
