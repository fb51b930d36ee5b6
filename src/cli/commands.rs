use crate::config::{DEFAULT_USERS_FILE, DataSettings, ServerSettings};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "launchpad")]
#[command(
    author,
    version,
    about = "A GraphQL API for browsing rocket launches and booking trips"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .launchpad.yml by default)
    #[arg(long, global = true, env = "LAUNCHPAD_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .launchpad.yml in the current directory
    Init {
        /// Port the server listens on
        #[arg(long, default_value_t = ServerSettings::default().port)]
        port: u16,

        /// Default page size for the launches query
        #[arg(long, default_value_t = DataSettings::default().page_size)]
        page_size: usize,

        /// Persist users and trips to this JSON file
        #[arg(long, default_value = DEFAULT_USERS_FILE)]
        users_file: String,
    },

    /// Start GraphQL HTTP server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Execute a GraphQL query
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        /// Login token to act as
        #[arg(long, env = "LAUNCHPAD_TOKEN")]
        token: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        /// Login token to act as
        #[arg(long, env = "LAUNCHPAD_TOKEN")]
        token: Option<String>,
    },

    /// Print the GraphQL schema (SDL)
    Schema,
}
