use anyhow::Result;
use clap::Parser;

use launchpad::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_serve,
};
use launchpad::cli::{Cli, Commands};
use launchpad::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    match cli.command {
        Commands::Init {
            port,
            page_size,
            users_file,
        } => handle_init(port, page_size, users_file),
        Commands::Schema => handle_schema(),
        Commands::Serve { port } => {
            let ctx = CommandContext::load(cli.config.as_deref())?;
            handle_serve(ctx, port)
        }
        Commands::Query {
            query,
            variables,
            token,
        } => {
            let ctx = CommandContext::load(cli.config.as_deref())?;
            handle_query(ctx, query, variables, token)
        }
        Commands::Mutate {
            mutation,
            variables,
            token,
        } => {
            let ctx = CommandContext::load(cli.config.as_deref())?;
            handle_mutate(ctx, mutation, variables, token)
        }
    }
}
