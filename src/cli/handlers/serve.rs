use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::graphql::{AppState, build_schema, run_server};

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, port: Option<u16>) -> Result<()> {
    let ip: IpAddr = ctx
        .config
        .server
        .host
        .parse()
        .with_context(|| format!("Invalid server.host '{}'", ctx.config.server.host))?;
    let addr = SocketAddr::new(ip, port.unwrap_or(ctx.config.server.port));

    let state = Arc::new(AppState::load(ctx.config, &ctx.root)?);
    let schema = build_schema(state.clone());

    println!(
        "{} GraphQL server on http://{} ({} launches)",
        "Starting".green(),
        addr,
        state.catalog.len()
    );
    println!("GraphiQL: {}", format!("http://{}", addr).cyan());

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, state, addr))?;
    Ok(())
}
