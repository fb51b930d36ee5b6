use std::sync::Arc;

use anyhow::{Context, Result};
use async_graphql::{Request, Variables};

use crate::graphql::{AppState, build_schema, execute_with_token};

use super::CommandContext;

/// Parse `--variables` JSON, defaulting to no variables
pub fn parse_variables(variables: Option<String>) -> Result<Variables> {
    match variables {
        Some(v) => serde_json::from_str(&v).context("Variables must be a JSON object"),
        None => Ok(Variables::default()),
    }
}

/// Run a document in-process and print the JSON response
pub fn run_document(
    ctx: CommandContext,
    document: &str,
    variables: Option<String>,
    token: Option<String>,
) -> Result<()> {
    let state = Arc::new(AppState::load(ctx.config, &ctx.root)?);
    let schema = build_schema(state.clone());

    let request = Request::new(document).variables(parse_variables(variables)?);
    let response = tokio::runtime::Runtime::new()?.block_on(execute_with_token(
        &schema,
        &state,
        request,
        token.as_deref(),
    ));

    if response.is_err() {
        tracing::debug!(errors = response.errors.len(), "Request returned errors");
    }
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
