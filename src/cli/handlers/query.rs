use anyhow::Result;

use super::CommandContext;
use super::utils::run_document;

pub fn handle_query(
    ctx: CommandContext,
    query: String,
    variables: Option<String>,
    token: Option<String>,
) -> Result<()> {
    run_document(ctx, &query, variables, token)
}
