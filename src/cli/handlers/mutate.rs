use anyhow::Result;

use super::CommandContext;
use super::utils::run_document;

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
    token: Option<String>,
) -> Result<()> {
    // Auto-wrap in mutation { }
    let document = format!("mutation {{ {} }}", mutation);
    run_document(ctx, &document, variables, token)
}
