use anyhow::Result;

use crate::graphql::schema_sdl;

pub fn handle_schema() -> Result<()> {
    print!("{}", schema_sdl());
    Ok(())
}
