//! Margin command - set the markup percentage

use anyhow::Result;

use super::get_context;
use crate::output;

pub fn run(value: &str) -> Result<()> {
    let ctx = get_context()?;
    ctx.auth_service.require_session()?;

    let margin = ctx.quote_service.set_margin(value)?;
    output::success(&format!("Margin set to {}%", margin.normalize()));
    Ok(())
}
