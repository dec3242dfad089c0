//! New command - start a fresh quote draft

use anyhow::Result;
use dialoguer::{Confirm, Input};

use super::{get_context, get_logger, log_event};
use crate::output;
use tradequote_core::services::LogEvent;
use tradequote_core::ClientInfo;

pub fn run(
    client: Option<String>,
    client_email: Option<String>,
    description: Option<String>,
    force: bool,
) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();
    ctx.auth_service.require_session()?;

    if ctx.quote_service.has_draft()? && !force {
        let replace = Confirm::new()
            .with_prompt("A quote is already in progress. Replace it?")
            .default(false)
            .interact()?;
        if !replace {
            output::info("Keeping the existing quote.");
            return Ok(());
        }
    }

    let name = match client {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Client name")
            .allow_empty(true)
            .interact_text()?,
    };
    let email = match client_email {
        Some(e) => e,
        None => Input::new()
            .with_prompt("Client email")
            .allow_empty(true)
            .interact_text()?,
    };
    let description = match description {
        Some(d) => d,
        None => Input::new()
            .with_prompt("Job description")
            .allow_empty(true)
            .interact_text()?,
    };

    let draft = ctx
        .quote_service
        .new_draft(ClientInfo { name, email }, &description)?;

    log_event(&logger, LogEvent::new("quote_created").with_command("new"));
    output::success("Started a new quote.");
    println!(
        "Client: {}",
        if draft.client.name.is_empty() {
            "(none)"
        } else {
            &draft.client.name
        }
    );
    println!("Add items with 'tq row add', then 'tq show' to see totals.");
    Ok(())
}
