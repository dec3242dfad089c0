//! Describe and dictate commands - job description editing

use anyhow::Result;

use super::{get_context, get_logger, log_event};
use crate::output;
use tradequote_core::services::LogEvent;

pub fn run(text: &str, append: bool) -> Result<()> {
    let ctx = get_context()?;
    ctx.auth_service.require_session()?;

    let draft = if append {
        ctx.quote_service.append_description(text)?
    } else {
        ctx.quote_service.set_description(text)?
    };

    output::success("Job description updated.");
    println!("{}", draft.job_description);
    Ok(())
}

pub fn dictate() -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();
    ctx.auth_service.require_session()?;

    if !ctx.recognizer.is_available() {
        // Degrade gracefully: explain, leave everything else usable
        output::warning("Dictation is unavailable: no speech engine is configured.");
        println!("Use 'tq describe <text>' to type the job description instead.");
        return Ok(());
    }

    output::info("Listening... speak now.");
    match ctx.recognizer.recognize() {
        Ok(transcript) => {
            let draft = ctx.quote_service.append_description(&transcript)?;
            log_event(&logger, LogEvent::new("dictation_ok").with_command("dictate"));
            output::success("Added to the job description:");
            println!("{}", draft.job_description);
            Ok(())
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("dictation_failed")
                    .with_command("dictate")
                    .with_error(e.to_string()),
            );
            Err(e.into())
        }
    }
}
