//! Export commands - document, speech and email

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use super::{get_context, get_logger, log_event};
use crate::output;
use tradequote_core::compute_totals;
use tradequote_core::services::LogEvent;

#[derive(Subcommand)]
pub enum ExportCommands {
    /// Save the quote as a document
    Doc {
        /// Output directory (defaults to the current directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Read the quote aloud
    Speak {
        /// Voice name (see 'tq voices')
        #[arg(long)]
        voice: Option<String>,
    },

    /// Compose a quote email
    Email {
        /// Recipient (defaults to the client email; may be left for
        /// the mail client to prompt)
        #[arg(long)]
        to: Option<String>,
    },
}

pub fn run(command: ExportCommands) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();
    let session = ctx.auth_service.require_session()?;

    let draft = ctx.quote_service.load_draft()?;
    let totals = compute_totals(&draft.ledger, draft.margin_percent);

    match command {
        ExportCommands::Doc { out } => {
            let dir = out.unwrap_or_else(|| PathBuf::from("."));
            std::fs::create_dir_all(&dir)?;
            let document = ctx.document_service.render(&session, &draft, &totals);
            let path = ctx.document_service.save(&document, &dir)?;
            log_event(&logger, LogEvent::new("export_doc").with_command("export"));
            output::success(&format!("Saved quote to {}", path.display()));
            println!("{} page(s)", document.pages.len());
        }
        ExportCommands::Speak { voice } => {
            if !ctx.narration_service.is_available() {
                output::warning("Speech is unavailable: no speech engine is configured.");
                println!("Use 'tq export doc' or 'tq export email' instead.");
                return Ok(());
            }
            ctx.narration_service
                .narrate(&session, &draft, &totals, voice.as_deref())?;
            log_event(&logger, LogEvent::new("export_speak").with_command("export"));
            output::success("Speaking the quote summary.");
        }
        ExportCommands::Email { to } => {
            let recipient = to.or_else(|| ctx.config.default_recipient.clone());
            let email =
                ctx.email_service
                    .compose(&session, &draft, &totals, recipient.as_deref())?;
            log_event(&logger, LogEvent::new("export_email").with_command("export"));

            if email.to.is_empty() {
                output::info("No recipient set; your mail client will prompt for one.");
            }
            println!("Subject: {}", email.subject);
            println!();
            println!("{}", email.mailto);
        }
    }
    Ok(())
}

pub fn voices(json: bool) -> Result<()> {
    let ctx = get_context()?;

    if !ctx.narration_service.is_available() {
        output::warning("Speech is unavailable: no speech engine is configured.");
        return Ok(());
    }

    let voices = ctx.narration_service.voices()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&voices)?);
        return Ok(());
    }

    if voices.is_empty() {
        output::info("The speech engine reported no voices (the list may populate later).");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Voice", "Language"]);
    for voice in &voices {
        table.add_row(vec![voice.name.clone(), voice.language.clone()]);
    }
    println!("{}", table);
    Ok(())
}
