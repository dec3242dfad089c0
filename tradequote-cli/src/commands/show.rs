//! Show command - current quote and totals

use anyhow::Result;
use colored::Colorize;

use super::get_context;
use crate::output;
use tradequote_core::{compute_totals, format_money};

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let session = ctx.auth_service.require_session()?;

    let draft = ctx.quote_service.load_draft()?;
    let totals = compute_totals(&draft.ledger, draft.margin_percent);

    if json {
        let view = serde_json::json!({
            "client": draft.client,
            "jobDescription": draft.job_description,
            "rows": draft.ledger.rows(),
            "totals": totals,
        });
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", format!("Quote by {}", session.display_name).bold());
    if !draft.client.name.is_empty() {
        println!("Client: {} {}", draft.client.name, draft.client.email.dimmed());
    }
    if !draft.job_description.is_empty() {
        println!("Job: {}", draft.job_description);
    }
    println!();

    let mut table = output::create_table();
    table.set_header(vec!["Row id", "Description", "Qty", "Unit price", "Line total"]);
    for item in draft.ledger.rows() {
        table.add_row(vec![
            item.id.to_string(),
            item.description.clone(),
            item.quantity.normalize().to_string(),
            format_money(item.unit_price),
            format_money(item.line_total()),
        ]);
    }
    for column in 2..=4 {
        output::align_money(&mut table, column);
    }
    println!("{}", table);
    println!();

    println!("Subtotal:          {}", format_money(totals.subtotal));
    println!(
        "With margin ({}%): {}",
        totals.margin_percent.normalize(),
        format_money(totals.taxable_amount)
    );
    println!("GST (10%):         {}", format_money(totals.tax));
    println!("{}", format!("Total:             {}", format_money(totals.total)).bold());

    Ok(())
}
