//! Row commands - add, remove and edit quote rows

use anyhow::Result;
use clap::Subcommand;
use uuid::Uuid;

use super::get_context;
use crate::output;
use tradequote_core::LineItemField;

#[derive(Subcommand)]
pub enum RowCommands {
    /// Add a blank row
    Add,

    /// Remove a row by id
    Remove {
        /// Row id (see 'tq show')
        id: Uuid,
    },

    /// Set fields on a row
    Set {
        /// Row id (see 'tq show')
        id: Uuid,
        /// Item description
        #[arg(long)]
        description: Option<String>,
        /// Quantity (unparsable input is treated as 0)
        #[arg(long)]
        quantity: Option<String>,
        /// Unit price (unparsable input is treated as 0)
        #[arg(long)]
        price: Option<String>,
    },
}

pub fn run(command: RowCommands) -> Result<()> {
    let ctx = get_context()?;
    ctx.auth_service.require_session()?;

    match command {
        RowCommands::Add => {
            let id = ctx.quote_service.add_row()?;
            output::success(&format!("Added row {}", id));
        }
        RowCommands::Remove { id } => {
            // Idempotent: removing an unknown row is not an error
            ctx.quote_service.remove_row(id)?;
            output::success(&format!("Removed row {}", id));
        }
        RowCommands::Set {
            id,
            description,
            quantity,
            price,
        } => {
            if description.is_none() && quantity.is_none() && price.is_none() {
                anyhow::bail!("Nothing to set. Pass --description, --quantity or --price.");
            }

            let updates = [
                (LineItemField::Description, description),
                (LineItemField::Quantity, quantity),
                (LineItemField::UnitPrice, price),
            ];
            for (field, value) in updates {
                if let Some(raw) = value {
                    let (_, found) = ctx.quote_service.update_field(id, field, &raw)?;
                    if !found {
                        anyhow::bail!("No row with id {}. Run 'tq show' to list rows.", id);
                    }
                }
            }
            output::success(&format!("Updated row {}", id));
        }
    }
    Ok(())
}
