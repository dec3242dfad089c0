//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod account;
mod line_item;
mod quote;
mod session;
pub mod result;
pub mod totals;

pub use account::Account;
pub use line_item::{parse_amount, Ledger, LineItem, LineItemField};
pub use quote::{ClientInfo, QuoteDraft};
pub use session::Session;
pub use totals::{compute_totals, format_money, QuoteTotals};
