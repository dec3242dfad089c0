//! Quote draft domain model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::line_item::Ledger;

/// Client the quote is addressed to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub name: String,
    pub email: String,
}

/// An in-progress quote
///
/// The working state the original single-page tool kept on screen:
/// client details, the dictated/typed job description, the line-item
/// ledger and the margin. Persisted between invocations via the
/// key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDraft {
    pub client: ClientInfo,
    pub job_description: String,
    pub ledger: Ledger,
    pub margin_percent: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl QuoteDraft {
    /// Create a fresh draft with one blank ledger row
    pub fn new(client: ClientInfo, job_description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            client,
            job_description: job_description.into(),
            ledger: Ledger::with_blank_row(),
            margin_percent: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_has_one_blank_row_and_zero_margin() {
        let draft = QuoteDraft::new(ClientInfo::default(), "Fix leaking tap");
        assert_eq!(draft.ledger.len(), 1);
        assert_eq!(draft.margin_percent, Decimal::ZERO);
        assert_eq!(draft.job_description, "Fix leaking tap");
    }
}
