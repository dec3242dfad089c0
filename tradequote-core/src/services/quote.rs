//! Quote service - draft lifecycle and row edits
//!
//! Each operation loads the working draft from the key-value store,
//! applies one edit and saves it back. The CLI is single-threaded per
//! invocation and the store serializes writers, so load-modify-save is
//! safe here.

use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{parse_amount, ClientInfo, LineItemField, QuoteDraft};
use crate::ports::key_value::keys;
use crate::ports::KeyValueStore;

/// Draft management over the key-value store
pub struct QuoteService {
    store: Arc<dyn KeyValueStore>,
}

impl QuoteService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Whether a working draft exists
    pub fn has_draft(&self) -> Result<bool> {
        Ok(self.store.get(keys::DRAFT)?.is_some())
    }

    /// Start a fresh draft, replacing any existing one
    pub fn new_draft(&self, client: ClientInfo, job_description: &str) -> Result<QuoteDraft> {
        let draft = QuoteDraft::new(client, job_description);
        self.save_draft(&draft)?;
        Ok(draft)
    }

    /// Load the working draft
    pub fn load_draft(&self) -> Result<QuoteDraft> {
        match self.store.get(keys::DRAFT)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Err(Error::validation("no quote in progress; start one first")),
        }
    }

    fn save_draft(&self, draft: &QuoteDraft) -> Result<()> {
        self.store.set(keys::DRAFT, &serde_json::to_string(draft)?)
    }

    fn modify(&self, edit: impl FnOnce(&mut QuoteDraft)) -> Result<QuoteDraft> {
        let mut draft = self.load_draft()?;
        edit(&mut draft);
        draft.touch();
        self.save_draft(&draft)?;
        Ok(draft)
    }

    /// Append a blank row, returning its id
    pub fn add_row(&self) -> Result<Uuid> {
        let mut id = Uuid::nil();
        self.modify(|draft| id = draft.ledger.add_row())?;
        Ok(id)
    }

    /// Remove a row; a no-op when the id is absent
    pub fn remove_row(&self, id: Uuid) -> Result<QuoteDraft> {
        self.modify(|draft| draft.ledger.remove_row(id))
    }

    /// Update one field of a row from raw user text
    ///
    /// Returns the updated draft and whether the row existed.
    pub fn update_field(
        &self,
        id: Uuid,
        field: LineItemField,
        raw: &str,
    ) -> Result<(QuoteDraft, bool)> {
        let mut found = false;
        let draft = self.modify(|draft| found = draft.ledger.update_field(id, field, raw))?;
        Ok((draft, found))
    }

    /// Set the margin percentage from raw user text (unparsable or
    /// negative input coerces to zero)
    pub fn set_margin(&self, raw: &str) -> Result<Decimal> {
        let margin = parse_amount(raw);
        self.modify(|draft| draft.margin_percent = margin)?;
        Ok(margin)
    }

    /// Replace the job description
    pub fn set_description(&self, text: &str) -> Result<QuoteDraft> {
        self.modify(|draft| draft.job_description = text.to_string())
    }

    /// Append dictated text to the job description
    pub fn append_description(&self, transcript: &str) -> Result<QuoteDraft> {
        self.modify(|draft| {
            if draft.job_description.is_empty() {
                draft.job_description = transcript.to_string();
            } else {
                draft.job_description.push(' ');
                draft.job_description.push_str(transcript);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::JsonFileStore;
    use crate::domain::{compute_totals, format_money};

    fn service_in(dir: &tempfile::TempDir) -> QuoteService {
        QuoteService::new(Arc::new(JsonFileStore::new(dir.path().join("store.json"))))
    }

    #[test]
    fn test_draft_round_trips_through_store() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir);

        let client = ClientInfo {
            name: "Jo Bloggs".to_string(),
            email: "jo@example.com".to_string(),
        };
        service.new_draft(client, "Replace hot water system").unwrap();

        let loaded = service.load_draft().unwrap();
        assert_eq!(loaded.client.name, "Jo Bloggs");
        assert_eq!(loaded.ledger.len(), 1);
    }

    #[test]
    fn test_load_without_draft_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(service_in(&dir).load_draft().is_err());
    }

    #[test]
    fn test_edits_persist_and_feed_totals() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir);
        service.new_draft(ClientInfo::default(), "").unwrap();

        let row = service.load_draft().unwrap().ledger.rows()[0].id;
        service
            .update_field(row, LineItemField::Description, "Install tap")
            .unwrap();
        service.update_field(row, LineItemField::Quantity, "2").unwrap();
        service
            .update_field(row, LineItemField::UnitPrice, "45.00")
            .unwrap();
        let margin = service.set_margin("10").unwrap();

        let draft = service.load_draft().unwrap();
        let totals = compute_totals(&draft.ledger, margin);
        assert_eq!(totals.subtotal, Decimal::new(9000, 2));
        assert_eq!(format_money(totals.total), "108.90");
    }

    #[test]
    fn test_unknown_row_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir);
        service.new_draft(ClientInfo::default(), "").unwrap();

        let (_, found) = service
            .update_field(Uuid::new_v4(), LineItemField::Quantity, "2")
            .unwrap();
        assert!(!found);
    }

    #[test]
    fn test_dictation_appends_with_separator() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir);
        service.new_draft(ClientInfo::default(), "").unwrap();

        service.append_description("Replace the kitchen tap").unwrap();
        let draft = service.append_description("and check the mains pressure").unwrap();
        assert_eq!(
            draft.job_description,
            "Replace the kitchen tap and check the mains pressure"
        );
    }
}
