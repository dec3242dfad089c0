//! Document service - fixed-layout quote rendering
//!
//! Renders a quote as a paginated plain-text document: header, client
//! details, word-wrapped job description, an aligned item table and
//! the totals block. The same line layout feeds the email body, which
//! skips pagination.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::result::Result;
use crate::domain::{format_money, QuoteDraft, QuoteTotals, Session};

/// Printable width of a page, in characters
pub const PAGE_WIDTH: usize = 72;
/// Body lines per page, excluding the page footer
pub const LINES_PER_PAGE: usize = 48;
/// Item descriptions are cut to this width in the table
pub const DESCRIPTION_WIDTH: usize = 34;

const QTY_WIDTH: usize = 8;
const PRICE_WIDTH: usize = 12;
const TOTAL_WIDTH: usize = 12;

/// A rendered, paginated quote document
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub filename: String,
    pub pages: Vec<String>,
}

impl RenderedDocument {
    /// Full text with form feeds between pages
    pub fn text(&self) -> String {
        self.pages.join("\u{c}\n")
    }
}

/// Quote document renderer
#[derive(Debug, Default)]
pub struct DocumentService;

impl DocumentService {
    pub fn new() -> Self {
        Self
    }

    /// Render the quote for the given tradesperson session
    pub fn render(
        &self,
        session: &Session,
        draft: &QuoteDraft,
        totals: &QuoteTotals,
    ) -> RenderedDocument {
        let lines = self.render_lines(session, draft, totals);
        RenderedDocument {
            filename: format!("{}_quote.txt", derive_file_stem(&draft.client.name)),
            pages: paginate(&lines),
        }
    }

    /// Write the document into `dir`, returning the saved path
    pub fn save(&self, document: &RenderedDocument, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&document.filename);
        std::fs::write(&path, document.text())?;
        Ok(path)
    }

    /// The document body as unpaginated lines (shared with the email
    /// composer)
    pub fn render_lines(
        &self,
        session: &Session,
        draft: &QuoteDraft,
        totals: &QuoteTotals,
    ) -> Vec<String> {
        let mut lines = Vec::new();

        lines.push(center("QUOTE"));
        lines.push(center(&format!("Prepared by {}", session.display_name)));
        lines.push(center(&draft.updated_at.format("%-d %B %Y").to_string()));
        lines.push(String::new());

        let client_name = if draft.client.name.trim().is_empty() {
            "client"
        } else {
            draft.client.name.trim()
        };
        lines.push(format!("Client: {}", client_name));
        if !draft.client.email.trim().is_empty() {
            lines.push(format!("Email:  {}", draft.client.email.trim()));
        }
        lines.push(String::new());

        if !draft.job_description.trim().is_empty() {
            lines.push("Job description:".to_string());
            for wrapped in wrap_text(&draft.job_description, PAGE_WIDTH) {
                lines.push(wrapped);
            }
            lines.push(String::new());
        }

        lines.push(format!(
            "{:<desc$} {:>qty$} {:>price$} {:>total$}",
            "Description",
            "Qty",
            "Unit price",
            "Line total",
            desc = DESCRIPTION_WIDTH,
            qty = QTY_WIDTH,
            price = PRICE_WIDTH,
            total = TOTAL_WIDTH,
        ));
        lines.push("-".repeat(PAGE_WIDTH));
        for item in draft.ledger.rows() {
            lines.push(format!(
                "{:<desc$} {:>qty$} {:>price$} {:>total$}",
                truncate(&item.description, DESCRIPTION_WIDTH),
                item.quantity.normalize().to_string(),
                format_money(item.unit_price),
                format_money(item.line_total()),
                desc = DESCRIPTION_WIDTH,
                qty = QTY_WIDTH,
                price = PRICE_WIDTH,
                total = TOTAL_WIDTH,
            ));
        }
        lines.push("-".repeat(PAGE_WIDTH));
        lines.push(String::new());

        let margin_label = format!("With margin ({}%)", totals.margin_percent.normalize());
        for (label, amount) in [
            ("Subtotal", format_money(totals.subtotal)),
            (margin_label.as_str(), format_money(totals.taxable_amount)),
            ("GST (10%)", format_money(totals.tax)),
            ("Total", format_money(totals.total)),
        ] {
            lines.push(right_align(&format!("{}: {}", label, amount)));
        }

        lines
    }
}

/// Derive a file stem from the client name: whitespace runs become
/// underscores, blank names fall back to "client"
pub fn derive_file_stem(client_name: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let whitespace = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"));

    let trimmed = client_name.trim();
    if trimmed.is_empty() {
        return "client".to_string();
    }
    whitespace.replace_all(trimmed, "_").into_owned()
}

/// Word-wrap text to the given width; words longer than a full line
/// are hard-split
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while word.chars().count() > width {
            let head: String = word.chars().take(width).collect();
            let tail: String = word.chars().skip(width).collect();
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(head);
            word = tail;
        }

        let needed = word.chars().count() + if current.is_empty() { 0 } else { 1 };
        if current.chars().count() + needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

fn center(text: &str) -> String {
    let len = text.chars().count();
    if len >= PAGE_WIDTH {
        return text.to_string();
    }
    format!("{}{}", " ".repeat((PAGE_WIDTH - len) / 2), text)
}

fn right_align(text: &str) -> String {
    let len = text.chars().count();
    if len >= PAGE_WIDTH {
        return text.to_string();
    }
    format!("{}{}", " ".repeat(PAGE_WIDTH - len), text)
}

/// Split body lines into fixed-size pages with a numbered footer
fn paginate(lines: &[String]) -> Vec<String> {
    let chunks: Vec<&[String]> = if lines.is_empty() {
        vec![&[]]
    } else {
        lines.chunks(LINES_PER_PAGE).collect()
    };
    let page_count = chunks.len();

    chunks
        .iter()
        .enumerate()
        .map(|(index, chunk)| {
            let mut page = chunk.join("\n");
            page.push('\n');
            for _ in chunk.len()..LINES_PER_PAGE {
                page.push('\n');
            }
            page.push_str(&center(&format!("Page {} of {}", index + 1, page_count)));
            page.push('\n');
            page
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{compute_totals, ClientInfo, LineItemField, QuoteDraft};
    use rust_decimal::Decimal;

    fn sample_draft() -> QuoteDraft {
        let mut draft = QuoteDraft::new(
            ClientInfo {
                name: "Jo Bloggs".to_string(),
                email: "jo@example.com".to_string(),
            },
            "Replace the kitchen tap and check the mains pressure while on site",
        );
        let row = draft.ledger.rows()[0].id;
        draft.ledger.update_field(row, LineItemField::Description, "Install tap");
        draft.ledger.update_field(row, LineItemField::Quantity, "2");
        draft.ledger.update_field(row, LineItemField::UnitPrice, "45.00");
        draft
    }

    fn sample_session() -> Session {
        Session::new_local("trade@example.com", "Dave's Plumbing")
    }

    #[test]
    fn test_filename_derivation() {
        assert_eq!(derive_file_stem("Jo Bloggs"), "Jo_Bloggs");
        assert_eq!(derive_file_stem("  Jo   van  Bloggs "), "Jo_van_Bloggs");
        assert_eq!(derive_file_stem(""), "client");
        assert_eq!(derive_file_stem("   "), "client");
    }

    #[test]
    fn test_document_contains_rows_and_totals() {
        let draft = sample_draft();
        let totals = compute_totals(&draft.ledger, Decimal::new(10, 0));
        let document = DocumentService::new().render(&sample_session(), &draft, &totals);

        assert_eq!(document.filename, "Jo_Bloggs_quote.txt");
        let text = document.text();
        assert!(text.contains("Install tap"));
        assert!(text.contains("Total: 108.90"));
        assert!(text.contains("GST (10%): 9.90"));
        assert!(text.contains("Client: Jo Bloggs"));
    }

    #[test]
    fn test_amounts_are_right_aligned_in_columns() {
        let draft = sample_draft();
        let totals = compute_totals(&draft.ledger, Decimal::ZERO);
        let lines =
            DocumentService::new().render_lines(&sample_session(), &draft, &totals);

        let row = lines
            .iter()
            .find(|line| line.contains("Install tap"))
            .unwrap();
        let expected = DESCRIPTION_WIDTH + QTY_WIDTH + PRICE_WIDTH + TOTAL_WIDTH + 3;
        assert_eq!(row.chars().count(), expected);
        assert!(row.ends_with("90.00"));
        // Quantity column is right-aligned: padded spaces before "2"
        assert!(row.contains("   2 "));
    }

    #[test]
    fn test_long_description_is_truncated() {
        let mut draft = sample_draft();
        let row = draft.ledger.rows()[0].id;
        let long = "x".repeat(100);
        draft.ledger.update_field(row, LineItemField::Description, &long);
        let totals = compute_totals(&draft.ledger, Decimal::ZERO);
        let lines =
            DocumentService::new().render_lines(&sample_session(), &draft, &totals);

        assert!(!lines.iter().any(|line| line.contains(&long)));
        assert!(lines
            .iter()
            .any(|line| line.contains(&"x".repeat(DESCRIPTION_WIDTH))));
    }

    #[test]
    fn test_job_description_wraps_within_page_width() {
        let draft = sample_draft();
        let totals = compute_totals(&draft.ledger, Decimal::ZERO);
        let lines =
            DocumentService::new().render_lines(&sample_session(), &draft, &totals);
        assert!(lines
            .iter()
            .all(|line| line.chars().count() <= PAGE_WIDTH + 2));
    }

    #[test]
    fn test_many_rows_paginate() {
        let mut draft = sample_draft();
        for i in 0..120 {
            let id = draft.ledger.add_row();
            draft
                .ledger
                .update_field(id, LineItemField::Description, &format!("Fitting {}", i));
        }
        let totals = compute_totals(&draft.ledger, Decimal::ZERO);
        let document = DocumentService::new().render(&sample_session(), &draft, &totals);

        assert!(document.pages.len() > 1);
        let last = document.pages.last().unwrap();
        assert!(last.contains(&format!("Page {} of {}", document.pages.len(), document.pages.len())));
    }

    #[test]
    fn test_save_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let draft = sample_draft();
        let totals = compute_totals(&draft.ledger, Decimal::ZERO);
        let service = DocumentService::new();
        let document = service.render(&sample_session(), &draft, &totals);

        let path = service.save(&document, dir.path()).unwrap();
        assert!(path.ends_with("Jo_Bloggs_quote.txt"));
        assert!(std::fs::read_to_string(path).unwrap().contains("QUOTE"));
    }
}
