//! Email service - quote email drafts
//!
//! Builds a plain-text subject/body pair mirroring the rendered
//! document and packs it into a percent-encoded mailto URI for handoff
//! to the platform's mail handler. The recipient may be blank, in
//! which case the mail client prompts for one.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::domain::result::{Error, Result};
use crate::domain::{QuoteDraft, QuoteTotals, Session};
use crate::services::document::DocumentService;

/// A composed email ready for handoff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
    /// mailto URI carrying the addressed/subject/body triple
    pub mailto: String,
}

/// Email composition over the shared document layout
pub struct EmailService {
    documents: DocumentService,
}

impl EmailService {
    pub fn new() -> Self {
        Self {
            documents: DocumentService::new(),
        }
    }

    /// Compose the quote email
    ///
    /// Recipient resolution: explicit override, then the client email
    /// on the draft, then blank.
    pub fn compose(
        &self,
        session: &Session,
        draft: &QuoteDraft,
        totals: &QuoteTotals,
        recipient: Option<&str>,
    ) -> Result<EmailDraft> {
        let to = recipient
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| draft.client.email.trim())
            .to_string();
        if !to.is_empty() && !to.contains('@') {
            return Err(Error::validation(format!(
                "recipient {:?} is not an email address",
                to
            )));
        }

        let client_name = draft.client.name.trim();
        let subject = if client_name.is_empty() {
            format!("Quote from {}", session.display_name)
        } else {
            format!("Quote for {} from {}", client_name, session.display_name)
        };

        let body = self
            .documents
            .render_lines(session, draft, totals)
            .join("\n");

        let mailto = format!(
            "mailto:{}?subject={}&body={}",
            to,
            utf8_percent_encode(&subject, NON_ALPHANUMERIC),
            utf8_percent_encode(&body, NON_ALPHANUMERIC),
        );

        Ok(EmailDraft {
            to,
            subject,
            body,
            mailto,
        })
    }
}

impl Default for EmailService {
    fn default() -> Self {
        Self::new()
    }
}
