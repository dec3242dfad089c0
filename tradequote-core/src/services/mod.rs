//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod auth;
mod email;
mod narration;
mod quote;
pub mod document;
pub mod logging;

pub use auth::AuthService;
pub use document::{DocumentService, RenderedDocument};
pub use email::{EmailDraft, EmailService};
pub use logging::{LogEntry, LogEvent, LoggingService};
pub use narration::NarrationService;
pub use quote::QuoteService;
