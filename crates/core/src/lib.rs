//! Shared domain types for the campaign wizard: drafts, business context,
//! AI suggestion payloads, errors, configuration and lifecycle events.

pub mod config;
pub mod error;
pub mod event_bus;
pub mod types;

pub use config::AppConfig;
pub use error::{WizardError, WizardResult};
pub use types::{
    BusinessContext, CampaignDraft, DraftData, DraftRecord, DraftStatus, FieldMap, Platform,
    SavedContext, SuggestionGroup, SuggestionGroupKind, SuggestionSet,
};
