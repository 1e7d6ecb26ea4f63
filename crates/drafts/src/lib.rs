//! Draft persistence, AI suggestion generation and the wizard session that
//! ties them to the suggestion engine.
//!
//! The backends are reached only through the narrow capability traits in
//! [`ports`]; in-memory and HTTP adapters live alongside.

pub mod generator;
pub mod memory;
pub mod ports;
pub mod restore;
pub mod session;

pub use generator::{HttpSuggestionGenerator, StaticSuggestionGenerator};
pub use memory::{InMemoryContextStore, InMemoryDraftRepository};
pub use ports::{ContextStore, DraftRepository, SuggestionGenerator};
pub use restore::{restore_draft, RestoredDraft};
pub use session::{SuggestionOutcome, WizardDeps, WizardSession};
