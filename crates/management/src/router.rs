//! Wizard API router. Mounts all wizard endpoints under /api/v1/wizard.

use crate::handlers::{self, ManagementState};
use axum::routing::{get, post};
use axum::Router;
use campaign_core::event_bus::noop_sink;
use campaign_drafts::{
    InMemoryContextStore, InMemoryDraftRepository, StaticSuggestionGenerator, SuggestionGenerator,
};
use std::sync::Arc;

impl ManagementState {
    /// In-memory repositories around the given generator.
    pub fn in_memory(generator: Arc<dyn SuggestionGenerator>, seed_demo: bool) -> Self {
        let drafts = if seed_demo {
            InMemoryDraftRepository::with_demo_data()
        } else {
            InMemoryDraftRepository::new()
        };
        Self {
            drafts: Arc::new(drafts),
            contexts: Arc::new(InMemoryContextStore::new()),
            generator,
            events: noop_sink(),
        }
    }

    /// In-memory state whose generator never returns suggestions.
    pub fn offline() -> Self {
        Self::in_memory(Arc::new(StaticSuggestionGenerator::unavailable()), false)
    }
}

/// Build the wizard router with all endpoints.
/// Returns a Router that should be merged into the main app.
pub fn wizard_router(state: ManagementState) -> Router {
    Router::new()
        // Platforms
        .route("/api/v1/wizard/platforms", get(handlers::list_platforms))
        // Drafts
        .route("/api/v1/wizard/drafts", get(handlers::list_drafts).post(handlers::create_draft))
        .route("/api/v1/wizard/drafts/:id", get(handlers::get_draft).put(handlers::update_draft).delete(handlers::delete_draft))
        .route("/api/v1/wizard/drafts/:id/apply-suggestions", post(handlers::apply_draft_suggestions))
        .route("/api/v1/wizard/drafts/:id/validate", post(handlers::validate_draft))
        // Suggestions
        .route("/api/v1/wizard/suggestions/apply", post(handlers::apply_suggestions))
        .route("/api/v1/wizard/suggestions/generate", post(handlers::generate_suggestions))
        // Saved business contexts
        .route("/api/v1/wizard/contexts", get(handlers::list_contexts).post(handlers::save_context))
        .with_state(state)
}
