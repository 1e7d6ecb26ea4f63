use async_trait::async_trait;
use campaign_core::{
    BusinessContext, DraftRecord, Platform, SavedContext, SuggestionSet, WizardResult,
};
use serde_json::Value;
use uuid::Uuid;

/// CRUD over stored drafts. `data` is an opaque JSON blob; the platform
/// picks the collection.
#[async_trait]
pub trait DraftRepository: Send + Sync {
    async fn list(&self, platform: Platform) -> WizardResult<Vec<DraftRecord>>;
    async fn get(&self, id: Uuid) -> WizardResult<Option<DraftRecord>>;
    async fn create(&self, platform: Platform, data: Value, name: &str) -> WizardResult<Uuid>;
    async fn update(&self, id: Uuid, data: Value) -> WizardResult<()>;
    async fn delete(&self, id: Uuid) -> WizardResult<()>;
}

/// AI suggestion backend. `None` means nothing usable came back; there is
/// no finer error taxonomy at this boundary.
#[async_trait]
pub trait SuggestionGenerator: Send + Sync {
    async fn generate(&self, context: &BusinessContext) -> Option<SuggestionSet>;
}

/// Named, reusable business contexts.
#[async_trait]
pub trait ContextStore: Send + Sync {
    async fn list(&self) -> WizardResult<Vec<SavedContext>>;
    async fn save(&self, name: &str, context: BusinessContext) -> WizardResult<SavedContext>;
}
