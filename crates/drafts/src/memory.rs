//! In-memory draft and context stores backed by DashMap.
//!
//! Same API surface as a hosted backend, for development and tests.

use async_trait::async_trait;
use campaign_core::{
    BusinessContext, DraftData, DraftRecord, DraftStatus, Platform, SavedContext, WizardError,
    WizardResult,
};
use chrono::Utc;
use dashmap::DashMap;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::ports::{ContextStore, DraftRepository};

#[derive(Default)]
pub struct InMemoryDraftRepository {
    drafts: DashMap<Uuid, DraftRecord>,
}

impl InMemoryDraftRepository {
    pub fn new() -> Self {
        info!("Draft repository initialized (in-memory, development mode)");
        Self {
            drafts: DashMap::new(),
        }
    }

    /// Repository pre-populated with a couple of half-finished drafts.
    pub fn with_demo_data() -> Self {
        let repo = Self::new();
        repo.seed_demo_data();
        repo
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    /// Marks a stored draft published. Publishing itself happens outside the
    /// wizard; this only flips the stored status.
    pub fn mark_published(&self, id: Uuid) -> bool {
        self.drafts
            .get_mut(&id)
            .map(|mut entry| {
                entry.status = DraftStatus::Published;
                entry.updated_at = Utc::now();
            })
            .is_some()
    }

    fn insert(&self, platform: Platform, name: &str, data: Value) -> Uuid {
        let now = Utc::now();
        let record = DraftRecord {
            id: Uuid::new_v4(),
            platform,
            name: name.to_string(),
            status: DraftStatus::Draft,
            data,
            created_at: now,
            updated_at: now,
        };
        let id = record.id;
        self.drafts.insert(id, record);
        id
    }

    fn seed_demo_data(&self) {
        self.insert(
            Platform::Google,
            "Spring Plumbing Leads",
            json!({
                "name": "Spring Plumbing Leads",
                "currentStep": 1,
                "fields": {
                    "campaignName": "Spring Plumbing Leads",
                    "campaignType": "search",
                    "budgetAmount": 80,
                    "budgetType": "daily",
                    "bidStrategy": "maximize_conversions"
                }
            }),
        );
        self.insert(
            Platform::Instagram,
            "Bakery Launch",
            json!({
                "name": "Bakery Launch",
                "currentStep": 2,
                "fields": {
                    "campaignName": "Bakery Launch",
                    "objective": "awareness",
                    "locations": ["Portland"],
                    "ageRange": [21, 45]
                },
                "businessContext": {
                    "industry": "Food & Beverage",
                    "businessDescription": "Neighbourhood sourdough bakery",
                    "targetCountries": ["United States"],
                    "targetCities": ["Portland"],
                    "goal": "Foot traffic",
                    "currency": "USD"
                },
                "suggestions": {
                    "adContent": { "headlines": ["Fresh Sourdough Every Morning"] }
                }
            }),
        );
        info!(count = self.drafts.len(), "Seeded demo drafts");
    }
}

#[async_trait]
impl DraftRepository for InMemoryDraftRepository {
    async fn list(&self, platform: Platform) -> WizardResult<Vec<DraftRecord>> {
        let mut drafts: Vec<DraftRecord> = self
            .drafts
            .iter()
            .filter(|r| r.value().platform == platform)
            .map(|r| r.value().clone())
            .collect();
        drafts.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(drafts)
    }

    async fn get(&self, id: Uuid) -> WizardResult<Option<DraftRecord>> {
        Ok(self.drafts.get(&id).map(|r| r.value().clone()))
    }

    async fn create(&self, platform: Platform, data: Value, name: &str) -> WizardResult<Uuid> {
        Ok(self.insert(platform, name, data))
    }

    async fn update(&self, id: Uuid, data: Value) -> WizardResult<()> {
        let mut entry = self
            .drafts
            .get_mut(&id)
            .ok_or_else(|| WizardError::NotFound(format!("draft {}", id)))?;
        if let Ok(parsed) = serde_json::from_value::<DraftData>(data.clone()) {
            if !parsed.name.is_empty() {
                entry.name = parsed.name;
            }
        }
        entry.data = data;
        entry.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> WizardResult<()> {
        self.drafts
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| WizardError::NotFound(format!("draft {}", id)))
    }
}

#[derive(Default)]
pub struct InMemoryContextStore {
    contexts: DashMap<String, SavedContext>,
}

impl InMemoryContextStore {
    pub fn new() -> Self {
        Self {
            contexts: DashMap::new(),
        }
    }
}

#[async_trait]
impl ContextStore for InMemoryContextStore {
    async fn list(&self) -> WizardResult<Vec<SavedContext>> {
        let mut contexts: Vec<SavedContext> =
            self.contexts.iter().map(|r| r.value().clone()).collect();
        contexts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(contexts)
    }

    /// Saving under an existing name replaces it.
    async fn save(&self, name: &str, context: BusinessContext) -> WizardResult<SavedContext> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WizardError::validation(["name"]));
        }
        let saved = SavedContext {
            name: name.to_string(),
            context,
            saved_at: Utc::now(),
        };
        self.contexts.insert(saved.name.clone(), saved.clone());
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_list_update_delete() {
        let repo = InMemoryDraftRepository::new();
        let id = repo
            .create(Platform::Google, json!({"fields": {}}), "First")
            .await
            .unwrap();
        repo.create(Platform::Instagram, json!({}), "Other").await.unwrap();

        let google = repo.list(Platform::Google).await.unwrap();
        assert_eq!(google.len(), 1);
        assert_eq!(google[0].name, "First");
        assert_eq!(google[0].status, DraftStatus::Draft);

        repo.update(id, json!({"name": "Renamed", "currentStep": 2}))
            .await
            .unwrap();
        let record = repo.get(id).await.unwrap().unwrap();
        assert_eq!(record.name, "Renamed");
        assert_eq!(record.data["currentStep"], json!(2));

        repo.delete(id).await.unwrap();
        assert!(repo.get(id).await.unwrap().is_none());
        assert!(matches!(repo.delete(id).await, Err(WizardError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_missing_draft() {
        let repo = InMemoryDraftRepository::new();
        let result = repo.update(Uuid::new_v4(), json!({})).await;
        assert!(matches!(result, Err(WizardError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_demo_data() {
        let repo = InMemoryDraftRepository::with_demo_data();
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.list(Platform::Instagram).await.unwrap().len(), 1);
        assert!(repo.list(Platform::Linkedin).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_context_store_keyed_by_name() {
        let store = InMemoryContextStore::new();
        let ctx = BusinessContext {
            industry: "Fitness".to_string(),
            ..Default::default()
        };
        store.save("Gym", ctx.clone()).await.unwrap();
        store.save(" Gym ", ctx).await.unwrap();
        store.save("Bakery", BusinessContext::default()).await.unwrap();

        let names: Vec<_> = store.list().await.unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Bakery", "Gym"]);

        assert!(store.save("  ", BusinessContext::default()).await.is_err());
    }
}
