//! End-to-end wizard flows against instrumented backends.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use campaign_core::{
    BusinessContext, DraftRecord, Platform, SuggestionSet, WizardError, WizardResult,
};
use campaign_drafts::session::delete_with_confirmation;
use campaign_drafts::{
    DraftRepository, InMemoryContextStore, InMemoryDraftRepository, SuggestionGenerator,
    SuggestionOutcome, WizardDeps, WizardSession,
};
use serde_json::{json, Value};
use uuid::Uuid;

/// Wraps the in-memory repository, counts every call and can slow writes
/// down so a second call overlaps the first.
#[derive(Default)]
struct RecordingRepository {
    inner: InMemoryDraftRepository,
    creates: AtomicUsize,
    updates: AtomicUsize,
    deletes: AtomicUsize,
    write_delay: Option<Duration>,
    fail_writes: bool,
}

impl RecordingRepository {
    fn slow(delay: Duration) -> Self {
        Self {
            write_delay: Some(delay),
            ..Default::default()
        }
    }

    fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Default::default()
        }
    }

    async fn before_write(&self) -> WizardResult<()> {
        if let Some(delay) = self.write_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_writes {
            return Err(WizardError::Persistence("backend unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl DraftRepository for RecordingRepository {
    async fn list(&self, platform: Platform) -> WizardResult<Vec<DraftRecord>> {
        self.inner.list(platform).await
    }

    async fn get(&self, id: Uuid) -> WizardResult<Option<DraftRecord>> {
        self.inner.get(id).await
    }

    async fn create(&self, platform: Platform, data: Value, name: &str) -> WizardResult<Uuid> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.before_write().await?;
        self.inner.create(platform, data, name).await
    }

    async fn update(&self, id: Uuid, data: Value) -> WizardResult<()> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.before_write().await?;
        self.inner.update(id, data).await
    }

    async fn delete(&self, id: Uuid) -> WizardResult<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.before_write().await?;
        self.inner.delete(id).await
    }
}

struct SlowGenerator {
    calls: AtomicUsize,
    delay: Duration,
    response: Option<SuggestionSet>,
}

impl SlowGenerator {
    fn new(delay: Duration, response: Option<SuggestionSet>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            delay,
            response,
        }
    }
}

#[async_trait]
impl SuggestionGenerator for SlowGenerator {
    async fn generate(&self, _context: &BusinessContext) -> Option<SuggestionSet> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.response.clone()
    }
}

fn google_suggestions() -> SuggestionSet {
    serde_json::from_value(json!({
        "campaignSetup": {
            "objective": "Lead Generation",
            "budget": { "min": 50, "max": 150, "period": "Daily" },
            "bidding": "Maximize Conversions"
        },
        "targetAudience": {
            "location": ["Austin", "Dallas"],
            "keyword": ["plumber near me", "emergency plumbing"]
        },
        "adContent": {
            "headlines": ["24/7 Emergency Plumbing", "Licensed Local Plumbers"],
            "descriptions": ["Fast response, upfront pricing."]
        }
    }))
    .unwrap()
}

fn context() -> BusinessContext {
    BusinessContext {
        industry: "Home Services".to_string(),
        business_description: "Family-owned plumbing company".to_string(),
        target_countries: vec!["United States".to_string()],
        target_cities: vec!["Austin".to_string()],
        goal: "Booked service calls".to_string(),
        currency: "USD".to_string(),
        budget_hint: Some("$100/day".to_string()),
    }
}

fn deps(repo: Arc<RecordingRepository>, generator: Arc<SlowGenerator>) -> WizardDeps {
    WizardDeps::new(repo, generator, Arc::new(InMemoryContextStore::new()))
}

#[tokio::test]
async fn test_full_google_flow_then_resume() {
    let repo = Arc::new(RecordingRepository::default());
    let generator = Arc::new(SlowGenerator::new(Duration::ZERO, Some(google_suggestions())));
    let session = WizardSession::new(Platform::Google, deps(repo.clone(), generator.clone()));

    let outcome = session.request_suggestions(context()).await.unwrap();
    assert!(matches!(outcome, SuggestionOutcome::Ready(_)));
    let report = session.apply_suggestions().unwrap();
    assert!(report.skipped.is_empty());

    let draft = session.draft();
    assert_eq!(draft.field("campaignType"), Some(&json!("performance_max")));
    assert_eq!(draft.field("budgetAmount"), Some(&json!(50)));
    assert_eq!(draft.field("budgetType"), Some(&json!("daily")));
    assert_eq!(draft.field("bidStrategy"), Some(&json!("maximize_conversions")));
    assert_eq!(draft.field("locations"), Some(&json!(["Austin", "Dallas"])));
    assert_eq!(draft.current_step, 3);

    let id = session.save().await.unwrap();
    session.save().await.unwrap();
    assert_eq!(repo.creates.load(Ordering::SeqCst), 1);
    assert_eq!(repo.updates.load(Ordering::SeqCst), 1);

    let resumed = WizardSession::resume(id, deps(repo.clone(), generator.clone()))
        .await
        .unwrap();
    assert!(resumed.ai_panel_enabled());
    assert_eq!(resumed.current_step(), 3);
    assert_eq!(resumed.draft().fields, draft.fields);
    // Resuming never calls the generator again.
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_concurrent_save_is_rejected() {
    let repo = Arc::new(RecordingRepository::slow(Duration::from_millis(50)));
    let generator = Arc::new(SlowGenerator::new(Duration::ZERO, None));
    let session = WizardSession::new(Platform::Facebook, deps(repo.clone(), generator));

    let (first, second) = tokio::join!(session.save(), session.save());
    assert!(first.is_ok());
    assert!(matches!(second, Err(WizardError::Busy("save"))));
    assert_eq!(repo.creates.load(Ordering::SeqCst), 1);

    // The guard is released once the first save finishes.
    session.save().await.unwrap();
    assert_eq!(repo.updates.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_failed_save_keeps_draft_unsaved() {
    let repo = Arc::new(RecordingRepository::failing());
    let generator = Arc::new(SlowGenerator::new(Duration::ZERO, None));
    let session = WizardSession::new(Platform::Whatsapp, deps(repo.clone(), generator));
    session.set_field("messageBody", json!("Hi there")).unwrap();

    let err = session.save().await.unwrap_err();
    assert!(err.is_retryable());
    assert!(session.id().is_none());
    assert_eq!(session.draft().field("messageBody"), Some(&json!("Hi there")));
}

#[tokio::test]
async fn test_declined_delete_makes_no_call() {
    let repo = Arc::new(RecordingRepository::default());
    let generator = Arc::new(SlowGenerator::new(Duration::ZERO, None));
    let session = WizardSession::new(Platform::Linkedin, deps(repo.clone(), generator));
    let id = session.save().await.unwrap();

    assert!(!session.delete(|| false).await.unwrap());
    assert_eq!(repo.deletes.load(Ordering::SeqCst), 0);
    assert!(repo.get(id).await.unwrap().is_some());

    assert!(session.delete(|| true).await.unwrap());
    assert_eq!(repo.deletes.load(Ordering::SeqCst), 1);
    assert!(repo.get(id).await.unwrap().is_none());
    assert!(session.id().is_none());
}

#[tokio::test]
async fn test_list_delete_needs_confirmation() {
    let repo = RecordingRepository::default();
    let id = repo
        .create(Platform::Google, json!({ "name": "Old" }), "Old")
        .await
        .unwrap();

    assert!(!delete_with_confirmation(&repo, id, || false).await.unwrap());
    assert_eq!(repo.deletes.load(Ordering::SeqCst), 0);

    assert!(delete_with_confirmation(&repo, id, || true).await.unwrap());
    assert!(matches!(
        delete_with_confirmation(&repo, id, || true).await,
        Err(WizardError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_response_after_close_is_discarded() {
    let repo = Arc::new(RecordingRepository::default());
    let generator = Arc::new(SlowGenerator::new(
        Duration::from_millis(50),
        Some(google_suggestions()),
    ));
    let session = WizardSession::new(Platform::Google, deps(repo, generator.clone()));

    let (outcome, _) = tokio::join!(session.request_suggestions(context()), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        session.close_ai_panel();
    });

    assert_eq!(outcome.unwrap(), SuggestionOutcome::Discarded);
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    let draft = session.draft();
    assert!(draft.suggestions.is_none());
    assert!(draft.business_context.is_none());
    assert!(!session.ai_panel_enabled());
}

#[tokio::test]
async fn test_second_request_while_generating_is_busy() {
    let repo = Arc::new(RecordingRepository::default());
    let generator = Arc::new(SlowGenerator::new(
        Duration::from_millis(50),
        Some(google_suggestions()),
    ));
    let session = WizardSession::new(Platform::Google, deps(repo, generator.clone()));

    let (first, second) = tokio::join!(
        session.request_suggestions(context()),
        session.request_suggestions(context())
    );
    assert!(matches!(first, Ok(SuggestionOutcome::Ready(_))));
    assert!(matches!(second, Err(WizardError::Busy("suggestion"))));
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_incomplete_context_skips_generator() {
    let repo = Arc::new(RecordingRepository::default());
    let generator = Arc::new(SlowGenerator::new(Duration::ZERO, Some(google_suggestions())));
    let session = WizardSession::new(Platform::Instagram, deps(repo, generator.clone()));

    let mut ctx = context();
    ctx.target_countries = vec!["  ".to_string()];
    ctx.industry.clear();

    match session.request_suggestions(ctx).await {
        Err(WizardError::Validation { fields }) => {
            assert_eq!(fields, vec!["industry", "targetCountries"]);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
}
