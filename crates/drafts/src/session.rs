//! One wizard session: the in-memory draft plus every call that reaches a
//! backend. Mutating calls are guarded so a second call while one is in
//! flight is rejected instead of reaching the backend twice.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use campaign_core::event_bus::{make_event, noop_sink, DraftEventType, EventSink};
use campaign_core::{
    BusinessContext, CampaignDraft, DraftRecord, Platform, SavedContext, SuggestionSet,
    WizardError, WizardResult,
};
use campaign_suggestions::validity::missing_fields;
use campaign_suggestions::{auto_apply, profile_for, ApplyReport};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tracing::{info, warn};
use uuid::Uuid;

use crate::ports::{ContextStore, DraftRepository, SuggestionGenerator};
use crate::restore::{restore_draft, RestoredDraft};

/// Backend capabilities handed to a session.
#[derive(Clone)]
pub struct WizardDeps {
    pub drafts: Arc<dyn DraftRepository>,
    pub generator: Arc<dyn SuggestionGenerator>,
    pub contexts: Arc<dyn ContextStore>,
    pub events: Arc<dyn EventSink>,
}

impl WizardDeps {
    pub fn new(
        drafts: Arc<dyn DraftRepository>,
        generator: Arc<dyn SuggestionGenerator>,
        contexts: Arc<dyn ContextStore>,
    ) -> Self {
        Self {
            drafts,
            generator,
            contexts,
            events: noop_sink(),
        }
    }

    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.events = sink;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome {
    Ready(SuggestionSet),
    /// The panel was closed while the request was in flight; the response
    /// was dropped without touching the draft.
    Discarded,
}

struct SessionState {
    draft: CampaignDraft,
    ai_panel_enabled: bool,
}

struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool, what: &'static str) -> WizardResult<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| WizardError::Busy(what))?;
        Ok(Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct WizardSession {
    deps: WizardDeps,
    state: Mutex<SessionState>,
    saving: AtomicBool,
    deleting: AtomicBool,
    generating: AtomicBool,
    suggestion_ticket: AtomicU64,
}

impl WizardSession {
    /// Wizard entry for a brand-new draft.
    pub fn new(platform: Platform, deps: WizardDeps) -> Self {
        Self::from_restored(
            RestoredDraft {
                draft: CampaignDraft::new(platform),
                ai_panel_enabled: false,
            },
            deps,
        )
    }

    pub fn from_restored(restored: RestoredDraft, deps: WizardDeps) -> Self {
        Self {
            deps,
            state: Mutex::new(SessionState {
                draft: restored.draft,
                ai_panel_enabled: restored.ai_panel_enabled,
            }),
            saving: AtomicBool::new(false),
            deleting: AtomicBool::new(false),
            generating: AtomicBool::new(false),
            suggestion_ticket: AtomicU64::new(0),
        }
    }

    /// Loads a stored draft by id and hydrates it without re-applying
    /// suggestions.
    pub async fn resume(id: Uuid, deps: WizardDeps) -> WizardResult<Self> {
        let record = deps
            .drafts
            .get(id)
            .await?
            .ok_or_else(|| WizardError::NotFound(format!("draft {}", id)))?;
        let restored = restore_draft(&record)?;
        info!(draft_id = %id, step = restored.draft.current_step, "Resumed draft");
        Ok(Self::from_restored(restored, deps))
    }

    // ─── Accessors ─────────────────────────────────────────────────────────

    pub fn draft(&self) -> CampaignDraft {
        self.state.lock().draft.clone()
    }

    pub fn platform(&self) -> Platform {
        self.state.lock().draft.platform
    }

    pub fn id(&self) -> Option<Uuid> {
        self.state.lock().draft.id
    }

    pub fn current_step(&self) -> usize {
        self.state.lock().draft.current_step
    }

    pub fn ai_panel_enabled(&self) -> bool {
        self.state.lock().ai_panel_enabled
    }

    // ─── Manual editing ────────────────────────────────────────────────────

    pub fn set_name(&self, name: impl Into<String>) -> WizardResult<()> {
        self.with_mutable_draft(|draft| draft.name = name.into())
    }

    pub fn set_field(&self, name: impl Into<String>, value: Value) -> WizardResult<()> {
        self.with_mutable_draft(|draft| draft.set_field(name, value))
    }

    /// Required fields of `step` still empty; recomputed on every call.
    pub fn missing_fields(&self, step: usize) -> Vec<&'static str> {
        let state = self.state.lock();
        missing_fields(state.draft.platform, &state.draft.fields, step)
    }

    pub fn is_step_valid(&self, step: usize) -> bool {
        self.missing_fields(step).is_empty()
    }

    /// Advances one step if the current step is valid.
    pub fn next_step(&self) -> WizardResult<usize> {
        let mut state = self.state.lock();
        let draft = &mut state.draft;
        let missing = missing_fields(draft.platform, &draft.fields, draft.current_step);
        if !missing.is_empty() {
            return Err(WizardError::validation(missing));
        }
        let last = profile_for(draft.platform).final_step();
        draft.current_step = (draft.current_step + 1).min(last);
        Ok(draft.current_step)
    }

    pub fn previous_step(&self) -> usize {
        let mut state = self.state.lock();
        state.draft.current_step = state.draft.current_step.saturating_sub(1);
        state.draft.current_step
    }

    fn with_mutable_draft<F>(&self, f: F) -> WizardResult<()>
    where
        F: FnOnce(&mut CampaignDraft),
    {
        let mut state = self.state.lock();
        ensure_mutable(&state.draft)?;
        f(&mut state.draft);
        Ok(())
    }

    // ─── Persistence ───────────────────────────────────────────────────────

    /// Creates the draft on first save and updates it afterwards. On failure
    /// the in-memory draft is left as it was so the user can retry.
    pub async fn save(&self) -> WizardResult<Uuid> {
        let _guard = InFlight::acquire(&self.saving, "save")?;

        let draft = self.draft();
        ensure_mutable(&draft)?;
        let blob = draft.to_blob()?;

        let result = match draft.id {
            None => {
                let name = display_name(&draft);
                self.deps
                    .drafts
                    .create(draft.platform, blob, &name)
                    .await
                    .map(|id| (id, DraftEventType::Created))
            }
            Some(id) => self
                .deps
                .drafts
                .update(id, blob)
                .await
                .map(|_| (id, DraftEventType::Updated)),
        };

        let (id, event) = result.map_err(|e| {
            warn!(platform = %draft.platform, error = %e, "Draft save failed");
            e
        })?;

        {
            let mut state = self.state.lock();
            if state.draft.id.is_none() {
                state.draft.id = Some(id);
            }
        }

        match event {
            DraftEventType::Created => metrics::counter!("drafts.created").increment(1),
            _ => metrics::counter!("drafts.updated").increment(1),
        }
        info!(draft_id = %id, platform = %draft.platform, ?event, "Draft saved");
        self.emit(event, Some(id), json!({ "name": display_name(&draft) }));
        Ok(id)
    }

    /// Deletes the session's draft once `confirm` agrees. Returns `false`
    /// without any backend call when the user declines or the draft was
    /// never saved.
    pub async fn delete<F>(&self, confirm: F) -> WizardResult<bool>
    where
        F: FnOnce() -> bool,
    {
        let Some(id) = self.id() else {
            return Ok(false);
        };
        let _guard = InFlight::acquire(&self.deleting, "delete")?;
        let deleted = delete_with_confirmation(self.deps.drafts.as_ref(), id, confirm).await?;
        if deleted {
            self.state.lock().draft.id = None;
            self.emit(DraftEventType::Deleted, Some(id), Value::Null);
        }
        Ok(deleted)
    }

    pub async fn list_drafts(&self) -> WizardResult<Vec<DraftRecord>> {
        self.deps.drafts.list(self.platform()).await
    }

    // ─── AI suggestions ────────────────────────────────────────────────────

    /// Validates the context, then asks the generator. A response that
    /// arrives after [`close_ai_panel`](Self::close_ai_panel) is discarded.
    pub async fn request_suggestions(&self, context: BusinessContext) -> WizardResult<SuggestionOutcome> {
        context.validate()?;
        let _guard = InFlight::acquire(&self.generating, "suggestion")?;
        let ticket = self.suggestion_ticket.fetch_add(1, Ordering::AcqRel) + 1;
        let platform = self.platform();

        let response = self.deps.generator.generate(&context).await;

        if self.suggestion_ticket.load(Ordering::Acquire) != ticket {
            info!(platform = %platform, ticket, "Discarding stale suggestion response");
            return Ok(SuggestionOutcome::Discarded);
        }

        let Some(set) = response else {
            metrics::counter!("suggestions.failed").increment(1);
            self.emit(DraftEventType::SuggestionsFailed, self.id(), Value::Null);
            return Err(WizardError::SuggestionGeneration);
        };

        {
            let mut state = self.state.lock();
            state.draft.business_context = Some(context);
            state.draft.suggestions = Some(set.clone());
            state.ai_panel_enabled = true;
        }
        metrics::counter!("suggestions.generated").increment(1);
        self.emit(DraftEventType::SuggestionsGenerated, self.id(), Value::Null);
        Ok(SuggestionOutcome::Ready(set))
    }

    /// Closing the AI modal invalidates any request still in flight.
    pub fn close_ai_panel(&self) {
        self.suggestion_ticket.fetch_add(1, Ordering::AcqRel);
    }

    /// Runs the auto-apply sequencer with the draft's current suggestion set
    /// (an empty set when there is none).
    pub fn apply_suggestions(&self) -> WizardResult<ApplyReport> {
        let (report, id) = {
            let mut state = self.state.lock();
            ensure_mutable(&state.draft)?;
            let suggestions = state.draft.suggestions.clone().unwrap_or_default();
            (auto_apply(&mut state.draft, &suggestions), state.draft.id)
        };
        self.emit(
            DraftEventType::SuggestionsApplied,
            id,
            json!({ "applied": report.applied, "defaulted": report.defaulted }),
        );
        Ok(report)
    }

    // ─── Saved contexts ────────────────────────────────────────────────────

    /// Stores the draft's business context under `name` for reuse.
    pub async fn save_context(&self, name: &str) -> WizardResult<SavedContext> {
        let context = self
            .state
            .lock()
            .draft
            .business_context
            .clone()
            .ok_or_else(|| WizardError::validation(["businessContext"]))?;
        let saved = self.deps.contexts.save(name, context).await?;
        self.emit(DraftEventType::ContextSaved, self.id(), json!({ "name": saved.name }));
        Ok(saved)
    }

    pub async fn saved_contexts(&self) -> WizardResult<Vec<SavedContext>> {
        self.deps.contexts.list().await
    }

    fn emit(&self, event_type: DraftEventType, draft_id: Option<Uuid>, detail: Value) {
        self.deps
            .events
            .emit(make_event(event_type, self.platform(), draft_id, detail));
    }
}

/// Confirmation gate for deletes from a draft list: `confirm` runs first and
/// a `false` answer short-circuits before any backend call.
pub async fn delete_with_confirmation<F>(
    drafts: &dyn DraftRepository,
    id: Uuid,
    confirm: F,
) -> WizardResult<bool>
where
    F: FnOnce() -> bool,
{
    if !confirm() {
        info!(draft_id = %id, "Delete cancelled");
        return Ok(false);
    }
    drafts.delete(id).await?;
    metrics::counter!("drafts.deleted").increment(1);
    info!(draft_id = %id, "Draft deleted");
    Ok(true)
}

fn ensure_mutable(draft: &CampaignDraft) -> WizardResult<()> {
    if draft.is_mutable() {
        Ok(())
    } else {
        let id = draft.id.map(|id| id.to_string()).unwrap_or_default();
        Err(WizardError::DraftNotMutable(id))
    }
}

/// Name under which a new draft is listed.
fn display_name(draft: &CampaignDraft) -> String {
    if !draft.name.trim().is_empty() {
        return draft.name.trim().to_string();
    }
    draft
        .field("campaignName")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| format!("Untitled {} campaign", draft.platform))
}
