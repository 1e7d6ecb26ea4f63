//! Axum REST handlers for the wizard API.

use crate::models::*;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use campaign_core::event_bus::{make_event, DraftEventType, EventSink};
use campaign_core::{
    BusinessContext, CampaignDraft, DraftData, DraftRecord, DraftStatus, Platform, SavedContext,
    SuggestionSet, WizardError,
};
use campaign_drafts::session::delete_with_confirmation;
use campaign_drafts::{restore_draft, ContextStore, DraftRepository, SuggestionGenerator};
use campaign_suggestions::validity::missing_fields;
use campaign_suggestions::{auto_apply, is_launch_ready, profile_for, PlatformProfile};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Shared wizard API state.
#[derive(Clone)]
pub struct ManagementState {
    pub drafts: Arc<dyn DraftRepository>,
    pub contexts: Arc<dyn ContextStore>,
    pub generator: Arc<dyn SuggestionGenerator>,
    pub events: Arc<dyn EventSink>,
}

impl ManagementState {
    /// Routes draft events to `events` instead of the current sink.
    pub fn with_event_sink(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = events;
        self
    }

    fn emit(
        &self,
        event_type: DraftEventType,
        platform: impl Into<Option<Platform>>,
        draft_id: Option<Uuid>,
        detail: Value,
    ) {
        self.events.emit(make_event(event_type, platform, draft_id, detail));
    }
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<T, ApiError>;

/// Maps domain errors onto HTTP status codes.
pub fn api_error(err: WizardError) -> ApiError {
    let (status, code) = match &err {
        WizardError::Validation { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "validation_failed"),
        WizardError::SuggestionGeneration => (StatusCode::BAD_GATEWAY, "suggestion_failed"),
        WizardError::Persistence(_) => (StatusCode::SERVICE_UNAVAILABLE, "persistence_failed"),
        WizardError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        WizardError::DraftNotMutable(_) => (StatusCode::CONFLICT, "draft_not_mutable"),
        WizardError::Busy(_) => (StatusCode::CONFLICT, "busy"),
        WizardError::Serialization(_) => (StatusCode::BAD_REQUEST, "invalid_payload"),
        WizardError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
    };
    if status.is_server_error() {
        warn!(error = %err, "Request failed");
    }
    let fields = match &err {
        WizardError::Validation { fields } => fields.clone(),
        _ => Vec::new(),
    };
    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message: err.to_string(),
            fields,
        }),
    )
}

async fn load_draft(state: &ManagementState, id: Uuid) -> ApiResult<DraftRecord> {
    state
        .drafts
        .get(id)
        .await
        .map_err(api_error)?
        .ok_or_else(|| api_error(WizardError::NotFound(format!("draft {}", id))))
}

// ─── Platforms ─────────────────────────────────────────────────────────────

pub async fn list_platforms() -> Json<Vec<&'static PlatformProfile>> {
    Json(Platform::ALL.iter().map(|p| profile_for(*p)).collect())
}

// ─── Drafts ────────────────────────────────────────────────────────────────

pub async fn list_drafts(
    State(state): State<ManagementState>,
    Query(query): Query<DraftListQuery>,
) -> ApiResult<Json<Vec<DraftRecord>>> {
    state.drafts.list(query.platform).await.map(Json).map_err(api_error)
}

pub async fn get_draft(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DraftRecord>> {
    load_draft(&state, id).await.map(Json)
}

pub async fn create_draft(
    State(state): State<ManagementState>,
    Json(req): Json<CreateDraftRequest>,
) -> ApiResult<(StatusCode, Json<DraftRecord>)> {
    let mut data = req.data;
    if data.name.trim().is_empty() {
        data.name = format!("Untitled {} campaign", req.platform);
    }
    let blob = serde_json::to_value(&data).map_err(|e| api_error(e.into()))?;
    let id = state
        .drafts
        .create(req.platform, blob, &data.name)
        .await
        .map_err(api_error)?;

    metrics::counter!("wizard.drafts.created").increment(1);
    info!(draft_id = %id, platform = %req.platform, "Draft created");
    state.emit(DraftEventType::Created, req.platform, Some(id), json!({ "name": data.name }));

    let record = load_draft(&state, id).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn update_draft(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
    Json(data): Json<DraftData>,
) -> ApiResult<Json<DraftRecord>> {
    let record = load_draft(&state, id).await?;
    if record.status != DraftStatus::Draft {
        return Err(api_error(WizardError::DraftNotMutable(id.to_string())));
    }
    let blob = serde_json::to_value(&data).map_err(|e| api_error(e.into()))?;
    state.drafts.update(id, blob).await.map_err(api_error)?;

    metrics::counter!("wizard.drafts.updated").increment(1);
    state.emit(DraftEventType::Updated, record.platform, Some(id), Value::Null);
    load_draft(&state, id).await.map(Json)
}

/// Deleting is irreversible, so the caller must pass `?confirm=true`.
pub async fn delete_draft(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DeleteDraftQuery>,
) -> ApiResult<StatusCode> {
    let record = load_draft(&state, id).await?;
    let deleted = delete_with_confirmation(state.drafts.as_ref(), id, || query.confirm)
        .await
        .map_err(api_error)?;
    if !deleted {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "confirmation_required".to_string(),
                message: "Pass confirm=true to delete this draft".to_string(),
                fields: Vec::new(),
            }),
        ));
    }
    state.emit(DraftEventType::Deleted, record.platform, Some(id), Value::Null);
    Ok(StatusCode::NO_CONTENT)
}

/// Runs the sequencer over the stored draft's own suggestions and saves
/// the result.
pub async fn apply_draft_suggestions(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApplySuggestionsResponse>> {
    let record = load_draft(&state, id).await?;
    let mut draft = restore_draft(&record).map_err(api_error)?.draft;
    if !draft.is_mutable() {
        return Err(api_error(WizardError::DraftNotMutable(id.to_string())));
    }

    let suggestions = draft.suggestions.clone().unwrap_or_default();
    let report = auto_apply(&mut draft, &suggestions);
    let blob = draft.to_blob().map_err(api_error)?;
    state.drafts.update(id, blob).await.map_err(api_error)?;

    state.emit(
        DraftEventType::SuggestionsApplied,
        draft.platform,
        Some(id),
        json!({ "applied": report.applied, "defaulted": report.defaulted }),
    );
    Ok(Json(ApplySuggestionsResponse { draft, report }))
}

pub async fn validate_draft(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DraftValidation>> {
    let record = load_draft(&state, id).await?;
    let draft = restore_draft(&record).map_err(api_error)?.draft;
    Ok(Json(draft_validation(&draft)))
}

pub fn draft_validation(draft: &CampaignDraft) -> DraftValidation {
    let profile = profile_for(draft.platform);
    let steps = profile
        .steps
        .iter()
        .enumerate()
        .map(|(step, name)| {
            let missing = missing_fields(draft.platform, &draft.fields, step);
            StepValidity {
                step,
                name: name.to_string(),
                valid: missing.is_empty(),
                missing: missing.into_iter().map(String::from).collect(),
            }
        })
        .collect();
    DraftValidation {
        steps,
        launch_ready: is_launch_ready(draft.platform, &draft.fields),
    }
}

// ─── Suggestions ───────────────────────────────────────────────────────────

/// Stateless: nothing is stored.
pub async fn apply_suggestions(
    Json(req): Json<ApplySuggestionsRequest>,
) -> ApiResult<Json<ApplySuggestionsResponse>> {
    let mut draft = req.draft;
    if !draft.is_mutable() {
        let id = draft.id.map(|id| id.to_string()).unwrap_or_default();
        return Err(api_error(WizardError::DraftNotMutable(id)));
    }
    if let Some(suggestions) = req.suggestions {
        draft.suggestions = Some(suggestions);
    }
    let suggestions = draft.suggestions.clone().unwrap_or_default();
    let report = auto_apply(&mut draft, &suggestions);
    metrics::counter!("wizard.suggestions.applied").increment(1);
    Ok(Json(ApplySuggestionsResponse { draft, report }))
}

pub async fn generate_suggestions(
    State(state): State<ManagementState>,
    Query(query): Query<GenerateSuggestionsQuery>,
    Json(context): Json<BusinessContext>,
) -> ApiResult<Json<SuggestionSet>> {
    context.validate().map_err(api_error)?;
    let detail = json!({ "industry": context.industry });
    match state.generator.generate(&context).await {
        Some(set) => {
            metrics::counter!("wizard.suggestions.generated").increment(1);
            state.emit(DraftEventType::SuggestionsGenerated, query.platform, None, detail);
            Ok(Json(set))
        }
        None => {
            metrics::counter!("wizard.suggestions.failed").increment(1);
            warn!(industry = %context.industry, "Suggestion generation failed");
            state.emit(DraftEventType::SuggestionsFailed, query.platform, None, detail);
            Err(api_error(WizardError::SuggestionGeneration))
        }
    }
}

// ─── Saved contexts ────────────────────────────────────────────────────────

pub async fn list_contexts(
    State(state): State<ManagementState>,
) -> ApiResult<Json<Vec<SavedContext>>> {
    state.contexts.list().await.map(Json).map_err(api_error)
}

pub async fn save_context(
    State(state): State<ManagementState>,
    Json(req): Json<SaveContextRequest>,
) -> ApiResult<(StatusCode, Json<SavedContext>)> {
    let saved = state
        .contexts
        .save(&req.name, req.context)
        .await
        .map_err(api_error)?;
    metrics::counter!("wizard.contexts.saved").increment(1);
    info!(name = %saved.name, "Business context saved");
    state.emit(DraftEventType::ContextSaved, None::<Platform>, None, json!({ "name": saved.name }));
    Ok((StatusCode::CREATED, Json(saved)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        let cases = [
            (WizardError::validation(["goal"]), StatusCode::UNPROCESSABLE_ENTITY, "validation_failed"),
            (WizardError::SuggestionGeneration, StatusCode::BAD_GATEWAY, "suggestion_failed"),
            (WizardError::Persistence("down".into()), StatusCode::SERVICE_UNAVAILABLE, "persistence_failed"),
            (WizardError::Busy("save"), StatusCode::CONFLICT, "busy"),
            (WizardError::Config("bad port".into()), StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        ];
        for (err, status, code) in cases {
            let (got, Json(body)) = api_error(err);
            assert_eq!(got, status);
            assert_eq!(body.error, code);
        }
    }
}
