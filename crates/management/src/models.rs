//! Request and response bodies for the wizard API.

use campaign_core::{CampaignDraft, DraftData, Platform, SuggestionSet};
use campaign_suggestions::ApplyReport;
use serde::{Deserialize, Serialize};

// ─── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    /// Offending field names for validation failures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

// ─── Drafts ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct DraftListQuery {
    pub platform: Platform,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDraftRequest {
    pub platform: Platform,
    #[serde(flatten)]
    pub data: DraftData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteDraftQuery {
    #[serde(default)]
    pub confirm: bool,
}

// ─── Suggestions ───────────────────────────────────────────────────────────

/// Stateless sequencer run. `suggestions` overrides whatever the draft
/// already carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplySuggestionsRequest {
    pub draft: CampaignDraft,
    #[serde(default)]
    pub suggestions: Option<SuggestionSet>,
}

/// Optional wizard the suggestions are generated for; only tags the event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateSuggestionsQuery {
    #[serde(default)]
    pub platform: Option<Platform>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplySuggestionsResponse {
    pub draft: CampaignDraft,
    pub report: ApplyReport,
}

// ─── Contexts ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveContextRequest {
    pub name: String,
    pub context: campaign_core::BusinessContext,
}

// ─── Validation ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepValidity {
    pub step: usize,
    pub name: String,
    pub valid: bool,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftValidation {
    pub steps: Vec<StepValidity>,
    pub launch_ready: bool,
}
