//! Hydrates a stored draft back into wizard state.

use campaign_core::{CampaignDraft, DraftData, DraftRecord, WizardResult};
use campaign_suggestions::profile_for;
use serde::Serialize;
use tracing::debug;

/// A draft as loaded by id, plus whether the AI panel should come back up.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoredDraft {
    pub draft: CampaignDraft,
    pub ai_panel_enabled: bool,
}

/// Deserializes the stored blob. A step marker restores the wizard position
/// (clamped to the platform's last step); an embedded business context and
/// suggestion set re-enable the AI panel. Nothing is re-applied.
pub fn restore_draft(record: &DraftRecord) -> WizardResult<RestoredDraft> {
    let data: DraftData = serde_json::from_value(record.data.clone())?;
    let profile = profile_for(record.platform);

    let current_step = data
        .current_step
        .map(|step| step.min(profile.final_step()))
        .unwrap_or(0);
    let ai_panel_enabled = data.business_context.is_some() && data.suggestions.is_some();

    let name = if data.name.is_empty() {
        record.name.clone()
    } else {
        data.name
    };

    debug!(
        draft_id = %record.id,
        platform = %record.platform,
        step = current_step,
        ai_panel_enabled,
        "Restored draft"
    );

    Ok(RestoredDraft {
        draft: CampaignDraft {
            id: Some(record.id),
            platform: record.platform,
            name,
            status: record.status,
            fields: data.fields,
            current_step,
            business_context: data.business_context,
            suggestions: data.suggestions,
        },
        ai_panel_enabled,
    })
}
