//! Fills required fields left empty with the platform's canonical defaults.

use campaign_core::CampaignDraft;
use tracing::debug;

use crate::platforms::profile_for;
use crate::validity::is_filled;

/// Never overwrites a filled field. Returns the names it filled.
pub fn apply_defaults(draft: &mut CampaignDraft) -> Vec<&'static str> {
    let profile = profile_for(draft.platform);
    let mut filled = Vec::new();
    for spec in profile.required_fields() {
        if is_filled(spec.kind, draft.fields.get(spec.name)) {
            continue;
        }
        if let Some(default) = spec.default {
            draft.set_field(spec.name, default.to_value());
            filled.push(spec.name);
        }
    }
    if !filled.is_empty() {
        debug!(platform = %draft.platform, fields = ?filled, "Filled defaults");
    }
    filled
}
