//! Auto-apply sequencer: walks the three suggestion groups in order, pushes
//! every populated field through normalize → map → merge/clamp/assign, fills
//! defaults, then moves the wizard to its final step.

use campaign_core::{CampaignDraft, Platform, SuggestionGroupKind, SuggestionSet};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::coerce::{expand, first_scalar, to_number};
use crate::defaults::apply_defaults;
use crate::mapper::map_value;
use crate::merge::{as_list, merge_array};
use crate::normalizer::normalize;
use crate::platforms::profile_for;
use crate::profile::{number_value, FieldKind, PlatformProfile};
use crate::range::{clamp_range, range_value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplyState {
    Idle,
    ApplyingSetup,
    ApplyingAudience,
    ApplyingContent,
    FillingDefaults,
    Done,
}

impl ApplyState {
    /// The only successor of each state; the sequence never branches.
    pub fn next(self) -> Option<ApplyState> {
        match self {
            ApplyState::Idle => Some(ApplyState::ApplyingSetup),
            ApplyState::ApplyingSetup => Some(ApplyState::ApplyingAudience),
            ApplyState::ApplyingAudience => Some(ApplyState::ApplyingContent),
            ApplyState::ApplyingContent => Some(ApplyState::FillingDefaults),
            ApplyState::FillingDefaults => Some(ApplyState::Done),
            ApplyState::Done => None,
        }
    }

    fn group(self) -> Option<SuggestionGroupKind> {
        match self {
            ApplyState::ApplyingSetup => Some(SuggestionGroupKind::CampaignSetup),
            ApplyState::ApplyingAudience => Some(SuggestionGroupKind::TargetAudience),
            ApplyState::ApplyingContent => Some(SuggestionGroupKind::AdContent),
            _ => None,
        }
    }
}

/// What one sequencer run did to the draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyReport {
    /// Canonical fields written from suggestions, in application order.
    pub applied: Vec<String>,
    /// Suggestion fields with no counterpart on the platform, or no usable value.
    pub skipped: Vec<String>,
    /// Required fields filled from platform defaults.
    pub defaulted: Vec<&'static str>,
    pub final_step: usize,
}

/// Single-use sequencer over one draft.
#[derive(Debug)]
pub struct AutoApplySequencer {
    profile: &'static PlatformProfile,
    state: ApplyState,
}

impl AutoApplySequencer {
    pub fn new(platform: Platform) -> Self {
        Self {
            profile: profile_for(platform),
            state: ApplyState::Idle,
        }
    }

    pub fn state(&self) -> ApplyState {
        self.state
    }

    /// Runs to completion synchronously. Absent groups are skipped. Keys in a
    /// group apply in payload order, so the last of two aliases wins.
    pub fn run(&mut self, draft: &mut CampaignDraft, suggestions: &SuggestionSet) -> ApplyReport {
        let mut report = ApplyReport::default();

        while let Some(next) = self.state.next() {
            self.state = next;
            debug!(platform = %self.profile.platform, state = ?next, "Auto-apply transition");

            if let Some(kind) = next.group() {
                if let Some(group) = suggestions.group(kind) {
                    for (key, value) in group {
                        apply_suggestion(self.profile, draft, key, value, &mut report);
                    }
                }
                continue;
            }

            match next {
                ApplyState::FillingDefaults => report.defaulted = apply_defaults(draft),
                ApplyState::Done => {
                    draft.current_step = self.profile.final_step();
                    report.final_step = draft.current_step;
                }
                _ => {}
            }
        }

        info!(
            platform = %self.profile.platform,
            applied = report.applied.len(),
            skipped = report.skipped.len(),
            defaulted = report.defaulted.len(),
            "Suggestions applied"
        );
        metrics::counter!("suggestions.applied").increment(1);
        report
    }
}

/// Runs a fresh sequencer for the draft's platform.
pub fn auto_apply(draft: &mut CampaignDraft, suggestions: &SuggestionSet) -> ApplyReport {
    AutoApplySequencer::new(draft.platform).run(draft, suggestions)
}

fn apply_suggestion(
    profile: &PlatformProfile,
    draft: &mut CampaignDraft,
    key: &str,
    value: &Value,
    report: &mut ApplyReport,
) {
    let platform = profile.platform;
    for (raw_field, raw_value) in expand(key, value) {
        let field = normalize(platform, &raw_field);
        let Some(spec) = profile.field(field) else {
            report.skipped.push(raw_field);
            continue;
        };

        let resolved = match spec.kind {
            FieldKind::List => {
                let incoming = match raw_value {
                    Value::Array(items) => Value::Array(
                        items.into_iter().map(|v| map_value(platform, spec.name, v)).collect(),
                    ),
                    other => map_value(platform, spec.name, other),
                };
                let merged = merge_array(&as_list(draft.field(spec.name)), &incoming);
                Some(Value::Array(merged))
            }
            FieldKind::Range { .. } => {
                clamp_range(platform, spec.name, &raw_value).map(range_value)
            }
            FieldKind::Number => to_number(&first_scalar(&raw_value).unwrap_or(Value::Null))
                .filter(|n| *n > 0.0)
                .map(number_value),
            FieldKind::Text | FieldKind::Choice { .. } => {
                first_scalar(&raw_value).map(|v| map_value(platform, spec.name, v))
            }
        };

        match resolved {
            Some(v) => {
                draft.set_field(spec.name, v);
                report.applied.push(spec.name.to_string());
            }
            None => report.skipped.push(raw_field),
        }
    }
}
