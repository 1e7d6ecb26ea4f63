use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{WizardError, WizardResult};

/// Wizard field values keyed by canonical field name.
pub type FieldMap = serde_json::Map<String, Value>;

/// A suggestion group is a loose bag of AI-provided fields.
pub type SuggestionGroup = serde_json::Map<String, Value>;

// ─── Platform ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Whatsapp,
    Facebook,
    Google,
    Linkedin,
    Instagram,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Whatsapp,
        Platform::Facebook,
        Platform::Google,
        Platform::Linkedin,
        Platform::Instagram,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Whatsapp => "whatsapp",
            Platform::Facebook => "facebook",
            Platform::Google => "google",
            Platform::Linkedin => "linkedin",
            Platform::Instagram => "instagram",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "whatsapp" => Ok(Platform::Whatsapp),
            "facebook" => Ok(Platform::Facebook),
            "google" | "google_ads" => Ok(Platform::Google),
            "linkedin" => Ok(Platform::Linkedin),
            "instagram" => Ok(Platform::Instagram),
            other => Err(WizardError::NotFound(format!("platform '{}'", other))),
        }
    }
}

// ─── Draft ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DraftStatus {
    #[default]
    Draft,
    Published,
}

/// In-memory wizard state for one platform campaign.
///
/// `id` is `None` until the first save; the persistence layer assigns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDraft {
    pub id: Option<Uuid>,
    pub platform: Platform,
    pub name: String,
    #[serde(default)]
    pub status: DraftStatus,
    #[serde(default)]
    pub fields: FieldMap,
    #[serde(default)]
    pub current_step: usize,
    #[serde(default)]
    pub business_context: Option<BusinessContext>,
    #[serde(default)]
    pub suggestions: Option<SuggestionSet>,
}

impl CampaignDraft {
    pub fn new(platform: Platform) -> Self {
        Self {
            id: None,
            platform,
            name: String::new(),
            status: DraftStatus::Draft,
            fields: FieldMap::new(),
            current_step: 0,
            business_context: None,
            suggestions: None,
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn is_mutable(&self) -> bool {
        self.status == DraftStatus::Draft
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    /// The opaque blob handed to the persistence API.
    pub fn data(&self) -> DraftData {
        DraftData {
            name: self.name.clone(),
            fields: self.fields.clone(),
            current_step: Some(self.current_step),
            business_context: self.business_context.clone(),
            suggestions: self.suggestions.clone(),
        }
    }

    pub fn to_blob(&self) -> WizardResult<Value> {
        Ok(serde_json::to_value(self.data())?)
    }
}

/// Serialized draft payload. Stored verbatim by the persistence API, so
/// every member is optional on the way back in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: FieldMap,
    #[serde(default)]
    pub current_step: Option<usize>,
    #[serde(default)]
    pub business_context: Option<BusinessContext>,
    #[serde(default)]
    pub suggestions: Option<SuggestionSet>,
}

/// A draft as the persistence API stores and lists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRecord {
    pub id: Uuid,
    pub platform: Platform,
    pub name: String,
    pub status: DraftStatus,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ─── Business Context ──────────────────────────────────────────────────────

/// What the advertiser tells the AI suggestion generator about the business.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessContext {
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub business_description: String,
    #[serde(default)]
    pub target_countries: Vec<String>,
    #[serde(default)]
    pub target_cities: Vec<String>,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub budget_hint: Option<String>,
}

impl BusinessContext {
    /// Names of required fields that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.industry.trim().is_empty() {
            missing.push("industry");
        }
        if self.business_description.trim().is_empty() {
            missing.push("businessDescription");
        }
        if !self.target_countries.iter().any(|c| !c.trim().is_empty()) {
            missing.push("targetCountries");
        }
        if self.goal.trim().is_empty() {
            missing.push("goal");
        }
        if self.currency.trim().is_empty() {
            missing.push("currency");
        }
        missing
    }

    /// Must pass before a suggestion request may be issued.
    pub fn validate(&self) -> WizardResult<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(WizardError::validation(missing))
        }
    }
}

/// A business context stored under a user-chosen name for reuse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedContext {
    pub name: String,
    pub context: BusinessContext,
    pub saved_at: DateTime<Utc>,
}

// ─── Suggestions ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionGroupKind {
    CampaignSetup,
    TargetAudience,
    AdContent,
}

impl SuggestionGroupKind {
    /// Application order; each group corresponds to one wizard step.
    pub const ORDER: [SuggestionGroupKind; 3] = [
        SuggestionGroupKind::CampaignSetup,
        SuggestionGroupKind::TargetAudience,
        SuggestionGroupKind::AdContent,
    ];
}

/// AI-generated payload. Read-only from the engine's perspective.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionSet {
    #[serde(default)]
    pub campaign_setup: Option<SuggestionGroup>,
    #[serde(default)]
    pub target_audience: Option<SuggestionGroup>,
    #[serde(default)]
    pub ad_content: Option<SuggestionGroup>,
}

impl SuggestionSet {
    pub fn group(&self, kind: SuggestionGroupKind) -> Option<&SuggestionGroup> {
        match kind {
            SuggestionGroupKind::CampaignSetup => self.campaign_setup.as_ref(),
            SuggestionGroupKind::TargetAudience => self.target_audience.as_ref(),
            SuggestionGroupKind::AdContent => self.ad_content.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        SuggestionGroupKind::ORDER
            .iter()
            .all(|kind| self.group(*kind).map_or(true, |g| g.is_empty()))
    }
}
