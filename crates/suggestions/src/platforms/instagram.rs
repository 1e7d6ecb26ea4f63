use campaign_core::Platform;

use super::shared::{BUDGET_TYPES, BUDGET_TYPE_SYNONYMS, CTA_SYNONYMS, GENDERS, GENDER_SYNONYMS};
use super::meta::{BID_STRATEGIES, BID_STRATEGY_SYNONYMS, CALLS_TO_ACTION, PLACEMENT_SYNONYMS};
use crate::profile::{
    DefaultValue, FieldKind, FieldSpec, PlatformProfile, STEP_AUDIENCE, STEP_CONTENT, STEP_SETUP,
    WIZARD_STEPS,
};

const OBJECTIVES: &[&str] = &[
    "awareness",
    "reach",
    "traffic",
    "engagement",
    "leads",
    "sales",
    "app_installs",
    "video_views",
];

const OBJECTIVE_SYNONYMS: &[(&str, &str)] = &[
    ("brand awareness", "awareness"),
    ("awareness", "awareness"),
    ("reach", "reach"),
    ("website traffic", "traffic"),
    ("traffic", "traffic"),
    ("engagement", "engagement"),
    ("post engagement", "engagement"),
    ("followers", "engagement"),
    ("lead generation", "leads"),
    ("leads", "leads"),
    ("sales", "sales"),
    ("conversions", "sales"),
    ("online sales", "sales"),
    ("app installs", "app_installs"),
    ("app promotion", "app_installs"),
    ("video views", "video_views"),
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("campaignName", FieldKind::Text, STEP_SETUP)
        .required(DefaultValue::Text("Untitled Instagram Campaign")),
    FieldSpec::new("objective", FieldKind::Choice { options: OBJECTIVES }, STEP_SETUP)
        .required(DefaultValue::Text("awareness"))
        .synonyms(OBJECTIVE_SYNONYMS),
    FieldSpec::new("budgetAmount", FieldKind::Number, STEP_SETUP).required(DefaultValue::Number(100.0)),
    FieldSpec::new("budgetType", FieldKind::Choice { options: BUDGET_TYPES }, STEP_SETUP)
        .required(DefaultValue::Text("daily"))
        .synonyms(BUDGET_TYPE_SYNONYMS),
    FieldSpec::new("bidStrategy", FieldKind::Choice { options: BID_STRATEGIES }, STEP_SETUP)
        .required(DefaultValue::Text("lowest_cost"))
        .synonyms(BID_STRATEGY_SYNONYMS),
    FieldSpec::new("locations", FieldKind::List, STEP_AUDIENCE)
        .required(DefaultValue::List(&["United States"])),
    FieldSpec::new("ageRange", FieldKind::Range { min: 18.0, max: 65.0 }, STEP_AUDIENCE)
        .required(DefaultValue::Range(18.0, 65.0)),
    FieldSpec::new("gender", FieldKind::Choice { options: GENDERS }, STEP_AUDIENCE).synonyms(GENDER_SYNONYMS),
    FieldSpec::new("interests", FieldKind::List, STEP_AUDIENCE),
    FieldSpec::new("languages", FieldKind::List, STEP_AUDIENCE),
    FieldSpec::new("placements", FieldKind::List, STEP_AUDIENCE).synonyms(PLACEMENT_SYNONYMS),
    FieldSpec::new("caption", FieldKind::Text, STEP_CONTENT)
        .required(DefaultValue::Text("Discover what we can do for you.")),
    FieldSpec::new("headline", FieldKind::Text, STEP_CONTENT),
    FieldSpec::new("hashtags", FieldKind::List, STEP_CONTENT),
    FieldSpec::new("callToAction", FieldKind::Choice { options: CALLS_TO_ACTION }, STEP_CONTENT)
        .synonyms(CTA_SYNONYMS),
];

const ALIASES: &[(&str, &str)] = &[
    ("campaignObjective", "objective"),
    ("interest", "interests"),
    ("targetInterests", "interests"),
    ("keywords", "interests"),
    ("keyword", "interests"),
    ("language", "languages"),
    ("placement", "placements"),
    ("headlines", "headline"),
    ("primaryText", "caption"),
    ("description", "caption"),
    ("descriptions", "caption"),
    ("hashtag", "hashtags"),
];

pub static PROFILE: PlatformProfile = PlatformProfile {
    platform: Platform::Instagram,
    steps: WIZARD_STEPS,
    fields: FIELDS,
    aliases: ALIASES,
};
