use campaign_core::Platform;

use super::shared::{BUDGET_TYPES, BUDGET_TYPE_SYNONYMS, CTA_SYNONYMS, GENDERS, GENDER_SYNONYMS};
use crate::profile::{
    DefaultValue, FieldKind, FieldSpec, PlatformProfile, STEP_AUDIENCE, STEP_CONTENT, STEP_SETUP,
    WIZARD_STEPS,
};

const CAMPAIGN_TYPES: &[&str] = &["search", "display", "video", "shopping", "performance_max"];

const CAMPAIGN_TYPE_SYNONYMS: &[(&str, &str)] = &[
    ("brand awareness", "display"),
    ("awareness", "display"),
    ("brand awareness and reach", "display"),
    ("reach", "display"),
    ("lead generation", "performance_max"),
    ("leads", "performance_max"),
    ("conversions", "performance_max"),
    ("sales", "performance_max"),
    ("website traffic", "search"),
    ("traffic", "search"),
    ("search", "search"),
    ("video views", "video"),
    ("video", "video"),
    ("product sales", "shopping"),
    ("online sales", "shopping"),
    ("ecommerce", "shopping"),
    ("performance max", "performance_max"),
];

const BID_STRATEGIES: &[&str] = &[
    "maximize_clicks",
    "maximize_conversions",
    "target_cpa",
    "target_roas",
    "manual_cpc",
    "target_impression_share",
];

const BID_STRATEGY_SYNONYMS: &[(&str, &str)] = &[
    ("maximize clicks", "maximize_clicks"),
    ("max clicks", "maximize_clicks"),
    ("lowest cost", "maximize_clicks"),
    ("maximize conversions", "maximize_conversions"),
    ("conversions", "maximize_conversions"),
    ("target cpa", "target_cpa"),
    ("cost per acquisition", "target_cpa"),
    ("tcpa", "target_cpa"),
    ("target roas", "target_roas"),
    ("return on ad spend", "target_roas"),
    ("manual cpc", "manual_cpc"),
    ("manual", "manual_cpc"),
    ("cpc", "manual_cpc"),
    ("target impression share", "target_impression_share"),
];

const CALLS_TO_ACTION: &[&str] = &[
    "learn_more",
    "shop_now",
    "sign_up",
    "contact_us",
    "get_quote",
    "book_now",
    "download",
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("campaignName", FieldKind::Text, STEP_SETUP)
        .required(DefaultValue::Text("Untitled Google Ads Campaign")),
    FieldSpec::new("campaignType", FieldKind::Choice { options: CAMPAIGN_TYPES }, STEP_SETUP)
        .required(DefaultValue::Text("search"))
        .synonyms(CAMPAIGN_TYPE_SYNONYMS),
    FieldSpec::new("budgetAmount", FieldKind::Number, STEP_SETUP).required(DefaultValue::Number(100.0)),
    FieldSpec::new("budgetType", FieldKind::Choice { options: BUDGET_TYPES }, STEP_SETUP)
        .required(DefaultValue::Text("daily"))
        .synonyms(BUDGET_TYPE_SYNONYMS),
    FieldSpec::new("bidStrategy", FieldKind::Choice { options: BID_STRATEGIES }, STEP_SETUP)
        .required(DefaultValue::Text("maximize_clicks"))
        .synonyms(BID_STRATEGY_SYNONYMS),
    FieldSpec::new("locations", FieldKind::List, STEP_AUDIENCE)
        .required(DefaultValue::List(&["United States"])),
    FieldSpec::new("languages", FieldKind::List, STEP_AUDIENCE).required(DefaultValue::List(&["English"])),
    FieldSpec::new("keywords", FieldKind::List, STEP_AUDIENCE),
    FieldSpec::new("ageRange", FieldKind::Range { min: 18.0, max: 75.0 }, STEP_AUDIENCE),
    FieldSpec::new("gender", FieldKind::Choice { options: GENDERS }, STEP_AUDIENCE).synonyms(GENDER_SYNONYMS),
    FieldSpec::new("headlines", FieldKind::List, STEP_CONTENT)
        .required(DefaultValue::List(&["Grow Your Business Today"])),
    FieldSpec::new("descriptions", FieldKind::List, STEP_CONTENT)
        .required(DefaultValue::List(&["Get in touch to find out how we can help."])),
    FieldSpec::new("finalUrl", FieldKind::Text, STEP_CONTENT),
    FieldSpec::new("callToAction", FieldKind::Choice { options: CALLS_TO_ACTION }, STEP_CONTENT)
        .synonyms(CTA_SYNONYMS),
];

const ALIASES: &[(&str, &str)] = &[
    ("objective", "campaignType"),
    ("campaignObjective", "campaignType"),
    ("targetLanguages", "languages"),
    ("language", "languages"),
    ("keyword", "keywords"),
    ("targetKeywords", "keywords"),
    ("interests", "keywords"),
    ("targetInterests", "keywords"),
    ("headline", "headlines"),
    ("description", "descriptions"),
    ("landingPage", "finalUrl"),
    ("websiteUrl", "finalUrl"),
];

pub static PROFILE: PlatformProfile = PlatformProfile {
    platform: Platform::Google,
    steps: WIZARD_STEPS,
    fields: FIELDS,
    aliases: ALIASES,
};
