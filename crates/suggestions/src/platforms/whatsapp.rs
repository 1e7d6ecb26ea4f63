use campaign_core::Platform;

use super::meta::{BID_STRATEGIES, BID_STRATEGY_SYNONYMS};
use super::shared::{BUDGET_TYPES, BUDGET_TYPE_SYNONYMS};
use crate::profile::{
    DefaultValue, FieldKind, FieldSpec, PlatformProfile, STEP_AUDIENCE, STEP_CONTENT, STEP_SETUP,
    WIZARD_STEPS,
};

const OBJECTIVES: &[&str] = &["conversations", "leads", "sales", "awareness"];

const OBJECTIVE_SYNONYMS: &[(&str, &str)] = &[
    ("conversations", "conversations"),
    ("messages", "conversations"),
    ("engagement", "conversations"),
    ("customer support", "conversations"),
    ("lead generation", "leads"),
    ("leads", "leads"),
    ("sales", "sales"),
    ("conversions", "sales"),
    ("brand awareness", "awareness"),
    ("awareness", "awareness"),
    ("reach", "awareness"),
];

const TEMPLATE_CATEGORIES: &[&str] = &["marketing", "utility"];

const TEMPLATE_CATEGORY_SYNONYMS: &[(&str, &str)] = &[
    ("marketing", "marketing"),
    ("promotional", "marketing"),
    ("promotion", "marketing"),
    ("utility", "utility"),
    ("transactional", "utility"),
    ("notification", "utility"),
];

const CALLS_TO_ACTION: &[&str] = &["quick_reply", "visit_website", "call_phone", "copy_code"];

const CTA_SYNONYMS: &[(&str, &str)] = &[
    ("quick reply", "quick_reply"),
    ("reply", "quick_reply"),
    ("send message", "quick_reply"),
    ("visit website", "visit_website"),
    ("learn more", "visit_website"),
    ("shop now", "visit_website"),
    ("call now", "call_phone"),
    ("call", "call_phone"),
    ("contact us", "call_phone"),
    ("copy code", "copy_code"),
    ("get offer", "copy_code"),
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("campaignName", FieldKind::Text, STEP_SETUP)
        .required(DefaultValue::Text("Untitled WhatsApp Campaign")),
    FieldSpec::new("objective", FieldKind::Choice { options: OBJECTIVES }, STEP_SETUP)
        .required(DefaultValue::Text("conversations"))
        .synonyms(OBJECTIVE_SYNONYMS),
    FieldSpec::new("templateCategory", FieldKind::Choice { options: TEMPLATE_CATEGORIES }, STEP_SETUP)
        .required(DefaultValue::Text("marketing"))
        .synonyms(TEMPLATE_CATEGORY_SYNONYMS),
    FieldSpec::new("budgetAmount", FieldKind::Number, STEP_SETUP).required(DefaultValue::Number(100.0)),
    FieldSpec::new("budgetType", FieldKind::Choice { options: BUDGET_TYPES }, STEP_SETUP)
        .required(DefaultValue::Text("daily"))
        .synonyms(BUDGET_TYPE_SYNONYMS),
    FieldSpec::new("bidStrategy", FieldKind::Choice { options: BID_STRATEGIES }, STEP_SETUP)
        .required(DefaultValue::Text("lowest_cost"))
        .synonyms(BID_STRATEGY_SYNONYMS),
    FieldSpec::new("locations", FieldKind::List, STEP_AUDIENCE)
        .required(DefaultValue::List(&["United States"])),
    FieldSpec::new("languages", FieldKind::List, STEP_AUDIENCE).required(DefaultValue::List(&["English"])),
    FieldSpec::new("interests", FieldKind::List, STEP_AUDIENCE),
    FieldSpec::new("ageRange", FieldKind::Range { min: 18.0, max: 65.0 }, STEP_AUDIENCE),
    FieldSpec::new("headerText", FieldKind::Text, STEP_CONTENT),
    FieldSpec::new("messageBody", FieldKind::Text, STEP_CONTENT)
        .required(DefaultValue::Text("Hi! Thanks for your interest. How can we help you today?")),
    FieldSpec::new("footerText", FieldKind::Text, STEP_CONTENT),
    FieldSpec::new("buttons", FieldKind::List, STEP_CONTENT),
    FieldSpec::new("callToAction", FieldKind::Choice { options: CALLS_TO_ACTION }, STEP_CONTENT)
        .synonyms(CTA_SYNONYMS),
];

const ALIASES: &[(&str, &str)] = &[
    ("campaignObjective", "objective"),
    ("messageType", "templateCategory"),
    ("category", "templateCategory"),
    ("language", "languages"),
    ("interest", "interests"),
    ("targetInterests", "interests"),
    ("keywords", "interests"),
    ("headline", "headerText"),
    ("headlines", "headerText"),
    ("description", "messageBody"),
    ("descriptions", "messageBody"),
    ("primaryText", "messageBody"),
    ("message", "messageBody"),
    ("footer", "footerText"),
    ("button", "buttons"),
    ("quickReplies", "buttons"),
];

pub static PROFILE: PlatformProfile = PlatformProfile {
    platform: Platform::Whatsapp,
    steps: WIZARD_STEPS,
    fields: FIELDS,
    aliases: ALIASES,
};
