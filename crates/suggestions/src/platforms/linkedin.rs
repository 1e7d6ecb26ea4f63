use campaign_core::Platform;

use super::shared::{BUDGET_TYPES, BUDGET_TYPE_SYNONYMS};
use crate::profile::{
    DefaultValue, FieldKind, FieldSpec, PlatformProfile, STEP_AUDIENCE, STEP_CONTENT, STEP_SETUP,
    WIZARD_STEPS,
};

const OBJECTIVES: &[&str] = &[
    "brand_awareness",
    "website_visits",
    "engagement",
    "video_views",
    "lead_generation",
    "website_conversions",
    "job_applicants",
];

const OBJECTIVE_SYNONYMS: &[(&str, &str)] = &[
    ("brand awareness", "brand_awareness"),
    ("awareness", "brand_awareness"),
    ("reach", "brand_awareness"),
    ("website visits", "website_visits"),
    ("website traffic", "website_visits"),
    ("traffic", "website_visits"),
    ("engagement", "engagement"),
    ("video views", "video_views"),
    ("lead generation", "lead_generation"),
    ("leads", "lead_generation"),
    ("conversions", "website_conversions"),
    ("website conversions", "website_conversions"),
    ("sales", "website_conversions"),
    ("job applicants", "job_applicants"),
    ("recruiting", "job_applicants"),
    ("hiring", "job_applicants"),
];

const BID_STRATEGIES: &[&str] = &["maximum_delivery", "cost_cap", "manual_bidding"];

const BID_STRATEGY_SYNONYMS: &[(&str, &str)] = &[
    ("maximum delivery", "maximum_delivery"),
    ("automated bidding", "maximum_delivery"),
    ("automatic", "maximum_delivery"),
    ("lowest cost", "maximum_delivery"),
    ("cost cap", "cost_cap"),
    ("target cost", "cost_cap"),
    ("manual bidding", "manual_bidding"),
    ("manual", "manual_bidding"),
    ("manual cpc", "manual_bidding"),
];

const CALLS_TO_ACTION: &[&str] = &[
    "apply",
    "download",
    "learn_more",
    "register",
    "request_demo",
    "sign_up",
    "subscribe",
];

const CTA_SYNONYMS: &[(&str, &str)] = &[
    ("apply", "apply"),
    ("apply now", "apply"),
    ("download", "download"),
    ("learn more", "learn_more"),
    ("register", "register"),
    ("request demo", "request_demo"),
    ("request a demo", "request_demo"),
    ("book a demo", "request_demo"),
    ("sign up", "sign_up"),
    ("subscribe", "subscribe"),
];

const SENIORITY_SYNONYMS: &[(&str, &str)] = &[
    ("entry", "entry"),
    ("entry level", "entry"),
    ("senior", "senior"),
    ("manager", "manager"),
    ("director", "director"),
    ("vp", "vp"),
    ("vice president", "vp"),
    ("cxo", "cxo"),
    ("c-level", "cxo"),
    ("executive", "cxo"),
    ("owner", "owner"),
    ("founder", "owner"),
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("campaignName", FieldKind::Text, STEP_SETUP)
        .required(DefaultValue::Text("Untitled LinkedIn Campaign")),
    FieldSpec::new("objective", FieldKind::Choice { options: OBJECTIVES }, STEP_SETUP)
        .required(DefaultValue::Text("brand_awareness"))
        .synonyms(OBJECTIVE_SYNONYMS),
    FieldSpec::new("budgetAmount", FieldKind::Number, STEP_SETUP).required(DefaultValue::Number(100.0)),
    FieldSpec::new("budgetType", FieldKind::Choice { options: BUDGET_TYPES }, STEP_SETUP)
        .required(DefaultValue::Text("daily"))
        .synonyms(BUDGET_TYPE_SYNONYMS),
    FieldSpec::new("bidStrategy", FieldKind::Choice { options: BID_STRATEGIES }, STEP_SETUP)
        .required(DefaultValue::Text("maximum_delivery"))
        .synonyms(BID_STRATEGY_SYNONYMS),
    FieldSpec::new("locations", FieldKind::List, STEP_AUDIENCE)
        .required(DefaultValue::List(&["United States"])),
    FieldSpec::new("jobTitles", FieldKind::List, STEP_AUDIENCE),
    FieldSpec::new("industries", FieldKind::List, STEP_AUDIENCE),
    FieldSpec::new("skills", FieldKind::List, STEP_AUDIENCE),
    FieldSpec::new("seniorities", FieldKind::List, STEP_AUDIENCE).synonyms(SENIORITY_SYNONYMS),
    FieldSpec::new("companySizes", FieldKind::List, STEP_AUDIENCE),
    FieldSpec::new("ageRange", FieldKind::Range { min: 18.0, max: 55.0 }, STEP_AUDIENCE),
    FieldSpec::new("introText", FieldKind::Text, STEP_CONTENT)
        .required(DefaultValue::Text("See how our team helps businesses like yours.")),
    FieldSpec::new("headline", FieldKind::Text, STEP_CONTENT).required(DefaultValue::Text("Learn More Today")),
    FieldSpec::new("callToAction", FieldKind::Choice { options: CALLS_TO_ACTION }, STEP_CONTENT)
        .synonyms(CTA_SYNONYMS),
];

const ALIASES: &[(&str, &str)] = &[
    ("campaignObjective", "objective"),
    ("jobTitle", "jobTitles"),
    ("titles", "jobTitles"),
    ("industry", "industries"),
    ("targetIndustries", "industries"),
    ("interests", "skills"),
    ("targetInterests", "skills"),
    ("keywords", "skills"),
    ("seniority", "seniorities"),
    ("seniorityLevels", "seniorities"),
    ("companySize", "companySizes"),
    ("primaryText", "introText"),
    ("description", "introText"),
    ("descriptions", "introText"),
    ("headlines", "headline"),
];

pub static PROFILE: PlatformProfile = PlatformProfile {
    platform: Platform::Linkedin,
    steps: WIZARD_STEPS,
    fields: FIELDS,
    aliases: ALIASES,
};
