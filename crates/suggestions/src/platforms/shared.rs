//! Tables that several platforms share verbatim.

pub const BUDGET_TYPES: &[&str] = &["daily", "lifetime"];

pub const BUDGET_TYPE_SYNONYMS: &[(&str, &str)] = &[
    ("daily", "daily"),
    ("per day", "daily"),
    ("day", "daily"),
    ("daily budget", "daily"),
    ("lifetime", "lifetime"),
    ("total", "lifetime"),
    ("lifetime budget", "lifetime"),
    ("campaign total", "lifetime"),
];

pub const GENDERS: &[&str] = &["all", "male", "female"];

pub const GENDER_SYNONYMS: &[(&str, &str)] = &[
    ("all", "all"),
    ("all genders", "all"),
    ("everyone", "all"),
    ("both", "all"),
    ("male", "male"),
    ("men", "male"),
    ("female", "female"),
    ("women", "female"),
];

pub const CTA_SYNONYMS: &[(&str, &str)] = &[
    ("shop now", "shop_now"),
    ("buy now", "shop_now"),
    ("learn more", "learn_more"),
    ("read more", "learn_more"),
    ("sign up", "sign_up"),
    ("register", "sign_up"),
    ("contact us", "contact_us"),
    ("call now", "contact_us"),
    ("get quote", "get_quote"),
    ("get a quote", "get_quote"),
    ("request a quote", "get_quote"),
    ("book now", "book_now"),
    ("book", "book_now"),
    ("download", "download"),
];

/// Suggestion field names that mean the same thing on every platform.
/// Platform tables are consulted first.
pub const ALIASES: &[(&str, &str)] = &[
    ("name", "campaignName"),
    ("budget", "budgetAmount"),
    ("dailyBudget", "budgetAmount"),
    ("recommendedBudget", "budgetAmount"),
    ("budgetPeriod", "budgetType"),
    ("bidding", "bidStrategy"),
    ("biddingStrategy", "bidStrategy"),
    ("location", "locations"),
    ("targetLocations", "locations"),
    ("age", "ageRange"),
    ("ageGroup", "ageRange"),
    ("cta", "callToAction"),
    ("ctas", "callToAction"),
    ("callToActions", "callToAction"),
];
