//! Option tables common to the Meta ad platforms (Facebook, Instagram,
//! WhatsApp click-to-message).

pub const BID_STRATEGIES: &[&str] = &["lowest_cost", "cost_cap", "bid_cap", "target_cost"];

pub const BID_STRATEGY_SYNONYMS: &[(&str, &str)] = &[
    ("lowest cost", "lowest_cost"),
    ("highest volume", "lowest_cost"),
    ("automatic", "lowest_cost"),
    ("auto", "lowest_cost"),
    ("maximize clicks", "lowest_cost"),
    ("cost cap", "cost_cap"),
    ("cost per result goal", "cost_cap"),
    ("bid cap", "bid_cap"),
    ("manual", "bid_cap"),
    ("target cost", "target_cost"),
];

pub const CALLS_TO_ACTION: &[&str] = &[
    "learn_more",
    "shop_now",
    "sign_up",
    "contact_us",
    "get_quote",
    "book_now",
    "download",
    "send_message",
];

pub const PLACEMENT_SYNONYMS: &[(&str, &str)] = &[
    ("feed", "feed"),
    ("news feed", "feed"),
    ("instagram feed", "feed"),
    ("facebook feed", "feed"),
    ("stories", "stories"),
    ("story", "stories"),
    ("instagram stories", "stories"),
    ("reels", "reels"),
    ("instagram reels", "reels"),
    ("explore", "explore"),
    ("marketplace", "marketplace"),
    ("messenger", "messenger"),
];
