//! Property-based tests for the suggestion application engine.

use campaign_core::{CampaignDraft, Platform, SuggestionSet};
use campaign_suggestions::merge::as_list;
use campaign_suggestions::validity::is_step_valid;
use campaign_suggestions::{apply_defaults, auto_apply, clamp_range, map_value, merge_array, normalize, profile_for};
use proptest::prelude::*;
use serde_json::{json, Value};

fn arb_platform() -> impl Strategy<Value = Platform> {
    prop_oneof![
        Just(Platform::Whatsapp),
        Just(Platform::Facebook),
        Just(Platform::Google),
        Just(Platform::Linkedin),
        Just(Platform::Instagram),
    ]
}

/// Field names drawn from the tables plus arbitrary identifiers.
fn arb_field_name() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z]{0,16}",
        Just("objective".to_string()),
        Just("keyword".to_string()),
        Just("targetInterests".to_string()),
        Just("callToActions".to_string()),
        Just("headlines".to_string()),
        Just("ageRange".to_string()),
    ]
}

fn arb_list_entry() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-z ]{0,8}".prop_map(Value::from),
        Just(Value::Null),
        (0i64..5).prop_map(Value::from),
    ]
}

/// Every (platform, field, synonym) triple in the tables.
fn synonym_triples() -> Vec<(Platform, &'static str, &'static str)> {
    Platform::ALL
        .iter()
        .flat_map(|p| {
            profile_for(*p)
                .fields
                .iter()
                .flat_map(move |f| f.synonyms.iter().map(move |(phrase, _)| (*p, f.name, *phrase)))
        })
        .collect()
}

proptest! {
    #[test]
    fn normalize_is_idempotent(platform in arb_platform(), name in arb_field_name()) {
        let once = normalize(platform, &name).to_string();
        prop_assert_eq!(normalize(platform, &once), once.as_str());
    }

    #[test]
    fn map_value_ignores_case_of_synonyms(index in any::<prop::sample::Index>()) {
        let triples = synonym_triples();
        let (platform, field, phrase) = triples[index.index(triples.len())];
        prop_assert_eq!(
            map_value(platform, field, json!(phrase)),
            map_value(platform, field, json!(phrase.to_uppercase()))
        );
    }

    #[test]
    fn merge_array_is_idempotent_without_duplicates(
        existing in prop::collection::vec(arb_list_entry(), 0..6),
        incoming in prop::collection::vec(arb_list_entry(), 0..6),
    ) {
        let incoming = Value::Array(incoming);
        let once = merge_array(&existing, &incoming);
        let twice = merge_array(&once, &incoming);
        prop_assert_eq!(&once, &twice);

        for (i, a) in once.iter().enumerate() {
            prop_assert!(!once[i + 1..].contains(a));
        }
    }

    #[test]
    fn clamp_range_is_ordered_and_in_bounds(
        platform in arb_platform(),
        a in -1000.0f64..1000.0,
        b in -1000.0f64..1000.0,
    ) {
        let (min, max) = profile_for(platform).field("ageRange").and_then(|f| f.bounds()).unwrap();
        let [lo, hi] = clamp_range(platform, "ageRange", &json!([a, b])).unwrap();
        prop_assert!(min <= lo && lo <= hi && hi <= max);

        let again = clamp_range(platform, "ageRange", &json!([lo, hi])).unwrap();
        prop_assert_eq!(again, [lo, hi]);
    }

    #[test]
    fn defaults_make_every_step_valid(
        platform in arb_platform(),
        budget in prop_oneof![Just(json!(0)), Just(json!(250)), Just(Value::Null)],
        name in prop_oneof![Just(json!("")), Just(json!("Launch"))],
    ) {
        let mut draft = CampaignDraft::new(platform);
        draft.set_field("budgetAmount", budget);
        draft.set_field("campaignName", name);
        apply_defaults(&mut draft);
        for step in 0..=profile_for(platform).final_step() {
            prop_assert!(is_step_valid(platform, &draft.fields, step));
        }
    }

    #[test]
    fn empty_suggestions_touch_only_defaults_and_step(
        platform in arb_platform(),
        keywords in prop::collection::vec("[a-z]{1,6}", 0..3),
    ) {
        let mut draft = CampaignDraft::new(platform);
        draft.set_field("notes", json!("kept as-is"));
        draft.set_field("keywords", Value::from(keywords.clone()));
        let before = draft.clone();

        auto_apply(&mut draft, &SuggestionSet::default());

        prop_assert_eq!(draft.current_step, profile_for(platform).final_step());
        for (name, value) in &before.fields {
            let is_required = profile_for(platform).field(name).map_or(false, |f| f.required);
            if !is_required {
                prop_assert_eq!(draft.fields.get(name), Some(value));
            }
        }
        prop_assert_eq!(as_list(draft.field("keywords")).len(), keywords.len());
    }
}
