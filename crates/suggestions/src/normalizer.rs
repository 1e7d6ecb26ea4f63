//! Suggestion field name → canonical wizard field name.

use campaign_core::Platform;

use crate::platforms::{profile_for, shared};

/// Total: names with no alias pass through unchanged.
pub fn normalize(platform: Platform, raw: &str) -> &str {
    let profile = profile_for(platform);
    lookup(profile.aliases, raw)
        .or_else(|| lookup(shared::ALIASES, raw))
        .unwrap_or(raw)
}

fn lookup(table: &'static [(&'static str, &'static str)], raw: &str) -> Option<&'static str> {
    table.iter().find(|(alias, _)| *alias == raw).map(|(_, canonical)| *canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_objective_maps_to_campaign_type() {
        assert_eq!(normalize(Platform::Google, "objective"), "campaignType");
        assert_eq!(normalize(Platform::Google, "keyword"), "keywords");
        assert_eq!(normalize(Platform::Google, "targetInterests"), "keywords");
    }

    #[test]
    fn test_objective_is_identity_where_names_match() {
        assert_eq!(normalize(Platform::Instagram, "objective"), "objective");
        assert_eq!(normalize(Platform::Facebook, "objective"), "objective");
        assert_eq!(normalize(Platform::Instagram, "targetInterests"), "interests");
    }

    #[test]
    fn test_shared_aliases_apply_everywhere() {
        for platform in Platform::ALL {
            assert_eq!(normalize(platform, "cta"), "callToAction");
            assert_eq!(normalize(platform, "dailyBudget"), "budgetAmount");
            assert_eq!(normalize(platform, "targetLocations"), "locations");
        }
    }

    #[test]
    fn test_unknown_names_pass_through() {
        assert_eq!(normalize(Platform::Linkedin, "visualSuggestions"), "visualSuggestions");
        assert_eq!(normalize(Platform::Google, ""), "");
    }

    #[test]
    fn test_idempotent_over_every_table_entry() {
        for platform in Platform::ALL {
            let profile = profile_for(platform);
            let names = profile
                .aliases
                .iter()
                .chain(shared::ALIASES)
                .flat_map(|(a, b)| [*a, *b])
                .chain(profile.fields.iter().map(|f| f.name));
            for name in names {
                let once = normalize(platform, name);
                assert_eq!(normalize(platform, once), once, "{}: {}", platform, name);
            }
        }
    }

    #[test]
    fn test_canonical_names_are_fixed_points() {
        for platform in Platform::ALL {
            for field in profile_for(platform).fields {
                assert_eq!(normalize(platform, field.name), field.name);
            }
        }
    }
}
