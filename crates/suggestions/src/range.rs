//! Numeric range clamping for range-kind fields (age range).

use campaign_core::Platform;
use serde_json::Value;

use crate::coerce::range_pair;
use crate::platforms::profile_for;
use crate::profile::number_value;

/// Clamps `pair` into the field's declared bounds.
///
/// The low bound is clamped into `[min, max]`, then the high bound into
/// `[lo, max]`, so the result is ascending and in bounds for any input;
/// `[80, 10]` on a 18–65 field gives `[65, 65]`. Elements that don't read as
/// numbers fall back to `min` (low) and `max` (high).
///
/// Returns `None` when `field` isn't a range field on `platform` or the value
/// has no range shape at all.
pub fn clamp_range(platform: Platform, field: &str, pair: &Value) -> Option<[f64; 2]> {
    let (min, max) = profile_for(platform).field(field)?.bounds()?;
    let [a, b] = range_pair(pair)?;
    Some(clamp_pair(min, max, a, b))
}

fn clamp_pair(min: f64, max: f64, a: Option<f64>, b: Option<f64>) -> [f64; 2] {
    let lo = a.unwrap_or(min).clamp(min, max);
    let hi = b.unwrap_or(max).clamp(lo, max);
    [lo, hi]
}

pub fn range_value([lo, hi]: [f64; 2]) -> Value {
    Value::Array(vec![number_value(lo), number_value(hi)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_instagram_out_of_range() {
        assert_eq!(clamp_range(Platform::Instagram, "ageRange", &json!([15, 70])), Some([18.0, 65.0]));
    }

    #[test]
    fn test_reversed_and_out_of_range() {
        assert_eq!(clamp_range(Platform::Instagram, "ageRange", &json!([80, 10])), Some([65.0, 65.0]));
    }

    #[test]
    fn test_google_bounds() {
        assert_eq!(clamp_range(Platform::Google, "ageRange", &json!([16, 90])), Some([18.0, 75.0]));
        assert_eq!(clamp_range(Platform::Google, "ageRange", &json!("25-54")), Some([25.0, 54.0]));
    }

    #[test]
    fn test_already_valid_pair_is_unchanged() {
        let once = clamp_range(Platform::Facebook, "ageRange", &json!([25, 45])).unwrap();
        assert_eq!(once, [25.0, 45.0]);
        let twice = clamp_range(Platform::Facebook, "ageRange", &range_value(once)).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_non_numeric_elements_fall_back_to_bounds() {
        assert_eq!(clamp_range(Platform::Instagram, "ageRange", &json!(["teen", 30])), Some([18.0, 30.0]));
        assert_eq!(clamp_range(Platform::Instagram, "ageRange", &json!({"min": 21})), Some([21.0, 65.0]));
    }

    #[test]
    fn test_only_range_fields_are_clamped() {
        assert_eq!(clamp_range(Platform::Google, "budgetAmount", &json!([1, 2])), None);
        assert_eq!(clamp_range(Platform::Google, "ageRange", &json!(30)), None);
    }

    #[test]
    fn test_range_value() {
        assert_eq!(range_value([18.0, 65.0]), json!([18, 65]));
    }
}
