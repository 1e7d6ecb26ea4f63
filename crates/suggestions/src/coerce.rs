//! Reshaping raw suggestion values before they reach a field.

use serde_json::Value;

/// Budget-shaped suggestion keys whose object values get flattened.
const BUDGET_KEYS: &[&str] = &["recommendedBudget", "budget", "budgetRange", "dailyBudget"];

/// Keys whose object values are just a bag of audience fields.
const NESTED_GROUP_KEYS: &[&str] = &["demographics", "targeting", "audience"];

/// Expands composite suggestion values into `(field, value)` pairs.
///
/// `{ recommendedBudget: { min, max } }` becomes a `budgetAmount` (min wins,
/// then `amount`, then max); a `period`/`type` member becomes `budgetType`.
/// `{ demographics: {...} }` contributes its members directly. Anything else
/// is returned as a single pair.
pub fn expand(key: &str, value: &Value) -> Vec<(String, Value)> {
    match value {
        Value::Object(obj) if BUDGET_KEYS.contains(&key) => {
            let mut pairs = Vec::new();
            let amount = ["min", "amount", "max"]
                .iter()
                .filter_map(|k| obj.get(*k))
                .find(|v| to_number(v).map_or(false, |n| n > 0.0));
            if let Some(amount) = amount {
                pairs.push(("budgetAmount".to_string(), amount.clone()));
            }
            if let Some(period) = obj.get("period").or_else(|| obj.get("type")) {
                pairs.push(("budgetType".to_string(), period.clone()));
            }
            pairs
        }
        Value::Object(obj) if NESTED_GROUP_KEYS.contains(&key) => obj
            .iter()
            .flat_map(|(k, v)| expand(k, v))
            .collect(),
        _ => vec![(key.to_string(), value.clone())],
    }
}

/// Numeric reading of a suggestion value. Strings like `"$1,500"` or
/// `"500-1000"` yield their leading number; `"-250"` stays negative.
pub fn to_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_leading_number(s),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn parse_leading_number(s: &str) -> Option<f64> {
    let s = s.trim();
    let start = s.find(|c: char| c.is_ascii_digit() || c == '.')?;
    let digits: String = s[start..]
        .chars()
        .filter(|c| *c != ',')
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let n: f64 = digits.parse().ok()?;
    // A sign only counts when it sits right against the number.
    Some(if s[..start].ends_with('-') { -n } else { n })
}

/// Scalar reading of a value: first non-empty element of a list.
pub fn first_scalar(value: &Value) -> Option<Value> {
    match value {
        Value::Array(items) => items.iter().find_map(first_scalar),
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        other => Some(other.clone()),
    }
}

/// Reads a `[a, b]`, `{ min, max }` or `"a-b"` range as two optional numbers.
pub fn range_pair(value: &Value) -> Option<[Option<f64>; 2]> {
    match value {
        Value::Array(items) if items.len() == 2 => Some([to_number(&items[0]), to_number(&items[1])]),
        Value::Object(obj) => {
            let lo = obj.get("min").or_else(|| obj.get("from"));
            let hi = obj.get("max").or_else(|| obj.get("to"));
            if lo.is_none() && hi.is_none() {
                return None;
            }
            Some([lo.and_then(to_number), hi.and_then(to_number)])
        }
        Value::String(s) => {
            let (lo, hi) = s.split_once(['-', '–']).or_else(|| s.split_once(" to "))?;
            Some([parse_leading_number(lo), parse_leading_number(hi)])
        }
        _ => None,
    }
}
