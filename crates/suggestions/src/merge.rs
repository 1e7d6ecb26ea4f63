//! Set-union merge for list-valued wizard fields.

use serde_json::Value;

/// Union of `existing` and `incoming` in insertion order, without falsy
/// entries or duplicates. A scalar `incoming` adds one value.
pub fn merge_array(existing: &[Value], incoming: &Value) -> Vec<Value> {
    let incoming: &[Value] = match incoming {
        Value::Array(items) => items,
        other => std::slice::from_ref(other),
    };

    let mut merged: Vec<Value> = Vec::with_capacity(existing.len() + incoming.len());
    for value in existing.iter().chain(incoming) {
        if is_falsy(value) || merged.contains(value) {
            continue;
        }
        merged.push(value.clone());
    }
    merged
}

/// Reads whatever a field currently holds as a list.
pub fn as_list(value: Option<&Value>) -> Vec<Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.clone(),
        Some(other) => vec![other.clone()],
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn list(v: Value) -> Vec<Value> {
        as_list(Some(&v))
    }

    #[test]
    fn test_single_value_adds_one() {
        let merged = merge_array(&list(json!(["Austin"])), &json!("Dallas"));
        assert_eq!(merged, vec![json!("Austin"), json!("Dallas")]);
    }

    #[test]
    fn test_union_preserves_existing_and_dedupes() {
        let merged = merge_array(
            &list(json!(["plumbing", "drain repair"])),
            &json!(["drain repair", "water heater", "plumbing"]),
        );
        assert_eq!(merged, vec![json!("plumbing"), json!("drain repair"), json!("water heater")]);
    }

    #[test]
    fn test_falsy_entries_dropped() {
        let merged = merge_array(&list(json!(["", "English", null])), &json!([null, "", "  ", "Spanish", false]));
        assert_eq!(merged, vec![json!("English"), json!("Spanish")]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(merge_array(&[], &Value::Null).is_empty());
        assert!(merge_array(&[], &json!([])).is_empty());
        assert_eq!(merge_array(&list(json!(["a"])), &json!([])), vec![json!("a")]);
    }

    #[test]
    fn test_reapplying_is_a_no_op() {
        let once = merge_array(&list(json!(["a", "b"])), &json!(["b", "c"]));
        let twice = merge_array(&once, &json!(["b", "c"]));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_as_list_shapes() {
        assert!(as_list(None).is_empty());
        assert!(as_list(Some(&Value::Null)).is_empty());
        assert_eq!(as_list(Some(&json!("solo"))), vec![json!("solo")]);
    }
}
