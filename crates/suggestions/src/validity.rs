//! Per-step form validity. Pure functions of the current field values; call
//! them again after every edit.

use campaign_core::{FieldMap, Platform};
use serde_json::Value;

use crate::coerce::to_number;
use crate::platforms::profile_for;
use crate::profile::{FieldKind, FieldSpec};

/// Whether `value` counts as filled in for a field of `kind`.
pub fn is_filled(kind: FieldKind, value: Option<&Value>) -> bool {
    let Some(value) = value else {
        return false;
    };
    match (kind, value) {
        (FieldKind::Range { .. }, Value::Array(items)) => {
            items.len() == 2 && items.iter().all(|v| v.as_f64().is_some())
        }
        (FieldKind::Range { .. }, _) => false,
        (FieldKind::Number, v) => to_number(v).map_or(false, |n| n > 0.0),
        (_, Value::Null) => false,
        (_, Value::String(s)) => !s.trim().is_empty(),
        (_, Value::Array(items)) => !items.is_empty(),
        (_, Value::Number(n)) => n.as_f64().map_or(false, |n| n > 0.0),
        (_, Value::Bool(b)) => *b,
        (_, Value::Object(obj)) => !obj.is_empty(),
    }
}

fn field_filled(spec: &FieldSpec, fields: &FieldMap) -> bool {
    is_filled(spec.kind, fields.get(spec.name))
}

/// Required fields of `step` that are still empty.
pub fn missing_fields(platform: Platform, fields: &FieldMap, step: usize) -> Vec<&'static str> {
    profile_for(platform)
        .step_fields(step)
        .filter(|spec| spec.required && !field_filled(spec, fields))
        .map(|spec| spec.name)
        .collect()
}

/// Gates the "Next" control for `step`.
pub fn is_step_valid(platform: Platform, fields: &FieldMap, step: usize) -> bool {
    missing_fields(platform, fields, step).is_empty()
}

/// Gates "Launch": every step valid.
pub fn is_launch_ready(platform: Platform, fields: &FieldMap) -> bool {
    profile_for(platform)
        .required_fields()
        .all(|spec| field_filled(spec, fields))
}
