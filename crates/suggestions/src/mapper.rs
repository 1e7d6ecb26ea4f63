//! Free-text AI value → constrained option token.

use campaign_core::Platform;
use serde_json::Value;

use crate::platforms::profile_for;
use crate::profile::FieldKind;

/// Non-string values come back unchanged, as do strings with no entry in
/// the field's synonym table. Callers keep unrecognized options as free text.
pub fn map_value(platform: Platform, field: &str, value: Value) -> Value {
    let Value::String(raw) = value else {
        return value;
    };
    match map_str(platform, field, &raw) {
        Some(token) => Value::from(token),
        None => Value::String(raw),
    }
}

/// Case-insensitive lookup against synonyms first, then the option tokens.
pub fn map_str(platform: Platform, field: &str, raw: &str) -> Option<&'static str> {
    let spec = profile_for(platform).field(field)?;
    let key = raw.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }

    if let Some((_, token)) = spec.synonyms.iter().find(|(phrase, _)| *phrase == key) {
        return Some(*token);
    }

    if let FieldKind::Choice { options } = spec.kind {
        let as_token = key.replace([' ', '-'], "_");
        return options.iter().copied().find(|option| *option == key || *option == as_token);
    }
    None
}
