//! Static per-platform field tables.

use campaign_core::Platform;
use serde::Serialize;
use serde_json::Value;

/// What kind of value a canonical wizard field holds. Decides which engine
/// stage handles an incoming suggestion for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Choice { options: &'static [&'static str] },
    Number,
    List,
    Range { min: f64, max: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Text(&'static str),
    Number(f64),
    List(&'static [&'static str]),
    Range(f64, f64),
}

impl DefaultValue {
    pub fn to_value(&self) -> Value {
        match self {
            DefaultValue::Text(s) => Value::from(*s),
            DefaultValue::Number(n) => number_value(*n),
            DefaultValue::List(items) => Value::Array(items.iter().map(|s| Value::from(*s)).collect()),
            DefaultValue::Range(lo, hi) => Value::Array(vec![number_value(*lo), number_value(*hi)]),
        }
    }
}

/// Whole numbers are stored as JSON integers so drafts round-trip cleanly.
pub fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub name: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
    /// Index of the wizard step that owns the field.
    pub step: usize,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
    /// Lower-cased free-text phrasing → canonical option token.
    #[serde(skip)]
    pub synonyms: &'static [(&'static str, &'static str)],
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind, step: usize) -> Self {
        Self {
            name,
            kind,
            step,
            required: false,
            default: None,
            synonyms: &[],
        }
    }

    /// Marks the field required and gives the value the default filler uses.
    pub const fn required(mut self, default: DefaultValue) -> Self {
        self.required = true;
        self.default = Some(default);
        self
    }

    pub const fn synonyms(mut self, synonyms: &'static [(&'static str, &'static str)]) -> Self {
        self.synonyms = synonyms;
        self
    }

    pub fn is_list(&self) -> bool {
        matches!(self.kind, FieldKind::List)
    }

    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self.kind {
            FieldKind::Range { min, max } => Some((min, max)),
            _ => None,
        }
    }
}

/// Everything the engine needs to know about one platform.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformProfile {
    pub platform: Platform,
    pub steps: &'static [&'static str],
    pub fields: &'static [FieldSpec],
    /// Suggestion field name → canonical field name.
    #[serde(skip)]
    pub aliases: &'static [(&'static str, &'static str)],
}

impl PlatformProfile {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn final_step(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.required)
    }

    pub fn list_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.is_list())
    }

    pub fn step_fields(&self, step: usize) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(move |f| f.step == step)
    }
}

/// Wizard steps shared by every platform: one per suggestion group, then
/// review & launch.
pub const WIZARD_STEPS: &[&str] = &["campaign_setup", "target_audience", "ad_content", "review"];

pub const STEP_SETUP: usize = 0;
pub const STEP_AUDIENCE: usize = 1;
pub const STEP_CONTENT: usize = 2;
