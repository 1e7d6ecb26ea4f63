//! Draft lifecycle events.
//!
//! The wizard session and REST handlers accept an `Arc<dyn EventSink>` and
//! report what happened to a draft; where the events go is up to the sink.

use crate::types::Platform;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DraftEventType {
    Created,
    Updated,
    Deleted,
    SuggestionsGenerated,
    SuggestionsFailed,
    SuggestionsApplied,
    ContextSaved,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftEvent {
    pub event_id: Uuid,
    pub event_type: DraftEventType,
    /// Absent for events not tied to a platform wizard, e.g. a saved context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    pub draft_id: Option<Uuid>,
    pub detail: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: DraftEvent);
}

/// No-op sink for callers that don't need event emission.
pub struct NoOpSink;

impl EventSink for NoOpSink {
    fn emit(&self, _event: DraftEvent) {}
}

/// In-memory sink that captures events for testing.
#[derive(Default)]
pub struct CaptureSink {
    events: Mutex<Vec<DraftEvent>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<DraftEvent> {
        self.events.lock().expect("event bus mutex poisoned").clone()
    }

    pub fn count(&self) -> usize {
        self.events.lock().expect("event bus mutex poisoned").len()
    }

    pub fn count_type(&self, event_type: DraftEventType) -> usize {
        self.events
            .lock()
            .expect("event bus mutex poisoned")
            .iter()
            .filter(|e| e.event_type == event_type)
            .count()
    }
}

impl EventSink for CaptureSink {
    fn emit(&self, event: DraftEvent) {
        self.events.lock().expect("event bus mutex poisoned").push(event);
    }
}

pub fn make_event(
    event_type: DraftEventType,
    platform: impl Into<Option<Platform>>,
    draft_id: Option<Uuid>,
    detail: serde_json::Value,
) -> DraftEvent {
    DraftEvent {
        event_id: Uuid::new_v4(),
        event_type,
        platform: platform.into(),
        draft_id,
        detail,
        timestamp: Utc::now(),
    }
}

pub fn noop_sink() -> Arc<dyn EventSink> {
    Arc::new(NoOpSink)
}

pub fn capture_sink() -> Arc<CaptureSink> {
    Arc::new(CaptureSink::new())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_sink() {
        let sink = capture_sink();
        assert_eq!(sink.count(), 0);

        let id = Uuid::new_v4();
        sink.emit(make_event(
            DraftEventType::Created,
            Platform::Google,
            Some(id),
            serde_json::json!({"name": "Spring"}),
        ));
        sink.emit(make_event(
            DraftEventType::SuggestionsFailed,
            Platform::Google,
            None,
            serde_json::Value::Null,
        ));

        assert_eq!(sink.count(), 2);
        assert_eq!(sink.count_type(DraftEventType::Created), 1);
        assert_eq!(sink.count_type(DraftEventType::Deleted), 0);
        assert_eq!(sink.events()[0].draft_id, Some(id));
        assert_eq!(sink.events()[0].platform, Some(Platform::Google));
    }

    #[test]
    fn test_event_without_platform() {
        let event = make_event(
            DraftEventType::ContextSaved,
            None::<Platform>,
            None,
            serde_json::json!({"name": "Bookshop"}),
        );
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event_type"], "context_saved");
        assert!(value.get("platform").is_none());
    }

    #[test]
    fn test_noop_sink() {
        let sink = noop_sink();
        sink.emit(make_event(
            DraftEventType::Deleted,
            Platform::Linkedin,
            None,
            serde_json::Value::Null,
        ));
    }
}
