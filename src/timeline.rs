//! Typed timeline data model
//!
//! A [`Timeline`] is only ever obtained through
//! [`TimelineValidator::validate`](crate::TimelineValidator::validate), so
//! code holding one can rely on the schema-level invariants: required fields
//! present and well-typed, timestamps in date-time format. Invariants the
//! schema does not cover (non-empty `events`, unique event ids, per-type
//! payload shape) are checked by individual metrics or not at all.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One recorded occurrence within a timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Event identifier, unique within a timeline by convention
    pub id: String,
    /// Event type. `"DECISION"` and `"HANDOFF"` are significant to metrics;
    /// all other values are treated generically.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Date-time string (RFC 3339)
    pub timestamp: String,
    /// Who or what produced the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    /// Free-form per-event data, interpreted differently per metric
    /// (`dependsOn`, `delayMs`, `hasKnowledge`). An explicit JSON `null`
    /// deserializes to `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Map<String, Value>>,
    /// Labels attached to the event; only membership matters to metrics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl TimelineEvent {
    /// The context boundary this event occupies: the actor (empty string
    /// when absent) joined with the tags in their given order.
    pub fn context_boundary(&self) -> String {
        let actor = self.actor.as_deref().unwrap_or("");
        let tags = self.tags.as_deref().unwrap_or(&[]).join(",");
        format!("{}|{}", actor, tags)
    }

    /// Whether the event carries the given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_deref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }

    /// Look up a payload field, if the payload exists and has it
    pub fn payload_field(&self, key: &str) -> Option<&Value> {
        self.payload.as_ref().and_then(|p| p.get(key))
    }
}

/// Session metadata attached to a timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineMeta {
    /// Identifier of the session that produced the timeline
    #[serde(rename = "sessionId")]
    pub session_id: String,
    /// Date-time string (RFC 3339)
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// Origin of the recording
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// The root entity scored by all metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    /// Recorded events in insertion order
    pub events: Vec<TimelineEvent>,
    /// Session metadata
    pub meta: TimelineMeta,
}
