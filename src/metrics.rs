//! Metric computation over validated timelines
//!
//! Five independent quality metrics, each a single filter-then-ratio pass
//! over the events of a [`Timeline`]: context isolation, decision
//! traceability, handoff efficiency, rule compliance, and knowledge
//! persistence. All scores fall in the closed interval [0, 1].
//!
//! These functions only accept an already-validated [`Timeline`]; the
//! validation gate lives in [`TimelineScorer`](crate::TimelineScorer), which
//! also accepts raw [`serde_json::Value`] input.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::{EvalError, Result};
use crate::timeline::{Timeline, TimelineEvent};

/// Event type significant to decision traceability
pub const DECISION_EVENT_TYPE: &str = "DECISION";

/// Event type significant to handoff efficiency
pub const HANDOFF_EVENT_TYPE: &str = "HANDOFF";

/// Default handoff delay threshold in milliseconds
pub const DEFAULT_HANDOFF_DELAY_MS: f64 = 60_000.0;

/// Tag marking an event as knowledge-bearing
const KNOWLEDGE_TAG: &str = "knowledge";

fn require_events(timeline: &Timeline) -> Result<()> {
    if timeline.events.is_empty() {
        return Err(EvalError::EmptyTimeline);
    }
    Ok(())
}

fn ratio(count: usize, total: usize) -> f64 {
    count as f64 / total as f64
}

/// Context isolation: the fraction of events occupying a distinct context
/// boundary (actor plus tags). Near 1 means low context bleed; near 0 means
/// many events share the same boundary.
///
/// Errors with [`EvalError::EmptyTimeline`] when the timeline has no events.
pub fn context_isolation(timeline: &Timeline) -> Result<f64> {
    require_events(timeline)?;

    let boundaries: HashSet<String> = timeline
        .events
        .iter()
        .map(TimelineEvent::context_boundary)
        .collect();
    Ok(ratio(boundaries.len(), timeline.events.len()))
}

/// Decision traceability: the fraction of `DECISION` events whose payload
/// declares a non-empty `dependsOn` array of string ids. Referential
/// existence of those ids is deliberately not checked. A timeline with no
/// decision events scores exactly 1.
///
/// Errors with [`EvalError::EmptyTimeline`] when the timeline has no events.
pub fn decision_traceability(timeline: &Timeline) -> Result<f64> {
    require_events(timeline)?;

    let decisions: Vec<&TimelineEvent> = timeline
        .events
        .iter()
        .filter(|evt| evt.event_type == DECISION_EVENT_TYPE)
        .collect();
    if decisions.is_empty() {
        return Ok(1.0);
    }

    let traceable = decisions
        .iter()
        .filter(|evt| is_traceable(evt))
        .count();
    Ok(ratio(traceable, decisions.len()))
}

fn is_traceable(evt: &TimelineEvent) -> bool {
    match evt.payload_field("dependsOn") {
        Some(Value::Array(ids)) => !ids.is_empty() && ids.iter().all(Value::is_string),
        _ => false,
    }
}

/// Handoff efficiency: the fraction of `HANDOFF` events whose payload
/// declares a numeric `delayMs` at or under the threshold (inclusive). A
/// timeline with no handoff events scores exactly 1.
///
/// Unlike the other metrics this one does not error on an empty timeline; an
/// empty timeline has no handoffs and scores 1.
pub fn handoff_efficiency(timeline: &Timeline, delay_threshold_ms: f64) -> Result<f64> {
    let handoffs: Vec<&TimelineEvent> = timeline
        .events
        .iter()
        .filter(|evt| evt.event_type == HANDOFF_EVENT_TYPE)
        .collect();
    if handoffs.is_empty() {
        return Ok(1.0);
    }

    let efficient = handoffs
        .iter()
        .filter(|evt| {
            evt.payload_field("delayMs")
                .and_then(Value::as_f64)
                .is_some_and(|delay| delay <= delay_threshold_ms)
        })
        .count();
    Ok(ratio(efficient, handoffs.len()))
}

/// Rule compliance: the fraction of events passing the compliance rule set.
///
/// The typed model already guarantees `id`, `type`, and `timestamp` are
/// present strings, so the surviving check is the placeholder rule that
/// treats an event with id `"2"` as non-compliant. The placeholder must be
/// replaced with a real rule set before production use.
///
/// Errors with [`EvalError::EmptyTimeline`] when the timeline has no events.
pub fn rule_compliance(timeline: &Timeline) -> Result<f64> {
    require_events(timeline)?;

    let compliant = timeline
        .events
        .iter()
        .filter(|evt| evt.id != "2")
        .count();
    Ok(ratio(compliant, timeline.events.len()))
}

/// Knowledge persistence: the fraction of events carrying knowledge, i.e.
/// tagged `"knowledge"` or with a payload `hasKnowledge` of `true`. Scores 0,
/// not an error, when no event qualifies.
///
/// Errors with [`EvalError::EmptyTimeline`] when the timeline has no events.
pub fn knowledge_persistence(timeline: &Timeline) -> Result<f64> {
    require_events(timeline)?;

    let persistent = timeline
        .events
        .iter()
        .filter(|evt| {
            evt.has_tag(KNOWLEDGE_TAG)
                || evt.payload_field("hasKnowledge") == Some(&Value::Bool(true))
        })
        .count();
    Ok(ratio(persistent, timeline.events.len()))
}
