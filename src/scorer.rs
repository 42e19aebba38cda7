//! Scoring surface over untrusted input
//!
//! [`TimelineScorer`] is the single validation gate: every scoring call
//! validates the raw input once through its [`TimelineValidator`] and then
//! delegates to the pure metric functions in [`crate::metrics`]. The scorer
//! holds no mutable state; calls are independent and safe to issue
//! concurrently.

use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::metrics::{self, DEFAULT_HANDOFF_DELAY_MS};
use crate::validation::TimelineValidator;

/// Scores untrusted timeline input against the five quality metrics
pub struct TimelineScorer {
    validator: TimelineValidator,
}

impl Default for TimelineScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineScorer {
    /// Create a scorer using the bundled timeline schema
    pub fn new() -> Self {
        Self {
            validator: TimelineValidator::new(),
        }
    }

    /// Create a scorer with an explicitly configured validator
    pub fn with_validator(validator: TimelineValidator) -> Self {
        Self { validator }
    }

    /// The validator guarding this scorer
    pub fn validator(&self) -> &TimelineValidator {
        &self.validator
    }

    /// Score context isolation for untrusted input
    pub fn context_isolation(&self, input: &Value) -> Result<f64> {
        let timeline = self.validator.validate(input)?;
        let score = metrics::context_isolation(&timeline)?;
        debug!(metric = "context_isolation", score, "scored timeline");
        Ok(score)
    }

    /// Score decision traceability for untrusted input
    pub fn decision_traceability(&self, input: &Value) -> Result<f64> {
        let timeline = self.validator.validate(input)?;
        let score = metrics::decision_traceability(&timeline)?;
        debug!(metric = "decision_traceability", score, "scored timeline");
        Ok(score)
    }

    /// Score handoff efficiency with the default delay threshold
    /// ([`DEFAULT_HANDOFF_DELAY_MS`])
    pub fn handoff_efficiency(&self, input: &Value) -> Result<f64> {
        self.handoff_efficiency_with_threshold(input, DEFAULT_HANDOFF_DELAY_MS)
    }

    /// Score handoff efficiency with a caller-supplied delay threshold in
    /// milliseconds (inclusive)
    pub fn handoff_efficiency_with_threshold(
        &self,
        input: &Value,
        delay_threshold_ms: f64,
    ) -> Result<f64> {
        let timeline = self.validator.validate(input)?;
        let score = metrics::handoff_efficiency(&timeline, delay_threshold_ms)?;
        debug!(
            metric = "handoff_efficiency",
            score, delay_threshold_ms, "scored timeline"
        );
        Ok(score)
    }

    /// Score rule compliance for untrusted input
    pub fn rule_compliance(&self, input: &Value) -> Result<f64> {
        let timeline = self.validator.validate(input)?;
        let score = metrics::rule_compliance(&timeline)?;
        debug!(metric = "rule_compliance", score, "scored timeline");
        Ok(score)
    }

    /// Score knowledge persistence for untrusted input
    pub fn knowledge_persistence(&self, input: &Value) -> Result<f64> {
        let timeline = self.validator.validate(input)?;
        let score = metrics::knowledge_persistence(&timeline)?;
        debug!(metric = "knowledge_persistence", score, "scored timeline");
        Ok(score)
    }
}
