//! Timeline evaluation library
//!
//! Scores a recorded sequence of timestamped events (a timeline) against five
//! independent quality metrics used to evaluate agent or session behavior:
//! context isolation, decision traceability, handoff efficiency, rule
//! compliance, and knowledge persistence. Input is untrusted structured data
//! validated against a fixed schema before any metric touches it.
//!
//! ## Features
//!
//! - **Schema Validation**: Structural validation of raw `serde_json::Value`
//!   input against a JSON-Schema-like document, reporting every detected
//!   mismatch with its instance path
//! - **Typed Model**: Successful validation yields a typed [`Timeline`];
//!   metric functions only accept validated timelines
//! - **Five Metrics**: Pure, deterministic scoring functions, each returning
//!   a value in [0, 1]
//! - **Explicit Validators**: No process-wide schema state; differently
//!   configured [`TimelineValidator`] instances can coexist
//!
//! ## Architecture
//!
//! 1. **Validation** (`validation`): [`TimelineValidator`] checks untrusted
//!    input against the schema contract and produces a typed [`Timeline`].
//!
//! 2. **Metrics** (`metrics`): Pure functions over `&Timeline`, one per
//!    metric, each a single filter-then-ratio pass.
//!
//! 3. **Scorer** (`scorer`): [`TimelineScorer`] ties the two together as a
//!    single validation gate over raw input.
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use timeline_eval::TimelineScorer;
//!
//! let scorer = TimelineScorer::new();
//! let input = json!({
//!     "events": [
//!         { "id": "1", "type": "A", "timestamp": "2025-06-09T12:00:00Z", "actor": "a" },
//!         { "id": "3", "type": "B", "timestamp": "2025-06-09T12:00:00Z", "actor": "b" }
//!     ],
//!     "meta": { "sessionId": "s", "createdAt": "2025-06-09T12:00:00Z" }
//! });
//!
//! let isolation = scorer.context_isolation(&input).unwrap();
//! assert_eq!(isolation, 1.0);
//! ```

pub mod error;
pub mod metrics;
pub mod scorer;
pub mod timeline;
pub mod validation;

pub use error::{EvalError, Result};
pub use metrics::{DECISION_EVENT_TYPE, DEFAULT_HANDOFF_DELAY_MS, HANDOFF_EVENT_TYPE};
pub use scorer::TimelineScorer;
pub use timeline::{Timeline, TimelineEvent, TimelineMeta};
pub use validation::TimelineValidator;
