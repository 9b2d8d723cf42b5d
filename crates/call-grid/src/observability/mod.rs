//! Observability for the Call Grid engine.
//!
//! # Privacy by Default
//!
//! Participant usernames never reach logs or metric labels. Labels are
//! bounded by closed enums in this crate:
//! - `event_type`: 6 values (`TransportEvent` kinds)
//! - `kind`: 2 values (`ProtocolViolation` kinds)
//!
//! # Metrics
//!
//! | Metric | Type | Labels | Purpose |
//! |--------|------|--------|---------|
//! | `cg_events_processed_total` | Counter | `event_type` | Transport events applied by a session |
//! | `cg_protocol_violations_total` | Counter | `kind` | Transport contract breaches |
//! | `cg_remote_participants` | Gauge | none | Remote participants in the call |
//! | `cg_visible_participants` | Gauge | none | Remote participants on screen |
//! | `cg_build_duration_seconds` | Histogram | none | `ParticipantRegistry::build` latency |
//! | `cg_session_mailbox_depth` | Gauge | none | Session actor backpressure |

pub mod metrics;

pub use self::metrics::{
    record_build_latency, record_event_processed, record_protocol_violation,
    set_remote_participants, set_session_mailbox_depth, set_visible_participants,
};
