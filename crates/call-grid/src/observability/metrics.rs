//! Metrics definitions for the Call Grid engine.
//!
//! All metrics follow Prometheus naming conventions:
//! - `cg_` prefix for Call Grid
//! - `_total` suffix for counters
//! - `_seconds` suffix for duration histograms
//!
//! This crate only emits through the `metrics` facade. Without an installed
//! recorder every call is a no-op.

use metrics::{counter, gauge, histogram};
use std::time::Duration;

// ============================================================================
// Event Metrics (Counters)
// ============================================================================

/// Record a transport event applied by a session.
///
/// Metric: `cg_events_processed_total`
/// Labels: `event_type`
///
/// Cardinality: 6 (bounded by `TransportEvent` variants)
pub fn record_event_processed(event_type: &'static str) {
    counter!("cg_events_processed_total", "event_type" => event_type).increment(1);
}

/// Record a transport contract violation.
///
/// Metric: `cg_protocol_violations_total`
/// Labels: `kind` (`local_joined`, `local_left`)
pub fn record_protocol_violation(kind: &'static str) {
    counter!("cg_protocol_violations_total", "kind" => kind).increment(1);
}

// ============================================================================
// Participant Metrics (Gauges)
// ============================================================================

/// Set the number of remote participants in the call.
///
/// Metric: `cg_remote_participants`
pub fn set_remote_participants(count: usize) {
    // usize to f64 conversion is safe for realistic call sizes (< 2^53)
    #[allow(clippy::cast_precision_loss)]
    gauge!("cg_remote_participants").set(count as f64);
}

/// Set the number of remote participants on screen.
///
/// Metric: `cg_visible_participants`
pub fn set_visible_participants(count: usize) {
    #[allow(clippy::cast_precision_loss)]
    gauge!("cg_visible_participants").set(count as f64);
}

// ============================================================================
// Latency Metrics (Histograms)
// ============================================================================

/// Record how long one snapshot build took.
///
/// Metric: `cg_build_duration_seconds`
///
/// Builds run on every participant event, so this should stay in the
/// microsecond range even for large calls.
pub fn record_build_latency(duration: Duration) {
    histogram!("cg_build_duration_seconds").record(duration.as_secs_f64());
}

// ============================================================================
// Actor Mailbox Metrics (Gauges)
// ============================================================================

/// Set the session actor's mailbox depth.
///
/// Metric: `cg_session_mailbox_depth`
///
/// High values mean the session is falling behind the transport.
pub fn set_session_mailbox_depth(depth: usize) {
    #[allow(clippy::cast_precision_loss)]
    gauge!("cg_session_mailbox_depth").set(depth as f64);
}
