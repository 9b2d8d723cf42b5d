//! Call Grid error types.
//!
//! Error types map to stable numeric codes so a bridging layer can report
//! them without matching on variants. Participant names never appear in
//! error messages.

use crate::config::ConfigError;
use crate::geometry::{DeviceClass, Orientation};
use thiserror::Error;

/// Call Grid error type.
///
/// Maps to error codes:
/// - `ProtocolViolation`: `PROTOCOL_VIOLATION` (2)
/// - `UnsupportedGeometry`: `UNSUPPORTED_GEOMETRY` (3)
/// - `Transport`: `TRANSPORT_ERROR` (5)
/// - `Config`, `SessionClosed`: `INTERNAL_ERROR` (6)
#[derive(Debug, Error)]
pub enum CallGridError {
    /// The call transport broke its event contract. The event was skipped.
    #[error("Protocol violation: {0}")]
    ProtocolViolation(ProtocolViolation),

    /// No grid shape exists for this device, orientation and count.
    #[error("Unsupported grid geometry: {count} participants on {device} in {orientation}")]
    UnsupportedGeometry {
        device: DeviceClass,
        orientation: Orientation,
        count: usize,
    },

    /// The call transport rejected a command.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The session actor is gone (mailbox or response channel closed).
    #[error("Session closed: {0}")]
    SessionClosed(String),
}

/// Contract violations by the call transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProtocolViolation {
    /// A join event named the local participant.
    #[error("join event for the local participant")]
    LocalJoined,

    /// A leave event named the local participant.
    #[error("leave event for the local participant")]
    LocalLeft,
}

impl ProtocolViolation {
    /// Returns the violation kind as a string for metric labels.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProtocolViolation::LocalJoined => "local_joined",
            ProtocolViolation::LocalLeft => "local_left",
        }
    }
}

impl CallGridError {
    /// Returns the numeric error code for this error.
    #[must_use]
    pub fn error_code(&self) -> i32 {
        match self {
            CallGridError::ProtocolViolation(_) => 2, // PROTOCOL_VIOLATION
            CallGridError::UnsupportedGeometry { .. } => 3, // UNSUPPORTED_GEOMETRY
            CallGridError::Transport(_) => 5,               // TRANSPORT_ERROR
            CallGridError::Config(_) | CallGridError::SessionClosed(_) => 6, // INTERNAL_ERROR
        }
    }

    /// Whether this error reports a broken transport contract.
    #[must_use]
    pub fn is_protocol_violation(&self) -> bool {
        matches!(self, CallGridError::ProtocolViolation(_))
    }
}

impl From<ProtocolViolation> for CallGridError {
    fn from(err: ProtocolViolation) -> Self {
        CallGridError::ProtocolViolation(err)
    }
}

impl From<ConfigError> for CallGridError {
    fn from(err: ConfigError) -> Self {
        CallGridError::Config(err.to_string())
    }
}
