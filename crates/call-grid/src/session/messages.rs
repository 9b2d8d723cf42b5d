//! Message types for the session actor.
//!
//! Handles talk to the actor over a bounded `tokio::sync::mpsc` mailbox.
//! Replies travel back on `tokio::sync::oneshot` channels.

use crate::errors::CallGridError;
use crate::participant::{CallCamera, CallMicrophone, CallState, Participant};

use common::types::ParticipantId;
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

/// An event reported by the call transport.
///
/// Participant payloads are already converted; see
/// `Participant::from(&TransportParticipant)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum TransportEvent {
    /// A remote participant joined.
    Joined(Participant),
    /// A remote participant left.
    Left(ParticipantId),
    /// Any participant's attributes changed, local included.
    Updated(Participant),
    /// The active speaker changed or was cleared.
    ActiveSpeakerChanged(Option<Participant>),
    /// The call lifecycle moved.
    CallStateChanged(CallState),
    /// Local camera or microphone settings changed.
    InputsChanged {
        camera: CallCamera,
        microphone: CallMicrophone,
    },
}

impl TransportEvent {
    /// Returns the event kind as a string for logs and metric labels.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            TransportEvent::Joined(_) => "joined",
            TransportEvent::Left(_) => "left",
            TransportEvent::Updated(_) => "updated",
            TransportEvent::ActiveSpeakerChanged(_) => "active_speaker_changed",
            TransportEvent::CallStateChanged(_) => "call_state_changed",
            TransportEvent::InputsChanged { .. } => "inputs_changed",
        }
    }

    /// Whether applying this event changes the participant snapshot.
    #[must_use]
    pub const fn affects_participants(&self) -> bool {
        matches!(
            self,
            TransportEvent::Joined(_)
                | TransportEvent::Left(_)
                | TransportEvent::Updated(_)
                | TransportEvent::ActiveSpeakerChanged(_)
        )
    }
}

/// A user action forwarded to the call transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportCommand {
    ToggleCamera,
    ToggleMicrophone,
    FlipCamera,
    SetUsername(Option<String>),
    Join { url: String },
    Leave,
}

impl TransportCommand {
    /// Returns the command kind as a string for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            TransportCommand::ToggleCamera => "toggle_camera",
            TransportCommand::ToggleMicrophone => "toggle_microphone",
            TransportCommand::FlipCamera => "flip_camera",
            TransportCommand::SetUsername(_) => "set_username",
            TransportCommand::Join { .. } => "join",
            TransportCommand::Leave => "leave",
        }
    }
}

/// Messages sent to `CallSession`.
#[derive(Debug)]
pub enum SessionMessage {
    /// Apply a transport event.
    Apply {
        event: TransportEvent,
        /// Carries back any protocol violation.
        respond_to: oneshot::Sender<Result<(), CallGridError>>,
    },

    /// Forward a user action to the transport.
    Command {
        command: TransportCommand,
        respond_to: oneshot::Sender<Result<(), CallGridError>>,
    },

    /// Get current session status.
    GetStatus {
        respond_to: oneshot::Sender<SessionStatus>,
    },
}

/// Point-in-time session status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStatus {
    pub call_state: CallState,
    /// Remote participants in the call.
    pub remote_participants: usize,
    /// Remote participants on screen.
    pub visible_participants: usize,
    /// Messages handled since the session started.
    pub messages_processed: u64,
    pub peak_mailbox_depth: usize,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::participant::{MuteState, ParticipantAttributes};

    #[test]
    fn test_event_kinds() {
        let participant = Participant::remote(ParticipantId::new(), ParticipantAttributes::default());

        assert_eq!(TransportEvent::Joined(participant.clone()).kind(), "joined");
        assert_eq!(TransportEvent::Left(participant.id()).kind(), "left");
        assert_eq!(
            TransportEvent::ActiveSpeakerChanged(None).kind(),
            "active_speaker_changed"
        );
        assert_eq!(
            TransportEvent::CallStateChanged(CallState::Joined).kind(),
            "call_state_changed"
        );
    }

    #[test]
    fn test_affects_participants() {
        assert!(TransportEvent::ActiveSpeakerChanged(None).affects_participants());
        assert!(!TransportEvent::CallStateChanged(CallState::Left).affects_participants());
        assert!(!TransportEvent::InputsChanged {
            camera: CallCamera::default(),
            microphone: CallMicrophone::default(),
        }
        .affects_participants());
    }

    #[test]
    fn test_event_json_shape() {
        let event = TransportEvent::InputsChanged {
            camera: CallCamera::default(),
            microphone: CallMicrophone::new(MuteState::Unmuted),
        };

        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "inputs_changed");
        assert_eq!(json["data"]["microphone"]["audio"], "unmuted");
        assert_eq!(json["data"]["camera"]["mode"], "user");

        let decoded: TransportEvent = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn test_call_state_event_from_json() {
        let event: TransportEvent =
            serde_json::from_str(r#"{"type":"call_state_changed","data":"left"}"#).unwrap();

        assert_eq!(event, TransportEvent::CallStateChanged(CallState::Left));
    }

    #[test]
    fn test_command_kinds() {
        assert_eq!(TransportCommand::FlipCamera.kind(), "flip_camera");
        assert_eq!(
            TransportCommand::Join {
                url: "https://calls.example.com/standup".to_string()
            }
            .kind(),
            "join"
        );
    }
}
