//! Fake call transport.
//!
//! `RecordingTransport` accepts every command and remembers it, so tests can
//! assert on what a session asked the transport to do.

use call_grid::errors::CallGridError;
use call_grid::participant::FacingMode;
use call_grid::session::CallTransport;
use std::sync::{Arc, Mutex};

/// A command received by `RecordingTransport`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCommand {
    SetCameraEnabled(bool),
    SetMicrophoneEnabled(bool),
    SetCameraFacingMode(FacingMode),
    SetUsername(Option<String>),
    Join(String),
    Leave,
}

/// `CallTransport` that records commands.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    commands: Mutex<Vec<RecordedCommand>>,
    fail_with: Mutex<Option<String>>,
}

impl RecordingTransport {
    /// Create a shared transport that accepts every command.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Create a shared transport that rejects every command.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Arc<Self> {
        let transport = Self::default();
        *transport.fail_with.lock().unwrap() = Some(reason.into());
        Arc::new(transport)
    }

    /// All commands received so far, oldest first.
    #[must_use]
    pub fn commands(&self) -> Vec<RecordedCommand> {
        self.commands.lock().unwrap().clone()
    }

    /// Forget recorded commands.
    pub fn clear(&self) {
        self.commands.lock().unwrap().clear();
    }

    fn record(&self, command: RecordedCommand) -> Result<(), CallGridError> {
        self.commands.lock().unwrap().push(command);
        match self.fail_with.lock().unwrap().as_ref() {
            Some(reason) => Err(CallGridError::Transport(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl CallTransport for RecordingTransport {
    async fn set_camera_enabled(&self, enabled: bool) -> Result<(), CallGridError> {
        self.record(RecordedCommand::SetCameraEnabled(enabled))
    }

    async fn set_microphone_enabled(&self, enabled: bool) -> Result<(), CallGridError> {
        self.record(RecordedCommand::SetMicrophoneEnabled(enabled))
    }

    async fn set_camera_facing_mode(&self, mode: FacingMode) -> Result<(), CallGridError> {
        self.record(RecordedCommand::SetCameraFacingMode(mode))
    }

    async fn set_username(&self, username: Option<&str>) -> Result<(), CallGridError> {
        self.record(RecordedCommand::SetUsername(username.map(str::to_string)))
    }

    async fn join(&self, url: &str) -> Result<(), CallGridError> {
        self.record(RecordedCommand::Join(url.to_string()))
    }

    async fn leave(&self) -> Result<(), CallGridError> {
        self.record(RecordedCommand::Leave)
    }
}
