//! `CallSession` - per-call actor that owns the participant registry.
//!
//! Each `CallSession`:
//! - Owns one `ParticipantRegistry` and applies transport events to it
//!   strictly in arrival order
//! - Publishes every property through its own watch cell
//! - Forwards user actions to the `CallTransport`
//!
//! # Rejoining
//!
//! When the call reaches `Left` the registry is recreated from the current
//! local participant, so speaker and join history never leak into the next
//! call.

use crate::config::Config;
use crate::errors::CallGridError;
use crate::observability::metrics::{
    record_build_latency, record_event_processed, record_protocol_violation,
    set_remote_participants, set_visible_participants,
};
use crate::participant::{CallCamera, CallMicrophone, CallState, Participant};
use crate::registry::ParticipantRegistry;
use crate::snapshot::ParticipantSet;

use super::cells::{SessionCells, SessionWatch};
use super::messages::{SessionMessage, SessionStatus, TransportCommand, TransportEvent};
use super::metrics::MailboxMonitor;
use super::transport::CallTransport;

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

/// Handle to a `CallSession`.
#[derive(Debug, Clone)]
pub struct CallSessionHandle {
    sender: mpsc::Sender<SessionMessage>,
    cancel_token: CancellationToken,
    watch: SessionWatch,
    mailbox: Arc<MailboxMonitor>,
}

impl CallSessionHandle {
    /// Apply an event reported by the call transport.
    ///
    /// # Errors
    ///
    /// Returns `CallGridError::ProtocolViolation` if the event broke the
    /// transport contract (nothing was published), or
    /// `CallGridError::SessionClosed` if the session is gone.
    pub async fn apply(&self, event: TransportEvent) -> Result<(), CallGridError> {
        let (tx, rx) = oneshot::channel();
        self.send(SessionMessage::Apply {
            event,
            respond_to: tx,
        })
        .await?;

        rx.await
            .map_err(|e| CallGridError::SessionClosed(format!("response receive failed: {e}")))?
    }

    /// Turn the camera on if it is muted, off otherwise.
    pub async fn toggle_camera(&self) -> Result<(), CallGridError> {
        self.command(TransportCommand::ToggleCamera).await
    }

    /// Turn the microphone on if it is muted, off otherwise.
    pub async fn toggle_microphone(&self) -> Result<(), CallGridError> {
        self.command(TransportCommand::ToggleMicrophone).await
    }

    /// Switch between the user-facing and environment-facing camera.
    pub async fn flip_camera(&self) -> Result<(), CallGridError> {
        self.command(TransportCommand::FlipCamera).await
    }

    /// Set the local username; `None` clears it.
    pub async fn set_username(&self, username: Option<String>) -> Result<(), CallGridError> {
        self.command(TransportCommand::SetUsername(username)).await
    }

    /// Join the call at `url`.
    ///
    /// The url and a `Joining` state are published before the transport
    /// confirms, so a UI can move to its waiting screen immediately.
    pub async fn join(&self, url: impl Into<String>) -> Result<(), CallGridError> {
        self.command(TransportCommand::Join { url: url.into() })
            .await
    }

    /// Leave the current call.
    pub async fn leave(&self) -> Result<(), CallGridError> {
        self.command(TransportCommand::Leave).await
    }

    /// Get current session status.
    pub async fn status(&self) -> Result<SessionStatus, CallGridError> {
        let (tx, rx) = oneshot::channel();
        self.send(SessionMessage::GetStatus { respond_to: tx })
            .await?;

        rx.await
            .map_err(|e| CallGridError::SessionClosed(format!("response receive failed: {e}")))
    }

    /// Subscribe to the call url.
    #[must_use]
    pub fn url(&self) -> watch::Receiver<Option<String>> {
        self.watch.url()
    }

    /// Subscribe to the call state.
    #[must_use]
    pub fn call_state(&self) -> watch::Receiver<CallState> {
        self.watch.call_state()
    }

    /// Subscribe to the local camera state.
    #[must_use]
    pub fn camera(&self) -> watch::Receiver<CallCamera> {
        self.watch.camera()
    }

    /// Subscribe to the local microphone state.
    #[must_use]
    pub fn microphone(&self) -> watch::Receiver<CallMicrophone> {
        self.watch.microphone()
    }

    /// Subscribe to participant snapshots.
    ///
    /// Snapshots are raw `build()` output; render through a
    /// `GridLayoutModel` to keep tiles in place.
    #[must_use]
    pub fn participants(&self) -> watch::Receiver<ParticipantSet> {
        self.watch.participants()
    }

    /// Stop the session.
    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }

    /// Check if the session is cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    async fn command(&self, command: TransportCommand) -> Result<(), CallGridError> {
        let (tx, rx) = oneshot::channel();
        self.send(SessionMessage::Command {
            command,
            respond_to: tx,
        })
        .await?;

        rx.await
            .map_err(|e| CallGridError::SessionClosed(format!("response receive failed: {e}")))?
    }

    async fn send(&self, message: SessionMessage) -> Result<(), CallGridError> {
        self.mailbox.record_enqueue();
        self.sender.send(message).await.map_err(|e| {
            self.mailbox.record_drop();
            CallGridError::SessionClosed(format!("channel send failed: {e}"))
        })
    }
}

/// The `CallSession` actor.
pub struct CallSession {
    /// Message receiver.
    receiver: mpsc::Receiver<SessionMessage>,
    /// Cancellation token.
    cancel_token: CancellationToken,
    /// Capacity used whenever the registry is recreated.
    visible_limit: usize,
    /// Canonical participant state for the current call.
    registry: ParticipantRegistry,
    /// Write side of the observable cells.
    cells: SessionCells,
    /// Where user actions go.
    transport: Arc<dyn CallTransport>,
    /// Mailbox monitor shared with handles.
    mailbox: Arc<MailboxMonitor>,
}

impl CallSession {
    /// Spawn a new session actor.
    ///
    /// Returns a handle and the task join handle.
    ///
    /// # Arguments
    ///
    /// * `config` - Device class, visible limit and mailbox size
    /// * `local` - The local participant
    /// * `transport` - Receives camera, microphone, username and join/leave commands
    pub fn spawn(
        config: &Config,
        local: Participant,
        transport: Arc<dyn CallTransport>,
    ) -> (CallSessionHandle, JoinHandle<()>) {
        let (sender, receiver) = mpsc::channel(config.mailbox_buffer.max(1));
        let cancel_token = CancellationToken::new();
        let mailbox = Arc::new(MailboxMonitor::new());

        let registry = ParticipantRegistry::new(local, config.visible_limit);
        let (cells, watch) = SessionCells::new(registry.build());

        let actor = Self {
            receiver,
            cancel_token: cancel_token.clone(),
            visible_limit: config.visible_limit,
            registry,
            cells,
            transport,
            mailbox: Arc::clone(&mailbox),
        };

        let task_handle = tokio::spawn(actor.run());

        let handle = CallSessionHandle {
            sender,
            cancel_token,
            watch,
            mailbox,
        };

        (handle, task_handle)
    }

    /// Run the actor message loop.
    #[instrument(skip_all, name = "cg.session")]
    async fn run(mut self) {
        info!(
            target: "cg.session",
            visible_limit = self.visible_limit,
            "CallSession started"
        );

        loop {
            tokio::select! {
                () = self.cancel_token.cancelled() => {
                    info!(
                        target: "cg.session",
                        "CallSession received cancellation signal"
                    );
                    break;
                }

                msg = self.receiver.recv() => {
                    match msg {
                        Some(message) => {
                            self.handle_message(message).await;
                            self.mailbox.record_dequeue();
                        }
                        None => {
                            info!(
                                target: "cg.session",
                                "CallSession channel closed, exiting"
                            );
                            break;
                        }
                    }
                }
            }
        }

        info!(
            target: "cg.session",
            remote_participants = self.registry.remote().len(),
            messages_processed = self.mailbox.messages_processed(),
            "CallSession stopped"
        );
    }

    /// Handle a single message.
    async fn handle_message(&mut self, message: SessionMessage) {
        match message {
            SessionMessage::Apply { event, respond_to } => {
                let result = self.handle_event(event);
                let _ = respond_to.send(result);
            }

            SessionMessage::Command {
                command,
                respond_to,
            } => {
                let result = self.handle_command(command).await;
                let _ = respond_to.send(result);
            }

            SessionMessage::GetStatus { respond_to } => {
                let _ = respond_to.send(self.status());
            }
        }
    }

    fn status(&self) -> SessionStatus {
        let participants = self.cells.participants.borrow();
        SessionStatus {
            call_state: *self.cells.call_state.borrow(),
            remote_participants: participants.remote().len(),
            visible_participants: participants.visible().len(),
            messages_processed: self.mailbox.messages_processed(),
            peak_mailbox_depth: self.mailbox.peak_depth(),
        }
    }

    /// Apply one transport event and publish what changed.
    fn handle_event(&mut self, event: TransportEvent) -> Result<(), CallGridError> {
        let kind = event.kind();
        record_event_processed(kind);
        let affects_participants = event.affects_participants();

        let result = match event {
            TransportEvent::Joined(participant) => self.registry.handle_joined(participant),
            TransportEvent::Left(id) => self.registry.handle_left(id),
            TransportEvent::Updated(participant) => {
                self.registry.handle_updated(participant);
                Ok(())
            }
            TransportEvent::ActiveSpeakerChanged(speaker) => {
                self.registry.set_active_speaker(speaker);
                Ok(())
            }
            TransportEvent::CallStateChanged(state) => {
                self.handle_call_state(state);
                Ok(())
            }
            TransportEvent::InputsChanged { camera, microphone } => {
                SessionCells::publish(&self.cells.camera, camera);
                SessionCells::publish(&self.cells.microphone, microphone);
                Ok(())
            }
        };

        match result {
            Ok(()) => {
                if affects_participants {
                    self.publish_participants();
                }
                Ok(())
            }
            Err(CallGridError::ProtocolViolation(violation)) => {
                record_protocol_violation(violation.as_str());
                Err(violation.into())
            }
            Err(e) => Err(e),
        }
    }

    fn handle_call_state(&mut self, state: CallState) {
        debug!(
            target: "cg.session",
            call_state = state.as_str(),
            "Call state changed"
        );
        SessionCells::publish(&self.cells.call_state, state);

        if state == CallState::Left {
            self.registry =
                ParticipantRegistry::new(self.registry.local().clone(), self.visible_limit);
            self.publish_participants();
        }
    }

    /// Build a fresh snapshot and publish it.
    fn publish_participants(&mut self) {
        let started = Instant::now();
        let participants = self.registry.build();
        record_build_latency(started.elapsed());

        set_remote_participants(participants.remote().len());
        set_visible_participants(participants.visible().len());

        SessionCells::publish(&self.cells.participants, participants);
    }

    async fn handle_command(&mut self, command: TransportCommand) -> Result<(), CallGridError> {
        let kind = command.kind();
        debug!(target: "cg.session", command = kind, "Forwarding command to transport");

        let result = match command {
            TransportCommand::ToggleCamera => {
                let target = self.cells.camera.borrow().toggled();
                self.transport.set_camera_enabled(!target.is_muted()).await
            }
            TransportCommand::ToggleMicrophone => {
                let target = self.cells.microphone.borrow().toggled();
                self.transport
                    .set_microphone_enabled(!target.is_muted())
                    .await
            }
            TransportCommand::FlipCamera => {
                let target = self.cells.camera.borrow().flipped();
                self.transport.set_camera_facing_mode(target.mode).await
            }
            TransportCommand::SetUsername(username) => {
                self.transport.set_username(username.as_deref()).await
            }
            TransportCommand::Join { url } => self.join(url).await,
            TransportCommand::Leave => self.transport.leave().await,
        };

        if let Err(e) = &result {
            warn!(
                target: "cg.session",
                command = kind,
                error = %e,
                "Transport command failed"
            );
        }
        result
    }

    async fn join(&mut self, url: String) -> Result<(), CallGridError> {
        let previous_url = self.cells.url.send_replace(Some(url.clone()));
        let previous_state = self.cells.call_state.send_replace(CallState::Joining);

        let result = self.transport.join(&url).await;

        // Roll back unless the transport already moved the call along.
        if result.is_err() && *self.cells.call_state.borrow() == CallState::Joining {
            SessionCells::publish(&self.cells.url, previous_url);
            SessionCells::publish(&self.cells.call_state, previous_state);
        }
        result
    }
}
