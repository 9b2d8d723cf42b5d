//! Observable session state.
//!
//! One `tokio::sync::watch` channel per property. Consumers subscribe to the
//! property they render and only wake when that property changes.

use crate::participant::{CallCamera, CallMicrophone, CallState};
use crate::snapshot::ParticipantSet;

use tokio::sync::watch;

/// Write side of the session's observable cells. Owned by the actor.
#[derive(Debug)]
pub(crate) struct SessionCells {
    pub(crate) url: watch::Sender<Option<String>>,
    pub(crate) call_state: watch::Sender<CallState>,
    pub(crate) camera: watch::Sender<CallCamera>,
    pub(crate) microphone: watch::Sender<CallMicrophone>,
    pub(crate) participants: watch::Sender<ParticipantSet>,
}

/// Read side of the session's observable cells. Held by handles.
///
/// Receivers observe the channel closing once the session actor exits.
#[derive(Debug, Clone)]
pub struct SessionWatch {
    url: watch::Receiver<Option<String>>,
    call_state: watch::Receiver<CallState>,
    camera: watch::Receiver<CallCamera>,
    microphone: watch::Receiver<CallMicrophone>,
    participants: watch::Receiver<ParticipantSet>,
}

impl SessionCells {
    /// Make the cells with their initial values.
    pub(crate) fn new(participants: ParticipantSet) -> (Self, SessionWatch) {
        let (url, url_rx) = watch::channel(None);
        let (call_state, call_state_rx) = watch::channel(CallState::default());
        let (camera, camera_rx) = watch::channel(CallCamera::default());
        let (microphone, microphone_rx) = watch::channel(CallMicrophone::default());
        let (participants, participants_rx) = watch::channel(participants);

        let cells = Self {
            url,
            call_state,
            camera,
            microphone,
            participants,
        };
        let watch = SessionWatch {
            url: url_rx,
            call_state: call_state_rx,
            camera: camera_rx,
            microphone: microphone_rx,
            participants: participants_rx,
        };
        (cells, watch)
    }

    /// Publish `value` to `cell`, notifying subscribers only on change.
    pub(crate) fn publish<T: PartialEq>(cell: &watch::Sender<T>, value: T) {
        cell.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        });
    }
}

impl SessionWatch {
    #[must_use]
    pub fn url(&self) -> watch::Receiver<Option<String>> {
        self.url.clone()
    }

    #[must_use]
    pub fn call_state(&self) -> watch::Receiver<CallState> {
        self.call_state.clone()
    }

    #[must_use]
    pub fn camera(&self) -> watch::Receiver<CallCamera> {
        self.camera.clone()
    }

    #[must_use]
    pub fn microphone(&self) -> watch::Receiver<CallMicrophone> {
        self.microphone.clone()
    }

    #[must_use]
    pub fn participants(&self) -> watch::Receiver<ParticipantSet> {
        self.participants.clone()
    }
}
