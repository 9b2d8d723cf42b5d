//! Render-side grid model.
//!
//! `GridLayoutModel` holds the last participant set handed to rendering. Each
//! new snapshot from a session is stabilized against it, so tiles only move
//! when membership forces them to.

use crate::errors::CallGridError;
use crate::geometry::{DeviceClass, GridGeometry, Orientation};
use crate::snapshot::ParticipantSet;
use crate::stabilizer::stabilize;

use tracing::{debug, warn};

/// The participant grid as currently rendered.
#[derive(Debug, Clone)]
pub struct GridLayoutModel {
    device: DeviceClass,
    participants: ParticipantSet,
}

impl GridLayoutModel {
    #[must_use]
    pub fn new(device: DeviceClass, initial: ParticipantSet) -> Self {
        Self {
            device,
            participants: initial,
        }
    }

    #[must_use]
    pub fn device(&self) -> DeviceClass {
        self.device
    }

    /// The participants as currently rendered.
    #[must_use]
    pub fn participants(&self) -> &ParticipantSet {
        &self.participants
    }

    /// Stabilize `next` against the rendered set and make it current.
    pub fn apply(&mut self, next: &ParticipantSet) -> &ParticipantSet {
        self.participants = stabilize(&self.participants, next);

        debug!(
            target: "cg.layout",
            visible = self.participants.visible().len(),
            count = self.participants.count(),
            "Applied participant snapshot"
        );
        &self.participants
    }

    /// Grid shape for the rendered visible count.
    ///
    /// # Errors
    ///
    /// Returns `CallGridError::UnsupportedGeometry` if the rendered set holds
    /// more participants than the device can lay out.
    pub fn geometry(&self, orientation: Orientation) -> Result<GridGeometry, CallGridError> {
        let count = self.participants.visible().len();
        GridGeometry::resolve(self.device, orientation, count).inspect_err(|_| {
            warn!(
                target: "cg.layout",
                device = %self.device,
                orientation = %orientation,
                count,
                "No grid shape for visible count"
            );
        })
    }
}
