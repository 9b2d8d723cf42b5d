//! Grid geometry lookup.
//!
//! Maps `(device class, orientation, visible count)` to a `(rows, columns)`
//! grid. The shapes are hand-picked for visual balance, so this is a fixed
//! table rather than a computed optimum:
//!
//! | Count | Portrait | Landscape | Devices |
//! |-------|----------|-----------|---------|
//! | 0     | 0x0      | 0x0       | all     |
//! | 1     | 1x1      | 1x1       | all     |
//! | 2-3   | Nx1      | 1xN       | all     |
//! | 4     | 2x2      | 2x2       | all     |
//! | 5-6   | 3x2      | 2x3       | all     |
//! | 7-8   | 4x2      | 2x4       | pad     |
//! | 9     | 3x3      | 3x3       | pad     |
//! | 10-12 | 4x3      | 3x4       | pad     |
//!
//! Counts above the device capacity have no shape and are rejected.

use crate::errors::CallGridError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum visible remote participants on a phone-class device.
pub const PHONE_VISIBLE_LIMIT: usize = 6;

/// Maximum visible remote participants on a tablet-class device.
pub const PAD_VISIBLE_LIMIT: usize = 12;

/// Coarse device category that determines capacity and grid table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    /// Phone-class device, 2x3 grid of up to 6 participants.
    Phone,
    /// Tablet-class device, 3x4 grid of up to 12 participants.
    Pad,
}

impl DeviceClass {
    /// The maximum number of remote participants shown at once.
    #[must_use]
    pub const fn visible_participant_limit(&self) -> usize {
        match self {
            DeviceClass::Phone => PHONE_VISIBLE_LIMIT,
            DeviceClass::Pad => PAD_VISIBLE_LIMIT,
        }
    }

    /// Returns the device class as a string for logs and labels.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Phone => "phone",
            DeviceClass::Pad => "pad",
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "phone" => Ok(DeviceClass::Phone),
            "pad" | "tablet" => Ok(DeviceClass::Pad),
            other => Err(format!("unknown device class: {other}")),
        }
    }
}

/// Visual orientation of the call window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Orientation for a window of the given size. Square windows are landscape.
    #[must_use]
    pub fn from_size(width: f64, height: f64) -> Self {
        if width < height {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    /// Aspect ratio (width / height) for uncropped local video.
    ///
    /// Assumes 720p capture filling the window.
    #[must_use]
    pub fn local_video_aspect_ratio(&self) -> f64 {
        match self {
            Orientation::Portrait => 720.0 / 1280.0,
            Orientation::Landscape => 1280.0 / 720.0,
        }
    }

    /// Returns the orientation as a string for logs and labels.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rows and columns of the participant grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridGeometry {
    pub rows: usize,
    pub columns: usize,
}

impl GridGeometry {
    /// Make a geometry value directly.
    #[must_use]
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Resolve the grid shape for a visible participant count.
    ///
    /// # Errors
    ///
    /// Returns `CallGridError::UnsupportedGeometry` when `count` exceeds the
    /// device capacity. There is no safe fallback shape.
    pub fn resolve(
        device: DeviceClass,
        orientation: Orientation,
        count: usize,
    ) -> Result<Self, CallGridError> {
        use DeviceClass::Pad;
        use Orientation::{Landscape, Portrait};

        let (rows, columns) = match (device, orientation, count) {
            (_, _, 0) => (0, 0),
            (_, _, 1) => (1, 1),
            (_, Portrait, 2..=3) => (count, 1),
            (_, Landscape, 2..=3) => (1, count),
            (_, _, 4) => (2, 2),
            (_, Portrait, 5..=6) => (3, 2),
            (_, Landscape, 5..=6) => (2, 3),
            (Pad, Portrait, 7..=8) => (4, 2),
            (Pad, Landscape, 7..=8) => (2, 4),
            (Pad, _, 9) => (3, 3),
            (Pad, Portrait, 10..=12) => (4, 3),
            (Pad, Landscape, 10..=12) => (3, 4),
            _ => {
                return Err(CallGridError::UnsupportedGeometry {
                    device,
                    orientation,
                    count,
                })
            }
        };

        Ok(Self { rows, columns })
    }

    /// Number of cells in the grid.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows * self.columns
    }
}
