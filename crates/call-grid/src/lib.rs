//! Call Grid Library
//!
//! The participant visibility engine for multi-party calls. It turns a
//! serial stream of join/leave/update/active-speaker events into a
//! capacity-bounded, priority-ordered, position-stable set of on-screen
//! tiles, and maps the visible count to a grid shape.
//!
//! # Architecture
//!
//! ```text
//! transport events
//!   └── CallSession (one actor per call session)
//!       ├── ParticipantRegistry  -> build() -> ParticipantSet snapshot
//!       └── watch cells (url, call_state, camera, microphone, participants)
//!             └── GridLayoutModel (render side)
//!                 ├── stabilize(last rendered, next)
//!                 └── GridGeometry::resolve(device, orientation, visible count)
//! ```
//!
//! # Key Design Decisions
//!
//! - **Serial mutation**: registry mutation and `build()` happen on one task;
//!   there is no locking inside the registry.
//! - **Tiered priority**: active speaker, then recent speakers, then recent
//!   joiners. Video only reorders candidates within a tier.
//! - **Minimal re-placement**: continuing participants keep their slot when
//!   the visible set changes.
//!
//! # Modules
//!
//! - [`participant`] - Participant model and media state variants
//! - [`snapshot`] - Immutable `ParticipantSet` snapshots
//! - [`registry`] - Canonical participant state and priority ordering
//! - [`stabilizer`] - Slot-preserving merge of consecutive snapshots
//! - [`geometry`] - Grid shape lookup table
//! - [`layout`] - Render-side grid model
//! - [`session`] - Call session actor and observable cells
//! - [`config`] - Configuration from environment
//! - [`errors`] - Error types with stable error codes
//! - [`observability`] - Metrics definitions

pub mod config;
pub mod errors;
pub mod geometry;
pub mod layout;
pub mod observability;
pub mod participant;
pub mod registry;
pub mod session;
pub mod snapshot;
pub mod stabilizer;

pub use config::Config;
pub use errors::{CallGridError, ProtocolViolation};
pub use geometry::{DeviceClass, GridGeometry, Orientation};
pub use layout::GridLayoutModel;
pub use participant::{Participant, ParticipantAttributes};
pub use registry::ParticipantRegistry;
pub use session::{CallSession, CallSessionHandle, CallTransport, TransportEvent};
pub use snapshot::{ParticipantSet, VisibleSlots};
pub use stabilizer::stabilize;
