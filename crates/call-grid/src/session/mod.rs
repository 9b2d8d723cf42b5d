//! Call session actor.
//!
//! The session is the composition root for one call:
//!
//! ```text
//! CallTransport events ──► CallSessionHandle::apply ──► mailbox ──► CallSession
//!                                                                     │
//!                                             ParticipantRegistry ◄───┤
//!                                                                     ▼
//!                      watch cells (url, call_state, camera, microphone, participants)
//! ```
//!
//! User actions travel the same mailbox and leave through `CallTransport`.

mod actor;
mod cells;
pub mod messages;
pub mod metrics;
mod transport;

pub use actor::{CallSession, CallSessionHandle};
pub use cells::SessionWatch;
pub use messages::{SessionStatus, TransportCommand, TransportEvent};
pub use self::metrics::{MailboxLevel, MailboxMonitor};
pub use transport::CallTransport;
