//! # Call Grid Test Utilities
//!
//! Shared fixtures for testing the Call Grid engine without a real call
//! transport.
//!
//! ## Modules
//!
//! - `fixtures` - Participant builders and snapshot helpers
//! - `assertions` - Visible set verification helpers
//! - `fake_transport` - `CallTransport` that records commands
//! - `logging` - Tracing subscriber for test output
//!
//! ## Usage
//!
//! ```rust,ignore
//! use call_grid_test_utils::*;
//!
//! #[tokio::test]
//! async fn test_example() {
//!     let transport = RecordingTransport::new();
//!     let local = default_local();
//!     let (handle, _task) = CallSession::spawn(&config, local, transport.clone());
//!
//!     for participant in make_participants(3, true, false) {
//!         handle.apply(TransportEvent::Joined(participant)).await.unwrap();
//!     }
//!
//!     assert_visible_usernames(&handle.participants().borrow(), &["P2", "P1", "P0"]);
//! }
//! ```

pub mod assertions;
pub mod fake_transport;
pub mod fixtures;
pub mod logging;

pub use assertions::*;
pub use fake_transport::*;
pub use fixtures::*;
pub use logging::*;
