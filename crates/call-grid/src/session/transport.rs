//! The seam between a session and the call transport it drives.

use crate::errors::CallGridError;
use crate::participant::FacingMode;

/// Commands a session sends to the call transport.
///
/// Implementations only issue the request. The resulting state comes back
/// later as a `TransportEvent` (`InputsChanged`, `CallStateChanged`, ...).
#[async_trait::async_trait]
pub trait CallTransport: Send + Sync {
    /// Enable or disable the local camera input.
    async fn set_camera_enabled(&self, enabled: bool) -> Result<(), CallGridError>;

    /// Enable or disable the local microphone input.
    async fn set_microphone_enabled(&self, enabled: bool) -> Result<(), CallGridError>;

    /// Switch the local camera to face `mode`.
    async fn set_camera_facing_mode(&self, mode: FacingMode) -> Result<(), CallGridError>;

    /// Set the local username; `None` clears it.
    async fn set_username(&self, username: Option<&str>) -> Result<(), CallGridError>;

    /// Join the call at `url`.
    async fn join(&self, url: &str) -> Result<(), CallGridError>;

    /// Leave the current call.
    async fn leave(&self) -> Result<(), CallGridError>;
}
