//! Participant model.
//!
//! A `Participant` is the engine's view of one call member: identity plus
//! the boolean and track-presence attributes the transport reports. The
//! engine never inspects media; it only reacts to these attributes.

use common::types::{ParticipantId, VideoTrackId};
use serde::{Deserialize, Serialize};

/// Username shown for participants that have not set one.
pub const DEFAULT_USERNAME: &str = "Guest";

/// Mute state of a camera or microphone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuteState {
    /// The media is muted.
    Muted,
    /// The media is not muted and playable.
    Unmuted,
}

impl MuteState {
    /// Mute state of a local input. Only an enabled, authorized input is unmuted.
    #[must_use]
    pub fn from_input(is_enabled: bool, is_authorized: bool) -> Self {
        if is_enabled && is_authorized {
            MuteState::Unmuted
        } else {
            MuteState::Muted
        }
    }

    /// The opposite state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            MuteState::Muted => MuteState::Unmuted,
            MuteState::Unmuted => MuteState::Muted,
        }
    }
}

/// Direction the local camera is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacingMode {
    /// The camera is facing the user.
    User,
    /// The camera is facing away from the user.
    Environment,
}

impl FacingMode {
    /// The other facing mode.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            FacingMode::User => FacingMode::Environment,
            FacingMode::Environment => FacingMode::User,
        }
    }
}

/// The camera used by the local participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallCamera {
    pub video: MuteState,
    pub mode: FacingMode,
}

impl CallCamera {
    #[must_use]
    pub fn new(video: MuteState, mode: FacingMode) -> Self {
        Self { video, mode }
    }

    /// Camera state from the local input settings and capture authorization.
    #[must_use]
    pub fn from_input(is_enabled: bool, is_authorized: bool, mode: FacingMode) -> Self {
        Self::new(MuteState::from_input(is_enabled, is_authorized), mode)
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.video == MuteState::Muted
    }

    /// The same camera with video muted or unmuted.
    #[must_use]
    pub fn toggled(self) -> Self {
        Self::new(self.video.toggled(), self.mode)
    }

    /// The same camera facing the other way.
    #[must_use]
    pub fn flipped(self) -> Self {
        Self::new(self.video, self.mode.flipped())
    }
}

impl Default for CallCamera {
    fn default() -> Self {
        Self::new(MuteState::Muted, FacingMode::User)
    }
}

/// The microphone used by the local participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallMicrophone {
    pub audio: MuteState,
}

impl CallMicrophone {
    #[must_use]
    pub fn new(audio: MuteState) -> Self {
        Self { audio }
    }

    /// Microphone state from the local input settings and capture authorization.
    #[must_use]
    pub fn from_input(is_enabled: bool, is_authorized: bool) -> Self {
        Self::new(MuteState::from_input(is_enabled, is_authorized))
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.audio == MuteState::Muted
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        Self::new(self.audio.toggled())
    }
}

impl Default for CallMicrophone {
    fn default() -> Self {
        Self::new(MuteState::Muted)
    }
}

/// Lifecycle state of the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallState {
    #[default]
    Initialized,
    Joining,
    Joined,
    Leaving,
    Left,
}

impl CallState {
    /// Returns the call state as a string for logs and labels.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            CallState::Initialized => "initialized",
            CallState::Joining => "joining",
            CallState::Joined => "joined",
            CallState::Leaving => "leaving",
            CallState::Left => "left",
        }
    }
}

/// How a participant's video fills its tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoScaleMode {
    /// Show the whole frame, letterboxing if needed.
    Fit,
    /// Fill the tile, cropping the frame.
    Fill,
}

/// Non-owning handle to a video track held by the call transport.
///
/// Equality covers the track identity and its enabled flag, so a track
/// toggling on or off registers as a participant change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoTrackHandle {
    pub id: VideoTrackId,
    pub is_enabled: bool,
}

impl VideoTrackHandle {
    #[must_use]
    pub fn new(id: impl Into<String>, is_enabled: bool) -> Self {
        Self {
            id: VideoTrackId::new(id),
            is_enabled,
        }
    }
}

/// Mutable attributes reported by the transport for a participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantAttributes {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub has_audio: bool,
    #[serde(default)]
    pub has_video: bool,
    #[serde(default)]
    pub is_sharing_screen: bool,
    #[serde(default)]
    pub video_track: Option<VideoTrackHandle>,
}

/// A participant in a call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    id: ParticipantId,
    username: String,
    is_local: bool,
    has_audio: bool,
    has_video: bool,
    is_sharing_screen: bool,
    video_track: Option<VideoTrackHandle>,
}

impl Participant {
    /// Make a participant. `is_local` is fixed for the participant's lifetime.
    #[must_use]
    pub fn new(id: ParticipantId, is_local: bool, attributes: ParticipantAttributes) -> Self {
        Self {
            id,
            username: attributes
                .username
                .unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            is_local,
            has_audio: attributes.has_audio,
            has_video: attributes.has_video,
            is_sharing_screen: attributes.is_sharing_screen,
            video_track: attributes.video_track,
        }
    }

    /// Make a remote participant.
    #[must_use]
    pub fn remote(id: ParticipantId, attributes: ParticipantAttributes) -> Self {
        Self::new(id, false, attributes)
    }

    /// Make the local participant.
    #[must_use]
    pub fn local(id: ParticipantId, attributes: ParticipantAttributes) -> Self {
        Self::new(id, true, attributes)
    }

    /// A copy of this participant with new attributes; identity and locality are kept.
    #[must_use]
    pub fn with_attributes(&self, attributes: ParticipantAttributes) -> Self {
        Self::new(self.id, self.is_local, attributes)
    }

    /// The same participant marked local.
    #[must_use]
    pub(crate) fn into_local(self) -> Self {
        Self {
            is_local: true,
            ..self
        }
    }

    #[must_use]
    pub fn id(&self) -> ParticipantId {
        self.id
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn is_local(&self) -> bool {
        self.is_local
    }

    #[must_use]
    pub fn has_audio(&self) -> bool {
        self.has_audio
    }

    #[must_use]
    pub fn has_video(&self) -> bool {
        self.has_video
    }

    #[must_use]
    pub fn is_sharing_screen(&self) -> bool {
        self.is_sharing_screen
    }

    #[must_use]
    pub fn video_track(&self) -> Option<&VideoTrackHandle> {
        self.video_track.as_ref()
    }

    /// Local video and screen shares are fitted so the whole frame shows;
    /// remote camera video fills its tile.
    #[must_use]
    pub fn video_scale_mode(&self) -> VideoScaleMode {
        if self.is_sharing_screen || self.is_local {
            VideoScaleMode::Fit
        } else {
            VideoScaleMode::Fill
        }
    }

    /// Whether this participant's video should be mirrored.
    #[must_use]
    pub fn is_video_mirrored(&self, camera: &CallCamera) -> bool {
        self.is_local && camera.mode == FacingMode::User
    }
}

/// Readiness of a transport media track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackState {
    Blocked,
    #[default]
    Off,
    Sendable,
    Loading,
    Interrupted,
    Playable,
}

/// One media track as reported by the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaTrack {
    pub state: TrackState,
    #[serde(default)]
    pub track: Option<VideoTrackHandle>,
}

impl MediaTrack {
    #[must_use]
    pub fn playable(track: Option<VideoTrackHandle>) -> Self {
        Self {
            state: TrackState::Playable,
            track,
        }
    }

    /// The track handle, only while the track is playable.
    fn playable_track(&self) -> Option<&VideoTrackHandle> {
        match self.state {
            TrackState::Playable => self.track.as_ref(),
            _ => None,
        }
    }
}

/// Media tracks reported by the transport for one participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantMedia {
    #[serde(default)]
    pub camera: MediaTrack,
    #[serde(default)]
    pub screen_video: MediaTrack,
    #[serde(default)]
    pub microphone: MediaTrack,
}

/// Raw participant record as delivered by a call transport adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportParticipant {
    pub id: ParticipantId,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub is_local: bool,
    #[serde(default)]
    pub media: Option<ParticipantMedia>,
}

impl From<&TransportParticipant> for Participant {
    fn from(raw: &TransportParticipant) -> Self {
        let screen_track = raw
            .media
            .as_ref()
            .and_then(|media| media.screen_video.playable_track());
        let camera_track = raw
            .media
            .as_ref()
            .and_then(|media| media.camera.playable_track());

        // Screen share wins over the camera when both are playable.
        let video_track = screen_track.or(camera_track).cloned();

        let has_audio = raw
            .media
            .as_ref()
            .is_some_and(|media| media.microphone.state == TrackState::Playable);

        Participant::new(
            raw.id,
            raw.is_local,
            ParticipantAttributes {
                username: raw.username.clone(),
                has_audio,
                has_video: video_track.is_some(),
                is_sharing_screen: screen_track.is_some(),
                video_track,
            },
        )
    }
}

impl From<TransportParticipant> for Participant {
    fn from(raw: TransportParticipant) -> Self {
        Participant::from(&raw)
    }
}
