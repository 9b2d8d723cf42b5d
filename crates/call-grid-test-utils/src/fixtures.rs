//! Participant fixtures.

use call_grid::participant::{Participant, ParticipantAttributes, VideoTrackHandle};
use call_grid::snapshot::{ParticipantSet, VisibleSlots};
use common::types::ParticipantId;
use uuid::Uuid;

/// Builder for test participants.
#[derive(Debug, Clone)]
pub struct TestParticipant {
    /// Participant ID.
    pub id: ParticipantId,
    /// Display name.
    pub username: String,
    pub is_local: bool,
    pub has_audio: bool,
    pub has_video: bool,
    pub is_sharing_screen: bool,
}

impl TestParticipant {
    /// Create a remote participant with the given name and no media.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: ParticipantId(Uuid::new_v4()),
            username: username.into(),
            is_local: false,
            has_audio: false,
            has_video: false,
            is_sharing_screen: false,
        }
    }

    /// Create the local participant.
    #[must_use]
    pub fn local() -> Self {
        Self {
            is_local: true,
            ..Self::new("Local")
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: ParticipantId) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn with_audio(mut self) -> Self {
        self.has_audio = true;
        self
    }

    /// Give the participant a playable camera track.
    #[must_use]
    pub fn with_video(mut self) -> Self {
        self.has_video = true;
        self
    }

    #[must_use]
    pub fn sharing_screen(mut self) -> Self {
        self.has_video = true;
        self.is_sharing_screen = true;
        self
    }

    /// Build the participant.
    #[must_use]
    pub fn build(self) -> Participant {
        let video_track = self
            .has_video
            .then(|| VideoTrackHandle::new(format!("video-{}", self.id), true));

        Participant::new(
            self.id,
            self.is_local,
            ParticipantAttributes {
                username: Some(self.username),
                has_audio: self.has_audio,
                has_video: self.has_video,
                is_sharing_screen: self.is_sharing_screen,
                video_track,
            },
        )
    }
}

/// The local participant used by most tests.
#[must_use]
pub fn default_local() -> Participant {
    TestParticipant::local().build()
}

/// Make `count` remote participants named `P0`, `P1`, ...
#[must_use]
pub fn make_participants(count: usize, has_video: bool, has_audio: bool) -> Vec<Participant> {
    (0..count)
        .map(|i| {
            let mut participant = TestParticipant::new(format!("P{i}"));
            participant.has_video = has_video;
            participant.has_audio = has_audio;
            participant.build()
        })
        .collect()
}

/// A snapshot whose visible slots are `visible`, in order.
///
/// Every visible participant is also in the remote map.
#[must_use]
pub fn make_participant_set(local: &Participant, visible: &[Participant]) -> ParticipantSet {
    ParticipantSet::new(
        local.clone(),
        visible.iter().map(|p| (p.id(), p.clone())).collect(),
        visible.iter().cloned().collect::<VisibleSlots>(),
    )
}
