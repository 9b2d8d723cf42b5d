//! `ParticipantRegistry` - canonical participant state for one call session.
//!
//! The registry owns the local participant, every remote participant, two
//! recency lists and the active speaker. `build()` turns that state into a
//! capacity-bounded, priority-ordered `ParticipantSet`.
//!
//! # Priority
//!
//! Slots are filled tier by tier, never interleaving tiers:
//!
//! 1. The active speaker (pinned even without video)
//! 2. Recent speakers with video, then recent speakers without video
//! 3. Recent joiners with video, then recent joiners without video
//! 4. Anyone left over once both recency lists are exhausted
//!
//! The last tier only matters when participants have been trimmed out of
//! both recency lists while slots remain free. It is ordered by video, then
//! by id, so the result is deterministic.
//!
//! # Lifecycle
//!
//! One registry per call session. It is recreated when the session leaves
//! the call so no stale history carries into a rejoin. All mutation happens
//! on a single task; the registry has no interior locking.

use crate::errors::{CallGridError, ProtocolViolation};
use crate::geometry::DeviceClass;
use crate::participant::Participant;
use crate::snapshot::{ParticipantSet, VisibleSlots};

use common::types::ParticipantId;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace, warn};

/// Canonical participant state and priority ordering.
#[derive(Debug, Clone)]
pub struct ParticipantRegistry {
    /// The local participant.
    local: Participant,
    /// Maximum number of visible remote participants.
    limit: usize,
    /// All remote participants by ID.
    remote: HashMap<ParticipantId, Participant>,
    /// Remote speakers, most recent last, at most `limit` entries.
    speaker_order: Vec<ParticipantId>,
    /// Remote joiners, most recent last, at most `limit` entries.
    join_order: Vec<ParticipantId>,
    /// The current active speaker.
    active_speaker: Option<Participant>,
}

impl ParticipantRegistry {
    /// Make a registry with an explicit visible limit.
    #[must_use]
    pub fn new(local: Participant, limit: usize) -> Self {
        Self {
            local,
            limit,
            remote: HashMap::new(),
            speaker_order: Vec::new(),
            join_order: Vec::new(),
            active_speaker: None,
        }
    }

    /// Make a registry using the capacity of a device class.
    #[must_use]
    pub fn for_device(local: Participant, device: DeviceClass) -> Self {
        Self::new(local, device.visible_participant_limit())
    }

    #[must_use]
    pub fn local(&self) -> &Participant {
        &self.local
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub fn remote(&self) -> &HashMap<ParticipantId, Participant> {
        &self.remote
    }

    /// Speaker recency, most recent last.
    #[must_use]
    pub fn speaker_order(&self) -> &[ParticipantId] {
        &self.speaker_order
    }

    /// Join recency, most recent last.
    #[must_use]
    pub fn join_order(&self) -> &[ParticipantId] {
        &self.join_order
    }

    #[must_use]
    pub fn active_speaker(&self) -> Option<&Participant> {
        self.active_speaker.as_ref()
    }

    /// Handle a remote participant joining the call.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolViolation::LocalJoined` if the event names the local
    /// participant. The registry is left unchanged.
    pub fn handle_joined(&mut self, participant: Participant) -> Result<(), CallGridError> {
        if self.is_local(&participant) {
            warn!(
                target: "cg.registry",
                violation = ProtocolViolation::LocalJoined.as_str(),
                "Ignoring join event for the local participant"
            );
            return Err(ProtocolViolation::LocalJoined.into());
        }

        push_recent(&mut self.join_order, participant.id(), self.limit);
        self.refresh_active_speaker(&participant);
        self.remote.insert(participant.id(), participant);

        debug!(
            target: "cg.registry",
            remote_participants = self.remote.len(),
            "Participant joined"
        );
        Ok(())
    }

    /// Handle a remote participant leaving the call.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolViolation::LocalLeft` if `id` is the local
    /// participant. The registry is left unchanged.
    pub fn handle_left(&mut self, id: ParticipantId) -> Result<(), CallGridError> {
        if id == self.local.id() {
            warn!(
                target: "cg.registry",
                violation = ProtocolViolation::LocalLeft.as_str(),
                "Ignoring leave event for the local participant"
            );
            return Err(ProtocolViolation::LocalLeft.into());
        }

        self.join_order.retain(|existing| *existing != id);
        self.speaker_order.retain(|existing| *existing != id);

        if self.active_speaker.as_ref().map(Participant::id) == Some(id) {
            self.active_speaker = None;
        }

        self.remote.remove(&id);

        debug!(
            target: "cg.registry",
            remote_participants = self.remote.len(),
            "Participant left"
        );
        Ok(())
    }

    /// Handle updated attributes for any participant.
    ///
    /// Recency positions are untouched; only the stored values change. An
    /// update naming the local participant stays local even if the payload
    /// lost its flag.
    pub fn handle_updated(&mut self, participant: Participant) {
        if self.is_local(&participant) {
            self.local = participant.into_local();
            return;
        }

        self.refresh_active_speaker(&participant);
        self.remote.insert(participant.id(), participant);
    }

    /// Set or clear the active speaker.
    ///
    /// A remote speaker becomes the most recent entry in speaker recency.
    /// The local participant is stored but never tracked or shown.
    pub fn set_active_speaker(&mut self, speaker: Option<Participant>) {
        if let Some(speaker) = speaker.as_ref().filter(|p| !self.is_local(p)) {
            push_recent(&mut self.speaker_order, speaker.id(), self.limit);
        }

        trace!(
            target: "cg.registry",
            has_active_speaker = speaker.is_some(),
            "Active speaker changed"
        );
        self.active_speaker = speaker;
    }

    /// Build a prioritized, capacity-bounded snapshot of the call.
    #[must_use]
    pub fn build(&self) -> ParticipantSet {
        let mut placement = Placement::new(self.limit);

        // Pinned first so the speaker stays first even without video.
        if let Some(speaker) = self.active_speaker.as_ref().filter(|p| !self.is_local(p)) {
            placement.place(speaker);
        }

        self.place_partitioned(&mut placement, self.speaker_order.iter().rev());
        self.place_partitioned(&mut placement, self.join_order.iter().rev());

        if !placement.is_full() {
            let mut remaining: Vec<&Participant> = self
                .remote
                .values()
                .filter(|p| !placement.is_placed(p.id()))
                .collect();
            remaining.sort_by_key(|p| (!p.has_video(), p.id()));
            for participant in remaining {
                placement.place(participant);
            }
        }

        ParticipantSet::new(
            self.local.clone(),
            self.remote.clone(),
            placement.into_slots(),
        )
    }

    /// Place live participants for `ids`, video-bearing ones first.
    fn place_partitioned<'a>(
        &self,
        placement: &mut Placement,
        ids: impl Iterator<Item = &'a ParticipantId>,
    ) {
        let (with_video, without_video): (Vec<&Participant>, Vec<&Participant>) = ids
            .filter_map(|id| self.remote.get(id))
            .partition(|p| p.has_video());

        for participant in with_video.into_iter().chain(without_video) {
            placement.place(participant);
        }
    }

    /// Keep a pinned speaker in step with the latest values for its id.
    fn refresh_active_speaker(&mut self, participant: &Participant) {
        if self.active_speaker.as_ref().map(Participant::id) == Some(participant.id()) {
            self.active_speaker = Some(participant.clone());
        }
    }

    fn is_local(&self, participant: &Participant) -> bool {
        participant.is_local() || participant.id() == self.local.id()
    }
}

/// Move `id` to the most recent end of `order`, keeping the newest `limit`.
fn push_recent(order: &mut Vec<ParticipantId>, id: ParticipantId, limit: usize) {
    order.retain(|existing| *existing != id);
    order.push(id);

    let excess = order.len().saturating_sub(limit);
    order.drain(..excess);
}

/// Slots filled so far during one `build()`.
struct Placement {
    limit: usize,
    placed: HashSet<ParticipantId>,
    slots: Vec<Participant>,
}

impl Placement {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            placed: HashSet::with_capacity(limit),
            slots: Vec::with_capacity(limit),
        }
    }

    fn is_full(&self) -> bool {
        self.slots.len() >= self.limit
    }

    fn is_placed(&self, id: ParticipantId) -> bool {
        self.placed.contains(&id)
    }

    /// Take the next free slot if capacity remains and `participant` is not yet placed.
    fn place(&mut self, participant: &Participant) {
        if self.is_full() {
            return;
        }
        if self.placed.insert(participant.id()) {
            self.slots.push(participant.clone());
        }
    }

    fn into_slots(self) -> VisibleSlots {
        VisibleSlots::from(self.slots)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::participant::ParticipantAttributes;

    fn local() -> Participant {
        Participant::local(ParticipantId::new(), ParticipantAttributes::default())
    }

    fn remote(name: &str, has_video: bool) -> Participant {
        Participant::remote(
            ParticipantId::new(),
            ParticipantAttributes {
                username: Some(name.to_string()),
                has_video,
                ..Default::default()
            },
        )
    }

    fn assert_local_hidden(set: &ParticipantSet) {
        let local = set.local();
        assert!(local.is_local());
        assert!(!set.remote().contains_key(&local.id()));
        assert!(!set.visible().contains(local.id()));
    }

    fn visible_names(set: &ParticipantSet) -> Vec<&str> {
        set.visible()
            .participants()
            .iter()
            .map(Participant::username)
            .collect()
    }

    // ------------------------------------------------------------------------
    // Participant count
    // ------------------------------------------------------------------------

    #[test]
    fn test_count_when_only_local() {
        let registry = ParticipantRegistry::for_device(local(), DeviceClass::Phone);

        let participants = registry.build();

        assert_eq!(participants.count(), 1);
        assert_eq!(participants.visible().len(), 0);
    }

    #[test]
    fn test_count_tracks_joins_and_leaves() {
        let mut registry = ParticipantRegistry::for_device(local(), DeviceClass::Phone);
        let remotes: Vec<Participant> = (0..3).map(|i| remote(&i.to_string(), true)).collect();

        for participant in &remotes {
            registry.handle_joined(participant.clone()).unwrap();
        }
        registry.handle_left(remotes[0].id()).unwrap();
        let participants = registry.build();

        assert_eq!(participants.count(), 3);
        assert_eq!(participants.visible().len(), 2);
    }

    #[test]
    fn test_visible_does_not_exceed_device_limit() {
        for device in [DeviceClass::Phone, DeviceClass::Pad] {
            let mut registry = ParticipantRegistry::for_device(local(), device);

            for i in 0..19 {
                registry.handle_joined(remote(&i.to_string(), true)).unwrap();
            }
            let participants = registry.build();

            assert_eq!(participants.count(), 20);
            assert_eq!(
                participants.visible().len(),
                device.visible_participant_limit()
            );
        }
    }

    // ------------------------------------------------------------------------
    // Recency lists
    // ------------------------------------------------------------------------

    #[test]
    fn test_join_order_is_trimmed_to_most_recent() {
        let mut registry = ParticipantRegistry::new(local(), 2);
        let remotes: Vec<Participant> = (0..3).map(|i| remote(&i.to_string(), true)).collect();

        for participant in &remotes {
            registry.handle_joined(participant.clone()).unwrap();
        }

        assert_eq!(registry.join_order(), &[remotes[1].id(), remotes[2].id()]);
    }

    #[test]
    fn test_rejoin_moves_to_most_recent_without_duplicates() {
        let mut registry = ParticipantRegistry::new(local(), 6);
        let a = remote("a", true);
        let b = remote("b", true);

        registry.handle_joined(a.clone()).unwrap();
        registry.handle_joined(b.clone()).unwrap();
        registry.handle_joined(a.clone()).unwrap();

        assert_eq!(registry.join_order(), &[b.id(), a.id()]);
        assert_eq!(registry.remote().len(), 2);
    }

    #[test]
    fn test_participants_are_removed_from_join_order() {
        let mut registry = ParticipantRegistry::new(local(), 6);
        let remotes: Vec<Participant> = (0..3).map(|i| remote(&i.to_string(), true)).collect();
        for participant in &remotes {
            registry.handle_joined(participant.clone()).unwrap();
        }

        registry.handle_left(remotes[1].id()).unwrap();

        assert_eq!(registry.join_order(), &[remotes[0].id(), remotes[2].id()]);
    }

    #[test]
    fn test_speaker_order_is_updated_when_active_speaker_changes() {
        let mut registry = ParticipantRegistry::new(local(), 6);
        let a = remote("a", true);
        let b = remote("b", true);
        registry.handle_joined(a.clone()).unwrap();
        registry.handle_joined(b.clone()).unwrap();

        registry.set_active_speaker(Some(a.clone()));
        registry.set_active_speaker(Some(b.clone()));
        registry.set_active_speaker(Some(a.clone()));

        assert_eq!(registry.speaker_order(), &[b.id(), a.id()]);
    }

    #[test]
    fn test_speaker_order_is_trimmed_to_most_recent() {
        let mut registry = ParticipantRegistry::new(local(), 1);
        let a = remote("a", false);
        let b = remote("b", false);
        registry.handle_joined(a.clone()).unwrap();
        registry.handle_joined(b.clone()).unwrap();

        registry.set_active_speaker(Some(a));
        registry.set_active_speaker(Some(b.clone()));

        assert_eq!(registry.speaker_order(), &[b.id()]);
    }

    #[test]
    fn test_clearing_active_speaker_keeps_speaker_order() {
        let mut registry = ParticipantRegistry::new(local(), 6);
        let a = remote("a", true);
        registry.handle_joined(a.clone()).unwrap();

        registry.set_active_speaker(Some(a.clone()));
        registry.set_active_speaker(None);

        assert!(registry.active_speaker().is_none());
        assert_eq!(registry.speaker_order(), &[a.id()]);
    }

    #[test]
    fn test_local_participant_is_not_added_to_speaker_order() {
        let local = local();
        let mut registry = ParticipantRegistry::new(local.clone(), 6);

        registry.set_active_speaker(Some(local.clone()));

        assert!(registry.speaker_order().is_empty());
        assert!(!registry.build().visible().contains(local.id()));
    }

    #[test]
    fn test_participants_are_removed_from_speaker_order() {
        let mut registry = ParticipantRegistry::new(local(), 6);
        let a = remote("a", true);
        registry.handle_joined(a.clone()).unwrap();
        registry.set_active_speaker(Some(a.clone()));

        registry.handle_left(a.id()).unwrap();

        assert!(!registry.speaker_order().contains(&a.id()));
        assert!(registry.active_speaker().is_none());
    }

    // ------------------------------------------------------------------------
    // Updates
    // ------------------------------------------------------------------------

    #[test]
    fn test_local_participant_is_updated() {
        let local = local();
        let mut registry = ParticipantRegistry::new(local.clone(), 6);
        let updated = local.with_attributes(ParticipantAttributes {
            username: Some("me".to_string()),
            ..Default::default()
        });

        registry.handle_updated(updated.clone());

        assert_eq!(registry.local(), &updated);
        assert!(registry.remote().is_empty());
    }

    #[test]
    fn test_remote_participant_is_updated() {
        let mut registry = ParticipantRegistry::new(local(), 6);
        let a = remote("a", false);
        registry.handle_joined(a.clone()).unwrap();
        let updated = a.with_attributes(ParticipantAttributes {
            has_video: true,
            ..Default::default()
        });

        registry.handle_updated(updated.clone());

        assert_eq!(registry.remote().get(&a.id()), Some(&updated));
        assert_eq!(registry.join_order(), &[a.id()]);
    }

    #[test]
    fn test_active_speaker_is_refreshed_on_update() {
        let mut registry = ParticipantRegistry::new(local(), 6);
        let a = remote("a", false);
        registry.handle_joined(a.clone()).unwrap();
        registry.set_active_speaker(Some(a.clone()));
        let updated = a.with_attributes(ParticipantAttributes {
            has_video: true,
            ..Default::default()
        });

        registry.handle_updated(updated.clone());

        assert_eq!(registry.active_speaker(), Some(&updated));
        assert_eq!(registry.speaker_order(), &[a.id()]);
        assert_eq!(registry.build().visible().get(0), Some(&updated));
    }

    #[test]
    fn test_active_speaker_is_refreshed_on_rejoin() {
        let mut registry = ParticipantRegistry::new(local(), 6);
        let a = remote("a", false);
        registry.handle_joined(a.clone()).unwrap();
        registry.set_active_speaker(Some(a.clone()));
        let rejoined = a.with_attributes(ParticipantAttributes {
            username: Some("a".to_string()),
            has_video: true,
            ..Default::default()
        });

        registry.handle_joined(rejoined.clone()).unwrap();

        assert_eq!(registry.active_speaker(), Some(&rejoined));
        assert_eq!(registry.build().visible().get(0), Some(&rejoined));
    }

    #[test]
    fn test_unflagged_local_update_stays_local() {
        let local = local();
        let mut registry = ParticipantRegistry::new(local.clone(), 6);
        let unflagged = Participant::remote(
            local.id(),
            ParticipantAttributes {
                username: Some("me".to_string()),
                ..Default::default()
            },
        );

        registry.handle_updated(unflagged);

        assert!(registry.local().is_local());
        assert_eq!(registry.local().id(), local.id());
        assert_eq!(registry.local().username(), "me");
        assert!(registry.remote().is_empty());
        assert_local_hidden(&registry.build());
    }

    // ------------------------------------------------------------------------
    // Protocol violations
    // ------------------------------------------------------------------------

    #[test]
    fn test_unflagged_local_speaker_is_never_placed() {
        let local = local();
        let mut registry = ParticipantRegistry::new(local.clone(), 6);
        let a = remote("a", true);
        registry.handle_joined(a.clone()).unwrap();
        let unflagged = Participant::remote(local.id(), ParticipantAttributes::default());
        assert!(registry.handle_joined(unflagged.clone()).is_err());

        registry.set_active_speaker(Some(unflagged));
        let snapshot = registry.build();

        assert!(registry.speaker_order().is_empty());
        assert!(!snapshot.visible().contains(local.id()));
        assert_eq!(snapshot.visible().get(0), Some(&a));
        assert_local_hidden(&snapshot);
    }

    #[test]
    fn test_local_join_is_rejected_without_mutation() {
        let local = local();
        let mut registry = ParticipantRegistry::new(local.clone(), 6);

        let result = registry.handle_joined(local);

        assert!(matches!(
            result,
            Err(CallGridError::ProtocolViolation(ProtocolViolation::LocalJoined))
        ));
        assert!(registry.remote().is_empty());
        assert!(registry.join_order().is_empty());
    }

    #[test]
    fn test_local_leave_is_rejected_without_mutation() {
        let local = local();
        let mut registry = ParticipantRegistry::new(local.clone(), 6);
        let a = remote("a", true);
        registry.handle_joined(a).unwrap();

        let result = registry.handle_left(local.id());

        assert!(matches!(
            result,
            Err(CallGridError::ProtocolViolation(ProtocolViolation::LocalLeft))
        ));
        assert_eq!(registry.remote().len(), 1);
        assert_eq!(registry.local(), &local);
    }

    // ------------------------------------------------------------------------
    // Visible ordering
    // ------------------------------------------------------------------------

    #[test]
    fn test_participants_are_ordered_by_join_recency() {
        let mut registry = ParticipantRegistry::new(local(), 6);
        for name in ["0", "1", "2"] {
            registry.handle_joined(remote(name, true)).unwrap();
        }

        assert_eq!(visible_names(&registry.build()), vec!["2", "1", "0"]);
    }

    #[test]
    fn test_join_recency_when_limit_is_exceeded() {
        let mut registry = ParticipantRegistry::new(local(), 1);
        let a = remote("a", false);
        let b = remote("b", false);
        registry.handle_joined(a.clone()).unwrap();
        registry.handle_joined(b.clone()).unwrap();
        assert_eq!(visible_names(&registry.build()), vec!["b"]);

        registry.set_active_speaker(Some(a.clone()));
        assert_eq!(visible_names(&registry.build()), vec!["a"]);

        registry.handle_left(a.id()).unwrap();
        assert_eq!(visible_names(&registry.build()), vec!["b"]);
    }

    #[test]
    fn test_speaker_recency_when_limit_is_exceeded() {
        let mut registry = ParticipantRegistry::new(local(), 1);
        let a = remote("a", false);
        let b = remote("b", false);
        registry.handle_joined(a.clone()).unwrap();
        registry.handle_joined(b.clone()).unwrap();
        registry.set_active_speaker(Some(a));
        registry.set_active_speaker(Some(b.clone()));
        registry.set_active_speaker(None);
        assert_eq!(visible_names(&registry.build()), vec!["b"]);

        registry.handle_left(b.id()).unwrap();
        // `a` was trimmed out of both recency lists but still fills the free slot.
        assert!(registry.join_order().is_empty());
        assert!(registry.speaker_order().is_empty());
        assert_eq!(visible_names(&registry.build()), vec!["a"]);
    }

    #[test]
    fn test_participants_are_ordered_by_join_recency_and_video() {
        let mut registry = ParticipantRegistry::new(local(), 6);
        for (i, has_video) in [true, false, true, false, true, false].into_iter().enumerate() {
            registry
                .handle_joined(remote(&i.to_string(), has_video))
                .unwrap();
        }

        let participants = registry.build();

        assert_eq!(visible_names(&participants), vec!["4", "2", "0", "5", "3", "1"]);
    }

    #[test]
    fn test_participants_are_ordered_by_speaking_recency() {
        let mut registry = ParticipantRegistry::new(local(), 6);
        let remotes: Vec<Participant> = (0..3).map(|i| remote(&i.to_string(), true)).collect();
        for participant in remotes.iter().rev() {
            registry.handle_joined(participant.clone()).unwrap();
        }

        for participant in &remotes {
            registry.set_active_speaker(Some(participant.clone()));
        }

        assert_eq!(visible_names(&registry.build()), vec!["2", "1", "0"]);
    }

    #[test]
    fn test_speaking_recency_is_ordered_before_join_recency() {
        let mut registry = ParticipantRegistry::new(local(), 6);
        let a = remote("a", true);
        let b = remote("b", true);
        registry.handle_joined(a.clone()).unwrap();
        registry.handle_joined(b).unwrap();

        registry.set_active_speaker(Some(a));

        assert_eq!(visible_names(&registry.build()), vec!["a", "b"]);
    }

    #[test]
    fn test_active_speaker_without_video_is_pinned_first() {
        let mut registry = ParticipantRegistry::new(local(), 6);
        let speaker = remote("speaker", false);
        let past_video = remote("past video", true);
        let past = remote("past", false);
        let joiner_video = remote("joiner video", true);
        let joiner = remote("joiner", false);

        for participant in [&speaker, &past_video, &past, &joiner_video, &joiner] {
            registry.handle_joined(participant.clone()).unwrap();
        }

        registry.set_active_speaker(Some(past_video));
        registry.set_active_speaker(Some(past));
        registry.set_active_speaker(Some(speaker));

        assert_eq!(
            visible_names(&registry.build()),
            vec!["speaker", "past video", "past", "joiner video", "joiner"]
        );
    }

    #[test]
    fn test_tiers_are_not_interleaved() {
        let mut registry = ParticipantRegistry::new(local(), 6);
        let speaker_no_video = remote("speaker", false);
        let joiner_video = remote("joiner", true);
        registry.handle_joined(speaker_no_video.clone()).unwrap();
        registry.handle_joined(joiner_video).unwrap();

        registry.set_active_speaker(Some(speaker_no_video));
        registry.set_active_speaker(None);

        // The audio-only past speaker still outranks a joiner with video.
        assert_eq!(visible_names(&registry.build()), vec!["speaker", "joiner"]);
    }

    #[test]
    fn test_unjoined_active_speaker_is_still_pinned() {
        let mut registry = ParticipantRegistry::new(local(), 6);
        let a = remote("a", true);
        let stranger = remote("stranger", false);
        registry.handle_joined(a).unwrap();

        registry.set_active_speaker(Some(stranger));

        assert_eq!(visible_names(&registry.build()), vec!["stranger", "a"]);
    }

    #[test]
    fn test_leftover_participants_prefer_video() {
        let mut registry = ParticipantRegistry::new(local(), 1);
        let audio_only = remote("audio", false);
        let video = remote("video", true);
        let last = remote("last", false);
        for participant in [&audio_only, &video, &last] {
            registry.handle_joined(participant.clone()).unwrap();
        }

        registry.handle_left(last.id()).unwrap();

        assert_eq!(visible_names(&registry.build()), vec!["video"]);
    }

    #[test]
    fn test_zero_limit_shows_nobody() {
        let mut registry = ParticipantRegistry::new(local(), 0);
        let a = remote("a", true);
        registry.handle_joined(a.clone()).unwrap();
        registry.set_active_speaker(Some(a));

        let participants = registry.build();

        assert_eq!(participants.count(), 2);
        assert!(participants.visible().is_empty());
    }
}
