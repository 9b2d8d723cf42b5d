//! Immutable participant snapshots handed to rendering.

use crate::participant::Participant;
use common::types::ParticipantId;
use std::collections::HashMap;

/// Participants occupying on-screen slots, in slot order.
///
/// Slot `i` is the `i`th element, so occupied slots always form the dense
/// prefix `0..len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleSlots(Vec<Participant>);

impl VisibleSlots {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The participant in `slot`, if occupied.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&Participant> {
        self.0.get(slot)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(slot, participant)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Participant)> {
        self.0.iter().enumerate()
    }

    /// Participants in slot order.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.0
    }

    /// The slot occupied by `id`, if visible.
    #[must_use]
    pub fn slot_of(&self, id: ParticipantId) -> Option<usize> {
        self.0.iter().position(|p| p.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: ParticipantId) -> bool {
        self.slot_of(id).is_some()
    }

    /// Ids in slot order.
    pub fn ids(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        self.0.iter().map(Participant::id)
    }
}

impl FromIterator<Participant> for VisibleSlots {
    fn from_iter<I: IntoIterator<Item = Participant>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Participant>> for VisibleSlots {
    fn from(participants: Vec<Participant>) -> Self {
        Self(participants)
    }
}

/// A call's participant view at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantSet {
    local: Participant,
    remote: HashMap<ParticipantId, Participant>,
    visible: VisibleSlots,
}

impl ParticipantSet {
    #[must_use]
    pub fn new(
        local: Participant,
        remote: HashMap<ParticipantId, Participant>,
        visible: VisibleSlots,
    ) -> Self {
        Self {
            local,
            remote,
            visible,
        }
    }

    /// A set holding only the local participant.
    #[must_use]
    pub fn local_only(local: Participant) -> Self {
        Self::new(local, HashMap::new(), VisibleSlots::new())
    }

    /// Total participants in the call, including the local one.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.remote.len()
    }

    #[must_use]
    pub fn local(&self) -> &Participant {
        &self.local
    }

    /// All remote participants, visible or not.
    ///
    /// Iterating this map in large calls is linear in the call size.
    #[must_use]
    pub fn remote(&self) -> &HashMap<ParticipantId, Participant> {
        &self.remote
    }

    /// Look up a remote participant by id.
    #[must_use]
    pub fn remote_participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.remote.get(&id)
    }

    #[must_use]
    pub fn visible(&self) -> &VisibleSlots {
        &self.visible
    }
}
