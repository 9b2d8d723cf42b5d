//! Visibility stabilization.
//!
//! `build()` reorders the visible set on every event. Rendering that order
//! directly would shuffle tiles whenever someone speaks, so the previously
//! rendered slot assignment is merged with the new one first:
//!
//! - A slot inside both sets' overlap range keeps its occupant if that
//!   participant is still visible. The fresh value from `next` is used.
//! - Everyone else from `next` fills the free slots in `next`'s order.
//!
//! Membership always comes from `next`; only positions are inherited.

use crate::participant::Participant;
use crate::snapshot::{ParticipantSet, VisibleSlots};

use common::types::ParticipantId;
use std::collections::{HashMap, HashSet};

/// Merge `next` into the slot layout of `previous`.
///
/// The result has `next`'s local participant, remote map and visible
/// membership, with slot indices reused from `previous` where possible.
#[must_use]
pub fn stabilize(previous: &ParticipantSet, next: &ParticipantSet) -> ParticipantSet {
    let overlap = previous.visible().len().min(next.visible().len());

    let next_by_id: HashMap<ParticipantId, &Participant> =
        next.visible().participants().iter().map(|p| (p.id(), p)).collect();

    let retained: Vec<Option<&Participant>> = previous
        .visible()
        .participants()
        .iter()
        .take(overlap)
        .map(|p| next_by_id.get(&p.id()).copied())
        .collect();

    let used: HashSet<ParticipantId> = retained.iter().flatten().map(|p| p.id()).collect();

    let mut unplaced = next
        .visible()
        .participants()
        .iter()
        .filter(|p| !used.contains(&p.id()));

    // Every retained entry plus every unplaced entry is exactly `next`'s
    // visible set, so each slot below gets an occupant.
    let visible: VisibleSlots = (0..next.visible().len())
        .filter_map(|slot| {
            retained
                .get(slot)
                .copied()
                .flatten()
                .or_else(|| unplaced.next())
        })
        .cloned()
        .collect();

    ParticipantSet::new(next.local().clone(), next.remote().clone(), visible)
}

impl ParticipantSet {
    /// Shorthand for [`stabilize`] with `self` as the previous set.
    #[must_use]
    pub fn stabilized(&self, next: &ParticipantSet) -> ParticipantSet {
        stabilize(self, next)
    }
}
