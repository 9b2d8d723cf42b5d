//! Visible set assertions.

use call_grid::participant::Participant;
use call_grid::snapshot::ParticipantSet;
use common::types::ParticipantId;

/// Usernames in visible slot order.
#[must_use]
pub fn visible_usernames(set: &ParticipantSet) -> Vec<String> {
    set.visible()
        .participants()
        .iter()
        .map(|p| p.username().to_string())
        .collect()
}

/// Assert the visible slots hold `expected` usernames, in order.
pub fn assert_visible_usernames(set: &ParticipantSet, expected: &[&str]) {
    assert_eq!(
        visible_usernames(set),
        expected,
        "visible slots do not match"
    );
}

/// Assert the visible slots hold exactly `expected`, in order.
pub fn assert_visible_eq(set: &ParticipantSet, expected: &[Participant]) {
    assert_eq!(
        set.visible().participants(),
        expected,
        "visible slots do not match"
    );
}

/// Assert the structural invariants every snapshot must satisfy.
pub fn assert_snapshot_invariants(set: &ParticipantSet, limit: usize) {
    let local = set.local();
    assert!(local.is_local(), "local participant must be local");
    assert!(
        !set.remote().contains_key(&local.id()),
        "local participant must not be remote"
    );
    assert!(
        !set.visible().contains(local.id()),
        "local participant must not be visible"
    );
    assert_eq!(
        set.visible().len(),
        limit.min(set.remote().len()),
        "visible count must be min(limit, remote)"
    );

    let mut seen: Vec<ParticipantId> = set.visible().ids().collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), set.visible().len(), "visible ids must be unique");
}
