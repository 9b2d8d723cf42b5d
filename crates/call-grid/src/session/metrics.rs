//! Session mailbox monitoring.
//!
//! | Level    | Depth   |
//! |----------|---------|
//! | Normal   | <= 100  |
//! | Warning  | 101-500 |
//! | Critical | > 500   |
//!
//! Handles count a message in before sending it and the actor counts it out
//! once handled, so the depth covers queued and in-flight messages.

use crate::observability::metrics::set_session_mailbox_depth;

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use tracing::{debug, warn};

/// Mailbox depth thresholds for the session actor.
pub const SESSION_MAILBOX_NORMAL: usize = 100;
pub const SESSION_MAILBOX_WARNING: usize = 500;

/// Mailbox depth level for alerting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailboxLevel {
    /// At or below the normal threshold.
    Normal,
    /// Between normal and warning thresholds.
    Warning,
    /// Above warning threshold.
    Critical,
}

impl MailboxLevel {
    #[must_use]
    pub const fn for_depth(depth: usize) -> Self {
        if depth > SESSION_MAILBOX_WARNING {
            MailboxLevel::Critical
        } else if depth > SESSION_MAILBOX_NORMAL {
            MailboxLevel::Warning
        } else {
            MailboxLevel::Normal
        }
    }
}

/// Tracks queue depth for one session mailbox.
///
/// Shared between every handle clone and the actor.
#[derive(Debug, Default)]
pub struct MailboxMonitor {
    depth: AtomicUsize,
    peak_depth: AtomicUsize,
    messages_processed: AtomicU64,
    messages_dropped: AtomicU64,
}

impl MailboxMonitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message about to be sent to the mailbox.
    pub fn record_enqueue(&self) {
        let new_depth = self.depth.fetch_add(1, Ordering::Relaxed) + 1;
        self.peak_depth.fetch_max(new_depth, Ordering::Relaxed);
        set_session_mailbox_depth(new_depth);

        match MailboxLevel::for_depth(new_depth) {
            MailboxLevel::Critical => {
                warn!(
                    target: "cg.session.mailbox",
                    depth = new_depth,
                    threshold = SESSION_MAILBOX_WARNING,
                    "Mailbox depth critical"
                );
            }
            // Log once when crossing into the warning band.
            MailboxLevel::Warning if new_depth == SESSION_MAILBOX_NORMAL + 1 => {
                debug!(
                    target: "cg.session.mailbox",
                    depth = new_depth,
                    "Mailbox depth elevated"
                );
            }
            _ => {}
        }
    }

    /// Record a message the actor has finished handling.
    pub fn record_dequeue(&self) {
        self.decrement_depth();
        self.messages_processed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a message that never reached the actor.
    pub fn record_drop(&self) {
        self.decrement_depth();
        self.messages_dropped.fetch_add(1, Ordering::Relaxed);
        warn!(
            target: "cg.session.mailbox",
            dropped = self.messages_dropped.load(Ordering::Relaxed),
            "Message dropped, session mailbox closed"
        );
    }

    #[must_use]
    pub fn current_depth(&self) -> usize {
        self.depth.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn peak_depth(&self) -> usize {
        self.peak_depth.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn messages_processed(&self) -> u64 {
        self.messages_processed.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn messages_dropped(&self) -> u64 {
        self.messages_dropped.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn current_level(&self) -> MailboxLevel {
        MailboxLevel::for_depth(self.current_depth())
    }

    fn decrement_depth(&self) {
        let previous = self
            .depth
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |depth| {
                Some(depth.saturating_sub(1))
            })
            .unwrap_or_default();
        set_session_mailbox_depth(previous.saturating_sub(1));
    }
}
