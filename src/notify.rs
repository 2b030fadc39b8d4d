use crate::models::Notice;
use chrono::Local;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::info;

/// Receives the message returned by a completed save.
pub trait Notifier {
    fn notify(&self, message: &str);
}

#[derive(Debug, Default)]
struct Slot {
    seq: u64,
    latest: Option<Notice>,
}

/// Holds the most recent notice.
///
/// Saves resolve independently, so whichever response arrives last
/// overwrites the slot. Every notice carries a sequence number so a page
/// can wait for one newer than what it has already seen.
#[derive(Debug, Clone, Default)]
pub struct Notices {
    slot: Arc<Mutex<Slot>>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<Notice> {
        self.lock().latest.clone()
    }

    /// Sequence number of the latest notice, 0 before the first one.
    pub fn seq(&self) -> u64 {
        self.lock().seq
    }

    // A panic elsewhere while holding the lock leaves the slot consistent,
    // so keep using it.
    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notifier for Notices {
    fn notify(&self, message: &str) {
        info!(%message, "save acknowledged");
        let mut slot = self.lock();
        slot.seq += 1;
        slot.latest = Some(Notice {
            seq: slot.seq,
            message: message.to_string(),
            received_at: Local::now(),
        });
    }
}
