//! Background half of a notifying dispatch: waits for the user, reveals the
//! channel on "Open output", and turns presentation failures into one error record.

use super::{Origin, Shared};
use crate::internal;
use crate::level::Level;
use crate::output::{Notification, OPEN_OUTPUT};
use crate::record::LogRecord;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Count of live follow-ups, with a condvar signalled when it drops to zero.
#[derive(Debug, Default)]
pub(super) struct Pending {
    count: Mutex<usize>,
    idle: Condvar,
}

impl Pending {
    fn enter(&self) {
        *self.lock() += 1;
    }

    fn leave(&self) {
        let mut count = self.lock();
        *count = count.saturating_sub(1);
        if *count == 0 {
            self.idle.notify_all();
        }
    }

    pub(super) fn count(&self) -> usize {
        *self.lock()
    }

    /// `false` if the count is still non-zero when `timeout` passes.
    pub(super) fn wait_idle(&self, timeout: Duration) -> bool {
        let (count, _) = self
            .idle
            .wait_timeout_while(self.lock(), timeout, |count| *count > 0)
            .unwrap_or_else(PoisonError::into_inner);
        *count == 0
    }

    fn lock(&self) -> MutexGuard<'_, usize> {
        self.count.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Counts as pending from creation until dropped, whether it ran to completion
/// or was abandoned with the runtime.
pub(super) struct FollowUp {
    shared: Arc<Shared>,
    notification: Notification,
}

impl FollowUp {
    pub(super) fn new(shared: Arc<Shared>, notification: Notification) -> Self {
        shared.pending.enter();
        Self {
            shared,
            notification,
        }
    }

    pub(super) async fn run(self) {
        let level = self.notification.level;

        match self.shared.notifier.notify(&self.notification).await {
            Ok(Some(action)) if self.offers(&action) && action == OPEN_OUTPUT => {
                if self.shared.is_ended() {
                    internal::debug("NOTIFY", "Logger ended before the channel could be revealed");
                } else {
                    self.shared.channel.show(false);
                }
            }
            Ok(_) => {}
            Err(e) => {
                internal::warn("NOTIFY", &format!("Failed to show {level} notification: {e}"));
                let record = LogRecord::new(format!("Error showing the {level} message: {e}"))
                    .level(Level::Error);
                if let Err(err) = self
                    .shared
                    .dispatch(&record, Origin::NotificationFailure)
                {
                    internal::debug("NOTIFY", &format!("Dropped notification failure record: {err}"));
                }
            }
        }
    }

    fn offers(&self, action: &str) -> bool {
        self.notification.actions.iter().any(|offered| offered == action)
    }
}

impl Drop for FollowUp {
    fn drop(&mut self) {
        self.shared.pending.leave();
    }
}
