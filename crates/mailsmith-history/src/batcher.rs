#![forbid(unsafe_code)]

//! Quiet-period coalescing of rapid edits.
//!
//! Incrementing a font size five times in two seconds should cost one
//! undo step, not five. [`ActionBatcher`] holds the latest queued
//! snapshot and a deadline; each [`queue_change`](ActionBatcher::queue_change)
//! replaces the snapshot and re-arms the deadline. When the quiet
//! period elapses — or the caller flushes explicitly — the pending
//! snapshot is released for a single history push.
//!
//! # Design
//!
//! Latest wins: intermediate states within a burst are not separately
//! undoable. The batcher never pushes on its own — there is no timer
//! thread. The owner either calls [`flush`](ActionBatcher::flush) at
//! editing-session exit points (blur, selection change, teardown) or
//! drives [`poll_at`](ActionBatcher::poll_at) from its update loop,
//! which releases the snapshot once the deadline has passed. Structural
//! operations (insert, delete, reorder, paste) must bypass batching:
//! flush first, then push their own standalone entry.
//!
//! The pending deadline is state owned by this instance; every path
//! that can invalidate it — flush, cancel, teardown — clears it, so a
//! stale deadline can never release a snapshot from a previous editing
//! context.
//!
//! # Failure Modes
//!
//! None. Flushing with nothing queued returns `None` and is idempotent.

use std::fmt;
use std::time::Duration;

use web_time::Instant;

/// Configuration for the action batcher.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// How long the burst must stay quiet before the pending snapshot
    /// is released.
    pub quiet_period: Duration,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            quiet_period: Duration::from_millis(500),
        }
    }
}

impl BatchConfig {
    /// Create a configuration with a custom quiet period.
    #[must_use]
    pub fn new(quiet_period: Duration) -> Self {
        Self { quiet_period }
    }
}

/// Coalesces a burst of snapshots into a single pending one.
pub struct ActionBatcher<T> {
    pending: Option<T>,
    deadline: Option<Instant>,
    config: BatchConfig,
}

impl<T> fmt::Debug for ActionBatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionBatcher")
            .field("has_pending", &self.pending.is_some())
            .field("deadline", &self.deadline)
            .finish()
    }
}

impl<T> Default for ActionBatcher<T> {
    fn default() -> Self {
        Self::new(BatchConfig::default())
    }
}

impl<T> ActionBatcher<T> {
    /// Create an idle batcher.
    #[must_use]
    pub fn new(config: BatchConfig) -> Self {
        Self {
            pending: None,
            deadline: None,
            config,
        }
    }

    /// Record the latest snapshot and re-arm the quiet-period deadline.
    ///
    /// Replaces any previously queued snapshot — only the most recent
    /// state of a burst matters.
    pub fn queue_change(&mut self, snapshot: T) {
        self.queue_change_at(snapshot, Instant::now());
    }

    /// [`queue_change`](Self::queue_change) with an explicit clock
    /// reading, for deterministic tests.
    pub fn queue_change_at(&mut self, snapshot: T, now: Instant) {
        self.pending = Some(snapshot);
        self.deadline = Some(now + self.config.quiet_period);
    }

    /// Release the pending snapshot immediately, disarming the
    /// deadline. Idempotent: returns `None` when nothing is queued.
    pub fn flush(&mut self) -> Option<T> {
        self.deadline = None;
        self.pending.take()
    }

    /// Release the pending snapshot if the quiet period has elapsed.
    ///
    /// This is the "timer fired" path: the owner calls it from its
    /// update loop and performs the same push-then-clear an explicit
    /// flush would.
    pub fn poll_at(&mut self, now: Instant) -> Option<T> {
        match self.deadline {
            Some(deadline) if now >= deadline => self.flush(),
            _ => None,
        }
    }

    /// [`poll_at`](Self::poll_at) against the real clock.
    pub fn poll(&mut self) -> Option<T> {
        self.poll_at(Instant::now())
    }

    /// Drop any pending snapshot without releasing it. Used when the
    /// batching context is torn down (document load, unmount) and the
    /// queued state no longer corresponds to the live document.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.deadline = None;
    }

    /// Whether a snapshot is queued awaiting release.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The armed deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// The configuration in effect.
    #[must_use]
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }
}
