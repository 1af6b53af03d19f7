#![forbid(unsafe_code)]

//! Bounded snapshot undo/redo store.
//!
//! [`HistoryEngine`] keeps `Arc`-wrapped snapshots on dual stacks.
//! Pushing is O(1), snapshots share memory through the `Arc`, and the
//! undo stack is bounded: once capacity is exceeded the oldest
//! snapshot is evicted from the front, permanently.
//!
//! ```text
//! push(s3)
//! ┌──────────────────────────────────────────────────┐
//! │ Undo Stack:  [Arc(s0), Arc(s1), Arc(s2), Arc(s3)]│
//! │ Redo Stack:  []                                   │
//! │ Current:     Arc(s3)                              │
//! └──────────────────────────────────────────────────┘
//!
//! undo() x2
//! ┌──────────────────────────────────────────────────┐
//! │ Undo Stack:  [Arc(s0), Arc(s1)]                  │
//! │ Redo Stack:  [Arc(s2), Arc(s3)]                  │
//! │ Current:     Arc(s1)                              │
//! └──────────────────────────────────────────────────┘
//!
//! push(s4) — new branch, clears redo
//! ┌──────────────────────────────────────────────────┐
//! │ Undo Stack:  [Arc(s0), Arc(s1), Arc(s4)]         │
//! │ Redo Stack:  []                                   │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! 1. `undo_stack.len() <= config.capacity` after any operation.
//! 2. The redo stack is cleared on every push — a discarded future is
//!    truly discarded.
//! 3. `current()` is the most recently pushed or restored snapshot.
//! 4. With `k` snapshots retained, exactly `k - 1` undos are possible;
//!    the next returns `None`.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

/// Configuration for the history engine.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Maximum number of snapshots retained on the undo stack.
    /// Oldest snapshots are evicted when the limit is exceeded.
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { capacity: 50 }
    }
}

impl HistoryConfig {
    /// Create a configuration with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Unlimited capacity (for testing).
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            capacity: usize::MAX,
        }
    }
}

/// A bounded snapshot-based undo/redo store.
///
/// `T` is the snapshot type — for Mailsmith, the full block list at
/// one instant. Snapshots are immutable once pushed; `Arc` makes
/// handing them back to the caller free.
pub struct HistoryEngine<T> {
    /// Snapshots available for undo (current state at the back).
    undo_stack: VecDeque<Arc<T>>,
    /// Snapshots available for redo (most recently undone at the back).
    redo_stack: VecDeque<Arc<T>>,
    config: HistoryConfig,
}

impl<T> fmt::Debug for HistoryEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryEngine")
            .field("undo_depth", &self.undo_stack.len())
            .field("redo_depth", &self.redo_stack.len())
            .field("capacity", &self.config.capacity)
            .finish()
    }
}

impl<T> Default for HistoryEngine<T> {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

impl<T> HistoryEngine<T> {
    /// Create an empty engine with the given configuration.
    #[must_use]
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            config,
        }
    }

    // ====================================================================
    // Core operations
    // ====================================================================

    /// Push a new snapshot, discarding any redo future and evicting the
    /// oldest entry once capacity is exceeded.
    pub fn push(&mut self, snapshot: T) {
        self.push_arc(Arc::new(snapshot));
    }

    /// Push a pre-wrapped snapshot without double-wrapping.
    pub fn push_arc(&mut self, snapshot: Arc<T>) {
        self.redo_stack.clear();
        self.undo_stack.push_back(snapshot);
        self.enforce_capacity();
    }

    /// Step back one snapshot.
    ///
    /// Moves the current snapshot to the redo stack and returns the
    /// one now current. Returns `None` at the oldest retained snapshot
    /// — the caller reads that as "cannot undo".
    pub fn undo(&mut self) -> Option<Arc<T>> {
        if self.undo_stack.len() < 2 {
            return None;
        }
        let current = self.undo_stack.pop_back()?;
        self.redo_stack.push_back(current);
        self.undo_stack.back().cloned()
    }

    /// Step forward one snapshot. Returns `None` when there is no
    /// discarded future to restore.
    pub fn redo(&mut self) -> Option<Arc<T>> {
        let snapshot = self.redo_stack.pop_back()?;
        self.undo_stack.push_back(snapshot);
        self.undo_stack.back().cloned()
    }

    /// The snapshot the document currently corresponds to.
    #[must_use]
    pub fn current(&self) -> Option<&Arc<T>> {
        self.undo_stack.back()
    }

    // ====================================================================
    // Query
    // ====================================================================

    /// Pure boundary check; drives the enabled state of an Undo control.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() >= 2
    }

    /// Pure boundary check; drives the enabled state of a Redo control.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of snapshots on the undo stack, including current.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of snapshots on the redo stack.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// The configuration in effect.
    #[must_use]
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Whether no snapshot has been pushed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    // ====================================================================
    // Maintenance
    // ====================================================================

    /// Reset to empty. Called on document load so undo history never
    /// leaks across documents.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn enforce_capacity(&mut self) {
        while self.undo_stack.len() > self.config.capacity {
            self.undo_stack.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_engine_is_empty() {
        let engine = HistoryEngine::<i32>::default();
        assert!(engine.is_empty());
        assert!(!engine.can_undo());
        assert!(!engine.can_redo());
        assert!(engine.current().is_none());
    }

    #[test]
    fn single_push_cannot_undo() {
        let mut engine = HistoryEngine::default();
        engine.push(1);
        assert_eq!(**engine.current().unwrap(), 1);
        assert!(!engine.can_undo());
    }

    #[test]
    fn undo_returns_previous_snapshot() {
        let mut engine = HistoryEngine::default();
        engine.push(1);
        engine.push(2);
        engine.push(3);

        assert_eq!(*engine.undo().unwrap(), 2);
        assert_eq!(*engine.undo().unwrap(), 1);
        assert!(engine.undo().is_none());
    }

    #[test]
    fn redo_restores_undone_snapshot() {
        let mut engine = HistoryEngine::default();
        engine.push(1);
        engine.push(2);
        engine.undo();

        assert_eq!(*engine.redo().unwrap(), 2);
        assert!(engine.redo().is_none());
    }

    #[test]
    fn push_discards_redo_future() {
        let mut engine = HistoryEngine::default();
        engine.push(1);
        engine.push(2);
        engine.undo();
        assert!(engine.can_redo());

        engine.push(3);

        assert!(!engine.can_redo());
        assert!(engine.redo().is_none());
        assert_eq!(**engine.current().unwrap(), 3);
    }

    #[test]
    fn capacity_bound_retains_most_recent() {
        let mut engine = HistoryEngine::new(HistoryConfig::new(50));
        for i in 0..60 {
            engine.push(i);
        }

        assert_eq!(engine.undo_depth(), 50);
        assert_eq!(**engine.current().unwrap(), 59);

        // 49 undos reach the oldest retained snapshot (10); the 50th
        // is a no-op.
        let mut last = None;
        for _ in 0..49 {
            last = engine.undo();
        }
        assert_eq!(*last.unwrap(), 10);
        assert!(engine.undo().is_none());
    }

    #[test]
    fn default_capacity_is_fifty() {
        assert_eq!(HistoryConfig::default().capacity, 50);
    }

    #[test]
    fn clear_resets_both_stacks() {
        let mut engine = HistoryEngine::default();
        engine.push(1);
        engine.push(2);
        engine.undo();

        engine.clear();

        assert!(engine.is_empty());
        assert!(!engine.can_undo());
        assert!(!engine.can_redo());
    }

    #[test]
    fn undo_redo_inverse_cycle() {
        let mut engine = HistoryEngine::default();
        for i in 0..5 {
            engine.push(i);
        }

        for _ in 0..4 {
            engine.undo();
        }
        assert_eq!(**engine.current().unwrap(), 0);

        for _ in 0..4 {
            engine.redo();
        }
        assert_eq!(**engine.current().unwrap(), 4);
        assert!(!engine.can_redo());
    }

    #[test]
    fn snapshots_share_storage_through_arc() {
        let mut engine = HistoryEngine::default();
        let snapshot = Arc::new(vec![0u8; 1024]);
        engine.push_arc(snapshot.clone());
        engine.push_arc(snapshot.clone());

        assert_eq!(Arc::strong_count(&snapshot), 3);
    }

    #[test]
    fn debug_reports_depths() {
        let mut engine = HistoryEngine::default();
        engine.push(1);
        let dbg = format!("{engine:?}");
        assert!(dbg.contains("HistoryEngine"));
        assert!(dbg.contains("undo_depth"));
    }
}
