#![forbid(unsafe_code)]

//! Long-lived version snapshots, distinct from undo/redo history.
//!
//! A [`Version`] is an immutable save point: explicit user saves,
//! elapsed-time auto-saves, and the checkpoint taken automatically
//! before a destructive restore. The store is bounded by a
//! [`RetentionPolicy`]; pruning prefers evicting `auto` versions so
//! deliberate save points survive the longest.

use mailsmith_model::Block;
use web_time::SystemTime;

/// How a version came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionKind {
    /// Created by the elapsed-time auto-save policy.
    Auto,
    /// Created by explicit user action.
    Manual,
    /// Created automatically before a destructive restore.
    Checkpoint,
}

/// An immutable snapshot of the block list at one moment.
#[derive(Debug, Clone)]
pub struct Version {
    pub id: u64,
    pub created_at: SystemTime,
    pub kind: VersionKind,
    pub message: Option<String>,
    pub blocks: Vec<Block>,
}

/// Bounds on how many versions are retained.
#[derive(Debug, Clone)]
pub struct RetentionPolicy {
    /// Hard cap on stored versions.
    pub max_versions: usize,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self { max_versions: 10 }
    }
}

impl RetentionPolicy {
    /// A policy with a custom cap.
    #[must_use]
    pub fn new(max_versions: usize) -> Self {
        Self { max_versions }
    }
}

/// Bounded store of [`Version`]s, oldest first.
#[derive(Debug)]
pub struct VersionStore {
    versions: Vec<Version>,
    next_id: u64,
    policy: RetentionPolicy,
}

impl Default for VersionStore {
    fn default() -> Self {
        Self::new(RetentionPolicy::default())
    }
}

impl VersionStore {
    /// An empty store with the given policy.
    #[must_use]
    pub fn new(policy: RetentionPolicy) -> Self {
        Self {
            versions: Vec::new(),
            next_id: 1,
            policy,
        }
    }

    /// Record a new version and prune to the retention cap. Returns
    /// the new version's id.
    pub fn create_version(
        &mut self,
        kind: VersionKind,
        message: Option<String>,
        blocks: Vec<Block>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.versions.push(Version {
            id,
            created_at: SystemTime::now(),
            kind,
            message,
            blocks,
        });
        self.prune();
        id
    }

    /// All retained versions, oldest first.
    #[must_use]
    pub fn versions(&self) -> &[Version] {
        &self.versions
    }

    /// Look up a version by id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Version> {
        self.versions.iter().find(|v| v.id == id)
    }

    /// Drop everything (document switch).
    pub fn clear(&mut self) {
        self.versions.clear();
    }

    /// Evict down to the cap: oldest `auto` versions go first, then
    /// the oldest of whatever remains. The newest version is never
    /// evicted.
    fn prune(&mut self) {
        while self.versions.len() > self.policy.max_versions {
            let last = self.versions.len() - 1;
            let victim = self.versions[..last]
                .iter()
                .position(|v| v.kind == VersionKind::Auto)
                .unwrap_or(0);
            self.versions.remove(victim);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_cap(cap: usize) -> VersionStore {
        VersionStore::new(RetentionPolicy::new(cap))
    }

    #[test]
    fn default_policy_caps_at_ten() {
        assert_eq!(RetentionPolicy::default().max_versions, 10);
    }

    #[test]
    fn create_assigns_increasing_ids() {
        let mut store = store_with_cap(10);
        let a = store.create_version(VersionKind::Manual, None, Vec::new());
        let b = store.create_version(VersionKind::Auto, None, Vec::new());
        assert!(b > a);
        assert_eq!(store.versions().len(), 2);
    }

    #[test]
    fn get_finds_by_id() {
        let mut store = store_with_cap(10);
        let id = store.create_version(
            VersionKind::Manual,
            Some("before launch".into()),
            Vec::new(),
        );
        let version = store.get(id).unwrap();
        assert_eq!(version.message.as_deref(), Some("before launch"));
        assert_eq!(version.kind, VersionKind::Manual);
    }

    #[test]
    fn pruning_prefers_auto_versions() {
        let mut store = store_with_cap(3);
        store.create_version(VersionKind::Manual, None, Vec::new()); // id 1
        store.create_version(VersionKind::Auto, None, Vec::new()); // id 2
        store.create_version(VersionKind::Manual, None, Vec::new()); // id 3
        store.create_version(VersionKind::Auto, None, Vec::new()); // id 4

        // Over cap by one: the oldest auto (id 2) is evicted, not id 1.
        let ids: Vec<u64> = store.versions().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn pruning_falls_back_to_oldest_when_no_auto() {
        let mut store = store_with_cap(2);
        store.create_version(VersionKind::Manual, None, Vec::new()); // id 1
        store.create_version(VersionKind::Checkpoint, None, Vec::new()); // id 2
        store.create_version(VersionKind::Manual, None, Vec::new()); // id 3

        let ids: Vec<u64> = store.versions().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn newest_version_survives_even_if_auto() {
        let mut store = store_with_cap(1);
        store.create_version(VersionKind::Manual, None, Vec::new()); // id 1
        store.create_version(VersionKind::Auto, None, Vec::new()); // id 2

        let ids: Vec<u64> = store.versions().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn clear_empties_the_store() {
        let mut store = store_with_cap(10);
        store.create_version(VersionKind::Manual, None, Vec::new());
        store.clear();
        assert!(store.versions().is_empty());
    }
}
