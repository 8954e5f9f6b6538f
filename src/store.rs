//! In-memory history and snapshot stores.
//!
//! Capped lists, newest first, oldest evicted. State lives for the lifetime
//! of the process only; nothing is written to disk.

use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use serde::Serialize;
use uuid::Uuid;

use crate::check::{AvailabilityResult, now_rfc3339};

pub const MAX_HISTORY_ENTRIES: usize = 20;
pub const MAX_SNAPSHOTS: usize = 50;

#[derive(Serialize, Clone)]
pub struct HistoryEntry {
    pub id: String,
    pub usernames: Vec<String>,
    pub results: Vec<AvailabilityResult>,
    pub timestamp: String,
}

#[derive(Serialize, Clone)]
pub struct Snapshot {
    pub id: String,
    pub usernames: Vec<String>,
    pub results: Vec<AvailabilityResult>,
    pub timestamp: String,
    pub name: String,
}

/// Recent-searches list, capped at [`MAX_HISTORY_ENTRIES`].
#[derive(Clone, Default)]
pub struct HistoryStore {
    inner: Arc<RwLock<VecDeque<HistoryEntry>>>,
}

impl HistoryStore {
    pub fn add(&self, usernames: Vec<String>, results: Vec<AvailabilityResult>) -> HistoryEntry {
        let entry = HistoryEntry {
            id: Uuid::new_v4().to_string(),
            usernames,
            results,
            timestamp: now_rfc3339(),
        };
        let mut entries = self.write();
        entries.push_front(entry.clone());
        entries.truncate(MAX_HISTORY_ENTRIES);
        entry
    }

    pub fn list(&self) -> Vec<HistoryEntry> {
        self.read().iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, VecDeque<HistoryEntry>> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, VecDeque<HistoryEntry>> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Named saved-result snapshots, capped at [`MAX_SNAPSHOTS`].
#[derive(Clone, Default)]
pub struct SnapshotStore {
    inner: Arc<RwLock<VecDeque<Snapshot>>>,
}

impl SnapshotStore {
    pub fn save(
        &self,
        usernames: Vec<String>,
        results: Vec<AvailabilityResult>,
        name: Option<String>,
    ) -> Snapshot {
        let timestamp = now_rfc3339();
        let snapshot = Snapshot {
            id: Uuid::new_v4().to_string(),
            usernames,
            results,
            name: name.unwrap_or_else(|| format!("Results - {timestamp}")),
            timestamp,
        };
        let mut snapshots = self.write();
        snapshots.push_front(snapshot.clone());
        snapshots.truncate(MAX_SNAPSHOTS);
        snapshot
    }

    pub fn list(&self) -> Vec<Snapshot> {
        self.read().iter().cloned().collect()
    }

    /// Returns false when no snapshot has the given id.
    pub fn rename(&self, id: &str, name: &str) -> bool {
        let mut snapshots = self.write();
        match snapshots.iter_mut().find(|s| s.id == id) {
            Some(snapshot) => {
                snapshot.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Returns false when no snapshot has the given id.
    pub fn delete(&self, id: &str) -> bool {
        let mut snapshots = self.write();
        let before = snapshots.len();
        snapshots.retain(|s| s.id != id);
        snapshots.len() < before
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, VecDeque<Snapshot>> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, VecDeque<Snapshot>> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
