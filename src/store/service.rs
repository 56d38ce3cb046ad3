use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use crate::store::models::MoodEntry;

/// Shared handle injected into request handlers. Appends and reads both go
/// through the lock; the store itself is single-owner.
pub type StoreHandle = Arc<Mutex<MoodStore>>;

/// Append-only, process-lifetime collection of mood entries. Entries are
/// never updated or removed once stored.
pub struct MoodStore {
    entries: Vec<MoodEntry>,
}

impl MoodStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Stores a new entry, assigning its id and timestamp server-side.
    pub fn append(
        &mut self,
        session_id: Uuid,
        mood: &str,
        emotions: Vec<String>,
        intensity: f64,
        notes: &str,
    ) -> MoodEntry {
        let entry = MoodEntry {
            id: Uuid::new_v4(),
            session_id,
            mood: mood.to_string(),
            emotions,
            intensity,
            notes: notes.to_string(),
            timestamp: Utc::now(),
        };
        self.entries.push(entry.clone());
        entry
    }

    /// All entries for one session, timestamp descending. Timestamps are
    /// assigned at insertion, so reverse insertion order is the sort order;
    /// entries sharing a timestamp come back latest-inserted first.
    pub fn list_by_session(&self, session_id: Uuid) -> Vec<MoodEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|entry| entry.session_id == session_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MoodStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn new_store() -> StoreHandle {
    Arc::new(Mutex::new(MoodStore::new()))
}
