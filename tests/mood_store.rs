#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use moodbank::store::MoodStore;
    use uuid::Uuid;

    #[test]
    fn test_append_then_read_back() {
        let mut store = MoodStore::new();
        let session = Uuid::new_v4();

        let first = store.append(session, "happy", vec!["anxiety".to_string()], 5.0, "");
        let second = store.append(session, "sad", vec![], 3.0, "rough day");
        assert_ne!(first.id, second.id);

        let entries = store.list_by_session(session);
        assert_eq!(entries.len(), 2);

        // Most recent first
        assert_eq!(entries[0].id, second.id);
        assert_eq!(entries[1].id, first.id);
        assert!(entries[0].timestamp >= entries[1].timestamp);

        assert_eq!(entries[0].notes, "rough day");
        assert_eq!(entries[1].emotions, vec!["anxiety".to_string()]);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut store = MoodStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        store.append(alice, "happy", vec![], 7.0, "");
        store.append(bob, "angry", vec!["anger".to_string()], 9.0, "");
        store.append(alice, "calm", vec![], 4.0, "");

        let for_alice = store.list_by_session(alice);
        assert_eq!(for_alice.len(), 2);
        assert!(for_alice.iter().all(|entry| entry.session_id == alice));

        let for_bob = store.list_by_session(bob);
        assert_eq!(for_bob.len(), 1);
        assert_eq!(for_bob[0].mood, "angry");

        assert!(store.list_by_session(Uuid::new_v4()).is_empty());
    }

    #[test]
    fn test_ids_are_unique_across_many_appends() {
        let mut store = MoodStore::new();
        let session = Uuid::new_v4();

        let mut ids = HashSet::new();
        for i in 0..20 {
            let entry = store.append(session, "okay", vec![], i as f64, "");
            ids.insert(entry.id);
        }

        assert_eq!(ids.len(), 20);
        assert_eq!(store.len(), 20);
        assert_eq!(store.list_by_session(session).len(), 20);
    }

    #[test]
    fn test_entries_keep_caller_values() {
        let mut store = MoodStore::new();
        let session = Uuid::new_v4();

        // Intensity is caller-supplied and unvalidated
        let entry = store.append(
            session,
            "wired",
            vec!["stress".to_string(), "anxiety".to_string()],
            42.5,
            "deadline week",
        );

        assert_eq!(entry.mood, "wired");
        assert_eq!(entry.intensity, 42.5);
        assert_eq!(
            entry.emotions,
            vec!["stress".to_string(), "anxiety".to_string()]
        );
    }
}
