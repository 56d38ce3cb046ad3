#[cfg(test)]
mod tests {
    use moodbank::kb::EmotionKb;

    #[test]
    fn test_compose_nothing() {
        let kb = EmotionKb::load();
        let solutions = kb.compose(&[]);
        assert!(solutions.techniques.is_empty());
        assert!(solutions.affirmations.is_empty());
        assert!(solutions.activities.is_empty());
    }

    #[test]
    fn test_unknown_labels_are_skipped() {
        let kb = EmotionKb::load();
        let solutions = kb.compose(&["boredom", ""]);
        assert!(solutions.techniques.is_empty());
        assert!(solutions.affirmations.is_empty());
        assert!(solutions.activities.is_empty());

        // Unknown labels mixed with known ones contribute nothing
        let mixed = kb.compose(&["", "anxiety", "boredom"]);
        assert_eq!(mixed, kb.compose(&["anxiety"]));
    }

    #[test]
    fn test_each_emotion_contributes_two_per_list() {
        let kb = EmotionKb::load();
        let solutions = kb.compose(&["anxiety"]);
        assert_eq!(solutions.techniques.len(), 2);
        assert_eq!(solutions.affirmations.len(), 2);
        assert_eq!(solutions.activities.len(), 2);

        let entry = kb.get("anxiety").unwrap();
        assert_eq!(solutions.techniques[0], entry.techniques[0]);
        assert_eq!(solutions.techniques[1], entry.techniques[1]);
    }

    #[test]
    fn test_repetition_is_idempotent() {
        let kb = EmotionKb::load();
        assert_eq!(
            kb.compose(&["anxiety", "anxiety"]),
            kb.compose(&["anxiety"])
        );
    }

    #[test]
    fn test_order_follows_requested_labels() {
        let kb = EmotionKb::load();
        let solutions = kb.compose(&["anxiety", "stress"]);

        let anxiety = kb.get("anxiety").unwrap();
        let stress = kb.get("stress").unwrap();
        assert_eq!(
            solutions.techniques,
            vec![
                anxiety.techniques[0].to_string(),
                anxiety.techniques[1].to_string(),
                stress.techniques[0].to_string(),
                stress.techniques[1].to_string(),
            ]
        );

        // Reversed request reverses the merge order
        let reversed = kb.compose(&["stress", "anxiety"]);
        assert_eq!(reversed.techniques[0], stress.techniques[0]);
        assert_ne!(solutions.techniques, reversed.techniques);
    }
}
