pub mod data;

use std::collections::HashSet;

use serde::Serialize;
use tracing::info;

/// How many items of each list a single matched emotion contributes.
const PER_EMOTION: usize = 2;

/// Suggested coping content for one or more emotions.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SolutionSet {
    pub techniques: Vec<String>,
    pub affirmations: Vec<String>,
    pub activities: Vec<String>,
}

/// One knowledge base record: an emotion label and its suggestion lists.
pub struct EmotionEntry {
    pub label: &'static str,
    pub techniques: &'static [&'static str],
    pub affirmations: &'static [&'static str],
    pub activities: &'static [&'static str],
}

/// Static emotion knowledge base. Built once at startup and shared read-only
/// across requests; lookups never mutate.
pub struct EmotionKb {
    entries: &'static [EmotionEntry],
}

impl EmotionKb {
    pub fn load() -> Self {
        info!("Loaded solutions for {} emotions", data::EMOTIONS.len());
        Self {
            entries: data::EMOTIONS,
        }
    }

    pub fn get(&self, label: &str) -> Option<&EmotionEntry> {
        self.entries.iter().find(|entry| entry.label == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.label)
    }

    /// Merges suggestions for the given labels, in order. Each known label
    /// contributes its first two items per list; unknown labels are skipped.
    /// The merged lists are deduplicated keeping first occurrences.
    pub fn compose(&self, labels: &[&str]) -> SolutionSet {
        let mut solutions = SolutionSet::default();

        for label in labels {
            if let Some(entry) = self.get(label) {
                extend_capped(&mut solutions.techniques, entry.techniques);
                extend_capped(&mut solutions.affirmations, entry.affirmations);
                extend_capped(&mut solutions.activities, entry.activities);
            }
        }

        solutions.techniques = dedup_preserving(solutions.techniques);
        solutions.affirmations = dedup_preserving(solutions.affirmations);
        solutions.activities = dedup_preserving(solutions.activities);

        solutions
    }
}

fn extend_capped(dst: &mut Vec<String>, src: &[&str]) {
    dst.extend(src.iter().take(PER_EMOTION).map(|s| s.to_string()));
}

fn dedup_preserving(list: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    list.into_iter().filter(|item| seen.insert(item.clone())).collect()
}
