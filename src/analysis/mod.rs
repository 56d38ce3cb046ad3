use std::collections::BTreeMap;

use serde::Serialize;

use crate::store::MoodEntry;

/// Number of most-recent entries the analyzer looks at. A count cutoff, not
/// a calendar window.
pub const RECENT_WINDOW: usize = 7;

const TOP_EMOTIONS: usize = 3;

/// Aggregate statistics over a session's recent entries.
#[derive(Debug, Clone, Serialize)]
pub struct MoodPattern {
    pub dominant_mood: String,
    pub dominant_emotions: Vec<String>,
    pub total_entries: usize,
    pub mood_distribution: BTreeMap<String, u32>,
}

/// Summarizes a session's entries. `entries` must already be filtered to one
/// session and ordered most recent first, as `MoodStore::list_by_session`
/// returns them. Returns `None` when there is nothing to analyze.
///
/// Tie-breaks are deterministic: the dominant mood is the first label to
/// reach the maximum count in window order, and dominant emotions keep their
/// first-seen order among equal counts.
pub fn analyze(entries: &[MoodEntry]) -> Option<MoodPattern> {
    if entries.is_empty() {
        return None;
    }

    let window = &entries[..entries.len().min(RECENT_WINDOW)];

    let mood_counts = count_ordered(window.iter().map(|entry| entry.mood.as_str()));
    let emotion_counts = count_ordered(
        window
            .iter()
            .flat_map(|entry| entry.emotions.iter().map(String::as_str)),
    );

    let mut dominant = &mood_counts[0];
    for candidate in &mood_counts[1..] {
        if candidate.1 > dominant.1 {
            dominant = candidate;
        }
    }
    let dominant_mood = dominant.0.clone();

    let mut ranked = emotion_counts;
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    let dominant_emotions = ranked
        .into_iter()
        .take(TOP_EMOTIONS)
        .map(|(label, _)| label)
        .collect();

    Some(MoodPattern {
        dominant_mood,
        dominant_emotions,
        total_entries: window.len(),
        mood_distribution: mood_counts.into_iter().collect(),
    })
}

/// Occurrence counts in first-seen order.
fn count_ordered<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<(String, u32)> {
    let mut counts: Vec<(String, u32)> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|(seen, _)| seen.as_str() == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label.to_string(), 1)),
        }
    }
    counts
}
