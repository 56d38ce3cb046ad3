use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: Uuid,
    pub session_id: Uuid,
    pub mood: String,
    pub emotions: Vec<String>,
    pub intensity: f64,
    pub notes: String,
    pub timestamp: DateTime<Utc>,
}
