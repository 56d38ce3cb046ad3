use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateMoodRequest {
    pub mood: String,
    pub emotions: Vec<String>,
    pub intensity: f64,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Serialize)]
pub struct SaveMoodResponse {
    pub success: bool,
    pub id: Uuid,
}
