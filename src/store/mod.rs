pub mod models;
pub mod service;

pub use models::MoodEntry;
pub use service::{new_store, MoodStore, StoreHandle};
