//! Read-aloud text and speech settings.

use keepsake_models::Memory;

/// Speech parameters handed to the speech collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NarrationSettings {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Default for NarrationSettings {
    fn default() -> Self {
        Self {
            rate: 0.9,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

/// Text read aloud for a memory: its title followed by its narrative.
pub fn narration_script(memory: &Memory) -> String {
    format!("{}. {}", memory.title, memory.narrative)
}
