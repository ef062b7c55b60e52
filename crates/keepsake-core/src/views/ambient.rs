//! Ambient slideshow cursor.
//!
//! The cursor only tracks which memory is on screen. The host drives it by
//! calling [`AmbientCursor::advance`] once per interval while it is playing.

use std::time::Duration;

use keepsake_models::Memory;

use crate::config::DEFAULT_AMBIENT_SECS;

/// Slideshow state over the full collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbientCursor {
    index: usize,
    playing: bool,
    interval: Duration,
}

impl Default for AmbientCursor {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_AMBIENT_SECS))
    }
}

impl AmbientCursor {
    /// Opens the slideshow at the first memory, playing.
    pub fn new(interval: Duration) -> Self {
        Self {
            index: 0,
            playing: true,
            interval,
        }
    }

    /// Back to the first memory and playing, as on every open.
    pub fn reset(&mut self) {
        self.index = 0;
        self.playing = true;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Steps to the next memory, wrapping to the first after the last.
    pub fn advance(&mut self, len: usize) {
        if len == 0 {
            self.index = 0;
            return;
        }
        self.index = (self.index + 1) % len;
    }

    /// Steps back, wrapping to the last before the first.
    pub fn back(&mut self, len: usize) {
        if len == 0 {
            self.index = 0;
            return;
        }
        self.index = (self.index + len - 1) % len;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn resume(&mut self) {
        self.playing = true;
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// The memory currently on screen.
    pub fn current<'a>(&self, memories: &'a [Memory]) -> Option<&'a Memory> {
        memories.get(self.index)
    }

    /// One-based position, e.g. "2 of 5".
    pub fn position(&self, len: usize) -> String {
        if len == 0 {
            return "0 of 0".to_string();
        }
        format!("{} of {}", self.index + 1, len)
    }
}
