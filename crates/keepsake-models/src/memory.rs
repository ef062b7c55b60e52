//! The memory record.
//!
//! A memory is one user-facing event: a title, a narrative, a date, the
//! photos that illustrate it and a handful of optional tags. `id` is the
//! only key used for lookup and equality.

use chrono::{DateTime, Datelike, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::MemoryId;
use crate::photo::Photo;

/// A single memory in the gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    /// Unique, stable identifier.
    pub id: MemoryId,

    /// Short display string.
    pub title: String,

    /// Free-text description used for search and narration.
    pub narrative: String,

    /// When the memory happened.
    pub date: DateTime<Utc>,

    /// Attached photos; the first one is the cover.
    #[serde(default)]
    pub photos: Vec<Photo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Tagged people, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub people: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotions: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// User-owned notes, replaced wholesale on save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_notes: Option<String>,
}

impl Memory {
    /// Creates a memory with no photos and no optional fields.
    pub fn new(
        id: impl Into<MemoryId>,
        title: impl Into<String>,
        narrative: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            narrative: narrative.into(),
            date,
            photos: Vec::new(),
            location: None,
            people: None,
            emotions: None,
            category: None,
            user_notes: None,
        }
    }

    /// Calendar year of `date` as seen in the given display zone.
    pub fn year_in(&self, offset: &FixedOffset) -> i32 {
        self.date.with_timezone(offset).year()
    }

    /// `date` converted into the given display zone.
    pub fn local_date(&self, offset: &FixedOffset) -> DateTime<FixedOffset> {
        self.date.with_timezone(offset)
    }

    /// The representative photo, if the memory has any.
    pub fn cover_photo(&self) -> Option<&Photo> {
        self.photos.first()
    }

    /// Tagged people, or an empty slice when none are recorded.
    pub fn people(&self) -> &[String] {
        self.people.as_deref().unwrap_or(&[])
    }

    /// Emotion tags, or an empty slice when none are recorded.
    pub fn emotions(&self) -> &[String] {
        self.emotions.as_deref().unwrap_or(&[])
    }

    /// Returns true if `person` is tagged exactly.
    pub fn has_person(&self, person: &str) -> bool {
        self.people().iter().any(|p| p == person)
    }

    /// Returns true if `emotion` is tagged exactly.
    pub fn has_emotion(&self, emotion: &str) -> bool {
        self.emotions().iter().any(|e| e == emotion)
    }

    /// Location, treating an empty string as absent.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.is_empty())
    }

    /// Category, treating an empty string as absent.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

impl PartialEq for Memory {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Memory {}
