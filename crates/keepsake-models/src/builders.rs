//! Builder patterns for memories and photos.

use chrono::{DateTime, Utc};

use crate::ids::{MemoryId, PhotoId};
use crate::memory::Memory;
use crate::photo::{AiAnalysis, Photo, PhotoMetadata};

/// Builder for creating Memory instances with a fluent API.
#[derive(Debug, Clone)]
pub struct MemoryBuilder {
    id: MemoryId,
    title: String,
    narrative: String,
    date: DateTime<Utc>,
    photos: Vec<Photo>,
    location: Option<String>,
    people: Option<Vec<String>>,
    emotions: Option<Vec<String>>,
    category: Option<String>,
    user_notes: Option<String>,
}

impl MemoryBuilder {
    /// Creates a new MemoryBuilder with required fields.
    pub fn new(
        id: impl Into<MemoryId>,
        title: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            narrative: String::new(),
            date,
            photos: Vec::new(),
            location: None,
            people: None,
            emotions: None,
            category: None,
            user_notes: None,
        }
    }

    pub fn narrative(mut self, narrative: impl Into<String>) -> Self {
        self.narrative = narrative.into();
        self
    }

    /// Appends a photo.
    pub fn photo(mut self, photo: Photo) -> Self {
        self.photos.push(photo);
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the tagged people.
    pub fn people<I, S>(mut self, people: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.people = Some(people.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the emotion tags.
    pub fn emotions<I, S>(mut self, emotions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.emotions = Some(emotions.into_iter().map(Into::into).collect());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.user_notes = Some(notes.into());
        self
    }

    /// Builds the Memory.
    pub fn build(self) -> Memory {
        Memory {
            id: self.id,
            title: self.title,
            narrative: self.narrative,
            date: self.date,
            photos: self.photos,
            location: self.location,
            people: self.people,
            emotions: self.emotions,
            category: self.category,
            user_notes: self.user_notes,
        }
    }
}

/// Builder for creating Photo instances with a fluent API.
#[derive(Debug, Clone)]
pub struct PhotoBuilder {
    id: PhotoId,
    url: String,
    thumbnail_url: Option<String>,
    metadata: PhotoMetadata,
    ai_analysis: Option<AiAnalysis>,
}

impl PhotoBuilder {
    /// Creates a new PhotoBuilder with required fields.
    pub fn new(id: impl Into<PhotoId>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            thumbnail_url: None,
            metadata: PhotoMetadata::default(),
            ai_analysis: None,
        }
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    pub fn taken_at(mut self, date: DateTime<Utc>) -> Self {
        self.metadata.date = Some(date);
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.metadata.location = Some(location.into());
        self
    }

    pub fn camera(mut self, camera: impl Into<String>) -> Self {
        self.metadata.camera = Some(camera.into());
        self
    }

    /// Sets both coordinates.
    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.metadata.latitude = Some(latitude);
        self.metadata.longitude = Some(longitude);
        self
    }

    pub fn analysis(mut self, analysis: AiAnalysis) -> Self {
        self.ai_analysis = Some(analysis);
        self
    }

    /// Builds the Photo.
    pub fn build(self) -> Photo {
        Photo {
            id: self.id,
            url: self.url,
            thumbnail_url: self.thumbnail_url,
            metadata: self.metadata,
            ai_analysis: self.ai_analysis,
        }
    }
}

/// Convenience methods on Memory for creating builders.
impl Memory {
    /// Creates a builder for a new memory.
    pub fn builder(
        id: impl Into<MemoryId>,
        title: impl Into<String>,
        date: DateTime<Utc>,
    ) -> MemoryBuilder {
        MemoryBuilder::new(id, title, date)
    }
}
