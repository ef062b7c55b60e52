//! Photo types attached to memories.
//!
//! Photos carry optional capture metadata and an optional, purely
//! descriptive analysis block. Nothing in the gallery core mutates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::PhotoId;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Capture context recorded for a photo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoMetadata {
    /// When the photo was taken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,

    /// Free-text place name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Camera model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl PhotoMetadata {
    /// Returns the coordinates if both latitude and longitude are present.
    ///
    /// A value of `0.0` is a real coordinate, not an absent one.
    pub fn coordinates(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoPoint {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

/// Descriptive analysis attached to a photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    pub description: String,

    #[serde(default)]
    pub detected_objects: Vec<String>,

    #[serde(default)]
    pub detected_people: Vec<String>,

    #[serde(default)]
    pub emotions: Vec<String>,

    /// Confidence score in the range 0.0 to 1.0.
    pub confidence: f32,
}

/// A photo attached to a memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: PhotoId,

    /// Display/source URL.
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    #[serde(default)]
    pub metadata: PhotoMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<AiAnalysis>,
}

impl Photo {
    /// Creates a photo with empty metadata and no analysis.
    pub fn new(id: impl Into<PhotoId>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            thumbnail_url: None,
            metadata: PhotoMetadata::default(),
            ai_analysis: None,
        }
    }

    /// Returns the thumbnail URL, falling back to the full URL.
    pub fn display_url(&self) -> &str {
        self.thumbnail_url.as_deref().unwrap_or(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_require_both_values() {
        let mut metadata = PhotoMetadata {
            latitude: Some(34.0195),
            ..Default::default()
        };
        assert!(metadata.coordinates().is_none());

        metadata.longitude = Some(-118.4912);
        let point = metadata.coordinates().unwrap();
        assert_eq!(point.latitude, 34.0195);
        assert_eq!(point.longitude, -118.4912);
    }

    #[test]
    fn test_zero_coordinates_are_present() {
        let metadata = PhotoMetadata {
            latitude: Some(0.0),
            longitude: Some(0.0),
            ..Default::default()
        };
        assert!(metadata.coordinates().is_some());
    }

    #[test]
    fn test_display_url_prefers_thumbnail() {
        let mut photo = Photo::new("p1", "/full.jpg");
        assert_eq!(photo.display_url(), "/full.jpg");

        photo.thumbnail_url = Some("/thumb.jpg".to_string());
        assert_eq!(photo.display_url(), "/thumb.jpg");
    }

    #[test]
    fn test_photo_deserializes_camel_case() {
        let json = r#"{
            "id": "p9",
            "url": "/a.jpg",
            "thumbnailUrl": "/a-small.jpg",
            "metadata": { "location": "Home", "latitude": 1.5, "longitude": 2.5 },
            "aiAnalysis": {
                "description": "A room",
                "detectedObjects": ["chair"],
                "detectedPeople": [],
                "emotions": ["calm"],
                "confidence": 0.8
            }
        }"#;

        let photo: Photo = serde_json::from_str(json).unwrap();
        assert_eq!(photo.thumbnail_url.as_deref(), Some("/a-small.jpg"));
        assert_eq!(photo.metadata.location.as_deref(), Some("Home"));
        assert!(photo.metadata.coordinates().is_some());
        assert_eq!(photo.ai_analysis.unwrap().detected_objects, vec!["chair"]);
    }
}
