//! Map markers for memories with known coordinates.
//!
//! Tile rendering belongs to the map provider; this module only decides
//! which memories get a marker and where.

use chrono::{DateTime, Utc};
use keepsake_models::{GeoPoint, Memory, MemoryId};

/// Initial map viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    pub center: GeoPoint,
    pub zoom: f32,
}

/// Continental United States at zoom 3.
pub const DEFAULT_VIEWPORT: MapViewport = MapViewport {
    center: GeoPoint {
        latitude: 39.8283,
        longitude: -98.5795,
    },
    zoom: 3.0,
};

/// A marker placed for one memory.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub memory_id: MemoryId,
    pub title: String,
    pub date: DateTime<Utc>,
    pub position: GeoPoint,
}

impl MapMarker {
    /// Builds a marker from the cover photo's coordinates, if it has any.
    pub fn for_memory(memory: &Memory) -> Option<Self> {
        let position = memory.cover_photo()?.metadata.coordinates()?;
        Some(Self {
            memory_id: memory.id.clone(),
            title: memory.title.clone(),
            date: memory.date,
            position,
        })
    }
}

/// What the map view can show.
#[derive(Debug, Clone, PartialEq)]
pub enum MapView {
    /// No provider token is configured; the user has to supply one first.
    SetupRequired,
    /// Markers ready for the provider.
    Ready {
        viewport: MapViewport,
        markers: Vec<MapMarker>,
    },
}

impl MapView {
    /// Builds the map view for `memories` given the configured token.
    pub fn build<'a, I>(memories: I, token: Option<&str>) -> Self
    where
        I: IntoIterator<Item = &'a Memory>,
    {
        if token.map_or(true, |t| t.trim().is_empty()) {
            return MapView::SetupRequired;
        }

        MapView::Ready {
            viewport: DEFAULT_VIEWPORT,
            markers: markers(memories),
        }
    }
}

/// Markers for every memory whose cover photo has coordinates, in input order.
pub fn markers<'a, I>(memories: I) -> Vec<MapMarker>
where
    I: IntoIterator<Item = &'a Memory>,
{
    memories.into_iter().filter_map(MapMarker::for_memory).collect()
}
