//! Derived view models.
//!
//! Each view is a read-only projection of the memory collection that a
//! presentation layer can render without further computation.

pub mod ambient;
pub mod map;
pub mod narration;
pub mod navigation;
pub mod people;
pub mod timeline;

pub use ambient::AmbientCursor;
pub use map::{MapMarker, MapView, MapViewport, DEFAULT_VIEWPORT};
pub use narration::{narration_script, NarrationSettings};
pub use navigation::ViewerPosition;
pub use people::{
    add_person, initials, memories_for_person, quick_tag, remove_person, PersonEntry,
    PeopleDirectory,
};
pub use timeline::{group_by_year, YearGroup};
