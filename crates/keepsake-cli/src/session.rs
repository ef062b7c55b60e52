//! Gallery session state owned by the host.
//!
//! The session is the only place that holds mutable state. Commands turn
//! user input into intents on the session; everything shown on screen is
//! derived from it again afterwards.

use std::fmt;
use std::str::FromStr;

use keepsake_core::views::{
    add_person, memories_for_person, quick_tag, remove_person, AmbientCursor, MapView,
    PeopleDirectory, ViewerPosition,
};
use keepsake_core::{
    demo_memories, ingest, Facets, FilterEngine, GalleryConfig, GalleryError, GalleryStats,
    Memory, MemoryCollection, MemoryFilter, MemoryId, UploadedFile,
};
use tracing::{debug, info};

/// Which top-level view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Nothing loaded yet.
    #[default]
    Upload,
    Memories,
    Timeline,
    Map,
    People,
    Stats,
}

impl ViewMode {
    pub const ALL: &'static [ViewMode] = &[
        ViewMode::Upload,
        ViewMode::Memories,
        ViewMode::Timeline,
        ViewMode::Map,
        ViewMode::People,
        ViewMode::Stats,
    ];
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewMode::Upload => "upload",
            ViewMode::Memories => "memories",
            ViewMode::Timeline => "timeline",
            ViewMode::Map => "map",
            ViewMode::People => "people",
            ViewMode::Stats => "stats",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upload" => Ok(ViewMode::Upload),
            "memories" | "grid" | "m" => Ok(ViewMode::Memories),
            "timeline" | "t" => Ok(ViewMode::Timeline),
            "map" => Ok(ViewMode::Map),
            "people" | "p" => Ok(ViewMode::People),
            "stats" | "statistics" | "s" => Ok(ViewMode::Stats),
            other => Err(format!("Unknown view: {}", other)),
        }
    }
}

/// A filter dimension the user can set from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Year,
    Location,
    Person,
    Emotion,
    Category,
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// All state of one gallery session.
pub struct Session {
    config: GalleryConfig,
    engine: FilterEngine,
    collection: MemoryCollection,
    filter: MemoryFilter,
    view: ViewMode,
    selected: Option<MemoryId>,
    ambient: Option<AmbientCursor>,
    map_token: Option<String>,
}

impl Session {
    /// Creates an empty session showing the upload view.
    pub fn new(config: GalleryConfig) -> Self {
        let engine = FilterEngine::new(config.display_offset);
        let map_token = config.map_token.clone();
        Self {
            config,
            engine,
            collection: MemoryCollection::default(),
            filter: MemoryFilter::new(),
            view: ViewMode::Upload,
            selected: None,
            ambient: None,
            map_token,
        }
    }

    /// Creates a session that already shows `memories`.
    pub fn with_memories(config: GalleryConfig, memories: Vec<Memory>) -> Self {
        let mut session = Self::new(config);
        session.load(memories);
        session
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn engine(&self) -> &FilterEngine {
        &self.engine
    }

    pub fn collection(&self) -> &MemoryCollection {
        &self.collection
    }

    pub fn filter(&self) -> &MemoryFilter {
        &self.filter
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn selected(&self) -> Option<&Memory> {
        self.selected.as_ref().and_then(|id| self.collection.get(id))
    }

    pub fn ambient(&self) -> Option<&AmbientCursor> {
        self.ambient.as_ref()
    }

    fn load(&mut self, memories: Vec<Memory>) {
        self.collection.replace_all(memories);
        self.filter.clear();
        self.selected = None;
        self.ambient = None;
        self.view = ViewMode::Memories;
    }

    /// Loads the demo dataset and switches to the memories view.
    pub fn enter_demo(&mut self) {
        info!("Entering demo mode");
        self.load(demo_memories());
    }

    /// Runs an upload. On rejection nothing changes.
    pub fn upload(&mut self, names: &[String]) -> Result<usize> {
        let files: Vec<UploadedFile> = names.iter().map(UploadedFile::new).collect();
        let report = ingest(&files)?;
        let accepted = report.accepted.len();
        self.load(report.memories);
        Ok(accepted)
    }

    pub fn set_view(&mut self, view: ViewMode) {
        debug!(%view, "Switching view");
        self.view = view;
    }

    /// Memories passing the current filter, in collection order.
    pub fn visible(&self) -> Vec<&Memory> {
        self.collection.filtered(&self.engine, &self.filter)
    }

    pub fn facets(&self) -> Facets {
        Facets::from_memories(self.collection.as_slice(), self.engine.offset())
    }

    pub fn stats(&self) -> GalleryStats {
        GalleryStats::compute(self.collection.as_slice(), self.engine.offset())
    }

    pub fn people_directory(&self) -> PeopleDirectory {
        PeopleDirectory::from_memories(self.collection.as_slice())
    }

    /// Every memory `person` is tagged in, ignoring the active filter.
    pub fn person_memories(&self, person: &str) -> Vec<&Memory> {
        memories_for_person(self.collection.as_slice(), person.trim())
    }

    /// Map over the visible memories with the session's token.
    pub fn map_view(&self) -> MapView {
        MapView::build(self.visible(), self.map_token.as_deref())
    }

    /// Sets the map token for this session.
    pub fn set_map_token(&mut self, token: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err("map token cannot be empty".into());
        }
        self.map_token = Some(token.to_string());
        Ok(())
    }

    /// Sets the free-text query; an empty query removes the constraint.
    pub fn set_query(&mut self, query: &str) {
        self.filter.query = Some(query.to_string()).filter(|q| !q.trim().is_empty());
    }

    /// Sets one dimension from user text, where blank or `all` unsets it.
    pub fn set_filter(&mut self, field: FilterField, value: &str) -> Result<()> {
        let value = keepsake_core::parse_select(value);
        match field {
            FilterField::Year => {
                self.filter.year = match value {
                    Some(year) => Some(
                        year.parse::<i32>()
                            .map_err(|_| format!("Invalid year: {}", year))?,
                    ),
                    None => None,
                }
            }
            FilterField::Location => self.filter.location = value,
            FilterField::Person => self.filter.person = value,
            FilterField::Emotion => self.filter.emotion = value,
            FilterField::Category => self.filter.category = value,
        }
        Ok(())
    }

    pub fn replace_filter(&mut self, filter: MemoryFilter) {
        self.filter = filter;
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    /// Opens a memory in the viewer.
    pub fn open(&mut self, id: &str) -> Result<()> {
        let id = MemoryId::from(id);
        if self.collection.get(&id).is_none() {
            return Err(GalleryError::MemoryNotFound(id.to_string()).into());
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Position of the open memory among the visible ones.
    pub fn position(&self) -> Option<ViewerPosition> {
        let selected = self.selected.as_ref()?;
        ViewerPosition::locate(&self.visible(), selected)
    }

    /// Moves the viewer forward. Returns false at the end of the sequence.
    pub fn next(&mut self) -> bool {
        let next = self.position().and_then(|pos| pos.next_id(&self.visible()));
        self.step_to(next)
    }

    /// Moves the viewer back. Returns false at the start of the sequence.
    pub fn previous(&mut self) -> bool {
        let previous = self
            .position()
            .and_then(|pos| pos.previous_id(&self.visible()));
        self.step_to(previous)
    }

    fn step_to(&mut self, id: Option<MemoryId>) -> bool {
        match id {
            Some(id) => {
                self.selected = Some(id);
                true
            }
            None => false,
        }
    }

    fn selected_id(&self) -> Result<MemoryId> {
        self.selected
            .clone()
            .ok_or_else(|| "No memory open. Use /open <id> first.".into())
    }

    /// Replaces the notes of the open memory.
    pub fn save_notes(&mut self, notes: &str) -> Result<()> {
        let id = self.selected_id()?;
        self.collection.update_notes(&id, notes)?;
        Ok(())
    }

    /// Tags a person on the open memory. Returns false if nothing changed.
    pub fn tag(&mut self, name: &str) -> Result<bool> {
        let id = self.selected_id()?;
        let people = self.selected().and_then(|m| {
            if self.people_directory().get(name.trim()).is_some() {
                quick_tag(m, name.trim())
            } else {
                add_person(m, name)
            }
        });
        match people {
            Some(people) => {
                self.collection.update_people(&id, people)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes a person from the open memory. Returns false if not tagged.
    pub fn untag(&mut self, name: &str) -> Result<bool> {
        let id = self.selected_id()?;
        let Some(memory) = self.selected() else {
            return Ok(false);
        };
        if !memory.has_person(name) {
            return Ok(false);
        }
        let people = remove_person(memory, name);
        self.collection.update_people(&id, people)?;
        Ok(true)
    }

    /// Starts the ambient slideshow from the first memory.
    pub fn start_ambient(&mut self) -> Result<()> {
        if self.collection.is_empty() {
            return Err("Nothing to show. Load memories with /demo or /upload first.".into());
        }
        let mut cursor = AmbientCursor::new(self.config.ambient_interval);
        cursor.reset();
        self.ambient = Some(cursor);
        Ok(())
    }

    pub fn stop_ambient(&mut self) {
        self.ambient = None;
    }

    /// Applies `f` to the running slideshow.
    pub fn with_ambient<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut AmbientCursor, usize),
    {
        let len = self.collection.len();
        let cursor = self
            .ambient
            .as_mut()
            .ok_or("Ambient mode is not running. Use /ambient first.")?;
        f(cursor, len);
        Ok(())
    }

    /// The memory currently shown by the slideshow.
    pub fn ambient_memory(&self) -> Option<&Memory> {
        self.ambient
            .as_ref()
            .and_then(|c| c.current(self.collection.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_session() -> Session {
        Session::with_memories(GalleryConfig::default(), demo_memories())
    }

    #[test]
    fn test_new_session_shows_upload() {
        let session = Session::new(GalleryConfig::default());
        assert_eq!(session.view(), ViewMode::Upload);
        assert!(session.visible().is_empty());
    }

    #[test]
    fn test_view_mode_parse() {
        assert_eq!("Timeline".parse::<ViewMode>().unwrap(), ViewMode::Timeline);
        assert_eq!("grid".parse::<ViewMode>().unwrap(), ViewMode::Memories);
        assert_eq!(
            "gallery".parse::<ViewMode>().unwrap_err(),
            "Unknown view: gallery"
        );
        for mode in ViewMode::ALL {
            assert_eq!(mode.to_string().parse::<ViewMode>().unwrap(), *mode);
        }
    }

    #[test]
    fn test_filters_from_text() {
        let mut session = demo_session();
        session.set_filter(FilterField::Year, "2018").unwrap();
        assert_eq!(session.visible().len(), 1);

        session.set_filter(FilterField::Year, "all").unwrap();
        assert_eq!(session.visible().len(), 5);

        assert!(session.set_filter(FilterField::Year, "soon").is_err());

        session.set_query("park");
        assert_eq!(session.visible()[0].id.as_str(), "4");
        session.set_query("  ");
        assert!(session.filter().query.is_none());
    }

    #[test]
    fn test_viewer_steps_through_filtered_sequence() {
        let mut session = demo_session();
        session.set_filter(FilterField::Location, "Home").unwrap();
        session.open("2").unwrap();

        assert!(!session.previous());
        assert!(session.next());
        assert_eq!(session.selected().unwrap().id.as_str(), "5");
        assert!(!session.next());
        assert_eq!(session.position().unwrap().index, 1);

        assert!(session.open("42").is_err());
    }

    #[test]
    fn test_notes_and_tags() {
        let mut session = demo_session();
        assert!(session.save_notes("x").is_err());

        session.open("4").unwrap();
        session.save_notes("Grandpa's favourite walk").unwrap();
        assert_eq!(
            session.selected().unwrap().user_notes.as_deref(),
            Some("Grandpa's favourite walk")
        );

        assert!(session.tag(" Emma Smith ").unwrap());
        assert!(!session.tag("Emma Smith").unwrap());
        assert!(session.tag("New Friend").unwrap());
        assert_eq!(
            session.selected().unwrap().people(),
            ["John Smith", "Emma Smith", "New Friend"].map(String::from)
        );

        assert!(session.untag("John Smith").unwrap());
        assert!(!session.untag("John Smith").unwrap());
    }

    #[test]
    fn test_upload_rejection_keeps_state() {
        let mut session = demo_session();
        session.open("1").unwrap();

        let err = session.upload(&["notes.pdf".to_string()]).unwrap_err();
        assert!(err.to_string().contains("unsupported upload"));
        assert_eq!(session.selected().unwrap().id.as_str(), "1");

        let accepted = session
            .upload(&["a.jpg".to_string(), "b.txt".to_string()])
            .unwrap();
        assert_eq!(accepted, 2);
        assert!(session.selected().is_none());
        assert_eq!(session.view(), ViewMode::Memories);
    }

    #[test]
    fn test_ambient_cycle() {
        let mut empty = Session::new(GalleryConfig::default());
        assert!(empty.start_ambient().is_err());

        let mut session = demo_session();
        assert!(session.with_ambient(|c, len| c.advance(len)).is_err());

        session.start_ambient().unwrap();
        assert_eq!(session.ambient_memory().unwrap().id.as_str(), "1");
        for _ in 0..5 {
            session.with_ambient(|c, len| c.advance(len)).unwrap();
        }
        assert_eq!(session.ambient_memory().unwrap().id.as_str(), "1");

        session.stop_ambient();
        assert!(session.ambient().is_none());
    }

    #[test]
    fn test_person_memories_ignore_filter() {
        let mut session = demo_session();
        session.set_filter(FilterField::Year, "2015").unwrap();

        let ids: Vec<&str> = session
            .person_memories(" Emma Smith ")
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "5"]);
        assert!(session.person_memories("Nobody").is_empty());
    }

    #[test]
    fn test_map_token() {
        let mut session = demo_session();
        assert_eq!(session.map_view(), MapView::SetupRequired);
        assert!(session.set_map_token("  ").is_err());
        session.set_map_token("pk.abc").unwrap();
        assert!(matches!(session.map_view(), MapView::Ready { .. }));
    }
}
