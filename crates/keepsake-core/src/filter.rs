//! Memory filtering.
//!
//! A [`MemoryFilter`] is a set of optional criteria combined with logical
//! AND. [`FilterEngine`] applies it to a collection in the configured display
//! zone, which decides the calendar year of each memory.

use chrono::{FixedOffset, Offset, Utc};
use keepsake_models::Memory;
use tracing::debug;

/// Value that stands for "no constraint" when criteria come from user text.
pub const ALL_SENTINEL: &str = "all";

/// Filter criteria for querying memories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryFilter {
    /// Free-text query, matched case-insensitively as a substring.
    pub query: Option<String>,
    /// Calendar year in the display zone.
    pub year: Option<i32>,
    /// Exact location.
    pub location: Option<String>,
    /// Person that must be tagged.
    pub person: Option<String>,
    /// Emotion that must be tagged.
    pub emotion: Option<String>,
    /// Exact category.
    pub category: Option<String>,
}

impl MemoryFilter {
    /// Creates a new empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Sets the year filter.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the location filter.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the person filter.
    pub fn with_person(mut self, person: impl Into<String>) -> Self {
        self.person = Some(person.into());
        self
    }

    /// Sets the emotion filter.
    pub fn with_emotion(mut self, emotion: impl Into<String>) -> Self {
        self.emotion = Some(emotion.into());
        self
    }

    /// Sets the category filter.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Returns the query if it imposes a constraint.
    fn effective_query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.trim().is_empty())
    }

    /// Number of dimensions currently constraining the result.
    pub fn active_count(&self) -> usize {
        [
            self.effective_query().is_some(),
            self.year.is_some(),
            self.location.is_some(),
            self.person.is_some(),
            self.emotion.is_some(),
            self.category.is_some(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    /// Returns true if any dimension is constrained.
    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    /// Removes every constraint.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns true if the memory matches this filter.
    pub fn matches(&self, memory: &Memory, offset: &FixedOffset) -> bool {
        if let Some(query) = self.effective_query() {
            if !matches_query(memory, &query.to_lowercase()) {
                return false;
            }
        }

        if let Some(year) = self.year {
            if memory.year_in(offset) != year {
                return false;
            }
        }

        if let Some(ref location) = self.location {
            if memory.location.as_deref() != Some(location.as_str()) {
                return false;
            }
        }

        if let Some(ref person) = self.person {
            if !memory.has_person(person) {
                return false;
            }
        }

        if let Some(ref emotion) = self.emotion {
            if !memory.has_emotion(emotion) {
                return false;
            }
        }

        if let Some(ref category) = self.category {
            if memory.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }

        true
    }
}

/// Returns true if any searchable field contains `needle` (already lowercase).
fn matches_query(memory: &Memory, needle: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(needle);

    contains(&memory.title)
        || contains(&memory.narrative)
        || memory.location.as_deref().is_some_and(contains)
        || memory.people().iter().any(|p| contains(p))
        || memory.user_notes.as_deref().is_some_and(contains)
}

/// Parses a user-facing select value: blank or `"all"` means unset.
pub fn parse_select(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_SENTINEL) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Applies filters to memory collections.
#[derive(Debug, Clone, Copy)]
pub struct FilterEngine {
    offset: FixedOffset,
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new(Utc.fix())
    }
}

impl FilterEngine {
    /// Creates an engine that extracts years in the given display zone.
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// The display zone used for year extraction.
    pub fn offset(&self) -> &FixedOffset {
        &self.offset
    }

    /// Returns the memories matching `filter`, in their original order.
    pub fn apply<'a>(&self, memories: &'a [Memory], filter: &MemoryFilter) -> Vec<&'a Memory> {
        let result: Vec<&Memory> = memories
            .iter()
            .filter(|m| filter.matches(m, &self.offset))
            .collect();

        debug!(
            total = memories.len(),
            shown = result.len(),
            active = filter.active_count(),
            "Recomputed filtered memories"
        );

        result
    }
}

/// The "Showing N of M memories" line.
pub fn result_summary(shown: usize, total: usize) -> String {
    format!("Showing {} of {} memories", shown, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_memory(id: &str, title: &str, year: i32) -> Memory {
        Memory::builder(id, title, Utc.with_ymd_and_hms(year, 6, 1, 12, 0, 0).unwrap())
            .narrative(format!("{} narrative", title))
            .build()
    }

    fn utc() -> FixedOffset {
        Utc.fix()
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let filter = MemoryFilter::new();
        let memory = make_memory("1", "Picnic", 2015);
        assert!(filter.matches(&memory, &utc()));
        assert!(!filter.is_active());
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let filter = MemoryFilter::new().with_query("PICNIC");
        assert!(filter.matches(&make_memory("1", "Summer picnic", 2015), &utc()));
        assert!(!filter.matches(&make_memory("2", "Graduation", 2015), &utc()));
    }

    #[test]
    fn test_query_searches_optional_fields() {
        let mut memory = make_memory("1", "Day out", 2015);
        memory.location = Some("Santa Monica Beach, CA".to_string());
        memory.people = Some(vec!["Sophie Smith".to_string()]);
        memory.user_notes = Some("Grandpa's hat blew away".to_string());

        for query in ["monica", "sophie", "grandpa", "narrative"] {
            let filter = MemoryFilter::new().with_query(query);
            assert!(filter.matches(&memory, &utc()), "query {query} should match");
        }

        let filter = MemoryFilter::new().with_query("emotion");
        assert!(!filter.matches(&memory, &utc()));
    }

    #[test]
    fn test_whitespace_query_is_no_constraint() {
        let filter = MemoryFilter::new().with_query("   ");
        assert!(filter.matches(&make_memory("1", "Anything", 2015), &utc()));
        assert_eq!(filter.active_count(), 0);
    }

    #[test]
    fn test_filter_by_year() {
        let filter = MemoryFilter::new().with_year(2018);
        assert!(filter.matches(&make_memory("1", "A", 2018), &utc()));
        assert!(!filter.matches(&make_memory("2", "B", 2017), &utc()));
    }

    #[test]
    fn test_year_uses_display_zone() {
        let memory = Memory::builder(
            "1",
            "New Year's Eve",
            Utc.with_ymd_and_hms(2019, 12, 31, 20, 0, 0).unwrap(),
        )
        .build();
        let filter = MemoryFilter::new().with_year(2020);
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();

        assert!(!filter.matches(&memory, &utc()));
        assert!(filter.matches(&memory, &tokyo));
    }

    #[test]
    fn test_filter_by_location_is_exact() {
        let mut memory = make_memory("1", "A", 2015);
        memory.location = Some("Home".to_string());

        assert!(MemoryFilter::new().with_location("Home").matches(&memory, &utc()));
        assert!(!MemoryFilter::new().with_location("home").matches(&memory, &utc()));
        assert!(!MemoryFilter::new()
            .with_location("Home")
            .matches(&make_memory("2", "B", 2015), &utc()));
    }

    #[test]
    fn test_filter_by_person_and_emotion() {
        let mut memory = make_memory("1", "A", 2015);
        memory.people = Some(vec!["Emma Smith".to_string()]);
        memory.emotions = Some(vec!["happy".to_string()]);

        assert!(MemoryFilter::new().with_person("Emma Smith").matches(&memory, &utc()));
        assert!(!MemoryFilter::new().with_person("Emma").matches(&memory, &utc()));
        assert!(MemoryFilter::new().with_emotion("happy").matches(&memory, &utc()));
        assert!(!MemoryFilter::new().with_emotion("sad").matches(&memory, &utc()));

        let untagged = make_memory("2", "B", 2015);
        assert!(!MemoryFilter::new().with_person("Emma Smith").matches(&untagged, &utc()));
        assert!(!MemoryFilter::new().with_emotion("happy").matches(&untagged, &utc()));
    }

    #[test]
    fn test_filter_by_category() {
        let mut memory = make_memory("1", "A", 2015);
        memory.category = Some("Family".to_string());

        assert!(MemoryFilter::new().with_category("Family").matches(&memory, &utc()));
        assert!(!MemoryFilter::new().with_category("Holiday").matches(&memory, &utc()));
    }

    #[test]
    fn test_combined_filters() {
        let mut m1 = make_memory("1", "Beach", 2015);
        m1.category = Some("Family".to_string());
        let mut m2 = make_memory("2", "Beach again", 2016);
        m2.category = Some("Family".to_string());
        let m3 = make_memory("3", "Beach alone", 2015);

        let filter = MemoryFilter::new()
            .with_query("beach")
            .with_year(2015)
            .with_category("Family");

        assert!(filter.matches(&m1, &utc()));
        assert!(!filter.matches(&m2, &utc())); // wrong year
        assert!(!filter.matches(&m3, &utc())); // no category
        assert_eq!(filter.active_count(), 3);
    }

    #[test]
    fn test_clear_removes_all_constraints() {
        let mut filter = MemoryFilter::new().with_query("x").with_year(2000).with_person("P");
        assert!(filter.is_active());
        filter.clear();
        assert_eq!(filter, MemoryFilter::default());
    }

    #[test]
    fn test_apply_preserves_order() {
        let memories = vec![
            make_memory("3", "Gamma", 2015),
            make_memory("1", "Alpha", 2016),
            make_memory("2", "Beta", 2015),
        ];
        let engine = FilterEngine::new(utc());

        let result = engine.apply(&memories, &MemoryFilter::new().with_year(2015));
        let ids: Vec<&str> = result.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2"]);
    }

    #[test]
    fn test_apply_on_empty_collection() {
        let engine = FilterEngine::default();
        assert!(engine.apply(&[], &MemoryFilter::new().with_query("x")).is_empty());
    }

    #[test]
    fn test_parse_select() {
        assert_eq!(parse_select("all"), None);
        assert_eq!(parse_select("ALL"), None);
        assert_eq!(parse_select("  "), None);
        assert_eq!(parse_select(" Home "), Some("Home".to_string()));
    }

    #[test]
    fn test_result_summary() {
        assert_eq!(result_summary(2, 5), "Showing 2 of 5 memories");
    }
}
