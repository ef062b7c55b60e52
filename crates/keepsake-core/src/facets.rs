//! Filter option lists derived from the full collection.
//!
//! Facets are always computed from the unfiltered collection so the options
//! offered to the user never shrink while they filter.

use std::collections::BTreeSet;

use chrono::FixedOffset;
use keepsake_models::Memory;
use serde::Serialize;

/// Distinct values of every filterable dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    /// Years present, newest first.
    pub years: Vec<i32>,
    /// Non-empty locations, ascending.
    pub locations: Vec<String>,
    /// Tagged people, ascending.
    pub people: Vec<String>,
    /// Emotion tags, ascending.
    pub emotions: Vec<String>,
    /// Non-empty categories, ascending.
    pub categories: Vec<String>,
}

impl Facets {
    /// Computes the facets of `memories` with years taken in `offset`.
    pub fn from_memories(memories: &[Memory], offset: &FixedOffset) -> Self {
        let mut years = BTreeSet::new();
        let mut locations = BTreeSet::new();
        let mut people = BTreeSet::new();
        let mut emotions = BTreeSet::new();
        let mut categories = BTreeSet::new();

        for memory in memories {
            years.insert(memory.year_in(offset));
            if let Some(location) = memory.location() {
                locations.insert(location.to_string());
            }
            people.extend(memory.people().iter().cloned());
            emotions.extend(memory.emotions().iter().cloned());
            if let Some(category) = memory.category() {
                categories.insert(category.to_string());
            }
        }

        Self {
            years: years.into_iter().rev().collect(),
            locations: locations.into_iter().collect(),
            people: people.into_iter().collect(),
            emotions: emotions.into_iter().collect(),
            categories: categories.into_iter().collect(),
        }
    }

    /// Returns true if the collection had nothing to offer.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
            && self.locations.is_empty()
            && self.people.is_empty()
            && self.emotions.is_empty()
            && self.categories.is_empty()
    }
}
