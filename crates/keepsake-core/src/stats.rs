//! Dashboard statistics over the full memory collection.
//!
//! Every figure is recomputed from scratch on each call. Records without a
//! usable id are skipped by all figures so one malformed record never takes
//! the dashboard down.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::FixedOffset;
use keepsake_models::Memory;
use serde::Serialize;
use tracing::{debug, warn};

/// Label used for memories without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Number of entries kept in the top-N rankings.
pub const TOP_N: usize = 5;

/// A label with its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranked {
    pub label: String,
    pub count: usize,
}

impl Ranked {
    fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Summary figures for the statistics view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryStats {
    pub total_memories: usize,
    pub total_photos: usize,
    pub unique_locations: usize,
    pub unique_people: usize,
    /// Memories per calendar year, ascending by year.
    pub by_year: Vec<(i32, usize)>,
    /// Memories per category, in first-seen order.
    pub by_category: Vec<Ranked>,
    /// Most frequent emotions, at most [`TOP_N`].
    pub top_emotions: Vec<Ranked>,
    /// Most frequently tagged people, at most [`TOP_N`].
    pub top_people: Vec<Ranked>,
}

impl GalleryStats {
    /// Computes all statistics for `memories` with years taken in `offset`.
    pub fn compute(memories: &[Memory], offset: &FixedOffset) -> Self {
        let valid: Vec<&Memory> = memories.iter().filter(|m| !m.id.is_blank()).collect();
        let skipped = memories.len() - valid.len();
        if skipped > 0 {
            warn!(skipped, "Skipping memories without an id in statistics");
        }

        let stats = Self {
            total_memories: valid.len(),
            total_photos: valid.iter().map(|m| m.photos.len()).sum(),
            unique_locations: valid
                .iter()
                .filter_map(|m| m.location())
                .collect::<HashSet<_>>()
                .len(),
            unique_people: valid
                .iter()
                .flat_map(|m| m.people())
                .collect::<HashSet<_>>()
                .len(),
            by_year: count_by_year(&valid, offset),
            by_category: count_by_category(&valid),
            top_emotions: top_n(&valid, Memory::emotions, TOP_N),
            top_people: top_n(&valid, Memory::people, TOP_N),
        };

        debug!(
            total = stats.total_memories,
            photos = stats.total_photos,
            "Computed gallery statistics"
        );

        stats
    }

    /// Share of `count` in the total, as a whole percentage.
    pub fn percent_of_total(&self, count: usize) -> u32 {
        if self.total_memories == 0 {
            return 0;
        }
        ((count as f64 / self.total_memories as f64) * 100.0).round() as u32
    }
}

fn count_by_year(memories: &[&Memory], offset: &FixedOffset) -> Vec<(i32, usize)> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for memory in memories {
        *counts.entry(memory.year_in(offset)).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

fn count_by_category(memories: &[&Memory]) -> Vec<Ranked> {
    let mut counter = OrderedCounter::default();
    for memory in memories {
        counter.add(memory.category().unwrap_or(UNCATEGORIZED));
    }
    counter.into_ranked()
}

/// Counts each tag once per memory and keeps the `n` most frequent.
///
/// Ties keep the order in which tags were first seen in the collection.
fn top_n<F>(memories: &[&Memory], tags: F, n: usize) -> Vec<Ranked>
where
    F: Fn(&Memory) -> &[String],
{
    let mut counter = OrderedCounter::default();
    for &memory in memories {
        let mut seen = HashSet::new();
        for tag in tags(memory) {
            if seen.insert(tag.as_str()) {
                counter.add(tag);
            }
        }
    }

    let mut ranked = counter.into_ranked();
    // Stable sort keeps first-seen order among equal counts.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(n);
    ranked
}

/// Counter that remembers the order in which labels first appeared.
#[derive(Default)]
struct OrderedCounter {
    index: HashMap<String, usize>,
    entries: Vec<Ranked>,
}

impl OrderedCounter {
    fn add(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push(Ranked::new(label, 1));
            }
        }
    }

    fn into_ranked(self) -> Vec<Ranked> {
        self.entries
    }
}
