//! Chronological grouping for the timeline view.

use std::collections::BTreeMap;

use chrono::FixedOffset;
use keepsake_models::Memory;

/// Memories that share a calendar year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearGroup<'a> {
    pub year: i32,
    pub memories: Vec<&'a Memory>,
}

/// Groups memories by year, newest year first.
///
/// Within a group the input order is kept, so the timeline shows whatever
/// order the (possibly filtered) sequence arrived in.
pub fn group_by_year<'a, I>(memories: I, offset: &FixedOffset) -> Vec<YearGroup<'a>>
where
    I: IntoIterator<Item = &'a Memory>,
{
    let mut groups: BTreeMap<i32, Vec<&'a Memory>> = BTreeMap::new();
    for memory in memories {
        groups.entry(memory.year_in(offset)).or_default().push(memory);
    }

    groups
        .into_iter()
        .rev()
        .map(|(year, memories)| YearGroup { year, memories })
        .collect()
}
