//! People directory and tagging helpers.
//!
//! The helpers never mutate a memory. They return the complete new people
//! list, which the host hands to `MemoryCollection::update_people`.

use std::collections::BTreeMap;

use keepsake_models::Memory;

/// One person in the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonEntry {
    pub name: String,
    pub initials: String,
    /// Number of memories the person is tagged in.
    pub memory_count: usize,
}

/// Everyone tagged anywhere in the collection, ascending by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeopleDirectory {
    pub entries: Vec<PersonEntry>,
}

impl PeopleDirectory {
    /// Builds the directory from the full collection.
    pub fn from_memories(memories: &[Memory]) -> Self {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for memory in memories {
            let mut names: Vec<&str> = memory.people().iter().map(String::as_str).collect();
            names.sort_unstable();
            names.dedup();
            for name in names {
                *counts.entry(name).or_insert(0) += 1;
            }
        }

        let entries = counts
            .into_iter()
            .map(|(name, memory_count)| PersonEntry {
                name: name.to_string(),
                initials: initials(name),
                memory_count,
            })
            .collect();

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&PersonEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

/// Memories a person is tagged in, in collection order.
pub fn memories_for_person<'a>(memories: &'a [Memory], person: &str) -> Vec<&'a Memory> {
    memories.iter().filter(|m| m.has_person(person)).collect()
}

/// Uppercase first letters of each space-separated word.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// New people list with `name` appended.
///
/// The name is trimmed; blank names and names already present yield `None`,
/// meaning there is nothing to save.
pub fn add_person(memory: &Memory, name: &str) -> Option<Vec<String>> {
    let name = name.trim();
    if name.is_empty() || memory.has_person(name) {
        return None;
    }

    let mut people = memory.people().to_vec();
    people.push(name.to_string());
    Some(people)
}

/// New people list with every occurrence of `name` removed.
pub fn remove_person(memory: &Memory, name: &str) -> Vec<String> {
    memory
        .people()
        .iter()
        .filter(|p| p.as_str() != name)
        .cloned()
        .collect()
}

/// New people list with an already-known person tagged, if not present yet.
pub fn quick_tag(memory: &Memory, name: &str) -> Option<Vec<String>> {
    if memory.has_person(name) {
        return None;
    }

    let mut people = memory.people().to_vec();
    people.push(name.to_string());
    Some(people)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn memory(id: &str, people: &[&str]) -> Memory {
        Memory::builder(id, id, Utc.with_ymd_and_hms(2017, 12, 24, 0, 0, 0).unwrap())
            .people(people.iter().copied())
            .build()
    }

    #[test]
    fn test_directory_sorted_with_counts() {
        let memories = vec![
            memory("1", &["John Smith", "Emma Smith"]),
            memory("2", &["Emma Smith", "Emma Smith"]),
            Memory::builder("3", "untagged", Utc.with_ymd_and_hms(2017, 1, 1, 0, 0, 0).unwrap())
                .build(),
        ];

        let directory = PeopleDirectory::from_memories(&memories);
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.entries[0].name, "Emma Smith");
        assert_eq!(directory.entries[0].memory_count, 2);
        assert_eq!(directory.entries[0].initials, "ES");
        assert_eq!(directory.get("John Smith").unwrap().memory_count, 1);
        assert!(directory.get("Nobody").is_none());
    }

    #[test]
    fn test_memories_for_person() {
        let memories = vec![memory("1", &["Ann"]), memory("2", &["Bob"]), memory("3", &["Ann"])];
        let ids: Vec<&str> = memories_for_person(&memories, "Ann")
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("cher"), "C");
        assert_eq!(initials("Mary  Ann"), "MA");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_add_person() {
        let m = memory("1", &["Ann"]);
        assert_eq!(add_person(&m, "  Bob "), Some(vec!["Ann".to_string(), "Bob".to_string()]));
        assert_eq!(add_person(&m, "Ann"), None);
        assert_eq!(add_person(&m, "   "), None);

        let untagged = Memory::builder("2", "x", Utc.with_ymd_and_hms(2017, 1, 1, 0, 0, 0).unwrap())
            .build();
        assert_eq!(add_person(&untagged, "Ann"), Some(vec!["Ann".to_string()]));
    }

    #[test]
    fn test_remove_person() {
        let m = memory("1", &["Ann", "Bob", "Ann"]);
        assert_eq!(remove_person(&m, "Ann"), vec!["Bob".to_string()]);
        assert_eq!(remove_person(&m, "Zed").len(), 3);
    }

    #[test]
    fn test_quick_tag() {
        let m = memory("1", &["Ann"]);
        assert_eq!(quick_tag(&m, "Ann"), None);
        assert_eq!(quick_tag(&m, "Bob"), Some(vec!["Ann".to_string(), "Bob".to_string()]));
    }
}
