//! Integration tests for filtering, facets and statistics over the demo dataset.

use chrono::{FixedOffset, Offset, TimeZone, Utc};
use keepsake_core::views::{group_by_year, MapView, PeopleDirectory, ViewerPosition};
use keepsake_core::{
    demo_memories, Facets, FilterEngine, GalleryStats, Memory, MemoryCollection, MemoryFilter,
    MemoryId,
};

fn ids(memories: &[&Memory]) -> Vec<String> {
    memories.iter().map(|m| m.id.to_string()).collect()
}

fn titles(memories: &[&Memory]) -> Vec<String> {
    memories.iter().map(|m| m.title.clone()).collect()
}

#[test]
fn test_year_filter_finds_birthday() {
    let memories = demo_memories();
    let engine = FilterEngine::default();

    let shown = engine.apply(&memories, &MemoryFilter::new().with_year(2018));
    assert_eq!(titles(&shown), vec!["Birthday Celebration at Home"]);
}

#[test]
fn test_query_finds_beach() {
    let memories = demo_memories();
    let engine = FilterEngine::default();

    let shown = engine.apply(&memories, &MemoryFilter::new().with_query("BeAcH"));
    assert_eq!(titles(&shown), vec!["Family Beach Vacation"]);
}

#[test]
fn test_person_filter_counts_emma() {
    let memories = demo_memories();
    let engine = FilterEngine::default();

    let shown = engine.apply(&memories, &MemoryFilter::new().with_person("Emma Smith"));
    assert_eq!(ids(&shown), vec!["1", "2", "3", "5"]);
}

#[test]
fn test_whitespace_query_is_no_constraint() {
    let memories = demo_memories();
    let engine = FilterEngine::default();

    let filter = MemoryFilter::new().with_query("   ");
    assert!(!filter.is_active());
    assert_eq!(engine.apply(&memories, &filter).len(), memories.len());
}

#[test]
fn test_order_is_preserved() {
    let memories = demo_memories();
    let engine = FilterEngine::default();

    let shown = engine.apply(&memories, &MemoryFilter::new().with_location("Home"));
    assert_eq!(ids(&shown), vec!["2", "5"]);

    let everything = engine.apply(&memories, &MemoryFilter::new());
    assert_eq!(ids(&everything), vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn test_adding_constraints_never_grows_result() {
    let memories = demo_memories();
    let engine = FilterEngine::default();

    let steps = [
        MemoryFilter::new().with_person("John Smith"),
        MemoryFilter::new()
            .with_person("John Smith")
            .with_emotion("joyful"),
        MemoryFilter::new()
            .with_person("John Smith")
            .with_emotion("joyful")
            .with_category("Holiday"),
        MemoryFilter::new()
            .with_person("John Smith")
            .with_emotion("joyful")
            .with_category("Holiday")
            .with_year(2015),
    ];

    let mut previous = ids(&engine.apply(&memories, &MemoryFilter::new()));
    for filter in &steps {
        let current = ids(&engine.apply(&memories, filter));
        assert!(current.iter().all(|id| previous.contains(id)));
        previous = current;
    }
    assert!(previous.is_empty());
}

#[test]
fn test_filtering_is_idempotent() {
    let memories = demo_memories();
    let engine = FilterEngine::default();
    let filter = MemoryFilter::new().with_query("home");

    let once: Vec<Memory> = engine.apply(&memories, &filter).into_iter().cloned().collect();
    let twice = engine.apply(&once, &filter);
    let once_ids: Vec<&str> = once.iter().map(|m| m.id.as_str()).collect();
    let twice_ids: Vec<&str> = twice.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(once_ids, twice_ids);
    assert!(!once.is_empty());
}

#[test]
fn test_facets_ignore_active_filter() {
    let collection = MemoryCollection::new(demo_memories());
    let engine = FilterEngine::default();

    let before = Facets::from_memories(collection.as_slice(), engine.offset());
    let shown = collection.filtered(&engine, &MemoryFilter::new().with_year(2016));
    assert_eq!(shown.len(), 1);
    let after = Facets::from_memories(collection.as_slice(), engine.offset());

    assert_eq!(before, after);
    assert_eq!(before.years, vec![2020, 2018, 2017, 2016, 2015]);
    assert_eq!(
        before.locations,
        vec!["Central Park", "Home", "Santa Monica Beach, CA", "University Campus"]
    );
}

#[test]
fn test_demo_statistics() {
    let memories = demo_memories();
    let stats = GalleryStats::compute(&memories, &Utc.fix());

    assert_eq!(stats.total_memories, 5);
    assert_eq!(stats.total_photos, 5);
    assert_eq!(stats.unique_locations, 4);
    assert_eq!(stats.unique_people, 5);
    assert_eq!(
        stats.by_year,
        vec![(2015, 1), (2016, 1), (2017, 1), (2018, 1), (2020, 1)]
    );

    let year_total: usize = stats.by_year.iter().map(|(_, n)| n).sum();
    let category_total: usize = stats.by_category.iter().map(|r| r.count).sum();
    assert_eq!(year_total, stats.total_memories);
    assert_eq!(category_total, stats.total_memories);
}

#[test]
fn test_demo_rankings_break_ties_by_first_appearance() {
    let memories = demo_memories();
    let stats = GalleryStats::compute(&memories, &Utc.fix());

    let emotions: Vec<(&str, usize)> = stats
        .top_emotions
        .iter()
        .map(|r| (r.label.as_str(), r.count))
        .collect();
    assert_eq!(
        emotions,
        vec![("happy", 2), ("joyful", 2), ("peaceful", 2), ("excited", 1), ("loving", 1)]
    );

    let people: Vec<(&str, usize)> = stats
        .top_people
        .iter()
        .map(|r| (r.label.as_str(), r.count))
        .collect();
    assert_eq!(
        people,
        vec![
            ("John Smith", 4),
            ("Emma Smith", 4),
            ("Sarah Johnson", 3),
            ("Michael Johnson", 2),
            ("Sophie Smith", 1),
        ]
    );
}

#[test]
fn test_year_follows_display_zone() {
    let memory = Memory::builder("ny", "New Year", Utc.with_ymd_and_hms(2018, 1, 1, 2, 0, 0).unwrap())
        .build();
    let memories = vec![memory];

    let utc = FilterEngine::default();
    assert_eq!(utc.apply(&memories, &MemoryFilter::new().with_year(2018)).len(), 1);

    let new_york = FilterEngine::new(FixedOffset::west_opt(5 * 3600).unwrap());
    assert_eq!(new_york.apply(&memories, &MemoryFilter::new().with_year(2017)).len(), 1);
    assert_eq!(
        GalleryStats::compute(&memories, new_york.offset()).by_year,
        vec![(2017, 1)]
    );
}

#[test]
fn test_notes_are_replaced_and_searchable() {
    let mut collection = MemoryCollection::new(demo_memories());
    let engine = FilterEngine::default();
    let id = MemoryId::from("4");

    collection.update_notes(&id, "Grandpa loved the ducks").unwrap();
    collection.update_notes(&id, "Bring bread next time").unwrap();

    assert_eq!(
        collection.get(&id).unwrap().user_notes.as_deref(),
        Some("Bring bread next time")
    );
    assert!(collection
        .filtered(&engine, &MemoryFilter::new().with_query("ducks"))
        .is_empty());
    assert_eq!(
        ids(&collection.filtered(&engine, &MemoryFilter::new().with_query("bread"))),
        vec!["4"]
    );
}

#[test]
fn test_views_over_demo_data() {
    let memories = demo_memories();

    let groups = group_by_year(&memories, &Utc.fix());
    let years: Vec<i32> = groups.iter().map(|g| g.year).collect();
    assert_eq!(years, vec![2020, 2018, 2017, 2016, 2015]);

    match MapView::build(&memories, Some("token")) {
        MapView::Ready { markers, .. } => assert_eq!(markers.len(), 5),
        MapView::SetupRequired => panic!("Expected markers with a token"),
    }

    let directory = PeopleDirectory::from_memories(&memories);
    assert_eq!(directory.get("Emma Smith").unwrap().memory_count, 4);
    assert_eq!(directory.get("Michael Johnson").unwrap().initials, "MJ");

    let visible: Vec<&Memory> = memories.iter().collect();
    let last = ViewerPosition::locate(&visible, &"5".into()).unwrap();
    assert!(!last.has_next());
    assert_eq!(last.previous_id(&visible), Some(MemoryId::from("4")));
}
