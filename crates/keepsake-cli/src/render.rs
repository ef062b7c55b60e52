//! Text rendering of gallery views.
//!
//! Every function returns the finished text so both the one-shot commands
//! and the REPL print the same output.

use chrono::FixedOffset;
use keepsake_core::views::{
    initials, narration_script, AmbientCursor, MapView, NarrationSettings, PeopleDirectory,
    ViewerPosition, YearGroup,
};
use keepsake_core::{Facets, GalleryStats, Memory};

/// "July 15, 2015" in the display zone.
pub fn long_date(memory: &Memory, offset: &FixedOffset) -> String {
    memory.local_date(offset).format("%B %-d, %Y").to_string()
}

/// "July 15" in the display zone, used inside a year group.
fn short_date(memory: &Memory, offset: &FixedOffset) -> String {
    memory.local_date(offset).format("%B %-d").to_string()
}

/// Table of memories, one per line.
pub fn memory_table(memories: &[&Memory], offset: &FixedOffset) -> String {
    if memories.is_empty() {
        return "No memories found.".to_string();
    }

    let mut lines = vec![
        format!("{:<6}  {:<30}  {:<18}  {:<24}  PHOTOS", "ID", "TITLE", "DATE", "LOCATION"),
        "-".repeat(90),
    ];
    for memory in memories {
        lines.push(format!(
            "{:<6}  {:<30}  {:<18}  {:<24}  {}",
            truncate(memory.id.as_str(), 6),
            truncate(&memory.title, 30),
            long_date(memory, offset),
            truncate(memory.location().unwrap_or("-"), 24),
            memory.photos.len()
        ));
    }
    lines.join("\n")
}

/// Full viewer page for one memory.
pub fn memory_detail(
    memory: &Memory,
    offset: &FixedOffset,
    position: Option<&ViewerPosition>,
) -> String {
    let mut header = long_date(memory, offset);
    if let Some(location) = memory.location() {
        header.push_str(" • ");
        header.push_str(location);
    }

    let mut lines = vec![header, memory.title.clone(), String::new()];
    lines.push(memory.narrative.clone());

    if !memory.people().is_empty() {
        lines.push(String::new());
        lines.push(format!("People: {}", memory.people().join(", ")));
    }
    if !memory.emotions().is_empty() {
        lines.push(format!("Feelings: {}", memory.emotions().join(", ")));
    }
    if let Some(category) = memory.category() {
        lines.push(format!("Category: {}", category));
    }
    if let Some(photo) = memory.cover_photo() {
        lines.push(format!("Cover: {}", photo.display_url()));
    }

    if let Some(analysis) = memory.cover_photo().and_then(|p| p.ai_analysis.as_ref()) {
        lines.push(String::new());
        lines.push(format!(
            "Photo: {} ({:.0}% confidence)",
            analysis.description,
            analysis.confidence * 100.0
        ));
        if !analysis.detected_objects.is_empty() {
            lines.push(format!("  Objects: {}", analysis.detected_objects.join(", ")));
        }
    }

    lines.push(String::new());
    match memory.user_notes.as_deref().filter(|n| !n.is_empty()) {
        Some(notes) => lines.push(format!("Notes: {}", notes)),
        None => lines.push("Notes: (none)".to_string()),
    }

    if let Some(position) = position {
        let mut nav = Vec::new();
        if position.has_previous() {
            nav.push("/prev");
        }
        if position.has_next() {
            nav.push("/next");
        }
        lines.push(String::new());
        lines.push(format!(
            "[{} of {}] {}",
            position.index + 1,
            position.total,
            nav.join("  ")
        ));
    }

    lines.join("\n")
}

/// Year headers with the memories of each year.
pub fn timeline(groups: &[YearGroup<'_>], offset: &FixedOffset) -> String {
    if groups.is_empty() {
        return "No memories found.".to_string();
    }

    let mut lines = Vec::new();
    for group in groups {
        lines.push(format!("{}", group.year));
        for memory in &group.memories {
            lines.push(format!(
                "  {:<12}  {}  ({})",
                short_date(memory, offset),
                memory.title,
                memory.id
            ));
        }
    }
    lines.join("\n")
}

/// Dashboard figures with simple percentage bars.
pub fn stats(stats: &GalleryStats) -> String {
    let mut lines = vec![
        format!("Memories:   {}", stats.total_memories),
        format!("Photos:     {}", stats.total_photos),
        format!("Locations:  {}", stats.unique_locations),
        format!("People:     {}", stats.unique_people),
    ];

    lines.push(String::new());
    lines.push("By year:".to_string());
    for (year, count) in &stats.by_year {
        lines.push(format!("  {}  {}", year, bar(stats.percent_of_total(*count), *count)));
    }

    lines.push(String::new());
    lines.push("By category:".to_string());
    for entry in &stats.by_category {
        lines.push(format!(
            "  {:<14}  {}",
            truncate(&entry.label, 14),
            bar(stats.percent_of_total(entry.count), entry.count)
        ));
    }

    lines.push(String::new());
    lines.push("Top feelings:".to_string());
    for entry in &stats.top_emotions {
        lines.push(format!("  {:<16}  {}", entry.label, entry.count));
    }

    lines.push(String::new());
    lines.push("Most tagged:".to_string());
    for entry in &stats.top_people {
        lines.push(format!("  {:<16}  {}", entry.label, entry.count));
    }

    lines.join("\n")
}

fn bar(percent: u32, count: usize) -> String {
    let width = (percent as usize) / 5;
    format!("{:<20}  {} ({}%)", "#".repeat(width), count, percent)
}

/// The options of every filter dimension.
pub fn facets(facets: &Facets) -> String {
    let years: Vec<String> = facets.years.iter().map(i32::to_string).collect();
    [
        ("Years", years.join(", ")),
        ("Locations", facets.locations.join(", ")),
        ("People", facets.people.join(", ")),
        ("Feelings", facets.emotions.join(", ")),
        ("Categories", facets.categories.join(", ")),
    ]
    .iter()
    .map(|(label, values)| {
        let values = if values.is_empty() { "-" } else { values.as_str() };
        format!("{:<11} {}", format!("{}:", label), values)
    })
    .collect::<Vec<_>>()
    .join("\n")
}

/// Map markers, or setup instructions when no token is configured.
pub fn map(view: &MapView) -> String {
    match view {
        MapView::SetupRequired => [
            "Map setup required.",
            "Set KEEPSAKE_MAP_TOKEN (or use /map-token <token> in the REPL) to show the map.",
        ]
        .join("\n"),
        MapView::Ready { viewport, markers } => {
            let mut lines = vec![format!(
                "Map centred on {:.4}, {:.4} at zoom {}",
                viewport.center.latitude, viewport.center.longitude, viewport.zoom
            )];
            if markers.is_empty() {
                lines.push("No memories with coordinates.".to_string());
            }
            for marker in markers {
                lines.push(format!(
                    "  ({:>9.4}, {:>10.4})  {}  ({})",
                    marker.position.latitude,
                    marker.position.longitude,
                    marker.title,
                    marker.memory_id
                ));
            }
            lines.join("\n")
        }
    }
}

/// People directory with initials and counts.
pub fn people(directory: &PeopleDirectory) -> String {
    if directory.is_empty() {
        return "No one is tagged yet.".to_string();
    }

    directory
        .entries
        .iter()
        .map(|entry| {
            let noun = if entry.memory_count == 1 { "memory" } else { "memories" };
            format!(
                "  [{:<3}] {:<20}  {} {}",
                entry.initials, entry.name, entry.memory_count, noun
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The memories one person appears in, in collection order.
pub fn person_memories(person: &str, memories: &[&Memory], offset: &FixedOffset) -> String {
    if memories.is_empty() {
        return format!("No memories with {}.", person);
    }

    let noun = if memories.len() == 1 { "memory" } else { "memories" };
    let mut lines = vec![format!(
        "[{}] {} - {} {}",
        initials(person),
        person,
        memories.len(),
        noun
    )];
    lines.extend(memories.iter().map(|m| {
        format!(
            "  {:<4} {:<30}  {}",
            m.id.as_str(),
            truncate(&m.title, 30),
            long_date(m, offset)
        )
    }));
    lines.join("\n")
}

/// One ambient slide.
pub fn ambient(
    memory: &Memory,
    cursor: &AmbientCursor,
    len: usize,
    offset: &FixedOffset,
) -> String {
    let state = if cursor.is_playing() {
        format!("playing, every {}s", cursor.interval().as_secs())
    } else {
        "paused".to_string()
    };

    [
        format!("~ {} ~", memory.title),
        long_date(memory, offset),
        memory.narrative.clone(),
        format!("{} ({})", cursor.position(len), state),
    ]
    .join("\n\n")
}

/// What the speech collaborator would read, with its settings.
pub fn narration(memory: &Memory, settings: &NarrationSettings) -> String {
    format!(
        "{}\n\n(rate {:.1}, pitch {:.1}, volume {:.1})",
        narration_script(memory),
        settings.rate,
        settings.pitch,
        settings.volume
    )
}

/// Truncates a string to `max_len` characters, adding "..." if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Offset, Utc};
    use keepsake_core::demo_memories;
    use keepsake_core::views::{group_by_year, DEFAULT_VIEWPORT};

    #[test]
    fn test_long_date() {
        let memories = demo_memories();
        assert_eq!(long_date(&memories[0], &Utc.fix()), "July 15, 2015");
    }

    #[test]
    fn test_memory_table() {
        let memories = demo_memories();
        let shown: Vec<&Memory> = memories.iter().take(2).collect();
        let table = memory_table(&shown, &Utc.fix());
        assert!(table.contains("Family Beach Vacation"));
        assert!(table.contains("March 22, 2018"));
        assert_eq!(table.lines().count(), 4);

        assert_eq!(memory_table(&[], &Utc.fix()), "No memories found.");
    }

    #[test]
    fn test_memory_detail_navigation() {
        let memories = demo_memories();
        let visible: Vec<&Memory> = memories.iter().collect();
        let position = ViewerPosition::locate(&visible, &"1".into()).unwrap();

        let page = memory_detail(&memories[0], &Utc.fix(), Some(&position));
        assert!(page.starts_with("July 15, 2015 • Santa Monica Beach, CA"));
        assert!(page.contains("[1 of 5] /next"));
        assert!(!page.contains("/prev"));
        assert!(page.contains("Notes: (none)"));
        assert!(page.contains("92% confidence"));
        assert!(page.contains("Cover: /placeholder.svg"));
    }

    #[test]
    fn test_memory_detail_prefers_thumbnail() {
        let mut memory = demo_memories().remove(0);
        memory.photos[0].thumbnail_url = Some("/thumbs/beach.jpg".to_string());
        let page = memory_detail(&memory, &Utc.fix(), None);
        assert!(page.contains("Cover: /thumbs/beach.jpg"));
    }

    #[test]
    fn test_timeline() {
        let memories = demo_memories();
        let groups = group_by_year(&memories, &Utc.fix());
        let text = timeline(&groups, &Utc.fix());
        let first_line = text.lines().next().unwrap();
        assert_eq!(first_line, "2020");
        assert!(text.contains("October 8"));
    }

    #[test]
    fn test_map_setup() {
        assert!(map(&MapView::SetupRequired).contains("KEEPSAKE_MAP_TOKEN"));

        let ready = MapView::Ready {
            viewport: DEFAULT_VIEWPORT,
            markers: Vec::new(),
        };
        assert!(map(&ready).contains("No memories with coordinates."));
    }

    #[test]
    fn test_facets_placeholder() {
        let text = facets(&Facets::default());
        assert_eq!(text.lines().count(), 5);
        assert!(text.lines().all(|l| l.ends_with('-')));
    }

    #[test]
    fn test_person_memories() {
        let memories = demo_memories();
        let sophie: Vec<&Memory> = memories
            .iter()
            .filter(|m| m.has_person("Sophie Smith"))
            .collect();
        let text = person_memories("Sophie Smith", &sophie, &Utc.fix());
        assert!(text.starts_with("[SS] Sophie Smith - 1 memory"));
        assert!(text.contains("Family Beach Vacation"));
        assert!(text.contains("July 15, 2015"));

        assert_eq!(person_memories("Ann", &[], &Utc.fix()), "No memories with Ann.");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("hi", 2), "hi");
        assert_eq!(truncate("Zoë Zoë Zoë", 6), "Zoë...");
    }
}
