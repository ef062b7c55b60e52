//! Command handlers for CLI subcommands.

use std::fs;
use std::path::{Path, PathBuf};

use keepsake_core::views::{group_by_year, ViewerPosition};
use keepsake_core::{demo_memories, result_summary, GalleryConfig, Memory, MemoryId};
use tracing::{debug, info};

use crate::cli::{Commands, FilterArgs, OutputFormat};
use crate::render;
use crate::session::Session;

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Execute a CLI command.
pub fn execute(command: Commands, config: GalleryConfig, data: Option<&Path>) -> Result<()> {
    let session = Session::with_memories(config, load_memories(data)?);

    let output = match command {
        Commands::List { filter, format } => cmd_list(&session, &filter, format)?,
        Commands::Facets { format } => match format {
            OutputFormat::Json => serde_json::to_string_pretty(&session.facets())?,
            _ => render::facets(&session.facets()),
        },
        Commands::Stats { format } => match format {
            OutputFormat::Json => serde_json::to_string_pretty(&session.stats())?,
            _ => render::stats(&session.stats()),
        },
        Commands::Timeline { filter } => cmd_timeline(&session, &filter)?,
        Commands::Map { filter } => cmd_map(session, &filter)?,
        Commands::People { person } => cmd_people(&session, person.as_deref()),
        Commands::Show { id } => cmd_show(&session, &id)?,
        Commands::Repl => {
            // REPL is handled separately in main
            return Ok(());
        }
    };

    println!("{}", output);
    Ok(())
}

/// Loads memories from a JSON file, or the demo dataset without one.
///
/// The file holds an array of memories in the gallery's camelCase export
/// format. `~` and environment variables in the path are expanded.
pub fn load_memories(data: Option<&Path>) -> Result<Vec<Memory>> {
    let Some(path) = data else {
        debug!("No data file given, using demo memories");
        return Ok(demo_memories());
    };

    let path = expand_path(path)?;
    let content = fs::read_to_string(&path)
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
    let memories: Vec<Memory> = serde_json::from_str(&content)
        .map_err(|e| format!("Invalid memory file {}: {}", path.display(), e))?;

    info!(path = %path.display(), count = memories.len(), "Loaded memories");
    Ok(memories)
}

fn expand_path(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let expanded = shellexpand::full(&raw)?;
    Ok(PathBuf::from(expanded.as_ref()))
}

fn apply_filter(session: &mut Session, args: &FilterArgs) -> Result<()> {
    let filter = args.to_filter()?;
    session.replace_filter(filter);
    Ok(())
}

fn cmd_list(session: &Session, args: &FilterArgs, format: OutputFormat) -> Result<String> {
    let filter = args.to_filter()?;
    let visible = session
        .collection()
        .filtered(session.engine(), &filter);
    let offset = session.engine().offset();

    let output = match format {
        OutputFormat::Table => {
            let mut text = render::memory_table(&visible, offset);
            if filter.is_active() {
                text.push_str("\n\n");
                text.push_str(&result_summary(visible.len(), session.collection().len()));
            }
            text
        }
        OutputFormat::Json => serde_json::to_string_pretty(&visible)?,
        OutputFormat::Brief => visible
            .iter()
            .map(|m| format!("{}\t{}", m.id, m.title))
            .collect::<Vec<_>>()
            .join("\n"),
    };

    Ok(output)
}

fn cmd_timeline(session: &Session, args: &FilterArgs) -> Result<String> {
    let filter = args.to_filter()?;
    let visible = session
        .collection()
        .filtered(session.engine(), &filter);
    let offset = session.engine().offset();
    let groups = group_by_year(visible, offset);
    Ok(render::timeline(&groups, offset))
}

fn cmd_map(mut session: Session, args: &FilterArgs) -> Result<String> {
    apply_filter(&mut session, args)?;
    Ok(render::map(&session.map_view()))
}

fn cmd_people(session: &Session, person: Option<&str>) -> String {
    match person {
        Some(person) => render::person_memories(
            person.trim(),
            &session.person_memories(person),
            session.engine().offset(),
        ),
        None => render::people(&session.people_directory()),
    }
}

fn cmd_show(session: &Session, id: &str) -> Result<String> {
    let id = MemoryId::from(id);
    let memory = session
        .collection()
        .get(&id)
        .ok_or_else(|| format!("Memory not found: {}", id))?;

    let visible: Vec<&Memory> = session.collection().iter().collect();
    let position = ViewerPosition::locate(&visible, &id);
    Ok(render::memory_detail(
        memory,
        session.engine().offset(),
        position.as_ref(),
    ))
}
