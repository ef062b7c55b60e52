//! Command-line interface definition using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use keepsake_core::{parse_select, MemoryFilter};

/// Build version string with git hash and build date.
fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const BUILD_DATE: &str = env!("BUILD_DATE");

    // Format: "0.1.0 (abc1234, 2026-01-29)"
    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} ({}, {})", VERSION, GIT_HASH, BUILD_DATE))
}

/// Keepsake - a narrated memory gallery
#[derive(Parser, Debug)]
#[command(name = "keepsake")]
#[command(author, version = version_string(), about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to state directory
    #[arg(short, long, env = "KEEPSAKE_STATE_DIR", global = true)]
    pub state_dir: Option<PathBuf>,

    /// JSON file with memories to load instead of the demo dataset
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List memories matching the filters
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output format (table, json, brief)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show the values available for each filter
    Facets {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show collection statistics
    Stats {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show memories grouped by year
    Timeline {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show map markers
    Map {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show everyone tagged in the collection, or one person's memories
    People {
        /// List the memories this person is tagged in
        #[arg(short, long)]
        person: Option<String>,
    },

    /// Show one memory in full
    Show {
        /// Memory ID
        #[arg(required = true)]
        id: String,
    },

    /// Start interactive REPL mode
    Repl,
}

/// Filter flags shared by the listing commands.
///
/// Every flag accepts `all` to mean "no constraint".
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Free-text search over title, narrative, location, people and notes
    #[arg(short, long)]
    pub query: Option<String>,

    /// Calendar year
    #[arg(short, long)]
    pub year: Option<String>,

    /// Exact location
    #[arg(short, long)]
    pub location: Option<String>,

    /// Tagged person
    #[arg(short, long)]
    pub person: Option<String>,

    /// Emotion tag
    #[arg(short, long)]
    pub emotion: Option<String>,

    /// Exact category
    #[arg(short, long)]
    pub category: Option<String>,
}

impl FilterArgs {
    /// Converts the flags into filter criteria.
    pub fn to_filter(&self) -> Result<MemoryFilter, String> {
        let mut filter = MemoryFilter::new();

        if let Some(query) = &self.query {
            filter = filter.with_query(query.clone());
        }
        if let Some(year) = self.year.as_deref().and_then(parse_select) {
            let year = year
                .parse::<i32>()
                .map_err(|_| format!("Invalid year: {}", year))?;
            filter = filter.with_year(year);
        }
        filter.location = self.location.as_deref().and_then(parse_select);
        filter.person = self.person.as_deref().and_then(parse_select);
        filter.emotion = self.emotion.as_deref().and_then(parse_select);
        filter.category = self.category.as_deref().and_then(parse_select);

        Ok(filter)
    }
}

/// Output format for list commands
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Brief,
}

impl Cli {
    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
