//! Keepsake Core - gallery logic shared by every Keepsake host.
//!
//! This crate holds everything a host needs to present a memory gallery
//! without doing any computation of its own:
//!
//! - **collection**: The canonical, ordered memory collection and its mutations
//! - **filter**: Multi-criteria filtering with a free-text query
//! - **facets**: Filter option lists drawn from the full collection
//! - **stats**: Dashboard statistics and top-N rankings
//! - **views**: Timeline, map, people, viewer, ambient and narration models
//! - **ingest**: Upload classification and the demo dataset
//! - **config**: Startup configuration from `.env.local` and the environment
//!
//! # Example
//!
//! ```
//! use keepsake_core::{demo_memories, FilterEngine, GalleryStats, MemoryCollection, MemoryFilter};
//!
//! let collection = MemoryCollection::new(demo_memories());
//! let engine = FilterEngine::default();
//!
//! let filter = MemoryFilter::new().with_query("beach");
//! let shown = collection.filtered(&engine, &filter);
//! assert_eq!(shown[0].title, "Family Beach Vacation");
//!
//! let stats = GalleryStats::compute(collection.as_slice(), engine.offset());
//! assert_eq!(stats.total_memories, 5);
//! ```

pub mod collection;
pub mod config;
pub mod error;
pub mod facets;
pub mod filter;
pub mod ingest;
pub mod stats;
pub mod views;

pub use collection::MemoryCollection;
pub use config::{GalleryConfig, Theme};
pub use error::{GalleryError, Result};
pub use facets::Facets;
pub use filter::{parse_select, result_summary, FilterEngine, MemoryFilter, ALL_SENTINEL};
pub use ingest::{demo_memories, ingest, IngestReport, UploadKind, UploadedFile};
pub use stats::{GalleryStats, Ranked, TOP_N, UNCATEGORIZED};

// Re-export the record types so hosts need only one dependency
pub use keepsake_models::{Memory, MemoryId, Photo};
