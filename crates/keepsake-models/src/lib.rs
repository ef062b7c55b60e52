//! Core data models for Keepsake.
//!
//! This crate provides the record types shared by the gallery core and its
//! hosts: memories, the photos attached to them, and their identifiers.

pub mod builders;
pub mod ids;
pub mod memory;
pub mod photo;

// Re-export main types
pub use builders::{MemoryBuilder, PhotoBuilder};
pub use ids::{MemoryId, PhotoId};
pub use memory::Memory;
pub use photo::{AiAnalysis, GeoPoint, Photo, PhotoMetadata};
