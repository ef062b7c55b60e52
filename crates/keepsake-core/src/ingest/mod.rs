//! Upload boundary.
//!
//! Files are classified by MIME type, falling back to the file extension when
//! the host cannot tell. Real photo analysis is out of reach here: any batch
//! with at least one acceptable file is answered with the demo dataset.

pub mod demo;

use std::fmt;
use std::path::Path;

use keepsake_models::Memory;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{GalleryError, Result};

pub use demo::demo_memories;

/// Image extensions accepted when no MIME type is known.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "heic"];

/// Kind of an acceptable upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadKind {
    Image,
    Json,
    Text,
}

impl UploadKind {
    /// Classifies a file, returning `None` for unsupported types.
    ///
    /// A known MIME type decides on its own; the extension is only consulted
    /// when the MIME type is missing or empty.
    pub fn classify(name: &str, mime: Option<&str>) -> Option<Self> {
        match mime.map(str::trim).filter(|m| !m.is_empty()) {
            Some(mime) => Self::from_mime(mime),
            None => Self::from_extension(name),
        }
    }

    fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.to_ascii_lowercase();
        if mime.starts_with("image/") {
            Some(UploadKind::Image)
        } else if mime == "application/json" {
            Some(UploadKind::Json)
        } else if mime == "text/plain" {
            Some(UploadKind::Text)
        } else {
            None
        }
    }

    fn from_extension(name: &str) -> Option<Self> {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())?
            .to_ascii_lowercase();

        match ext.as_str() {
            "json" => Some(UploadKind::Json),
            "txt" => Some(UploadKind::Text),
            e if IMAGE_EXTENSIONS.contains(&e) => Some(UploadKind::Image),
            _ => None,
        }
    }
}

impl fmt::Display for UploadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadKind::Image => write!(f, "image"),
            UploadKind::Json => write!(f, "json"),
            UploadKind::Text => write!(f, "text"),
        }
    }
}

/// A file handed over by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub mime: Option<String>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime: None,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    pub fn kind(&self) -> Option<UploadKind> {
        UploadKind::classify(&self.name, self.mime.as_deref())
    }
}

/// Outcome of an accepted upload batch.
#[derive(Debug, Clone)]
pub struct IngestReport {
    pub batch_id: Uuid,
    /// Accepted files with their kind, in upload order.
    pub accepted: Vec<(String, UploadKind)>,
    /// Names of files that were skipped.
    pub rejected: Vec<String>,
    /// The collection to install in place of the current one.
    pub memories: Vec<Memory>,
}

/// Runs an upload batch.
///
/// Fails with [`GalleryError::UnsupportedUpload`] if no file is acceptable;
/// the caller must then leave its collection untouched.
pub fn ingest(files: &[UploadedFile]) -> Result<IngestReport> {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    for file in files {
        match file.kind() {
            Some(kind) => accepted.push((file.name.clone(), kind)),
            None => rejected.push(file.name.clone()),
        }
    }

    if accepted.is_empty() {
        warn!(rejected = rejected.len(), "No supported files in upload");
        return Err(GalleryError::UnsupportedUpload(
            "please upload images, JSON, or text files".to_string(),
        ));
    }

    let batch_id = Uuid::new_v4();
    info!(
        batch = %batch_id,
        accepted = accepted.len(),
        rejected = rejected.len(),
        "Upload received"
    );
    warn!(batch = %batch_id, "Photo analysis unavailable, loading demo memories");

    Ok(IngestReport {
        batch_id,
        accepted,
        rejected,
        memories: demo_memories(),
    })
}
