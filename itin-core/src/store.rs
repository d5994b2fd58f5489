//! Whole-document persistence to a single JSON file.

use crate::itinerary::ItineraryDocument;
use anyhow::{Context, Result};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tracing::debug;

/// Reads and writes one `ItineraryDocument` at a fixed path.
///
/// There is no partial update: `save` always rewrites the whole file.
#[derive(Debug, Clone)]
pub struct ItineraryStore {
    path: PathBuf,
}

impl ItineraryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the document, or an empty one if the file doesn't exist yet.
    ///
    /// A file that exists but can't be parsed is an error; nothing is recovered from it.
    pub fn load(&self) -> Result<ItineraryDocument> {
        if !self.path.exists() {
            debug!("{} not found, starting empty", self.path.display());
            return Ok(ItineraryDocument::default());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let doc = parse_document(&content)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        debug!("loaded {} ({} days)", self.path.display(), doc.days.len());
        Ok(doc)
    }

    /// Replaces the file with `doc`.
    ///
    /// Writes to a temporary file next to the target and renames it over, so a
    /// reader sees either the old or the new document.
    pub fn save(&self, doc: &ItineraryDocument) -> Result<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)
            .with_context(|| format!("creating parent directory {}", parent.display()))?;

        let json = render_document(doc)?;
        let mut tmp = NamedTempFile::new_in(parent)
            .with_context(|| format!("creating temporary file in {}", parent.display()))?;
        tmp.write_all(json.as_bytes())
            .with_context(|| format!("writing {}", tmp.path().display()))?;
        tmp.as_file()
            .sync_all()
            .with_context(|| format!("flushing {}", tmp.path().display()))?;
        tmp.persist(&self.path)
            .map_err(|e| e.error)
            .with_context(|| format!("replacing {}", self.path.display()))?;

        debug!("saved {} ({} days)", self.path.display(), doc.days.len());
        Ok(())
    }
}

pub fn parse_document(s: &str) -> Result<ItineraryDocument> {
    Ok(serde_json::from_str(s)?)
}

/// Pretty JSON, two-space indent, non-ASCII kept as is.
pub fn render_document(doc: &ItineraryDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}
