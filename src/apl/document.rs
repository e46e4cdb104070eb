//! APL documents loaded from disk at request time.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SkillError;

/// Well-known document file names.
pub mod documents {
    pub const PAGER: &str = "pager.json";
    pub const KARAOKE: &str = "karaoke.json";
    pub const DEVICES: &str = "devices.json";
}

/// Directory of APL documents.
///
/// Every `load` reads the file again; edits on disk show up on the next request.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    base_path: PathBuf,
}

impl DocumentStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve a document name to its path under the store root.
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Read and parse the named document. Content is passed through as-is.
    pub fn load(&self, name: &str) -> Result<serde_json::Value, SkillError> {
        let path = self.resolve_path(name);
        debug!(document = %path.display(), "Loading APL document");

        let raw = std::fs::read_to_string(&path).map_err(|e| SkillError::Document {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| SkillError::Document {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }
}
