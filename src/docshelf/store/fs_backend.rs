use super::{IndexBackend, INDEX_FILENAME};
use crate::error::{DocshelfError, Result};
use crate::index::MetadataIndex;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// The index as a pretty-printed JSON object on disk.
pub struct JsonIndexFile {
    path: PathBuf,
}

impl JsonIndexFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `metadata_index.json` directly under `root`.
    pub fn in_root(root: impl AsRef<Path>) -> Self {
        Self::new(root.as_ref().join(INDEX_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IndexBackend for JsonIndexFile {
    fn load_index(&self) -> Result<MetadataIndex> {
        if !self.path.exists() {
            return Ok(MetadataIndex::new());
        }
        let content = fs::read_to_string(&self.path).map_err(DocshelfError::Io)?;
        let index: MetadataIndex =
            serde_json::from_str(&content).map_err(DocshelfError::Serialization)?;
        Ok(index)
    }

    fn save_index(&mut self, index: &MetadataIndex) -> Result<()> {
        let content = serde_json::to_string_pretty(index).map_err(DocshelfError::Serialization)?;

        // Write next to the target and rename over it
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let tmp_file = dir.join(format!(".index-{}.tmp", Uuid::new_v4()));
        let written =
            fs::write(&tmp_file, content).and_then(|_| fs::rename(&tmp_file, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_file);
            return Err(DocshelfError::Io(e));
        }
        Ok(())
    }
}
