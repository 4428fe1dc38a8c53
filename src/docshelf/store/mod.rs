//! # Storage Layer
//!
//! [`Storage`] owns the storage root, the per-category directories and the
//! in-memory [`MetadataIndex`]. Commands read and mutate the index through it
//! and call [`Storage::persist`] once their filesystem step succeeded.
//!
//! ## Layout
//!
//! ```text
//! <root>/
//! ├── articles/
//! ├── theses/
//! ├── books/
//! └── metadata_index.json
//! ```
//!
//! ## Index Backends
//!
//! Persisting the index goes through the [`IndexBackend`] trait:
//!
//! - [`fs_backend::JsonIndexFile`]: production, `metadata_index.json` in the root
//! - [`mem_backend::MemIndex`]: keeps the last saved index in memory, for tests
//!
//! There is no locking. A second process writing the same root can lose
//! updates; a lock or a transactional index would be another backend.

use crate::error::{DocshelfError, Result};
use crate::index::MetadataIndex;
use crate::model::Category;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub mod fs_backend;
pub mod mem_backend;

pub const INDEX_FILENAME: &str = "metadata_index.json";

/// Where the metadata index lives between runs.
pub trait IndexBackend {
    /// Load the full index. A missing index is an empty one; unparseable
    /// content is reported as [`DocshelfError::Serialization`].
    fn load_index(&self) -> Result<MetadataIndex>;

    /// Replace the persisted index with `index`.
    fn save_index(&mut self, index: &MetadataIndex) -> Result<()>;
}

pub struct Storage<B: IndexBackend> {
    root: PathBuf,
    index: MetadataIndex,
    backend: B,
}

impl<B: IndexBackend> Storage<B> {
    /// Creates the root and category directories if needed, then loads the
    /// index. A corrupt index is logged and replaced by an empty one.
    pub fn open(root: impl Into<PathBuf>, backend: B) -> Result<Self> {
        let root = root.into();
        ensure_layout(&root)?;

        let index = match backend.load_index() {
            Ok(index) => index,
            Err(DocshelfError::Serialization(e)) => {
                warn!(root = %root.display(), error = %e, "metadata index is corrupt, starting empty");
                MetadataIndex::new()
            }
            Err(e) => return Err(e),
        };
        debug!(root = %root.display(), entries = index.len(), "storage opened");

        Ok(Self {
            root,
            index,
            backend,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.root.join(category.dir_name())
    }

    /// Index key for a file inside a category directory. Always `/`-separated
    /// so the index reads the same on every platform.
    pub fn relative_key(&self, category: Category, filename: &str) -> String {
        format!("{}/{}", category.dir_name(), filename)
    }

    pub fn index(&self) -> &MetadataIndex {
        &self.index
    }

    pub(crate) fn index_mut(&mut self) -> &mut MetadataIndex {
        &mut self.index
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Writes the whole in-memory index through the backend.
    pub(crate) fn persist(&mut self) -> Result<()> {
        self.backend.save_index(&self.index)?;
        debug!(entries = self.index.len(), "metadata index saved");
        Ok(())
    }
}

fn ensure_layout(root: &Path) -> Result<()> {
    for category in Category::ALL {
        let dir = root.join(category.dir_name());
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(DocshelfError::Io)?;
            debug!(dir = %dir.display(), "created category directory");
        }
    }
    Ok(())
}
