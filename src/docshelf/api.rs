//! # API Facade
//!
//! [`DocumentStore`] is the single entry point for every docshelf operation.
//! It dispatches to `commands/*.rs` and returns their structured results;
//! it holds no business logic and performs no terminal I/O.
//!
//! The store is generic over [`IndexBackend`]:
//! - Production: `DocumentStore<JsonIndexFile>` via [`DocumentStore::open`]
//! - Testing: `DocumentStore<MemIndex>` via [`DocumentStore::with_backend`]

use crate::commands;
use crate::error::Result;
use crate::store::fs_backend::JsonIndexFile;
use crate::store::{IndexBackend, Storage};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub struct DocumentStore<B: IndexBackend = JsonIndexFile> {
    storage: Storage<B>,
}

impl DocumentStore<JsonIndexFile> {
    /// Opens (and bootstraps, if needed) the shelf at `root`, with the index
    /// in `<root>/metadata_index.json`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let backend = JsonIndexFile::in_root(&root);
        Self::with_backend(root, backend)
    }
}

impl<B: IndexBackend> DocumentStore<B> {
    pub fn with_backend(root: impl Into<PathBuf>, backend: B) -> Result<Self> {
        Ok(Self {
            storage: Storage::open(root, backend)?,
        })
    }

    pub fn root(&self) -> &Path {
        self.storage.root()
    }

    pub fn storage(&self) -> &Storage<B> {
        &self.storage
    }

    /// Copies `source` into the category directory and indexes it.
    pub fn add(
        &mut self,
        source: impl AsRef<Path>,
        category: impl AsRef<str>,
        doc: NewDocument,
    ) -> Result<DocumentRecord> {
        commands::add::run(&mut self.storage, source.as_ref(), category.as_ref(), doc)
    }

    pub fn remove(&mut self, filename: &str, category: impl AsRef<str>) -> Result<()> {
        commands::remove::run(&mut self.storage, filename, category.as_ref())
    }

    /// Returns the final file name, extension included.
    pub fn rename(
        &mut self,
        old_name: &str,
        new_name: &str,
        category: impl AsRef<str>,
    ) -> Result<String> {
        commands::rename::run(&mut self.storage, old_name, new_name, category.as_ref())
    }

    /// Unsorted: entries follow directory iteration order.
    pub fn list(&self, category: Option<Category>, year: Option<i32>) -> Result<Vec<DocumentRecord>> {
        commands::list::run(&self.storage, category, year)
    }

    pub fn group_by_category(&self) -> Result<BTreeMap<Category, Vec<DocumentRecord>>> {
        commands::group::by_category(&self.storage)
    }

    pub fn group_by_year(&self) -> Result<BTreeMap<YearKey, Vec<DocumentRecord>>> {
        commands::group::by_year(&self.storage)
    }

    pub fn search(&self, query: &str) -> Result<Vec<DocumentRecord>> {
        commands::search::run(&self.storage, query)
    }

    pub fn statistics(&self) -> Result<Statistics> {
        commands::stats::run(&self.storage)
    }

    pub fn doctor(&mut self) -> Result<DoctorReport> {
        commands::doctor::run(&mut self.storage)
    }
}

pub use crate::commands::{DoctorReport, NewDocument, Statistics};
pub use crate::model::{Category, DocumentRecord, YearKey};
