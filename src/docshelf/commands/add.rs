use crate::error::{DocshelfError, Result};
use crate::index::IndexEntry;
use crate::model::{Category, DocumentRecord};
use crate::store::{IndexBackend, Storage};
use crate::year::extract_year;
use chrono::Utc;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use super::helpers::{build_record, copy_with_times, extension, file_stem, unique_destination};

/// Optional metadata supplied when adding a document.
#[derive(Debug, Clone, Default)]
pub struct NewDocument {
    /// Inferred from the file name when absent.
    pub year: Option<i32>,
    pub author: Option<String>,
    /// Defaults to the stored file name without extension.
    pub title: Option<String>,
}

impl NewDocument {
    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

pub fn run<B: IndexBackend>(
    storage: &mut Storage<B>,
    source: &Path,
    category: &str,
    doc: NewDocument,
) -> Result<DocumentRecord> {
    // Validate everything before touching the shelf
    if !source.is_file() {
        return Err(DocshelfError::not_found(source));
    }
    let category: Category = category.parse()?;

    let source_name = source
        .file_name()
        .ok_or_else(|| DocshelfError::not_found(source))?;
    let display_name = source_name.to_string_lossy();
    let ext = extension(&display_name);
    if ext.is_empty() || !category.accepts(&ext) {
        return Err(DocshelfError::InvalidArgument(format!(
            "format '{}' is not supported for {} (accepted: {})",
            ext,
            category,
            category.extensions().join(", ")
        )));
    }

    let year = doc.year.or_else(|| extract_year(&display_name));

    // The file keeps its raw OS name; the index key is its lossy rendering
    let dest = unique_destination(&storage.category_dir(category), source_name);
    let file_size = copy_with_times(source, &dest)?;

    let dest_name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| display_name.into_owned());
    let key = storage.relative_key(category, &dest_name);
    let title = doc
        .title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| file_stem(&dest_name));

    storage.index_mut().insert(
        key.clone(),
        IndexEntry {
            category,
            year,
            author: doc.author.unwrap_or_default(),
            title,
            added_at: Utc::now(),
            file_size,
        },
    );
    if let Err(e) = storage.persist() {
        // Leave neither an orphan copy nor an unsaved entry behind
        storage.index_mut().remove(&key);
        if let Err(cleanup) = fs::remove_file(&dest) {
            warn!(dest = %dest.display(), error = %cleanup, "could not remove copied file");
        }
        return Err(e);
    }
    info!(document = %key, source = %source.display(), "document added");

    build_record(storage, category, &dest)
}
