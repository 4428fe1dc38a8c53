use crate::error::{DocshelfError, Result};
use crate::model::{Category, DocumentRecord};
use crate::store::{IndexBackend, Storage};
use std::fs;
use tracing::warn;

use super::helpers::build_record;

/// Lists every regular file in the selected category directories (all of
/// them when `category` is `None`), joined with its index metadata.
///
/// Files are enumerated from disk, so documents without an index entry show
/// up with default metadata. Entries come out in directory iteration order,
/// which is platform dependent; sort the result when order matters.
pub fn run<B: IndexBackend>(
    storage: &Storage<B>,
    category: Option<Category>,
    year: Option<i32>,
) -> Result<Vec<DocumentRecord>> {
    let categories: Vec<Category> = match category {
        Some(c) => vec![c],
        None => Category::ALL.to_vec(),
    };

    let mut records = Vec::new();
    for category in categories {
        let dir = storage.category_dir(category);
        if !dir.is_dir() {
            continue;
        }

        for entry in fs::read_dir(&dir).map_err(DocshelfError::Io)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let record = match build_record(storage, category, &path) {
                Ok(record) => record,
                Err(DocshelfError::NotFound { .. }) => {
                    warn!(path = %path.display(), "file vanished while listing, skipping");
                    continue;
                }
                Err(e) => return Err(e),
            };
            if year.is_some() && record.year != year {
                continue;
            }
            records.push(record);
        }
    }

    Ok(records)
}
