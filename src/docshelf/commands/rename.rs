use crate::error::{DocshelfError, Result};
use crate::model::Category;
use crate::store::{IndexBackend, Storage};
use std::fs;
use tracing::info;

use super::helpers::{extension, file_stem, validate_file_name};

/// Renames a stored document inside its category directory.
///
/// `new_name` keeps the old extension: when it does not already end with it,
/// the extension is appended (`rename("a.pdf", "b")` produces `b.pdf`). A
/// title that still equals the old file stem follows the rename; a custom
/// title is left alone.
pub fn run<B: IndexBackend>(
    storage: &mut Storage<B>,
    old_name: &str,
    new_name: &str,
    category: &str,
) -> Result<String> {
    let category: Category = category.parse()?;
    validate_file_name(old_name)?;
    validate_file_name(new_name)?;

    let dir = storage.category_dir(category);
    let old_path = dir.join(old_name);
    if !old_path.is_file() {
        return Err(DocshelfError::not_found(old_path));
    }

    let ext = extension(old_name);
    let new_name = if new_name.ends_with(&ext) {
        new_name.to_string()
    } else {
        format!("{}{}", new_name, ext)
    };

    let new_path = dir.join(&new_name);
    if new_path.exists() {
        return Err(DocshelfError::already_exists(new_path));
    }

    fs::rename(&old_path, &new_path).map_err(DocshelfError::Io)?;

    let old_key = storage.relative_key(category, old_name);
    let new_key = storage.relative_key(category, &new_name);
    let old_stem = file_stem(old_name);
    let new_stem = file_stem(&new_name);

    if let Some(entry) = storage.index_mut().rekey(&old_key, &new_key) {
        if entry.title == old_stem {
            entry.title = new_stem;
        }
        storage.persist()?;
    }
    info!(from = %old_key, to = %new_key, "document renamed");

    Ok(new_name)
}
