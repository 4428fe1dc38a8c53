use crate::error::{DocshelfError, Result};
use crate::model::Category;
use crate::store::{IndexBackend, Storage};
use std::fs;
use tracing::info;

use super::helpers::validate_file_name;

/// Deletes `filename` from the category directory, then drops its index
/// entry. A file without an entry is removed all the same; the index is only
/// rewritten when an entry was actually dropped.
pub fn run<B: IndexBackend>(storage: &mut Storage<B>, filename: &str, category: &str) -> Result<()> {
    let category: Category = category.parse()?;
    validate_file_name(filename)?;

    let path = storage.category_dir(category).join(filename);
    if !path.is_file() {
        return Err(DocshelfError::not_found(path));
    }

    fs::remove_file(&path).map_err(DocshelfError::Io)?;

    let key = storage.relative_key(category, filename);
    if storage.index_mut().remove(&key).is_some() {
        storage.persist()?;
    }
    info!(document = %key, "document removed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add::{self, NewDocument};
    use crate::commands::list;
    use crate::store::mem_backend::MemIndex;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage<MemIndex>) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::open(dir.path().join("shelf"), MemIndex::new()).unwrap();
        (dir, storage)
    }

    #[test]
    fn removes_file_and_entry() {
        let (dir, mut storage) = setup();
        let src = dir.path().join("tese_2021.pdf");
        fs::write(&src, "x").unwrap();
        add::run(&mut storage, &src, "theses", NewDocument::default()).unwrap();

        run(&mut storage, "tese_2021.pdf", "theses").unwrap();

        assert!(list::run(&storage, Some(Category::Theses), None)
            .unwrap()
            .is_empty());
        assert!(storage.index().is_empty());
        assert_eq!(storage.backend().save_count(), 2);
    }

    #[test]
    fn missing_file_is_not_found() {
        let (_dir, mut storage) = setup();
        let err = run(&mut storage, "ghost.pdf", "articles").unwrap_err();
        assert!(matches!(err, DocshelfError::NotFound { .. }));
    }

    #[test]
    fn unindexed_file_is_removed_without_saving() {
        let (_dir, mut storage) = setup();
        let orphan = storage.category_dir(Category::Books).join("orphan.epub");
        fs::write(&orphan, "x").unwrap();

        run(&mut storage, "orphan.epub", "books").unwrap();

        assert!(!orphan.exists());
        assert_eq!(storage.backend().save_count(), 0);
    }

    #[test]
    fn refuses_path_traversal() {
        let (_dir, mut storage) = setup();
        let err = run(&mut storage, "../metadata_index.json", "articles").unwrap_err();
        assert!(matches!(err, DocshelfError::InvalidArgument(_)));
    }
}
