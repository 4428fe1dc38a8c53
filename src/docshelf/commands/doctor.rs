use crate::error::Result;
use crate::store::{IndexBackend, Storage};
use std::path::Path;
use tracing::info;

use super::list;

/// Outcome of [`run`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DoctorReport {
    /// Index entries dropped because their file no longer exists.
    pub pruned_entries: usize,
    /// Files on disk that have no index entry. They are reported, not adopted.
    pub untracked_files: usize,
}

impl DoctorReport {
    pub fn is_clean(&self) -> bool {
        self.pruned_entries == 0 && self.untracked_files == 0
    }
}

/// Reconciles the index with the filesystem after a crash or manual edits.
pub fn run<B: IndexBackend>(storage: &mut Storage<B>) -> Result<DoctorReport> {
    let root = storage.root().to_path_buf();
    let pruned_entries = storage
        .index_mut()
        .retain(|key, _| root.join(Path::new(key)).is_file());
    if pruned_entries > 0 {
        storage.persist()?;
    }

    let untracked_files = list::run(storage, None, None)?
        .iter()
        .filter(|r| !storage.index().contains(&r.relative_path))
        .count();

    info!(pruned_entries, untracked_files, "doctor finished");
    Ok(DoctorReport {
        pruned_entries,
        untracked_files,
    })
}
