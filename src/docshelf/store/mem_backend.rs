use super::IndexBackend;
use crate::error::Result;
use crate::index::MetadataIndex;

/// Keeps the last saved index in memory and counts saves.
///
/// Category directories and document files still live on disk; only the
/// index is kept off it.
#[derive(Debug, Default)]
pub struct MemIndex {
    saved: MetadataIndex,
    saves: usize,
}

impl MemIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an already populated index, as if it had been saved before.
    pub fn with_index(index: MetadataIndex) -> Self {
        Self {
            saved: index,
            saves: 0,
        }
    }

    pub fn saved(&self) -> &MetadataIndex {
        &self.saved
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl IndexBackend for MemIndex {
    fn load_index(&self) -> Result<MetadataIndex> {
        Ok(self.saved.clone())
    }

    fn save_index(&mut self, index: &MetadataIndex) -> Result<()> {
        self.saved = index.clone();
        self.saves += 1;
        Ok(())
    }
}
