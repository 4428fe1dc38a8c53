use crate::error::Result;
use crate::model::Category;
use crate::store::{IndexBackend, Storage};
use serde::Serialize;
use std::collections::BTreeMap;

use super::list;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_documents: usize,
    /// Every category, zero when empty.
    pub by_category: BTreeMap<Category, usize>,
    /// Only years that occur.
    pub by_year: BTreeMap<i32, usize>,
    pub total_size_bytes: u64,
    /// Binary megabytes, rounded to two decimals.
    pub total_size_mib: f64,
    pub oldest_year: Option<i32>,
    pub newest_year: Option<i32>,
}

pub fn run<B: IndexBackend>(storage: &Storage<B>) -> Result<Statistics> {
    let records = list::run(storage, None, None)?;

    let mut by_category: BTreeMap<Category, usize> =
        Category::ALL.into_iter().map(|c| (c, 0)).collect();
    let mut by_year = BTreeMap::new();
    let mut total_size_bytes = 0u64;

    for record in &records {
        *by_category.entry(record.category).or_insert(0) += 1;
        if let Some(year) = record.year {
            *by_year.entry(year).or_insert(0) += 1;
        }
        total_size_bytes += record.size_bytes;
    }

    Ok(Statistics {
        total_documents: records.len(),
        by_category,
        oldest_year: by_year.keys().next().copied(),
        newest_year: by_year.keys().next_back().copied(),
        by_year,
        total_size_bytes,
        total_size_mib: round2(total_size_bytes as f64 / BYTES_PER_MIB),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add::{self, NewDocument};
    use crate::store::mem_backend::MemIndex;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn empty_shelf() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::open(dir.path(), MemIndex::new()).unwrap();

        let stats = run(&storage).unwrap();

        assert_eq!(stats.total_documents, 0);
        assert_eq!(stats.total_size_bytes, 0);
        assert_eq!(stats.total_size_mib, 0.0);
        assert_eq!(stats.oldest_year, None);
        assert_eq!(stats.newest_year, None);
        assert!(stats.by_year.is_empty());
        assert!(stats.by_category.values().all(|n| *n == 0));
    }

    #[test]
    fn counts_years_categories_and_sizes() {
        let dir = TempDir::new().unwrap();
        let mut storage = Storage::open(dir.path().join("shelf"), MemIndex::new()).unwrap();
        for (name, category, body) in [
            ("doc_2022.pdf", "articles", "12345"),
            ("doc_2023.epub", "books", "1234567890"),
            ("notes.txt", "articles", "1"),
        ] {
            let src = dir.path().join(name);
            fs::write(&src, body).unwrap();
            add::run(&mut storage, &src, category, NewDocument::default()).unwrap();
        }

        let stats = run(&storage).unwrap();

        assert_eq!(stats.total_documents, 3);
        assert_eq!(stats.by_category[&Category::Articles], 2);
        assert_eq!(stats.by_category[&Category::Books], 1);
        assert_eq!(stats.by_category[&Category::Theses], 0);
        assert_eq!(stats.by_year.len(), 2);
        assert_eq!(stats.by_year[&2022], 1);
        assert_eq!(stats.oldest_year, Some(2022));
        assert_eq!(stats.newest_year, Some(2023));
        assert_eq!(stats.total_size_bytes, 16);
    }

    #[test]
    fn mebibytes_are_binary_and_rounded() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::open(dir.path(), MemIndex::new()).unwrap();
        let big = storage.category_dir(Category::Books).join("big.pdf");
        fs::write(&big, vec![0u8; 1_572_864]).unwrap();

        let stats = run(&storage).unwrap();

        assert_eq!(stats.total_size_bytes, 1_572_864);
        assert_eq!(stats.total_size_mib, 1.5);
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round2(0.123456), 0.12);
        assert_eq!(round2(2.0 / 3.0), 0.67);
    }
}
