use crate::error::Result;
use crate::model::{Category, DocumentRecord, YearKey};
use crate::store::{IndexBackend, Storage};
use std::collections::BTreeMap;

use super::list;

/// One bucket per category, empty ones included.
pub fn by_category<B: IndexBackend>(
    storage: &Storage<B>,
) -> Result<BTreeMap<Category, Vec<DocumentRecord>>> {
    let mut groups = BTreeMap::new();
    for category in Category::ALL {
        groups.insert(category, list::run(storage, Some(category), None)?);
    }
    Ok(groups)
}

/// Buckets by year, most recent first, with documents lacking a year under
/// [`YearKey::Unknown`] at the end. Only non-empty buckets are present.
pub fn by_year<B: IndexBackend>(
    storage: &Storage<B>,
) -> Result<BTreeMap<YearKey, Vec<DocumentRecord>>> {
    let mut groups: BTreeMap<YearKey, Vec<DocumentRecord>> = BTreeMap::new();
    for record in list::run(storage, None, None)? {
        groups.entry(record.year.into()).or_default().push(record);
    }
    Ok(groups)
}
