use crate::error::Result;
use crate::model::DocumentRecord;
use crate::store::{IndexBackend, Storage};

use super::list;

/// Case-insensitive substring match on file name, title or author. An empty
/// query matches everything. No ranking: results keep `list` order.
pub fn run<B: IndexBackend>(storage: &Storage<B>, query: &str) -> Result<Vec<DocumentRecord>> {
    let term = query.to_lowercase();
    let matches = list::run(storage, None, None)?
        .into_iter()
        .filter(|r| {
            r.filename.to_lowercase().contains(&term)
                || r.title.to_lowercase().contains(&term)
                || r.author.to_lowercase().contains(&term)
        })
        .collect();
    Ok(matches)
}
