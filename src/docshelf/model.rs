use crate::error::{DocshelfError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Author shown for files that have no index entry.
pub const UNKNOWN_AUTHOR: &str = "unknown";

/// Fixed document classification. Each category owns a directory under the
/// storage root and a whitelist of accepted file extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Articles,
    Theses,
    Books,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Articles, Category::Theses, Category::Books];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Articles => "articles",
            Category::Theses => "theses",
            Category::Books => "books",
        }
    }

    /// Directory name under the storage root.
    pub fn dir_name(&self) -> &'static str {
        self.as_str()
    }

    /// Accepted extensions, lowercase and dot-prefixed.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Category::Articles => &[".pdf", ".doc", ".docx", ".txt"],
            Category::Theses => &[".pdf", ".doc", ".docx"],
            Category::Books => &[".pdf", ".epub", ".mobi", ".azw3"],
        }
    }

    /// Case-insensitive whitelist check. Accepts the extension with or
    /// without its leading dot.
    pub fn accepts(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        let ext = if ext.starts_with('.') {
            ext
        } else {
            format!(".{}", ext)
        };
        self.extensions().contains(&ext.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Category {
    type Err = DocshelfError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
                DocshelfError::InvalidArgument(format!(
                    "unknown category '{}', expected one of: {}",
                    s,
                    names.join(", ")
                ))
            })
    }
}

/// One stored document: filesystem facts joined with whatever index
/// metadata exists for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentRecord {
    pub filename: String,
    /// Key into the metadata index, `<category>/<filename>`.
    pub relative_path: String,
    pub category: Category,
    pub year: Option<i32>,
    pub author: String,
    pub title: String,
    /// Absent for files that were never indexed.
    pub added_at: Option<DateTime<Utc>>,
    /// Read from the live file, never from the index.
    pub size_bytes: u64,
}

/// Bucket key for [`crate::commands::group::by_year`].
///
/// Ordering puts the most recent year first and [`YearKey::Unknown`] after
/// every concrete year, so a `BTreeMap<YearKey, _>` iterates in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearKey {
    Year(i32),
    Unknown,
}

impl From<Option<i32>> for YearKey {
    fn from(year: Option<i32>) -> Self {
        match year {
            Some(y) => YearKey::Year(y),
            None => YearKey::Unknown,
        }
    }
}

impl Ord for YearKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (YearKey::Year(a), YearKey::Year(b)) => b.cmp(a),
            (YearKey::Year(_), YearKey::Unknown) => Ordering::Less,
            (YearKey::Unknown, YearKey::Year(_)) => Ordering::Greater,
            (YearKey::Unknown, YearKey::Unknown) => Ordering::Equal,
        }
    }
}

impl PartialOrd for YearKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for YearKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearKey::Year(y) => write!(f, "{}", y),
            YearKey::Unknown => f.write_str("unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn parses_category_case_insensitively() {
        assert_eq!("Articles".parse::<Category>().unwrap(), Category::Articles);
        assert_eq!(" books ".parse::<Category>().unwrap(), Category::Books);
    }

    #[test]
    fn rejects_unknown_category() {
        let err = "magazines".parse::<Category>().unwrap_err();
        assert!(matches!(err, DocshelfError::InvalidArgument(_)));
        assert!(err.to_string().contains("articles"));
    }

    #[test]
    fn whitelist_is_case_insensitive() {
        assert!(Category::Books.accepts(".EPUB"));
        assert!(Category::Articles.accepts("txt"));
        assert!(!Category::Theses.accepts(".txt"));
        assert!(!Category::Books.accepts(".docx"));
    }

    #[test]
    fn category_serializes_as_directory_name() {
        let json = serde_json::to_string(&Category::Theses).unwrap();
        assert_eq!(json, "\"theses\"");
    }

    #[test]
    fn year_keys_sort_descending_with_unknown_last() {
        let mut map = BTreeMap::new();
        map.insert(YearKey::Unknown, ());
        map.insert(YearKey::Year(2021), ());
        map.insert(YearKey::Year(2023), ());
        map.insert(YearKey::Year(1999), ());

        let keys: Vec<YearKey> = map.into_keys().collect();
        assert_eq!(
            keys,
            vec![
                YearKey::Year(2023),
                YearKey::Year(2021),
                YearKey::Year(1999),
                YearKey::Unknown
            ]
        );
    }
}
