use crate::error::{DocshelfError, Result};
use crate::index::IndexEntry;
use crate::model::{Category, DocumentRecord, UNKNOWN_AUTHOR};
use crate::store::{IndexBackend, Storage};
use std::ffi::{OsStr, OsString};
use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Rejects names that would escape the category directory.
pub fn validate_file_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." {
        return Err(DocshelfError::InvalidArgument(format!(
            "'{}' is not a valid file name",
            name
        )));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(DocshelfError::InvalidArgument(format!(
            "file name '{}' must not contain a path separator",
            name
        )));
    }
    Ok(())
}

/// File name without its last extension (`paper.v2.pdf` → `paper.v2`).
pub fn file_stem(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string())
}

/// Last extension including the dot, or an empty string.
pub fn extension(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default()
}

/// First free path for `filename` in `dir`: the name itself, then
/// `<stem>_1<ext>`, `<stem>_2<ext>`, ...
///
/// Works on the raw OS name so non-UTF-8 bytes survive unchanged.
pub fn unique_destination(dir: &Path, filename: &OsStr) -> PathBuf {
    let candidate = dir.join(filename);
    if !candidate.exists() {
        return candidate;
    }

    let name = Path::new(filename);
    let stem = name.file_stem().unwrap_or(filename);
    let ext = name.extension();
    let mut counter: u64 = 1;
    loop {
        let mut numbered = OsString::from(stem);
        numbered.push(format!("_{}", counter));
        if let Some(ext) = ext {
            numbered.push(".");
            numbered.push(ext);
        }
        let candidate = dir.join(numbered);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// Copies bytes and then carries the source's access and modification times
/// over to the copy. Returns the number of bytes copied.
///
/// The copy inherits the source's permission bits, so it may be read-only.
/// Times are set through a read-only handle and a failure there only logs.
pub fn copy_with_times(source: &Path, dest: &Path) -> Result<u64> {
    let copied = fs::copy(source, dest).map_err(DocshelfError::Io)?;

    if let Err(e) = carry_times(source, dest) {
        warn!(dest = %dest.display(), error = %e, "could not preserve file times");
    }

    Ok(copied)
}

fn carry_times(source: &Path, dest: &Path) -> io::Result<()> {
    let meta = fs::metadata(source)?;
    let mut times = FileTimes::new();
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    File::open(dest)?.set_times(times)
}

/// Joins a file on disk with its index entry, if any.
pub fn build_record<B: IndexBackend>(
    storage: &Storage<B>,
    category: Category,
    path: &Path,
) -> Result<DocumentRecord> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| DocshelfError::not_found(path))?;
    let relative_path = storage.relative_key(category, &filename);
    let size_bytes = match fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(DocshelfError::not_found(path))
        }
        Err(e) => return Err(DocshelfError::Io(e)),
    };

    let record = match storage.index().get(&relative_path) {
        Some(entry) => from_entry(entry, filename, relative_path, category, size_bytes),
        None => DocumentRecord {
            title: file_stem(&filename),
            filename,
            relative_path,
            category,
            year: None,
            author: UNKNOWN_AUTHOR.to_string(),
            added_at: None,
            size_bytes,
        },
    };
    Ok(record)
}

fn from_entry(
    entry: &IndexEntry,
    filename: String,
    relative_path: String,
    category: Category,
    size_bytes: u64,
) -> DocumentRecord {
    DocumentRecord {
        filename,
        relative_path,
        category,
        year: entry.year,
        author: entry.author.clone(),
        title: entry.title.clone(),
        added_at: Some(entry.added_at),
        size_bytes,
    }
}
