use docshelf::api::{Category, DocumentStore, NewDocument, YearKey};
use docshelf::error::DocshelfError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn setup() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("library");
    (dir, root)
}

fn write_source(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn metadata_survives_reopening() {
    let (dir, root) = setup();
    let src = write_source(dir.path(), "artigo_2022.pdf", "body");

    {
        let mut store = DocumentStore::open(&root).unwrap();
        store
            .add(
                &src,
                "articles",
                NewDocument::default().author("Ana Silva").title("Redes Neurais"),
            )
            .unwrap();
    }

    let store = DocumentStore::open(&root).unwrap();
    let listed = store.list(Some(Category::Articles), None).unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].author, "Ana Silva");
    assert_eq!(listed[0].title, "Redes Neurais");
    assert_eq!(listed[0].year, Some(2022));
}

#[test]
fn reopening_never_duplicates_directories() {
    let (_dir, root) = setup();
    DocumentStore::open(&root).unwrap();
    DocumentStore::open(&root).unwrap();

    let mut entries: Vec<String> = fs::read_dir(&root)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    entries.sort();
    assert_eq!(entries, vec!["articles", "books", "theses"]);
}

#[test]
fn index_file_has_documented_shape() {
    let (dir, root) = setup();
    let src = write_source(dir.path(), "livro_2019.epub", "12345");
    let mut store = DocumentStore::open(&root).unwrap();
    store.add(&src, "books", NewDocument::default()).unwrap();

    let raw = fs::read_to_string(root.join("metadata_index.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &json["books/livro_2019.epub"];

    assert_eq!(entry["type"], "books");
    assert_eq!(entry["year"], 2019);
    assert_eq!(entry["author"], "");
    assert_eq!(entry["title"], "livro_2019");
    assert_eq!(entry["file_size"], 5);
    assert!(entry["added_date"].is_string());
}

#[test]
fn corrupt_index_starts_fresh_but_keeps_files_listed() {
    let (dir, root) = setup();
    let src = write_source(dir.path(), "tese_2021.pdf", "x");
    {
        let mut store = DocumentStore::open(&root).unwrap();
        store
            .add(&src, "theses", NewDocument::default().author("Souza"))
            .unwrap();
    }
    fs::write(root.join("metadata_index.json"), "{ definitely not json").unwrap();

    let store = DocumentStore::open(&root).unwrap();
    let listed = store.list(None, None).unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].author, "unknown");
    assert_eq!(listed[0].year, None);
}

#[test]
fn legacy_naive_timestamps_load() {
    let (_dir, root) = setup();
    fs::create_dir_all(root.join("articles")).unwrap();
    fs::write(root.join("articles").join("old.pdf"), "x").unwrap();
    fs::write(
        root.join("metadata_index.json"),
        r#"{"articles/old.pdf": {"type": "articles", "year": 2010, "author": "Lima",
            "title": "Old", "added_date": "2023-05-02T09:15:42.918273", "file_size": 1}}"#,
    )
    .unwrap();

    let store = DocumentStore::open(&root).unwrap();
    let listed = store.list(None, None).unwrap();

    assert_eq!(listed[0].author, "Lima");
    assert_eq!(listed[0].year, Some(2010));
    assert!(listed[0].added_at.is_some());
}

#[test]
fn collisions_and_removal_round_trip() {
    let (dir, root) = setup();
    fs::create_dir_all(dir.path().join("a")).unwrap();
    fs::create_dir_all(dir.path().join("b")).unwrap();
    let first = write_source(&dir.path().join("a"), "paper.pdf", "first");
    let second = write_source(&dir.path().join("b"), "paper.pdf", "second");

    let mut store = DocumentStore::open(&root).unwrap();
    store.add(&first, "articles", NewDocument::default()).unwrap();
    store.add(&second, "articles", NewDocument::default()).unwrap();

    let mut names: Vec<String> = store
        .list(Some(Category::Articles), None)
        .unwrap()
        .into_iter()
        .map(|r| r.filename)
        .collect();
    names.sort();
    assert_eq!(names, vec!["paper.pdf", "paper_1.pdf"]);

    store.remove("paper.pdf", "articles").unwrap();
    let err = store.remove("paper.pdf", "articles").unwrap_err();
    assert!(matches!(err, DocshelfError::NotFound { .. }));

    let reopened = DocumentStore::open(&root).unwrap();
    let remaining = reopened.list(None, None).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].filename, "paper_1.pdf");
    assert_eq!(
        fs::read_to_string(root.join("articles").join("paper_1.pdf")).unwrap(),
        "second"
    );
}

#[test]
fn rename_is_persisted() {
    let (dir, root) = setup();
    let src = write_source(dir.path(), "a.pdf", "x");
    let mut store = DocumentStore::open(&root).unwrap();
    store.add(&src, "articles", NewDocument::default()).unwrap();

    store.rename("a.pdf", "b", "articles").unwrap();

    let reopened = DocumentStore::open(&root).unwrap();
    let listed = reopened.list(None, None).unwrap();
    assert_eq!(listed[0].filename, "b.pdf");
    assert_eq!(listed[0].title, "b");
    assert!(listed[0].added_at.is_some());
}

#[test]
fn views_over_a_mixed_shelf() {
    let (dir, root) = setup();
    let mut store = DocumentStore::open(&root).unwrap();
    for (name, category, author) in [
        ("ml_2023.pdf", "articles", "Carla Silva"),
        ("redes_2022.pdf", "articles", "Bruno"),
        ("tese.docx", "theses", "Diego"),
    ] {
        let src = write_source(dir.path(), name, "abc");
        store
            .add(&src, category, NewDocument::default().author(author))
            .unwrap();
    }

    let by_year = store.group_by_year().unwrap();
    let keys: Vec<YearKey> = by_year.keys().copied().collect();
    assert_eq!(
        keys,
        vec![YearKey::Year(2023), YearKey::Year(2022), YearKey::Unknown]
    );

    let by_type = store.group_by_category().unwrap();
    assert_eq!(by_type[&Category::Articles].len(), 2);
    assert_eq!(by_type[&Category::Books].len(), 0);

    let hits = store.search("SILVA").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].filename, "ml_2023.pdf");

    let stats = store.statistics().unwrap();
    assert_eq!(stats.total_documents, 3);
    assert_eq!(stats.oldest_year, Some(2022));
    assert_eq!(stats.newest_year, Some(2023));
    assert_eq!(stats.total_size_bytes, 9);
}
