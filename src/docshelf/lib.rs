//! # Docshelf Architecture
//!
//! Docshelf keeps articles, theses and books in one directory per category
//! and records what the filesystem cannot know (author, title, year, when a
//! document was added) in a JSON sidecar index.
//!
//! It is a library first; the `docshelf` binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, print.rs)                           │
//! │  - Parses arguments, formats output, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - DocumentStore facade, one method per operation           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - add, remove, rename, list, group, search, stats, doctor  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - Root + category dirs + in-memory index                   │
//! │  - IndexBackend: JsonIndexFile, MemIndex                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Disk and Index
//!
//! The filesystem decides what exists and how big it is; the index only adds
//! metadata. Listing walks the category directories, so a file copied in by
//! hand still shows up (with default metadata), and an index entry whose
//! file was deleted is simply never reached. `doctor` prunes such entries.
//!
//! Everything is synchronous and single-writer. Nothing guards against two
//! processes mutating the same root.
//!
//! ## Module Overview
//!
//! - [`api`]: the `DocumentStore` facade
//! - [`commands`]: business logic per operation
//! - [`store`]: storage root, index persistence backends
//! - [`index`]: the persisted metadata index
//! - [`model`]: `Category`, `DocumentRecord`, `YearKey`
//! - [`year`]: year inference from file names
//! - [`config`]: CLI configuration file
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
pub mod year;
