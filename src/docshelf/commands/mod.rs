//! Business logic for each operation, one module per command.
//!
//! Commands take a [`crate::store::Storage`] and plain Rust arguments and
//! return Rust values. They never print; the CLI decides how results look.

pub mod add;
pub mod doctor;
pub mod group;
pub mod helpers;
pub mod list;
pub mod remove;
pub mod rename;
pub mod search;
pub mod stats;

pub use add::NewDocument;
pub use doctor::DoctorReport;
pub use stats::Statistics;
