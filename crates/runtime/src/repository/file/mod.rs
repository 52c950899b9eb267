//! File-based catalog implementation.
//!
//! The whole catalog is one JSON document rewritten on every change:
//! - `catalog.json` - meals, counters and the id sequence

mod catalog;

pub use catalog::FileCatalog;
