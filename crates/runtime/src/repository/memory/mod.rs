//! In-memory catalog for tests and throwaway sessions.

mod catalog;

pub use catalog::InMemoryCatalog;
