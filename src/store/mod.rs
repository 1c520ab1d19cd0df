//! Persistence layer for the crawler
//!
//! Two stores live here: the durable visited-URL set (SQLite) that survives
//! restarts and is the sole dedup authority, and the page archive that
//! writes fetched bodies to disk.

mod pages;
mod schema;
mod visited;

pub use pages::PageStore;
pub use schema::initialize_schema;
pub use visited::{StoreError, StoreResult, VisitedStore};
