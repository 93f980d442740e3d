//! MovieStore - Abstract storage for the movie collection.

use super::StoreError;
use crate::movie::{Movie, MovieDraft};

/// Ordered storage of movie records.
///
/// Lookups return the first record (by insertion order) whose id matches.
pub trait MovieStore: Send + Sync {
    /// All records in insertion order.
    fn list(&self) -> Result<Vec<Movie>, StoreError>;

    /// Get a record by id. Returns None if not found.
    fn get(&self, id: &str) -> Result<Option<Movie>, StoreError>;

    /// Assign a fresh id to the draft and append it to the end of the collection.
    fn create(&self, draft: MovieDraft) -> Result<Movie, StoreError>;

    /// Replace the record with `id`, moving it to the end of the collection.
    /// Returns None (and changes nothing) if no record has that id.
    fn update(&self, id: &str, draft: MovieDraft) -> Result<Option<Movie>, StoreError>;

    /// Remove the record with `id`. Returns true if it existed.
    fn delete(&self, id: &str) -> Result<bool, StoreError>;
}
