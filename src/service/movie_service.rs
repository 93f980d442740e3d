use crate::movie::{Movie, MovieDraft};
use crate::store::MovieStore;

use super::error::HandlerError;

/// The movie record operations over a shared store.
///
/// Generic over `S`, the store type. Payload-carrying operations take the
/// raw request body and decode it before the store is touched.
pub struct MovieService<S> {
    store: S,
}

impl<S: MovieStore> MovieService<S> {
    /// Create a new service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Every movie, in insertion order.
    pub fn list(&self) -> Result<Vec<Movie>, HandlerError> {
        Ok(self.store.list()?)
    }

    /// The first movie with `id`, or `NotFound`.
    pub fn get(&self, id: &str) -> Result<Movie, HandlerError> {
        self.store
            .get(id)?
            .ok_or_else(|| HandlerError::NotFound(id.to_string()))
    }

    /// Decode `body` as a movie and store it under a freshly assigned id.
    pub fn create(&self, body: &[u8]) -> Result<Movie, HandlerError> {
        let draft = MovieDraft::from_json(body)?;
        Ok(self.store.create(draft)?)
    }

    /// Decode `body` and replace the movie with `id`.
    ///
    /// The replacement keeps the path id and moves to the end of the
    /// collection. A missing id is `NotFound`.
    pub fn update(&self, id: &str, body: &[u8]) -> Result<Movie, HandlerError> {
        let draft = MovieDraft::from_json(body)?;
        self.store
            .update(id, draft)?
            .ok_or_else(|| HandlerError::NotFound(id.to_string()))
    }

    /// Remove the first movie with `id`, or `NotFound`.
    pub fn delete(&self, id: &str) -> Result<(), HandlerError> {
        if self.store.delete(id)? {
            Ok(())
        } else {
            Err(HandlerError::NotFound(id.to_string()))
        }
    }
}
