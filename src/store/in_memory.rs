//! InMemoryMovieStore - Vec-backed movie store shared across request handlers.

use std::sync::{Arc, RwLock};

use super::{IdGenerator, MovieStore, RandomIds, StoreError};
use crate::movie::{seed_movies, Movie, MovieDraft};

/// In-memory movie store backed by an ordered `Vec`.
///
/// One lock guards the whole collection and every operation holds it for its
/// full scan-and-mutate sequence. Clone-friendly via Arc.
#[derive(Clone)]
pub struct InMemoryMovieStore {
    movies: Arc<RwLock<Vec<Movie>>>,
    ids: Arc<dyn IdGenerator>,
}

impl Default for InMemoryMovieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMovieStore {
    /// Create a new empty store with random ids.
    pub fn new() -> Self {
        Self::from_movies(Vec::new())
    }

    /// Create a store holding the three startup records.
    pub fn seeded() -> Self {
        Self::from_movies(seed_movies())
    }

    /// Create a store holding `movies` in the given order.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: Arc::new(RwLock::new(movies)),
            ids: Arc::new(RandomIds),
        }
    }

    /// Replace the id generator used by `create`.
    pub fn with_ids(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    /// Number of records currently stored.
    pub fn len(&self) -> Result<usize, StoreError> {
        let movies = self
            .movies
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(movies.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

fn position(movies: &[Movie], id: &str) -> Option<usize> {
    movies.iter().position(|movie| movie.id == id)
}

impl MovieStore for InMemoryMovieStore {
    fn list(&self) -> Result<Vec<Movie>, StoreError> {
        let movies = self
            .movies
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(movies.clone())
    }

    fn get(&self, id: &str) -> Result<Option<Movie>, StoreError> {
        let movies = self
            .movies
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(position(&movies, id).map(|index| movies[index].clone()))
    }

    fn create(&self, draft: MovieDraft) -> Result<Movie, StoreError> {
        let movie = draft.into_movie(self.ids.next_id());
        let mut movies = self
            .movies
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        movies.push(movie.clone());
        Ok(movie)
    }

    fn update(&self, id: &str, draft: MovieDraft) -> Result<Option<Movie>, StoreError> {
        let mut movies = self
            .movies
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;

        let Some(index) = position(&movies, id) else {
            return Ok(None);
        };

        movies.remove(index);
        let movie = draft.into_movie(id);
        movies.push(movie.clone());
        Ok(Some(movie))
    }

    fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut movies = self
            .movies
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;

        match position(&movies, id) {
            Some(index) => {
                movies.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
