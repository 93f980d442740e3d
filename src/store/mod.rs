//! Movie storage — the ordered collection behind the HTTP surface.
//!
//! The collection keeps insertion order. Creates append, updates remove the
//! old record and append its replacement, deletes remove in place.
//!
//! ## Example
//!
//! ```ignore
//! use movie_store::{InMemoryMovieStore, MovieDraft, MovieStore};
//!
//! let store = InMemoryMovieStore::seeded();
//! let created = store.create(MovieDraft::new("999", "X"))?;
//! assert_eq!(store.get(&created.id)?, Some(created));
//! ```

mod error;
mod ids;
mod in_memory;
mod store;

pub use error::StoreError;
pub use ids::{IdGenerator, RandomIds, MAX_RANDOM_ID};
pub use in_memory::InMemoryMovieStore;
pub use store::MovieStore;
