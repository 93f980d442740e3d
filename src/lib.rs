//! movie_store — an in-memory movie record store served over HTTP.
//!
//! Records live in one ordered collection guarded by a single lock. The
//! `service` module exposes list, get, create, update and delete, and (with
//! the `http` feature) an axum router for them.

pub mod config;
pub mod movie;
pub mod service;
pub mod store;

pub use config::ServerConfig;
pub use movie::{seed_movies, Director, Movie, MovieDraft};
pub use service::{HandlerError, MovieService};
pub use store::{IdGenerator, InMemoryMovieStore, MovieStore, RandomIds, StoreError};
