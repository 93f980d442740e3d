//! Movie service — the five record operations and their HTTP transport.
//!
//! `MovieService<S>` wraps a `MovieStore` and turns raw request payloads
//! and path ids into store calls, reporting misses and bad payloads as
//! `HandlerError`s that carry an HTTP status.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use movie_store::{InMemoryMovieStore, MovieService};
//!
//! let service = Arc::new(MovieService::new(InMemoryMovieStore::seeded()));
//! let created = service.create(br#"{"isbn":"999","title":"X"}"#)?;
//!
//! // HTTP transport (requires "http" feature)
//! // movie_store::service::serve(service, "0.0.0.0:8000").await?;
//! ```

mod error;
#[cfg(feature = "http")]
mod http;
mod movie_service;

pub use error::HandlerError;
#[cfg(feature = "http")]
pub use http::{router, serve};
pub use movie_service::MovieService;
