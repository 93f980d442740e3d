//! HTTP transport for the movie service — maps routes to record operations.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /movies` — every movie as a JSON array, in insertion order.
//! - `GET /movies/:id` — one movie, or 404.
//! - `POST /movies` — create from a JSON body (any `id` ignored), 400 on a bad body.
//! - `PUT /movies/:id` — replace a movie, keeping the path id. 400 on a bad body, 404 on a miss.
//! - `DELETE /movies/:id` — remove a movie, empty 200 body, or 404.
//!
//! Successful responses are `application/json`. Errors carry their mapped
//! status and the error message as a plain-text body.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use super::error::HandlerError;
use super::movie_service::MovieService;
use crate::store::MovieStore;

const JSON: &str = "application/json";
const TEXT: &str = "text/plain; charset=utf-8";

/// Build an axum `Router` serving the movie routes from the given service.
pub fn router<S: MovieStore + 'static>(service: Arc<MovieService<S>>) -> Router {
    Router::new()
        .route(
            "/movies",
            get(list_handler::<S>).post(create_handler::<S>),
        )
        .route(
            "/movies/:id",
            get(get_handler::<S>)
                .put(update_handler::<S>)
                .delete(delete_handler::<S>),
        )
        .with_state(service)
}

/// Serve the movie routes over HTTP at the given address (e.g. `"0.0.0.0:8000"`).
pub async fn serve<S: MovieStore + 'static>(
    service: Arc<MovieService<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("starting server at {}", listener.local_addr()?);
    axum::serve(listener, app).await
}

/// `GET /movies`
async fn list_handler<S: MovieStore + 'static>(
    State(service): State<Arc<MovieService<S>>>,
) -> Response {
    let result = service.list().and_then(|movies| {
        debug!(count = movies.len(), "listing movies");
        json_body(&movies)
    });
    respond(result)
}

/// `GET /movies/:id`
async fn get_handler<S: MovieStore + 'static>(
    State(service): State<Arc<MovieService<S>>>,
    Path(id): Path<String>,
) -> Response {
    respond(service.get(&id).and_then(|movie| json_body(&movie)))
}

/// `POST /movies`
async fn create_handler<S: MovieStore + 'static>(
    State(service): State<Arc<MovieService<S>>>,
    body: Bytes,
) -> Response {
    let result = service.create(&body).and_then(|movie| {
        debug!(id = %movie.id, "created movie");
        json_body(&movie)
    });
    respond(result)
}

/// `PUT /movies/:id`
async fn update_handler<S: MovieStore + 'static>(
    State(service): State<Arc<MovieService<S>>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    let result = service.update(&id, &body).and_then(|movie| {
        debug!(id = %movie.id, "updated movie");
        json_body(&movie)
    });
    respond(result)
}

/// `DELETE /movies/:id`
async fn delete_handler<S: MovieStore + 'static>(
    State(service): State<Arc<MovieService<S>>>,
    Path(id): Path<String>,
) -> Response {
    let result = service.delete(&id).map(|()| {
        debug!(id = %id, "deleted movie");
        ([(header::CONTENT_TYPE, JSON)], ()).into_response()
    });
    respond(result)
}

/// Serialize `value` into a 200 JSON response.
fn json_body<T: Serialize>(value: &T) -> Result<Response, HandlerError> {
    let bytes = serde_json::to_vec(value).map_err(|e| HandlerError::Encode(e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, JSON)], bytes).into_response())
}

fn respond(result: Result<Response, HandlerError>) -> Response {
    match result {
        Ok(response) => response,
        Err(e) => {
            let status =
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            if status.is_server_error() {
                error!(%status, "{}", e);
            } else {
                warn!(%status, "{}", e);
            }
            (status, [(header::CONTENT_TYPE, TEXT)], e.to_string()).into_response()
        }
    }
}
