//! HTTP transport integration tests.
//!
//! Starts an axum server and exercises it with reqwest.

use std::sync::Arc;

use movie_store::service;
use movie_store::{InMemoryMovieStore, MovieService};
use serde_json::{json, Value};

use crate::support::{counting_service, seeded_service};

/// Bind to port 0 and return the actual address.
async fn start_server(service: MovieService<InMemoryMovieStore>) -> String {
    let app = service::router(Arc::new(service));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn content_type(resp: &reqwest::Response) -> &str {
    resp.headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

async fn list_ids(client: &reqwest::Client, base: &str) -> Vec<String> {
    let body: Value = client
        .get(format!("{base}/movies"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    body.as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn list_returns_seed() {
    let base = start_server(seeded_service()).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/movies")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(content_type(&resp), "application/json");

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 3);
    assert_eq!(
        body[0],
        json!({
            "id": "1",
            "isbn": "438227",
            "title": "Movie Allok",
            "director": { "firstname": "Allok", "lastname": "Raj" }
        })
    );
}

#[tokio::test]
async fn get_one() {
    let base = start_server(seeded_service()).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/movies/3")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["title"], "Movie Raj");
    assert_eq!(body["director"]["firstname"], "Jigyasha");
}

#[tokio::test]
async fn get_missing_returns_404() {
    let base = start_server(seeded_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/movies/nonexistent"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    assert!(content_type(&resp).starts_with("text/plain"));
}

#[tokio::test]
async fn create_then_get() {
    let base = start_server(counting_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/movies"))
        .json(&json!({ "id": "ignored", "isbn": "999", "title": "X" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let created: Value = resp.json().await.unwrap();
    assert_eq!(
        created,
        json!({ "id": "1000", "isbn": "999", "title": "X", "director": null })
    );

    let fetched: Value = client
        .get(format!("{base}/movies/1000"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);
    assert_eq!(list_ids(&client, &base).await, vec!["1", "2", "3", "1000"]);
}

#[tokio::test]
async fn create_without_content_type_still_decodes() {
    let base = start_server(seeded_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/movies"))
        .body(r#"{"isbn":"1","title":"Plain"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn create_bad_body_returns_400() {
    let base = start_server(seeded_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/movies"))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(list_ids(&client, &base).await.len(), 3);
}

#[tokio::test]
async fn update_moves_to_end() {
    let base = start_server(seeded_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/movies/2"))
        .json(&json!({ "id": "77", "isbn": "x", "title": "y" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(content_type(&resp), "application/json");

    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "id": "2", "isbn": "x", "title": "y", "director": null })
    );
    assert_eq!(list_ids(&client, &base).await, vec!["1", "3", "2"]);
}

#[tokio::test]
async fn update_missing_returns_404() {
    let base = start_server(seeded_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/movies/404"))
        .json(&json!({ "isbn": "x", "title": "y" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    assert_eq!(list_ids(&client, &base).await, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn update_bad_body_returns_400() {
    let base = start_server(seeded_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/movies/1"))
        .body("[")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn delete_then_delete_again() {
    let base = start_server(seeded_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{base}/movies/2"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(content_type(&resp), "application/json");
    assert!(resp.bytes().await.unwrap().is_empty());

    assert_eq!(list_ids(&client, &base).await, vec!["1", "3"]);

    let resp = client
        .delete(format!("{base}/movies/2"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn unsupported_method_returns_405() {
    let base = start_server(seeded_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{base}/movies"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 405);
}
