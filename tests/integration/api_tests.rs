//! Smoke tests against a running server

use reqwest::{redirect::Policy, Client, StatusCode};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000";

/// Redirects are asserted on, never followed
fn client() -> Client {
    Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("Failed to build client")
}

async fn all_books(client: &Client) -> Vec<Value> {
    let response = client
        .get(format!("{}/all", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    body.as_array().expect("Expected a JSON array").clone()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = client();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_root_redirect() {
    let response = client()
        .get(format!("{}/", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()["location"], "/books");
}

#[tokio::test]
#[ignore]
async fn test_create_update_and_delete_book() {
    let client = client();

    // Create
    let response = client
        .post(format!("{}/books/new", BASE_URL))
        .form(&[
            ("title", "Smoke Test Book"),
            ("author", "Integration"),
            ("genre", ""),
            ("year", "2024"),
        ])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::FOUND);

    let books = all_books(&client).await;
    let book = &books[0];
    assert_eq!(book["title"], "Smoke Test Book");
    let id = book["id"].as_i64().expect("No book ID");

    // Update
    let response = client
        .post(format!("{}/books/{}", BASE_URL, id))
        .form(&[("title", "Smoke Test Book (2nd ed.)"), ("author", "Integration")])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::FOUND);

    let books = all_books(&client).await;
    let updated = books
        .iter()
        .find(|b| b["id"].as_i64() == Some(id))
        .expect("Updated book missing");
    assert_eq!(updated["title"], "Smoke Test Book (2nd ed.)");

    // Delete
    let response = client
        .post(format!("{}/books/{}/delete", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::FOUND);

    let books = all_books(&client).await;
    assert!(books.iter().all(|b| b["id"].as_i64() != Some(id)));
}

#[tokio::test]
#[ignore]
async fn test_create_without_title_redisplays_form() {
    let response = client()
        .post(format!("{}/books/new", BASE_URL))
        .form(&[("title", ""), ("author", ""), ("genre", "Satire"), ("year", "1726")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let page = response.text().await.expect("Failed to read body");
    assert!(page.contains("value=\"Satire\""));
    assert!(page.contains("is required"));
}

#[tokio::test]
#[ignore]
async fn test_missing_book() {
    let response = client()
        .get(format!("{}/books/2147483647", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
