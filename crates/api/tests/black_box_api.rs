use std::sync::Arc;

use libris_api::app::services::AppServices;
use libris_core::{ManualClock, SiteId};
use libris_infra::LendingPolicy;
use reqwest::StatusCode;
use serde_json::{json, Value};

struct TestServer {
    base_url: String,
    clock: Arc<ManualClock>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but on a manual clock and an ephemeral port.
        let clock = Arc::new(ManualClock::new(
            "2025-01-01T10:00:00Z".parse().unwrap(),
        ));
        let services = AppServices::in_memory(clock.clone(), LendingPolicy::default());
        let app = libris_api::app::build_app(services);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, clock, handle }
    }

    async fn post(&self, client: &reqwest::Client, path: &str, body: Value) -> (StatusCode, Value) {
        let res = client
            .post(format!("{}{}", self.base_url, path))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = res.status();
        (status, res.json().await.unwrap())
    }

    async fn get(&self, client: &reqwest::Client, path: &str) -> (StatusCode, Value) {
        let res = client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap();
        let status = res.status();
        (status, res.json().await.unwrap())
    }

    /// POST expecting success; returns the new id.
    async fn create(&self, client: &reqwest::Client, path: &str, body: Value) -> String {
        let (status, body) = self.post(client, path, body).await;
        assert_eq!(status, StatusCode::CREATED, "POST {path}: {body}");
        assert_eq!(body["success"], true);
        body["id"].as_str().unwrap().to_string()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

struct Catalog {
    book: String,
    north: String,
    south: String,
    user: String,
}

async fn seed(srv: &TestServer, client: &reqwest::Client, copies_at_north: usize) -> Catalog {
    let book = srv
        .create(
            client,
            "/books",
            json!({ "isbn": "978-0-06-093546-7", "title": "To Kill a Mockingbird", "author": "Lee" }),
        )
        .await;
    let north = srv.create(client, "/sites", json!({ "name": "North" })).await;
    let south = srv
        .create(client, "/sites", json!({ "name": "South", "address": "2 Low Rd" }))
        .await;
    let user = srv.create(client, "/users", json!({ "name": "Scout" })).await;
    for _ in 0..copies_at_north {
        srv.create(client, "/copies", json!({ "book_id": book, "site_id": north }))
            .await;
    }
    Catalog { book, north, south, user }
}

#[tokio::test]
async fn health_is_public() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn blank_registration_is_rejected_with_a_code() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (status, body) = srv
        .post(&client, "/books", json!({ "isbn": " ", "title": "T", "author": "A" }))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({ "success": false, "error_code": "INVALID_BOOK_DATA", "id": null }));
}

#[tokio::test]
async fn borrow_and_late_return_charge_the_account() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let cat = seed(&srv, &client, 1).await;

    let loan = srv
        .create(
            &client,
            "/loans",
            json!({ "user_id": cat.user, "book_id": cat.book, "site_id": cat.north }),
        )
        .await;

    let (status, loans) = srv.get(&client, &format!("/users/{}/loans", cat.user)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(loans.as_array().unwrap().len(), 1);
    assert_eq!(loans[0]["id"], loan.as_str());

    // Due 2025-01-15; returned 2025-01-18.
    srv.clock.set("2025-01-18T08:00:00Z".parse().unwrap());
    let (status, body) = srv
        .post(&client, &format!("/loans/{loan}/return"), json!({}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["penalty"], "1.50");

    let (status, user) = srv.get(&client, &format!("/users/{}", cat.user)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["amount_due"], "1.50");
    assert_eq!(user["active_loans_count"], 0);

    let (status, body) = srv
        .post(&client, &format!("/loans/{loan}/return"), json!({}))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error_code"], "INVALID_STATE");
}

#[tokio::test]
async fn sixth_borrow_hits_the_limit() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let cat = seed(&srv, &client, 6).await;
    let borrow = json!({ "user_id": cat.user, "book_id": cat.book, "site_id": cat.north });

    for _ in 0..5 {
        srv.create(&client, "/loans", borrow.clone()).await;
    }
    let (status, body) = srv.post(&client, "/loans", borrow).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_code"], "BORROW_LIMIT_REACHED");
}

#[tokio::test]
async fn unknown_entities_answer_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let cat = seed(&srv, &client, 0).await;

    let (status, body) = srv
        .post(
            &client,
            "/copies",
            json!({ "book_id": cat.book, "site_id": SiteId::new().to_string() }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_code"], "SITE_NOT_FOUND");

    let (status, body) = srv
        .post(&client, "/loans/not-a-uuid/return", json!({}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_id");
}

#[tokio::test]
async fn transfer_moves_a_copy_between_sites() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let cat = seed(&srv, &client, 1).await;

    let (status, body) = srv
        .post(
            &client,
            "/transfers",
            json!({ "book_id": cat.book, "source_site_id": cat.north, "target_site_id": cat.north }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_code"], "SOURCE_AND_TARGET_MUST_DIFFER");

    let (status, body) = srv
        .post(
            &client,
            "/transfers",
            json!({ "book_id": cat.book, "source_site_id": cat.north, "target_site_id": cat.south }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let copy = body["id"].as_str().unwrap().to_string();

    let (status, body) = srv
        .post(
            &client,
            &format!("/transfers/{copy}/receive"),
            json!({ "target_site_id": SiteId::nil().to_string() }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_code"], "INVALID_ARGUMENT");

    let (status, body) = srv
        .post(&client, &format!("/transfers/{copy}/receive"), json!({ "target_site_id": cat.south }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], copy.as_str());

    // The copy now lives at South.
    let loan = srv
        .create(
            &client,
            "/loans",
            json!({ "user_id": cat.user, "book_id": cat.book, "site_id": cat.south }),
        )
        .await;
    assert!(!loan.is_empty());
}

#[tokio::test]
async fn catalog_listings_show_copies_per_book() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let cat = seed(&srv, &client, 2).await;
    srv.create(&client, "/copies", json!({ "book_id": cat.book, "site_id": cat.south }))
        .await;
    srv.create(
        &client,
        "/loans",
        json!({ "user_id": cat.user, "book_id": cat.book, "site_id": cat.north }),
    )
    .await;

    let (status, copies) = srv.get(&client, &format!("/books/{}/copies", cat.book)).await;
    assert_eq!(status, StatusCode::OK);
    let copies = copies.as_array().unwrap();
    assert_eq!(copies.len(), 3);
    assert_eq!(copies.iter().filter(|c| c["status"] == "borrowed").count(), 1);
    assert_eq!(copies.iter().filter(|c| c["site_id"] == cat.south.as_str()).count(), 1);

    let (status, body) = srv
        .get(&client, &format!("/books/{}/copies", libris_core::BookId::new()))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let (_, books) = srv.get(&client, "/books").await;
    assert_eq!(books.as_array().unwrap().len(), 1);
    let (_, sites) = srv.get(&client, "/sites").await;
    assert_eq!(sites.as_array().unwrap().len(), 2);
    let (_, users) = srv.get(&client, "/users").await;
    assert_eq!(users[0]["active_loans_count"], 1);
}
