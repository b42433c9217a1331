//! Black-box HTTP tests.
//!
//! Each test spawns the production router over a fresh in-memory database on an
//! ephemeral port and talks to it with `reqwest`.

use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};

use crate::server::{router::router, state::AppState};


struct TestServer {
    base_url: String,
    client: reqwest::Client,
    handle: tokio::task::JoinHandle<()>,
    _context: TestContext,
}

impl TestServer {
    async fn spawn() -> Self {
        let context = TestBuilder::new().with_rental_tables().build().await.unwrap();
        let db = context.db.clone().unwrap();

        let app = router(AppState::new(db, "Car Reservation API"));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            client: reqwest::Client::new(),
            handle,
            _context: context,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        let res = self.client.get(self.url(path)).send().await.unwrap();
        (res.status(), res.json().await.unwrap())
    }

    async fn post(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let res = self.client.post(self.url(path)).json(body).send().await.unwrap();
        (res.status(), res.json().await.unwrap())
    }

    async fn put(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let res = self.client.put(self.url(path)).json(body).send().await.unwrap();
        (res.status(), res.json().await.unwrap())
    }

    async fn delete(&self, path: &str) -> (StatusCode, Value) {
        let res = self.client.delete(self.url(path)).send().await.unwrap();
        (res.status(), res.json().await.unwrap())
    }

    /// Creates a car through the API and returns its `carId`.
    async fn create_car(&self, license: &str) -> i64 {
        let (status, body) = self.post("/cars", &car_body(license)).await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        body["data"]["carId"].as_i64().unwrap()
    }

    /// Creates a user through the API and returns its `client` key.
    async fn create_user(&self, national_id: i64) -> i64 {
        let (status, body) = self.post("/users", &user_body(national_id)).await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        body["data"]["client"].as_i64().unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn car_body(license: &str) -> Value {
    json!({
        "id": license,
        "maker": "mercedes-benz",
        "model": 2023,
        "ref": "GLC300",
        "color": "blue",
        "milage": 31278
    })
}

fn user_body(national_id: i64) -> Value {
    json!({
        "id": national_id,
        "name": "Walter",
        "lastname": "White",
        "dob": "1973-06-12"
    })
}
