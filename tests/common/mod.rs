#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use purchase_tracker::{app, connect, ensure_schema, AppState, DatabaseConfig};
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt; // for oneshot

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    _dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Fresh database file per test; `tweak` adjusts the store settings before connecting.
    pub async fn with_config(tweak: impl FnOnce(&mut DatabaseConfig)) -> Self {
        Self::build(tweak, 100 * 1024).await
    }

    pub async fn with_body_limit(max_body_bytes: usize) -> Self {
        Self::build(|_| {}, max_body_bytes).await
    }

    async fn build(tweak: impl FnOnce(&mut DatabaseConfig), max_body_bytes: usize) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.sqlite");
        let mut config = DatabaseConfig::new(format!("sqlite://{}", path.display()));
        tweak(&mut config);
        let pool = connect(&config).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        let router = app(AppState::new(pool.clone()), max_body_bytes);
        Self {
            router,
            pool,
            _dir: dir,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(req).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: String) -> (StatusCode, Value) {
        let req = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        self.send(req).await
    }

    /// POST with an explicit `Content-Length`, as real HTTP clients send it.
    pub async fn post_with_length(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let body = body.to_string();
        let req = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CONTENT_LENGTH, body.len())
            .body(Body::from(body))
            .unwrap();
        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let resp = self.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn create_user(&self, name: &str, email: &str) -> i64 {
        let (status, body) = self
            .post("/users", serde_json::json!({ "name": name, "email": email }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "create user failed: {body}");
        body["id"].as_i64().unwrap()
    }

    pub async fn create_purchase(&self, user_id: i64, product: &str, price: f64, date: &str) -> Value {
        let (status, body) = self
            .post(
                "/purchases",
                serde_json::json!({
                    "user_id": user_id,
                    "product": product,
                    "price": price,
                    "purchase_date": date,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create purchase failed: {body}");
        body
    }

    pub async fn count(&self, table: &str) -> i64 {
        let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .unwrap();
        n
    }
}
