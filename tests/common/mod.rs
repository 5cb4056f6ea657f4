#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use shorty::api::routes::routes;
use shorty::infrastructure::persistence::PgShortcodeRepository;
use shorty::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_repository(pool: PgPool) -> Arc<PgShortcodeRepository> {
    Arc::new(PgShortcodeRepository::new(Arc::new(pool)))
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(create_test_repository(pool))
}

pub fn create_test_app(pool: PgPool) -> Router {
    routes().with_state(create_test_state(pool))
}

pub fn create_test_server(pool: PgPool) -> TestServer {
    TestServer::new(create_test_app(pool)).unwrap()
}

pub async fn create_test_url(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (url, shortcode) VALUES ($1, $2)")
        .bind(url)
        .bind(code)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn redirect_count(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT redirects FROM urls WHERE shortcode = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}
