mod common;

use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test]
async fn test_shorten_url_only(pool: PgPool) {
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://impraise.com" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<Value>();
    let code = json["shortcode"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert!(json.get("url").is_none());

    let stored: String = sqlx::query_scalar("SELECT url FROM urls WHERE shortcode = $1")
        .bind(code)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, "https://impraise.com");
}

#[sqlx::test]
async fn test_shorten_with_preferred_code(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://impraise.com", "shortcode": "my_pref" }))
        .await;

    assert_eq!(response.status_code(), 201);
    assert_eq!(response.json::<Value>(), json!({ "shortcode": "my_pref" }));
}

#[sqlx::test]
async fn test_shorten_same_code_twice(pool: PgPool) {
    let server = common::create_test_server(pool.clone());

    server
        .post("/shorten")
        .json(&json!({ "url": "https://first.com", "shortcode": "twice1" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://second.com", "shortcode": "twice1" }))
        .await;

    assert_eq!(response.status_code(), 409);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "The desired shortcode is already in use" })
    );

    let stored: String = sqlx::query_scalar("SELECT url FROM urls WHERE shortcode = $1")
        .bind("twice1")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, "https://first.com");
}

#[sqlx::test]
async fn test_shorten_rejections(pool: PgPool) {
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/shorten")
        .content_type("application/json")
        .await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>(), json!({ "message": "Bad Request" }));

    let response = server
        .post("/shorten")
        .json(&json!({ "adrian": "impraise" }))
        .await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "url is not present" })
    );

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://impraise.com", "shortcode": "a!@#$%" }))
        .await;
    assert_eq!(response.status_code(), 422);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "message": "The shortcode fails to meet the following regexp: ^[0-9a-zA-Z_]{4,}$"
        })
    );

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
