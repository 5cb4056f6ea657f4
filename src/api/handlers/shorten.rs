//! Handler for the shorten endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortcode for a URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "shortcode": "example" }
/// ```
///
/// `shortcode` is optional; a random 6-character code is generated without it.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "shortcode": "example" }
/// ```
///
/// # Errors
///
/// - 400 `Bad Request` for a body that is not valid JSON
/// - 400 `url is not present`
/// - 422 when `shortcode` does not match `^[0-9a-zA-Z_]{4,}$`
/// - 409 when `shortcode` is already in use
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let created = state
        .shorten_service
        .shorten(payload.url, payload.shortcode)
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

#[cfg(test)]
mod tests {
    use super::super::test_server;
    use crate::domain::entities::ShortenedUrl;
    use crate::domain::repositories::MockShortcodeRepository;
    use crate::error::{AppError, MSG_SHORTCODE_IN_USE};
    use chrono::Utc;
    use serde_json::{Value, json};

    fn accepting_repo() -> MockShortcodeRepository {
        let mut mock_repo = MockShortcodeRepository::new();
        mock_repo.expect_insert().times(1).returning(|new_url| {
            Ok(ShortenedUrl::new(
                new_url.url,
                new_url.code,
                Utc::now(),
                0,
                None,
            ))
        });
        mock_repo
    }

    fn untouched_repo() -> MockShortcodeRepository {
        let mut mock_repo = MockShortcodeRepository::new();
        mock_repo.expect_insert().times(0);
        mock_repo
    }

    #[tokio::test]
    async fn test_shorten_generates_code() {
        let server = test_server(accepting_repo());

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
    }

    #[tokio::test]
    async fn test_shorten_with_preferred_code() {
        let server = test_server(accepting_repo());

        let response = server
            .post("/shorten")
            .json(&json!({ "url": "https://impraise.com", "shortcode": "Pref_01" }))
            .await;

        assert_eq!(response.status_code(), 201);
        assert_eq!(response.json::<Value>(), json!({ "shortcode": "Pref_01" }));
    }

    #[tokio::test]
    async fn test_shorten_without_body() {
        let server = test_server(untouched_repo());

        let response = server
            .post("/shorten")
            .content_type("application/json")
            .await;

        assert_eq!(response.status_code(), 400);
        assert_eq!(response.json::<Value>(), json!({ "message": "Bad Request" }));
    }

    #[tokio::test]
    async fn test_shorten_malformed_json() {
        let server = test_server(untouched_repo());

        let response = server
            .post("/shorten")
            .text("{\"url\": ")
            .content_type("application/json")
            .await;

        assert_eq!(response.status_code(), 400);
        assert_eq!(response.json::<Value>(), json!({ "message": "Bad Request" }));
    }

    #[tokio::test]
    async fn test_shorten_wrong_field_type() {
        let server = test_server(untouched_repo());

        let response = server.post("/shorten").json(&json!({ "url": 42 })).await;

        assert_eq!(response.status_code(), 400);
        assert_eq!(response.json::<Value>(), json!({ "message": "Bad Request" }));
    }

    #[tokio::test]
    async fn test_shorten_missing_url() {
        let server = test_server(untouched_repo());

        let response = server
            .post("/shorten")
            .json(&json!({ "adrian": "impraise" }))
            .await;

        assert_eq!(response.status_code(), 400);
        assert_eq!(
            response.json::<Value>(),
            json!({ "message": "url is not present" })
        );
    }

    #[tokio::test]
    async fn test_shorten_missing_url_wins_over_bad_code() {
        let server = test_server(untouched_repo());

        let response = server
            .post("/shorten")
            .json(&json!({ "shortcode": "!!" }))
            .await;

        assert_eq!(response.status_code(), 400);
        assert_eq!(
            response.json::<Value>(),
            json!({ "message": "url is not present" })
        );
    }

    #[tokio::test]
    async fn test_shorten_invalid_shortcode() {
        let server = test_server(untouched_repo());

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
    }

    #[tokio::test]
    async fn test_shorten_conflict() {
        let mut mock_repo = MockShortcodeRepository::new();
        mock_repo
            .expect_insert()
            .times(1)
            .returning(|_| Err(AppError::conflict(MSG_SHORTCODE_IN_USE)));

        let server = test_server(mock_repo);

        let response = server
            .post("/shorten")
            .json(&json!({ "url": "https://impraise.com", "shortcode": "taken1" }))
            .await;

        assert_eq!(response.status_code(), 409);
        assert_eq!(
            response.json::<Value>(),
            json!({ "message": "The desired shortcode is already in use" })
        );
    }

    #[tokio::test]
    async fn test_shorten_store_failure_is_generic() {
        let mut mock_repo = MockShortcodeRepository::new();
        mock_repo
            .expect_insert()
            .times(1)
            .returning(|_| Err(AppError::internal("Internal Server Error")));

        let server = test_server(mock_repo);

        let response = server
            .post("/shorten")
            .json(&json!({ "url": "https://impraise.com" }))
            .await;

        assert_eq!(response.status_code(), 500);
        assert_eq!(
            response.json::<Value>(),
            json!({ "message": "Internal Server Error" })
        );
    }
}
