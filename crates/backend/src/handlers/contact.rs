use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::contact::{ContactRequest, ContactResponse};
use sea_orm::DatabaseConnection;

use crate::domain::contact::service::{self, ContactError};
use crate::shared::data::db::get_connection;

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let status = match &self {
            ContactError::Spam | ContactError::Invalid(_) => StatusCode::BAD_REQUEST,
            ContactError::Storage(e) => {
                tracing::error!("Failed to store contact message: {:#}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(ContactResponse::failure(self.to_string()))).into_response()
    }
}

/// POST /api/contact
pub async fn submit(
    Json(request): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, ContactError> {
    submit_to(get_connection(), request).await
}

async fn submit_to(
    conn: &DatabaseConnection,
    request: ContactRequest,
) -> Result<Json<ContactResponse>, ContactError> {
    service::submit(conn, request).await?;
    Ok(Json(ContactResponse::success()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db;

    async fn temp_db() -> DatabaseConnection {
        let path = std::env::temp_dir().join(format!("contact-http-{}.db", uuid::Uuid::new_v4()));
        db::open(&path).await.unwrap()
    }

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Anil".into(),
            email: "anil@example.com".into(),
            phone: String::new(),
            message: "Table for six on Friday?".into(),
            website: String::new(),
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_accepted_message_returns_ok_body() {
        let conn = temp_db().await;
        let response = submit_to(&conn, request()).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({ "ok": true }));
    }

    #[tokio::test]
    async fn test_spam_returns_400_with_message() {
        let conn = temp_db().await;
        let mut spam = request();
        spam.website = "http://spam.example".into();

        let response = submit_to(&conn, spam).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "ok": false, "error": "Spam detected" })
        );
    }

    #[tokio::test]
    async fn test_invalid_message_returns_400_naming_the_field() {
        let conn = temp_db().await;
        let mut missing = request();
        missing.name = String::new();

        let response = submit_to(&conn, missing).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "ok": false, "error": "Name is required" })
        );
    }

    #[tokio::test]
    async fn test_storage_failure_returns_500() {
        let response = ContactError::Storage(anyhow::anyhow!("database is locked")).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "ok": false, "error": "Could not save your message" })
        );
    }
}
