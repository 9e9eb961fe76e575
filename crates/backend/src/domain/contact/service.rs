use contracts::shared::contact::ContactRequest;
use sea_orm::DatabaseConnection;
use thiserror::Error;

use super::repository;

#[derive(Debug, Error)]
pub enum ContactError {
    /// Honeypot field was filled in
    #[error("Spam detected")]
    Spam,
    #[error("{0}")]
    Invalid(String),
    #[error("Could not save your message")]
    Storage(#[from] anyhow::Error),
}

/// Check and store a contact/catering request. Returns the stored id.
pub async fn submit(
    conn: &DatabaseConnection,
    request: ContactRequest,
) -> Result<String, ContactError> {
    if request.is_spam() {
        tracing::warn!("Rejected contact submission with filled honeypot");
        return Err(ContactError::Spam);
    }

    let errors = request.validate();
    if !errors.is_empty() {
        let message = errors
            .iter()
            .map(|(_, message)| message)
            .collect::<Vec<_>>()
            .join("; ");
        tracing::info!("Rejected contact submission: {}", message);
        return Err(ContactError::Invalid(message));
    }

    let id = repository::insert(conn, &request).await?;
    tracing::info!("Stored contact message {} from {}", id, request.email.trim());
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db;

    fn request() -> ContactRequest {
        ContactRequest {
            name: " Meera ".into(),
            email: "meera@example.com".into(),
            phone: String::new(),
            message: "Birthday party for 25".into(),
            website: String::new(),
        }
    }

    async fn temp_db() -> DatabaseConnection {
        let path = std::env::temp_dir().join(format!("contact-{}.db", uuid::Uuid::new_v4()));
        db::open(&path).await.unwrap()
    }

    #[tokio::test]
    async fn test_valid_submission_is_stored() {
        let conn = temp_db().await;
        let id = submit(&conn, request()).await.unwrap();

        let stored = repository::list_all(&conn).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, id);
        assert_eq!(stored[0].name, "Meera");
        assert_eq!(stored[0].message, "Birthday party for 25");
    }

    #[tokio::test]
    async fn test_honeypot_is_rejected_and_not_stored() {
        let conn = temp_db().await;
        let mut spam = request();
        spam.website = "cheap-pills.example".into();

        let result = submit(&conn, spam).await;
        assert!(matches!(result, Err(ContactError::Spam)));
        assert!(repository::list_all(&conn).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_submission_lists_every_problem() {
        let conn = temp_db().await;
        let mut bad = request();
        bad.email = "meera@".into();
        bad.message = "   ".into();

        match submit(&conn, bad).await {
            Err(ContactError::Invalid(message)) => {
                assert_eq!(message, "Please enter a valid email; Message is required");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
