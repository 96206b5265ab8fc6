use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    pub username: String,
    pub content: String,
}

impl CreateMessageRequest {
    pub fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            username: normalize_username(&self.username)?,
            content: normalize_content(&self.content)?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMessageRequest {
    pub content: String,
}

impl UpdateMessageRequest {
    pub fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            content: normalize_content(&self.content)?,
        })
    }
}

impl Message {
    pub fn new(
        id: i64,
        username: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if id <= 0 {
            return Err(DomainError::Validation {
                field: "id",
                message: "must be > 0",
            });
        }
        let username = normalize_username(&username.into())?;
        let content = normalize_content(&content.into())?;

        if updated_at < created_at {
            return Err(DomainError::Validation {
                field: "updated_at",
                message: "must be >= created_at",
            });
        }

        Ok(Self {
            id,
            username,
            content,
            created_at,
            updated_at,
        })
    }
}

fn normalize_username(username: &str) -> Result<String, DomainError> {
    let username = username.trim();
    if username.is_empty() || username.chars().count() > 50 {
        return Err(DomainError::Validation {
            field: "username",
            message: "must be 1..50 chars",
        });
    }
    Ok(username.to_string())
}

fn normalize_content(content: &str) -> Result<String, DomainError> {
    let content = content.trim();
    if content.is_empty() || content.chars().count() > 500 {
        return Err(DomainError::Validation {
            field: "content",
            message: "must be 1..500 chars",
        });
    }
    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::{CreateMessageRequest, DomainError, Message, UpdateMessageRequest};

    #[test]
    fn create_request_validate_rejects_blank_username() {
        let req = CreateMessageRequest {
            username: "   ".to_string(),
            content: "valid content".to_string(),
        };

        let err = req.validate().expect_err("username must be rejected");
        assert_validation_field(err, "username");
    }

    #[test]
    fn create_request_validate_rejects_oversized_content() {
        let req = CreateMessageRequest {
            username: "alice".to_string(),
            content: "x".repeat(501),
        };

        let err = req.validate().expect_err("content must be rejected");
        assert_validation_field(err, "content");
    }

    #[test]
    fn create_request_validate_normalizes_fields() {
        let req = CreateMessageRequest {
            username: "  alice  ".to_string(),
            content: "  hello  ".to_string(),
        };

        let validated = req.validate().expect("must validate");
        assert_eq!(validated.username, "alice");
        assert_eq!(validated.content, "hello");
    }

    #[test]
    fn update_request_validate_rejects_blank_content() {
        let req = UpdateMessageRequest {
            content: "   ".to_string(),
        };

        let err = req.validate().expect_err("content must be rejected");
        assert_validation_field(err, "content");
    }

    #[test]
    fn message_new_normalizes_and_builds_message() {
        let created_at = Utc::now();
        let updated_at = created_at + Duration::seconds(1);

        let message = Message::new(1, "  alice  ", "  hi  ", created_at, updated_at)
            .expect("message should be created");

        assert_eq!(message.id, 1);
        assert_eq!(message.username, "alice");
        assert_eq!(message.content, "hi");
    }

    #[test]
    fn message_new_rejects_non_positive_id() {
        let now = Utc::now();
        let err = Message::new(0, "alice", "hi", now, now).expect_err("id must be > 0");
        assert_validation_field(err, "id");
    }

    #[test]
    fn message_new_rejects_updated_before_created() {
        let updated_at = Utc::now();
        let created_at = updated_at + Duration::seconds(1);

        let err = Message::new(1, "alice", "hi", created_at, updated_at)
            .expect_err("updated_at < created_at must fail");
        assert_validation_field(err, "updated_at");
    }

    fn assert_validation_field(err: DomainError, expected_field: &'static str) {
        match err {
            DomainError::Validation { field, .. } => assert_eq!(field, expected_field),
            _ => panic!("expected DomainError::Validation"),
        }
    }
}
