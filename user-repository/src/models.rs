use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use user_domain::user::{normalize_email, normalize_name};

use crate::error::RepositoryError;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

impl CreateUserRequest {
    pub fn validate(self) -> Result<Self, RepositoryError> {
        Ok(Self {
            name: normalize_name(&self.name)?,
            email: normalize_email(&self.email)?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserRequest {
    pub fn validate(self) -> Result<Self, RepositoryError> {
        let name = match self.name {
            Some(name) => Some(normalize_name(&name)?),
            None => None,
        };
        let email = match self.email {
            Some(email) => Some(normalize_email(&email)?),
            None => None,
        };
        Ok(Self { name, email })
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{CreateUserRequest, UpdateUserRequest};

    #[test]
    fn create_request_normalizes_fields() {
        let req = CreateUserRequest {
            name: "  Alice  ".to_string(),
            email: "  ALICE@Example.com ".to_string(),
        };

        let validated = req.validate().expect("must validate");
        assert_eq!(validated.name, "Alice");
        assert_eq!(validated.email, "alice@example.com");
    }

    #[test]
    fn create_request_rejects_bad_email() {
        let req = CreateUserRequest {
            name: "Alice".to_string(),
            email: "not-an-email".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn update_request_validates_only_present_fields() {
        let req = UpdateUserRequest {
            name: None,
            email: Some("new@example.com".to_string()),
        };
        let validated = req.validate().expect("must validate");
        assert!(validated.name.is_none());
        assert_eq!(validated.email.as_deref(), Some("new@example.com"));

        let bad = UpdateUserRequest {
            name: Some("x".to_string()),
            email: None,
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn empty_update_request_is_detected() {
        assert!(UpdateUserRequest::default().is_empty());
        assert!(
            !UpdateUserRequest {
                name: Some("Alice".to_string()),
                email: None,
            }
            .is_empty()
        );
    }
}
