use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;

use super::error::DomainError;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").expect("invalid email regex")
});

/// A user entity. The password field holds the raw password until the
/// caller hashes it; it is never serialized.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let email = normalize_email(&email.into())?;
        let name = normalize_name(&name.into())?;
        let password = password.into();
        validate_password(&password)?;

        let now = Utc::now();

        Ok(Self {
            id: 0,
            email,
            name,
            password,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validate_email(&self.email)?;
        validate_name(&self.name)?;
        validate_password(&self.password)?;
        Ok(())
    }

    pub fn update_name(&mut self, name: &str) -> Result<(), DomainError> {
        self.name = normalize_name(name)?;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn update_email(&mut self, email: &str) -> Result<(), DomainError> {
        self.email = normalize_email(email)?;
        self.updated_at = Utc::now();
        Ok(())
    }
}

pub fn validate_email(email: &str) -> Result<(), DomainError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(DomainError::Validation {
            field: "email",
            message: "must not be empty",
        });
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(DomainError::Validation {
            field: "email",
            message: "must be a valid email",
        });
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), DomainError> {
    let len = name.trim().chars().count();
    if len < 2 || len > 50 {
        return Err(DomainError::Validation {
            field: "name",
            message: "must be 2..50 chars",
        });
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), DomainError> {
    if password.chars().count() < 8 {
        return Err(DomainError::Validation {
            field: "password",
            message: "must be at least 8 characters",
        });
    }

    let has_upper = password.chars().any(|ch| ch.is_ascii_uppercase());
    let has_lower = password.chars().any(|ch| ch.is_ascii_lowercase());
    let has_digit = password.chars().any(|ch| ch.is_ascii_digit());

    if !has_upper || !has_lower || !has_digit {
        return Err(DomainError::Validation {
            field: "password",
            message: "must contain upper, lower, and digit",
        });
    }
    Ok(())
}

pub fn normalize_email(email: &str) -> Result<String, DomainError> {
    let email = email.trim().to_lowercase();
    validate_email(&email)?;
    Ok(email)
}

pub fn normalize_name(name: &str) -> Result<String, DomainError> {
    validate_name(name)?;
    Ok(name.trim().to_string())
}
