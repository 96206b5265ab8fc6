use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use thiserror::Error;

use super::error::DomainError;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("password cannot be empty")]
    Empty,

    #[error("password hashing failed: {0}")]
    Hash(String),
}

/// Hashes and verifies passwords with Argon2id under fixed cost parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordService;

impl PasswordService {
    pub fn new() -> Self {
        Self
    }

    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::Empty);
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| PasswordError::Hash(err.to_string()))?;
        Ok(hash.to_string())
    }

    pub fn verify(&self, password: &str, hash: &str) -> bool {
        if password.is_empty() || hash.is_empty() {
            return false;
        }
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };
        let Ok(hasher) = argon2() else {
            return false;
        };
        hasher
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

/// Baseline password policy, weaker than the one enforced for user entities:
/// at least 6 characters with at least one letter and one digit.
pub fn validate(password: &str) -> Result<(), DomainError> {
    if password.chars().count() < 6 {
        return Err(DomainError::Validation {
            field: "password",
            message: "must be at least 6 characters",
        });
    }

    let has_letter = password.chars().any(|ch| ch.is_ascii_alphabetic());
    let has_digit = password.chars().any(|ch| ch.is_ascii_digit());

    if !has_letter || !has_digit {
        return Err(DomainError::Validation {
            field: "password",
            message: "must contain at least one letter and one number",
        });
    }
    Ok(())
}

fn argon2() -> Result<Argon2<'static>, PasswordError> {
    let params =
        Params::new(19 * 1024, 2, 1, None).map_err(|err| PasswordError::Hash(err.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

#[cfg(test)]
mod tests {
    use super::{PasswordError, PasswordService, validate};

    #[test]
    fn hash_rejects_empty_password() {
        let service = PasswordService::new();
        let err = service.hash("").expect_err("empty password must be rejected");
        assert!(matches!(err, PasswordError::Empty));
    }

    #[test]
    fn hash_then_verify_round_trip() {
        let service = PasswordService::new();
        let hash = service.hash("secret1").expect("hash must succeed");

        assert!(service.verify("secret1", &hash));
        assert!(!service.verify("wrong-password", &hash));
    }

    #[test]
    fn verify_is_false_on_empty_inputs() {
        let service = PasswordService::new();
        let hash = service.hash("secret1").expect("hash must succeed");

        assert!(!service.verify("", &hash));
        assert!(!service.verify("secret1", ""));
        assert!(!service.verify("secret1", "not-a-phc-string"));
    }

    #[test]
    fn validate_requires_length_letter_and_digit() {
        assert!(validate("abc1de").is_ok());
        assert!(validate("a1").is_err());
        assert!(validate("abcdef").is_err());
        assert!(validate("123456").is_err());
    }
}
