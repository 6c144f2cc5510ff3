//! The admin credential: Argon2id PHC strings.
//!
//! `ADMIN_PASSWORD_HASH` holds the output of [`hash_password`], produced by
//! the `showreel-hash-password` binary. Plaintext is never stored.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{Error as HashError, PasswordHash, PasswordHasher, SaltString};
use argon2::Argon2;
use showreel_core::error::CoreError;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hash with a fresh random salt and the default Argon2id parameters.
pub fn hash_password(password: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

/// `Ok(false)` for a wrong password. `Err` only when `stored` is not a
/// parseable PHC string or uses unsupported parameters.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, HashError> {
    let parsed = PasswordHash::new(stored)?;
    match parsed.verify_password(&[&Argon2::default()], password) {
        Ok(()) => Ok(true),
        Err(HashError::Password) => Ok(false),
        Err(other) => Err(other),
    }
}

/// Reject passwords shorter than [`MIN_PASSWORD_LENGTH`] characters.
pub fn check_new_password(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn hash_is_argon2id_and_verifies() {
        let stored = hash_password("correct-horse-battery").unwrap();
        assert!(stored.starts_with("$argon2id$"));
        assert_matches!(verify_password("correct-horse-battery", &stored), Ok(true));
    }

    #[test]
    fn wrong_password_is_false_not_error() {
        let stored = hash_password("correct-horse-battery").unwrap();
        assert_matches!(verify_password("incorrect", &stored), Ok(false));
    }

    #[test]
    fn salts_differ_between_hashes() {
        assert_ne!(hash_password("same").unwrap(), hash_password("same").unwrap());
    }

    #[test]
    fn garbage_hash_is_an_error() {
        assert!(verify_password("anything", "plaintext-in-env").is_err());
    }

    #[test]
    fn new_password_length() {
        assert_matches!(check_new_password("seven77"), Err(CoreError::Validation(_)));
        assert!(check_new_password("eight888").is_ok());
        // Counted in characters, not bytes.
        assert!(check_new_password("ééééééé").is_err());
    }
}
