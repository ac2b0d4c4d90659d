//! Password hashing with argon2id.
//!
//! Raw passwords exist only in request scope: they are hashed before storage
//! and never logged.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

/// Hash a password with a fresh random salt.
///
/// # Errors
/// Returns an error if salt generation or hashing fails.
pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);

    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// Verify a password against a stored PHC-format hash.
///
/// An unparseable stored hash verifies as false rather than erroring; the
/// caller treats it as a credential mismatch.
#[must_use]
pub fn verify(password: &str, stored: &str) -> bool {
    PasswordHash::new(stored).is_ok_and(|parsed| {
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let hashed = hash("p@ss").expect("hashing should succeed");
        assert!(verify("p@ss", &hashed));
    }

    #[test]
    fn wrong_password_rejected() {
        let hashed = hash("p@ss").expect("hashing should succeed");
        assert!(!verify("not-p@ss", &hashed));
    }

    #[test]
    fn hashes_are_salted() {
        let first = hash("p@ss").expect("hashing should succeed");
        let second = hash("p@ss").expect("hashing should succeed");
        assert_ne!(first, second);
    }

    #[test]
    fn garbage_stored_hash_verifies_false() {
        assert!(!verify("p@ss", "not-a-phc-string"));
    }
}
