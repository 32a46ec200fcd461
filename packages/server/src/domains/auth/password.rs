//! Password hashing and verification using Argon2id.
//!
//! The rest of the crate treats this as an opaque capability: hash on
//! register, verify on login. Digests are PHC strings safe for storage.

use anyhow::{anyhow, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let digest = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("Password hashing failed: {e}"))?
        .to_string();
    Ok(digest)
}

/// Verify a plaintext password against a stored digest.
///
/// A mismatch is `Ok(false)`; only malformed digests or hasher failures
/// are errors.
pub fn verify_password(password: &str, digest: &str) -> Result<bool> {
    let parsed = PasswordHash::new(digest).map_err(|e| anyhow!("Invalid password digest: {e}"))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(anyhow!("Password verification failed: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let digest = hash_password("hunter2!").unwrap();
        assert!(verify_password("hunter2!", &digest).unwrap());
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let digest = hash_password("hunter2!").unwrap();
        assert!(!verify_password("hunter3!", &digest).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        // Per-password random salts
        assert_ne!(
            hash_password("hunter2!").unwrap(),
            hash_password("hunter2!").unwrap()
        );
    }

    #[test]
    fn malformed_digest_is_an_error() {
        assert!(verify_password("hunter2!", "not-a-phc-string").is_err());
    }
}
