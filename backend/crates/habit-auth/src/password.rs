//! Argon2id password hashing. Hashes are stored as PHC strings.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::Argon2;
use argon2::password_hash::{
    Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use error_location::ErrorLocation;

#[track_caller]
pub fn hash_password(plain: &str) -> AuthErrorResult<String> {
    let caller = Location::caller();

    let salt = SaltString::encode_b64(&rand::random::<[u8; 16]>()).map_err(|e| {
        AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(caller),
        }
    })?;

    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(caller),
        })
}

/// `Ok(false)` on a wrong password; `Err` only when the stored hash is unusable
#[track_caller]
pub fn verify_password(plain: &str, hash: &str) -> AuthErrorResult<bool> {
    let caller = Location::caller();

    let parsed = PasswordHash::new(hash).map_err(|e| AuthError::PasswordHash {
        message: e.to_string(),
        location: ErrorLocation::from(caller),
    })?;

    match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(e) => Err(AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(caller),
        }),
    }
}
