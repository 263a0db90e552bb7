//! Password hashing for stored user credentials.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;

use crate::server::error::AppError;

/// Hashes a plaintext password using Argon2id with a random salt.
///
/// # Arguments
/// - `password` - Plaintext password from the request body
///
/// # Returns
/// - `Ok(String)` - PHC-formatted hash (algorithm, params, salt, and hash)
/// - `Err(AppError::PasswordHashErr)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::PasswordHashErr(e.to_string()))
}
