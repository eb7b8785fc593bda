//! Authentication service for the write endpoints.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::error::AppError;

/// Checks bearer tokens against the single pre-shared API token.
///
/// Only the SHA-256 digest of the configured token is kept. Presented tokens
/// are hashed the same way and compared in constant time, so the comparison
/// leaks neither content nor length.
pub struct AuthService {
    token_digest: Vec<u8>,
}

impl AuthService {
    /// Creates a new authentication service for `api_token`.
    pub fn new(api_token: &str) -> Self {
        Self {
            token_digest: Self::hash_token(api_token),
        }
    }

    fn hash_token(token: &str) -> Vec<u8> {
        Sha256::digest(token.as_bytes()).to_vec()
    }

    /// Authenticates a raw bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token does not match.
    pub fn authenticate(&self, token: &str) -> Result<(), AppError> {
        let presented = Self::hash_token(token);

        if bool::from(presented.as_slice().ct_eq(self.token_digest.as_slice())) {
            Ok(())
        } else {
            Err(AppError::unauthorized())
        }
    }
}
