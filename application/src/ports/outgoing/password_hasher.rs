use std::sync::Arc;

use crate::error::AppResult;
use domain::hash_format::HashFormat;

pub trait PasswordHasherPort: Send + Sync {
    fn hash(&self, password: &str) -> AppResult<String>;

    /// `Ok(false)` on mismatch. `AppError::MalformedHash` when the hash cannot be
    /// parsed or its parameters are out of range; callers treat that as a mismatch.
    fn verify(&self, password: &str, password_hash: &str) -> AppResult<bool>;

    fn identify(&self, password_hash: &str) -> HashFormat;

    /// Whether a recognized hash was produced with an algorithm or work factor
    /// other than the current one.
    fn needs_rehash(&self, password_hash: &str) -> bool;
}

pub type DynPasswordHasherPort = Arc<dyn PasswordHasherPort>;
