use passproc_application::error::{AppError, AppResult};

const BCRYPT_HASH_LENGTH: usize = 60;
const BCRYPT_PREFIXES: [&str; 4] = ["$2a$", "$2b$", "$2x$", "$2y$"];

/// Modular crypt format check: `$2?$NN$` followed by 53 radix-64 characters.
pub fn is_bcrypt_hash(hash: &str) -> bool {
    if hash.len() != BCRYPT_HASH_LENGTH || !BCRYPT_PREFIXES.iter().any(|p| hash.starts_with(p)) {
        return false;
    }

    let cost_is_numeric = hash
        .get(4..6)
        .is_some_and(|cost| cost.bytes().all(|b| b.is_ascii_digit()));
    let separator = hash.as_bytes().get(6) == Some(&b'$');
    let body_is_radix64 = hash.get(7..).is_some_and(|body| {
        body.bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'/')
    });

    cost_is_numeric && separator && body_is_radix64
}

pub fn verify(password: &str, hash: &str) -> AppResult<bool> {
    bcrypt::verify(password, hash).map_err(|e| AppError::MalformedHash {
        message: format!("Invalid bcrypt hash: {}", e),
    })
}
