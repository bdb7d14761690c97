pub mod credential;
pub mod error;
pub mod hash_format;
