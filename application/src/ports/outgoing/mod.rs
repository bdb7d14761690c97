pub mod credential_store;
pub mod legacy_hasher;
pub mod password_hasher;
