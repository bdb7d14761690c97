#[cfg(any(
    feature = "adapters",
    feature = "argon2",
    feature = "bcrypt",
    feature = "dashmap"
))]
compile_error!("application must not depend on adapters/hashing crates");

pub mod error;
pub mod infrastructure_config;
pub mod password;
pub mod ports;
