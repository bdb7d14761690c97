pub mod argon2;
pub mod bcrypt_mcf;
