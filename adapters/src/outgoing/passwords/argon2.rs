use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::Error as HashError,
};
use domain::hash_format::{HashAlgorithm, HashFormat};
use passproc_application::error::{AppError, AppResult};
use passproc_application::infrastructure_config::Argon2Config;
use passproc_application::ports::outgoing::password_hasher::PasswordHasherPort;
use password_hash::rand_core::{OsRng, RngCore};
use password_hash::{Salt, SaltString};

use super::bcrypt_mcf;

/// Argon2id hasher producing PHC strings.
///
/// Bcrypt hashes are recognized and verified too, but always reported as
/// needing a rehash so they migrate to Argon2id on the next successful login.
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
    params: Params,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        let params = Params::default();
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params.clone());
        Self { argon2, params }
    }

    pub fn from_config(config: &Argon2Config) -> AppResult<Self> {
        let output_length = config.output_length.unwrap_or(Params::DEFAULT_OUTPUT_LEN);

        let params = Params::new(
            config.memory_cost,
            config.time_cost,
            config.parallelism,
            Some(output_length),
        )
        .map_err(|e| AppError::ConfigError {
            message: format!("Invalid Argon2 parameters: {}", e),
        })?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params.clone());

        Ok(Self { argon2, params })
    }

    fn generate_salt() -> AppResult<SaltString> {
        let mut bytes = [0u8; Salt::RECOMMENDED_LENGTH];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| AppError::SystemFailure {
                message: format!("Failed to gather entropy for salt: {}", e),
            })?;

        SaltString::encode_b64(&bytes).map_err(|e| AppError::SystemFailure {
            message: format!("Failed to encode salt: {}", e),
        })
    }

    fn current_output_len(&self) -> usize {
        self.params
            .output_len()
            .unwrap_or(Params::DEFAULT_OUTPUT_LEN)
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasherPort for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> AppResult<String> {
        if password.is_empty() {
            return Err(AppError::InvalidInput {
                message: "Password cannot be empty".to_string(),
            });
        }

        let salt = Self::generate_salt()?;
        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::SystemFailure {
                message: format!("Failed to hash password: {}", e),
            })?;

        Ok(password_hash.to_string())
    }

    fn verify(&self, password: &str, password_hash: &str) -> AppResult<bool> {
        if password.is_empty() {
            return Ok(false);
        }

        if password_hash.is_empty() {
            return Err(AppError::MalformedHash {
                message: "Password hash cannot be empty".to_string(),
            });
        }

        if bcrypt_mcf::is_bcrypt_hash(password_hash) {
            return bcrypt_mcf::verify(password, password_hash);
        }

        let parsed_hash = PasswordHash::new(password_hash).map_err(|e| AppError::MalformedHash {
            message: format!("Invalid password hash format: {}", e),
        })?;

        match self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(AppError::MalformedHash {
                message: format!("Password verification failed: {}", e),
            }),
        }
    }

    fn identify(&self, password_hash: &str) -> HashFormat {
        if bcrypt_mcf::is_bcrypt_hash(password_hash) {
            return HashFormat::Recognized(HashAlgorithm::Bcrypt);
        }

        PasswordHash::new(password_hash)
            .ok()
            .and_then(|parsed| parsed.algorithm.as_str().parse::<HashAlgorithm>().ok())
            .filter(|algorithm| {
                matches!(
                    algorithm,
                    HashAlgorithm::Argon2id | HashAlgorithm::Argon2i | HashAlgorithm::Argon2d
                )
            })
            .map_or(HashFormat::Unrecognized, HashFormat::Recognized)
    }

    fn needs_rehash(&self, password_hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(password_hash) else {
            return true;
        };

        if parsed_hash.algorithm.as_str() != Algorithm::Argon2id.as_str()
            || parsed_hash.version != Some(u32::from(Version::V0x13))
        {
            return true;
        }

        let Ok(params) = Params::try_from(&parsed_hash) else {
            return true;
        };

        params.m_cost() != self.params.m_cost()
            || params.t_cost() != self.params.t_cost()
            || params.p_cost() != self.params.p_cost()
            || parsed_hash.hash.map(|output| output.len()) != Some(self.current_output_len())
    }
}
