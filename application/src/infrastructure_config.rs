use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

const ARGON2_MIN_OUTPUT_LENGTH: usize = 4;
const ARGON2_MAX_OUTPUT_LENGTH: usize = 0xFFFF_FFFF;
const ARGON2_MAX_PARALLELISM: u32 = 0x00FF_FFFF;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub password: PasswordConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PasswordConfig {
    pub argon2: Argon2Config,
}

/// Work factor applied to every newly created hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argon2Config {
    pub memory_cost: u32,
    pub time_cost: u32,
    pub parallelism: u32,
    pub output_length: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub include_location: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "pretty")]
    Pretty,
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_cost: 19456,
            time_cost: 2,
            parallelism: 1,
            output_length: Some(32),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            include_location: false,
        }
    }
}

impl Argon2Config {
    pub fn validate(&self) -> AppResult<()> {
        if self.time_cost == 0 {
            return Err(AppError::ConfigError {
                message: "Argon2 time_cost must be at least 1".to_string(),
            });
        }

        if self.parallelism == 0 || self.parallelism > ARGON2_MAX_PARALLELISM {
            return Err(AppError::ConfigError {
                message: format!(
                    "Argon2 parallelism must be between 1 and {ARGON2_MAX_PARALLELISM}"
                ),
            });
        }

        if self.memory_cost < self.parallelism.saturating_mul(8) {
            return Err(AppError::ConfigError {
                message: format!(
                    "Argon2 memory_cost ({} KiB) must be at least 8 KiB per lane ({} lanes)",
                    self.memory_cost, self.parallelism
                ),
            });
        }

        if let Some(length) = self.output_length {
            if !(ARGON2_MIN_OUTPUT_LENGTH..=ARGON2_MAX_OUTPUT_LENGTH).contains(&length) {
                return Err(AppError::ConfigError {
                    message: format!(
                        "Argon2 output_length must be between {ARGON2_MIN_OUTPUT_LENGTH} and {ARGON2_MAX_OUTPUT_LENGTH} bytes"
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Config {
    pub fn validate(&self) -> AppResult<()> {
        self.password.argon2.validate()?;

        if self.logging.level.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "Logging level cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}
