use thiserror::Error;

use domain::error::DomainError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("System failure: {message}")]
    SystemFailure { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Malformed password hash: {message}")]
    MalformedHash { message: String },

    #[error("Credential store error: {message}")]
    CredentialStore { message: String },
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::EmptyPassword => AppError::InvalidInput {
                message: error.to_string(),
            },
            DomainError::UnknownAlgorithm(_) => AppError::MalformedHash {
                message: error.to_string(),
            },
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
