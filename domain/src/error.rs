use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("Unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
