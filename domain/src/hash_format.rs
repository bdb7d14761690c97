use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Argon2id,
    Argon2i,
    Argon2d,
    Bcrypt,
}

impl HashAlgorithm {
    pub fn ident(self) -> &'static str {
        match self {
            Self::Argon2id => "argon2id",
            Self::Argon2i => "argon2i",
            Self::Argon2d => "argon2d",
            Self::Bcrypt => "bcrypt",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ident())
    }
}

/// Accepts PHC identifiers as well as the bcrypt MCF revision tags.
impl FromStr for HashAlgorithm {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "argon2id" => Ok(Self::Argon2id),
            "argon2i" => Ok(Self::Argon2i),
            "argon2d" => Ok(Self::Argon2d),
            "bcrypt" | "2a" | "2b" | "2x" | "2y" => Ok(Self::Bcrypt),
            other => Err(DomainError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Result of inspecting a stored hash's self-describing prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashFormat {
    Recognized(HashAlgorithm),
    Unrecognized,
}

impl HashFormat {
    pub fn is_recognized(self) -> bool {
        matches!(self, Self::Recognized(_))
    }
}
