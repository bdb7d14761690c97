use crate::error::{DomainError, DomainResult};

/// Password hash as held by a credential store.
///
/// An empty value is the "nothing stored" sentinel, so stores never have to
/// signal a missing identity through an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StoredHash(String);

impl StoredHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for StoredHash {
    fn from(hash: String) -> Self {
        Self(hash)
    }
}

impl From<&str> for StoredHash {
    fn from(hash: &str) -> Self {
        Self(hash.to_string())
    }
}

impl From<Option<String>> for StoredHash {
    fn from(hash: Option<String>) -> Self {
        hash.map_or_else(Self::empty, Self)
    }
}

impl AsRef<str> for StoredHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub fn ensure_password_present(password: &str) -> DomainResult<()> {
    if password.is_empty() {
        return Err(DomainError::EmptyPassword);
    }
    Ok(())
}
