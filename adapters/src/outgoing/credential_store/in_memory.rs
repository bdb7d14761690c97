use std::borrow::Borrow;
use std::hash::Hash;

use dashmap::DashMap;
use tracing::{debug, instrument};

use domain::credential::StoredHash;
use passproc_application::error::AppResult;
use passproc_application::ports::outgoing::credential_store::CredentialStorePort;

/// Process-local credential store keyed by identity.
///
/// Lookups accept any borrowed form of the key, so an
/// `InMemoryCredentialStore<String>` serves as a `CredentialStorePort<str>`.
pub struct InMemoryCredentialStore<K> {
    hashes: DashMap<K, String>,
}

impl<K: Eq + Hash> InMemoryCredentialStore<K> {
    pub fn new() -> Self {
        Self {
            hashes: DashMap::new(),
        }
    }

    #[must_use]
    pub fn with_hash(self, identity: K, password_hash: impl Into<String>) -> Self {
        self.hashes.insert(identity, password_hash.into());
        self
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

impl<K: Eq + Hash> Default for InMemoryCredentialStore<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, Q> CredentialStorePort<Q> for InMemoryCredentialStore<K>
where
    K: Borrow<Q> + Eq + Hash + Send + Sync,
    Q: ToOwned<Owned = K> + Eq + Hash + ?Sized,
{
    #[instrument(skip_all)]
    fn password_hash(&self, identity: &Q) -> AppResult<StoredHash> {
        Ok(self
            .hashes
            .get(identity)
            .map(|entry| StoredHash::new(entry.value().as_str()))
            .unwrap_or_default())
    }

    #[instrument(skip_all)]
    fn set_password_hash(&self, identity: &Q, password_hash: &str) -> AppResult<()> {
        let replaced = self
            .hashes
            .insert(identity.to_owned(), password_hash.to_string())
            .is_some();
        debug!(replaced, "Stored password hash");
        Ok(())
    }
}
