use std::sync::Arc;

use crate::error::AppResult;
use domain::credential::StoredHash;

/// Lookup and upsert of password hashes keyed by an opaque identity.
pub trait CredentialStorePort<I: ?Sized>: Send + Sync {
    /// Returns an empty [`StoredHash`] when nothing is stored for `identity`.
    fn password_hash(&self, identity: &I) -> AppResult<StoredHash>;

    fn set_password_hash(&self, identity: &I, password_hash: &str) -> AppResult<()>;
}

pub type DynCredentialStorePort<I> = Arc<dyn CredentialStorePort<I>>;
