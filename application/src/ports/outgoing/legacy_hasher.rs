use std::sync::Arc;

/// Digest function of a pre-existing password scheme, used only to recognize
/// and migrate hashes the current hasher cannot identify.
pub trait LegacyHasherPort: Send + Sync {
    fn digest(&self, password: &str) -> String;
}

impl<F> LegacyHasherPort for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn digest(&self, password: &str) -> String {
        self(password)
    }
}

pub type DynLegacyHasherPort = Arc<dyn LegacyHasherPort>;
