use subtle::ConstantTimeEq;
use tracing::{debug, info, instrument, warn};

use crate::error::{AppError, AppResult};
use crate::ports::incoming::password::PasswordUseCase;
use crate::ports::outgoing::credential_store::DynCredentialStorePort;
use crate::ports::outgoing::legacy_hasher::{DynLegacyHasherPort, LegacyHasherPort};
use crate::ports::outgoing::password_hasher::DynPasswordHasherPort;
use domain::credential::{StoredHash, ensure_password_present};
use domain::hash_format::{HashAlgorithm, HashFormat};

/// Creates, stores and verifies password hashes, upgrading stale or legacy
/// hashes in the credential store whenever a password verifies.
pub struct PasswordProcessor<I: ?Sized> {
    credential_store: DynCredentialStorePort<I>,
    password_hasher: DynPasswordHasherPort,
    legacy_hasher: Option<DynLegacyHasherPort>,
}

impl<I: ?Sized> PasswordProcessor<I> {
    pub fn new(
        credential_store: DynCredentialStorePort<I>,
        password_hasher: DynPasswordHasherPort,
    ) -> Self {
        Self {
            credential_store,
            password_hasher,
            legacy_hasher: None,
        }
    }

    #[must_use]
    pub fn with_legacy_hasher(mut self, legacy_hasher: DynLegacyHasherPort) -> Self {
        self.legacy_hasher = Some(legacy_hasher);
        self
    }

    fn verify_legacy(
        &self,
        identity: &I,
        password: &str,
        existing_hash: &StoredHash,
        legacy_hasher: &dyn LegacyHasherPort,
    ) -> AppResult<bool> {
        if password.is_empty() {
            return Ok(false);
        }

        let input_digest = legacy_hasher.digest(password);
        let matches: bool = existing_hash
            .as_str()
            .as_bytes()
            .ct_eq(input_digest.as_bytes())
            .into();

        if !matches {
            debug!("Legacy digest did not match");
            return Ok(false);
        }

        info!("Migrating legacy password hash to the current standard");
        self.update_password(identity, password)?;
        Ok(true)
    }

    fn verify_standard(
        &self,
        identity: &I,
        password: &str,
        existing_hash: &StoredHash,
        algorithm: HashAlgorithm,
    ) -> AppResult<bool> {
        if password.is_empty() {
            return Ok(false);
        }

        // A hash that claims a known format but cannot be verified counts as a mismatch.
        let matches = match self
            .password_hasher
            .verify(password, existing_hash.as_str())
        {
            Ok(matches) => matches,
            Err(AppError::MalformedHash { message }) => {
                warn!(%algorithm, error = %message, "Stored password hash could not be verified");
                false
            }
            Err(e) => return Err(e),
        };

        if !matches {
            debug!(%algorithm, "Password did not match");
            return Ok(false);
        }

        if self.password_hasher.needs_rehash(existing_hash.as_str()) {
            info!(%algorithm, "Rehashing password with current parameters");
            self.update_password(identity, password)?;
        }

        Ok(true)
    }
}

impl<I: ?Sized> PasswordUseCase<I> for PasswordProcessor<I> {
    #[instrument(skip_all)]
    fn create_password(&self, password: &str) -> AppResult<String> {
        ensure_password_present(password)?;

        let password_hash = self.password_hasher.hash(password)?;

        if !self.password_hasher.identify(&password_hash).is_recognized() {
            return Err(AppError::SystemFailure {
                message: "Hasher produced a password hash in an unrecognized format".to_string(),
            });
        }

        Ok(password_hash)
    }

    #[instrument(skip_all)]
    fn update_password(&self, identity: &I, password: &str) -> AppResult<()> {
        let password_hash = self.create_password(password)?;
        self.credential_store
            .set_password_hash(identity, &password_hash)
    }

    #[instrument(skip_all)]
    fn verify_password(&self, identity: &I, password: &str) -> AppResult<bool> {
        let existing_hash = self.credential_store.password_hash(identity)?;

        if existing_hash.is_empty() {
            debug!("No password hash stored for identity");
            return Ok(false);
        }

        match self.password_hasher.identify(existing_hash.as_str()) {
            HashFormat::Recognized(algorithm) => {
                self.verify_standard(identity, password, &existing_hash, algorithm)
            }
            HashFormat::Unrecognized => match &self.legacy_hasher {
                Some(legacy_hasher) => {
                    self.verify_legacy(identity, password, &existing_hash, legacy_hasher.as_ref())
                }
                None => {
                    warn!("Stored password hash has an unknown format and no legacy hasher is configured");
                    Err(AppError::ConfigError {
                        message: "Unknown password hash format encountered without a legacy hasher fallback"
                            .to_string(),
                    })
                }
            },
        }
    }
}
