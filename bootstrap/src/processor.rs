use std::sync::Arc;

use passproc_adapters::outgoing::passwords::argon2::Argon2PasswordHasher;
use passproc_application::error::AppResult;
use passproc_application::infrastructure_config::Config;
use passproc_application::password::service::PasswordProcessor;
use passproc_application::ports::outgoing::credential_store::DynCredentialStorePort;
use passproc_application::ports::outgoing::legacy_hasher::DynLegacyHasherPort;
use passproc_application::ports::outgoing::password_hasher::DynPasswordHasherPort;
use tracing::info;

use crate::observability::startup_info;

/// Wires a processor from configuration around a caller-owned credential store.
pub fn build_processor<I: ?Sized>(
    config: &Config,
    credential_store: DynCredentialStorePort<I>,
    legacy_hasher: Option<DynLegacyHasherPort>,
) -> AppResult<PasswordProcessor<I>> {
    config.validate()?;
    startup_info::log_configuration(config);

    let password_hasher: DynPasswordHasherPort =
        Arc::new(Argon2PasswordHasher::from_config(&config.password.argon2)?);

    let processor = PasswordProcessor::new(credential_store, password_hasher);

    let processor = match legacy_hasher {
        Some(legacy_hasher) => {
            info!("Legacy hash migration enabled");
            processor.with_legacy_hasher(legacy_hasher)
        }
        None => processor,
    };

    Ok(processor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use passproc_adapters::outgoing::credential_store::in_memory::InMemoryCredentialStore;
    use passproc_application::error::AppError;
    use passproc_application::infrastructure_config::Argon2Config;
    use passproc_application::ports::incoming::password::PasswordUseCase;
    use passproc_application::ports::outgoing::credential_store::CredentialStorePort;
    use rstest::{fixture, rstest};

    #[fixture]
    fn config() -> Config {
        let mut config = Config::default();
        config.password.argon2 = Argon2Config {
            memory_cost: 1024,
            time_cost: 1,
            parallelism: 1,
            output_length: Some(32),
        };
        config
    }

    fn store() -> DynCredentialStorePort<str> {
        Arc::new(
            InMemoryCredentialStore::<String>::new()
                .with_hash("legacy".to_string(), "DUMMYPASSWORD"),
        )
    }

    #[rstest]
    fn built_processor_uses_configured_work_factor(config: Config) {
        let processor = build_processor(&config, store(), None).unwrap();

        let hash = processor.create_password("dummyPassword").unwrap();
        assert!(hash.starts_with("$argon2id$v=19$m=1024,t=1,p=1$"));
    }

    #[rstest]
    fn legacy_hasher_is_attached_when_given(config: Config) {
        let store = store();
        let legacy: DynLegacyHasherPort = Arc::new(|password: &str| password.to_uppercase());
        let processor = build_processor(&config, Arc::clone(&store), Some(legacy)).unwrap();

        assert!(processor.verify_password("legacy", "dummyPassword").unwrap());
        assert!(
            store
                .password_hash("legacy")
                .unwrap()
                .as_str()
                .starts_with("$argon2id$")
        );
    }

    #[rstest]
    fn missing_legacy_hasher_leaves_unknown_formats_unsupported(config: Config) {
        let processor = build_processor(&config, store(), None).unwrap();
        assert!(matches!(
            processor.verify_password("legacy", "dummyPassword"),
            Err(AppError::ConfigError { .. })
        ));
    }

    #[rstest]
    fn invalid_configuration_is_rejected(mut config: Config) {
        config.password.argon2.parallelism = 0;
        let result = build_processor(&config, store(), None);
        assert!(matches!(result, Err(AppError::ConfigError { .. })));
    }
}
