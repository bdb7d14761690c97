use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};
use passproc_application::error::{AppError, AppResult};
use passproc_application::infrastructure_config::Config;
use std::path::Path;
use tracing::debug;

pub const CONFIG_TOML: &str = "passproc.toml";
pub const CONFIG_JSON: &str = "passproc.json";
pub const ENV_PREFIX: &str = "PASSPROC_";

/// Layers defaults, `passproc.toml`, `passproc.json` and `PASSPROC_*`
/// environment variables (nested keys separated by `__`).
pub fn load_config() -> AppResult<Config> {
    if dotenvy::dotenv().is_ok() {
        debug!("Loaded environment from .env");
    }

    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if Path::new(CONFIG_TOML).exists() {
        figment = figment.merge(Toml::file(CONFIG_TOML));
    }

    if Path::new(CONFIG_JSON).exists() {
        figment = figment.merge(Json::file(CONFIG_JSON));
    }

    let config: Config = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| AppError::ConfigError {
            message: format!("Failed to load configuration: {e}"),
        })?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use passproc_application::infrastructure_config::LogFormat;

    #[test]
    fn defaults_apply_without_sources() {
        Jail::expect_with(|_jail| {
            let config = load_config().unwrap();
            assert_eq!(config.password.argon2.memory_cost, 19456);
            assert_eq!(config.password.argon2.time_cost, 2);
            assert_eq!(config.logging.format, LogFormat::Pretty);
            Ok(())
        });
    }

    #[test]
    fn toml_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_TOML,
                r#"
                [password.argon2]
                memory_cost = 65536
                time_cost = 3
                parallelism = 4

                [logging]
                level = "debug"
                format = "json"
                "#,
            )?;

            let config = load_config().unwrap();
            assert_eq!(config.password.argon2.memory_cost, 65536);
            assert_eq!(config.password.argon2.time_cost, 3);
            assert_eq!(config.password.argon2.parallelism, 4);
            assert_eq!(config.password.argon2.output_length, Some(32));
            assert_eq!(config.logging.level, "debug");
            assert_eq!(config.logging.format, LogFormat::Json);
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_JSON, r#"{ "password": { "argon2": { "time_cost": 4 } } }"#)?;
            jail.set_env("PASSPROC_PASSWORD__ARGON2__TIME_COST", "5");
            jail.set_env("PASSPROC_LOGGING__LEVEL", "warn");

            let config = load_config().unwrap();
            assert_eq!(config.password.argon2.time_cost, 5);
            assert_eq!(config.logging.level, "warn");
            Ok(())
        });
    }

    #[test]
    fn invalid_work_factor_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("PASSPROC_PASSWORD__ARGON2__TIME_COST", "0");

            let result = load_config();
            assert!(matches!(result, Err(AppError::ConfigError { .. })));
            Ok(())
        });
    }

    #[test]
    fn malformed_values_are_configuration_errors() {
        Jail::expect_with(|jail| {
            jail.set_env("PASSPROC_PASSWORD__ARGON2__MEMORY_COST", "lots");

            let result = load_config();
            assert!(matches!(result, Err(AppError::ConfigError { .. })));
            Ok(())
        });
    }
}
