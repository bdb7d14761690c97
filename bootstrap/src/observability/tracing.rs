use std::{error::Error, io::stdout};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use passproc_application::infrastructure_config::{LogFormat, LoggingConfig};

pub const SERVICE_NAME: &str = "password-processor";

pub fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level))
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn setup_logging(logging: &LoggingConfig) -> Result<(), Box<dyn Error + Send + Sync>> {
    let env_filter = env_filter(logging);

    match logging.format {
        LogFormat::Json => {
            let formatting_layer = BunyanFormattingLayer::new(SERVICE_NAME.to_string(), stdout);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(JsonStorageLayer)
                .with(formatting_layer)
                .try_init()?;
        }
        LogFormat::Pretty => {
            let format = fmt::format()
                .with_target(true)
                .with_thread_ids(true)
                .compact();

            let mut subscriber = tracing_subscriber::fmt()
                .event_format(format)
                .with_env_filter(env_filter);

            if logging.include_location {
                subscriber = subscriber.with_file(true).with_line_number(true);
            }

            subscriber.try_init()?;
        }
    }

    Ok(())
}
