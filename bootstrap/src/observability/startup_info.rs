use passproc_application::infrastructure_config::{Argon2Config, Config};
use tracing::info;

pub fn log_configuration(config: &Config) {
    log_work_factor(&config.password.argon2);
    info!(
        level = %config.logging.level,
        format = ?config.logging.format,
        "Logging configured"
    );
}

fn log_work_factor(argon2: &Argon2Config) {
    info!(
        memory_cost_kib = argon2.memory_cost,
        time_cost = argon2.time_cost,
        parallelism = argon2.parallelism,
        output_length = ?argon2.output_length,
        "Argon2id work factor"
    );
}
