use tracing_subscriber::EnvFilter;
use crate::core::domain::Configuration;

// RUST_LOG wins over the configured level when present
pub fn setup_tracing(config: &Configuration) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false);
    if config.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}
