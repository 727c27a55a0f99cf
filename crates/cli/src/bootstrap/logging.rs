use naxsi_wl_domain::config::LoggingConfig;
use tracing::{debug, Level};

pub fn init_logging(config: &LoggingConfig) {
    let log_level = config.level.parse().unwrap_or(Level::WARN);

    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_max_level(log_level);

    if config.json {
        builder.json().init();
    } else {
        builder.with_ansi(config.ansi).init();
    }

    debug!("Logging initialized at level: {}", config.level);
}
