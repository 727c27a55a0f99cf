use serde::{Deserialize, Serialize};

/// Logging configuration. Logs always go to stderr.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// One of "trace", "debug", "info", "warn", "error" (default: "warn",
    /// so reports on stdout are not drowned in diagnostics)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human readable text
    #[serde(default)]
    pub json: bool,

    #[serde(default = "default_true")]
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            ansi: true,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}
