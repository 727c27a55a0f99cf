//! Naxsi whitelist domain layer
pub mod config;
pub mod errors;
pub mod rule_id;
pub mod validators;
pub mod whitelist;

pub use config::{CliOverrides, Config, ConfigError, OutputFormat};
pub use errors::{DomainError, StyleWarning, TokenizeError, WhitelistError};
pub use rule_id::extract_rule_ids;
pub use whitelist::{StoredWhitelist, WhitelistEntry};
