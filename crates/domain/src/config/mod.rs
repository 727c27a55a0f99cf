//! Configuration for the naxsi whitelist tooling
//!
//! Structures organised by concern:
//! - `root`: Main configuration and CLI overrides
//! - `rules`: Which rule ids are known to exist
//! - `links`: How references to rule pages are built
//! - `output`: Report format
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod links;
pub mod logging;
pub mod output;
pub mod root;
pub mod rules;

pub use errors::ConfigError;
pub use links::LinksConfig;
pub use logging::LoggingConfig;
pub use output::{OutputConfig, OutputFormat};
pub use root::{CliOverrides, Config};
pub use rules::RulesConfig;
