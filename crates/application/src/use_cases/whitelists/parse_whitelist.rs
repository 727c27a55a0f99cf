use naxsi_wl_domain::WhitelistEntry;
use tracing::{debug, info, instrument, warn};

/// Use case turning a textual directive into a checked entry.
///
/// Invalid input is not a Rust error: the returned entry carries its own
/// errors and warnings, and callers must not persist it unless
/// [`WhitelistEntry::is_valid`] holds.
pub struct ParseWhitelistUseCase {
    whitelist_set: String,
}

impl ParseWhitelistUseCase {
    pub fn new() -> Self {
        Self {
            whitelist_set: String::new(),
        }
    }

    /// Stamp parsed entries as members of `whitelist_set`.
    pub fn with_whitelist_set(mut self, whitelist_set: impl Into<String>) -> Self {
        self.whitelist_set = whitelist_set.into();
        self
    }

    #[instrument(skip(self))]
    pub fn execute(&self, text: &str) -> WhitelistEntry {
        let mut entry = WhitelistEntry::new();
        entry.set_whitelist_set(self.whitelist_set.clone());

        if entry.parse(text) {
            entry.set_timestamp(chrono::Utc::now().timestamp());
            info!(
                id_spec = entry.id_spec(),
                match_zone = entry.match_zone(),
                negative = entry.is_negative(),
                warnings = entry.warnings().len(),
                "Whitelist parsed"
            );
        } else {
            warn!(
                errors = entry.errors().len(),
                first_error = %entry.errors().first().map(ToString::to_string).unwrap_or_default(),
                "Whitelist rejected"
            );
        }

        for warning in entry.warnings() {
            debug!(%warning, "Whitelist style warning");
        }

        entry
    }
}

impl Default for ParseWhitelistUseCase {
    fn default() -> Self {
        Self::new()
    }
}
