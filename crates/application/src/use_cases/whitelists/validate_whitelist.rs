use naxsi_wl_domain::{StoredWhitelist, WhitelistEntry};
use tracing::{info, instrument, warn};

/// Use case re-checking a whitelist loaded from storage.
pub struct ValidateWhitelistUseCase;

impl ValidateWhitelistUseCase {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self, stored), fields(wid = %stored.wid))]
    pub fn execute(&self, stored: StoredWhitelist) -> WhitelistEntry {
        let mut entry = WhitelistEntry::from_stored(stored);

        if entry.validate() {
            info!(id_spec = entry.id_spec(), "Stored whitelist is valid");
        } else {
            warn!(
                errors = ?entry.error_messages(),
                "Stored whitelist failed validation"
            );
        }

        entry
    }
}

impl Default for ValidateWhitelistUseCase {
    fn default() -> Self {
        Self::new()
    }
}
