use naxsi_wl_domain::{DomainError, WhitelistEntry};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{RuleCatalog, RuleLinker};

/// Use case rendering a checked whitelist as a sentence.
///
/// The catalog decides which rule ids get a reference and the linker builds
/// it; the entry itself is only read.
pub struct ExplainWhitelistUseCase {
    catalog: Arc<dyn RuleCatalog>,
    linker: Arc<dyn RuleLinker>,
}

impl ExplainWhitelistUseCase {
    pub fn new(catalog: Arc<dyn RuleCatalog>, linker: Arc<dyn RuleLinker>) -> Self {
        Self { catalog, linker }
    }

    /// Explains `entry`.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The explanation
    /// * `Err(DomainError::UncheckedWhitelist)` - If neither `parse` nor
    ///   `validate` ran on the entry
    /// * `Err(DomainError::InvalidWhitelist)` - If the last check found errors
    #[instrument(skip(self, entry), fields(id_spec = entry.id_spec()))]
    pub fn execute(&self, entry: &WhitelistEntry) -> Result<String, DomainError> {
        if !entry.is_checked() {
            return Err(DomainError::UncheckedWhitelist);
        }
        if !entry.is_valid() {
            return Err(DomainError::InvalidWhitelist(entry.error_messages().join(" ")));
        }

        let explanation = entry.explain(
            |sid| self.catalog.exists(sid),
            |sid| self.linker.link(sid),
        );

        debug!(%explanation, "Whitelist explained");
        Ok(explanation)
    }
}
