use naxsi_wl_application::ports::RuleCatalog;
use naxsi_wl_domain::{extract_rule_ids, DomainError};
use rustc_hash::FxHashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Rule catalog held entirely in memory.
///
/// Filled from inline ids (configuration) and/or naxsi rules text; built
/// once at startup and only read afterwards.
#[derive(Debug, Default, Clone)]
pub struct StaticRuleCatalog {
    ids: FxHashSet<Arc<str>>,
}

impl StaticRuleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::new();
        catalog.extend(ids);
        catalog
    }

    pub fn extend<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ids
            .extend(ids.into_iter().map(|id| Arc::from(id.as_ref())));
    }

    /// Add every `id:NNN` declared in naxsi rules text. Returns how many ids
    /// were found, duplicates included.
    pub fn add_rules_text(&mut self, text: &str) -> usize {
        let ids = extract_rule_ids(text);
        let found = ids.len();
        self.extend(ids);
        debug!(found, total = self.ids.len(), "Rule ids harvested");
        found
    }

    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load_rules_file(&mut self, path: impl AsRef<Path>) -> Result<usize, DomainError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            error!(error = %e, "Failed to read rules file");
            DomainError::IoError(format!("{}: {}", path.display(), e))
        })?;

        let found = self.add_rules_text(&text);
        info!(found, "Rules file loaded");
        Ok(found)
    }
}

impl RuleCatalog for StaticRuleCatalog {
    fn exists(&self, sid: &str) -> bool {
        self.ids.contains(sid)
    }

    fn len(&self) -> usize {
        self.ids.len()
    }
}
