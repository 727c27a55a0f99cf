use serde::{Deserialize, Serialize};

/// Rules known to exist, used to decide which ids get a reference
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RulesConfig {
    /// Rule ids declared inline
    #[serde(default)]
    pub known_ids: Vec<u64>,

    /// Optional naxsi rules file; every `id:NNN` in it counts as known
    #[serde(default)]
    pub rules_file: Option<String>,
}
