use serde::{Deserialize, Serialize};

pub const SID_PLACEHOLDER: &str = "{sid}";

/// Where rule references point to
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LinksConfig {
    /// Target of a rule reference, `{sid}` is replaced with the rule id
    /// (default: "/rules/view/{sid}")
    #[serde(default = "default_template")]
    pub template: String,
}

impl LinksConfig {
    pub fn render(&self, sid: &str) -> String {
        self.template.replace(SID_PLACEHOLDER, sid)
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
        }
    }
}

fn default_template() -> String {
    "/rules/view/{sid}".to_string()
}
