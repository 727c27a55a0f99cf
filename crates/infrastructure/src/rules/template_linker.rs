use naxsi_wl_application::ports::RuleLinker;
use naxsi_wl_domain::config::LinksConfig;
use naxsi_wl_domain::validators::validate_link_template;
use naxsi_wl_domain::DomainError;

/// Rule linker substituting the id into a fixed template,
/// e.g. `/rules/view/{sid}`.
#[derive(Debug, Clone)]
pub struct TemplateRuleLinker {
    links: LinksConfig,
}

impl TemplateRuleLinker {
    pub fn new(template: impl Into<String>) -> Result<Self, DomainError> {
        Self::from_config(&LinksConfig {
            template: template.into(),
        })
    }

    pub fn from_config(config: &LinksConfig) -> Result<Self, DomainError> {
        validate_link_template(&config.template).map_err(DomainError::InvalidLinkTemplate)?;
        Ok(Self {
            links: config.clone(),
        })
    }

    pub fn template(&self) -> &str {
        &self.links.template
    }
}

impl RuleLinker for TemplateRuleLinker {
    fn link(&self, sid: &str) -> String {
        self.links.render(sid)
    }
}
