use naxsi_wl_application::ports::{RuleCatalog, RuleLinker};
use naxsi_wl_application::use_cases::{
    ExplainWhitelistUseCase, ParseWhitelistUseCase, ValidateWhitelistUseCase,
};
use naxsi_wl_domain::{Config, OutputFormat};
use naxsi_wl_infrastructure::rules::{StaticRuleCatalog, TemplateRuleLinker};
use std::sync::Arc;
use tracing::info;

pub struct UseCases {
    pub parse: ParseWhitelistUseCase,
    pub validate: ValidateWhitelistUseCase,
    pub explain: ExplainWhitelistUseCase,
    pub format: OutputFormat,
}

impl UseCases {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut catalog =
            StaticRuleCatalog::from_ids(config.rules.known_ids.iter().map(u64::to_string));
        if let Some(rules_file) = &config.rules.rules_file {
            catalog.load_rules_file(rules_file)?;
        }
        info!(rules = catalog.len(), "Rule catalog ready");

        let catalog: Arc<dyn RuleCatalog> = Arc::new(catalog);
        let linker: Arc<dyn RuleLinker> = Arc::new(TemplateRuleLinker::from_config(&config.links)?);

        Ok(Self {
            parse: ParseWhitelistUseCase::new(),
            validate: ValidateWhitelistUseCase::new(),
            explain: ExplainWhitelistUseCase::new(catalog, linker),
            format: config.output.format,
        })
    }
}
