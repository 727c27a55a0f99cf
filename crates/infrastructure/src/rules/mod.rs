pub mod static_catalog;
pub mod template_linker;

pub use static_catalog::StaticRuleCatalog;
pub use template_linker::TemplateRuleLinker;
