mod rule_catalog;

pub use rule_catalog::{RuleCatalog, RuleLinker};
