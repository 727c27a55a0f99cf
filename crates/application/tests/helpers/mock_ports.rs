#![allow(dead_code)]

use naxsi_wl_application::ports::{RuleCatalog, RuleLinker};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock RuleCatalog
// ============================================================================

#[derive(Clone, Default)]
pub struct MockRuleCatalog {
    known: Arc<Mutex<HashSet<String>>>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl MockRuleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(ids: &[&str]) -> Self {
        let catalog = Self::new();
        for id in ids {
            catalog.add_rule(id);
        }
        catalog
    }

    pub fn add_rule(&self, sid: &str) {
        self.known.lock().unwrap().insert(sid.to_string());
    }

    /// Every id looked up so far, in call order
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

impl RuleCatalog for MockRuleCatalog {
    fn exists(&self, sid: &str) -> bool {
        self.lookups.lock().unwrap().push(sid.to_string());
        self.known.lock().unwrap().contains(sid)
    }

    fn len(&self) -> usize {
        self.known.lock().unwrap().len()
    }
}

// ============================================================================
// Mock RuleLinker
// ============================================================================

#[derive(Clone, Default)]
pub struct MockRuleLinker;

impl RuleLinker for MockRuleLinker {
    fn link(&self, sid: &str) -> String {
        format!("/rules/view/{sid}")
    }
}
