/// Lookup port answering whether a rule with the given id exists.
///
/// A missing rule is the normal "render the bare id" case, not an error.
/// Implementations keep everything in memory, so the call is synchronous.
pub trait RuleCatalog: Send + Sync {
    fn exists(&self, sid: &str) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds the reference target (e.g. an URL) for a rule id.
///
/// The target format belongs to the presentation layer.
pub trait RuleLinker: Send + Sync {
    fn link(&self, sid: &str) -> String;
}
