use super::explain::explain;
use super::fragment::{classify, ID_PREFIX, KEYWORD, MATCH_ZONE_PREFIX, NEGATION};
use super::tokenizer::tokenize;
use crate::errors::{StyleWarning, WhitelistError};
use crate::validators::{validate_id_spec, validate_match_zone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Persisted shape of a whitelist, as read from or written to storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredWhitelist {
    pub wid: String,
    #[serde(default)]
    pub mz: String,
    #[serde(default)]
    pub negative: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub whitelist_set: String,
}

/// One `BasicRule` whitelist directive.
///
/// The id spec, match-zone and negation flag can only change through
/// [`parse`](Self::parse) or [`from_stored`](Self::from_stored), and an entry
/// only reports itself valid after a [`parse`](Self::parse) or
/// [`validate`](Self::validate) call that found no errors. Diagnostics always
/// describe the most recent of those calls.
#[derive(Debug, Clone, Default)]
pub struct WhitelistEntry {
    id_spec: String,
    match_zone: String,
    negative: bool,
    active: bool,
    timestamp: i64,
    whitelist_set: String,
    warnings: Vec<StyleWarning>,
    errors: Vec<WhitelistError>,
    checked: bool,
}

impl WhitelistEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild an entry from storage. It stays unchecked until `validate()`.
    pub fn from_stored(stored: StoredWhitelist) -> Self {
        Self {
            id_spec: stored.wid,
            match_zone: stored.mz,
            negative: stored.negative,
            active: stored.active,
            timestamp: stored.timestamp,
            whitelist_set: stored.whitelist_set,
            ..Self::default()
        }
    }

    pub fn to_stored(&self) -> StoredWhitelist {
        StoredWhitelist {
            wid: self.id_spec.clone(),
            mz: self.match_zone.clone(),
            negative: self.negative,
            active: self.active,
            timestamp: self.timestamp,
            whitelist_set: self.whitelist_set.clone(),
        }
    }

    /// Populate the entry from a textual directive such as
    /// `BasicRule wl:1000 "mz:$ARGS_VAR:q";`.
    ///
    /// Returns `true` when no error was found. Fields are only touched when
    /// the whole directive is accepted.
    pub fn parse(&mut self, text: &str) -> bool {
        self.reset_diagnostics();
        self.checked = true;

        let tokens = match tokenize(text) {
            Ok(tokens) => tokens,
            Err(e) => {
                self.errors.push(e.into());
                return false;
            }
        };

        let outcome = classify(&tokens, text);
        if outcome.is_success() {
            if let Some(id_spec) = outcome.id_spec {
                self.id_spec = id_spec;
            }
            if let Some(match_zone) = outcome.match_zone {
                self.match_zone = match_zone;
            }
            self.negative = outcome.negative;
        }
        self.errors = outcome.errors;
        self.warnings = outcome.warnings;

        self.errors.is_empty()
    }

    /// Re-check the fields currently held, without tokenizing anything.
    pub fn validate(&mut self) -> bool {
        self.reset_diagnostics();
        self.checked = true;

        if let Err(e) = validate_id_spec(&self.id_spec) {
            self.errors.push(e);
        }
        if let Err(e) = validate_match_zone(&self.match_zone) {
            self.errors.push(e);
        }

        self.errors.is_empty()
    }

    /// Describe the entry in plain English; see [`explain`].
    pub fn explain<E, L>(&self, rule_exists: E, link: L) -> String
    where
        E: Fn(&str) -> bool,
        L: Fn(&str) -> String,
    {
        explain(self, rule_exists, link)
    }

    fn reset_diagnostics(&mut self) {
        self.warnings.clear();
        self.errors.clear();
    }

    pub fn id_spec(&self) -> &str {
        &self.id_spec
    }

    pub fn match_zone(&self) -> &str {
        &self.match_zone
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn set_timestamp(&mut self, timestamp: i64) {
        self.timestamp = timestamp;
    }

    pub fn whitelist_set(&self) -> &str {
        &self.whitelist_set
    }

    pub fn set_whitelist_set(&mut self, whitelist_set: impl Into<String>) {
        self.whitelist_set = whitelist_set.into();
    }

    pub fn warnings(&self) -> &[StyleWarning] {
        &self.warnings
    }

    pub fn errors(&self) -> &[WhitelistError] {
        &self.errors
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn is_valid(&self) -> bool {
        self.checked && self.errors.is_empty()
    }
}

/// Canonical form: `BasicRule [negative] [wl:ids] [mz:zone];`, the zone
/// quoted only when it holds whitespace.
impl fmt::Display for WhitelistEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(KEYWORD)?;

        if self.negative {
            write!(f, " {NEGATION}")?;
        }

        if !self.id_spec.is_empty() {
            let ids = self.id_spec.strip_prefix(ID_PREFIX).unwrap_or(&self.id_spec);
            write!(f, " {ID_PREFIX}{ids}")?;
        }

        // A zone without whitespace is written bare: quotes inside a word are
        // literal and only the statement terminator is peeled off it.
        let zone = &self.match_zone;
        if zone.contains(|c: char| c.is_ascii_whitespace()) {
            let quote = if zone.contains('"') { '\'' } else { '"' };
            write!(f, " {quote}{MATCH_ZONE_PREFIX}{zone}{quote}")?;
        } else if !zone.is_empty() {
            write!(f, " {MATCH_ZONE_PREFIX}{zone}")?;
        }

        f.write_str(";")
    }
}
