use super::tokenizer::unquote;
use crate::errors::{StyleWarning, WhitelistError};
use crate::validators::{validate_id_spec, validate_match_zone};

pub const KEYWORD: &str = "BasicRule";
pub const ID_PREFIX: &str = "wl:";
pub const MATCH_ZONE_PREFIX: &str = "mz:";
pub const NEGATION: &str = "negative";

/// The kinds of fragment a whitelist directive is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// The mandatory `BasicRule` keyword.
    Keyword,
    /// A full `wl:...` fragment, prefix included.
    IdSpec(&'a str),
    /// The zone text following `mz:`.
    MatchZone(&'a str),
    Negation,
    Unknown(&'a str),
}

impl<'a> Fragment<'a> {
    pub fn of(token: &'a str) -> Self {
        if token == KEYWORD {
            Fragment::Keyword
        } else if token.starts_with(ID_PREFIX) {
            Fragment::IdSpec(token)
        } else if let Some(zone) = token.strip_prefix(MATCH_ZONE_PREFIX) {
            Fragment::MatchZone(zone)
        } else if token == NEGATION {
            Fragment::Negation
        } else {
            Fragment::Unknown(token)
        }
    }
}

/// Everything the classifier learned from one token stream.
///
/// Fields are only `Some` when the matching fragment was seen and accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub id_spec: Option<String>,
    pub match_zone: Option<String>,
    pub negative: bool,
    pub errors: Vec<WhitelistError>,
    pub warnings: Vec<StyleWarning>,
}

impl Classification {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Drop a bare `;` and peel a statement terminator glued to a token.
///
/// Quotes uncovered by removing the terminator are stripped as well, so
/// `'wl:1';` reads the same as `wl:1`.
fn normalize(token: &str) -> Option<&str> {
    if token == ";" {
        return None;
    }
    match token.strip_suffix(';') {
        Some(stripped) => Some(unquote(stripped)),
        None => Some(token),
    }
}

fn is_lowercase(token: &str) -> bool {
    token.to_lowercase() == token
}

/// Classify and check the tokens of one directive, left to right.
///
/// An unknown fragment stops the scan at once: nothing after it is looked at.
/// A malformed `wl:` fragment is recorded and the scan goes on. `source` is
/// the untokenized text, quoted back in the missing-keyword error.
pub fn classify<S: AsRef<str>>(tokens: &[S], source: &str) -> Classification {
    let mut outcome = Classification::default();
    let mut has_keyword = false;

    for raw in tokens {
        let Some(token) = normalize(raw.as_ref()) else {
            continue;
        };

        match Fragment::of(token) {
            Fragment::Keyword => has_keyword = true,
            Fragment::IdSpec(spec) => match validate_id_spec(spec) {
                Ok(()) => outcome.id_spec = Some(spec.to_string()),
                Err(e) => outcome.errors.push(e),
            },
            Fragment::MatchZone(zone) => match validate_match_zone(zone) {
                Ok(()) => outcome.match_zone = Some(zone.to_string()),
                Err(e) => outcome.errors.push(e),
            },
            Fragment::Negation => outcome.negative = true,
            Fragment::Unknown(fragment) => {
                outcome
                    .errors
                    .push(WhitelistError::UnknownFragment(fragment.to_string()));
                return outcome;
            }
        }

        if !is_lowercase(token) {
            outcome.warnings.push(StyleWarning::NotLowercase);
        }
    }

    if !has_keyword {
        outcome
            .errors
            .push(WhitelistError::MissingKeyword(source.to_string()));
    }

    outcome
}
