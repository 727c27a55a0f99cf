use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid whitelist: {0}")]
    InvalidWhitelist(String),

    #[error("Whitelist has not been checked yet")]
    UncheckedWhitelist,

    #[error("Invalid link template: {0}")]
    InvalidLinkTemplate(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

/// Failure of the shell-style whitelist tokenizer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("No closing quotation (`{quote}` opened at byte {position}).")]
    UnterminatedQuote { quote: char, position: usize },
}

/// Fatal problems found while parsing or validating a whitelist entry.
///
/// The display strings are shown verbatim to whoever typed the whitelist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WhitelistError {
    #[error("Illegal character in the whitelist id.")]
    IllegalId,

    #[error("Unknown fragment: {0}")]
    UnknownFragment(String),

    #[error("No 'BasicRule' keyword in {0}.")]
    MissingKeyword(String),

    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
}

/// Advisory observations that never block acceptance of an entry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleWarning {
    #[error("Your whitelist is not completely in lowercase.")]
    NotLowercase,
}
