//! `BasicRule` whitelist directives: tokenize, classify, validate, render.

pub mod entry;
pub mod explain;
pub mod fragment;
pub mod tokenizer;

pub use entry::{StoredWhitelist, WhitelistEntry};
pub use explain::explain;
pub use fragment::{classify, Classification, Fragment};
pub use tokenizer::{tokenize, unquote};
