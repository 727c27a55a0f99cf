mod explain_whitelist;
mod parse_whitelist;
mod validate_whitelist;

pub use explain_whitelist::ExplainWhitelistUseCase;
pub use parse_whitelist::ParseWhitelistUseCase;
pub use validate_whitelist::ValidateWhitelistUseCase;
