pub mod whitelists;

pub use whitelists::{ExplainWhitelistUseCase, ParseWhitelistUseCase, ValidateWhitelistUseCase};
