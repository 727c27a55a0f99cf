mod check_file;
mod explain;
mod parse;
mod validate;

pub use check_file::check_file;
pub use explain::explain;
pub use parse::parse;
pub use validate::{validate, ValidateArgs};
