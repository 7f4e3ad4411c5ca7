mod extract;
mod token;

pub use extract::{run_extract, ExtractArgs};
pub use token::run_token;
