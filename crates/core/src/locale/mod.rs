//! Languages, presentation locales and the vocabulary used for stream text.

mod types;
mod vocabulary;

pub use types::*;
pub use vocabulary::*;
