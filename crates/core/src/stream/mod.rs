//! Stream presentation: description text and playback records.

mod builder;
mod description;
mod error;
mod format;
mod service;
mod types;

pub use builder::*;
pub use description::*;
pub use error::*;
pub use format::*;
pub use service::*;
pub use types::*;
