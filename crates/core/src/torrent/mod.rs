//! Torrent candidates as seen by the stream presentation layer.
//!
//! Candidates are produced elsewhere and handed over read-only through the
//! [`StreamCandidate`] trait. [`TorrentDetails`] is the concrete form used by
//! the HTTP API.

mod error;
mod resolution;
mod traits;
mod types;

pub use error::*;
pub use resolution::*;
pub use traits::*;
pub use types::*;
