//! Candidate ranking.
//!
//! [`rank`]/[`try_rank`] implement a generic stable multi-criteria sort;
//! [`order_torrents`] applies the user-preference scorers to torrents.

mod preferences;
mod ranker;

pub use preferences::*;
pub use ranker::*;
