use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::torrent::EpisodeQuery;

/// Playback record handed to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StreamRecord {
    pub url: String,
    /// Newline-separated, newline-terminated lines.
    pub description: String,
    pub behavior_hints: BehaviorHints,
}

/// Client playback hints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorHints {
    /// The stream cannot be played by an embedded web player.
    pub not_web_ready: bool,
    /// Streams with the same key are interchangeable across episodes.
    pub binge_group: String,
}

/// Per-request inputs for building a stream record.
#[derive(Debug, Clone, Copy)]
pub struct StreamRequest<'a> {
    pub device_token: &'a str,
    pub is_recommended: bool,
    pub query: EpisodeQuery,
    pub locale: Locale,
}
