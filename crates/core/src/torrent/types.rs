use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::locale::Language;

use super::StreamCandidate;

const VIDEO_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "m4v", "mov", "wmv", "webm", "ts", "m2ts", "mpg", "mpeg",
];

/// A file within a torrent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TorrentFile {
    /// Path within the torrent.
    pub name: String,
    /// Size in bytes.
    pub length: u64,
}

impl TorrentFile {
    pub fn is_video(&self) -> bool {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false)
    }
}

/// Which part of a title the client asked for.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EpisodeQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode: Option<u32>,
}

impl EpisodeQuery {
    pub fn movie() -> Self {
        Self::default()
    }

    pub fn episode(season: u32, episode: u32) -> Self {
        Self {
            season: Some(season),
            episode: Some(episode),
        }
    }

    /// `(season, episode)` when both are present and non-zero.
    pub fn season_episode(&self) -> Option<(u32, u32)> {
        match (self.season, self.episode) {
            (Some(season), Some(episode)) if season > 0 && episode > 0 => Some((season, episode)),
            _ => None,
        }
    }

    pub fn is_episodic(&self) -> bool {
        self.season_episode().is_some()
    }
}

/// Concrete torrent candidate, as received from a torrent source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TorrentDetails {
    pub source_name: String,
    pub source_id: String,
    /// Info hash (lowercase hex).
    pub info_hash: String,
    pub name: String,
    pub language: Language,
    #[serde(default)]
    pub is_speculated: bool,
    #[serde(default)]
    pub seeders: u32,
    pub files: Vec<TorrentFile>,
}

impl TorrentDetails {
    fn find_episode_file(&self, season: u32, episode: u32) -> Option<usize> {
        // SxxEyy or NxEE, not followed by another digit; NxEE also not preceded by one
        let pattern = format!(
            r"(?i)(s{:02}e{:02}|(^|[^0-9]){}x{:02})([^0-9]|$)",
            season, episode, season, episode
        );
        let re = Regex::new(&pattern).ok()?;

        self.files
            .iter()
            .position(|file| file.is_video() && re.is_match(&file.name))
    }

    fn largest_file(&self, video_only: bool) -> Option<usize> {
        self.files
            .iter()
            .enumerate()
            .filter(|(_, file)| !video_only || file.is_video())
            // max_by_key keeps the last maximum; reverse so the first wins
            .rev()
            .max_by_key(|(_, file)| file.length)
            .map(|(index, _)| index)
    }
}

impl StreamCandidate for TorrentDetails {
    fn source_name(&self) -> &str {
        &self.source_name
    }

    fn source_id(&self) -> &str {
        &self.source_id
    }

    fn info_hash(&self) -> &str {
        &self.info_hash
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn language(&self) -> Language {
        self.language
    }

    fn is_speculated(&self) -> bool {
        self.is_speculated
    }

    fn files(&self) -> &[TorrentFile] {
        &self.files
    }

    fn seeders(&self) -> u32 {
        self.seeders
    }

    fn media_file_index(&self, query: EpisodeQuery) -> usize {
        query
            .season_episode()
            .and_then(|(season, episode)| self.find_episode_file(season, episode))
            .or_else(|| self.largest_file(true))
            .or_else(|| self.largest_file(false))
            .unwrap_or(0)
    }
}
