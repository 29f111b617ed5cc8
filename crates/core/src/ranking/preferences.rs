//! User-preference scorers for torrent candidates.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RankingConfig;
use crate::locale::Language;
use crate::metrics::CANDIDATES_RANKED;
use crate::torrent::{resolve_media_file, EpisodeQuery, Resolution, StreamCandidate, TorrentError};

use super::{try_rank, Score};

/// What the user prefers to watch. Read from the user profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPreferences {
    pub language: Language,
    #[serde(default)]
    pub resolutions: Vec<Resolution>,
}

/// Boxed fallible scorer over torrent candidates.
pub type TorrentScorer<'a, C> = Box<dyn Fn(&C) -> Result<Score, TorrentError> + 'a>;

/// Scorer awarding `weight` to candidates in the preferred language.
pub fn language_scorer<'a, C>(preferred: Language, weight: Score) -> TorrentScorer<'a, C>
where
    C: StreamCandidate + 'a,
{
    Box::new(move |candidate: &C| {
        Ok(if candidate.language() == preferred {
            weight
        } else {
            0
        })
    })
}

/// Scorer awarding `weight` when the media file's resolution is preferred.
///
/// Fails if the candidate resolves its media file out of range.
pub fn resolution_scorer<'a, C>(
    preferred: &'a [Resolution],
    query: EpisodeQuery,
    weight: Score,
) -> TorrentScorer<'a, C>
where
    C: StreamCandidate + 'a,
{
    Box::new(move |candidate: &C| {
        let (_, file) = resolve_media_file(candidate, query)?;
        let resolution = candidate.resolution(&file.name);
        Ok(if preferred.contains(&resolution) {
            weight
        } else {
            0
        })
    })
}

/// Order torrents by the user's language and resolution preferences.
pub fn order_torrents<C>(
    torrents: Vec<C>,
    preferences: &UserPreferences,
    query: EpisodeQuery,
    config: &RankingConfig,
) -> Result<Vec<C>, TorrentError>
where
    C: StreamCandidate,
{
    let count = torrents.len();
    let scorers = [
        language_scorer(preferences.language, config.language_weight),
        resolution_scorer(&preferences.resolutions, query, config.resolution_weight),
    ];

    let ordered = try_rank(torrents, &scorers)?;

    CANDIDATES_RANKED.observe(count as f64);
    debug!(
        "Ranked {} torrents (language: {}, resolutions: {:?})",
        count, preferences.language, preferences.resolutions
    );

    Ok(ordered)
}
