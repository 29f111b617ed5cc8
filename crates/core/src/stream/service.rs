//! Ranking plus presentation for a whole candidate list.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::{Config, RankingConfig, StreamsConfig};
use crate::locale::{Locale, VocabularyError};
use crate::metrics::{STREAMS_BUILT, STREAM_ERRORS};
use crate::ranking::{order_torrents, UserPreferences};
use crate::torrent::{EpisodeQuery, StreamCandidate};

use super::{StreamBuilder, StreamError, StreamRecord, StreamRequest};

/// Turns a user's torrent candidates into ordered playback records.
#[derive(Debug, Clone)]
pub struct StreamService {
    builder: StreamBuilder,
    ranking: RankingConfig,
    settings: StreamsConfig,
}

impl StreamService {
    pub fn new(builder: StreamBuilder, ranking: RankingConfig, settings: StreamsConfig) -> Self {
        Self {
            builder,
            ranking,
            settings,
        }
    }

    /// Create the service from a loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, VocabularyError> {
        let builder =
            StreamBuilder::new(config.addon.url.clone(), Arc::new(config.vocabulary.clone()))?;
        Ok(Self::new(
            builder,
            config.ranking.clone(),
            config.streams.clone(),
        ))
    }

    pub fn builder(&self) -> &StreamBuilder {
        &self.builder
    }

    /// Rank `torrents` for the user and build a record for each one kept.
    ///
    /// The first `recommended_count` records are marked recommended. Any
    /// corrupted candidate fails the whole request.
    pub fn streams<C>(
        &self,
        torrents: Vec<C>,
        preferences: &UserPreferences,
        query: EpisodeQuery,
        device_token: &str,
    ) -> Result<Vec<StreamRecord>, StreamError>
    where
        C: StreamCandidate,
    {
        let result = self.build_streams(torrents, preferences, query, device_token);
        if let Err(ref e) = result {
            STREAM_ERRORS.with_label_values(&[e.kind()]).inc();
            warn!("Failed to build streams: {}", e);
        }
        result
    }

    fn build_streams<C>(
        &self,
        torrents: Vec<C>,
        preferences: &UserPreferences,
        query: EpisodeQuery,
        device_token: &str,
    ) -> Result<Vec<StreamRecord>, StreamError>
    where
        C: StreamCandidate,
    {
        let mut ordered = order_torrents(torrents, preferences, query, &self.ranking)?;
        if let Some(max) = self.settings.max_results {
            ordered.truncate(max);
        }

        let locale = Locale::from(preferences.language);
        let streams = ordered
            .iter()
            .enumerate()
            .map(|(position, torrent)| {
                let request = StreamRequest {
                    device_token,
                    is_recommended: position < self.settings.recommended_count,
                    query,
                    locale,
                };
                self.builder.build(torrent, &request)
            })
            .collect::<Result<Vec<_>, _>>()?;

        STREAMS_BUILT
            .with_label_values(&[locale.as_str()])
            .inc_by(streams.len() as u64);
        debug!("Built {} streams (locale: {})", streams.len(), locale);
        Ok(streams)
    }
}
