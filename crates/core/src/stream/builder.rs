use std::sync::Arc;

use tracing::debug;
use urlencoding::encode;

use crate::locale::{Vocabulary, VocabularyError};
use crate::torrent::{resolve_media_file, StreamCandidate};

use super::description::describe_file;
use super::{BehaviorHints, StreamError, StreamRecord, StreamRequest};

/// Builds playback records against a fixed addon base URL.
#[derive(Debug, Clone)]
pub struct StreamBuilder {
    addon_url: String,
    vocabulary: Arc<Vocabulary>,
}

impl StreamBuilder {
    /// Create a builder. Fails if the vocabulary is incomplete.
    pub fn new(
        addon_url: impl Into<String>,
        vocabulary: Arc<Vocabulary>,
    ) -> Result<Self, VocabularyError> {
        vocabulary.validate()?;

        let addon_url = addon_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            addon_url,
            vocabulary,
        })
    }

    pub fn addon_url(&self) -> &str {
        &self.addon_url
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Build the playback record for `candidate`.
    pub fn build<C>(
        &self,
        candidate: &C,
        request: &StreamRequest<'_>,
    ) -> Result<StreamRecord, StreamError>
    where
        C: StreamCandidate + ?Sized,
    {
        let (file_index, file) = resolve_media_file(candidate, request.query)?;

        let url = self.play_url(candidate, request.device_token, file_index);
        let description = describe_file(
            candidate,
            file,
            request.is_recommended,
            request.query,
            request.locale,
            &self.vocabulary,
        )?;

        debug!(
            "Built stream for {} (file {}: {})",
            candidate.info_hash(),
            file_index,
            file.name
        );

        Ok(StreamRecord {
            url,
            description,
            behavior_hints: BehaviorHints {
                not_web_ready: true,
                binge_group: candidate.info_hash().to_string(),
            },
        })
    }

    fn play_url<C>(&self, candidate: &C, device_token: &str, file_index: usize) -> String
    where
        C: StreamCandidate + ?Sized,
    {
        format!(
            "{}/api/auth/{}/stream/play/{}/{}/{}/{}",
            self.addon_url,
            encode(device_token),
            encode(candidate.source_name()),
            encode(candidate.source_id()),
            encode(candidate.info_hash()),
            encode(&file_index.to_string()),
        )
    }
}
