use thiserror::Error;

use crate::locale::VocabularyError;
use crate::torrent::TorrentError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StreamError {
    #[error(transparent)]
    Torrent(#[from] TorrentError),

    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
}

impl StreamError {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            StreamError::Torrent(TorrentError::FileIndexOutOfRange { .. }) => {
                "file_index_out_of_range"
            }
            StreamError::Vocabulary(_) => "vocabulary",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn test_error_display() {
        let err = StreamError::from(TorrentError::FileIndexOutOfRange {
            info_hash: "abc".to_string(),
            index: 3,
            file_count: 1,
        });
        assert_eq!(
            err.to_string(),
            "Torrent abc: file index 3 out of range (1 files)"
        );
        assert_eq!(err.kind(), "file_index_out_of_range");

        let err = StreamError::from(VocabularyError::MissingLocale(Locale::Hu));
        assert_eq!(err.to_string(), "No vocabulary table for locale 'hu'");
        assert_eq!(err.kind(), "vocabulary");
    }
}
