use thiserror::Error;

/// Errors raised when reading candidate data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TorrentError {
    /// The candidate resolved a media file index outside its own file list.
    /// The candidate is corrupted or mismatched; callers must not recover.
    #[error("Torrent {info_hash}: file index {index} out of range ({file_count} files)")]
    FileIndexOutOfRange {
        info_hash: String,
        index: usize,
        file_count: usize,
    },
}
