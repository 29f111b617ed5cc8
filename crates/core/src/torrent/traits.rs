use crate::locale::Language;

use super::{EpisodeQuery, Resolution, TorrentError, TorrentFile};

/// Read-only view of a torrent offered for playback.
///
/// The resolution methods have default implementations based on
/// [`Resolution::detect`]; sources with better metadata can override them.
pub trait StreamCandidate {
    /// Namespace of the source that produced this candidate (e.g. an indexer).
    fn source_name(&self) -> &str;

    /// Identifier of the candidate within its source.
    fn source_id(&self) -> &str;

    /// Content hash, shared by every file of the torrent.
    fn info_hash(&self) -> &str;

    /// Overall display name of the torrent.
    fn name(&self) -> &str;

    fn language(&self) -> Language;

    /// True when the source was guessed rather than confirmed to match.
    fn is_speculated(&self) -> bool;

    fn files(&self) -> &[TorrentFile];

    fn seeders(&self) -> u32;

    /// Index of the file to play for the given query.
    ///
    /// Not required to be in range; use [`resolve_media_file`] to read it.
    fn media_file_index(&self, query: EpisodeQuery) -> usize;

    fn resolution(&self, file_name: &str) -> Resolution {
        Resolution::detect(file_name)
    }

    fn display_resolution(&self, resolution: Resolution) -> String {
        resolution.display().to_string()
    }

    fn display_resolution_short(&self, resolution: Resolution) -> String {
        resolution.display_short().to_string()
    }
}

/// Resolve the media file for a query, checking the index against the
/// candidate's file list.
pub fn resolve_media_file<C>(
    candidate: &C,
    query: EpisodeQuery,
) -> Result<(usize, &TorrentFile), TorrentError>
where
    C: StreamCandidate + ?Sized,
{
    let index = candidate.media_file_index(query);
    let files = candidate.files();
    files
        .get(index)
        .map(|file| (index, file))
        .ok_or_else(|| TorrentError::FileIndexOutOfRange {
            info_hash: candidate.info_hash().to_string(),
            index,
            file_count: files.len(),
        })
}
