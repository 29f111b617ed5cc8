//! Testing utilities shared by unit and integration tests.
//!
//! # Example
//!
//! ```rust
//! use torrentstream_core::locale::Language;
//! use torrentstream_core::testing::fixtures;
//!
//! let torrent = fixtures::movie_torrent("abc123", Language::En, "Movie.1080p.mkv");
//! assert_eq!(torrent.files.len(), 1);
//! ```

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::locale::Language;
    use crate::torrent::{TorrentDetails, TorrentFile};

    const GIB: u64 = 1024 * 1024 * 1024;

    /// Create a torrent with reasonable defaults and the given files.
    pub fn torrent(info_hash: &str, language: Language, files: Vec<TorrentFile>) -> TorrentDetails {
        TorrentDetails {
            source_name: "ncore".to_string(),
            source_id: format!("id-{}", info_hash),
            info_hash: info_hash.to_string(),
            name: format!("Release {}", info_hash),
            language,
            is_speculated: false,
            seeders: 50,
            files,
        }
    }

    /// Single-file movie torrent named "Movie {hash}" with a 2 GiB file.
    pub fn movie_torrent(info_hash: &str, language: Language, file_name: &str) -> TorrentDetails {
        TorrentDetails {
            name: format!("Movie {}", info_hash),
            ..torrent(
                info_hash,
                language,
                vec![TorrentFile {
                    name: file_name.to_string(),
                    length: 2 * GIB,
                }],
            )
        }
    }

    /// Season pack named "Show {hash}" with a 1 GiB file per entry.
    pub fn show_torrent(info_hash: &str, language: Language, file_names: &[&str]) -> TorrentDetails {
        let files = file_names
            .iter()
            .map(|name| TorrentFile {
                name: name.to_string(),
                length: GIB,
            })
            .collect();

        TorrentDetails {
            name: format!("Show {}", info_hash),
            ..torrent(info_hash, language, files)
        }
    }
}
