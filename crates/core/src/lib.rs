pub mod config;
pub mod locale;
pub mod metrics;
pub mod ranking;
pub mod stream;
pub mod testing;
pub mod torrent;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, ConfigSummary,
};
pub use locale::{Language, Locale, Vocabulary, VocabularyError};
pub use ranking::{order_torrents, rank, try_rank, Score, UserPreferences};
pub use stream::{StreamBuilder, StreamError, StreamRecord, StreamRequest, StreamService};
pub use torrent::{
    resolve_media_file, EpisodeQuery, Resolution, StreamCandidate, TorrentDetails, TorrentError,
    TorrentFile,
};
