//! Stream counters are updated by the service, never by the builder.
//!
//! Kept in its own test binary so no other test touches the counter.

use std::sync::Arc;

use torrentstream_core::config::{RankingConfig, StreamsConfig};
use torrentstream_core::metrics::STREAMS_BUILT;
use torrentstream_core::testing::fixtures;
use torrentstream_core::{
    EpisodeQuery, Language, Locale, StreamBuilder, StreamRequest, StreamService, UserPreferences,
    Vocabulary,
};

#[test]
fn test_streams_built_counted_by_service_only() {
    let builder =
        StreamBuilder::new("https://addon.example", Arc::new(Vocabulary::builtin())).unwrap();
    let counter = STREAMS_BUILT.with_label_values(&["hu"]);
    let before = counter.get();

    let movie = fixtures::movie_torrent("abc", Language::Hu, "Movie.1080p.mkv");
    let request = StreamRequest {
        device_token: "tok",
        is_recommended: false,
        query: EpisodeQuery::movie(),
        locale: Locale::Hu,
    };
    builder.build(&movie, &request).unwrap();
    assert_eq!(counter.get(), before);

    let service = StreamService::new(
        builder,
        RankingConfig::default(),
        StreamsConfig::default(),
    );
    let preferences = UserPreferences {
        language: Language::Hu,
        resolutions: vec![],
    };
    let torrents = vec![
        fixtures::movie_torrent("a", Language::Hu, "Movie.mkv"),
        fixtures::movie_torrent("b", Language::En, "Movie.mkv"),
    ];
    let streams = service
        .streams(torrents, &preferences, EpisodeQuery::movie(), "tok")
        .unwrap();

    assert_eq!(streams.len(), 2);
    assert_eq!(counter.get(), before + 2);
}
