//! In-process tests for the HTTP API.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{fixtures, TestFixture};
use torrentstream_core::Language;

const STREAMS_PATH: &str = "/api/v1/auth/device-1/streams";

fn torrent_json(torrent: &torrentstream_core::TorrentDetails) -> Value {
    serde_json::to_value(torrent).unwrap()
}

#[tokio::test]
async fn test_health() {
    let fixture = TestFixture::new();

    let response = fixture.get("/api/v1/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_config_summary() {
    let fixture = TestFixture::new();

    let response = fixture.get("/api/v1/config").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["addon_url"], fixture.config.addon.url.as_str());
    assert_eq!(response.body["server"]["port"], 8080);
    assert_eq!(response.body["ranking"]["language_weight"], 3);
    assert_eq!(response.body["streams"]["recommended_count"], 1);
    assert_eq!(response.body["locales"], json!(["default", "hu"]));
    assert!(response.body.get("vocabulary").is_none());
}

#[tokio::test]
async fn test_movie_streams_ranked() {
    let fixture = TestFixture::new();
    let english = fixtures::movie_torrent("en1080", Language::En, "Movie.1080p.mkv");
    let hungarian = fixtures::movie_torrent("hu720", Language::Hu, "Movie.720p.mkv");

    let response = fixture
        .post(
            STREAMS_PATH,
            json!({
                "torrents": [torrent_json(&english), torrent_json(&hungarian)],
                "preferences": { "language": "hu", "resolutions": ["1080p"] }
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let streams = response.body["streams"].as_array().unwrap();
    assert_eq!(streams.len(), 2);

    assert_eq!(
        streams[0]["url"],
        "http://addon.test/api/auth/device-1/stream/play/ncore/id-hu720/hu720/0"
    );
    assert_eq!(streams[0]["behaviorHints"]["notWebReady"], true);
    assert_eq!(streams[0]["behaviorHints"]["bingeGroup"], "hu720");
    assert_eq!(
        streams[0]["description"],
        "⭐️ Ajánlott\n🇭🇺 | HD | 2 GB\nMovie hu720.720p\n👥 50\n"
    );
    assert_eq!(streams[1]["behaviorHints"]["bingeGroup"], "en1080");
}

#[tokio::test]
async fn test_episode_streams_use_episode_file() {
    let fixture = TestFixture::new();
    let pack = fixtures::show_torrent(
        "pack",
        Language::En,
        &["Show.S01E01.mkv", "Show.S01E02.mkv"],
    );

    let response = fixture
        .post(
            STREAMS_PATH,
            json!({
                "torrents": [torrent_json(&pack)],
                "season": 1,
                "episode": 2,
                "preferences": { "language": "en" }
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let stream = &response.body["streams"][0];
    assert!(stream["url"].as_str().unwrap().ends_with("/pack/1"));
    assert_eq!(
        stream["description"],
        "⭐️ Recommended\n🇬🇧 | Unknown | 1 GB\nShow.S01E02.mkv.unknown\n👥 50\n"
    );
}

#[tokio::test]
async fn test_device_token_is_percent_encoded() {
    let fixture = TestFixture::new();
    let movie = fixtures::movie_torrent("abc", Language::En, "Movie.mkv");

    let response = fixture
        .post(
            "/api/v1/auth/a%20b/streams",
            json!({
                "torrents": [torrent_json(&movie)],
                "preferences": { "language": "en" }
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let url = response.body["streams"][0]["url"].as_str().unwrap();
    assert!(url.starts_with("http://addon.test/api/auth/a%20b/stream/play/"));
}

#[tokio::test]
async fn test_empty_torrents() {
    let fixture = TestFixture::new();

    let response = fixture
        .post(
            STREAMS_PATH,
            json!({ "torrents": [], "preferences": { "language": "en" } }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["streams"], json!([]));
}

#[tokio::test]
async fn test_corrupted_candidate_returns_422() {
    let fixture = TestFixture::new();
    let mut broken = fixtures::movie_torrent("broken", Language::En, "Movie.mkv");
    broken.files.clear();

    let response = fixture
        .post(
            STREAMS_PATH,
            json!({
                "torrents": [torrent_json(&broken)],
                "preferences": { "language": "en" }
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let error = response.body["error"].as_str().unwrap();
    assert!(error.contains("broken"));
    assert!(error.contains("out of range"));
}

#[tokio::test]
async fn test_max_results_from_config() {
    let fixture = TestFixture::with_config(
        r#"
[addon]
url = "http://addon.test"

[streams]
recommended_count = 0
max_results = 1
"#,
    );
    let torrents: Vec<Value> = ["a", "b", "c"]
        .iter()
        .map(|hash| torrent_json(&fixtures::movie_torrent(hash, Language::En, "Movie.mkv")))
        .collect();

    let response = fixture
        .post(
            STREAMS_PATH,
            json!({ "torrents": torrents, "preferences": { "language": "en" } }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let streams = response.body["streams"].as_array().unwrap();
    assert_eq!(streams.len(), 1);
    assert!(!streams[0]["description"]
        .as_str()
        .unwrap()
        .contains("Recommended"));
}

#[tokio::test]
async fn test_invalid_language_rejected() {
    let fixture = TestFixture::new();

    let response = fixture
        .post(
            STREAMS_PATH,
            json!({ "torrents": [], "preferences": { "language": "xx" } }),
        )
        .await;

    assert!(response.status.is_client_error());
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let fixture = TestFixture::new();
    fixture.get("/api/v1/health").await;

    let response = fixture.get("/metrics").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("torrentstream_http_requests_total"));
    assert!(response.text.contains("/api/v1/health"));
}
