use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

use crate::locale::Vocabulary;
use crate::ranking::Score;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub addon: AddonConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub streams: StreamsConfig,
    /// Replaces the built-in phrase tables when present.
    #[serde(default)]
    pub vocabulary: Vocabulary,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

/// Public addon address used as the base of playback URLs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddonConfig {
    /// e.g. "https://addon.example.com"
    pub url: String,
}

/// Weights for the preference scorers.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RankingConfig {
    #[serde(default = "default_language_weight")]
    pub language_weight: Score,
    #[serde(default = "default_resolution_weight")]
    pub resolution_weight: Score,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            language_weight: default_language_weight(),
            resolution_weight: default_resolution_weight(),
        }
    }
}

fn default_language_weight() -> Score {
    3
}

fn default_resolution_weight() -> Score {
    2
}

/// Stream list settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct StreamsConfig {
    /// How many of the top-ranked streams are marked recommended.
    #[serde(default = "default_recommended_count")]
    pub recommended_count: usize,
    /// Cap on returned streams (default: unlimited)
    #[serde(default)]
    pub max_results: Option<usize>,
}

impl Default for StreamsConfig {
    fn default() -> Self {
        Self {
            recommended_count: default_recommended_count(),
            max_results: None,
        }
    }
}

fn default_recommended_count() -> usize {
    1
}

/// Config view for API responses (phrase tables omitted)
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    pub server: ServerConfig,
    pub addon_url: String,
    pub ranking: RankingConfig,
    pub streams: StreamsConfig,
    pub locales: Vec<String>,
}

impl From<&Config> for ConfigSummary {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            addon_url: config.addon.url.clone(),
            ranking: config.ranking.clone(),
            streams: config.streams.clone(),
            locales: config.vocabulary.configured_locales(),
        }
    }
}
