//! Video resolution detection from release/file names.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Resolution {
    #[serde(rename = "2160p")]
    Uhd2160p,
    #[serde(rename = "1080p")]
    FullHd1080p,
    #[serde(rename = "720p")]
    Hd720p,
    #[serde(rename = "480p")]
    Sd480p,
    #[serde(rename = "unknown")]
    Unknown,
}

// Ordered from highest to lowest; the first match wins.
static PATTERNS: Lazy<Vec<(Regex, Resolution)>> = Lazy::new(|| {
    [
        (r"(?i)(^|[^a-z0-9])(2160p|4k|uhd)([^a-z0-9]|$)", Resolution::Uhd2160p),
        (r"(?i)(^|[^a-z0-9])(1080[pi]|fhd)([^a-z0-9]|$)", Resolution::FullHd1080p),
        (r"(?i)(^|[^a-z0-9])720p([^a-z0-9]|$)", Resolution::Hd720p),
        (r"(?i)(^|[^a-z0-9])(480p|576p|sd)([^a-z0-9]|$)", Resolution::Sd480p),
    ]
    .into_iter()
    .map(|(pattern, resolution)| (Regex::new(pattern).unwrap(), resolution))
    .collect()
});

impl Resolution {
    /// Detect the resolution tag in a file or release name.
    pub fn detect(name: &str) -> Self {
        PATTERNS
            .iter()
            .find(|(re, _)| re.is_match(name))
            .map(|(_, resolution)| *resolution)
            .unwrap_or(Resolution::Unknown)
    }

    /// Human-readable form, e.g. "Full HD".
    pub fn display(&self) -> &'static str {
        match self {
            Resolution::Uhd2160p => "4K",
            Resolution::FullHd1080p => "Full HD",
            Resolution::Hd720p => "HD",
            Resolution::Sd480p => "SD",
            Resolution::Unknown => "Unknown",
        }
    }

    /// Short tag form, e.g. "1080p".
    pub fn display_short(&self) -> &'static str {
        match self {
            Resolution::Uhd2160p => "2160p",
            Resolution::FullHd1080p => "1080p",
            Resolution::Hd720p => "720p",
            Resolution::Sd480p => "480p",
            Resolution::Unknown => "unknown",
        }
    }
}
