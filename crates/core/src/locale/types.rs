use serde::{Deserialize, Serialize};
use std::fmt;

/// Language of a torrent's audio track, or of a user's preferred content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hu,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Hu];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hu => "hu",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation language for generated text.
///
/// Only selects which vocabulary table is used; it never changes which
/// description lines are emitted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Default,
    Hu,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Default, Locale::Hu];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Default => "default",
            Locale::Hu => "hu",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Language> for Locale {
    fn from(language: Language) -> Self {
        match language {
            Language::En => Locale::Default,
            Language::Hu => Locale::Hu,
        }
    }
}
