//! Vocabulary tables for generated stream text.
//!
//! One phrase table per [`Locale`] plus one emoji per [`Language`]. A table
//! is loaded once (built-in or from config), validated, then shared
//! read-only. Lookups never fall back to another locale: a missing entry
//! is reported as a [`VocabularyError`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use super::{Language, Locale};

/// Placeholder substituted with the movie/show noun in the warning template.
pub const MEDIA_PLACEHOLDER: &str = "{media}";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("No vocabulary table for locale '{0}'")]
    MissingLocale(Locale),

    #[error("No emoji configured for language '{0}'")]
    MissingLanguageEmoji(Language),

    #[error("Vocabulary entry '{key}' for locale '{locale}' is empty")]
    EmptyPhrase { locale: String, key: &'static str },

    #[error("Warning template for locale '{0}' lacks the {{media}} placeholder")]
    MissingPlaceholder(Locale),

    #[error("Vocabulary table for unknown locale '{0}'")]
    UnknownLocale(String),

    #[error("Emoji configured for unknown language '{0}'")]
    UnknownLanguage(String),
}

/// Phrases for a single locale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocalePhrases {
    /// Warning shown for speculated sources. May span several lines and must
    /// contain `{media}`.
    pub speculated_warning: String,
    /// Line shown for recommended sources.
    pub recommended: String,
    /// Noun for a movie.
    pub movie: String,
    /// Noun for a show.
    pub show: String,
}

impl LocalePhrases {
    pub fn media_noun(&self, episodic: bool) -> &str {
        if episodic {
            &self.show
        } else {
            &self.movie
        }
    }

    pub fn speculated_warning(&self, episodic: bool) -> String {
        self.speculated_warning
            .replace(MEDIA_PLACEHOLDER, self.media_noun(episodic))
    }

    fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("speculated_warning", &self.speculated_warning),
            ("recommended", &self.recommended),
            ("movie", &self.movie),
            ("show", &self.show),
        ]
    }
}

/// Complete vocabulary: phrase tables keyed by locale name, emoji keyed by
/// language tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vocabulary {
    pub locales: BTreeMap<String, LocalePhrases>,
    pub language_emoji: BTreeMap<String, String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Vocabulary {
    /// The vocabulary shipped with the service.
    pub fn builtin() -> Self {
        let mut locales = BTreeMap::new();
        locales.insert(
            Locale::Default.as_str().to_string(),
            LocalePhrases {
                speculated_warning: "⚠️ Speculated source ⚠️\nThis might be a different {media}!"
                    .to_string(),
                recommended: "⭐️ Recommended".to_string(),
                movie: "movie".to_string(),
                show: "show".to_string(),
            },
        );
        locales.insert(
            Locale::Hu.as_str().to_string(),
            LocalePhrases {
                speculated_warning: "⚠️ Bizonytalan forrás ⚠️\nEz lehet egy másik {media}!"
                    .to_string(),
                recommended: "⭐️ Ajánlott".to_string(),
                movie: "film".to_string(),
                show: "sorozat".to_string(),
            },
        );

        let mut language_emoji = BTreeMap::new();
        language_emoji.insert(Language::En.as_str().to_string(), "🇬🇧".to_string());
        language_emoji.insert(Language::Hu.as_str().to_string(), "🇭🇺".to_string());

        Self {
            locales,
            language_emoji,
        }
    }

    /// Check that every locale and language has a complete entry.
    pub fn validate(&self) -> Result<(), VocabularyError> {
        for key in self.locales.keys() {
            if !Locale::ALL.iter().any(|l| l.as_str() == key) {
                return Err(VocabularyError::UnknownLocale(key.clone()));
            }
        }
        for key in self.language_emoji.keys() {
            if !Language::ALL.iter().any(|l| l.as_str() == key) {
                return Err(VocabularyError::UnknownLanguage(key.clone()));
            }
        }

        for locale in Locale::ALL {
            let phrases = self.phrases(locale)?;
            for (key, value) in phrases.entries() {
                if value.trim().is_empty() {
                    return Err(VocabularyError::EmptyPhrase {
                        locale: locale.to_string(),
                        key,
                    });
                }
            }
            if !phrases.speculated_warning.contains(MEDIA_PLACEHOLDER) {
                return Err(VocabularyError::MissingPlaceholder(locale));
            }
        }

        for language in Language::ALL {
            self.language_emoji(language)?;
        }

        Ok(())
    }

    pub fn phrases(&self, locale: Locale) -> Result<&LocalePhrases, VocabularyError> {
        self.locales
            .get(locale.as_str())
            .ok_or(VocabularyError::MissingLocale(locale))
    }

    pub fn language_emoji(&self, language: Language) -> Result<&str, VocabularyError> {
        self.language_emoji
            .get(language.as_str())
            .map(String::as_str)
            .filter(|emoji| !emoji.trim().is_empty())
            .ok_or(VocabularyError::MissingLanguageEmoji(language))
    }

    /// Locales with a table, in a stable order.
    pub fn configured_locales(&self) -> Vec<String> {
        self.locales.keys().cloned().collect()
    }
}
