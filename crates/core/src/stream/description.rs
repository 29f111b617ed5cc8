//! Multi-line stream description.
//!
//! The description is produced by a fixed, ordered list of line producers.
//! Each producer looks at a [`DescriptionContext`] and yields zero or one
//! line; the locale only changes the phrases the context carries.

use tracing::debug;

use crate::locale::{Locale, LocalePhrases, Vocabulary};
use crate::torrent::{resolve_media_file, EpisodeQuery, StreamCandidate, TorrentFile};

use super::{format_bytes, StreamError};

pub const SEEDERS_EMOJI: &str = "👥";

/// Everything a line producer may read.
#[derive(Debug, Clone)]
pub struct DescriptionContext<'a> {
    pub phrases: &'a LocalePhrases,
    pub language_emoji: &'a str,
    pub is_speculated: bool,
    pub is_recommended: bool,
    pub episodic: bool,
    /// File name for episodes, torrent name otherwise.
    pub title: &'a str,
    pub resolution: String,
    pub resolution_short: String,
    pub file_size: String,
    pub seeders: u32,
}

impl<'a> DescriptionContext<'a> {
    pub fn new<C>(
        candidate: &'a C,
        file: &'a TorrentFile,
        is_recommended: bool,
        query: EpisodeQuery,
        phrases: &'a LocalePhrases,
        language_emoji: &'a str,
    ) -> Self
    where
        C: StreamCandidate + ?Sized,
    {
        let episodic = query.is_episodic();
        let resolution = candidate.resolution(&file.name);

        Self {
            phrases,
            language_emoji,
            is_speculated: candidate.is_speculated(),
            is_recommended,
            episodic,
            title: if episodic { file.name.as_str() } else { candidate.name() },
            resolution: candidate.display_resolution(resolution),
            resolution_short: candidate.display_resolution_short(resolution),
            file_size: format_bytes(file.length),
            seeders: candidate.seeders(),
        }
    }
}

pub type LineProducer = fn(&DescriptionContext<'_>) -> Option<String>;

/// Line producers in output order.
pub const LINE_PRODUCERS: [LineProducer; 5] = [
    warning_line,
    recommended_line,
    type_line,
    title_line,
    seeders_line,
];

pub fn warning_line(ctx: &DescriptionContext<'_>) -> Option<String> {
    ctx.is_speculated
        .then(|| ctx.phrases.speculated_warning(ctx.episodic))
}

/// Speculated sources are never advertised as recommended.
pub fn recommended_line(ctx: &DescriptionContext<'_>) -> Option<String> {
    (ctx.is_recommended && !ctx.is_speculated).then(|| ctx.phrases.recommended.clone())
}

pub fn type_line(ctx: &DescriptionContext<'_>) -> Option<String> {
    Some(format!(
        "{} | {} | {}",
        ctx.language_emoji, ctx.resolution, ctx.file_size
    ))
}

pub fn title_line(ctx: &DescriptionContext<'_>) -> Option<String> {
    Some(format!("{}.{}", ctx.title, ctx.resolution_short))
}

pub fn seeders_line(ctx: &DescriptionContext<'_>) -> Option<String> {
    Some(format!("{} {}", SEEDERS_EMOJI, ctx.seeders))
}

/// Fold the producers into the final text, one `\n` after every line.
pub fn render_description(ctx: &DescriptionContext<'_>) -> String {
    LINE_PRODUCERS
        .iter()
        .filter_map(|produce| produce(ctx))
        .fold(String::new(), |mut out, line| {
            out.push_str(&line);
            out.push('\n');
            out
        })
}

/// Compose the description of `candidate` for the given query and locale.
pub fn compose_description<C>(
    candidate: &C,
    is_recommended: bool,
    query: EpisodeQuery,
    locale: Locale,
    vocabulary: &Vocabulary,
) -> Result<String, StreamError>
where
    C: StreamCandidate + ?Sized,
{
    let (_, file) = resolve_media_file(candidate, query)?;
    describe_file(candidate, file, is_recommended, query, locale, vocabulary)
}

/// Compose the description for an already resolved media file.
pub(crate) fn describe_file<C>(
    candidate: &C,
    file: &TorrentFile,
    is_recommended: bool,
    query: EpisodeQuery,
    locale: Locale,
    vocabulary: &Vocabulary,
) -> Result<String, StreamError>
where
    C: StreamCandidate + ?Sized,
{
    let phrases = vocabulary.phrases(locale)?;
    let language_emoji = vocabulary.language_emoji(candidate.language())?;

    let ctx = DescriptionContext::new(
        candidate,
        file,
        is_recommended,
        query,
        phrases,
        language_emoji,
    );
    debug!(
        "Describing {} (locale: {}, recommended: {}, speculated: {}, episodic: {})",
        candidate.info_hash(),
        locale,
        ctx.is_recommended,
        ctx.is_speculated,
        ctx.episodic
    );

    Ok(render_description(&ctx))
}
