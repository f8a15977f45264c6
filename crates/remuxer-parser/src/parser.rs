//! Token scan that fills an [`ExtractedMetadata`].

use crate::lexer::Lexer;
use crate::model::ExtractedMetadata;
use crate::patterns;

/// Scan the tokens of an extension-less name from left to right.
///
/// Until the first year token every token is a title word. After it, each
/// token is searched for a source keyword and a resolution tag; a single token
/// may supply both. Later year-like tokens are ordinary tokens.
pub fn extract(stem: &str) -> ExtractedMetadata {
    let lexer = Lexer::new(stem);
    let mut meta = ExtractedMetadata::default();

    for (token, span) in lexer.tokens() {
        let text = token.text();

        if meta.year.is_none() {
            if token.is_number() && patterns::is_year(text) {
                meta.year = Some(text.to_string());
            } else {
                meta.title.push(text.to_string());
            }
            continue;
        }

        if meta.source.is_none() {
            meta.source =
                patterns::find_source(lexer.rest_from(*span), span.len()).map(str::to_string);
        }

        if meta.resolution.is_none() {
            meta.resolution = patterns::find_resolution(text).map(str::to_string);
        }

        if meta.source.is_some() && meta.resolution.is_some() {
            break;
        }
    }

    meta
}
