//! Logos-based lexer for file names.
//!
//! This module splits a file name (without its extension) into an ordered
//! sequence of tokens using the [logos](https://docs.rs/logos) crate. Tokens
//! keep their byte spans so later stages can look at the raw text around them.

mod token;
pub use token::Token;

use logos::Logos;
use std::ops::Range;

/// Byte span in the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// A lexer that tokenizes file names using Logos.
///
/// The whole input is tokenized up front; empty tokens never appear because
/// delimiter runs are skipped by the generated lexer.
pub struct Lexer<'src> {
    tokens: Vec<(Token<'src>, Span)>,
    input: &'src str,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'src str) -> Self {
        let tokens = Token::lexer(input)
            .spanned()
            .filter_map(|(tok, span)| tok.ok().map(|t| (t, Span::from(span))))
            .collect();
        Self { tokens, input }
    }

    /// Get all tokens with their spans, in input order.
    pub fn tokens(&self) -> &[(Token<'src>, Span)] {
        &self.tokens
    }

    /// The raw input from the start of `span` to the end of the input.
    ///
    /// Used to match keywords that continue past a delimiter, such as `WEB-DL`.
    pub fn rest_from(&self, span: Span) -> &'src str {
        &self.input[span.start..]
    }
}
