//! Token types for the Logos-based lexer.

use logos::Logos;

/// Token types recognized by the lexer.
///
/// Delimiter runs (`.`, `-`, `_`, space, brackets and parentheses) are skipped,
/// so every token is a maximal run of non-delimiter characters.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[.\-_ ()\[\]]+")]
pub enum Token<'src> {
    /// A run made only of ASCII digits (e.g. `1999`, `12024`, `5`).
    ///
    /// Wins over [`Token::Word`] when both match the same slice.
    #[regex(r"[0-9]+", priority = 5)]
    Number(&'src str),

    /// Any other run of non-delimiter characters (e.g. `Matrix`, `1080p`, `x264`).
    #[regex(r"[^.\-_ ()\[\]]+", priority = 1)]
    Word(&'src str),
}

impl<'src> Token<'src> {
    /// The text of the token, borrowed from the input.
    pub fn text(&self) -> &'src str {
        match self {
            Token::Number(text) | Token::Word(text) => text,
        }
    }

    /// Whether the token is purely numeric.
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Token<'_>> {
        Token::lexer(input).filter_map(|t| t.ok()).collect()
    }

    #[test]
    fn test_numbers_and_words() {
        assert_eq!(
            lex("Movie.2020.1080p"),
            vec![
                Token::Word("Movie"),
                Token::Number("2020"),
                Token::Word("1080p"),
            ]
        );
    }

    #[test]
    fn test_long_digit_run_is_one_token() {
        assert_eq!(lex("x.12024.y")[1], Token::Number("12024"));
    }

    #[test]
    fn test_all_delimiters_skipped() {
        let tokens = lex("a.b-c_d e(f)g[h]i");
        let texts: Vec<_> = tokens.iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["a", "b", "c", "d", "e", "f", "g", "h", "i"]);
    }

    #[test]
    fn test_only_delimiters() {
        assert!(lex("..-__ ()[]").is_empty());
    }

    #[test]
    fn test_non_ascii_word() {
        assert_eq!(lex("Amélie.2001"), vec![Token::Word("Amélie"), Token::Number("2001")]);
    }
}
