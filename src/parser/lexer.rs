//! Logos-based lexer for HAProxy configuration text
//!
//! Fast tokenization using the logos crate. Keywords are not recognised here:
//! HAProxy keywords are contextual (`user` is a directive in `global` and a line
//! kind in `userlist`), so the parser re-tags `WORD` tokens where it expects one.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t]+")]
    Whitespace,

    #[regex(r"\r\n|\n|\r")]
    Newline,

    #[regex(r"#[^\r\n]*")]
    Comment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r#""([^"\\\r\n]|\\[^\r\n])*""#)]
    String,

    /// A number with one of the HAProxy time suffixes. Longest match still
    /// wins, so `10mb` lexes as a single word.
    #[regex(r"[0-9]+(us|ms|s|m|h|d)", priority = 10)]
    Time,

    /// Anything up to the next blank, comment, quote or separator.
    /// A backslash escapes the following character (`my\ file`).
    #[regex(r#"([^ \t\r\n#",:\\]|\\[^\r\n])+"#)]
    Word,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => SyntaxKind::WHITESPACE,
            LogosToken::Newline => SyntaxKind::NEWLINE,
            LogosToken::Comment => SyntaxKind::COMMENT,
            LogosToken::String => SyntaxKind::STRING,
            LogosToken::Time => SyntaxKind::TIME,
            LogosToken::Word => SyntaxKind::WORD,
            LogosToken::Colon => SyntaxKind::COLON,
            LogosToken::Comma => SyntaxKind::COMMA,
        }
    }
}
