//! Parse failure type

use rowan::{TextRange, TextSize};
use thiserror::Error;

use crate::base::Position;
use crate::parser::SyntaxKind;
use crate::parser::parser::kind_to_name;

/// Category of a parse failure, derived from what was found at the failing offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A well-formed token that no rule accepts at this position
    UnexpectedToken,
    /// Input ended while a rule still needed more
    UnexpectedEof,
    /// Text the lexer could not tokenize (e.g. an unterminated quote)
    InvalidToken,
}

impl FailureKind {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnexpectedToken => "unexpected token",
            Self::UnexpectedEof => "unexpected end of input",
            Self::InvalidToken => "invalid token",
        }
    }
}

/// The configuration text does not match the grammar.
///
/// No partial tree is ever produced alongside a failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "parse failure at line {}, column {}: expected {}, found {}",
    .position.line,
    .position.column,
    describe_expected(.expected),
    describe_found(.found, .kind)
)]
pub struct ParseFailure {
    /// Byte offset of the first character that could not be matched
    pub offset: TextSize,
    /// Line/column of `offset` (1-indexed)
    pub position: Position,
    /// Rules and tokens attempted at `offset`, sorted and deduplicated
    pub expected: Vec<&'static str>,
    /// Text of the token found at `offset`; `None` at end of input
    pub found: Option<String>,
    pub kind: FailureKind,
}

impl ParseFailure {
    pub fn new(
        offset: TextSize,
        position: Position,
        expected: Vec<&'static str>,
        found: Option<(SyntaxKind, &str)>,
    ) -> Self {
        let kind = match found {
            None => FailureKind::UnexpectedEof,
            Some((SyntaxKind::ERROR, _)) => FailureKind::InvalidToken,
            Some(_) => FailureKind::UnexpectedToken,
        };
        Self {
            offset,
            position,
            expected,
            found: found.map(|(_, text)| text.to_string()),
            kind,
        }
    }

    /// Source range of the offending token (empty at end of input)
    pub fn range(&self) -> TextRange {
        let len = self
            .found
            .as_deref()
            .map(TextSize::of)
            .unwrap_or_default();
        TextRange::at(self.offset, len)
    }

    /// `"'backend', 'frontend' or comment"`
    pub fn expected_description(&self) -> String {
        describe_expected(&self.expected)
    }
}

fn describe_expected(expected: &[&'static str]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}

fn describe_found(found: &Option<String>, kind: &FailureKind) -> String {
    match (found, kind) {
        (Some(text), FailureKind::InvalidToken) => {
            format!("{} {:?}", kind_to_name(SyntaxKind::ERROR), text)
        }
        (Some(text), _) => format!("{:?}", text),
        (None, _) => "end of input".to_string(),
    }
}
