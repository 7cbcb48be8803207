//! Backtracking recursive descent parser for HAProxy configuration text
//!
//! Grammar rules push events (`Start`, `Token`, `Finish`) into a buffer instead of
//! writing straight into a `GreenNodeBuilder`. Ordered choice then becomes cheap:
//! an alternative that fails rewinds the token cursor and truncates the buffer.
//! Only a fully matched document is replayed into a rowan green tree.

use super::errors::ParseFailure;
use super::grammar::{self, GrammarParser};
use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use crate::base::LineIndex;
use rowan::{GreenNode, GreenNodeBuilder, TextSize};
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Successful parse result holding the immutable green tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parse {
    pub green: GreenNode,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Get the typed document root
    pub fn tree(&self) -> super::ast::ConfigurationFile {
        super::ast::ConfigurationFile::new_unchecked(self.syntax())
    }
}

/// Parse HAProxy configuration text into a lossless CST.
///
/// Parsing is all-or-nothing: either the whole document matches the grammar or
/// a [`ParseFailure`] describes the farthest position reached.
///
/// A leading UTF-8 byte-order mark is skipped and is not part of the tree.
/// Failure offsets still count it; line/column positions do not.
pub fn parse(input: &str) -> Result<Parse, ParseFailure> {
    let body = input.strip_prefix('\u{feff}').unwrap_or(input);
    let bom = TextSize::of(input) - TextSize::of(body);
    let tokens: Vec<_> = Lexer::new(body).collect();
    let mut parser = Parser::new(&tokens, TextSize::of(body));
    let matched = grammar::configuration_file(&mut parser);
    parser.finish(body, matched).map_err(|mut failure| {
        failure.offset += bom;
        failure
    })
}

/// Human-readable name for a syntax kind, used in failure messages
pub fn kind_to_name(kind: SyntaxKind) -> &'static str {
    match kind {
        SyntaxKind::WHITESPACE => "whitespace",
        SyntaxKind::NEWLINE => "line break",
        SyntaxKind::COMMENT => "comment",
        SyntaxKind::WORD => "word",
        SyntaxKind::STRING => "quoted string",
        SyntaxKind::TIME => "time value",
        SyntaxKind::COLON => "':'",
        SyntaxKind::COMMA => "','",
        SyntaxKind::GLOBAL_KW => "'global'",
        SyntaxKind::DEFAULTS_KW => "'defaults'",
        SyntaxKind::FRONTEND_KW => "'frontend'",
        SyntaxKind::BACKEND_KW => "'backend'",
        SyntaxKind::LISTEN_KW => "'listen'",
        SyntaxKind::USERLIST_KW => "'userlist'",
        SyntaxKind::SERVER_KW => "'server'",
        SyntaxKind::BIND_KW => "'bind'",
        SyntaxKind::OPTION_KW => "'option'",
        SyntaxKind::USER_KW => "'user'",
        SyntaxKind::GROUP_KW => "'group'",
        SyntaxKind::PASSWORD_KW => "'password'",
        SyntaxKind::INSECURE_PASSWORD_KW => "'insecure-password'",
        SyntaxKind::GROUPS_KW => "'groups'",
        SyntaxKind::USERS_KW => "'users'",
        SyntaxKind::ERROR => "invalid token",
        _ => "syntax node",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Start(SyntaxKind),
    /// Token at `index`, possibly re-tagged (contextual keywords)
    Token { kind: SyntaxKind, index: usize },
    Finish,
}

/// Cursor state an alternative can be rewound to
#[derive(Debug, Clone, Copy)]
pub(crate) struct Snapshot {
    pos: usize,
    events: usize,
}

/// Farthest position any rule failed at, with everything expected there
#[derive(Debug, Default)]
struct FarthestFailure {
    pos: usize,
    expected: BTreeSet<&'static str>,
}

/// The parser state
pub(crate) struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    end: TextSize,
    events: Vec<Event>,
    failure: FarthestFailure,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a [Token<'a>], end: TextSize) -> Self {
        Self {
            tokens,
            pos: 0,
            end,
            events: Vec::new(),
            failure: FarthestFailure::default(),
        }
    }

    fn finish(self, input: &str, matched: bool) -> Result<Parse, ParseFailure> {
        if !matched {
            let failure = self.failure(&LineIndex::new(input));
            debug!(
                offset = u32::from(failure.offset),
                expected = ?failure.expected,
                "configuration did not match"
            );
            return Err(failure);
        }

        let mut builder = GreenNodeBuilder::new();
        for event in &self.events {
            match *event {
                Event::Start(kind) => builder.start_node(kind.into()),
                Event::Token { kind, index } => builder.token(kind.into(), self.tokens[index].text),
                Event::Finish => builder.finish_node(),
            }
        }
        debug!(tokens = self.tokens.len(), "configuration parsed");
        Ok(Parse {
            green: builder.finish(),
        })
    }

    fn failure(&self, line_index: &LineIndex) -> ParseFailure {
        let offset = self.offset_of(self.failure.pos);
        let found = self.tokens.get(self.failure.pos);
        ParseFailure::new(
            offset,
            line_index.position(offset),
            self.failure.expected.iter().copied().collect(),
            found.map(|t| (t.kind, t.text)),
        )
    }

    fn offset_of(&self, pos: usize) -> TextSize {
        self.tokens.get(pos).map(|t| t.offset).unwrap_or(self.end)
    }
}

impl GrammarParser for Parser<'_> {
    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current_kind(&self) -> Option<SyntaxKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    fn current_text(&self) -> Option<&str> {
        self.tokens.get(self.pos).map(|t| t.text)
    }

    fn nth_kind(&self, n: usize) -> Option<SyntaxKind> {
        self.tokens.get(self.pos + n).map(|t| t.kind)
    }

    fn nth_text(&self, n: usize) -> Option<&str> {
        self.tokens.get(self.pos + n).map(|t| t.text)
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump_as(&mut self, kind: SyntaxKind) {
        if !self.at_eof() {
            self.events.push(Event::Token {
                kind,
                index: self.pos,
            });
            self.pos += 1;
        }
    }

    fn bump(&mut self) {
        if let Some(kind) = self.current_kind() {
            self.bump_as(kind);
        }
    }

    // =========================================================================
    // Node building
    // =========================================================================

    fn start_node(&mut self, kind: SyntaxKind) {
        self.events.push(Event::Start(kind));
    }

    fn finish_node(&mut self) {
        self.events.push(Event::Finish);
    }

    // =========================================================================
    // Backtracking and failure tracking
    // =========================================================================

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            pos: self.pos,
            events: self.events.len(),
        }
    }

    fn rewind(&mut self, snapshot: Snapshot) {
        trace!(from = self.pos, to = snapshot.pos, "rewinding alternative");
        self.pos = snapshot.pos;
        self.events.truncate(snapshot.events);
    }

    fn expected(&mut self, what: &'static str) {
        if self.pos > self.failure.pos {
            self.failure.pos = self.pos;
            self.failure.expected.clear();
        }
        if self.pos == self.failure.pos {
            self.failure.expected.insert(what);
        }
    }
}
