//! Grammar rules for HAProxy configuration files
//!
//! This module contains the parsing logic organized by construct:
//! - `sections` - section headers and their blocks
//! - `lines` - block lines (config, option, server, bind, user, group, comments)
//! - `fragments` - names, values, service addresses and line endings
//!
//! Every rule is a function generic over [`GrammarParser`] returning whether it
//! matched. Ordered choice is written as `p.attempt(a) || p.attempt(b)`: the
//! first alternative that matches wins and a failed one leaves no trace except
//! its entry in the farthest-failure set.

mod fragments;
mod lines;
mod sections;

use crate::parser::parser::{Snapshot, kind_to_name};
use crate::parser::syntax_kind::SyntaxKind;

/// Primitive operations the grammar rules are written against.
///
/// Whitespace is significant in this grammar (it separates a keyword from its
/// value and a line from the next), so nothing here skips trivia implicitly.
pub(crate) trait GrammarParser {
    fn current_kind(&self) -> Option<SyntaxKind>;
    fn current_text(&self) -> Option<&str>;
    /// Raw lookahead, `nth_kind(0)` is the current token
    fn nth_kind(&self, n: usize) -> Option<SyntaxKind>;
    fn nth_text(&self, n: usize) -> Option<&str>;
    fn at_eof(&self) -> bool;

    fn bump(&mut self);
    /// Consume the current token, re-tagging it as `kind`
    fn bump_as(&mut self, kind: SyntaxKind);

    fn start_node(&mut self, kind: SyntaxKind);
    fn finish_node(&mut self);

    fn snapshot(&self) -> Snapshot;
    fn rewind(&mut self, snapshot: Snapshot);

    /// Record that `what` was expected at the current position
    fn expected(&mut self, what: &'static str);

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == Some(kind)
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        self.current_kind().is_some_and(|k| kinds.contains(&k))
    }

    /// Check for a plain word with exactly this text
    fn at_word(&self, text: &str) -> bool {
        self.at(SyntaxKind::WORD) && self.current_text() == Some(text)
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.expected(kind_to_name(kind));
            false
        }
    }

    /// Consume a contextual keyword, re-tagging the word as `kind`
    fn expect_keyword(&mut self, kind: SyntaxKind) -> bool {
        match keyword_text(kind) {
            Some(text) if self.at_word(text) => {
                self.bump_as(kind);
                true
            }
            _ => {
                self.expected(kind_to_name(kind));
                false
            }
        }
    }

    /// Run one alternative of an ordered choice, rewinding if it does not match
    fn attempt(&mut self, rule: impl FnOnce(&mut Self) -> bool) -> bool
    where
        Self: Sized,
    {
        let snapshot = self.snapshot();
        if rule(self) {
            true
        } else {
            self.rewind(snapshot);
            false
        }
    }
}

/// Source text of a contextual keyword
pub fn keyword_text(kind: SyntaxKind) -> Option<&'static str> {
    let text = match kind {
        SyntaxKind::GLOBAL_KW => "global",
        SyntaxKind::DEFAULTS_KW => "defaults",
        SyntaxKind::FRONTEND_KW => "frontend",
        SyntaxKind::BACKEND_KW => "backend",
        SyntaxKind::LISTEN_KW => "listen",
        SyntaxKind::USERLIST_KW => "userlist",
        SyntaxKind::SERVER_KW => "server",
        SyntaxKind::BIND_KW => "bind",
        SyntaxKind::OPTION_KW => "option",
        SyntaxKind::USER_KW => "user",
        SyntaxKind::GROUP_KW => "group",
        SyntaxKind::PASSWORD_KW => "password",
        SyntaxKind::INSECURE_PASSWORD_KW => "insecure-password",
        SyntaxKind::GROUPS_KW => "groups",
        SyntaxKind::USERS_KW => "users",
        _ => return None,
    };
    Some(text)
}

/// ConfigurationFile = (BlankLine | CommentLine | Section)* EOF
pub(crate) fn configuration_file<P: GrammarParser>(p: &mut P) -> bool {
    p.start_node(SyntaxKind::CONFIGURATION_FILE);

    while !p.at_eof() {
        let matched = p.attempt(lines::blank_line)
            || p.attempt(lines::comment_line)
            || p.attempt(sections::section);
        if !matched {
            break;
        }
    }

    if !p.at_eof() {
        p.expected("end of input");
        return false;
    }

    p.finish_node();
    true
}
