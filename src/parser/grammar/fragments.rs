//! Line fragments shared by headers and block lines

use super::GrammarParser;
use crate::parser::syntax_kind::SyntaxKind;

/// Tokens that may appear inside a value or a password
const VALUE_TOKENS: &[SyntaxKind] = &[
    SyntaxKind::WORD,
    SyntaxKind::STRING,
    SyntaxKind::TIME,
    SyntaxKind::COLON,
    SyntaxKind::COMMA,
];

/// LineEnd = WHITESPACE? COMMENT? (NEWLINE | EOF)
pub(super) fn line_end<P: GrammarParser>(p: &mut P) -> bool {
    p.eat(SyntaxKind::WHITESPACE);
    if !p.eat(SyntaxKind::COMMENT) {
        p.expected("comment");
    }
    if p.at_eof() || p.eat(SyntaxKind::NEWLINE) {
        true
    } else {
        p.expected("line break");
        false
    }
}

/// Name = WORD | TIME, wrapped in a node of the given kind
pub(super) fn name<P: GrammarParser>(p: &mut P, kind: SyntaxKind) -> bool {
    if !p.at_any(&[SyntaxKind::WORD, SyntaxKind::TIME]) {
        p.expected("name");
        return false;
    }
    p.start_node(kind);
    p.bump();
    p.finish_node();
    true
}

/// Keyword = WORD
///
/// Hyphens are part of the word, so `http-request` is a single keyword.
pub(super) fn keyword<P: GrammarParser>(p: &mut P) -> bool {
    if !p.at(SyntaxKind::WORD) {
        p.expected("keyword");
        return false;
    }
    p.start_node(SyntaxKind::KEYWORD);
    p.bump();
    p.finish_node();
    true
}

/// Value = ValueToken (WHITESPACE? ValueToken)*
///
/// Stops before a comment or the line break; trailing whitespace stays outside.
pub(super) fn value<P: GrammarParser>(p: &mut P) -> bool {
    if !p.at_any(VALUE_TOKENS) {
        p.expected("value");
        return false;
    }
    p.start_node(SyntaxKind::VALUE);
    loop {
        if p.at_any(VALUE_TOKENS) {
            p.bump();
        } else if p.at(SyntaxKind::WHITESPACE)
            && p.nth_kind(1).is_some_and(|k| VALUE_TOKENS.contains(&k))
        {
            p.bump();
        } else {
            break;
        }
    }
    p.finish_node();
    true
}

/// A run of value tokens without whitespace (passwords, password types)
pub(super) fn word_run<P: GrammarParser>(
    p: &mut P,
    kind: SyntaxKind,
    label: &'static str,
) -> bool {
    if !p.at_any(VALUE_TOKENS) {
        p.expected(label);
        return false;
    }
    p.start_node(kind);
    while p.at_any(VALUE_TOKENS) {
        p.bump();
    }
    p.finish_node();
    true
}

/// ServiceAddress = Host ':' Port
///
/// The address is a run of words and colons without whitespace. It splits on
/// the last colon, so `[::1]:80` has host `[::1]`. The host may be empty
/// (`:80`) or the wildcard `*`.
pub(super) fn service_address<P: GrammarParser>(p: &mut P) -> bool {
    let mut run = 0;
    let mut last_colon = None;
    while let Some(kind) = p.nth_kind(run) {
        match kind {
            SyntaxKind::WORD | SyntaxKind::TIME => {}
            SyntaxKind::COLON => last_colon = Some(run),
            _ => break,
        }
        run += 1;
    }

    let Some(colon) = last_colon else {
        p.expected("service address");
        return false;
    };

    p.start_node(SyntaxKind::SERVICE_ADDRESS);
    p.start_node(SyntaxKind::HOST);
    for _ in 0..colon {
        p.bump();
    }
    p.finish_node();
    p.bump();

    if colon + 1 == run {
        p.expected("port");
        return false;
    }
    p.start_node(SyntaxKind::PORT);
    for _ in colon + 1..run {
        p.bump();
    }
    p.finish_node();
    p.finish_node();
    true
}

/// NameList = Name (',' Name)*
pub(super) fn name_list<P: GrammarParser>(p: &mut P) -> bool {
    p.start_node(SyntaxKind::NAME_LIST);
    if !name(p, SyntaxKind::NAME) {
        return false;
    }
    while p.eat(SyntaxKind::COMMA) {
        if !name(p, SyntaxKind::NAME) {
            return false;
        }
    }
    p.finish_node();
    true
}
