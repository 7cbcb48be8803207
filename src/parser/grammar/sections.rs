//! Sections: a header line followed by the block of lines it owns
//!
//! A block runs until the next header line or the end of input. Indentation is
//! not significant.

use super::GrammarParser;
use super::fragments::{line_end, name, service_address};
use super::keyword_text;
use super::lines::{config_block_line, userlist_line};
use crate::parser::syntax_kind::SyntaxKind;
use tracing::trace;

/// Which lines a block accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BlockKind {
    Global,
    Defaults,
    Frontend,
    Backend,
    Listen,
    Userlist,
}

impl BlockKind {
    pub(super) fn allows_servers(self) -> bool {
        matches!(self, Self::Backend | Self::Listen)
    }

    pub(super) fn allows_binds(self) -> bool {
        matches!(self, Self::Frontend | Self::Listen)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameArity {
    None,
    Optional,
    Required,
}

/// Shape of one section kind
struct SectionRule {
    section: SyntaxKind,
    header: SyntaxKind,
    keyword: SyntaxKind,
    name: NameArity,
    address: bool,
    block: BlockKind,
}

/// Section alternatives, in the order they are tried
const SECTIONS: &[SectionRule] = &[
    SectionRule {
        section: SyntaxKind::GLOBAL_SECTION,
        header: SyntaxKind::GLOBAL_HEADER,
        keyword: SyntaxKind::GLOBAL_KW,
        name: NameArity::None,
        address: false,
        block: BlockKind::Global,
    },
    SectionRule {
        section: SyntaxKind::DEFAULTS_SECTION,
        header: SyntaxKind::DEFAULTS_HEADER,
        keyword: SyntaxKind::DEFAULTS_KW,
        name: NameArity::Optional,
        address: false,
        block: BlockKind::Defaults,
    },
    SectionRule {
        section: SyntaxKind::USERLIST_SECTION,
        header: SyntaxKind::USERLIST_HEADER,
        keyword: SyntaxKind::USERLIST_KW,
        name: NameArity::Required,
        address: false,
        block: BlockKind::Userlist,
    },
    SectionRule {
        section: SyntaxKind::LISTEN_SECTION,
        header: SyntaxKind::LISTEN_HEADER,
        keyword: SyntaxKind::LISTEN_KW,
        name: NameArity::Required,
        address: true,
        block: BlockKind::Listen,
    },
    SectionRule {
        section: SyntaxKind::FRONTEND_SECTION,
        header: SyntaxKind::FRONTEND_HEADER,
        keyword: SyntaxKind::FRONTEND_KW,
        name: NameArity::Required,
        address: true,
        block: BlockKind::Frontend,
    },
    SectionRule {
        section: SyntaxKind::BACKEND_SECTION,
        header: SyntaxKind::BACKEND_HEADER,
        keyword: SyntaxKind::BACKEND_KW,
        name: NameArity::Required,
        address: false,
        block: BlockKind::Backend,
    },
];

/// Section = Global | Defaults | Userlist | Listen | Frontend | Backend
pub(super) fn section<P: GrammarParser>(p: &mut P) -> bool {
    SECTIONS
        .iter()
        .any(|rule| p.attempt(|p| section_with(p, rule)))
}

fn section_with<P: GrammarParser>(p: &mut P, rule: &SectionRule) -> bool {
    p.start_node(rule.section);
    if !header(p, rule) {
        return false;
    }
    trace!(section = ?rule.section, "parsing block");
    block(p, rule.block);
    p.finish_node();
    true
}

/// Header = Keyword Name? ServiceAddress? LineEnd
fn header<P: GrammarParser>(p: &mut P, rule: &SectionRule) -> bool {
    p.start_node(rule.header);
    p.eat(SyntaxKind::WHITESPACE);
    if !p.expect_keyword(rule.keyword) {
        return false;
    }

    match rule.name {
        NameArity::None => {}
        NameArity::Optional => {
            p.attempt(|p| p.eat(SyntaxKind::WHITESPACE) && name(p, SyntaxKind::PROXY_NAME));
        }
        NameArity::Required => {
            p.eat(SyntaxKind::WHITESPACE);
            if !name(p, SyntaxKind::PROXY_NAME) {
                return false;
            }
        }
    }

    if rule.address {
        p.attempt(|p| p.eat(SyntaxKind::WHITESPACE) && service_address(p));
    }

    if !line_end(p) {
        return false;
    }
    p.finish_node();
    true
}

/// Block = (!HeaderStart Line)*
fn block<P: GrammarParser>(p: &mut P, kind: BlockKind) {
    let node = match kind {
        BlockKind::Userlist => SyntaxKind::USERLIST_BLOCK,
        _ => SyntaxKind::CONFIG_BLOCK,
    };
    p.start_node(node);
    while !p.at_eof() && !at_header_start(p) {
        let matched = match kind {
            BlockKind::Userlist => userlist_line(p),
            _ => config_block_line(p, kind),
        };
        if !matched {
            break;
        }
    }
    p.finish_node();
}

/// Lookahead: does the current line open a new section?
fn at_header_start<P: GrammarParser>(p: &P) -> bool {
    let i = usize::from(p.at(SyntaxKind::WHITESPACE));
    if p.nth_kind(i) != Some(SyntaxKind::WORD) {
        return false;
    }
    let is_section_keyword = SECTIONS
        .iter()
        .any(|rule| keyword_text(rule.keyword).is_some_and(|kw| p.nth_text(i) == Some(kw)));
    is_section_keyword
        && matches!(
            p.nth_kind(i + 1),
            None | Some(SyntaxKind::WHITESPACE | SyntaxKind::NEWLINE | SyntaxKind::COMMENT)
        )
}
