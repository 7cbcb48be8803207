//! Block lines
//!
//! Alternatives are tried from most to least specific: comment, blank, server,
//! bind, option, generic config line and finally a bare keyword. Inside a
//! userlist block only comments, blank lines, `user` and `group` lines apply.

use super::GrammarParser;
use super::fragments::{keyword, line_end, name, name_list, service_address, value, word_run};
use super::sections::BlockKind;
use crate::parser::syntax_kind::SyntaxKind;

/// BlankLine = WHITESPACE? (NEWLINE | EOF)
pub(super) fn blank_line<P: GrammarParser>(p: &mut P) -> bool {
    p.start_node(SyntaxKind::BLANK_LINE);
    let indented = p.eat(SyntaxKind::WHITESPACE);
    if p.eat(SyntaxKind::NEWLINE) || (indented && p.at_eof()) {
        p.finish_node();
        true
    } else {
        p.expected("line break");
        false
    }
}

/// CommentLine = WHITESPACE? COMMENT (NEWLINE | EOF)
pub(super) fn comment_line<P: GrammarParser>(p: &mut P) -> bool {
    p.start_node(SyntaxKind::COMMENT_LINE);
    p.eat(SyntaxKind::WHITESPACE);
    if !p.expect(SyntaxKind::COMMENT) {
        return false;
    }
    if !p.at_eof() && !p.expect(SyntaxKind::NEWLINE) {
        return false;
    }
    p.finish_node();
    true
}

/// One line of a `global`/`defaults`/`frontend`/`backend`/`listen` block
pub(super) fn config_block_line<P: GrammarParser>(p: &mut P, block: BlockKind) -> bool {
    p.attempt(comment_line)
        || p.attempt(blank_line)
        || (block.allows_servers() && p.attempt(server_line))
        || (block.allows_binds() && p.attempt(bind_line))
        || p.attempt(option_line)
        || p.attempt(config_line)
        || p.attempt(flag_line)
}

/// One line of a `userlist` block
pub(super) fn userlist_line<P: GrammarParser>(p: &mut P) -> bool {
    p.attempt(comment_line)
        || p.attempt(blank_line)
        || p.attempt(user_line)
        || p.attempt(group_line)
}

/// ServerLine = 'server' ServerName ServiceAddress Value? LineEnd
fn server_line<P: GrammarParser>(p: &mut P) -> bool {
    p.start_node(SyntaxKind::SERVER_LINE);
    p.eat(SyntaxKind::WHITESPACE);
    let matched = p.expect_keyword(SyntaxKind::SERVER_KW)
        && p.expect(SyntaxKind::WHITESPACE)
        && name(p, SyntaxKind::SERVER_NAME)
        && p.expect(SyntaxKind::WHITESPACE)
        && service_address(p);
    if !matched {
        return false;
    }
    p.attempt(|p| p.eat(SyntaxKind::WHITESPACE) && value(p));
    finish_line(p)
}

/// BindLine = 'bind' ServiceAddress (',' ServiceAddress)* Value? LineEnd
fn bind_line<P: GrammarParser>(p: &mut P) -> bool {
    p.start_node(SyntaxKind::BIND_LINE);
    p.eat(SyntaxKind::WHITESPACE);
    let matched = p.expect_keyword(SyntaxKind::BIND_KW)
        && p.expect(SyntaxKind::WHITESPACE)
        && service_address(p);
    if !matched {
        return false;
    }
    while p.eat(SyntaxKind::COMMA) {
        if !service_address(p) {
            return false;
        }
    }
    p.attempt(|p| p.eat(SyntaxKind::WHITESPACE) && value(p));
    finish_line(p)
}

/// OptionLine = 'option' Keyword Value? LineEnd
fn option_line<P: GrammarParser>(p: &mut P) -> bool {
    p.start_node(SyntaxKind::OPTION_LINE);
    p.eat(SyntaxKind::WHITESPACE);
    let matched = p.expect_keyword(SyntaxKind::OPTION_KW)
        && p.expect(SyntaxKind::WHITESPACE)
        && keyword(p);
    if !matched {
        return false;
    }
    p.attempt(|p| p.eat(SyntaxKind::WHITESPACE) && value(p));
    finish_line(p)
}

/// ConfigLine = Keyword Value LineEnd
fn config_line<P: GrammarParser>(p: &mut P) -> bool {
    p.start_node(SyntaxKind::CONFIG_LINE);
    p.eat(SyntaxKind::WHITESPACE);
    let matched = keyword(p) && p.expect(SyntaxKind::WHITESPACE) && value(p);
    matched && finish_line(p)
}

/// A keyword on its own (`daemon`, `disabled`) is an option line without value
fn flag_line<P: GrammarParser>(p: &mut P) -> bool {
    p.start_node(SyntaxKind::OPTION_LINE);
    p.eat(SyntaxKind::WHITESPACE);
    keyword(p) && finish_line(p)
}

/// UserLine = 'user' Name ('password' | 'insecure-password') PasswordType? Password
///            ('groups' NameList)? LineEnd
fn user_line<P: GrammarParser>(p: &mut P) -> bool {
    p.start_node(SyntaxKind::USER_LINE);
    p.eat(SyntaxKind::WHITESPACE);
    let matched = p.expect_keyword(SyntaxKind::USER_KW)
        && p.expect(SyntaxKind::WHITESPACE)
        && name(p, SyntaxKind::NAME)
        && p.expect(SyntaxKind::WHITESPACE)
        && password_keyword(p)
        && p.expect(SyntaxKind::WHITESPACE);
    if !matched {
        return false;
    }

    // `password md5 <hash>` carries an explicit type, `password <hash>` does not
    let typed = p.attempt(|p| {
        word_run(p, SyntaxKind::PASSWORD_TYPE, "password type")
            && p.eat(SyntaxKind::WHITESPACE)
            && !p.at_word("groups")
            && word_run(p, SyntaxKind::PASSWORD, "password")
    });
    if !typed && !word_run(p, SyntaxKind::PASSWORD, "password") {
        return false;
    }

    p.attempt(|p| {
        p.eat(SyntaxKind::WHITESPACE)
            && p.expect_keyword(SyntaxKind::GROUPS_KW)
            && p.expect(SyntaxKind::WHITESPACE)
            && name_list(p)
    });
    finish_line(p)
}

fn password_keyword<P: GrammarParser>(p: &mut P) -> bool {
    p.expect_keyword(SyntaxKind::PASSWORD_KW) || p.expect_keyword(SyntaxKind::INSECURE_PASSWORD_KW)
}

/// GroupLine = 'group' Name ('users' NameList)? LineEnd
fn group_line<P: GrammarParser>(p: &mut P) -> bool {
    p.start_node(SyntaxKind::GROUP_LINE);
    p.eat(SyntaxKind::WHITESPACE);
    let matched = p.expect_keyword(SyntaxKind::GROUP_KW)
        && p.expect(SyntaxKind::WHITESPACE)
        && name(p, SyntaxKind::NAME);
    if !matched {
        return false;
    }
    p.attempt(|p| {
        p.eat(SyntaxKind::WHITESPACE)
            && p.expect_keyword(SyntaxKind::USERS_KW)
            && p.expect(SyntaxKind::WHITESPACE)
            && name_list(p)
    });
    finish_line(p)
}

fn finish_line<P: GrammarParser>(p: &mut P) -> bool {
    if !line_end(p) {
        return false;
    }
    p.finish_node();
    true
}
