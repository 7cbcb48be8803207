//! Lexical coverage: time units, escapes, quoting and hyphenated keywords

use crate::helpers::parse_ok;
use haproxy_config::parser::{SyntaxKind, tokenize};
use haproxy_config::{BlockContainer, OptionalValue, TimeUnit, TimeValue, TrimmedText};
use rstest::rstest;

#[rstest]
#[case("100us", 100, TimeUnit::Microseconds)]
#[case("300ms", 300, TimeUnit::Milliseconds)]
#[case("5s", 5, TimeUnit::Seconds)]
#[case("2m", 2, TimeUnit::Minutes)]
#[case("1h", 1, TimeUnit::Hours)]
#[case("1d", 1, TimeUnit::Days)]
fn test_valid_units_of_time(#[case] text: &str, #[case] amount: u64, #[case] unit: TimeUnit) {
    let source = format!("defaults\n    option http-keep-alive {text}\n");
    let root = parse_ok(&source);
    let option = root.defaults().next().unwrap().option("http-keep-alive").unwrap();
    let value = option.value().unwrap();
    assert_eq!(value.content(), text);
    assert_eq!(value.as_time(), Some(TimeValue { amount, unit }));
}

#[test]
fn test_time_value_in_config_line() {
    let root = parse_ok("defaults\n    timeout connect 5s\n");
    let line = root.defaults().next().unwrap().config("timeout").unwrap();
    assert_eq!(line.attribute(), "connect 5s");
}

#[test]
fn test_unknown_unit_is_a_plain_word() {
    let tokens = tokenize("10mb");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, SyntaxKind::WORD);
}

#[test]
fn test_escaped_spaces() {
    let root = parse_ok("global\n    chroot /var/lib/my\\ haproxy\n");
    let line = root.global().unwrap().config("chroot").unwrap();
    assert_eq!(line.attribute(), "/var/lib/my\\ haproxy");
    assert_eq!(line.value().unwrap().unescaped(), "/var/lib/my haproxy");
}

#[test]
fn test_escaped_quotes() {
    let root = parse_ok("defaults\n    errorfile 503 \"/etc/errors/\\\"busy\\\".http\"\n");
    let line = root.defaults().next().unwrap().config("errorfile").unwrap();
    assert_eq!(line.value().unwrap().unescaped(), "503 /etc/errors/\"busy\".http");
}

#[test]
fn test_quoted_value_keeps_hash() {
    let root = parse_ok("backend b\n    http-request set-header X-Tag \"a # b\" # real comment\n");
    let line = root.backend("b").unwrap().config("http-request").unwrap();
    assert_eq!(line.attribute(), "set-header X-Tag \"a # b\"");
}

#[rstest]
#[case("http-request")]
#[case("http-response")]
#[case("tcp-request")]
#[case("default-server")]
fn test_keywords_with_hyphens(#[case] keyword: &str) {
    let source = format!("backend b\n    {keyword} something here\n");
    let root = parse_ok(&source);
    let keys: Vec<_> = root
        .backend("b")
        .unwrap()
        .config_lines()
        .map(|l| l.key())
        .collect();
    assert_eq!(keys, vec![keyword]);
}

#[test]
fn test_malformed_server_falls_back_to_config_line() {
    let root = parse_ok("backend b\n    server s1 unix-socket\n");
    let backend = root.backend("b").unwrap();
    assert_eq!(backend.config("server").unwrap().attribute(), "s1 unix-socket");
}
