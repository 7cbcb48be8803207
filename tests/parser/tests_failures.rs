//! Rejected input: failure offsets, positions and expected sets

use crate::helpers::parse_err;
use haproxy_config::parser::FailureKind;
use haproxy_config::{TextSize, parse};
use rstest::rstest;

const SECTION_KEYWORDS: [&str; 6] = [
    "'backend'",
    "'defaults'",
    "'frontend'",
    "'global'",
    "'listen'",
    "'userlist'",
];

#[test]
fn test_unknown_top_level_keyword() {
    let source = "# leading comment\nbogus value\nglobal\n  daemon\n";
    let failure = parse_err(source);

    assert_eq!(failure.offset, TextSize::new(18));
    assert_eq!(&source[18..23], "bogus");
    assert_eq!(failure.position.line, 2);
    assert_eq!(failure.position.column, 1);
    assert_eq!(failure.found.as_deref(), Some("bogus"));
    assert_eq!(failure.kind, FailureKind::UnexpectedToken);
    for keyword in SECTION_KEYWORDS {
        assert!(failure.expected.contains(&keyword), "{keyword} missing");
    }
}

#[test]
fn test_expected_set_is_sorted_and_unique() {
    let failure = parse_err("nope\n");
    let mut sorted = failure.expected.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(failure.expected, sorted);
}

#[test]
fn test_failure_message_names_location() {
    let failure = parse_err("global\n  daemon\n\nbackend\n");
    let message = failure.to_string();
    assert!(
        message.starts_with("parse failure at line 4, column 8: expected "),
        "{message}"
    );
}

#[rstest]
#[case::unknown_keyword("frontends web\n", 0)]
#[case::indented_unknown_keyword("   bogus\n", 3)]
#[case::backend_without_name("backend\n", 7)]
#[case::dangling_comma("userlist L\n  group G1 users a,\n", 30)]
#[case::user_without_password("userlist L\n  user bob password\n", 30)]
#[case::global_with_name("global main\n", 7)]
fn test_failure_offsets(#[case] source: &str, #[case] offset: u32) {
    let failure = parse_err(source);
    assert_eq!(failure.offset, TextSize::new(offset), "{failure}");
}

#[test]
fn test_unexpected_end_of_input() {
    let failure = parse_err("backend");
    assert_eq!(failure.kind, FailureKind::UnexpectedEof);
    assert_eq!(failure.found, None);
    assert_eq!(failure.offset, TextSize::new(7));
    assert!(failure.to_string().ends_with("found end of input"));
}

#[test]
fn test_no_tree_on_failure() {
    assert!(parse("global\nfoo: bar\n\"").is_err());
}
