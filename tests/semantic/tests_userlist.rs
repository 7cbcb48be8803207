//! Userlist resolution over the fixture configurations

use crate::helpers::parse_ok;
use crate::helpers::source_fixtures::SIMPLE;
use haproxy_config::Grouping;
use rstest::rstest;

fn keys(set: indexmap::IndexSet<smol_str::SmolStr>) -> Vec<String> {
    set.into_iter().map(|name| name.to_string()).collect()
}

#[rstest]
#[case::declared_on_groups("L1", Grouping::Group)]
#[case::declared_on_users("L2", Grouping::User)]
fn test_userlist_grouping(#[case] name: &str, #[case] expected: Grouping) {
    let root = parse_ok(SIMPLE);
    let userlist = root.userlist(name).unwrap();
    assert_eq!(userlist.grouping(), expected);
}

#[rstest]
#[case("L1")]
#[case("L2")]
fn test_userlists_share_user_fields(#[case] name: &str) {
    let root = parse_ok(SIMPLE);
    let userlist = root.userlist(name).unwrap();

    let tiger = userlist.user("tiger").unwrap();
    assert_eq!(tiger.password_type(), "md5");
    assert_eq!(tiger.password(), "$6$k6y3o.eP$JlKBx(...)xHSwRv6J.C0/D7cV91");

    let scott = userlist.user("scott").unwrap();
    assert_eq!(scott.password_type(), "insecure-password");
    assert_eq!(scott.password(), "elgato");

    let users: Vec<_> = userlist.users().map(|u| u.name()).collect();
    assert_eq!(users, vec!["tiger", "scott", "xdb"]);
    let groups: Vec<_> = userlist.groups().map(|g| g.name()).collect();
    assert_eq!(groups, vec!["G1", "G2"]);
}

#[test]
fn test_group_side_memberships() {
    let root = parse_ok(SIMPLE);
    let l1 = root.userlist("L1").unwrap();
    assert_eq!(keys(l1.group("G1").unwrap().users()), vec!["tiger", "scott"]);
    assert_eq!(keys(l1.group("G2").unwrap().users()), vec!["xdb", "scott"]);
    assert!(l1.user("scott").unwrap().groups().is_empty());
}

#[test]
fn test_user_side_memberships() {
    let root = parse_ok(SIMPLE);
    let l2 = root.userlist("L2").unwrap();
    assert_eq!(keys(l2.user("tiger").unwrap().groups()), vec!["G1"]);
    assert_eq!(keys(l2.user("scott").unwrap().groups()), vec!["G1", "G2"]);
    assert!(l2.group("G1").unwrap().users().is_empty());
}

#[test]
fn test_dangling_names_are_kept() {
    let root = parse_ok("userlist L\n    group admins users ghost\n");
    let userlist = root.userlist("L").unwrap();
    assert_eq!(keys(userlist.group("admins").unwrap().users()), vec!["ghost"]);
    assert!(userlist.user("ghost").is_none());
    assert_eq!(userlist.grouping(), Grouping::Group);
}

#[test]
fn test_duplicate_names_first_wins() {
    let root = parse_ok("userlist L\n    user a password one\n    user a password two\n");
    let userlist = root.userlist("L").unwrap();
    assert_eq!(userlist.user("a").unwrap().password(), "one");
    assert_eq!(userlist.users().count(), 2);
}

#[test]
fn test_truncated_share_tie_goes_to_groups() {
    let root = parse_ok(
        "userlist T\n    user a password x groups G1\n    user b password y\n    group G1 users a\n    group G2\n    group G3\n",
    );
    assert_eq!(root.userlist("T").unwrap().grouping(), Grouping::Group);
}
