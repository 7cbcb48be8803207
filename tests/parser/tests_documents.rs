//! Document-level parsing of complete configurations

use crate::helpers::source_fixtures::{MULTI_POOL, SIMPLE};
use crate::helpers::parse_ok;
use haproxy_config::parser::ast::{Section, TopLevel};
use haproxy_config::{
    BlockContainer, OptionalValue, ServerContainer, ServiceAddressHolder, TrimmedText, parse,
};
use rstest::rstest;

#[test]
fn test_listen_file_top_level_order() {
    let root = parse_ok(SIMPLE);
    let elements: Vec<_> = root.elements().collect();
    assert_eq!(elements.len(), 7);

    assert!(matches!(elements[0], TopLevel::Comment(_)));
    assert!(matches!(elements[1], TopLevel::Blank(_)));

    let TopLevel::Section(Section::Global(global)) = &elements[2] else {
        panic!("expected global, got {:?}", elements[2]);
    };
    assert_eq!(root.global().as_ref(), Some(global));

    let TopLevel::Section(Section::Defaults(defaults)) = &elements[3] else {
        panic!("expected defaults, got {:?}", elements[3]);
    };
    assert_eq!(root.defaults().next().as_ref(), Some(defaults));

    let TopLevel::Section(Section::Listen(listener)) = &elements[4] else {
        panic!("expected listen, got {:?}", elements[4]);
    };
    assert_eq!(root.listeners().next().as_ref(), Some(listener));

    assert!(matches!(elements[5], TopLevel::Section(Section::Userlist(_))));
    assert!(matches!(elements[6], TopLevel::Section(Section::Userlist(_))));
}

#[test]
fn test_frontend_backend_file_top_level_order() {
    let root = parse_ok(MULTI_POOL);
    let sections: Vec<_> = root.sections().collect();
    assert_eq!(root.elements().count(), 5);

    assert!(matches!(sections[0], Section::Global(_)));
    assert!(matches!(sections[1], Section::Defaults(_)));
    assert!(matches!(sections[2], Section::Frontend(_)));
    assert!(matches!(sections[3], Section::Backend(_)));
    assert!(matches!(sections[4], Section::Backend(_)));

    let backends: Vec<_> = root.backends().map(|b| b.name()).collect();
    assert_eq!(backends, vec!["www_main", "www_static"]);
}

#[test]
fn test_servers_from_listen_block() {
    let root = parse_ok(SIMPLE);
    let listener = root.listeners().next().unwrap();
    assert_eq!(listener.name(), "poolA");

    let servers: Vec<_> = listener.servers().collect();
    assert_eq!(servers.len(), 3);
    assert_eq!(servers[0].name(), "prd_www_1");
    assert_eq!(servers[0].host().as_deref(), Some("10.214.78.95"));
    assert_eq!(servers[0].port().as_deref(), Some("8000"));
    assert_eq!(servers[2].name(), "prd_www_3");
}

#[test]
fn test_single_server_listen() {
    let root = parse_ok("listen poolA\n    server prd_www_1 10.214.78.95:8000\n");
    let listeners: Vec<_> = root.listeners().collect();
    assert_eq!(listeners.len(), 1);

    let servers: Vec<_> = listeners[0].servers().collect();
    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].name(), "prd_www_1");
    assert_eq!(servers[0].host().as_deref(), Some("10.214.78.95"));
    assert_eq!(servers[0].port().as_deref(), Some("8000"));
}

#[test]
fn test_servers_from_backend_block() {
    let root = parse_ok(MULTI_POOL);
    let backend = root.backends().next().unwrap();
    let servers: Vec<_> = backend.servers().collect();
    assert_eq!(servers.len(), 4);
    assert_eq!(servers[0].name(), "prd_www_1");
    assert_eq!(servers[0].host().as_deref(), Some("10.214.78.95"));
    assert_eq!(servers[0].port().as_deref(), Some("8000"));
    assert_eq!(servers[3].value().unwrap().content(), "check backup");
}

#[test]
fn test_service_address_from_listen_header() {
    let root = parse_ok(SIMPLE);
    let header = root.listeners().next().unwrap().header().unwrap();
    let address = header.service_address().unwrap();
    assert_eq!(address.host(), "55.55.55.55");
    assert_eq!(address.port(), "80");
}

#[test]
fn test_service_address_from_frontend_bind() {
    let root = parse_ok(MULTI_POOL);
    let frontend = root.frontend("fe_1").unwrap();
    assert!(frontend.header().unwrap().service_address().is_none());
    assert_eq!(frontend.host().as_deref(), Some("*"));
    assert_eq!(frontend.port().as_deref(), Some("85"));
}

#[test]
fn test_global_and_defaults_lines() {
    let root = parse_ok(MULTI_POOL);
    let global = root.global().unwrap();
    let keys: Vec<_> = global.config_lines().map(|l| l.key()).collect();
    assert_eq!(keys, vec!["maxconn", "user", "group"]);
    assert!(global.option("daemon").is_some());

    let defaults = root.defaults().next().unwrap();
    assert_eq!(defaults.name(), None);
    assert_eq!(
        defaults.option("forwardfor").unwrap().attribute().as_deref(),
        Some("except 127.0.0.1")
    );
}

#[test]
fn test_hyphenated_keywords() {
    let root = parse_ok(MULTI_POOL);
    let frontend = root.frontend("fe_1").unwrap();
    let line = frontend.config("http-request").unwrap();
    assert_eq!(line.attribute(), "deny if { src 10.0.0.0/8 }");
    assert_eq!(frontend.binds().count(), 1);
}

#[rstest]
#[case::simple(SIMPLE)]
#[case::multi_pool(MULTI_POOL)]
#[case::crlf("global\r\n  daemon\r\n\r\nbackend b\r\n  server s 1.2.3.4:80\r\n")]
#[case::no_trailing_newline("global\n  maxconn 10")]
#[case::indented_headers("  global\n  daemon\n   # note\n")]
#[case::empty("")]
fn test_parse_is_lossless(#[case] source: &str) {
    let parse = parse(source).unwrap();
    assert_eq!(parse.syntax().text().to_string(), source);
}

#[test]
fn test_indentation_is_not_significant() {
    let root = parse_ok("backend b\nserver s1 10.0.0.1:80\n        server s2 10.0.0.2:80\n");
    assert_eq!(root.backend("b").unwrap().servers().count(), 2);
}

#[test]
fn test_server_outside_backend_is_a_config_line() {
    let root = parse_ok("frontend fe\n  server s1 10.0.0.1:80\n");
    let frontend = root.frontend("fe").unwrap();
    assert_eq!(frontend.config("server").unwrap().attribute(), "s1 10.0.0.1:80");
}

#[test]
fn test_trailing_comments_stay_out_of_values() {
    let root = parse_ok("backend b # primary\n  balance roundrobin   # rr\n");
    let backend = root.backend("b").unwrap();
    assert_eq!(backend.name(), "b");
    assert_eq!(backend.config("balance").unwrap().attribute(), "roundrobin");
}
