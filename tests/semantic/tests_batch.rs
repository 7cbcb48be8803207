//! Parallel parsing and tree dumps

use crate::helpers::source_fixtures::{MULTI_POOL, SIMPLE};
use haproxy_config::syntax::{DumpOptions, dump_tree};
use haproxy_config::{parse, parse_many};

#[test]
fn test_parse_many_keeps_input_order() {
    let inputs = [SIMPLE, "bogus\n", MULTI_POOL, ""];
    let results = parse_many(&inputs);
    assert_eq!(results.len(), 4);

    assert_eq!(results[0].as_ref().unwrap().tree().listeners().count(), 1);
    assert_eq!(results[1].as_ref().unwrap_err().found.as_deref(), Some("bogus"));
    assert_eq!(results[2].as_ref().unwrap().tree().backends().count(), 2);
    assert_eq!(results[3].as_ref().unwrap().tree().elements().count(), 0);
}

#[test]
fn test_parse_many_matches_sequential_parse() {
    let inputs: Vec<&str> = (0..32)
        .map(|i| if i % 2 == 0 { SIMPLE } else { MULTI_POOL })
        .collect();
    let parallel = parse_many(&inputs);
    for (input, result) in inputs.iter().zip(parallel) {
        assert_eq!(result, parse(input));
    }
}

#[test]
fn test_parse_result_crosses_threads() {
    let parse = parse(MULTI_POOL).unwrap();
    let handle = std::thread::spawn(move || parse.tree().frontends().count());
    assert_eq!(handle.join().unwrap(), 1);
}

#[test]
fn test_dump_lists_sections() {
    let parse = parse(MULTI_POOL).unwrap();
    let output = dump_tree(&parse.syntax(), &DumpOptions::default());
    let sections: Vec<_> = output
        .lines()
        .filter(|line| line.starts_with("-- ") && line.ends_with("_SECTION"))
        .collect();
    assert_eq!(
        sections,
        vec![
            "-- GLOBAL_SECTION",
            "-- DEFAULTS_SECTION",
            "-- FRONTEND_SECTION",
            "-- BACKEND_SECTION",
            "-- BACKEND_SECTION",
        ]
    );
}
