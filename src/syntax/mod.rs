//! Syntax tree utilities built on the parser output

pub mod dump;

pub use dump::{DumpOptions, dump_tree};
