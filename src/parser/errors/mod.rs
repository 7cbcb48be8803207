//! Parser error handling module
//!
//! Parsing either yields a complete tree or a single [`ParseFailure`] that
//! carries the farthest offset reached, its line/column and the set of rules
//! that were being attempted there.

mod error;

pub use error::{FailureKind, ParseFailure};
