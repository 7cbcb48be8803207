//! # haproxy-config
//!
//! Lossless parser and typed document model for HAProxy configuration files.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! syntax    → Tree dumps for debugging
//!   ↓
//! semantic  → Capability traits, value interpretation, userlist resolution
//!   ↓
//! parser    → Logos lexer, backtracking parser, typed AST
//!   ↓
//! base      → Primitives (Position, LineIndex, TextRange)
//! ```
//!
//! ## Example
//!
//! ```
//! use haproxy_config::{ServerContainer, parse};
//!
//! let parse = parse("backend app\n  server web1 10.0.0.1:8000 check\n").unwrap();
//! let backend = parse.tree().backend("app").unwrap();
//! let names: Vec<_> = backend.servers().map(|s| s.name()).collect();
//! assert_eq!(names, vec!["web1"]);
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → semantic → syntax)
// ============================================================================

/// Foundation types: Position, LineIndex, TextRange
pub mod base;

/// Parser: Logos lexer, backtracking parser, typed AST
pub mod parser;

/// Semantic layer: capability traits and userlist resolution
pub mod semantic;

/// Syntax utilities: tree dumps
pub mod syntax;

use rayon::prelude::*;
use tracing::debug;

// Re-export foundation types
pub use base::{LineIndex, Position, TextRange, TextSize};

// Re-export the parser entry points
pub use parser::{Parse, ParseFailure, SyntaxKind, SyntaxNode, parse};

// Re-export the semantic layer
pub use semantic::{
    BlockContainer, Grouping, OptionalValue, ServerContainer, ServiceAddressHolder, TimeUnit,
    TimeValue, TrimmedText,
};

/// Parse independent inputs in parallel.
///
/// Results come back in input order, one per input.
pub fn parse_many(inputs: &[&str]) -> Vec<Result<Parse, ParseFailure>> {
    debug!(inputs = inputs.len(), "parsing configurations in parallel");
    inputs.par_iter().map(|input| parse(input)).collect()
}
