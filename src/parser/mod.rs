//! Rowan-based lossless parser for HAProxy configuration files
//!
//! This module provides a lossless parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! Every byte of the input, whitespace and comments included, ends up in the
//! tree, and a typed AST layer sits on top.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → event buffer, rewound on failed alternatives
//!     ↓
//! GreenNode tree (immutable, cheap to clone, Send + Sync)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//! ```

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod errors;
mod grammar;
mod lexer;
mod syntax_kind;

pub use ast::*;
pub use errors::{FailureKind, ParseFailure};
pub use grammar::keyword_text;
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, kind_to_name, parse};
pub use syntax_kind::{
    HaproxyLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxNodeChildren, SyntaxToken,
};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
