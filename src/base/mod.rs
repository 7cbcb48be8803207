//! Foundation types shared by the parser and the document model.
//!
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`Position`], [`LineIndex`] - Line/column conversion for diagnostics
//!
//! This module has NO dependencies on other crate modules.

mod position;

pub use position::{LineIndex, Position};

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::{TextRange, TextSize};
