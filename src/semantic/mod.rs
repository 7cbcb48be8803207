//! # Semantic layer
//!
//! Projections over the typed document model: trimmed text, block filtering,
//! service addresses and optional values as capability traits, value
//! interpretation, and userlist resolution.

pub mod adapters;
pub mod resolver;
mod values;

pub use adapters::{
    BlockContainer, OptionalValue, ServerContainer, ServiceAddressHolder, TrimmedText,
};
pub use resolver::{Grouping, MembershipCounts, decide_grouping};
pub use values::{TimeUnit, TimeValue, unescape};
