//! Core data types shared by every rule.
//!
//! This module contains the pure part of the crate:
//! - Attribute path helpers (leaf segments, wildcard matching)
//! - The flattened input payload
//! - Entity type identifiers and fetched records
//!
//! Nothing in here performs lookups or formats messages.

pub mod path;
mod payload;
mod record;

pub use payload::Payload;
pub use record::{EntityType, Record};
