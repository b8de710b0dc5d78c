//! # gravel-core
//!
//! Core layer for Gravel: typed edge attributes bit-packed into compact
//! flag storage.
//!
//! This crate depends only on `gravel-common`.
//!
//! ## Modules
//!
//! - [`encoding`] - Encoded value codecs, schema builder, and lookup
//! - [`storage`] - Per-edge and bulk flag storage

#![warn(missing_docs)]

pub mod encoding;
pub mod storage;

// Re-export commonly used types
pub use encoding::{
    BooleanEncodedValue, DecimalEncodedValue, EncodedValue, EncodedValueBuilder,
    EncodedValueLookup, EnumEncodedValue, FlagValue, IntEncodedValue, SchemaConfig,
};
pub use storage::{EdgeFlags, FlagArray};
