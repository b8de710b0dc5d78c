//! # gravel-common
//!
//! Foundation layer for Gravel: identifier types, the error taxonomy, and
//! small utilities shared by every other crate.
//!
//! This crate has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (EdgeId, FlagWord)
//! - [`utils`] - Utility functions and helpers (hashing, errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{EdgeId, FLAG_WORD_BITS, FlagWord};
pub use utils::error::{Error, Result};
