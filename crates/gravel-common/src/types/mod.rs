//! Core type definitions for Gravel.
//!
//! - Identifier types ([`EdgeId`])
//! - Flag storage primitives ([`FlagWord`], [`FLAG_WORD_BITS`])

mod id;

pub use id::EdgeId;

/// One word of per-edge flag storage.
///
/// Every encoded value lives entirely inside a single word; values never
/// straddle a word boundary.
pub type FlagWord = u32;

/// Number of bits in a [`FlagWord`].
pub const FLAG_WORD_BITS: u32 = FlagWord::BITS;
