//! Flag storage for edges.
//!
//! - [`EdgeFlags`] - The flag words of a single edge
//! - [`FlagArray`] - Fixed-width flag slots for many edges
//!
//! Both hand out plain `[FlagWord]` slices, which is all the codecs in
//! [`crate::encoding`] read from and write to.

mod flags;

pub use flags::{EdgeFlags, FlagArray};
