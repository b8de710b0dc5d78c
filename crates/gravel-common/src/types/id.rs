//! Identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a graph edge.
///
/// Edge IDs are dense and assigned by the graph store, so they double as
/// slot indexes into bulk flag storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Creates an edge ID from a raw value.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns the ID as a slot index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_id_roundtrip() {
        let id = EdgeId::new(42);
        assert_eq!(id.as_u64(), 42);
        assert_eq!(id.index(), 42);
        assert_eq!(EdgeId::from(42), id);
    }

    #[test]
    fn test_edge_id_display() {
        assert_eq!(EdgeId::new(7).to_string(), "e7");
    }

    #[test]
    fn test_edge_id_serde_transparent() {
        let json = serde_json::to_string(&EdgeId::new(9)).unwrap();
        assert_eq!(json, "9");
        let back: EdgeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EdgeId::new(9));
    }
}
