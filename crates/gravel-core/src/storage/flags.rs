//! Per-edge and bulk flag storage.

use std::ops::{Deref, DerefMut};

use smallvec::SmallVec;

use gravel_common::types::{EdgeId, FlagWord};

/// Inline word capacity; schemas rarely need more.
const INLINE_WORDS: usize = 4;

/// Flag words of a single edge.
///
/// Derefs to `[FlagWord]`, so it can be passed straight to any codec. New
/// flags are zeroed, which every codec reads as its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EdgeFlags {
    words: SmallVec<[FlagWord; INLINE_WORDS]>,
}

impl EdgeFlags {
    /// Creates zeroed flags of `word_count` words.
    #[must_use]
    pub fn new(word_count: usize) -> Self {
        Self {
            words: SmallVec::from_elem(0, word_count),
        }
    }

    /// Wraps existing words, e.g. copied out of bulk storage.
    #[must_use]
    pub fn from_words(words: &[FlagWord]) -> Self {
        Self {
            words: SmallVec::from_slice(words),
        }
    }

    /// Number of words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Resets every attribute to its default.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Returns true if no bit is set.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }
}

impl Deref for EdgeFlags {
    type Target = [FlagWord];

    fn deref(&self) -> &[FlagWord] {
        &self.words
    }
}

impl DerefMut for EdgeFlags {
    fn deref_mut(&mut self) -> &mut [FlagWord] {
        &mut self.words
    }
}

/// Flag storage for many edges in one contiguous allocation.
///
/// Every edge gets a fixed-width slot of `words_per_edge` words, addressed
/// by [`EdgeId`]. Slots start zeroed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagArray {
    words_per_edge: usize,
    edge_count: usize,
    words: Vec<FlagWord>,
}

impl FlagArray {
    /// Creates empty storage with slots of `words_per_edge` words.
    #[must_use]
    pub fn new(words_per_edge: usize) -> Self {
        Self::with_capacity(words_per_edge, 0)
    }

    /// Creates empty storage with room for `edge_capacity` edges.
    #[must_use]
    pub fn with_capacity(words_per_edge: usize, edge_capacity: usize) -> Self {
        Self {
            words_per_edge,
            edge_count: 0,
            words: Vec::with_capacity(words_per_edge * edge_capacity),
        }
    }

    /// Words in each slot.
    #[must_use]
    pub fn words_per_edge(&self) -> usize {
        self.words_per_edge
    }

    /// Number of edges with a slot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edge_count
    }

    /// Returns true if there are no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }

    /// Appends a zeroed slot and returns its edge ID.
    pub fn push_edge(&mut self) -> EdgeId {
        let id = EdgeId::new(self.edge_count as u64);
        self.words.resize(self.words.len() + self.words_per_edge, 0);
        self.edge_count += 1;
        id
    }

    /// Grows to at least `edge_count` slots; new slots are zeroed.
    pub fn ensure_edges(&mut self, edge_count: usize) {
        if edge_count > self.edge_count {
            self.words.resize(edge_count * self.words_per_edge, 0);
            self.edge_count = edge_count;
        }
    }

    /// Slot of `edge`, or `None` if it has none.
    #[must_use]
    pub fn get(&self, edge: EdgeId) -> Option<&[FlagWord]> {
        if edge.index() < self.edge_count {
            Some(self.slot(edge))
        } else {
            None
        }
    }

    /// Slot of `edge`.
    ///
    /// # Panics
    ///
    /// Panics if `edge` has no slot.
    #[inline]
    #[must_use]
    pub fn slot(&self, edge: EdgeId) -> &[FlagWord] {
        let start = edge.index() * self.words_per_edge;
        &self.words[start..start + self.words_per_edge]
    }

    /// Mutable slot of `edge`.
    ///
    /// # Panics
    ///
    /// Panics if `edge` has no slot.
    #[inline]
    pub fn slot_mut(&mut self, edge: EdgeId) -> &mut [FlagWord] {
        let start = edge.index() * self.words_per_edge;
        &mut self.words[start..start + self.words_per_edge]
    }

    /// Copies a slot out into standalone flags.
    #[must_use]
    pub fn load(&self, edge: EdgeId) -> EdgeFlags {
        EdgeFlags::from_words(self.slot(edge))
    }

    /// Overwrites a slot with `flags`.
    ///
    /// # Panics
    ///
    /// Panics if `edge` has no slot or `flags` has a different width.
    pub fn store(&mut self, edge: EdgeId, flags: &EdgeFlags) {
        self.slot_mut(edge).copy_from_slice(flags);
    }
}
