//! Placement and metadata of a registered encoded value.

use std::sync::Arc;

use gravel_common::types::FLAG_WORD_BITS;
use gravel_common::utils::error::{Error, Result};

use super::slot::BitSlot;

/// Where an encoded value lives in flag storage, plus its name and width.
///
/// Created by the schema builder and placed exactly once; afterwards it is
/// never modified. Direction-dependent values reserve two adjacent ranges of
/// `bits` each in the same word: forward first, backward directly above it.
/// For values without direction dependence both ranges are the same slot, so
/// the direction argument of every codec is ignored without a branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    name: Arc<str>,
    bits: u32,
    two_directions: bool,
    forward: BitSlot,
    backward: BitSlot,
    placed: bool,
}

impl Descriptor {
    /// Creates an unplaced descriptor.
    ///
    /// Fails with `InvalidWidth` if `bits` is 0 or the total width
    /// (`2 * bits` when direction-dependent) exceeds one flag word.
    pub(crate) fn new(name: Arc<str>, bits: u32, two_directions: bool) -> Result<Self> {
        let total = if two_directions {
            bits.saturating_mul(2)
        } else {
            bits
        };
        if bits == 0 || total > FLAG_WORD_BITS {
            return Err(Error::InvalidWidth { name, bits: total });
        }

        let slot = BitSlot::new(0, 0, bits);
        Ok(Self {
            name,
            bits,
            two_directions,
            forward: slot,
            backward: slot,
            placed: false,
        })
    }

    /// Assigns the word and shift. Called once by the builder.
    pub(crate) fn place(&mut self, word: usize, shift: u32) -> Result<()> {
        if self.placed {
            return Err(Error::AlreadyPlaced(self.name.clone()));
        }
        let total = self.total_bits();
        if shift + total > FLAG_WORD_BITS {
            return Err(Error::InvalidWidth {
                name: self.name.clone(),
                bits: shift + total,
            });
        }

        self.forward = BitSlot::new(word, shift, self.bits);
        self.backward = if self.two_directions {
            BitSlot::new(word, shift + self.bits, self.bits)
        } else {
            self.forward
        };
        self.placed = true;
        Ok(())
    }

    /// Attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_arc(&self) -> &Arc<str> {
        &self.name
    }

    /// Width of one direction in bits.
    #[must_use]
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Bits reserved in flag storage, both directions included.
    #[must_use]
    pub fn total_bits(&self) -> u32 {
        if self.two_directions {
            self.bits * 2
        } else {
            self.bits
        }
    }

    /// Whether the value differs by traversal direction.
    #[must_use]
    pub fn is_two_directions(&self) -> bool {
        self.two_directions
    }

    /// Whether the builder has assigned a position.
    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Index of the flag word holding the value.
    #[must_use]
    pub fn word(&self) -> usize {
        self.forward.word()
    }

    /// Bit offset of the forward range.
    #[must_use]
    pub fn shift(&self) -> u32 {
        self.forward.shift()
    }

    /// Slot read and written for the given direction.
    #[inline]
    #[must_use]
    pub fn slot(&self, reverse: bool) -> BitSlot {
        if reverse { self.backward } else { self.forward }
    }
}
