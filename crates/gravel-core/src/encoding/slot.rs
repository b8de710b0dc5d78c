//! Bit ranges inside flag storage.

use gravel_common::types::{FLAG_WORD_BITS, FlagWord};

/// Where one direction of an encoded value lives: a run of bits in a single
/// flag word.
///
/// The in-word mask is computed once at construction, so a read or write
/// touches exactly one word with one shift and one mask.
///
/// # Example
///
/// ```
/// use gravel_core::encoding::BitSlot;
///
/// const SPEED: BitSlot = BitSlot::new(0, 1, 5); // word 0, bits 1-5
///
/// let mut flags = [0u32; 1];
/// SPEED.set(&mut flags, 20);
/// assert_eq!(SPEED.get(&flags), 20);
/// assert_eq!(flags[0], 20 << 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitSlot {
    word: usize,
    shift: u32,
    bits: u32,
    mask: FlagWord,
}

impl BitSlot {
    /// Slot of `bits` bits starting at bit `shift` of flag word `word`.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is 0 or the slot runs past the end of the word.
    #[inline]
    #[must_use]
    pub const fn new(word: usize, shift: u32, bits: u32) -> Self {
        assert!(bits > 0, "slot width must be > 0");
        assert!(shift + bits <= FLAG_WORD_BITS, "slot exceeds flag word");

        let unshifted: FlagWord = if bits == FLAG_WORD_BITS {
            !0
        } else {
            (1 << bits) - 1
        };

        Self {
            word,
            shift,
            bits,
            mask: unshifted << shift,
        }
    }

    /// Flag word index.
    #[inline]
    #[must_use]
    pub const fn word(self) -> usize {
        self.word
    }

    /// Lowest bit of the slot within its word.
    #[inline]
    #[must_use]
    pub const fn shift(self) -> u32 {
        self.shift
    }

    /// Number of bits.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// The slot's bits, in place, as a word mask.
    #[inline]
    #[must_use]
    pub const fn mask(self) -> FlagWord {
        self.mask
    }

    /// All-ones value for this width, i.e. `2^bits - 1`.
    #[inline]
    #[must_use]
    pub const fn max_value(self) -> FlagWord {
        self.mask >> self.shift
    }

    /// Reads the unshifted contents of the slot.
    ///
    /// # Panics
    ///
    /// Panics if `flags` is shorter than `word() + 1`.
    #[inline]
    #[must_use]
    pub fn get(self, flags: &[FlagWord]) -> FlagWord {
        (flags[self.word] & self.mask) >> self.shift
    }

    /// Replaces the slot's contents with `raw`; the rest of the word keeps
    /// its bits.
    ///
    /// High bits of `raw` that do not fit are dropped, so codecs range-check
    /// first.
    ///
    /// # Panics
    ///
    /// Panics if `flags` is shorter than `word() + 1`.
    #[inline]
    pub fn set(self, flags: &mut [FlagWord], raw: FlagWord) {
        let word = &mut flags[self.word];
        *word = (*word & !self.mask) | ((raw << self.shift) & self.mask);
    }

    /// Returns true if this slot shares a bit with `other`.
    #[must_use]
    pub const fn overlaps(self, other: BitSlot) -> bool {
        self.word == other.word && (self.mask & other.mask) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_basic() {
        let slot = BitSlot::new(0, 0, 8);
        assert_eq!(slot.word(), 0);
        assert_eq!(slot.shift(), 0);
        assert_eq!(slot.bits(), 8);
        assert_eq!(slot.mask(), 0xFF);
        assert_eq!(slot.max_value(), 255);
    }

    #[test]
    fn test_slot_offset() {
        let slot = BitSlot::new(2, 4, 8);
        assert_eq!(slot.word(), 2);
        assert_eq!(slot.mask(), 0xFF0);
        assert_eq!(slot.max_value(), 255);
    }

    #[test]
    fn test_slot_full_word() {
        let slot = BitSlot::new(0, 0, 32);
        assert_eq!(slot.mask(), u32::MAX);
        assert_eq!(slot.max_value(), u32::MAX);

        let mut flags = [0u32; 1];
        slot.set(&mut flags, u32::MAX);
        assert_eq!(slot.get(&flags), u32::MAX);
    }

    #[test]
    fn test_slot_high_bit() {
        let slot = BitSlot::new(0, 31, 1);
        let mut flags = [0u32; 1];
        slot.set(&mut flags, 1);
        assert_eq!(flags[0], 0x8000_0000);
        assert_eq!(slot.get(&flags), 1);
    }

    #[test]
    #[should_panic(expected = "slot width must be > 0")]
    fn test_slot_zero_width_panics() {
        let _ = BitSlot::new(0, 0, 0);
    }

    #[test]
    #[should_panic(expected = "slot exceeds flag word")]
    fn test_slot_exceeds_word_panics() {
        let _ = BitSlot::new(0, 28, 8);
    }

    #[test]
    fn test_slot_set_preserves_other_bits() {
        let slot = BitSlot::new(0, 8, 8);
        let mut flags = [0x00FF_00FFu32];
        slot.set(&mut flags, 0x42);
        assert_eq!(flags[0], 0x00FF_42FF);
    }

    #[test]
    fn test_slot_set_clears_existing() {
        let slot = BitSlot::new(0, 0, 8);
        let mut flags = [0xFFu32];
        slot.set(&mut flags, 0x42);
        assert_eq!(flags[0], 0x42);
    }

    #[test]
    fn test_slot_touches_only_its_word() {
        let slot = BitSlot::new(1, 3, 5);
        let mut flags = [u32::MAX, 0, u32::MAX];
        slot.set(&mut flags, 0b10101);
        assert_eq!(flags[0], u32::MAX);
        assert_eq!(flags[1], 0b10101 << 3);
        assert_eq!(flags[2], u32::MAX);
    }

    #[test]
    fn test_slot_overlaps() {
        let a = BitSlot::new(0, 0, 4);
        let b = BitSlot::new(0, 4, 4);
        let c = BitSlot::new(0, 3, 2);
        let d = BitSlot::new(1, 0, 4);
        assert!(!a.overlaps(b));
        assert!(a.overlaps(c));
        assert!(b.overlaps(c));
        assert!(!a.overlaps(d));
    }
}
