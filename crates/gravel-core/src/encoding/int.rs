//! Bounded unsigned integer values.

use std::sync::Arc;

use gravel_common::types::FlagWord;
use gravel_common::utils::error::{Error, Result};

use super::descriptor::Descriptor;

/// An unsigned integer stored in a fixed number of bits.
///
/// The raw bits are the value itself, so the domain is `0..=2^bits - 1`
/// and an untouched range reads as 0. A value with a different logical
/// default has to be mapped by the caller after reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntEncodedValue {
    desc: Descriptor,
}

impl IntEncodedValue {
    pub(crate) fn new(name: Arc<str>, bits: u32, two_directions: bool) -> Result<Self> {
        Ok(Self {
            desc: Descriptor::new(name, bits, two_directions)?,
        })
    }

    /// Placement and metadata.
    #[must_use]
    pub fn descriptor(&self) -> &Descriptor {
        &self.desc
    }

    pub(crate) fn descriptor_mut(&mut self) -> &mut Descriptor {
        &mut self.desc
    }

    /// Attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.desc.name()
    }

    /// Width of one direction in bits.
    #[must_use]
    pub fn bits(&self) -> u32 {
        self.desc.bits()
    }

    /// Whether the value differs by traversal direction.
    #[must_use]
    pub fn is_two_directions(&self) -> bool {
        self.desc.is_two_directions()
    }

    /// Largest storable value.
    #[inline]
    #[must_use]
    pub fn max_int(&self) -> u32 {
        self.desc.slot(false).max_value()
    }

    /// Reads the value for the given direction.
    #[inline]
    #[must_use]
    pub fn get_int(&self, reverse: bool, flags: &[FlagWord]) -> u32 {
        self.desc.slot(reverse).get(flags)
    }

    /// Stores `value` for the given direction.
    ///
    /// Fails with `OutOfRange` if `value` exceeds [`max_int`](Self::max_int);
    /// storage is left unchanged in that case.
    #[inline]
    pub fn set_int(&self, reverse: bool, flags: &mut [FlagWord], value: u32) -> Result<()> {
        let slot = self.desc.slot(reverse);
        if value > slot.max_value() {
            return Err(self.out_of_range(value));
        }
        slot.set(flags, value);
        Ok(())
    }

    #[cold]
    fn out_of_range(&self, value: u32) -> Error {
        Error::OutOfRange {
            name: self.desc.name_arc().clone(),
            value: f64::from(value),
            max: f64::from(self.max_int()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(bits: u32, two_directions: bool, word: usize, shift: u32) -> IntEncodedValue {
        let mut value = IntEncodedValue::new("speed".into(), bits, two_directions).unwrap();
        value.descriptor_mut().place(word, shift).unwrap();
        value
    }

    #[test]
    fn test_int_default_is_zero() {
        let speed = placed(5, true, 0, 0);
        let flags = [0u32; 1];
        assert_eq!(speed.get_int(false, &flags), 0);
        assert_eq!(speed.get_int(true, &flags), 0);
    }

    #[test]
    fn test_int_set_get() {
        let speed = placed(5, false, 0, 1);
        let mut flags = [0u32; 1];

        speed.set_int(false, &mut flags, 20).unwrap();
        assert_eq!(speed.get_int(false, &flags), 20);
        assert_eq!(flags[0], 20 << 1);
    }

    #[test]
    fn test_int_max_value_accepted() {
        let speed = placed(5, false, 0, 0);
        let mut flags = [0u32; 1];
        assert_eq!(speed.max_int(), 31);

        speed.set_int(false, &mut flags, 31).unwrap();
        assert_eq!(speed.get_int(false, &flags), 31);
    }

    #[test]
    fn test_int_overflow_rejected() {
        let speed = placed(5, false, 0, 0);
        let mut flags = [7u32; 1];

        let err = speed.set_int(false, &mut flags, 32).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfRange {
                name: "speed".into(),
                value: 32.0,
                max: 31.0,
            }
        );
        assert_eq!(flags[0], 7);
    }

    #[test]
    fn test_int_direction_ignored_for_one_direction() {
        let speed = placed(5, false, 0, 0);
        let mut flags = [0u32; 1];

        speed.set_int(false, &mut flags, 12).unwrap();
        assert_eq!(speed.get_int(true, &flags), 12);

        speed.set_int(true, &mut flags, 9).unwrap();
        assert_eq!(speed.get_int(false, &flags), 9);
    }

    #[test]
    fn test_int_two_directions() {
        let speed = placed(5, true, 0, 0);
        let mut flags = [0u32; 1];

        speed.set_int(false, &mut flags, 10).unwrap();
        speed.set_int(true, &mut flags, 20).unwrap();

        assert_eq!(speed.get_int(false, &flags), 10);
        assert_eq!(speed.get_int(true, &flags), 20);
        assert_eq!(flags[0], 10 | (20 << 5));
    }

    #[test]
    fn test_int_full_word() {
        let id = placed(32, false, 1, 0);
        let mut flags = [0u32; 2];

        id.set_int(false, &mut flags, u32::MAX).unwrap();
        assert_eq!(id.get_int(false, &flags), u32::MAX);
        assert_eq!(flags[0], 0);
    }
}
