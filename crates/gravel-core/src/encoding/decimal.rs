//! Fixed-point decimal values.

use std::sync::Arc;

use gravel_common::types::FlagWord;
use gravel_common::utils::error::{Error, Result};

use super::descriptor::Descriptor;
use super::int::IntEncodedValue;

/// A non-negative decimal stored as a multiple of a scale factor.
///
/// The logical value is `raw * factor`. Writes round `value / factor`
/// half-up to the nearest raw step, so with a factor of 5 a speed of 52.5
/// is stored as raw 11 and read back as 55.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalEncodedValue {
    int: IntEncodedValue,
    factor: f64,
}

impl DecimalEncodedValue {
    pub(crate) fn new(
        name: Arc<str>,
        bits: u32,
        factor: f64,
        two_directions: bool,
    ) -> Result<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(Error::InvalidScaleFactor { name, factor });
        }
        let int = IntEncodedValue::new(name, bits, two_directions)?;
        // Every raw step must decode to a finite value.
        if !(f64::from(int.max_int()) * factor).is_finite() {
            return Err(Error::InvalidScaleFactor {
                name: int.descriptor().name_arc().clone(),
                factor,
            });
        }
        Ok(Self { int, factor })
    }

    /// Placement and metadata.
    #[must_use]
    pub fn descriptor(&self) -> &Descriptor {
        self.int.descriptor()
    }

    pub(crate) fn descriptor_mut(&mut self) -> &mut Descriptor {
        self.int.descriptor_mut()
    }

    /// Attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.int.name()
    }

    /// Width of one direction in bits.
    #[must_use]
    pub fn bits(&self) -> u32 {
        self.int.bits()
    }

    /// Whether the value differs by traversal direction.
    #[must_use]
    pub fn is_two_directions(&self) -> bool {
        self.int.is_two_directions()
    }

    /// Size of one raw step.
    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Largest storable value.
    #[must_use]
    pub fn max_decimal(&self) -> f64 {
        f64::from(self.int.max_int()) * self.factor
    }

    /// Reads the value for the given direction.
    #[inline]
    #[must_use]
    pub fn get_decimal(&self, reverse: bool, flags: &[FlagWord]) -> f64 {
        f64::from(self.int.get_int(reverse, flags)) * self.factor
    }

    /// Stores `value` for the given direction, rounded half-up to the
    /// nearest multiple of the factor.
    ///
    /// Fails with `OutOfRange` for negative or non-finite values and for
    /// values whose rounded raw step exceeds the bit width.
    #[inline]
    pub fn set_decimal(&self, reverse: bool, flags: &mut [FlagWord], value: f64) -> Result<()> {
        let max = self.int.max_int();
        let raw = (value / self.factor + 0.5).floor();
        if !value.is_finite() || value < 0.0 || raw > f64::from(max) {
            return Err(Error::OutOfRange {
                name: self.int.descriptor().name_arc().clone(),
                value,
                max: self.max_decimal(),
            });
        }
        self.int.set_int(reverse, flags, raw as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(bits: u32, factor: f64, two_directions: bool) -> DecimalEncodedValue {
        let mut value =
            DecimalEncodedValue::new("max_speed".into(), bits, factor, two_directions).unwrap();
        value.descriptor_mut().place(0, 0).unwrap();
        value
    }

    #[test]
    fn test_decimal_default_is_zero() {
        let speed = placed(5, 5.0, true);
        let flags = [0u32; 1];
        assert_eq!(speed.get_decimal(false, &flags), 0.0);
        assert_eq!(speed.get_decimal(true, &flags), 0.0);
    }

    #[test]
    fn test_decimal_exact_multiple() {
        let speed = placed(5, 5.0, false);
        let mut flags = [0u32; 1];

        speed.set_decimal(false, &mut flags, 50.0).unwrap();
        assert_eq!(speed.get_decimal(false, &flags), 50.0);
        assert_eq!(flags[0], 10);
    }

    #[test]
    fn test_decimal_rounds_half_up() {
        let speed = placed(5, 5.0, false);
        let mut flags = [0u32; 1];

        speed.set_decimal(false, &mut flags, 52.5).unwrap();
        assert_eq!(speed.get_decimal(false, &flags), 55.0);

        speed.set_decimal(false, &mut flags, 52.4).unwrap();
        assert_eq!(speed.get_decimal(false, &flags), 50.0);

        speed.set_decimal(false, &mut flags, 2.5).unwrap();
        assert_eq!(speed.get_decimal(false, &flags), 5.0);
    }

    #[test]
    fn test_decimal_fractional_factor() {
        let grade = placed(8, 0.1, false);
        let mut flags = [0u32; 1];

        grade.set_decimal(false, &mut flags, 0.3).unwrap();
        assert_eq!(flags[0], 3);
        assert!((grade.get_decimal(false, &flags) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_decimal_max() {
        let speed = placed(5, 5.0, false);
        let mut flags = [0u32; 1];
        assert_eq!(speed.max_decimal(), 155.0);

        speed.set_decimal(false, &mut flags, 155.0).unwrap();
        assert_eq!(speed.get_decimal(false, &flags), 155.0);

        // Rounds down onto the largest step.
        speed.set_decimal(false, &mut flags, 157.4).unwrap();
        assert_eq!(speed.get_decimal(false, &flags), 155.0);
    }

    #[test]
    fn test_decimal_out_of_range() {
        let speed = placed(5, 5.0, false);
        let mut flags = [0u32; 1];

        for value in [157.5, 1000.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    speed.set_decimal(false, &mut flags, value),
                    Err(Error::OutOfRange { .. })
                ),
                "{value} should be rejected"
            );
        }
        assert_eq!(flags[0], 0);
    }

    #[test]
    fn test_decimal_two_directions() {
        let speed = placed(5, 5.0, true);
        let mut flags = [0u32; 1];

        speed.set_decimal(false, &mut flags, 30.0).unwrap();
        speed.set_decimal(true, &mut flags, 90.0).unwrap();
        assert_eq!(speed.get_decimal(false, &flags), 30.0);
        assert_eq!(speed.get_decimal(true, &flags), 90.0);
    }

    #[test]
    fn test_decimal_rejects_factor_overflowing_width() {
        assert_eq!(
            DecimalEncodedValue::new("max_speed".into(), 32, 1e300, false).unwrap_err(),
            Error::InvalidScaleFactor {
                name: "max_speed".into(),
                factor: 1e300,
            }
        );

        // Narrow enough that the top step stays finite.
        let wide = placed(8, 1e300, false);
        let mut flags = [u32::MAX];
        let top = wide.get_decimal(false, &flags);
        assert!(top.is_finite());
        assert_eq!(top, wide.max_decimal());

        flags[0] = 0;
        wide.set_decimal(false, &mut flags, top).unwrap();
        assert_eq!(wide.get_decimal(false, &flags), top);
    }

    #[test]
    fn test_decimal_rejects_bad_factor() {
        for factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                DecimalEncodedValue::new("max_speed".into(), 5, factor, false),
                Err(Error::InvalidScaleFactor { .. })
            ));
        }
    }
}
