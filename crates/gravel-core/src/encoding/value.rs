//! The closed set of encoded value kinds behind one read/write contract.

use std::fmt;

use gravel_common::types::FlagWord;
use gravel_common::utils::error::{Error, Result};

use super::boolean::BooleanEncodedValue;
use super::decimal::DecimalEncodedValue;
use super::descriptor::Descriptor;
use super::enumerated::EnumEncodedValue;
use super::int::IntEncodedValue;

/// A decoded attribute value.
///
/// Enum labels borrow from the codec that produced them, so reading never
/// allocates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlagValue<'a> {
    /// Boolean flag.
    Bool(bool),
    /// Bounded unsigned integer.
    Int(u32),
    /// Enum label.
    Enum(&'a str),
    /// Fixed-point decimal.
    Decimal(f64),
}

impl<'a> FlagValue<'a> {
    /// Name of the value kind, matching [`EncodedValue::kind`].
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Int(_) => "int",
            Self::Enum(_) => "enum",
            Self::Decimal(_) => "decimal",
        }
    }

    /// Returns the boolean, if this is one.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, if this is one.
    #[must_use]
    pub fn as_int(&self) -> Option<u32> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the enum label, if this is one.
    #[must_use]
    pub fn as_enum(&self) -> Option<&'a str> {
        match self {
            Self::Enum(label) => Some(label),
            _ => None,
        }
    }

    /// Returns the decimal, if this is one.
    #[must_use]
    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            Self::Decimal(d) => Some(*d),
            _ => None,
        }
    }
}

impl From<bool> for FlagValue<'_> {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<u32> for FlagValue<'_> {
    fn from(i: u32) -> Self {
        Self::Int(i)
    }
}

impl<'a> From<&'a str> for FlagValue<'a> {
    fn from(label: &'a str) -> Self {
        Self::Enum(label)
    }
}

impl From<f64> for FlagValue<'_> {
    fn from(d: f64) -> Self {
        Self::Decimal(d)
    }
}

impl fmt::Display for FlagValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Enum(label) => write!(f, "{label}"),
            Self::Decimal(d) => write!(f, "{d}"),
        }
    }
}

/// An encoded value of any kind.
///
/// The set of kinds is closed; the hot path matches on the variant and
/// then does a single shift-and-mask on one flag word. Callers that know the
/// kind up front should hold the concrete codec instead.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodedValue {
    /// Single-bit flag.
    Boolean(BooleanEncodedValue),
    /// Bounded unsigned integer.
    Int(IntEncodedValue),
    /// Label from a fixed list.
    Enum(EnumEncodedValue),
    /// Fixed-point decimal.
    Decimal(DecimalEncodedValue),
}

impl EncodedValue {
    /// Placement and metadata.
    #[must_use]
    pub fn descriptor(&self) -> &Descriptor {
        match self {
            Self::Boolean(v) => v.descriptor(),
            Self::Int(v) => v.descriptor(),
            Self::Enum(v) => v.descriptor(),
            Self::Decimal(v) => v.descriptor(),
        }
    }

    pub(crate) fn descriptor_mut(&mut self) -> &mut Descriptor {
        match self {
            Self::Boolean(v) => v.descriptor_mut(),
            Self::Int(v) => v.descriptor_mut(),
            Self::Enum(v) => v.descriptor_mut(),
            Self::Decimal(v) => v.descriptor_mut(),
        }
    }

    /// Attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.descriptor().name()
    }

    /// Name of the value kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Int(_) => "int",
            Self::Enum(_) => "enum",
            Self::Decimal(_) => "decimal",
        }
    }

    /// Decodes the value for the given direction.
    ///
    /// Only enums can fail, with `UnknownOrdinal`.
    #[inline]
    pub fn read(&self, reverse: bool, flags: &[FlagWord]) -> Result<FlagValue<'_>> {
        Ok(match self {
            Self::Boolean(v) => FlagValue::Bool(v.get_bool(reverse, flags)),
            Self::Int(v) => FlagValue::Int(v.get_int(reverse, flags)),
            Self::Enum(v) => FlagValue::Enum(v.get_enum(reverse, flags)?),
            Self::Decimal(v) => FlagValue::Decimal(v.get_decimal(reverse, flags)),
        })
    }

    /// Encodes `value` for the given direction.
    ///
    /// Fails with `TypeMismatch` if `value` is of another kind, otherwise
    /// with whatever the concrete codec rejects.
    #[inline]
    pub fn write(&self, reverse: bool, flags: &mut [FlagWord], value: FlagValue<'_>) -> Result<()> {
        match (self, value) {
            (Self::Boolean(v), FlagValue::Bool(b)) => {
                v.set_bool(reverse, flags, b);
                Ok(())
            }
            (Self::Int(v), FlagValue::Int(i)) => v.set_int(reverse, flags, i),
            (Self::Enum(v), FlagValue::Enum(label)) => v.set_enum(reverse, flags, label),
            (Self::Decimal(v), FlagValue::Decimal(d)) => v.set_decimal(reverse, flags, d),
            (_, value) => Err(self.mismatch(value.kind())),
        }
    }

    #[cold]
    pub(crate) fn mismatch(&self, expected: &'static str) -> Error {
        Error::TypeMismatch {
            name: self.descriptor().name_arc().clone(),
            expected,
            found: self.kind(),
        }
    }
}

impl From<BooleanEncodedValue> for EncodedValue {
    fn from(v: BooleanEncodedValue) -> Self {
        Self::Boolean(v)
    }
}

impl From<IntEncodedValue> for EncodedValue {
    fn from(v: IntEncodedValue) -> Self {
        Self::Int(v)
    }
}

impl From<EnumEncodedValue> for EncodedValue {
    fn from(v: EnumEncodedValue) -> Self {
        Self::Enum(v)
    }
}

impl From<DecimalEncodedValue> for EncodedValue {
    fn from(v: DecimalEncodedValue) -> Self {
        Self::Decimal(v)
    }
}
