//! Enumerated values backed by an ordinal.

use std::sync::Arc;

use gravel_common::types::{FLAG_WORD_BITS, FlagWord};
use gravel_common::utils::error::{Error, Result};
use gravel_common::utils::hash::{OrderedSet, ordered_set_with_capacity};

use super::descriptor::Descriptor;
use super::int::IntEncodedValue;

/// A label from a fixed, caller-ordered list.
///
/// Each label's ordinal is its position in the registration list and is
/// stored as a bounded integer just wide enough for the largest ordinal.
/// An untouched range therefore reads as the first label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEncodedValue {
    int: IntEncodedValue,
    labels: Arc<OrderedSet<Arc<str>>>,
}

impl EnumEncodedValue {
    pub(crate) fn new<I, L>(name: Arc<str>, labels: I, two_directions: bool) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
        L: Into<Arc<str>>,
    {
        let labels = labels.into_iter();
        let mut set: OrderedSet<Arc<str>> = ordered_set_with_capacity(labels.size_hint().0);
        for label in labels {
            let label: Arc<str> = label.into();
            if !set.insert(label.clone()) {
                return Err(Error::InvalidLabels {
                    name,
                    reason: format!("label '{label}' repeated"),
                });
            }
        }
        if set.is_empty() {
            return Err(Error::InvalidLabels {
                name,
                reason: "no labels".to_string(),
            });
        }

        let bits = bits_for_ordinal(set.len() - 1);
        Ok(Self {
            int: IntEncodedValue::new(name, bits, two_directions)?,
            labels: Arc::new(set),
        })
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

    /// Number of registered labels.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.labels.len()
    }

    /// Labels in ordinal order.
    pub fn labels(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.labels.iter().map(|label| &**label)
    }

    /// Ordinal of `label`, if registered.
    #[must_use]
    pub fn ordinal_of(&self, label: &str) -> Option<u32> {
        self.labels.get_index_of(label).map(|i| i as u32)
    }

    /// Reads the raw ordinal for the given direction.
    #[inline]
    #[must_use]
    pub fn get_ordinal(&self, reverse: bool, flags: &[FlagWord]) -> u32 {
        self.int.get_int(reverse, flags)
    }

    /// Stores a raw ordinal for the given direction.
    ///
    /// Fails with `OutOfRange` unless `ordinal < cardinality()`.
    pub fn set_ordinal(&self, reverse: bool, flags: &mut [FlagWord], ordinal: u32) -> Result<()> {
        if ordinal as usize >= self.labels.len() {
            return Err(Error::OutOfRange {
                name: self.int.descriptor().name_arc().clone(),
                value: f64::from(ordinal),
                max: (self.labels.len() - 1) as f64,
            });
        }
        self.int.set_int(reverse, flags, ordinal)
    }

    /// Reads the label for the given direction.
    ///
    /// Fails with `UnknownOrdinal` if storage holds an ordinal with no label,
    /// which means the flags were written with a different schema.
    #[inline]
    pub fn get_enum(&self, reverse: bool, flags: &[FlagWord]) -> Result<&str> {
        let ordinal = self.get_ordinal(reverse, flags);
        match self.labels.get_index(ordinal as usize) {
            Some(label) => Ok(&**label),
            None => Err(Error::UnknownOrdinal {
                name: self.int.descriptor().name_arc().clone(),
                ordinal,
                cardinality: self.labels.len(),
            }),
        }
    }

    /// Stores `label` for the given direction.
    ///
    /// Fails with `UnknownLabel` if the label was not registered.
    #[inline]
    pub fn set_enum(&self, reverse: bool, flags: &mut [FlagWord], label: &str) -> Result<()> {
        let ordinal = self.ordinal_of(label).ok_or_else(|| Error::UnknownLabel {
            name: self.int.descriptor().name_arc().clone(),
            label: label.to_string(),
        })?;
        self.int.set_int(reverse, flags, ordinal)
    }
}

/// Smallest width able to hold `max_ordinal`, at least one bit.
fn bits_for_ordinal(max_ordinal: usize) -> u32 {
    let needed = usize::BITS - max_ordinal.leading_zeros();
    // Wider than a word is rejected by the descriptor.
    needed.clamp(1, FLAG_WORD_BITS + 1)
}
