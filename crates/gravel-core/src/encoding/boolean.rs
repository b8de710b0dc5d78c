//! Single-bit boolean values.

use std::sync::Arc;

use gravel_common::types::FlagWord;
use gravel_common::utils::error::Result;

use super::descriptor::Descriptor;

/// A boolean stored in one bit per direction.
///
/// An untouched bit reads as `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanEncodedValue {
    desc: Descriptor,
}

impl BooleanEncodedValue {
    pub(crate) fn new(name: Arc<str>, two_directions: bool) -> Result<Self> {
        Ok(Self {
            desc: Descriptor::new(name, 1, two_directions)?,
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

    /// Whether the value differs by traversal direction.
    #[must_use]
    pub fn is_two_directions(&self) -> bool {
        self.desc.is_two_directions()
    }

    /// Reads the flag for the given direction.
    #[inline]
    #[must_use]
    pub fn get_bool(&self, reverse: bool, flags: &[FlagWord]) -> bool {
        self.desc.slot(reverse).get(flags) != 0
    }

    /// Stores the flag for the given direction.
    #[inline]
    pub fn set_bool(&self, reverse: bool, flags: &mut [FlagWord], value: bool) {
        self.desc.slot(reverse).set(flags, FlagWord::from(value));
    }
}
