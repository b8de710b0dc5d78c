//! Schema registration and bit allocation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use gravel_common::types::FLAG_WORD_BITS;
use gravel_common::utils::error::{Error, Result};
use gravel_common::utils::hash::{OrderedMap, ordered_map_with_capacity};

use super::boolean::BooleanEncodedValue;
use super::config::BuilderConfig;
use super::decimal::DecimalEncodedValue;
use super::descriptor::Descriptor;
use super::enumerated::EnumEncodedValue;
use super::int::IntEncodedValue;
use super::lookup::EncodedValueLookup;
use super::value::EncodedValue;

/// Codecs the builder can place.
trait Placeable: Clone + Into<EncodedValue> {
    fn placement_mut(&mut self) -> &mut Descriptor;
}

impl Placeable for BooleanEncodedValue {
    fn placement_mut(&mut self) -> &mut Descriptor {
        self.descriptor_mut()
    }
}

impl Placeable for IntEncodedValue {
    fn placement_mut(&mut self) -> &mut Descriptor {
        self.descriptor_mut()
    }
}

impl Placeable for EnumEncodedValue {
    fn placement_mut(&mut self) -> &mut Descriptor {
        self.descriptor_mut()
    }
}

impl Placeable for DecimalEncodedValue {
    fn placement_mut(&mut self) -> &mut Descriptor {
        self.descriptor_mut()
    }
}

/// Next free bit in flag storage.
#[derive(Debug, Clone, Copy, Default)]
struct BitCursor {
    word: usize,
    bit: u32,
}

impl BitCursor {
    /// Position for a value of `bits` total width. Moves to the next word
    /// when the current one has too little room left; the remainder of the
    /// current word stays unused.
    fn fit(self, bits: u32) -> (usize, u32) {
        if self.bit + bits > FLAG_WORD_BITS {
            (self.word + 1, 0)
        } else {
            (self.word, self.bit)
        }
    }
}

enum State {
    Open,
    Finalized(EncodedValueLookup),
}

/// Registers encoded values and assigns each a non-overlapping bit range.
///
/// Allocation is first fit within the current word: values are placed in
/// registration order, and a value that does not fit in what is left of the
/// current word starts a new one. A value never spans two words, and the two
/// directions of a direction-dependent value are always adjacent in one word.
///
/// # Example
///
/// ```
/// use gravel_core::encoding::EncodedValueBuilder;
///
/// let mut builder = EncodedValueBuilder::new();
/// let access = builder.register_boolean("access_forward").unwrap();
/// let speed = builder.register_int("speed", 5, false).unwrap();
/// let (lookup, words) = builder.build();
/// assert_eq!(words, 1);
///
/// let mut flags = lookup.new_flags();
/// speed.set_int(false, &mut flags, 20).unwrap();
/// access.set_bool(false, &mut flags, true);
/// assert_eq!(speed.get_int(false, &flags), 20);
/// assert!(access.get_bool(false, &flags));
/// ```
pub struct EncodedValueBuilder {
    config: BuilderConfig,
    values: OrderedMap<Arc<str>, EncodedValue>,
    cursor: BitCursor,
    state: State,
}

impl EncodedValueBuilder {
    /// Creates a builder with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    /// Creates a builder with custom configuration.
    #[must_use]
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            values: ordered_map_with_capacity(config.initial_capacity),
            cursor: BitCursor::default(),
            state: State::Open,
            config,
        }
    }

    /// Returns true once [`build`](Self::build) has been called.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        matches!(self.state, State::Finalized(_))
    }

    /// Number of registered attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing is registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Flag words needed by the attributes registered so far.
    #[must_use]
    pub fn word_count(&self) -> usize {
        if self.values.is_empty() {
            0
        } else {
            self.cursor.word + 1
        }
    }

    /// Registers a one-bit boolean shared by both directions.
    pub fn register_boolean(&mut self, name: impl Into<Arc<str>>) -> Result<BooleanEncodedValue> {
        self.register(name.into(), |name| BooleanEncodedValue::new(name, false))
    }

    /// Registers a boolean with one bit per direction.
    pub fn register_directed_boolean(
        &mut self,
        name: impl Into<Arc<str>>,
    ) -> Result<BooleanEncodedValue> {
        self.register(name.into(), |name| BooleanEncodedValue::new(name, true))
    }

    /// Registers an unsigned integer of `bits` bits per direction.
    pub fn register_int(
        &mut self,
        name: impl Into<Arc<str>>,
        bits: u32,
        two_directions: bool,
    ) -> Result<IntEncodedValue> {
        self.register(name.into(), |name| {
            IntEncodedValue::new(name, bits, two_directions)
        })
    }

    /// Registers an enum over `labels`; ordinals follow the given order.
    pub fn register_enum<I, L>(
        &mut self,
        name: impl Into<Arc<str>>,
        labels: I,
        two_directions: bool,
    ) -> Result<EnumEncodedValue>
    where
        I: IntoIterator<Item = L>,
        L: Into<Arc<str>>,
    {
        self.register(name.into(), |name| {
            EnumEncodedValue::new(name, labels, two_directions)
        })
    }

    /// Registers a decimal stored as multiples of `factor` in `bits` bits.
    pub fn register_decimal(
        &mut self,
        name: impl Into<Arc<str>>,
        bits: u32,
        factor: f64,
        two_directions: bool,
    ) -> Result<DecimalEncodedValue> {
        self.register(name.into(), |name| {
            DecimalEncodedValue::new(name, bits, factor, two_directions)
        })
    }

    /// Finalizes the schema.
    ///
    /// Returns the lookup and the number of flag words each edge needs.
    /// Further registrations fail with `SchemaFinalized`; calling `build`
    /// again returns the same lookup.
    pub fn build(&mut self) -> (EncodedValueLookup, usize) {
        if let State::Finalized(lookup) = &self.state {
            return (lookup.clone(), lookup.word_count());
        }

        let words = self.word_count();
        let lookup = EncodedValueLookup::new(self.values.clone(), words);
        info!(values = lookup.len(), words, "encoded value schema finalized");

        self.state = State::Finalized(lookup.clone());
        (lookup, words)
    }

    fn register<T: Placeable>(
        &mut self,
        name: Arc<str>,
        create: impl FnOnce(Arc<str>) -> Result<T>,
    ) -> Result<T> {
        let result = self.try_register(name.clone(), create);
        if let Err(e) = &result {
            warn!(name = %name, error = %e, "rejected encoded value");
        }
        result
    }

    fn try_register<T: Placeable>(
        &mut self,
        name: Arc<str>,
        create: impl FnOnce(Arc<str>) -> Result<T>,
    ) -> Result<T> {
        if self.is_finalized() {
            return Err(Error::SchemaFinalized(name));
        }
        if self.values.contains_key(&*name) {
            return Err(Error::DuplicateName(name));
        }

        let mut value = create(name.clone())?;
        let desc = value.placement_mut();
        let total = desc.total_bits();
        let (word, shift) = self.cursor.fit(total);
        if let Some(limit) = self.config.max_words {
            if word >= limit {
                return Err(Error::WordLimit { name, limit });
            }
        }

        desc.place(word, shift)?;
        debug!(
            name = %name,
            word,
            shift,
            bits = desc.bits(),
            two_directions = desc.is_two_directions(),
            "placed encoded value"
        );

        self.cursor = BitCursor {
            word,
            bit: shift + total,
        };
        self.values.insert(name, value.clone().into());
        Ok(value)
    }
}

impl Default for EncodedValueBuilder {
    fn default() -> Self {
        Self::new()
    }
}
