//! The finalized, read-only schema.

use std::sync::Arc;

use serde::Serialize;

use gravel_common::utils::error::{Error, Result};
use gravel_common::utils::hash::OrderedMap;

use super::boolean::BooleanEncodedValue;
use super::decimal::DecimalEncodedValue;
use super::enumerated::EnumEncodedValue;
use super::int::IntEncodedValue;
use super::value::EncodedValue;
use crate::storage::{EdgeFlags, FlagArray};

/// Immutable map from attribute name to encoded value.
///
/// Produced once by [`EncodedValueBuilder::build`](super::EncodedValueBuilder::build).
/// Cloning is cheap and every clone shares the same schema, so one lookup
/// can be handed to any number of routing threads.
#[derive(Debug, Clone)]
pub struct EncodedValueLookup {
    inner: Arc<LookupInner>,
}

#[derive(Debug)]
struct LookupInner {
    values: OrderedMap<Arc<str>, EncodedValue>,
    word_count: usize,
}

/// Position of one attribute in flag storage, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldLayout {
    /// Attribute name.
    pub name: Arc<str>,
    /// Value kind (`boolean`, `int`, `enum`, `decimal`).
    pub kind: &'static str,
    /// Flag word index.
    pub word: usize,
    /// Bit offset of the forward range.
    pub shift: u32,
    /// Width of one direction in bits.
    pub bits: u32,
    /// Whether a backward range follows the forward one.
    pub two_directions: bool,
}

impl EncodedValueLookup {
    pub(crate) fn new(values: OrderedMap<Arc<str>, EncodedValue>, word_count: usize) -> Self {
        Self {
            inner: Arc::new(LookupInner { values, word_count }),
        }
    }

    /// Number of flag words each edge needs.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.inner.word_count
    }

    /// Number of registered attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.values.len()
    }

    /// Returns true if no attributes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.values.is_empty()
    }

    /// Returns true if an attribute named `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.inner.values.contains_key(name)
    }

    /// Iterates over all attributes in registration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &EncodedValue> + '_ {
        self.inner.values.values()
    }

    /// Gets an attribute by name.
    ///
    /// Fails with `UnknownName` if it was never registered.
    pub fn get_by_name(&self, name: &str) -> Result<&EncodedValue> {
        self.inner
            .values
            .get(name)
            .ok_or_else(|| Error::UnknownName(name.into()))
    }

    /// Gets a boolean attribute by name.
    pub fn get_bool(&self, name: &str) -> Result<&BooleanEncodedValue> {
        match self.get_by_name(name)? {
            EncodedValue::Boolean(v) => Ok(v),
            other => Err(other.mismatch("boolean")),
        }
    }

    /// Gets an integer attribute by name.
    pub fn get_int(&self, name: &str) -> Result<&IntEncodedValue> {
        match self.get_by_name(name)? {
            EncodedValue::Int(v) => Ok(v),
            other => Err(other.mismatch("int")),
        }
    }

    /// Gets an enum attribute by name.
    pub fn get_enum(&self, name: &str) -> Result<&EnumEncodedValue> {
        match self.get_by_name(name)? {
            EncodedValue::Enum(v) => Ok(v),
            other => Err(other.mismatch("enum")),
        }
    }

    /// Gets a decimal attribute by name.
    pub fn get_decimal(&self, name: &str) -> Result<&DecimalEncodedValue> {
        match self.get_by_name(name)? {
            EncodedValue::Decimal(v) => Ok(v),
            other => Err(other.mismatch("decimal")),
        }
    }

    /// Allocates zeroed flags sized for this schema.
    #[must_use]
    pub fn new_flags(&self) -> EdgeFlags {
        EdgeFlags::new(self.inner.word_count)
    }

    /// Allocates bulk flag storage sized for this schema.
    #[must_use]
    pub fn new_flag_array(&self, edge_capacity: usize) -> FlagArray {
        FlagArray::with_capacity(self.inner.word_count, edge_capacity)
    }

    /// Describes where every attribute lives.
    #[must_use]
    pub fn layout(&self) -> Vec<FieldLayout> {
        self.iter()
            .map(|value| {
                let desc = value.descriptor();
                FieldLayout {
                    name: desc.name_arc().clone(),
                    kind: value.kind(),
                    word: desc.word(),
                    shift: desc.shift(),
                    bits: desc.bits(),
                    two_directions: desc.is_two_directions(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{EncodedValueBuilder, FlagValue};
    use gravel_common::types::EdgeId;

    fn road_lookup() -> EncodedValueLookup {
        let mut builder = EncodedValueBuilder::new();
        builder.register_directed_boolean("access").unwrap();
        builder.register_int("lanes", 3, false).unwrap();
        builder
            .register_enum("surface", ["paved", "gravel", "dirt"], false)
            .unwrap();
        builder.register_decimal("max_speed", 5, 5.0, true).unwrap();
        builder.build().0
    }

    #[test]
    fn test_get_by_name() {
        let lookup = road_lookup();
        assert_eq!(lookup.len(), 4);
        assert!(!lookup.is_empty());
        assert!(lookup.contains("lanes"));
        assert!(!lookup.contains("width"));
        assert_eq!(lookup.get_by_name("surface").unwrap().kind(), "enum");
    }

    #[test]
    fn test_unknown_name() {
        let lookup = road_lookup();
        assert_eq!(
            lookup.get_by_name("width").unwrap_err(),
            Error::UnknownName("width".into())
        );
        assert!(matches!(lookup.get_int("width"), Err(Error::UnknownName(_))));
    }

    #[test]
    fn test_typed_getters_mismatch() {
        let lookup = road_lookup();
        assert!(lookup.get_bool("access").is_ok());
        assert!(lookup.get_enum("surface").is_ok());
        assert!(lookup.get_decimal("max_speed").is_ok());

        let err = lookup.get_decimal("lanes").unwrap_err();
        assert_eq!(
            err,
            Error::TypeMismatch {
                name: "lanes".into(),
                expected: "decimal",
                found: "int",
            }
        );
    }

    #[test]
    fn test_iteration_order() {
        let lookup = road_lookup();
        let names: Vec<&str> = lookup.iter().map(EncodedValue::name).collect();
        assert_eq!(names, ["access", "lanes", "surface", "max_speed"]);
        assert_eq!(lookup.iter().len(), 4);
    }

    #[test]
    fn test_layout() {
        let lookup = road_lookup();
        let layout = lookup.layout();
        assert_eq!(layout.len(), 4);

        assert_eq!(&*layout[0].name, "access");
        assert_eq!((layout[0].word, layout[0].shift, layout[0].bits), (0, 0, 1));
        assert!(layout[0].two_directions);

        // access takes 2 bits, lanes 3
        assert_eq!(layout[2].kind, "enum");
        assert_eq!((layout[2].shift, layout[2].bits), (5, 2));

        let json = serde_json::to_value(&layout[1]).unwrap();
        assert_eq!(json["name"], "lanes");
        assert_eq!(json["bits"], 3);
    }

    #[test]
    fn test_flag_array_shared_schema() {
        let lookup = road_lookup();
        let lanes = lookup.get_int("lanes").unwrap();
        let mut array = lookup.new_flag_array(8);
        assert_eq!(array.words_per_edge(), lookup.word_count());

        let a = array.push_edge();
        let b = array.push_edge();
        lanes.set_int(false, array.slot_mut(b), 4).unwrap();

        assert_eq!(lanes.get_int(false, array.slot(a)), 0);
        assert_eq!(lanes.get_int(false, array.slot(b)), 4);
        assert!(array.get(EdgeId::new(2)).is_none());
    }

    #[test]
    fn test_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EncodedValueLookup>();

        let lookup = road_lookup();
        let handles: Vec<_> = (0..4u32)
            .map(|i| {
                let lookup = lookup.clone();
                std::thread::spawn(move || {
                    let mut flags = lookup.new_flags();
                    let max_speed = lookup.get_by_name("max_speed").unwrap();
                    max_speed
                        .write(false, &mut flags, FlagValue::Decimal(f64::from(i) * 10.0))
                        .unwrap();
                    max_speed.read(false, &flags).unwrap().as_decimal()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), Some(i as f64 * 10.0));
        }
    }
}
