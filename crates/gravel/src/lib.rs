//! # Gravel
//!
//! Typed edge attributes for routing graphs, bit-packed into a few machine
//! words per edge.
//!
//! Start with [`EncodedValueBuilder`]: register every attribute the graph
//! needs, call `build`, and you get an [`EncodedValueLookup`] plus the
//! number of flag words each edge takes. From then on the schema is fixed
//! and can be shared freely between threads.
//!
//! ## Attribute Kinds
//!
//! | Kind | Register with | Notes |
//! | ---- | ------------- | ----- |
//! | Boolean | `register_boolean` | One bit, or one per direction |
//! | Integer | `register_int` | `0..=2^bits - 1` |
//! | Enum | `register_enum` | First label is the default |
//! | Decimal | `register_decimal` | Rounded to multiples of a factor |
//!
//! ## Quick Start
//!
//! ```rust
//! use gravel::EncodedValueBuilder;
//!
//! let mut builder = EncodedValueBuilder::new();
//! let access = builder.register_directed_boolean("access")?;
//! let max_speed = builder.register_decimal("max_speed", 5, 5.0, true)?;
//! let road_class = builder.register_enum("road_class", ["other", "primary", "residential"], false)?;
//! let (lookup, words) = builder.build();
//! assert_eq!(words, 1);
//!
//! let mut flags = lookup.new_flags();
//! access.set_bool(false, &mut flags, true);
//! max_speed.set_decimal(false, &mut flags, 52.5)?;
//! road_class.set_enum(false, &mut flags, "primary")?;
//!
//! assert!(access.get_bool(false, &flags));
//! assert!(!access.get_bool(true, &flags));
//! assert_eq!(max_speed.get_decimal(false, &flags), 55.0);
//! assert_eq!(road_class.get_enum(false, &flags)?, "primary");
//! # Ok::<(), gravel::Error>(())
//! ```
//!
//! Schemas can also be declared in JSON; see [`SchemaConfig`].

// Re-export the schema API
pub use gravel_core::encoding::{
    BitSlot, BooleanEncodedValue, BuilderConfig, DecimalEncodedValue, Descriptor, EncodedValue,
    EncodedValueBuilder, EncodedValueLookup, EncodedValueSpec, EnumEncodedValue, FieldLayout,
    FlagValue, IntEncodedValue, SchemaConfig,
};

// Re-export flag storage
pub use gravel_core::storage::{EdgeFlags, FlagArray};

// Re-export common types - you'll need these for IDs and error handling
pub use gravel_common::types::{EdgeId, FLAG_WORD_BITS, FlagWord};
pub use gravel_common::utils::error::{Error, Result};
