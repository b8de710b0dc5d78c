//! Encoded values: typed edge attributes packed into flag words.
//!
//! Each attribute owns a fixed bit range inside one [`FlagWord`] of an
//! edge's flag storage. Attributes are registered with an
//! [`EncodedValueBuilder`], which assigns the ranges, and are looked up by
//! name through the finalized [`EncodedValueLookup`].
//!
//! | Kind | Codec | Stored as |
//! |------|-------|-----------|
//! | Boolean | [`BooleanEncodedValue`] | 1 bit |
//! | Bounded integer | [`IntEncodedValue`] | `bits` bits |
//! | Enum | [`EnumEncodedValue`] | ordinal into the label list |
//! | Decimal | [`DecimalEncodedValue`] | multiples of a scale factor |
//!
//! Every attribute may be direction-dependent, in which case the forward
//! and backward ranges sit next to each other in the same word.
//!
//! [`FlagWord`]: gravel_common::types::FlagWord

mod boolean;
mod builder;
mod config;
mod decimal;
mod descriptor;
mod enumerated;
mod int;
mod lookup;
mod slot;
mod value;

pub use boolean::BooleanEncodedValue;
pub use builder::EncodedValueBuilder;
pub use config::{BuilderConfig, EncodedValueSpec, SchemaConfig};
pub use decimal::DecimalEncodedValue;
pub use descriptor::Descriptor;
pub use enumerated::EnumEncodedValue;
pub use int::IntEncodedValue;
pub use lookup::{EncodedValueLookup, FieldLayout};
pub use slot::BitSlot;
pub use value::{EncodedValue, FlagValue};
