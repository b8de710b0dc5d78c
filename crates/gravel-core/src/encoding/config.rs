//! Builder settings and declarative schema configuration.

use serde::{Deserialize, Serialize};

use gravel_common::utils::error::{Error, Result};

use super::builder::EncodedValueBuilder;
use super::lookup::EncodedValueLookup;

/// Configuration for the encoded value builder.
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Upper bound on flag words per edge, if any.
    pub max_words: Option<usize>,
    /// Expected number of attributes.
    pub initial_capacity: usize,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            max_words: None,
            initial_capacity: 16,
        }
    }
}

impl BuilderConfig {
    /// Caps the flag storage width of the schema.
    #[must_use]
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = Some(max_words);
        self
    }
}

/// One attribute in a declarative schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum EncodedValueSpec {
    /// Single-bit flag.
    Boolean {
        /// Attribute name.
        name: String,
        /// Store a separate flag per direction.
        #[serde(default)]
        two_directions: bool,
    },
    /// Bounded unsigned integer.
    Int {
        /// Attribute name.
        name: String,
        /// Width of one direction in bits.
        bits: u32,
        /// Store a separate value per direction.
        #[serde(default)]
        two_directions: bool,
    },
    /// Label from a fixed list; the first label is the default.
    Enum {
        /// Attribute name.
        name: String,
        /// Labels in ordinal order.
        labels: Vec<String>,
        /// Store a separate label per direction.
        #[serde(default)]
        two_directions: bool,
    },
    /// Fixed-point decimal.
    Decimal {
        /// Attribute name.
        name: String,
        /// Width of one direction in bits.
        bits: u32,
        /// Size of one raw step.
        factor: f64,
        /// Store a separate value per direction.
        #[serde(default)]
        two_directions: bool,
    },
}

impl EncodedValueSpec {
    /// Attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Boolean { name, .. }
            | Self::Int { name, .. }
            | Self::Enum { name, .. }
            | Self::Decimal { name, .. } => name,
        }
    }

    /// Registers this attribute with `builder`.
    pub fn register(&self, builder: &mut EncodedValueBuilder) -> Result<()> {
        match self {
            Self::Boolean {
                name,
                two_directions: false,
            } => builder.register_boolean(name.as_str()).map(drop),
            Self::Boolean {
                name,
                two_directions: true,
            } => builder.register_directed_boolean(name.as_str()).map(drop),
            Self::Int {
                name,
                bits,
                two_directions,
            } => builder
                .register_int(name.as_str(), *bits, *two_directions)
                .map(drop),
            Self::Enum {
                name,
                labels,
                two_directions,
            } => builder
                .register_enum(name.as_str(), labels.iter().map(String::as_str), *two_directions)
                .map(drop),
            Self::Decimal {
                name,
                bits,
                factor,
                two_directions,
            } => builder
                .register_decimal(name.as_str(), *bits, *factor, *two_directions)
                .map(drop),
        }
    }
}

/// A complete schema as read from configuration.
///
/// ```
/// use gravel_core::encoding::SchemaConfig;
///
/// let config = SchemaConfig::from_json(r#"{
///     "encoded_values": [
///         { "type": "boolean", "name": "access", "two_directions": true },
///         { "type": "decimal", "name": "max_speed", "bits": 5, "factor": 5.0 }
///     ]
/// }"#).unwrap();
///
/// let (lookup, words) = config.build().unwrap();
/// assert_eq!(words, 1);
/// assert!(lookup.contains("max_speed"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaConfig {
    /// Upper bound on flag words per edge, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_words: Option<usize>,
    /// Attributes in registration order.
    pub encoded_values: Vec<EncodedValueSpec>,
}

impl SchemaConfig {
    /// Parses a schema from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Serializes the schema to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Registers every attribute in order and finalizes the schema.
    pub fn build(&self) -> Result<(EncodedValueLookup, usize)> {
        let config = BuilderConfig {
            max_words: self.max_words,
            initial_capacity: self.encoded_values.len(),
        };

        let mut builder = EncodedValueBuilder::with_config(config);
        for spec in &self.encoded_values {
            spec.register(&mut builder)?;
        }
        Ok(builder.build())
    }
}
