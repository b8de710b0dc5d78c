//! Error types for Gravel.
//!
//! Errors split into two groups. Schema errors (`InvalidWidth`,
//! `DuplicateName`, `SchemaFinalized`, `WordLimit`, `AlreadyPlaced`,
//! `InvalidLabels`, `InvalidScaleFactor`, `Config`) are raised while a schema is being built
//! and mean the attribute configuration is wrong. Access errors
//! (`OutOfRange`, `UnknownOrdinal`, `UnknownLabel`, `UnknownName`,
//! `TypeMismatch`) are raised per call and are for the immediate caller to
//! handle.

use std::sync::Arc;

use thiserror::Error;

/// Result type alias for Gravel operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by encoded-value registration and access.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Requested bit width is zero, or the total width (doubled for
    /// direction-dependent values) does not fit one flag word.
    #[error("encoded value '{name}': invalid width of {bits} bits")]
    InvalidWidth {
        /// Attribute name.
        name: Arc<str>,
        /// Total number of bits requested.
        bits: u32,
    },

    /// An attribute with this name is already registered.
    #[error("encoded value '{0}' is already registered")]
    DuplicateName(Arc<str>),

    /// Registration attempted after the schema was built.
    #[error("schema is finalized, cannot register '{0}'")]
    SchemaFinalized(Arc<str>),

    /// The schema would need more flag words than the builder allows.
    #[error("encoded value '{name}' does not fit in {limit} flag words")]
    WordLimit {
        /// Attribute name.
        name: Arc<str>,
        /// Configured maximum word count.
        limit: usize,
    },

    /// A descriptor was placed twice.
    #[error("encoded value '{0}' is already placed")]
    AlreadyPlaced(Arc<str>),

    /// Value cannot be represented by the attribute's bit range.
    #[error("encoded value '{name}': {value} is outside 0..={max}")]
    OutOfRange {
        /// Attribute name.
        name: Arc<str>,
        /// The rejected value.
        value: f64,
        /// Largest storable value.
        max: f64,
    },

    /// Stored enum ordinal has no registered label.
    #[error("encoded value '{name}': stored ordinal {ordinal} exceeds {cardinality} labels")]
    UnknownOrdinal {
        /// Attribute name.
        name: Arc<str>,
        /// The raw ordinal read from storage.
        ordinal: u32,
        /// Number of registered labels.
        cardinality: usize,
    },

    /// Enum label is not part of the attribute's label list.
    #[error("encoded value '{name}': unknown label '{label}'")]
    UnknownLabel {
        /// Attribute name.
        name: Arc<str>,
        /// The rejected label.
        label: String,
    },

    /// Enum label list is empty or repeats a label.
    #[error("encoded value '{name}': invalid labels: {reason}")]
    InvalidLabels {
        /// Attribute name.
        name: Arc<str>,
        /// What is wrong with the list.
        reason: String,
    },

    /// Decimal scale factor is not a finite positive number, or the largest
    /// storable value would overflow to infinity.
    #[error("encoded value '{name}': invalid scale factor {factor}")]
    InvalidScaleFactor {
        /// Attribute name.
        name: Arc<str>,
        /// The rejected factor.
        factor: f64,
    },

    /// No attribute is registered under this name.
    #[error("unknown encoded value '{0}'")]
    UnknownName(Arc<str>),

    /// Attribute exists but has a different kind than requested.
    #[error("encoded value '{name}': type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Attribute name.
        name: Arc<str>,
        /// Kind the caller asked for.
        expected: &'static str,
        /// Kind actually registered.
        found: &'static str,
    },

    /// Declarative schema could not be parsed.
    #[error("schema config error: {0}")]
    Config(String),
}

impl Error {
    /// Returns true for errors raised while building a schema.
    ///
    /// These indicate a configuration mistake and are not worth retrying.
    #[must_use]
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidWidth { .. }
                | Self::DuplicateName(_)
                | Self::SchemaFinalized(_)
                | Self::WordLimit { .. }
                | Self::AlreadyPlaced(_)
                | Self::InvalidLabels { .. }
                | Self::InvalidScaleFactor { .. }
                | Self::Config(_)
        )
    }
}
