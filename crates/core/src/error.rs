//! Runtime errors
//!
//! The typed core rejects every incompatibility while building. These errors
//! only come from the runtime surfaces: the [`UnitCatalog`](crate::UnitCatalog)
//! and parsing quantities from text.

use std::fmt;

/// Errors from unit lookup, runtime conversion and parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// No unit with this name or symbol
    UnknownUnit(String),
    /// Conversion between units of different kinds
    KindMismatch {
        from: String,
        to: String,
        from_kind: String,
        to_kind: String,
    },
    /// A unit with this name or symbol is already registered
    DuplicateUnit(String),
    /// Scale factor is zero, negative, or has a zero denominator
    InvalidScale { name: String, num: i64, den: i64 },
    /// The ratio between two scales doesn't fit in `i64`
    ScaleOverflow { from: String, to: String },
    /// Text has an amount but no unit
    MissingUnit(String),
    /// Amount couldn't be parsed into the representation
    InvalidAmount(String),
    /// Text names a unit other than the quantity's own
    UnitMismatch { expected: &'static str, found: String },
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::UnknownUnit(unit) => write!(f, "Unknown unit: {unit}"),
            UnitError::KindMismatch {
                from,
                to,
                from_kind,
                to_kind,
            } => write!(
                f,
                "Cannot convert {from} ({from_kind}) to {to} ({to_kind})"
            ),
            UnitError::DuplicateUnit(unit) => write!(f, "Unit already registered: {unit}"),
            UnitError::InvalidScale { name, num, den } => {
                write!(f, "Invalid scale for {name}: {num}/{den}")
            }
            UnitError::ScaleOverflow { from, to } => {
                write!(f, "Scale ratio between {from} and {to} overflows i64")
            }
            UnitError::MissingUnit(text) => write!(f, "Missing unit in {text:?}"),
            UnitError::InvalidAmount(text) => write!(f, "Invalid amount: {text:?}"),
            UnitError::UnitMismatch { expected, found } => {
                write!(f, "Expected unit {expected}, found {found}")
            }
        }
    }
}

impl std::error::Error for UnitError {}
