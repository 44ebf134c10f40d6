//! Error types for catalog lookups and conversions
//!
//! Every error is deterministic given its inputs and is returned
//! synchronously; nothing here is retried or fatal to the process.

use std::fmt;

use crate::UnitFamily;

/// Errors that can occur during catalog lookup or conversion
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Family name does not match any of the nine supported tags
    UnknownFamily(String),

    /// Unit name does not exist within the requested family
    UnknownUnit(String),

    /// A family has fewer than two registered units, so no default pair
    /// exists. Unreachable with the shipped table; defensive contract only.
    InsufficientUnits { family: UnitFamily, count: usize },

    /// Source and target units belong to different families
    FamilyMismatch {
        source: String,
        source_family: UnitFamily,
        target: String,
        target_family: UnitFamily,
    },

    /// Input value is NaN or infinite
    InvalidValue(f64),
}

// Display and Error are implemented by hand rather than via thiserror:
// the derive treats a field named `source` as the error's source() and
// requires it to implement Error, which conflicts with the spec-mandated
// `FamilyMismatch { source: String, .. }` field name.
impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFamily(name) => write!(f, "unknown unit family: {name}"),
            Self::UnknownUnit(name) => write!(f, "unknown unit: {name}"),
            Self::InsufficientUnits { family, count } => write!(
                f,
                "family {family} has {count} unit(s), need at least two for a default pair"
            ),
            Self::FamilyMismatch {
                source,
                source_family,
                target,
                target_family,
            } => write!(
                f,
                "cannot convert {source} ({source_family}) to {target} ({target_family}): families differ"
            ),
            Self::InvalidValue(value) => write!(f, "value {value} is not a finite number"),
        }
    }
}

impl std::error::Error for ConvertError {}
