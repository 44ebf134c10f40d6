//! The conversion engine
//!
//! A pure function over catalog units: no retained state, no I/O, safe to
//! call from any number of threads. Every conversion goes through the
//! family base unit: `base = value * scale + offset`, then
//! `out = (base - offset') / scale'`. For purely multiplicative families
//! the offsets are zero and the affine form degenerates to a ratio.

use serde::{Deserialize, Serialize};

use crate::{ConvertError, Unit, UnitFamily};

/// A single conversion to perform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub family: UnitFamily,
    pub source: Unit,
    pub target: Unit,
    pub value: f64,
}

/// The outcome of a conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Converted value, unrounded
    pub value: f64,
    /// Converted value rendered for display: three decimal places with
    /// trailing zeros trimmed, followed by the target unit's display name
    /// (e.g. "3.107 miles")
    pub formatted: String,
}

/// Convert a value from the request's source unit to its target unit.
///
/// Fails with [`ConvertError::FamilyMismatch`] when the units do not all
/// belong to the request's family, and [`ConvertError::InvalidValue`] when
/// the input is NaN or infinite. Same inputs always produce the same output.
pub fn convert(request: &ConversionRequest) -> Result<ConversionResult, ConvertError> {
    if request.source.family != request.family || request.target.family != request.family {
        return Err(ConvertError::FamilyMismatch {
            source: request.source.name.clone(),
            source_family: request.source.family,
            target: request.target.name.clone(),
            target_family: request.target.family,
        });
    }

    if !request.value.is_finite() {
        return Err(ConvertError::InvalidValue(request.value));
    }

    let base_value = request.source.to_base(request.value);
    let value = request.target.from_base(base_value);
    let formatted = format!("{} {}", format_value(value), request.target.display_name);

    Ok(ConversionResult { value, formatted })
}

/// Render a value with at most three decimal places.
///
/// Trailing zeros and a trailing decimal point are trimmed, so whole
/// numbers print bare ("212", not "212.000"). Negative zero normalizes
/// to "0".
fn format_value(value: f64) -> String {
    let fixed = format!("{value:.3}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
