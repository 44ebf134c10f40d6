//! Unit representation with conversion factors

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::UnitFamily;

/// A unit of measurement with its conversion factors to the family base unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Lookup key (e.g. "meters", "square-feet")
    pub name: String,
    /// Long-form plural label appended to formatted results (e.g. "square feet")
    pub display_name: String,
    /// The family this unit belongs to
    pub family: UnitFamily,
    /// Factor to the family base unit (value_base = value * scale_to_base + offset_to_base)
    pub scale_to_base: f64,
    /// Offset for affine units like Celsius and Fahrenheit
    pub offset_to_base: f64,
}

impl Unit {
    /// Create a new unit with proportional conversion (no offset)
    pub fn new(name: &str, display_name: &str, family: UnitFamily, scale_to_base: f64) -> Self {
        Unit {
            name: name.to_string(),
            display_name: display_name.to_string(),
            family,
            scale_to_base,
            offset_to_base: 0.0,
        }
    }

    /// Create a unit with offset (for temperature conversions)
    pub fn with_offset(
        name: &str,
        display_name: &str,
        family: UnitFamily,
        scale_to_base: f64,
        offset_to_base: f64,
    ) -> Self {
        Unit {
            name: name.to_string(),
            display_name: display_name.to_string(),
            family,
            scale_to_base,
            offset_to_base,
        }
    }

    /// Check if this is the family's base unit
    pub fn is_base(&self) -> bool {
        self.scale_to_base == 1.0 && self.offset_to_base == 0.0
    }

    /// Check if this unit has an offset (non-proportional conversion)
    pub fn has_offset(&self) -> bool {
        self.offset_to_base != 0.0
    }

    /// Check if two units belong to the same family (can be converted)
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.family == other.family
    }

    /// Convert a value from this unit to the family base unit
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.scale_to_base + self.offset_to_base
    }

    /// Convert a value from the family base unit to this unit
    pub fn from_base(&self, base_value: f64) -> f64 {
        (base_value - self.offset_to_base) / self.scale_to_base
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meters() -> Unit {
        Unit::new("meters", "meters", UnitFamily::Distance, 1.0)
    }

    fn kilometers() -> Unit {
        Unit::new("kilometers", "kilometers", UnitFamily::Distance, 1000.0)
    }

    fn celsius() -> Unit {
        Unit::with_offset("celsius", "celsius", UnitFamily::Temperature, 1.0, 273.15)
    }

    #[test]
    fn test_base_unit() {
        assert!(meters().is_base());
        assert!(!kilometers().is_base());
        assert!(!celsius().is_base());
    }

    #[test]
    fn test_offset() {
        assert!(!kilometers().has_offset());
        assert!(celsius().has_offset());
    }

    #[test]
    fn test_compatible() {
        assert!(meters().is_compatible(&kilometers()));
        assert!(!meters().is_compatible(&celsius()));
    }

    #[test]
    fn test_to_base() {
        assert_eq!(kilometers().to_base(5.0), 5000.0);
        assert_eq!(celsius().to_base(0.0), 273.15);
    }

    #[test]
    fn test_from_base() {
        assert_eq!(kilometers().from_base(5000.0), 5.0);
        assert_eq!(celsius().from_base(273.15), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", kilometers()), "kilometers");
    }
}
