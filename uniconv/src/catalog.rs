//! Static unit catalog - every supported unit, organized by family
//!
//! The catalog is built once at first use and never mutated afterwards, so
//! it is safe to read from any number of threads. Per-family order is fixed
//! and significant: callers list units in this order, and the first two
//! units form the family's default source/target pair.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::{ConvertError, Unit, UnitFamily};

/// Global catalog
pub static CATALOG: LazyLock<UnitCatalog> = LazyLock::new(UnitCatalog::new);

/// Registry of all known units, ordered within each family
pub struct UnitCatalog {
    units: HashMap<UnitFamily, Vec<Unit>>,
}

impl UnitCatalog {
    pub fn new() -> Self {
        let mut catalog = UnitCatalog {
            units: HashMap::new(),
        };
        catalog.register_all_units();
        catalog
    }

    /// Ordered units of a family
    pub fn units_for(&self, family: UnitFamily) -> &[Unit] {
        self.units.get(&family).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ordered units of a family, resolved from its name.
    ///
    /// Fails with [`ConvertError::UnknownFamily`] for names outside the
    /// nine supported tags.
    pub fn units_for_name(&self, name: &str) -> Result<&[Unit], ConvertError> {
        Ok(self.units_for(UnitFamily::from_name(name)?))
    }

    /// The first two units of a family's list, used to reset selections
    /// when a caller switches families
    pub fn default_pair(&self, family: UnitFamily) -> Result<(&Unit, &Unit), ConvertError> {
        match self.units_for(family) {
            [first, second, ..] => Ok((first, second)),
            units => Err(ConvertError::InsufficientUnits {
                family,
                count: units.len(),
            }),
        }
    }

    /// Look up a unit within a family by its key or display name,
    /// case-insensitively
    pub fn find(&self, family: UnitFamily, name: &str) -> Result<&Unit, ConvertError> {
        let wanted = name.trim();
        self.units_for(family)
            .iter()
            .find(|u| {
                u.name.eq_ignore_ascii_case(wanted) || u.display_name.eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ConvertError::UnknownUnit(name.to_string()))
    }

    fn register(&mut self, unit: Unit) {
        self.units.entry(unit.family).or_default().push(unit);
    }

    fn register_all_units(&mut self) {
        self.register_area_units();
        self.register_astronomical_units();
        self.register_distance_units();
        self.register_mass_units();
        self.register_pressure_units();
        self.register_speed_units();
        self.register_temperature_units();
        self.register_duration_units();
        self.register_volume_units();
    }

    fn register_area_units(&mut self) {
        use UnitFamily::Area;
        // Base: square meters
        self.register(Unit::new("acres", "acres", Area, 4046.8564224));
        self.register(Unit::new("hectares", "hectares", Area, 10000.0));
        self.register(Unit::new("square-feet", "square feet", Area, 0.09290304));
        self.register(Unit::new("square-kilometers", "square kilometers", Area, 1_000_000.0));
        self.register(Unit::new("square-meters", "square meters", Area, 1.0));
        self.register(Unit::new("square-miles", "square miles", Area, 2_589_988.110336));
    }

    fn register_astronomical_units(&mut self) {
        use UnitFamily::Astronomical;
        // Base: meters (shared with Distance, but the families stay separate)
        self.register(Unit::new(
            "astronomical-units",
            "astronomical units",
            Astronomical,
            1.495_978_707e11,
        ));
        self.register(Unit::new("lightyears", "lightyears", Astronomical, 9.460_730_472_580_8e15));
        self.register(Unit::new("parsecs", "parsecs", Astronomical, 3.085_677_581_491_367_3e16));
    }

    fn register_distance_units(&mut self) {
        use UnitFamily::Distance;
        // Base: meters. The meters/kilometers pair leads the list; it is the
        // documented default pair for this family.
        self.register(Unit::new("meters", "meters", Distance, 1.0));
        self.register(Unit::new("kilometers", "kilometers", Distance, 1000.0));
        self.register(Unit::new("centimeters", "centimeters", Distance, 0.01));
        self.register(Unit::new("millimeters", "millimeters", Distance, 0.001));
        self.register(Unit::new("inches", "inches", Distance, 0.0254));
        self.register(Unit::new("feet", "feet", Distance, 0.3048));
        self.register(Unit::new("yards", "yards", Distance, 0.9144));
        self.register(Unit::new("miles", "miles", Distance, 1609.344));
    }

    fn register_mass_units(&mut self) {
        use UnitFamily::Mass;
        // Base: kilograms
        self.register(Unit::new("grams", "grams", Mass, 0.001));
        self.register(Unit::new("kilograms", "kilograms", Mass, 1.0));
        self.register(Unit::new("metric-tons", "metric tons", Mass, 1000.0));
        self.register(Unit::new("ounces", "ounces", Mass, 0.028349523125));
        self.register(Unit::new("pounds", "pounds", Mass, 0.45359237));
        self.register(Unit::new("stones", "stones", Mass, 6.35029318));
    }

    fn register_pressure_units(&mut self) {
        use UnitFamily::Pressure;
        // Base: pascals
        self.register(Unit::new("bars", "bars", Pressure, 100_000.0));
        self.register(Unit::new("hectopascals", "hectopascals", Pressure, 100.0));
        self.register(Unit::new("inches-of-mercury", "inches of mercury", Pressure, 3386.389));
        self.register(Unit::new("kilopascals", "kilopascals", Pressure, 1000.0));
        self.register(Unit::new("millibars", "millibars", Pressure, 100.0));
        self.register(Unit::new(
            "millimeters-of-mercury",
            "millimeters of mercury",
            Pressure,
            133.322387415,
        ));
        self.register(Unit::new(
            "newtons-per-square-meter",
            "newtons per square meter",
            Pressure,
            1.0,
        ));
        self.register(Unit::new(
            "pounds-per-square-inch",
            "pounds per square inch",
            Pressure,
            6894.757293168,
        ));
    }

    fn register_speed_units(&mut self) {
        use UnitFamily::Speed;
        // Base: meters per second
        self.register(Unit::new(
            "kilometers-per-hour",
            "kilometers per hour",
            Speed,
            1000.0 / 3600.0,
        ));
        self.register(Unit::new("knots", "knots", Speed, 1852.0 / 3600.0));
        self.register(Unit::new("meters-per-second", "meters per second", Speed, 1.0));
        self.register(Unit::new("miles-per-hour", "miles per hour", Speed, 0.44704));
    }

    fn register_temperature_units(&mut self) {
        use UnitFamily::Temperature;
        // Base: kelvin. Celsius and Fahrenheit are affine: the offset is
        // applied after the scale when converting to kelvin.
        self.register(Unit::with_offset("celsius", "celsius", Temperature, 1.0, 273.15));
        // K = (F + 459.67) * 5/9
        self.register(Unit::with_offset(
            "fahrenheit",
            "fahrenheit",
            Temperature,
            5.0 / 9.0,
            459.67 * 5.0 / 9.0,
        ));
        self.register(Unit::new("kelvin", "kelvin", Temperature, 1.0));
    }

    fn register_duration_units(&mut self) {
        use UnitFamily::Duration;
        // Base: seconds
        self.register(Unit::new("hours", "hours", Duration, 3600.0));
        self.register(Unit::new("microseconds", "microseconds", Duration, 1e-6));
        self.register(Unit::new("milliseconds", "milliseconds", Duration, 1e-3));
        self.register(Unit::new("minutes", "minutes", Duration, 60.0));
        self.register(Unit::new("nanoseconds", "nanoseconds", Duration, 1e-9));
        self.register(Unit::new("seconds", "seconds", Duration, 1.0));
    }

    fn register_volume_units(&mut self) {
        use UnitFamily::Volume;
        // Base: liters
        self.register(Unit::new("bushels", "bushels", Volume, 35.23907016688));
        self.register(Unit::new("cubic-centimeters", "cubic centimeters", Volume, 0.001));
        self.register(Unit::new("cubic-feet", "cubic feet", Volume, 28.316846592));
        self.register(Unit::new("cubic-inches", "cubic inches", Volume, 0.016387064));
        self.register(Unit::new("cubic-meters", "cubic meters", Volume, 1000.0));
        self.register(Unit::new("fluid-ounces", "fluid ounces", Volume, 0.0295735295625));
        self.register(Unit::new("gallons", "gallons", Volume, 3.785411784));
        self.register(Unit::new("liters", "liters", Volume, 1.0));
        self.register(Unit::new("milliliters", "milliliters", Volume, 0.001));
        self.register(Unit::new("pints", "pints", Volume, 0.473176473));
        self.register(Unit::new("quarts", "quarts", Volume, 0.946352946));
    }
}

impl Default for UnitCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_family_populated() {
        let catalog = UnitCatalog::new();
        for family in UnitFamily::ALL {
            let units = catalog.units_for(family);
            assert!(units.len() >= 2, "{} has {} units", family, units.len());
            for unit in units {
                assert_eq!(unit.family, family);
            }
        }
    }

    #[test]
    fn test_every_family_has_a_base_unit() {
        let catalog = UnitCatalog::new();
        for family in UnitFamily::ALL {
            assert!(
                catalog.units_for(family).iter().any(|u| u.is_base()),
                "{} has no base unit",
                family
            );
        }
    }

    #[test]
    fn test_distance_order_leads_with_default_pair() {
        let units = CATALOG.units_for(UnitFamily::Distance);
        assert_eq!(units[0].name, "meters");
        assert_eq!(units[1].name, "kilometers");
    }

    #[test]
    fn test_order_is_reproducible() {
        let first: Vec<_> = CATALOG
            .units_for(UnitFamily::Volume)
            .iter()
            .map(|u| u.name.clone())
            .collect();
        let second: Vec<_> = UnitCatalog::new()
            .units_for(UnitFamily::Volume)
            .iter()
            .map(|u| u.name.clone())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_pairs() {
        let expected = [
            (UnitFamily::Area, "acres", "hectares"),
            (UnitFamily::Astronomical, "astronomical-units", "lightyears"),
            (UnitFamily::Distance, "meters", "kilometers"),
            (UnitFamily::Mass, "grams", "kilograms"),
            (UnitFamily::Pressure, "bars", "hectopascals"),
            (UnitFamily::Speed, "kilometers-per-hour", "knots"),
            (UnitFamily::Temperature, "celsius", "fahrenheit"),
            (UnitFamily::Duration, "hours", "microseconds"),
            (UnitFamily::Volume, "bushels", "cubic-centimeters"),
        ];
        for (family, first, second) in expected {
            let (a, b) = CATALOG.default_pair(family).unwrap();
            assert_eq!(a.name, first);
            assert_eq!(b.name, second);
        }
    }

    #[test]
    fn test_units_for_name() {
        assert!(CATALOG.units_for_name("Distance").is_ok());
        assert!(CATALOG.units_for_name("time").is_ok());

        let err = CATALOG.units_for_name("frequency").unwrap_err();
        assert!(matches!(err, ConvertError::UnknownFamily(_)));
    }

    #[test]
    fn test_find_by_key_and_display_name() {
        let by_key = CATALOG.find(UnitFamily::Area, "square-feet").unwrap();
        let by_label = CATALOG.find(UnitFamily::Area, "Square Feet").unwrap();
        assert_eq!(by_key, by_label);
    }

    #[test]
    fn test_find_is_scoped_to_family() {
        assert!(CATALOG.find(UnitFamily::Distance, "meters").is_ok());
        let err = CATALOG.find(UnitFamily::Mass, "meters").unwrap_err();
        assert_eq!(err, ConvertError::UnknownUnit("meters".to_string()));
    }

    #[test]
    fn test_insufficient_units_contract() {
        let empty = UnitCatalog {
            units: HashMap::new(),
        };
        let err = empty.default_pair(UnitFamily::Mass).unwrap_err();
        assert_eq!(
            err,
            ConvertError::InsufficientUnits {
                family: UnitFamily::Mass,
                count: 0,
            }
        );
    }
}
