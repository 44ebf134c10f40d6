//! Uniconv - Unit Conversion Engine
//!
//! A self-contained conversion engine over nine measurement families,
//! backed by a static table of (unit, scale, offset) records relative to
//! one base unit per family. No dynamic unit algebra: every conversion is
//! source -> family base -> target.
//!
//! Families:
//! - Area (square meters, acres, hectares, etc.)
//! - Astronomical (AU, lightyears, parsecs)
//! - Distance (meters, feet, miles, etc.)
//! - Mass (kilograms, pounds, stones, etc.)
//! - Pressure (pascals, bars, psi, etc.)
//! - Speed (m/s, km/h, knots, mph)
//! - Temperature (celsius, fahrenheit, kelvin)
//! - Duration (seconds, minutes, hours, etc.), labelled "Time"
//! - Volume (liters, gallons, pints, etc.)

mod catalog;
mod engine;
mod error;
mod family;
mod unit;

pub use catalog::{UnitCatalog, CATALOG};
pub use engine::{convert, ConversionRequest, ConversionResult};
pub use error::ConvertError;
pub use family::UnitFamily;
pub use unit::Unit;
