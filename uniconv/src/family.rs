//! Unit family tags
//!
//! Every unit belongs to exactly one family; conversions are only defined
//! between units of the same family. Astronomical is kept separate from
//! Distance (they share the meter as base unit but are presented as
//! distinct categories, matching the app this engine serves).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ConvertError;

/// The nine supported unit families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitFamily {
    Area,
    Astronomical,
    Distance,
    Mass,
    Pressure,
    Speed,
    Temperature,
    Duration,
    Volume,
}

impl UnitFamily {
    /// All families in presentation order
    pub const ALL: [UnitFamily; 9] = [
        UnitFamily::Area,
        UnitFamily::Astronomical,
        UnitFamily::Distance,
        UnitFamily::Mass,
        UnitFamily::Pressure,
        UnitFamily::Speed,
        UnitFamily::Temperature,
        UnitFamily::Duration,
        UnitFamily::Volume,
    ];

    /// User-facing label. Duration is shown as "Time".
    pub fn label(&self) -> &'static str {
        match self {
            UnitFamily::Area => "Area",
            UnitFamily::Astronomical => "Astronomical",
            UnitFamily::Distance => "Distance",
            UnitFamily::Mass => "Mass",
            UnitFamily::Pressure => "Pressure",
            UnitFamily::Speed => "Speed",
            UnitFamily::Temperature => "Temperature",
            UnitFamily::Duration => "Time",
            UnitFamily::Volume => "Volume",
        }
    }

    /// Resolve a family from its name, case-insensitively.
    ///
    /// Accepts both "time" and "duration" for [`UnitFamily::Duration`].
    pub fn from_name(name: &str) -> Result<UnitFamily, ConvertError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "area" => Ok(UnitFamily::Area),
            "astronomical" => Ok(UnitFamily::Astronomical),
            "distance" => Ok(UnitFamily::Distance),
            "mass" => Ok(UnitFamily::Mass),
            "pressure" => Ok(UnitFamily::Pressure),
            "speed" => Ok(UnitFamily::Speed),
            "temperature" => Ok(UnitFamily::Temperature),
            "time" | "duration" => Ok(UnitFamily::Duration),
            "volume" => Ok(UnitFamily::Volume),
            _ => Err(ConvertError::UnknownFamily(name.to_string())),
        }
    }
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
