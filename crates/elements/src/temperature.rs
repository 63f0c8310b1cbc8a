//! Temperature units for melting and boiling point data

// internal modules
use crate::error::{Error, Result};

/// Units for temperature data
///
/// Melting and boiling points are stored in kelvin, with celsius and
/// fahrenheit values derived on demand:
///
/// - Kelvin (`k`)
/// - Celsius (`c`), K − 273.15
/// - Fahrenheit (`f`), 1.8 × (K − 273.15) + 32
///
/// The `FromStr` trait is implemented for all units for easy conversion
/// between the variants and their common abbreviations.
///
/// ```rust
/// # use ptools_elements::Temperature;
/// # use std::str::FromStr;
/// // Get the variant from an abbreviation
/// assert_eq!(Temperature::from_str("k").unwrap(), Temperature::Kelvin);
/// assert_eq!(Temperature::from_str("Celsius").unwrap(), Temperature::Celsius);
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Temperature {
    /// Kelvin (`k`), the canonical unit
    #[default]
    Kelvin,
    /// Celsius (`c`)
    Celsius,
    /// Fahrenheit (`f`)
    Fahrenheit,
}

impl Temperature {
    /// Get the conventional symbol for a variant
    ///
    /// For example:
    ///
    /// ```rust
    /// # use ptools_elements::Temperature;
    /// assert_eq!(Temperature::Kelvin.symbol(), "K");
    /// assert_eq!(Temperature::Celsius.symbol(), "°C");
    /// assert_eq!(Temperature::Fahrenheit.symbol(), "°F");
    /// ```
    pub fn symbol(&self) -> &str {
        match self {
            Temperature::Kelvin => "K",
            Temperature::Celsius => "°C",
            Temperature::Fahrenheit => "°F",
        }
    }

    /// Convert a temperature in kelvin to this unit
    ///
    /// Converted values are rounded to 10 decimal places, which strips
    /// float noise far below the precision of the underlying data.
    ///
    /// ```rust
    /// # use ptools_elements::Temperature;
    /// assert_eq!(Temperature::Kelvin.from_kelvin(13.99), 13.99);
    /// assert_eq!(Temperature::Celsius.from_kelvin(13.99), -259.16);
    /// assert_eq!(Temperature::Fahrenheit.from_kelvin(13.99), -434.488);
    /// ```
    pub fn from_kelvin(&self, kelvin: f64) -> f64 {
        match self {
            Temperature::Kelvin => kelvin,
            Temperature::Celsius => round_dp(kelvin - 273.15),
            Temperature::Fahrenheit => round_dp(1.8 * (kelvin - 273.15) + 32.0),
        }
    }
}

/// Round to 10 decimal places
fn round_dp(value: f64) -> f64 {
    (value * 1.0e+10).round() / 1.0e+10
}

impl std::str::FromStr for Temperature {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "k" | "kelvin" => Ok(Temperature::Kelvin),
            "c" | "celsius" => Ok(Temperature::Celsius),
            "f" | "fahrenheit" => Ok(Temperature::Fahrenheit),
            _ => Err(Error::FailedToInferTemperature(s.to_string())),
        }
    }
}

impl std::fmt::Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
