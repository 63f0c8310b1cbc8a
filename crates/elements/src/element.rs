//! Element records and states of matter

// external crates
use serde::Serialize;

// ptools modules
use ptools_utils::{f, OptionExt, StringExt};

// internal modules
use crate::error::{Error, Result};
use crate::temperature::Temperature;

/// State of matter at room temperature
///
/// The `FromStr` trait is implemented for easy conversion from both the
/// full state names and their single-letter shorthands, and is
/// case-insensitive.
///
/// ```rust
/// # use ptools_elements::State;
/// # use std::str::FromStr;
/// assert_eq!(State::from_str("solid").unwrap(), State::Solid);
/// assert_eq!(State::from_str("L").unwrap(), State::Liquid);
/// assert_eq!(State::from_str("Gas").unwrap(), State::Gas);
/// ```
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum State {
    /// Solid at room temperature
    Solid,
    /// Liquid at room temperature
    Liquid,
    /// Gas at room temperature
    Gas,
}

impl std::str::FromStr for State {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "s" | "solid" => Ok(State::Solid),
            "l" | "liquid" => Ok(State::Liquid),
            "g" | "gas" => Ok(State::Gas),
            _ => Err(Error::FailedToInferState(s.to_string())),
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let state = match self {
            State::Solid => "solid",
            State::Liquid => "liquid",
            State::Gas => "gas",
        };
        write!(f, "{state}")
    }
}

/// Data for a single element of the periodic table
///
/// One record exists per element, embedded in the crate as static data
/// and never mutated. Records are obtained through the
/// [PeriodicTable](crate::PeriodicTable) lookups rather than constructed
/// directly.
///
/// ## Why Option?
///
/// Not every field is measured for every element. The heaviest synthetic
/// elements have no known melting point, boiling point, density, or even
/// state of matter, and several ancient elements have no recorded
/// discoverer. These data remain the standard [Option] type rather than
/// defaulting to zero, which would be a misleading physical value.
///
/// ## Units
///
/// | Field                            | Unit                      |
/// | -------------------------------- | ------------------------- |
/// | `atomic_mass`                    | u                         |
/// | `melting_point_k`, `boiling_point_k` | K (see [Temperature]) |
/// | `density`                        | g/cm³ at room temperature |
///
/// ## Examples
///
/// ```rust
/// # use ptools_elements::{periodic_table, Temperature};
/// // Get the mercury record
/// let mercury = periodic_table().by_symbol("hg").unwrap();
///
/// assert_eq!(mercury.atomic_number, 80);
/// assert_eq!(mercury.melting_point(Temperature::Kelvin).unwrap(), 234.321);
///
/// // Print a summary of the record
/// println!("{mercury}");
/// ```
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Element {
    /// Element name e.g. "Hydrogen"
    pub name: &'static str,
    /// Element symbol e.g. "H", "He"
    pub symbol: &'static str,
    /// Atomic number (proton count), 1-118
    pub atomic_number: u8,
    /// Relative atomic mass (u)
    pub atomic_mass: f64,
    /// Electrons per shell, innermost first
    pub shells: &'static [u8],
    /// State of matter at room temperature, where known
    pub state: Option<State>,
    /// Group (column) 1-18, `None` for the lanthanide/actinide series
    pub group: Option<u8>,
    /// Period (row) 1-7
    pub period: u8,
    /// Melting point (K)
    pub melting_point_k: Option<f64>,
    /// Boiling point (K)
    pub boiling_point_k: Option<f64>,
    /// Density at room temperature (g/cm³)
    pub density: Option<f64>,
    /// Occurs in nature rather than being synthesised
    pub natural: bool,
    /// At least one stable isotope exists
    pub stable_isotope: bool,
    /// Credited discoverer(s)
    pub discoverer: Option<&'static str>,
    /// Year of discovery, negative for BC
    pub discovery_year: Option<i32>,
}

impl Element {
    /// Melting point in the requested unit
    ///
    /// ```rust
    /// # use ptools_elements::{periodic_table, Temperature};
    /// let hydrogen = periodic_table().by_number(1).unwrap();
    ///
    /// assert_eq!(hydrogen.melting_point(Temperature::Kelvin).unwrap(), 13.99);
    /// assert_eq!(hydrogen.melting_point(Temperature::Celsius).unwrap(), -259.16);
    /// assert_eq!(hydrogen.melting_point(Temperature::Fahrenheit).unwrap(), -434.488);
    /// ```
    ///
    /// Fails for records without melting point data rather than guessing
    /// at a default.
    pub fn melting_point(&self, unit: Temperature) -> Result<f64> {
        let kelvin = self.melting_point_k.ok_or(Error::MissingData {
            field: "melting point",
            element: self.name,
        })?;
        Ok(unit.from_kelvin(kelvin))
    }

    /// Boiling point in the requested unit
    ///
    /// Fails for records without boiling point data rather than guessing
    /// at a default.
    pub fn boiling_point(&self, unit: Temperature) -> Result<f64> {
        let kelvin = self.boiling_point_k.ok_or(Error::MissingData {
            field: "boiling point",
            element: self.name,
        })?;
        Ok(unit.from_kelvin(kelvin))
    }

    /// Density at room temperature (g/cm³)
    ///
    /// Fails for records without density data rather than guessing at a
    /// default.
    ///
    /// ```rust
    /// # use ptools_elements::periodic_table;
    /// let osmium = periodic_table().by_name("osmium").unwrap();
    /// assert_eq!(osmium.density().unwrap(), 22.59);
    ///
    /// // No measured density exists for the heaviest elements
    /// let oganesson = periodic_table().by_name("oganesson").unwrap();
    /// assert!(oganesson.density().is_err());
    /// ```
    pub fn density(&self) -> Result<f64> {
        self.density.ok_or(Error::MissingData {
            field: "density",
            element: self.name,
        })
    }

    /// Number of protons, equal to the atomic number
    pub fn protons(&self) -> u8 {
        self.atomic_number
    }

    /// Number of electrons in the neutral atom, equal to the atomic number
    pub fn electrons(&self) -> u8 {
        self.atomic_number
    }

    /// Check for membership of the lanthanide series (57-71)
    pub fn is_lanthanide(&self) -> bool {
        (57..=71).contains(&self.atomic_number)
    }

    /// Check for membership of the actinide series (89-103)
    pub fn is_actinide(&self) -> bool {
        (89..=103).contains(&self.atomic_number)
    }

    /// Serialise to a pretty JSON format string
    ///
    /// ```rust
    /// # use ptools_elements::periodic_table;
    /// let helium = periodic_table().by_symbol("he").unwrap();
    /// println!("{}", helium.to_json().unwrap());
    /// ```
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Discovery year formatted with BC years made explicit
    fn discovery_year_display(&self) -> String {
        match self.discovery_year {
            Some(year) if year < 0 => f!("{} BC", -year),
            Some(year) => year.to_string(),
            None => "none".to_string(),
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = f!("{} ({})\n", self.name, self.symbol);
        s += &f!("  Atomic number    {}\n", self.atomic_number);
        s += &f!("  Atomic mass      {} u\n", self.atomic_mass);
        s += &f!("  Shells           {:?}\n", self.shells);
        s += &f!(
            "  State            {}\n",
            self.state.map(|state| f!("{state}").capitalise()).display()
        );
        s += &f!("  Group            {}\n", self.group.display());
        s += &f!("  Period           {}\n", self.period);
        s += &f!("  Melting point    {} K\n", self.melting_point_k.display());
        s += &f!("  Boiling point    {} K\n", self.boiling_point_k.display());
        s += &f!("  Density          {} g/cm³\n", self.density.display());
        s += &f!("  Natural          {}\n", self.natural);
        s += &f!("  Stable isotope   {}\n", self.stable_isotope);
        s += &f!("  Discovered by    {}\n", self.discoverer.display());
        s += &f!("  Discovery year   {}", self.discovery_year_display());
        write!(f, "{s}")
    }
}
