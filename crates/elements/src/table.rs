//! The periodic table store and lookup service

// standard library
use std::collections::HashMap;
use std::sync::OnceLock;

// external crates
use itertools::Itertools;
use log::{debug, trace};

// ptools modules
use ptools_utils::f;

// internal modules
use crate::data::{ELEMENTS, NUMBER_OF_ELEMENTS};
use crate::element::{Element, State};
use crate::error::{Error, Result};
use crate::temperature::Temperature;

// Only ever validate and index the dataset once on first use, no sense
// doing it every time
static TABLE: OnceLock<PeriodicTable> = OnceLock::new();

/// Process-wide shared [PeriodicTable], initialised on first use
///
/// The table is built over the embedded dataset and is read-only for the
/// lifetime of the process, so the one instance is safely shared by any
/// number of threads.
///
/// ```rust
/// # use ptools_elements::periodic_table;
/// let iron = periodic_table().by_symbol("fe").unwrap();
/// assert_eq!(iron.atomic_number, 26);
/// ```
pub fn periodic_table() -> &'static PeriodicTable {
    TABLE.get_or_init(|| {
        PeriodicTable::new().expect("embedded element dataset failed validation")
    })
}

/// The validated, immutable collection of all 118 element records
///
/// Every lookup is a pure function over the same static records; nothing
/// is mutated, read, or written once the table exists.
///
/// An element can be resolved through any of its three identifying keys:
///
/// ```rust
/// # use ptools_elements::periodic_table;
/// let table = periodic_table();
///
/// // All three keys resolve to the same record
/// let by_number = table.by_number(80).unwrap();
/// let by_symbol = table.by_symbol("hg").unwrap();
/// let by_name = table.by_name("Mercury").unwrap();
///
/// assert_eq!(by_number, by_symbol);
/// assert_eq!(by_symbol, by_name);
/// ```
///
/// Broader queries return every matching record:
///
/// ```rust
/// # use ptools_elements::{periodic_table, State};
/// // Only bromine and mercury are liquid at room temperature
/// let liquids = periodic_table().by_state(State::Liquid);
/// assert_eq!(liquids.len(), 2);
/// ```
#[derive(Debug)]
pub struct PeriodicTable {
    /// Records in ascending atomic number order
    elements: &'static [Element; NUMBER_OF_ELEMENTS],
    /// Lowercased symbol to record index
    symbols: HashMap<String, &'static Element>,
    /// Lowercased name to record index
    names: HashMap<String, &'static Element>,
}

impl PeriodicTable {
    /// Build a table over the embedded dataset, validating every record
    ///
    /// The dataset is trusted static input, so this is a safety net
    /// rather than an expected failure path. Prefer the shared
    /// [periodic_table()] instance unless validation errors must be
    /// handled explicitly.
    pub fn new() -> Result<Self> {
        validate(&ELEMENTS)?;

        let symbols = ELEMENTS
            .iter()
            .map(|element| (element.symbol.to_lowercase(), element))
            .collect();

        let names = ELEMENTS
            .iter()
            .map(|element| (element.name.to_lowercase(), element))
            .collect();

        debug!("validated and indexed {} element records", ELEMENTS.len());

        Ok(Self {
            elements: &ELEMENTS,
            symbols,
            names,
        })
    }

    /// Find an element by atomic number
    ///
    /// ```rust
    /// # use ptools_elements::periodic_table;
    /// let oganesson = periodic_table().by_number(118).unwrap();
    /// assert_eq!(oganesson.symbol, "Og");
    ///
    /// // Anything outside 1-118 is an error
    /// assert!(periodic_table().by_number(119).is_err());
    /// ```
    pub fn by_number(&self, atomic_number: u8) -> Result<&'static Element> {
        match atomic_number {
            1..=118 => Ok(&self.elements[atomic_number as usize - 1]),
            _ => Err(Error::NotFound {
                key: atomic_number.to_string(),
            }),
        }
    }

    /// Find an element by symbol, case-insensitive
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// ```rust
    /// # use ptools_elements::periodic_table;
    /// let table = periodic_table();
    ///
    /// assert_eq!(table.by_symbol("He").unwrap().atomic_number, 2);
    /// assert_eq!(table.by_symbol("he").unwrap().atomic_number, 2);
    /// assert_eq!(table.by_symbol(" HE ").unwrap().atomic_number, 2);
    /// ```
    pub fn by_symbol(&self, symbol: &str) -> Result<&'static Element> {
        trace!("resolving symbol \"{symbol}\"");
        self.symbols
            .get(&symbol.trim().to_lowercase())
            .copied()
            .ok_or_else(|| Error::NotFound {
                key: symbol.to_string(),
            })
    }

    /// Find an element by name, case-insensitive
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// ```rust
    /// # use ptools_elements::periodic_table;
    /// let table = periodic_table();
    ///
    /// assert_eq!(table.by_name("barium").unwrap().atomic_number, 56);
    /// assert_eq!(table.by_name("BARIUM").unwrap().atomic_number, 56);
    /// ```
    pub fn by_name(&self, name: &str) -> Result<&'static Element> {
        trace!("resolving name \"{name}\"");
        self.names
            .get(&name.trim().to_lowercase())
            .copied()
            .ok_or_else(|| Error::NotFound {
                key: name.to_string(),
            })
    }

    /// Resolve a free-form key as an atomic number, symbol, or name
    ///
    /// Tried in that order, so numeric strings are always atomic numbers.
    ///
    /// ```rust
    /// # use ptools_elements::periodic_table;
    /// let table = periodic_table();
    ///
    /// assert_eq!(table.get("26").unwrap().name, "Iron");
    /// assert_eq!(table.get("fe").unwrap().name, "Iron");
    /// assert_eq!(table.get("IRON").unwrap().name, "Iron");
    /// ```
    pub fn get(&self, key: &str) -> Result<&'static Element> {
        if let Ok(atomic_number) = key.trim().parse::<u8>() {
            return self.by_number(atomic_number);
        }

        self.by_symbol(key).or_else(|_| self.by_name(key))
    }

    /// Check whether a name or symbol matches an existing element
    ///
    /// ```rust
    /// # use ptools_elements::periodic_table;
    /// assert!(periodic_table().contains("tin"));
    /// assert!(!periodic_table().contains("unobtainium"));
    /// ```
    pub fn contains(&self, key: &str) -> bool {
        self.by_symbol(key).is_ok() || self.by_name(key).is_ok()
    }

    /// All 118 records in ascending atomic number order
    pub fn elements(&self) -> &'static [Element; NUMBER_OF_ELEMENTS] {
        self.elements
    }

    /// Iterate over the records in ascending atomic number order
    pub fn iter(&self) -> std::slice::Iter<'static, Element> {
        self.elements.iter()
    }

    /// Number of elements in the table (118)
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false, the table is never empty
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in a given state at room temperature
    pub fn by_state(&self, state: State) -> Vec<&'static Element> {
        self.iter()
            .filter(|element| element.state == Some(state))
            .collect()
    }

    /// Elements in a given group (column)
    ///
    /// Passing `None` selects the lanthanide/actinide series members that
    /// sit outside any group.
    pub fn by_group(&self, group: Option<u8>) -> Vec<&'static Element> {
        self.iter()
            .filter(|element| element.group == group)
            .collect()
    }

    /// Elements in a given period (row)
    pub fn by_period(&self, period: u8) -> Vec<&'static Element> {
        self.iter()
            .filter(|element| element.period == period)
            .collect()
    }

    /// Elements with a melting point inside an inclusive range
    ///
    /// The bounds are interpreted in the given unit. Records without
    /// melting point data never match.
    ///
    /// ```rust
    /// # use ptools_elements::{periodic_table, Temperature};
    /// // Lead is the only element melting between 600 and 601 K
    /// let matches = periodic_table().by_melting_point(600.0, 601.0, Temperature::Kelvin);
    /// assert_eq!(matches[0].name, "Lead");
    /// ```
    pub fn by_melting_point(
        &self,
        minimum: f64,
        maximum: f64,
        unit: Temperature,
    ) -> Vec<&'static Element> {
        self.iter()
            .filter(|element| {
                matches!(element.melting_point(unit), Ok(t) if minimum <= t && t <= maximum)
            })
            .collect()
    }

    /// Elements with a boiling point inside an inclusive range
    ///
    /// The bounds are interpreted in the given unit. Records without
    /// boiling point data never match.
    pub fn by_boiling_point(
        &self,
        minimum: f64,
        maximum: f64,
        unit: Temperature,
    ) -> Vec<&'static Element> {
        self.iter()
            .filter(|element| {
                matches!(element.boiling_point(unit), Ok(t) if minimum <= t && t <= maximum)
            })
            .collect()
    }

    /// Elements with a density inside an inclusive range (g/cm³)
    pub fn by_density(&self, minimum: f64, maximum: f64) -> Vec<&'static Element> {
        self.iter()
            .filter(|element| matches!(element.density(), Ok(d) if minimum <= d && d <= maximum))
            .collect()
    }

    /// Elements discovered inside an inclusive year range
    ///
    /// BC years are negative, so copper (c. 9000 BC) is found with a
    /// minimum of `-9000` or lower. Records without a discovery year
    /// never match.
    pub fn by_discovery_year(&self, minimum: i32, maximum: i32) -> Vec<&'static Element> {
        self.iter()
            .filter(|element| {
                matches!(element.discovery_year, Some(y) if minimum <= y && y <= maximum)
            })
            .collect()
    }

    /// The six alkali metals (group 1, hydrogen excepted)
    pub fn alkali_metals(&self) -> Vec<&'static Element> {
        self.iter()
            .filter(|element| element.group == Some(1) && element.atomic_number != 1)
            .collect()
    }

    /// The six alkaline earth metals (group 2)
    pub fn alkaline_earth_metals(&self) -> Vec<&'static Element> {
        self.by_group(Some(2))
    }

    /// The six halogens (group 17)
    pub fn halogens(&self) -> Vec<&'static Element> {
        self.by_group(Some(17))
    }

    /// The seven noble gases (group 18)
    pub fn noble_gases(&self) -> Vec<&'static Element> {
        self.by_group(Some(18))
    }

    /// The fifteen lanthanides (57-71)
    pub fn lanthanides(&self) -> Vec<&'static Element> {
        self.iter().filter(|element| element.is_lanthanide()).collect()
    }

    /// The fifteen actinides (89-103)
    pub fn actinides(&self) -> Vec<&'static Element> {
        self.iter().filter(|element| element.is_actinide()).collect()
    }

    /// The 93 elements that occur in nature
    pub fn natural_elements(&self) -> Vec<&'static Element> {
        self.iter().filter(|element| element.natural).collect()
    }

    /// The 25 elements only ever synthesised
    pub fn synthetic_elements(&self) -> Vec<&'static Element> {
        self.iter().filter(|element| !element.natural).collect()
    }

    /// Elements with at least one stable isotope
    pub fn with_stable_isotope(&self) -> Vec<&'static Element> {
        self.iter().filter(|element| element.stable_isotope).collect()
    }

    /// Elements with no stable isotope
    pub fn without_stable_isotope(&self) -> Vec<&'static Element> {
        self.iter().filter(|element| !element.stable_isotope).collect()
    }
}

impl<'a> IntoIterator for &'a PeriodicTable {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Construction-time checks over the embedded dataset
fn validate(elements: &[Element]) -> Result<()> {
    if elements.len() != NUMBER_OF_ELEMENTS {
        return Err(Error::InvalidData(f!(
            "expected {NUMBER_OF_ELEMENTS} records, found {}",
            elements.len()
        )));
    }

    for (index, element) in elements.iter().enumerate() {
        if element.atomic_number as usize != index + 1 {
            return Err(Error::InvalidData(f!(
                "expected atomic number {} at index {index}, found {}",
                index + 1,
                element.atomic_number
            )));
        }

        let electrons: u32 = element.shells.iter().map(|&e| u32::from(e)).sum();
        if electrons != u32::from(element.atomic_number) {
            return Err(Error::InvalidData(f!(
                "shell electrons sum to {electrons} for {}",
                element.name
            )));
        }
    }

    let duplicates: Vec<String> = elements
        .iter()
        .map(|element| element.symbol.to_lowercase())
        .duplicates()
        .chain(
            elements
                .iter()
                .map(|element| element.name.to_lowercase())
                .duplicates(),
        )
        .collect();

    if !duplicates.is_empty() {
        return Err(Error::InvalidData(f!(
            "duplicate element identifiers: {duplicates:?}"
        )));
    }

    Ok(())
}
