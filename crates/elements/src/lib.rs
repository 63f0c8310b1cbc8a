//! Element records and lookups for the 118 known chemical elements
//!
//! This crate embeds a full periodic table of reference data and makes
//! each element addressable by any of its identifying keys.
//!
//! Records are made available through:
//! - The shared [periodic_table()] instance (recommended)
//! - An explicitly constructed [PeriodicTable] if validation errors must
//!   be handled by the caller
//!
//! ## Implementation
//!
//! Every element is a single static [Element] record, validated and
//! indexed once on first use. Lookups by name and symbol are
//! case-insensitive, and anything outside the dataset is an explicit
//! [Error] rather than a default value.
//!
//! For example:
//!
//! ```rust
//! use ptools_elements::{periodic_table, Temperature};
//!
//! // Get the tungsten record, by any key
//! let tungsten = periodic_table().by_symbol("w").unwrap();
//!
//! // Melting point in any supported unit
//! let fahrenheit = tungsten.melting_point(Temperature::Fahrenheit).unwrap();
//! assert_eq!(fahrenheit, 6191.33);
//!
//! // Print a summary of the record
//! println!("{tungsten}");
//! ```
//!
//! This will print all common reference data for the record, with an
//! explicit "none" for anything without measured data.
//!
//! ```text
//! Tungsten (W)
//!   Atomic number    74
//!   Atomic mass      183.84 u
//!   Shells           [2, 8, 18, 32, 12, 2]
//!   State            Solid
//!   Group            6
//!   Period           6
//!   Melting point    3695 K
//!   Boiling point    6203 K
//!   Density          19.25 g/cm³
//!   Natural          true
//!   Stable isotope   true
//!   Discovered by    Juan José Elhuyar, Fausto Elhuyar
//!   Discovery year   1783
//! ```
//!
//! Broader queries over the whole table collect every matching record,
//! such as [by_state](PeriodicTable::by_state) or
//! [by_discovery_year](PeriodicTable::by_discovery_year), alongside the
//! common named series like [lanthanides](PeriodicTable::lanthanides)
//! and [noble_gases](PeriodicTable::noble_gases).

// Modules
mod data;
mod element;
mod error;
mod table;
mod temperature;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use element::{Element, State};

#[doc(inline)]
pub use error::Error;

#[doc(inline)]
pub use table::{periodic_table, PeriodicTable};

#[doc(inline)]
pub use temperature::Temperature;

pub use data::NUMBER_OF_ELEMENTS;
