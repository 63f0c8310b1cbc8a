//! Integration tests for the embedded dataset invariants

use std::collections::HashSet;

use ptools_elements::{periodic_table, PeriodicTable, NUMBER_OF_ELEMENTS};
use rstest::{fixture, rstest};

#[fixture]
fn table() -> &'static PeriodicTable {
    periodic_table()
}

#[rstest]
fn construction_succeeds() {
    assert!(PeriodicTable::new().is_ok());
}

#[rstest]
fn record_count_is_complete(table: &PeriodicTable) {
    assert_eq!(NUMBER_OF_ELEMENTS, 118);
    assert_eq!(table.len(), 118);
    assert!(!table.is_empty());
    assert_eq!(table.iter().count(), 118);
}

#[rstest]
fn records_are_ordered_and_contiguous(table: &PeriodicTable) {
    for (index, element) in table.iter().enumerate() {
        assert_eq!(element.atomic_number as usize, index + 1);
    }
}

#[rstest]
fn identifiers_are_unique(table: &PeriodicTable) {
    let symbols: HashSet<String> = table.iter().map(|e| e.symbol.to_lowercase()).collect();
    let names: HashSet<String> = table.iter().map(|e| e.name.to_lowercase()).collect();

    assert_eq!(symbols.len(), 118);
    assert_eq!(names.len(), 118);
}

#[rstest]
fn symbols_are_well_formed(table: &PeriodicTable) {
    for element in table {
        let mut chars = element.symbol.chars();
        assert!(chars.next().unwrap().is_ascii_uppercase(), "{}", element.symbol);
        assert!(chars.all(|c| c.is_ascii_lowercase()), "{}", element.symbol);
        assert!((1..=2).contains(&element.symbol.len()), "{}", element.symbol);
    }
}

#[rstest]
fn shell_electrons_sum_to_atomic_number(table: &PeriodicTable) {
    for element in table {
        let electrons: u32 = element.shells.iter().map(|&e| u32::from(e)).sum();
        assert_eq!(electrons, u32::from(element.atomic_number), "{}", element.name);
        assert!(element.shells.len() <= 7);
    }
}

#[rstest]
fn physical_data_is_positive(table: &PeriodicTable) {
    for element in table {
        assert!(element.atomic_mass > 0.0);
        assert!(element.melting_point_k.unwrap_or(1.0) > 0.0, "{}", element.name);
        assert!(element.boiling_point_k.unwrap_or(1.0) > 0.0, "{}", element.name);
        assert!(element.density.unwrap_or(1.0) > 0.0, "{}", element.name);
        assert!((1..=7).contains(&element.period));
        if let Some(group) = element.group {
            assert!((1..=18).contains(&group));
        }
    }
}

#[rstest]
fn series_membership_counts(table: &PeriodicTable) {
    assert_eq!(table.alkali_metals().len(), 6);
    assert_eq!(table.alkaline_earth_metals().len(), 6);
    assert_eq!(table.halogens().len(), 6);
    assert_eq!(table.noble_gases().len(), 7);
    assert_eq!(table.lanthanides().len(), 15);
    assert_eq!(table.actinides().len(), 15);
}

#[rstest]
fn natural_and_synthetic_counts(table: &PeriodicTable) {
    assert_eq!(table.natural_elements().len(), 93);
    assert_eq!(table.synthetic_elements().len(), 25);

    for element in table.natural_elements() {
        assert!(element.natural);
    }
    for element in table.synthetic_elements() {
        assert!(!element.natural);
    }
}

#[rstest]
fn stable_isotope_counts(table: &PeriodicTable) {
    assert_eq!(table.with_stable_isotope().len(), 80);
    assert_eq!(table.without_stable_isotope().len(), 38);

    for element in table.with_stable_isotope() {
        assert!(element.stable_isotope);
    }
    for element in table.without_stable_isotope() {
        assert!(!element.stable_isotope);
    }

    // Nothing synthetic has a stable isotope
    for element in table.synthetic_elements() {
        assert!(!element.stable_isotope, "{}", element.name);
    }
}

#[rstest]
fn series_are_consistent_with_groups(table: &PeriodicTable) {
    for element in table.alkali_metals() {
        assert_eq!(element.group, Some(1));
    }
    for element in table.halogens() {
        assert_eq!(element.group, Some(17));
    }
    for element in table.lanthanides() {
        assert!((57..=71).contains(&element.atomic_number));
    }
    for element in table.actinides() {
        assert!((89..=103).contains(&element.atomic_number));
    }
}

#[rstest]
fn one_letter_symbols(table: &PeriodicTable) {
    let count = table.iter().filter(|e| e.symbol.len() == 1).count();
    assert_eq!(count, 14);
}

#[rstest]
fn only_three_states_are_unknown(table: &PeriodicTable) {
    let unknown: Vec<&str> = table
        .iter()
        .filter(|e| e.state.is_none())
        .map(|e| e.name)
        .collect();

    assert_eq!(unknown, ["Astatine", "Copernicium", "Flerovium"]);
}
