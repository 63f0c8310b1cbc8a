//! Integration tests for the element lookup service

use ptools_elements::{periodic_table, Error, PeriodicTable, State, Temperature};
use rstest::{fixture, rstest};

#[fixture]
fn table() -> &'static PeriodicTable {
    periodic_table()
}

#[rstest]
#[case("H", 1)] // exact
#[case("h", 1)] // lowercase
#[case(" H ", 1)] // padded
#[case("he", 2)]
#[case("HE", 2)]
#[case("w", 74)]
#[case("hg", 80)]
#[case("og", 118)]
fn symbols_are_case_insensitive(
    table: &PeriodicTable,
    #[case] symbol: &str,
    #[case] expected: u8,
) {
    assert_eq!(table.by_symbol(symbol).unwrap().atomic_number, expected);
}

#[rstest]
#[case("hydrogen", 1)]
#[case("HYDROGEN", 1)]
#[case(" hydrogen ", 1)]
#[case("BARIUM", 56)]
#[case("acTinium", 89)]
#[case("cOPPER", 29)]
#[case("OgAnesSON", 118)]
fn names_are_case_insensitive(table: &PeriodicTable, #[case] name: &str, #[case] expected: u8) {
    assert_eq!(table.by_name(name).unwrap().atomic_number, expected);
}

#[rstest]
fn every_atomic_number_resolves(table: &PeriodicTable) {
    for n in 1..=118 {
        assert_eq!(table.by_number(n).unwrap().atomic_number, n);
    }
}

#[rstest]
#[case(0)]
#[case(119)]
#[case(200)]
#[case(u8::MAX)]
fn numbers_outside_the_table_fail(table: &PeriodicTable, #[case] atomic_number: u8) {
    let result = table.by_number(atomic_number);
    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[rstest]
#[case("xx")]
#[case("hydrogenium")]
#[case("")]
fn unknown_keys_fail(table: &PeriodicTable, #[case] key: &str) {
    assert!(matches!(table.by_symbol(key), Err(Error::NotFound { .. })));
    assert!(matches!(table.by_name(key), Err(Error::NotFound { .. })));
    assert!(matches!(table.get(key), Err(Error::NotFound { .. })));
}

#[rstest]
#[case("26", "Iron")] // atomic number
#[case("fe", "Iron")] // symbol
#[case("IRON", "Iron")] // name
#[case("118", "Oganesson")]
#[case("sn", "Tin")]
fn free_form_keys_resolve(table: &PeriodicTable, #[case] key: &str, #[case] expected: &str) {
    assert_eq!(table.get(key).unwrap().name, expected);
}

#[rstest]
fn membership_checks(table: &PeriodicTable) {
    assert!(table.contains("tin"));
    assert!(table.contains("Sn"));
    assert!(table.contains("OGANESSON"));
    assert!(!table.contains("unobtainium"));
    assert!(!table.contains("119"));
}

#[rstest]
#[case(Temperature::Kelvin, 13.99)]
#[case(Temperature::Celsius, -259.16)]
#[case(Temperature::Fahrenheit, -434.488)]
fn hydrogen_melting_point_conversions(
    table: &PeriodicTable,
    #[case] unit: Temperature,
    #[case] expected: f64,
) {
    let hydrogen = table.by_number(1).unwrap();
    assert_eq!(hydrogen.melting_point(unit).unwrap(), expected);
}

#[rstest]
fn known_conversion_anchors(table: &PeriodicTable) {
    let tungsten = table.by_symbol("w").unwrap();
    assert_eq!(tungsten.melting_point(Temperature::Fahrenheit).unwrap(), 6191.33);

    let radon = table.by_symbol("rn").unwrap();
    assert_eq!(radon.boiling_point(Temperature::Fahrenheit).unwrap(), -78.97);

    let mercury = table.by_symbol("hg").unwrap();
    assert_eq!(mercury.melting_point(Temperature::Celsius).unwrap(), -38.829);
}

#[rstest]
fn celsius_conversions_round_trip(table: &PeriodicTable) {
    for element in table {
        if let Some(kelvin) = element.melting_point_k {
            let celsius = element.melting_point(Temperature::Celsius).unwrap();
            assert!((celsius + 273.15 - kelvin).abs() < 1.0e-9, "{}", element.name);
        }
    }
}

#[rstest]
#[case("astatine")]
#[case("rutherfordium")]
#[case("oganesson")]
fn missing_melting_points_are_explicit(table: &PeriodicTable, #[case] name: &str) {
    let element = table.by_name(name).unwrap();
    let result = element.melting_point(Temperature::Kelvin);
    assert!(matches!(result, Err(Error::MissingData { .. })));
}

#[rstest]
fn missing_densities_are_explicit(table: &PeriodicTable) {
    for element in table {
        match element.density {
            Some(expected) => assert_eq!(element.density().unwrap(), expected),
            None => assert!(matches!(element.density(), Err(Error::MissingData { .. }))),
        }
    }
}

#[rstest]
fn states_at_room_temperature(table: &PeriodicTable) {
    let liquids = table.by_state(State::Liquid);
    let names: Vec<&str> = liquids.iter().map(|element| element.name).collect();
    assert_eq!(names, ["Bromine", "Mercury"]);

    assert_eq!(table.by_state(State::Gas).len(), 11);
    assert_eq!(table.by_state(State::Solid).len(), 102);
    assert_eq!(table.by_state(State::Solid)[0].name, "Lithium");
}

#[rstest]
fn groups_and_periods(table: &PeriodicTable) {
    // 14 lanthanides and 14 actinides sit outside any group
    assert_eq!(table.by_group(None).len(), 28);

    // Group 1 is the alkali metals plus hydrogen
    assert_eq!(table.by_group(Some(1)).len(), 7);

    let period_1: Vec<&str> = table.by_period(1).iter().map(|e| e.name).collect();
    assert_eq!(period_1, ["Hydrogen", "Helium"]);

    assert_eq!(table.by_period(2)[3].name, "Carbon");
    assert_eq!(table.by_period(3).last().unwrap().symbol, "Ar");
}

#[rstest]
fn melting_point_ranges(table: &PeriodicTable) {
    // Nothing melts below absolute zero
    let impossible = table.by_melting_point(f64::NEG_INFINITY, -273.16, Temperature::Celsius);
    assert!(impossible.is_empty());

    let coldest = table.by_melting_point(-273.15, -250.0, Temperature::Celsius);
    assert_eq!(coldest[0].name, "Hydrogen");

    let tungsten = table.by_melting_point(6191.3, 6191.4, Temperature::Fahrenheit);
    assert_eq!(tungsten[0].symbol, "W");

    let lead = table.by_melting_point(600.0, 601.0, Temperature::Kelvin);
    assert_eq!(lead[0].name, "Lead");
}

#[rstest]
fn boiling_point_ranges(table: &PeriodicTable) {
    let impossible = table.by_boiling_point(f64::NEG_INFINITY, -273.16, Temperature::Celsius);
    assert!(impossible.is_empty());

    let radon = table.by_boiling_point(-78.97, -78.97, Temperature::Fahrenheit);
    assert_eq!(radon[0].name, "Radon");
}

#[rstest]
fn density_ranges(table: &PeriodicTable) {
    assert!(table.by_density(-1.0, 0.0).is_empty());

    // Only osmium and iridium are this dense
    let densest = table.by_density(22.0, 23.0);
    let names: Vec<&str> = densest.iter().map(|element| element.name).collect();
    assert_eq!(names, ["Osmium", "Iridium"]);
}

#[rstest]
fn discovery_year_ranges(table: &PeriodicTable) {
    assert!(table.by_discovery_year(-10000, -9999).is_empty());

    let ancient = table.by_discovery_year(-10000, 0);
    assert_eq!(ancient[0].name, "Copper");

    let recent = table.by_discovery_year(2005, 2010);
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].atomic_number, 117);
}

#[rstest]
fn element_summary_formatting(table: &PeriodicTable) {
    let hydrogen = table.by_number(1).unwrap();
    let summary = hydrogen.to_string();

    assert!(summary.starts_with("Hydrogen (H)"));
    assert!(summary.contains("Atomic number    1"));
    assert!(summary.contains("State            Gas"));
    assert!(summary.contains("Discovered by    Henry Cavendish"));

    // Unknown data fields are an explicit "none"
    let astatine = table.by_name("astatine").unwrap();
    assert!(astatine.to_string().contains("Melting point    none"));

    // BC discovery years are spelled out
    let copper = table.by_symbol("cu").unwrap();
    assert!(copper.to_string().contains("Discovery year   9000 BC"));
}

#[rstest]
fn records_serialise_to_json(table: &PeriodicTable) {
    let helium = table.by_symbol("he").unwrap();
    let json: serde_json::Value = serde_json::from_str(&helium.to_json().unwrap()).unwrap();

    assert_eq!(json["name"], "Helium");
    assert_eq!(json["symbol"], "He");
    assert_eq!(json["atomic_number"], 2);
    assert_eq!(json["state"], "gas");

    let astatine = table.by_name("astatine").unwrap();
    let json: serde_json::Value = serde_json::from_str(&astatine.to_json().unwrap()).unwrap();
    assert!(json["melting_point_k"].is_null());
    assert!(json["state"].is_null());
}
