//! Embedded dataset for the 118 known chemical elements
//!
//! One record per element in ascending atomic number order. Temperatures
//! are in kelvin, densities in g/cm³ at room temperature, and masses in
//! unified atomic mass units (u). Fields without measured data are
//! explicitly `None`.

// internal modules
use crate::element::{Element, State};

/// Number of known chemical elements
pub const NUMBER_OF_ELEMENTS: usize = 118;

/// The canonical element records, hydrogen through oganesson
pub(crate) static ELEMENTS: [Element; NUMBER_OF_ELEMENTS] = [
    Element {
        name: "Hydrogen",
        symbol: "H",
        atomic_number: 1,
        atomic_mass: 1.008,
        shells: &[1],
        state: Some(State::Gas),
        group: Some(1),
        period: 1,
        melting_point_k: Some(13.99),
        boiling_point_k: Some(20.271),
        density: Some(8.988e-05),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Henry Cavendish"),
        discovery_year: Some(1766),
    },
    Element {
        name: "Helium",
        symbol: "He",
        atomic_number: 2,
        atomic_mass: 4.0026,
        shells: &[2],
        state: Some(State::Gas),
        group: Some(18),
        period: 1,
        melting_point_k: Some(0.95),
        boiling_point_k: Some(4.222),
        density: Some(0.0001786),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Pierre Janssen, Norman Lockyer"),
        discovery_year: Some(1868),
    },
    Element {
        name: "Lithium",
        symbol: "Li",
        atomic_number: 3,
        atomic_mass: 6.94,
        shells: &[2, 1],
        state: Some(State::Solid),
        group: Some(1),
        period: 2,
        melting_point_k: Some(453.65),
        boiling_point_k: Some(1603.0),
        density: Some(0.534),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Johan August Arfwedson"),
        discovery_year: Some(1817),
    },
    Element {
        name: "Beryllium",
        symbol: "Be",
        atomic_number: 4,
        atomic_mass: 9.0122,
        shells: &[2, 2],
        state: Some(State::Solid),
        group: Some(2),
        period: 2,
        melting_point_k: Some(1560.0),
        boiling_point_k: Some(2742.0),
        density: Some(1.85),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Louis Nicolas Vauquelin"),
        discovery_year: Some(1798),
    },
    Element {
        name: "Boron",
        symbol: "B",
        atomic_number: 5,
        atomic_mass: 10.81,
        shells: &[2, 3],
        state: Some(State::Solid),
        group: Some(13),
        period: 2,
        melting_point_k: Some(2349.0),
        boiling_point_k: Some(4200.0),
        density: Some(2.34),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Joseph Louis Gay-Lussac, Louis Jacques Thénard"),
        discovery_year: Some(1808),
    },
    Element {
        name: "Carbon",
        symbol: "C",
        atomic_number: 6,
        atomic_mass: 12.011,
        shells: &[2, 4],
        state: Some(State::Solid),
        group: Some(14),
        period: 2,
        melting_point_k: Some(3823.0),
        boiling_point_k: Some(5100.0),
        density: Some(2.27),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Antoine Lavoisier"),
        discovery_year: Some(1789),
    },
    Element {
        name: "Nitrogen",
        symbol: "N",
        atomic_number: 7,
        atomic_mass: 14.007,
        shells: &[2, 5],
        state: Some(State::Gas),
        group: Some(15),
        period: 2,
        melting_point_k: Some(63.23),
        boiling_point_k: Some(77.355),
        density: Some(0.00125),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Daniel Rutherford"),
        discovery_year: Some(1772),
    },
    Element {
        name: "Oxygen",
        symbol: "O",
        atomic_number: 8,
        atomic_mass: 15.999,
        shells: &[2, 6],
        state: Some(State::Gas),
        group: Some(16),
        period: 2,
        melting_point_k: Some(54.36),
        boiling_point_k: Some(90.188),
        density: Some(0.001429),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Carl Wilhelm Scheele"),
        discovery_year: Some(1771),
    },
    Element {
        name: "Fluorine",
        symbol: "F",
        atomic_number: 9,
        atomic_mass: 18.998,
        shells: &[2, 7],
        state: Some(State::Gas),
        group: Some(17),
        period: 2,
        melting_point_k: Some(53.48),
        boiling_point_k: Some(85.03),
        density: Some(0.001696),
        natural: true,
        stable_isotope: true,
        discoverer: Some("André-Marie Ampère"),
        discovery_year: Some(1810),
    },
    Element {
        name: "Neon",
        symbol: "Ne",
        atomic_number: 10,
        atomic_mass: 20.18,
        shells: &[2, 8],
        state: Some(State::Gas),
        group: Some(18),
        period: 2,
        melting_point_k: Some(24.56),
        boiling_point_k: Some(27.104),
        density: Some(0.0009002),
        natural: true,
        stable_isotope: true,
        discoverer: Some("William Ramsay, Morris Travers"),
        discovery_year: Some(1898),
    },
    Element {
        name: "Sodium",
        symbol: "Na",
        atomic_number: 11,
        atomic_mass: 22.99,
        shells: &[2, 8, 1],
        state: Some(State::Solid),
        group: Some(1),
        period: 3,
        melting_point_k: Some(370.944),
        boiling_point_k: Some(1156.09),
        density: Some(0.968),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Humphry Davy"),
        discovery_year: Some(1807),
    },
    Element {
        name: "Magnesium",
        symbol: "Mg",
        atomic_number: 12,
        atomic_mass: 24.305,
        shells: &[2, 8, 2],
        state: Some(State::Solid),
        group: Some(2),
        period: 3,
        melting_point_k: Some(923.0),
        boiling_point_k: Some(1363.0),
        density: Some(1.738),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Joseph Black"),
        discovery_year: Some(1755),
    },
    Element {
        name: "Aluminium",
        symbol: "Al",
        atomic_number: 13,
        atomic_mass: 26.982,
        shells: &[2, 8, 3],
        state: Some(State::Solid),
        group: Some(13),
        period: 3,
        melting_point_k: Some(933.47),
        boiling_point_k: Some(2743.0),
        density: Some(2.7),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Hans Christian Ørsted"),
        discovery_year: Some(1824),
    },
    Element {
        name: "Silicon",
        symbol: "Si",
        atomic_number: 14,
        atomic_mass: 28.085,
        shells: &[2, 8, 4],
        state: Some(State::Solid),
        group: Some(14),
        period: 3,
        melting_point_k: Some(1414.0),
        boiling_point_k: Some(3538.0),
        density: Some(2.329),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Jöns Jacob Berzelius"),
        discovery_year: Some(1823),
    },
    Element {
        name: "Phosphorus",
        symbol: "P",
        atomic_number: 15,
        atomic_mass: 30.974,
        shells: &[2, 8, 5],
        state: Some(State::Solid),
        group: Some(15),
        period: 3,
        melting_point_k: Some(317.3),
        boiling_point_k: Some(553.7),
        density: Some(1.823),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Hennig Brand"),
        discovery_year: Some(1669),
    },
    Element {
        name: "Sulfur",
        symbol: "S",
        atomic_number: 16,
        atomic_mass: 32.06,
        shells: &[2, 8, 6],
        state: Some(State::Solid),
        group: Some(16),
        period: 3,
        melting_point_k: Some(388.36),
        boiling_point_k: Some(717.8),
        density: Some(2.07),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Antoine Lavoisier"),
        discovery_year: Some(1777),
    },
    Element {
        name: "Chlorine",
        symbol: "Cl",
        atomic_number: 17,
        atomic_mass: 35.45,
        shells: &[2, 8, 7],
        state: Some(State::Gas),
        group: Some(17),
        period: 3,
        melting_point_k: Some(171.6),
        boiling_point_k: Some(239.11),
        density: Some(0.0032),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Carl Wilhelm Scheele"),
        discovery_year: Some(1774),
    },
    Element {
        name: "Argon",
        symbol: "Ar",
        atomic_number: 18,
        atomic_mass: 39.95,
        shells: &[2, 8, 8],
        state: Some(State::Gas),
        group: Some(18),
        period: 3,
        melting_point_k: Some(83.81),
        boiling_point_k: Some(87.302),
        density: Some(0.001784),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Lord Rayleigh, William Ramsay"),
        discovery_year: Some(1894),
    },
    Element {
        name: "Potassium",
        symbol: "K",
        atomic_number: 19,
        atomic_mass: 39.098,
        shells: &[2, 8, 8, 1],
        state: Some(State::Solid),
        group: Some(1),
        period: 4,
        melting_point_k: Some(336.7),
        boiling_point_k: Some(1032.0),
        density: Some(0.89),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Humphry Davy"),
        discovery_year: Some(1807),
    },
    Element {
        name: "Calcium",
        symbol: "Ca",
        atomic_number: 20,
        atomic_mass: 40.078,
        shells: &[2, 8, 8, 2],
        state: Some(State::Solid),
        group: Some(2),
        period: 4,
        melting_point_k: Some(1115.0),
        boiling_point_k: Some(1757.0),
        density: Some(1.55),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Humphry Davy"),
        discovery_year: Some(1808),
    },
    Element {
        name: "Scandium",
        symbol: "Sc",
        atomic_number: 21,
        atomic_mass: 44.956,
        shells: &[2, 8, 9, 2],
        state: Some(State::Solid),
        group: Some(3),
        period: 4,
        melting_point_k: Some(1814.0),
        boiling_point_k: Some(3109.0),
        density: Some(2.985),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Lars Fredrik Nilson"),
        discovery_year: Some(1879),
    },
    Element {
        name: "Titanium",
        symbol: "Ti",
        atomic_number: 22,
        atomic_mass: 47.867,
        shells: &[2, 8, 10, 2],
        state: Some(State::Solid),
        group: Some(4),
        period: 4,
        melting_point_k: Some(1941.0),
        boiling_point_k: Some(3560.0),
        density: Some(4.506),
        natural: true,
        stable_isotope: true,
        discoverer: Some("William Gregor"),
        discovery_year: Some(1791),
    },
    Element {
        name: "Vanadium",
        symbol: "V",
        atomic_number: 23,
        atomic_mass: 50.942,
        shells: &[2, 8, 11, 2],
        state: Some(State::Solid),
        group: Some(5),
        period: 4,
        melting_point_k: Some(2183.0),
        boiling_point_k: Some(3680.0),
        density: Some(6.11),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Nils Gabriel Sefström"),
        discovery_year: Some(1830),
    },
    Element {
        name: "Chromium",
        symbol: "Cr",
        atomic_number: 24,
        atomic_mass: 51.996,
        shells: &[2, 8, 13, 1],
        state: Some(State::Solid),
        group: Some(6),
        period: 4,
        melting_point_k: Some(2180.0),
        boiling_point_k: Some(2944.0),
        density: Some(7.15),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Louis Nicolas Vauquelin"),
        discovery_year: Some(1794),
    },
    Element {
        name: "Manganese",
        symbol: "Mn",
        atomic_number: 25,
        atomic_mass: 54.938,
        shells: &[2, 8, 13, 2],
        state: Some(State::Solid),
        group: Some(7),
        period: 4,
        melting_point_k: Some(1519.0),
        boiling_point_k: Some(2334.0),
        density: Some(7.21),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Carl Wilhelm Scheele"),
        discovery_year: Some(1774),
    },
    Element {
        name: "Iron",
        symbol: "Fe",
        atomic_number: 26,
        atomic_mass: 55.845,
        shells: &[2, 8, 14, 2],
        state: Some(State::Solid),
        group: Some(8),
        period: 4,
        melting_point_k: Some(1811.0),
        boiling_point_k: Some(3134.0),
        density: Some(7.874),
        natural: true,
        stable_isotope: true,
        discoverer: None,
        discovery_year: None,
    },
    Element {
        name: "Cobalt",
        symbol: "Co",
        atomic_number: 27,
        atomic_mass: 58.933,
        shells: &[2, 8, 15, 2],
        state: Some(State::Solid),
        group: Some(9),
        period: 4,
        melting_point_k: Some(1768.0),
        boiling_point_k: Some(3200.0),
        density: Some(8.9),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Georg Brandt"),
        discovery_year: Some(1735),
    },
    Element {
        name: "Nickel",
        symbol: "Ni",
        atomic_number: 28,
        atomic_mass: 58.693,
        shells: &[2, 8, 16, 2],
        state: Some(State::Solid),
        group: Some(10),
        period: 4,
        melting_point_k: Some(1728.0),
        boiling_point_k: Some(3003.0),
        density: Some(8.908),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Axel Fredrik Cronstedt"),
        discovery_year: Some(1751),
    },
    Element {
        name: "Copper",
        symbol: "Cu",
        atomic_number: 29,
        atomic_mass: 63.546,
        shells: &[2, 8, 18, 1],
        state: Some(State::Solid),
        group: Some(11),
        period: 4,
        melting_point_k: Some(1357.77),
        boiling_point_k: Some(2835.0),
        density: Some(8.96),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Middle East"),
        discovery_year: Some(-9000),
    },
    Element {
        name: "Zinc",
        symbol: "Zn",
        atomic_number: 30,
        atomic_mass: 65.38,
        shells: &[2, 8, 18, 2],
        state: Some(State::Solid),
        group: Some(12),
        period: 4,
        melting_point_k: Some(692.68),
        boiling_point_k: Some(1180.0),
        density: Some(7.14),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Andreas Sigismund Marggraf"),
        discovery_year: Some(1746),
    },
    Element {
        name: "Gallium",
        symbol: "Ga",
        atomic_number: 31,
        atomic_mass: 69.723,
        shells: &[2, 8, 18, 3],
        state: Some(State::Solid),
        group: Some(13),
        period: 4,
        melting_point_k: Some(302.9146),
        boiling_point_k: Some(2673.0),
        density: Some(5.91),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Lecoq de Boisbaudran"),
        discovery_year: Some(1875),
    },
    Element {
        name: "Germanium",
        symbol: "Ge",
        atomic_number: 32,
        atomic_mass: 72.63,
        shells: &[2, 8, 18, 4],
        state: Some(State::Solid),
        group: Some(14),
        period: 4,
        melting_point_k: Some(1211.4),
        boiling_point_k: Some(3106.0),
        density: Some(5.323),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Clemens Winkler"),
        discovery_year: Some(1886),
    },
    Element {
        name: "Arsenic",
        symbol: "As",
        atomic_number: 33,
        atomic_mass: 74.922,
        shells: &[2, 8, 18, 5],
        state: Some(State::Solid),
        group: Some(15),
        period: 4,
        melting_point_k: Some(1090.0),
        boiling_point_k: Some(887.0),
        density: Some(5.727),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Albertus Magnus"),
        discovery_year: Some(1250),
    },
    Element {
        name: "Selenium",
        symbol: "Se",
        atomic_number: 34,
        atomic_mass: 78.971,
        shells: &[2, 8, 18, 6],
        state: Some(State::Solid),
        group: Some(16),
        period: 4,
        melting_point_k: Some(494.0),
        boiling_point_k: Some(958.0),
        density: Some(4.81),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Jöns Jakob Berzelius"),
        discovery_year: Some(1817),
    },
    Element {
        name: "Bromine",
        symbol: "Br",
        atomic_number: 35,
        atomic_mass: 79.904,
        shells: &[2, 8, 18, 7],
        state: Some(State::Liquid),
        group: Some(17),
        period: 4,
        melting_point_k: Some(265.8),
        boiling_point_k: Some(332.0),
        density: Some(3.1028),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Antoine Jérôme Balard"),
        discovery_year: Some(1825),
    },
    Element {
        name: "Krypton",
        symbol: "Kr",
        atomic_number: 36,
        atomic_mass: 83.798,
        shells: &[2, 8, 18, 8],
        state: Some(State::Gas),
        group: Some(18),
        period: 4,
        melting_point_k: Some(115.78),
        boiling_point_k: Some(119.93),
        density: Some(0.003749),
        natural: true,
        stable_isotope: true,
        discoverer: Some("William Ramsay, Morris Travers"),
        discovery_year: Some(1898),
    },
    Element {
        name: "Rubidium",
        symbol: "Rb",
        atomic_number: 37,
        atomic_mass: 85.468,
        shells: &[2, 8, 18, 8, 1],
        state: Some(State::Solid),
        group: Some(1),
        period: 5,
        melting_point_k: Some(312.45),
        boiling_point_k: Some(961.0),
        density: Some(1.532),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Robert Bunsen, Gustav Kirchhoff"),
        discovery_year: Some(1861),
    },
    Element {
        name: "Strontium",
        symbol: "Sr",
        atomic_number: 38,
        atomic_mass: 87.62,
        shells: &[2, 8, 18, 8, 2],
        state: Some(State::Solid),
        group: Some(2),
        period: 5,
        melting_point_k: Some(1050.0),
        boiling_point_k: Some(1650.0),
        density: Some(2.64),
        natural: true,
        stable_isotope: true,
        discoverer: Some("William Cruickshank"),
        discovery_year: Some(1787),
    },
    Element {
        name: "Yttrium",
        symbol: "Y",
        atomic_number: 39,
        atomic_mass: 88.906,
        shells: &[2, 8, 18, 9, 2],
        state: Some(State::Solid),
        group: Some(3),
        period: 5,
        melting_point_k: Some(1799.0),
        boiling_point_k: Some(3203.0),
        density: Some(4.472),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Johan Gadolin"),
        discovery_year: Some(1794),
    },
    Element {
        name: "Zirconium",
        symbol: "Zr",
        atomic_number: 40,
        atomic_mass: 91.224,
        shells: &[2, 8, 18, 10, 2],
        state: Some(State::Solid),
        group: Some(4),
        period: 5,
        melting_point_k: Some(2125.0),
        boiling_point_k: Some(4650.0),
        density: Some(6.52),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Martin Heinrich Klaproth"),
        discovery_year: Some(1789),
    },
    Element {
        name: "Niobium",
        symbol: "Nb",
        atomic_number: 41,
        atomic_mass: 92.906,
        shells: &[2, 8, 18, 12, 1],
        state: Some(State::Solid),
        group: Some(5),
        period: 5,
        melting_point_k: Some(2750.0),
        boiling_point_k: Some(5017.0),
        density: Some(8.57),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Charles Hatchett"),
        discovery_year: Some(1801),
    },
    Element {
        name: "Molybdenum",
        symbol: "Mo",
        atomic_number: 42,
        atomic_mass: 95.95,
        shells: &[2, 8, 18, 13, 1],
        state: Some(State::Solid),
        group: Some(6),
        period: 5,
        melting_point_k: Some(2896.0),
        boiling_point_k: Some(4912.0),
        density: Some(10.28),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Carl Wilhelm Scheele"),
        discovery_year: Some(1778),
    },
    Element {
        name: "Technetium",
        symbol: "Tc",
        atomic_number: 43,
        atomic_mass: 98.0,
        shells: &[2, 8, 18, 13, 2],
        state: Some(State::Solid),
        group: Some(7),
        period: 5,
        melting_point_k: Some(2430.0),
        boiling_point_k: Some(4538.0),
        density: Some(11.0),
        natural: true,
        stable_isotope: false,
        discoverer: Some("Emilio Segrè, Carlo Perrier"),
        discovery_year: Some(1937),
    },
    Element {
        name: "Ruthenium",
        symbol: "Ru",
        atomic_number: 44,
        atomic_mass: 101.07,
        shells: &[2, 8, 18, 15, 1],
        state: Some(State::Solid),
        group: Some(8),
        period: 5,
        melting_point_k: Some(2607.0),
        boiling_point_k: Some(4423.0),
        density: Some(12.45),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Karl Ernst Claus"),
        discovery_year: Some(1844),
    },
    Element {
        name: "Rhodium",
        symbol: "Rh",
        atomic_number: 45,
        atomic_mass: 102.91,
        shells: &[2, 8, 18, 16, 1],
        state: Some(State::Solid),
        group: Some(9),
        period: 5,
        melting_point_k: Some(2237.0),
        boiling_point_k: Some(3968.0),
        density: Some(12.41),
        natural: true,
        stable_isotope: true,
        discoverer: Some("William Hyde Wollaston"),
        discovery_year: Some(1804),
    },
    Element {
        name: "Palladium",
        symbol: "Pd",
        atomic_number: 46,
        atomic_mass: 106.42,
        shells: &[2, 8, 18, 18],
        state: Some(State::Solid),
        group: Some(10),
        period: 5,
        melting_point_k: Some(1828.05),
        boiling_point_k: Some(3236.0),
        density: Some(12.023),
        natural: true,
        stable_isotope: true,
        discoverer: Some("William Hyde Wollaston"),
        discovery_year: Some(1802),
    },
    Element {
        name: "Silver",
        symbol: "Ag",
        atomic_number: 47,
        atomic_mass: 107.87,
        shells: &[2, 8, 18, 18, 1],
        state: Some(State::Solid),
        group: Some(11),
        period: 5,
        melting_point_k: Some(1234.93),
        boiling_point_k: Some(2435.0),
        density: Some(10.49),
        natural: true,
        stable_isotope: true,
        discoverer: None,
        discovery_year: None,
    },
    Element {
        name: "Cadmium",
        symbol: "Cd",
        atomic_number: 48,
        atomic_mass: 112.41,
        shells: &[2, 8, 18, 18, 2],
        state: Some(State::Solid),
        group: Some(12),
        period: 5,
        melting_point_k: Some(594.22),
        boiling_point_k: Some(1040.0),
        density: Some(8.65),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Karl Samuel Leberecht Hermann, Friedrich Stromeyer"),
        discovery_year: Some(1817),
    },
    Element {
        name: "Indium",
        symbol: "In",
        atomic_number: 49,
        atomic_mass: 114.82,
        shells: &[2, 8, 18, 18, 3],
        state: Some(State::Solid),
        group: Some(13),
        period: 5,
        melting_point_k: Some(429.7485),
        boiling_point_k: Some(2345.0),
        density: Some(7.31),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Ferdinand Reich, Hieronymous Theodor Richter"),
        discovery_year: Some(1863),
    },
    Element {
        name: "Tin",
        symbol: "Sn",
        atomic_number: 50,
        atomic_mass: 118.71,
        shells: &[2, 8, 18, 18, 4],
        state: Some(State::Solid),
        group: Some(14),
        period: 5,
        melting_point_k: Some(505.08),
        boiling_point_k: Some(2875.0),
        density: Some(7.265),
        natural: true,
        stable_isotope: true,
        discoverer: None,
        discovery_year: None,
    },
    Element {
        name: "Antimony",
        symbol: "Sb",
        atomic_number: 51,
        atomic_mass: 121.76,
        shells: &[2, 8, 18, 18, 5],
        state: Some(State::Solid),
        group: Some(15),
        period: 5,
        melting_point_k: Some(903.78),
        boiling_point_k: Some(1908.0),
        density: Some(6.697),
        natural: true,
        stable_isotope: true,
        discoverer: None,
        discovery_year: None,
    },
    Element {
        name: "Tellurium",
        symbol: "Te",
        atomic_number: 52,
        atomic_mass: 127.6,
        shells: &[2, 8, 18, 18, 6],
        state: Some(State::Solid),
        group: Some(16),
        period: 5,
        melting_point_k: Some(722.66),
        boiling_point_k: Some(1261.0),
        density: Some(6.24),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Franz-Joseph Müller von Reichenstein"),
        discovery_year: Some(1782),
    },
    Element {
        name: "Iodine",
        symbol: "I",
        atomic_number: 53,
        atomic_mass: 126.9,
        shells: &[2, 8, 18, 18, 7],
        state: Some(State::Solid),
        group: Some(17),
        period: 5,
        melting_point_k: Some(386.85),
        boiling_point_k: Some(457.4),
        density: Some(4.933),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Bernard Courtois"),
        discovery_year: Some(1811),
    },
    Element {
        name: "Xenon",
        symbol: "Xe",
        atomic_number: 54,
        atomic_mass: 131.29,
        shells: &[2, 8, 18, 18, 8],
        state: Some(State::Gas),
        group: Some(18),
        period: 5,
        melting_point_k: Some(161.4),
        boiling_point_k: Some(165.051),
        density: Some(0.005894),
        natural: true,
        stable_isotope: true,
        discoverer: Some("William Ramsay, Morris Travers"),
        discovery_year: Some(1898),
    },
    Element {
        name: "Caesium",
        symbol: "Cs",
        atomic_number: 55,
        atomic_mass: 132.91,
        shells: &[2, 8, 18, 18, 8, 1],
        state: Some(State::Solid),
        group: Some(1),
        period: 6,
        melting_point_k: Some(301.7),
        boiling_point_k: Some(944.0),
        density: Some(1.93),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Robert Bunsen, Gustav Kirchhoff"),
        discovery_year: Some(1860),
    },
    Element {
        name: "Barium",
        symbol: "Ba",
        atomic_number: 56,
        atomic_mass: 137.33,
        shells: &[2, 8, 18, 18, 8, 2],
        state: Some(State::Solid),
        group: Some(2),
        period: 6,
        melting_point_k: Some(1000.0),
        boiling_point_k: Some(2118.0),
        density: Some(3.51),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Carl Wilhelm Scheele"),
        discovery_year: Some(1772),
    },
    Element {
        name: "Lanthanum",
        symbol: "La",
        atomic_number: 57,
        atomic_mass: 138.91,
        shells: &[2, 8, 18, 18, 9, 2],
        state: Some(State::Solid),
        group: None,
        period: 6,
        melting_point_k: Some(1193.0),
        boiling_point_k: Some(3737.0),
        density: Some(6.162),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Carl Gustaf Mosander"),
        discovery_year: Some(1838),
    },
    Element {
        name: "Cerium",
        symbol: "Ce",
        atomic_number: 58,
        atomic_mass: 140.12,
        shells: &[2, 8, 18, 19, 9, 2],
        state: Some(State::Solid),
        group: None,
        period: 6,
        melting_point_k: Some(1068.0),
        boiling_point_k: Some(3716.0),
        density: Some(6.77),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Martin Heinrich Klaproth, Jöns Jakob Berzelius, Wilhelm Hisinger"),
        discovery_year: Some(1803),
    },
    Element {
        name: "Praseodymium",
        symbol: "Pr",
        atomic_number: 59,
        atomic_mass: 140.91,
        shells: &[2, 8, 18, 21, 8, 2],
        state: Some(State::Solid),
        group: None,
        period: 6,
        melting_point_k: Some(1208.0),
        boiling_point_k: Some(3403.0),
        density: Some(6.77),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Carl Auer von Welsbach"),
        discovery_year: Some(1885),
    },
    Element {
        name: "Neodymium",
        symbol: "Nd",
        atomic_number: 60,
        atomic_mass: 144.24,
        shells: &[2, 8, 18, 22, 8, 2],
        state: Some(State::Solid),
        group: None,
        period: 6,
        melting_point_k: Some(1297.0),
        boiling_point_k: Some(3347.0),
        density: Some(7.01),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Carl Auer von Welsbach"),
        discovery_year: Some(1885),
    },
    Element {
        name: "Promethium",
        symbol: "Pm",
        atomic_number: 61,
        atomic_mass: 145.0,
        shells: &[2, 8, 18, 23, 8, 2],
        state: Some(State::Solid),
        group: None,
        period: 6,
        melting_point_k: Some(1315.0),
        boiling_point_k: Some(3273.0),
        density: Some(7.26),
        natural: true,
        stable_isotope: false,
        discoverer: Some("Charles D. Coryell, Jacob A. Marinsky, Lawrence E. Glendenin"),
        discovery_year: Some(1945),
    },
    Element {
        name: "Samarium",
        symbol: "Sm",
        atomic_number: 62,
        atomic_mass: 150.36,
        shells: &[2, 8, 18, 24, 8, 2],
        state: Some(State::Solid),
        group: None,
        period: 6,
        melting_point_k: Some(1345.0),
        boiling_point_k: Some(2173.0),
        density: Some(7.52),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Lecoq de Boisbaudran"),
        discovery_year: Some(1879),
    },
    Element {
        name: "Europium",
        symbol: "Eu",
        atomic_number: 63,
        atomic_mass: 151.96,
        shells: &[2, 8, 18, 25, 8, 2],
        state: Some(State::Solid),
        group: None,
        period: 6,
        melting_point_k: Some(1099.0),
        boiling_point_k: Some(1802.0),
        density: Some(5.244),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Eugène-Anatole Demarçay"),
        discovery_year: Some(1896),
    },
    Element {
        name: "Gadolinium",
        symbol: "Gd",
        atomic_number: 64,
        atomic_mass: 157.25,
        shells: &[2, 8, 18, 25, 9, 2],
        state: Some(State::Solid),
        group: None,
        period: 6,
        melting_point_k: Some(1585.0),
        boiling_point_k: Some(3273.0),
        density: Some(7.9),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Jean Charles Galissard de Marignac"),
        discovery_year: Some(1880),
    },
    Element {
        name: "Terbium",
        symbol: "Tb",
        atomic_number: 65,
        atomic_mass: 158.93,
        shells: &[2, 8, 18, 27, 8, 2],
        state: Some(State::Solid),
        group: None,
        period: 6,
        melting_point_k: Some(1629.0),
        boiling_point_k: Some(3396.0),
        density: Some(8.23),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Carl Gustaf Mosander"),
        discovery_year: Some(1843),
    },
    Element {
        name: "Dysprosium",
        symbol: "Dy",
        atomic_number: 66,
        atomic_mass: 162.5,
        shells: &[2, 8, 18, 28, 8, 2],
        state: Some(State::Solid),
        group: None,
        period: 6,
        melting_point_k: Some(1680.0),
        boiling_point_k: Some(2840.0),
        density: Some(8.54),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Lecoq de Boisbaudran"),
        discovery_year: Some(1886),
    },
    Element {
        name: "Holmium",
        symbol: "Ho",
        atomic_number: 67,
        atomic_mass: 164.93,
        shells: &[2, 8, 18, 29, 8, 2],
        state: Some(State::Solid),
        group: None,
        period: 6,
        melting_point_k: Some(1734.0),
        boiling_point_k: Some(2873.0),
        density: Some(8.79),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Jacques-Louis Soret, Marc Delafontaine, Per Teodor Cleve"),
        discovery_year: Some(1878),
    },
    Element {
        name: "Erbium",
        symbol: "Er",
        atomic_number: 68,
        atomic_mass: 167.26,
        shells: &[2, 8, 18, 30, 8, 2],
        state: Some(State::Solid),
        group: None,
        period: 6,
        melting_point_k: Some(1802.0),
        boiling_point_k: Some(3141.0),
        density: Some(9.066),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Carl Gustaf Mosander"),
        discovery_year: Some(1843),
    },
    Element {
        name: "Thulium",
        symbol: "Tm",
        atomic_number: 69,
        atomic_mass: 168.93,
        shells: &[2, 8, 18, 31, 8, 2],
        state: Some(State::Solid),
        group: None,
        period: 6,
        melting_point_k: Some(1818.0),
        boiling_point_k: Some(2223.0),
        density: Some(9.32),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Per Teodor Cleve"),
        discovery_year: Some(1879),
    },
    Element {
        name: "Ytterbium",
        symbol: "Yb",
        atomic_number: 70,
        atomic_mass: 173.05,
        shells: &[2, 8, 18, 32, 8, 2],
        state: Some(State::Solid),
        group: None,
        period: 6,
        melting_point_k: Some(1097.0),
        boiling_point_k: Some(1469.0),
        density: Some(6.9),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Jean Charles Galissard de Marignac"),
        discovery_year: Some(1878),
    },
    Element {
        name: "Lutetium",
        symbol: "Lu",
        atomic_number: 71,
        atomic_mass: 174.97,
        shells: &[2, 8, 18, 32, 9, 2],
        state: Some(State::Solid),
        group: Some(3),
        period: 6,
        melting_point_k: Some(1925.0),
        boiling_point_k: Some(3675.0),
        density: Some(9.841),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Carl Auer von Welsbach, Georges Urbain"),
        discovery_year: Some(1906),
    },
    Element {
        name: "Hafnium",
        symbol: "Hf",
        atomic_number: 72,
        atomic_mass: 178.49,
        shells: &[2, 8, 18, 32, 10, 2],
        state: Some(State::Solid),
        group: Some(4),
        period: 6,
        melting_point_k: Some(2506.0),
        boiling_point_k: Some(4876.0),
        density: Some(13.31),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Dirk Coster, George de Hevesy"),
        discovery_year: Some(1922),
    },
    Element {
        name: "Tantalum",
        symbol: "Ta",
        atomic_number: 73,
        atomic_mass: 180.95,
        shells: &[2, 8, 18, 32, 11, 2],
        state: Some(State::Solid),
        group: Some(5),
        period: 6,
        melting_point_k: Some(3290.0),
        boiling_point_k: Some(5731.0),
        density: Some(16.69),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Anders Gustaf Ekeberg"),
        discovery_year: Some(1802),
    },
    Element {
        name: "Tungsten",
        symbol: "W",
        atomic_number: 74,
        atomic_mass: 183.84,
        shells: &[2, 8, 18, 32, 12, 2],
        state: Some(State::Solid),
        group: Some(6),
        period: 6,
        melting_point_k: Some(3695.0),
        boiling_point_k: Some(6203.0),
        density: Some(19.25),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Juan José Elhuyar, Fausto Elhuyar"),
        discovery_year: Some(1783),
    },
    Element {
        name: "Rhenium",
        symbol: "Re",
        atomic_number: 75,
        atomic_mass: 186.21,
        shells: &[2, 8, 18, 32, 13, 2],
        state: Some(State::Solid),
        group: Some(7),
        period: 6,
        melting_point_k: Some(3459.0),
        boiling_point_k: Some(5903.0),
        density: Some(21.02),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Walter Noddack, Ida Noddack, Otto Berg"),
        discovery_year: Some(1925),
    },
    Element {
        name: "Osmium",
        symbol: "Os",
        atomic_number: 76,
        atomic_mass: 190.23,
        shells: &[2, 8, 18, 32, 14, 2],
        state: Some(State::Solid),
        group: Some(8),
        period: 6,
        melting_point_k: Some(3306.0),
        boiling_point_k: Some(5285.0),
        density: Some(22.59),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Smithson Tennant"),
        discovery_year: Some(1803),
    },
    Element {
        name: "Iridium",
        symbol: "Ir",
        atomic_number: 77,
        atomic_mass: 192.22,
        shells: &[2, 8, 18, 32, 15, 2],
        state: Some(State::Solid),
        group: Some(9),
        period: 6,
        melting_point_k: Some(2719.0),
        boiling_point_k: Some(4403.0),
        density: Some(22.56),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Smithson Tennant"),
        discovery_year: Some(1803),
    },
    Element {
        name: "Platinum",
        symbol: "Pt",
        atomic_number: 78,
        atomic_mass: 195.08,
        shells: &[2, 8, 18, 32, 17, 1],
        state: Some(State::Solid),
        group: Some(10),
        period: 6,
        melting_point_k: Some(2041.4),
        boiling_point_k: Some(4098.0),
        density: Some(21.45),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Antonio de Ulloa"),
        discovery_year: Some(1735),
    },
    Element {
        name: "Gold",
        symbol: "Au",
        atomic_number: 79,
        atomic_mass: 196.97,
        shells: &[2, 8, 18, 32, 18, 1],
        state: Some(State::Solid),
        group: Some(11),
        period: 6,
        melting_point_k: Some(1337.33),
        boiling_point_k: Some(3243.0),
        density: Some(19.3),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Middle East"),
        discovery_year: None,
    },
    Element {
        name: "Mercury",
        symbol: "Hg",
        atomic_number: 80,
        atomic_mass: 200.59,
        shells: &[2, 8, 18, 32, 18, 2],
        state: Some(State::Liquid),
        group: Some(12),
        period: 6,
        melting_point_k: Some(234.321),
        boiling_point_k: Some(629.88),
        density: Some(13.534),
        natural: true,
        stable_isotope: true,
        discoverer: None,
        discovery_year: None,
    },
    Element {
        name: "Thallium",
        symbol: "Tl",
        atomic_number: 81,
        atomic_mass: 204.38,
        shells: &[2, 8, 18, 32, 18, 3],
        state: Some(State::Solid),
        group: Some(13),
        period: 6,
        melting_point_k: Some(577.0),
        boiling_point_k: Some(1746.0),
        density: Some(11.85),
        natural: true,
        stable_isotope: true,
        discoverer: Some("William Crookes"),
        discovery_year: Some(1861),
    },
    Element {
        name: "Lead",
        symbol: "Pb",
        atomic_number: 82,
        atomic_mass: 207.2,
        shells: &[2, 8, 18, 32, 18, 4],
        state: Some(State::Solid),
        group: Some(14),
        period: 6,
        melting_point_k: Some(600.61),
        boiling_point_k: Some(2022.0),
        density: Some(11.34),
        natural: true,
        stable_isotope: true,
        discoverer: Some("Middle East"),
        discovery_year: None,
    },
    Element {
        name: "Bismuth",
        symbol: "Bi",
        atomic_number: 83,
        atomic_mass: 208.98,
        shells: &[2, 8, 18, 32, 18, 5],
        state: Some(State::Solid),
        group: Some(15),
        period: 6,
        melting_point_k: Some(544.7),
        boiling_point_k: Some(1837.0),
        density: Some(9.78),
        natural: true,
        stable_isotope: false,
        discoverer: Some("Claude François Geoffroy"),
        discovery_year: Some(1753),
    },
    Element {
        name: "Polonium",
        symbol: "Po",
        atomic_number: 84,
        atomic_mass: 209.0,
        shells: &[2, 8, 18, 32, 18, 6],
        state: Some(State::Solid),
        group: Some(16),
        period: 6,
        melting_point_k: Some(527.0),
        boiling_point_k: Some(1235.0),
        density: Some(9.196),
        natural: true,
        stable_isotope: false,
        discoverer: Some("Marie Curie, Pierre Curie"),
        discovery_year: Some(1898),
    },
    Element {
        name: "Astatine",
        symbol: "At",
        atomic_number: 85,
        atomic_mass: 210.0,
        shells: &[2, 8, 18, 32, 18, 7],
        state: None,
        group: Some(17),
        period: 6,
        melting_point_k: None,
        boiling_point_k: None,
        density: None,
        natural: true,
        stable_isotope: false,
        discoverer: Some("Dale R. Corson, Kenneth R. Mackenzie, Emilio Segre"),
        discovery_year: Some(1940),
    },
    Element {
        name: "Radon",
        symbol: "Rn",
        atomic_number: 86,
        atomic_mass: 222.0,
        shells: &[2, 8, 18, 32, 18, 8],
        state: Some(State::Gas),
        group: Some(18),
        period: 6,
        melting_point_k: Some(202.0),
        boiling_point_k: Some(211.5),
        density: Some(0.00973),
        natural: true,
        stable_isotope: false,
        discoverer: Some("Ernest Rutherford, Robert B. Owens"),
        discovery_year: Some(1899),
    },
    Element {
        name: "Francium",
        symbol: "Fr",
        atomic_number: 87,
        atomic_mass: 223.0,
        shells: &[2, 8, 18, 32, 18, 8, 1],
        state: Some(State::Solid),
        group: Some(1),
        period: 7,
        melting_point_k: Some(300.0),
        boiling_point_k: Some(950.0),
        density: None,
        natural: true,
        stable_isotope: false,
        discoverer: Some("Marguerite Perey"),
        discovery_year: Some(1939),
    },
    Element {
        name: "Radium",
        symbol: "Ra",
        atomic_number: 88,
        atomic_mass: 226.0,
        shells: &[2, 8, 18, 32, 18, 8, 2],
        state: Some(State::Solid),
        group: Some(2),
        period: 7,
        melting_point_k: Some(973.0),
        boiling_point_k: Some(2010.0),
        density: Some(5.5),
        natural: true,
        stable_isotope: false,
        discoverer: Some("Marie Curie, Pierre Curie"),
        discovery_year: Some(1898),
    },
    Element {
        name: "Actinium",
        symbol: "Ac",
        atomic_number: 89,
        atomic_mass: 227.0,
        shells: &[2, 8, 18, 32, 18, 9, 2],
        state: Some(State::Solid),
        group: None,
        period: 7,
        melting_point_k: Some(1323.0),
        boiling_point_k: Some(3473.0),
        density: Some(10.0),
        natural: true,
        stable_isotope: false,
        discoverer: Some("Friedrich Oskar Giesel"),
        discovery_year: Some(1902),
    },
    Element {
        name: "Thorium",
        symbol: "Th",
        atomic_number: 90,
        atomic_mass: 232.04,
        shells: &[2, 8, 18, 32, 18, 10, 2],
        state: Some(State::Solid),
        group: None,
        period: 7,
        melting_point_k: Some(2023.0),
        boiling_point_k: Some(5061.0),
        density: Some(11.7),
        natural: true,
        stable_isotope: false,
        discoverer: Some("Jöns Jakob Berzelius"),
        discovery_year: Some(1829),
    },
    Element {
        name: "Protactinium",
        symbol: "Pa",
        atomic_number: 91,
        atomic_mass: 231.04,
        shells: &[2, 8, 18, 32, 20, 9, 2],
        state: Some(State::Solid),
        group: None,
        period: 7,
        melting_point_k: Some(1841.0),
        boiling_point_k: Some(4300.0),
        density: Some(15.37),
        natural: true,
        stable_isotope: false,
        discoverer: Some("Kasimir Fajans, Oswald Helmuth Göhring"),
        discovery_year: Some(1913),
    },
    Element {
        name: "Uranium",
        symbol: "U",
        atomic_number: 92,
        atomic_mass: 238.03,
        shells: &[2, 8, 18, 32, 21, 9, 2],
        state: Some(State::Solid),
        group: None,
        period: 7,
        melting_point_k: Some(1405.3),
        boiling_point_k: Some(4404.0),
        density: Some(19.1),
        natural: true,
        stable_isotope: false,
        discoverer: Some("Martin Heinrich Klaproth"),
        discovery_year: Some(1789),
    },
    Element {
        name: "Neptunium",
        symbol: "Np",
        atomic_number: 93,
        atomic_mass: 237.0,
        shells: &[2, 8, 18, 32, 22, 9, 2],
        state: Some(State::Solid),
        group: None,
        period: 7,
        melting_point_k: Some(912.0),
        boiling_point_k: None,
        density: Some(20.45),
        natural: true,
        stable_isotope: false,
        discoverer: Some("Edwin McMillan, Philip H. Abelson"),
        discovery_year: Some(1940),
    },
    Element {
        name: "Plutonium",
        symbol: "Pu",
        atomic_number: 94,
        atomic_mass: 244.0,
        shells: &[2, 8, 18, 32, 24, 8, 2],
        state: Some(State::Solid),
        group: None,
        period: 7,
        melting_point_k: Some(912.5),
        boiling_point_k: Some(3505.0),
        density: Some(19.85),
        natural: false,
        stable_isotope: false,
        discoverer: Some("Glenn T. Seaborg, Arthur Wahl, Joseph W. Kennedy, Edwin McMillan"),
        discovery_year: Some(1940),
    },
    Element {
        name: "Americium",
        symbol: "Am",
        atomic_number: 95,
        atomic_mass: 243.0,
        shells: &[2, 8, 18, 32, 25, 8, 2],
        state: Some(State::Solid),
        group: None,
        period: 7,
        melting_point_k: Some(1449.0),
        boiling_point_k: None,
        density: Some(12.0),
        natural: false,
        stable_isotope: false,
        discoverer: Some("Glenn T. Seaborg, Ralph A. James, Leon O. Morgan, Albert Ghiorso"),
        discovery_year: Some(1944),
    },
    Element {
        name: "Curium",
        symbol: "Cm",
        atomic_number: 96,
        atomic_mass: 247.0,
        shells: &[2, 8, 18, 32, 25, 9, 2],
        state: Some(State::Solid),
        group: None,
        period: 7,
        melting_point_k: Some(1613.0),
        boiling_point_k: Some(3383.0),
        density: Some(13.51),
        natural: false,
        stable_isotope: false,
        discoverer: Some("Glenn T. Seaborg, Ralph A. James, Albert Ghiorso"),
        discovery_year: Some(1944),
    },
    Element {
        name: "Berkelium",
        symbol: "Bk",
        atomic_number: 97,
        atomic_mass: 247.0,
        shells: &[2, 8, 18, 32, 27, 8, 2],
        state: Some(State::Solid),
        group: None,
        period: 7,
        melting_point_k: Some(1259.0),
        boiling_point_k: None,
        density: Some(14.78),
        natural: false,
        stable_isotope: false,
        discoverer: Some("Lawrence Berkeley National Laboratory"),
        discovery_year: Some(1949),
    },
    Element {
        name: "Californium",
        symbol: "Cf",
        atomic_number: 98,
        atomic_mass: 251.0,
        shells: &[2, 8, 18, 32, 28, 8, 2],
        state: Some(State::Solid),
        group: None,
        period: 7,
        melting_point_k: Some(1173.0),
        boiling_point_k: None,
        density: Some(15.1),
        natural: false,
        stable_isotope: false,
        discoverer: Some("Lawrence Berkeley National Laboratory"),
        discovery_year: Some(1950),
    },
    Element {
        name: "Einsteinium",
        symbol: "Es",
        atomic_number: 99,
        atomic_mass: 252.0,
        shells: &[2, 8, 18, 32, 29, 8, 2],
        state: Some(State::Solid),
        group: None,
        period: 7,
        melting_point_k: Some(1133.0),
        boiling_point_k: None,
        density: Some(8.84),
        natural: false,
        stable_isotope: false,
        discoverer: Some("Lawrence Berkeley National Laboratory"),
        discovery_year: Some(1952),
    },
    Element {
        name: "Fermium",
        symbol: "Fm",
        atomic_number: 100,
        atomic_mass: 257.0,
        shells: &[2, 8, 18, 32, 30, 8, 2],
        state: Some(State::Solid),
        group: None,
        period: 7,
        melting_point_k: Some(1800.0),
        boiling_point_k: None,
        density: None,
        natural: false,
        stable_isotope: false,
        discoverer: Some("Lawrence Berkeley National Laboratory"),
        discovery_year: Some(1952),
    },
    Element {
        name: "Mendelevium",
        symbol: "Md",
        atomic_number: 101,
        atomic_mass: 258.0,
        shells: &[2, 8, 18, 32, 31, 8, 2],
        state: Some(State::Solid),
        group: None,
        period: 7,
        melting_point_k: Some(1100.0),
        boiling_point_k: None,
        density: None,
        natural: false,
        stable_isotope: false,
        discoverer: Some("Lawrence Berkeley National Laboratory"),
        discovery_year: Some(1955),
    },
    Element {
        name: "Nobelium",
        symbol: "No",
        atomic_number: 102,
        atomic_mass: 259.0,
        shells: &[2, 8, 18, 32, 32, 8, 2],
        state: Some(State::Solid),
        group: None,
        period: 7,
        melting_point_k: Some(1100.0),
        boiling_point_k: None,
        density: None,
        natural: false,
        stable_isotope: false,
        discoverer: Some("Joint Institute for Nuclear Research"),
        discovery_year: Some(1966),
    },
    Element {
        name: "Lawrencium",
        symbol: "Lr",
        atomic_number: 103,
        atomic_mass: 266.0,
        shells: &[2, 8, 18, 32, 32, 8, 3],
        state: Some(State::Solid),
        group: Some(3),
        period: 7,
        melting_point_k: Some(1900.0),
        boiling_point_k: None,
        density: None,
        natural: false,
        stable_isotope: false,
        discoverer: Some("Lawrence Berkeley National Laboratory, Joint Institute for Nuclear Research"),
        discovery_year: Some(1961),
    },
    Element {
        name: "Rutherfordium",
        symbol: "Rf",
        atomic_number: 104,
        atomic_mass: 267.0,
        shells: &[2, 8, 18, 32, 32, 10, 2],
        state: Some(State::Solid),
        group: Some(4),
        period: 7,
        melting_point_k: None,
        boiling_point_k: None,
        density: None,
        natural: false,
        stable_isotope: false,
        discoverer: Some("Joint Institute for Nuclear Research"),
        discovery_year: Some(1964),
    },
    Element {
        name: "Dubnium",
        symbol: "Db",
        atomic_number: 105,
        atomic_mass: 268.0,
        shells: &[2, 8, 18, 32, 32, 11, 2],
        state: Some(State::Solid),
        group: Some(5),
        period: 7,
        melting_point_k: None,
        boiling_point_k: None,
        density: None,
        natural: false,
        stable_isotope: false,
        discoverer: Some("Lawrence Berkeley National Laboratory, Joint Institute for Nuclear Research"),
        discovery_year: Some(1970),
    },
    Element {
        name: "Seaborgium",
        symbol: "Sg",
        atomic_number: 106,
        atomic_mass: 269.0,
        shells: &[2, 8, 18, 32, 32, 12, 2],
        state: Some(State::Solid),
        group: Some(6),
        period: 7,
        melting_point_k: None,
        boiling_point_k: None,
        density: None,
        natural: false,
        stable_isotope: false,
        discoverer: Some("Lawrence Berkeley National Laboratory"),
        discovery_year: Some(1974),
    },
    Element {
        name: "Bohrium",
        symbol: "Bh",
        atomic_number: 107,
        atomic_mass: 270.0,
        shells: &[2, 8, 18, 32, 32, 13, 2],
        state: Some(State::Solid),
        group: Some(7),
        period: 7,
        melting_point_k: None,
        boiling_point_k: None,
        density: None,
        natural: false,
        stable_isotope: false,
        discoverer: Some("Gesellschaft für Schwerionenforschung"),
        discovery_year: Some(1981),
    },
    Element {
        name: "Hassium",
        symbol: "Hs",
        atomic_number: 108,
        atomic_mass: 269.0,
        shells: &[2, 8, 18, 32, 32, 14, 2],
        state: Some(State::Solid),
        group: Some(8),
        period: 7,
        melting_point_k: None,
        boiling_point_k: None,
        density: None,
        natural: false,
        stable_isotope: false,
        discoverer: Some("Gesellschaft für Schwerionenforschung"),
        discovery_year: Some(1984),
    },
    Element {
        name: "Meitnerium",
        symbol: "Mt",
        atomic_number: 109,
        atomic_mass: 278.0,
        shells: &[2, 8, 18, 32, 32, 15, 2],
        state: Some(State::Solid),
        group: Some(9),
        period: 7,
        melting_point_k: None,
        boiling_point_k: None,
        density: None,
        natural: false,
        stable_isotope: false,
        discoverer: Some("Gesellschaft für Schwerionenforschung"),
        discovery_year: Some(1982),
    },
    Element {
        name: "Darmstadtium",
        symbol: "Ds",
        atomic_number: 110,
        atomic_mass: 281.0,
        shells: &[2, 8, 18, 32, 32, 16, 2],
        state: Some(State::Solid),
        group: Some(10),
        period: 7,
        melting_point_k: None,
        boiling_point_k: None,
        density: None,
        natural: false,
        stable_isotope: false,
        discoverer: Some("Gesellschaft für Schwerionenforschung"),
        discovery_year: Some(1994),
    },
    Element {
        name: "Roentgenium",
        symbol: "Rg",
        atomic_number: 111,
        atomic_mass: 282.0,
        shells: &[2, 8, 18, 32, 32, 17, 2],
        state: Some(State::Solid),
        group: Some(11),
        period: 7,
        melting_point_k: None,
        boiling_point_k: None,
        density: None,
        natural: false,
        stable_isotope: false,
        discoverer: Some("Gesellschaft für Schwerionenforschung"),
        discovery_year: Some(1994),
    },
    Element {
        name: "Copernicium",
        symbol: "Cn",
        atomic_number: 112,
        atomic_mass: 285.0,
        shells: &[2, 8, 18, 32, 32, 18, 2],
        state: None,
        group: Some(12),
        period: 7,
        melting_point_k: None,
        boiling_point_k: None,
        density: None,
        natural: false,
        stable_isotope: false,
        discoverer: Some("Gesellschaft für Schwerionenforschung"),
        discovery_year: Some(1996),
    },
    Element {
        name: "Nihonium",
        symbol: "Nh",
        atomic_number: 113,
        atomic_mass: 286.0,
        shells: &[2, 8, 18, 32, 32, 18, 3],
        state: Some(State::Solid),
        group: Some(13),
        period: 7,
        melting_point_k: None,
        boiling_point_k: None,
        density: None,
        natural: false,
        stable_isotope: false,
        discoverer: Some("Riken"),
        discovery_year: Some(2004),
    },
    Element {
        name: "Flerovium",
        symbol: "Fl",
        atomic_number: 114,
        atomic_mass: 289.0,
        shells: &[2, 8, 18, 32, 32, 18, 4],
        state: None,
        group: Some(14),
        period: 7,
        melting_point_k: None,
        boiling_point_k: None,
        density: None,
        natural: false,
        stable_isotope: false,
        discoverer: Some("Joint Institute for Nuclear Research, Lawrence Livermore National Laboratory"),
        discovery_year: Some(1998),
    },
    Element {
        name: "Moscovium",
        symbol: "Mc",
        atomic_number: 115,
        atomic_mass: 290.0,
        shells: &[2, 8, 18, 32, 32, 18, 5],
        state: Some(State::Solid),
        group: Some(15),
        period: 7,
        melting_point_k: None,
        boiling_point_k: None,
        density: None,
        natural: false,
        stable_isotope: false,
        discoverer: Some("Joint Institute for Nuclear Research, Lawrence Livermore National Laboratory"),
        discovery_year: Some(2003),
    },
    Element {
        name: "Livermorium",
        symbol: "Lv",
        atomic_number: 116,
        atomic_mass: 293.0,
        shells: &[2, 8, 18, 32, 32, 18, 6],
        state: Some(State::Solid),
        group: Some(16),
        period: 7,
        melting_point_k: None,
        boiling_point_k: None,
        density: None,
        natural: false,
        stable_isotope: false,
        discoverer: Some("Joint Institute for Nuclear Research, Lawrence Livermore National Laboratory"),
        discovery_year: Some(2000),
    },
    Element {
        name: "Tennessine",
        symbol: "Ts",
        atomic_number: 117,
        atomic_mass: 294.0,
        shells: &[2, 8, 18, 32, 32, 18, 7],
        state: Some(State::Solid),
        group: Some(17),
        period: 7,
        melting_point_k: None,
        boiling_point_k: None,
        density: None,
        natural: false,
        stable_isotope: false,
        discoverer: Some("Joint Institute for Nuclear Research, Lawrence Livermore National Laboratory, Vanderbilt University, Oak Ridge National Laboratory"),
        discovery_year: Some(2009),
    },
    Element {
        name: "Oganesson",
        symbol: "Og",
        atomic_number: 118,
        atomic_mass: 294.0,
        shells: &[2, 8, 18, 32, 32, 18, 8],
        state: Some(State::Solid),
        group: Some(18),
        period: 7,
        melting_point_k: None,
        boiling_point_k: None,
        density: None,
        natural: false,
        stable_isotope: false,
        discoverer: Some("Joint Institute for Nuclear Research, Lawrence Livermore National Laboratory"),
        discovery_year: Some(2002),
    },
];
