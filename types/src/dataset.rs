//! The static 118-entry element table and lookups over it.

use crate::element::{ElementCategory, ElementRecord, GridPosition};

pub const ELEMENT_COUNT: usize = 118;
pub const GRID_COLUMNS: u8 = 18;
pub const GRID_ROWS: u8 = 10;

const NM: ElementCategory = ElementCategory::Nonmetal;
const NG: ElementCategory = ElementCategory::NobleGas;
const AK: ElementCategory = ElementCategory::AlkaliMetal;
const AE: ElementCategory = ElementCategory::AlkalineEarthMetal;
const MD: ElementCategory = ElementCategory::Metalloid;
const HL: ElementCategory = ElementCategory::Halogen;
const TM: ElementCategory = ElementCategory::TransitionMetal;
const PT: ElementCategory = ElementCategory::PostTransitionMetal;
const LN: ElementCategory = ElementCategory::Lanthanide;
const AC: ElementCategory = ElementCategory::Actinide;
const UN: ElementCategory = ElementCategory::Unknown;

const fn e(
    number: u8,
    symbol: &'static str,
    name: &'static str,
    atomic_mass: &'static str,
    category: ElementCategory,
    group: u8,
    period: u8,
) -> ElementRecord {
    ElementRecord::new(number, symbol, name, atomic_mass, category, group, period)
}

/// All elements, ordered by atomic number (`ELEMENTS[n - 1].number == n`).
pub static ELEMENTS: [ElementRecord; ELEMENT_COUNT] = [
    e(1, "H", "Hydrogen", "1.008", NM, 1, 1),
    e(2, "He", "Helium", "4.0026", NG, 18, 1),
    e(3, "Li", "Lithium", "6.94", AK, 1, 2),
    e(4, "Be", "Beryllium", "9.0122", AE, 2, 2),
    e(5, "B", "Boron", "10.81", MD, 13, 2),
    e(6, "C", "Carbon", "12.011", NM, 14, 2),
    e(7, "N", "Nitrogen", "14.007", NM, 15, 2),
    e(8, "O", "Oxygen", "15.999", NM, 16, 2),
    e(9, "F", "Fluorine", "18.998", HL, 17, 2),
    e(10, "Ne", "Neon", "20.180", NG, 18, 2),
    e(11, "Na", "Sodium", "22.990", AK, 1, 3),
    e(12, "Mg", "Magnesium", "24.305", AE, 2, 3),
    e(13, "Al", "Aluminium", "26.982", PT, 13, 3),
    e(14, "Si", "Silicon", "28.085", MD, 14, 3),
    e(15, "P", "Phosphorus", "30.974", NM, 15, 3),
    e(16, "S", "Sulfur", "32.06", NM, 16, 3),
    e(17, "Cl", "Chlorine", "35.45", HL, 17, 3),
    e(18, "Ar", "Argon", "39.948", NG, 18, 3),
    e(19, "K", "Potassium", "39.098", AK, 1, 4),
    e(20, "Ca", "Calcium", "40.078", AE, 2, 4),
    e(21, "Sc", "Scandium", "44.956", TM, 3, 4),
    e(22, "Ti", "Titanium", "47.867", TM, 4, 4),
    e(23, "V", "Vanadium", "50.942", TM, 5, 4),
    e(24, "Cr", "Chromium", "51.996", TM, 6, 4),
    e(25, "Mn", "Manganese", "54.938", TM, 7, 4),
    e(26, "Fe", "Iron", "55.845", TM, 8, 4),
    e(27, "Co", "Cobalt", "58.933", TM, 9, 4),
    e(28, "Ni", "Nickel", "58.693", TM, 10, 4),
    e(29, "Cu", "Copper", "63.546", TM, 11, 4),
    e(30, "Zn", "Zinc", "65.38", TM, 12, 4),
    e(31, "Ga", "Gallium", "69.723", PT, 13, 4),
    e(32, "Ge", "Germanium", "72.630", MD, 14, 4),
    e(33, "As", "Arsenic", "74.922", MD, 15, 4),
    e(34, "Se", "Selenium", "78.971", NM, 16, 4),
    e(35, "Br", "Bromine", "79.904", HL, 17, 4),
    e(36, "Kr", "Krypton", "83.798", NG, 18, 4),
    e(37, "Rb", "Rubidium", "85.468", AK, 1, 5),
    e(38, "Sr", "Strontium", "87.62", AE, 2, 5),
    e(39, "Y", "Yttrium", "88.906", TM, 3, 5),
    e(40, "Zr", "Zirconium", "91.224", TM, 4, 5),
    e(41, "Nb", "Niobium", "92.906", TM, 5, 5),
    e(42, "Mo", "Molybdenum", "95.95", TM, 6, 5),
    e(43, "Tc", "Technetium", "98", TM, 7, 5),
    e(44, "Ru", "Ruthenium", "101.07", TM, 8, 5),
    e(45, "Rh", "Rhodium", "102.91", TM, 9, 5),
    e(46, "Pd", "Palladium", "106.42", TM, 10, 5),
    e(47, "Ag", "Silver", "107.87", TM, 11, 5),
    e(48, "Cd", "Cadmium", "112.41", TM, 12, 5),
    e(49, "In", "Indium", "114.82", PT, 13, 5),
    e(50, "Sn", "Tin", "118.71", PT, 14, 5),
    e(51, "Sb", "Antimony", "121.76", MD, 15, 5),
    e(52, "Te", "Tellurium", "127.60", MD, 16, 5),
    e(53, "I", "Iodine", "126.90", HL, 17, 5),
    e(54, "Xe", "Xenon", "131.29", NG, 18, 5),
    e(55, "Cs", "Caesium", "132.91", AK, 1, 6),
    e(56, "Ba", "Barium", "137.33", AE, 2, 6),
    e(57, "La", "Lanthanum", "138.91", LN, 3, 6),
    e(58, "Ce", "Cerium", "140.12", LN, 3, 6),
    e(59, "Pr", "Praseodymium", "140.91", LN, 3, 6),
    e(60, "Nd", "Neodymium", "144.24", LN, 3, 6),
    e(61, "Pm", "Promethium", "145", LN, 3, 6),
    e(62, "Sm", "Samarium", "150.36", LN, 3, 6),
    e(63, "Eu", "Europium", "151.96", LN, 3, 6),
    e(64, "Gd", "Gadolinium", "157.25", LN, 3, 6),
    e(65, "Tb", "Terbium", "158.93", LN, 3, 6),
    e(66, "Dy", "Dysprosium", "162.50", LN, 3, 6),
    e(67, "Ho", "Holmium", "164.93", LN, 3, 6),
    e(68, "Er", "Erbium", "167.26", LN, 3, 6),
    e(69, "Tm", "Thulium", "168.93", LN, 3, 6),
    e(70, "Yb", "Ytterbium", "173.05", LN, 3, 6),
    e(71, "Lu", "Lutetium", "174.97", LN, 3, 6),
    e(72, "Hf", "Hafnium", "178.49", TM, 4, 6),
    e(73, "Ta", "Tantalum", "180.95", TM, 5, 6),
    e(74, "W", "Tungsten", "183.84", TM, 6, 6),
    e(75, "Re", "Rhenium", "186.21", TM, 7, 6),
    e(76, "Os", "Osmium", "190.23", TM, 8, 6),
    e(77, "Ir", "Iridium", "192.22", TM, 9, 6),
    e(78, "Pt", "Platinum", "195.08", TM, 10, 6),
    e(79, "Au", "Gold", "196.97", TM, 11, 6),
    e(80, "Hg", "Mercury", "200.59", TM, 12, 6),
    e(81, "Tl", "Thallium", "204.38", PT, 13, 6),
    e(82, "Pb", "Lead", "207.2", PT, 14, 6),
    e(83, "Bi", "Bismuth", "208.98", PT, 15, 6),
    e(84, "Po", "Polonium", "209", PT, 16, 6),
    e(85, "At", "Astatine", "210", HL, 17, 6),
    e(86, "Rn", "Radon", "222", NG, 18, 6),
    e(87, "Fr", "Francium", "223", AK, 1, 7),
    e(88, "Ra", "Radium", "226", AE, 2, 7),
    e(89, "Ac", "Actinium", "227", AC, 3, 7),
    e(90, "Th", "Thorium", "232.04", AC, 3, 7),
    e(91, "Pa", "Protactinium", "231.04", AC, 3, 7),
    e(92, "U", "Uranium", "238.03", AC, 3, 7),
    e(93, "Np", "Neptunium", "237", AC, 3, 7),
    e(94, "Pu", "Plutonium", "244", AC, 3, 7),
    e(95, "Am", "Americium", "243", AC, 3, 7),
    e(96, "Cm", "Curium", "247", AC, 3, 7),
    e(97, "Bk", "Berkelium", "247", AC, 3, 7),
    e(98, "Cf", "Californium", "251", AC, 3, 7),
    e(99, "Es", "Einsteinium", "252", AC, 3, 7),
    e(100, "Fm", "Fermium", "257", AC, 3, 7),
    e(101, "Md", "Mendelevium", "258", AC, 3, 7),
    e(102, "No", "Nobelium", "259", AC, 3, 7),
    e(103, "Lr", "Lawrencium", "266", AC, 3, 7),
    e(104, "Rf", "Rutherfordium", "267", TM, 4, 7),
    e(105, "Db", "Dubnium", "268", TM, 5, 7),
    e(106, "Sg", "Seaborgium", "269", TM, 6, 7),
    e(107, "Bh", "Bohrium", "270", TM, 7, 7),
    e(108, "Hs", "Hassium", "277", TM, 8, 7),
    e(109, "Mt", "Meitnerium", "278", UN, 9, 7),
    e(110, "Ds", "Darmstadtium", "281", UN, 10, 7),
    e(111, "Rg", "Roentgenium", "282", UN, 11, 7),
    e(112, "Cn", "Copernicium", "285", UN, 12, 7),
    e(113, "Nh", "Nihonium", "286", UN, 13, 7),
    e(114, "Fl", "Flerovium", "289", UN, 14, 7),
    e(115, "Mc", "Moscovium", "290", UN, 15, 7),
    e(116, "Lv", "Livermorium", "293", UN, 16, 7),
    e(117, "Ts", "Tennessine", "294", UN, 17, 7),
    e(118, "Og", "Oganesson", "294", UN, 18, 7),
];

/// Look up an element by atomic number (1-based).
#[must_use]
pub fn element_by_number(number: u8) -> Option<&'static ElementRecord> {
    let index = usize::from(number).checked_sub(1)?;
    ELEMENTS.get(index)
}

/// Look up an element by symbol, ignoring ASCII case (`"fe"` finds Iron).
#[must_use]
pub fn element_by_symbol(symbol: &str) -> Option<&'static ElementRecord> {
    let symbol = symbol.trim();
    ELEMENTS
        .iter()
        .find(|element| element.symbol.eq_ignore_ascii_case(symbol))
}

/// The element occupying a display-grid cell, if any.
#[must_use]
pub fn element_at(position: GridPosition) -> Option<&'static ElementRecord> {
    ELEMENTS
        .iter()
        .find(|element| element.grid_position() == position)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{
        ELEMENT_COUNT, ELEMENTS, GRID_COLUMNS, GRID_ROWS, element_at, element_by_number,
        element_by_symbol,
    };
    use crate::element::{ElementCategory, GridPosition};

    #[test]
    fn numbers_are_dense_and_ordered() {
        for (index, element) in ELEMENTS.iter().enumerate() {
            assert_eq!(usize::from(element.number), index + 1);
        }
    }

    #[test]
    fn symbols_are_unique() {
        let symbols: HashSet<_> = ELEMENTS.iter().map(|e| e.symbol).collect();
        assert_eq!(symbols.len(), ELEMENT_COUNT);
    }

    #[test]
    fn groups_and_periods_in_range() {
        for element in &ELEMENTS {
            assert!((1..=18).contains(&element.group), "{}", element.symbol);
            assert!((1..=7).contains(&element.period), "{}", element.symbol);
            assert!(element.rounded_mass().is_some(), "{}", element.symbol);
        }
    }

    #[test]
    fn grid_positions_are_unique_and_in_bounds() {
        let mut seen = HashSet::new();
        for element in &ELEMENTS {
            let pos = element.grid_position();
            assert!((1..=GRID_ROWS).contains(&pos.row), "{}", element.symbol);
            assert!((1..=GRID_COLUMNS).contains(&pos.col), "{}", element.symbol);
            assert!(seen.insert(pos), "duplicate cell for {}", element.symbol);
        }
    }

    #[test]
    fn spacer_row_is_empty() {
        for col in 1..=GRID_COLUMNS {
            assert!(element_at(GridPosition::new(8, col)).is_none());
        }
    }

    #[test]
    fn f_block_counts() {
        let lanthanides = ELEMENTS
            .iter()
            .filter(|e| e.category == ElementCategory::Lanthanide)
            .count();
        let actinides = ELEMENTS
            .iter()
            .filter(|e| e.category == ElementCategory::Actinide)
            .count();
        assert_eq!(lanthanides, 15);
        assert_eq!(actinides, 15);
    }

    #[test]
    fn lookup_by_number() {
        assert_eq!(element_by_number(6).unwrap().symbol, "C");
        assert_eq!(element_by_number(118).unwrap().symbol, "Og");
        assert!(element_by_number(0).is_none());
        assert!(element_by_number(119).is_none());
    }

    #[test]
    fn lookup_by_symbol_ignores_case() {
        assert_eq!(element_by_symbol("fe").unwrap().name, "Iron");
        assert_eq!(element_by_symbol(" He ").unwrap().number, 2);
        assert!(element_by_symbol("Xx").is_none());
    }

    #[test]
    fn lookup_by_cell() {
        assert_eq!(element_at(GridPosition::new(1, 18)).unwrap().symbol, "He");
        assert_eq!(element_at(GridPosition::new(9, 4)).unwrap().symbol, "La");
        assert!(element_at(GridPosition::new(1, 2)).is_none());
    }
}
