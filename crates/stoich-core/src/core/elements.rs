use phf::{Map, phf_map};
use serde::Serialize;

pub const ELEMENT_COUNT: usize = 118;

/// Static reference data for one chemical element.
///
/// Masses are standard atomic weights in g/mol (abridged). For elements without a
/// standard atomic weight the mass number of the longest-lived isotope is used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementInfo {
    /// IUPAC symbol (e.g., "Na").
    pub symbol: &'static str,
    /// English name (e.g., "Sodium").
    pub name: &'static str,
    /// Atomic number Z, `1..=118`.
    pub atomic_number: u8,
    /// Atomic mass in g/mol.
    pub atomic_mass: f64,
}

static ELEMENTS: Map<&'static str, ElementInfo> = phf_map! {
    "H" => ElementInfo { symbol: "H", name: "Hydrogen", atomic_number: 1, atomic_mass: 1.008 },
    "He" => ElementInfo { symbol: "He", name: "Helium", atomic_number: 2, atomic_mass: 4.0026 },
    "Li" => ElementInfo { symbol: "Li", name: "Lithium", atomic_number: 3, atomic_mass: 6.94 },
    "Be" => ElementInfo { symbol: "Be", name: "Beryllium", atomic_number: 4, atomic_mass: 9.0122 },
    "B" => ElementInfo { symbol: "B", name: "Boron", atomic_number: 5, atomic_mass: 10.81 },
    "C" => ElementInfo { symbol: "C", name: "Carbon", atomic_number: 6, atomic_mass: 12.011 },
    "N" => ElementInfo { symbol: "N", name: "Nitrogen", atomic_number: 7, atomic_mass: 14.007 },
    "O" => ElementInfo { symbol: "O", name: "Oxygen", atomic_number: 8, atomic_mass: 15.999 },
    "F" => ElementInfo { symbol: "F", name: "Fluorine", atomic_number: 9, atomic_mass: 18.998 },
    "Ne" => ElementInfo { symbol: "Ne", name: "Neon", atomic_number: 10, atomic_mass: 20.18 },
    "Na" => ElementInfo { symbol: "Na", name: "Sodium", atomic_number: 11, atomic_mass: 22.99 },
    "Mg" => ElementInfo { symbol: "Mg", name: "Magnesium", atomic_number: 12, atomic_mass: 24.305 },
    "Al" => ElementInfo { symbol: "Al", name: "Aluminium", atomic_number: 13, atomic_mass: 26.982 },
    "Si" => ElementInfo { symbol: "Si", name: "Silicon", atomic_number: 14, atomic_mass: 28.085 },
    "P" => ElementInfo { symbol: "P", name: "Phosphorus", atomic_number: 15, atomic_mass: 30.974 },
    "S" => ElementInfo { symbol: "S", name: "Sulfur", atomic_number: 16, atomic_mass: 32.06 },
    "Cl" => ElementInfo { symbol: "Cl", name: "Chlorine", atomic_number: 17, atomic_mass: 35.45 },
    "Ar" => ElementInfo { symbol: "Ar", name: "Argon", atomic_number: 18, atomic_mass: 39.948 },
    "K" => ElementInfo { symbol: "K", name: "Potassium", atomic_number: 19, atomic_mass: 39.098 },
    "Ca" => ElementInfo { symbol: "Ca", name: "Calcium", atomic_number: 20, atomic_mass: 40.078 },
    "Sc" => ElementInfo { symbol: "Sc", name: "Scandium", atomic_number: 21, atomic_mass: 44.956 },
    "Ti" => ElementInfo { symbol: "Ti", name: "Titanium", atomic_number: 22, atomic_mass: 47.867 },
    "V" => ElementInfo { symbol: "V", name: "Vanadium", atomic_number: 23, atomic_mass: 50.942 },
    "Cr" => ElementInfo { symbol: "Cr", name: "Chromium", atomic_number: 24, atomic_mass: 51.996 },
    "Mn" => ElementInfo { symbol: "Mn", name: "Manganese", atomic_number: 25, atomic_mass: 54.938 },
    "Fe" => ElementInfo { symbol: "Fe", name: "Iron", atomic_number: 26, atomic_mass: 55.845 },
    "Co" => ElementInfo { symbol: "Co", name: "Cobalt", atomic_number: 27, atomic_mass: 58.933 },
    "Ni" => ElementInfo { symbol: "Ni", name: "Nickel", atomic_number: 28, atomic_mass: 58.693 },
    "Cu" => ElementInfo { symbol: "Cu", name: "Copper", atomic_number: 29, atomic_mass: 63.546 },
    "Zn" => ElementInfo { symbol: "Zn", name: "Zinc", atomic_number: 30, atomic_mass: 65.38 },
    "Ga" => ElementInfo { symbol: "Ga", name: "Gallium", atomic_number: 31, atomic_mass: 69.723 },
    "Ge" => ElementInfo { symbol: "Ge", name: "Germanium", atomic_number: 32, atomic_mass: 72.63 },
    "As" => ElementInfo { symbol: "As", name: "Arsenic", atomic_number: 33, atomic_mass: 74.922 },
    "Se" => ElementInfo { symbol: "Se", name: "Selenium", atomic_number: 34, atomic_mass: 78.971 },
    "Br" => ElementInfo { symbol: "Br", name: "Bromine", atomic_number: 35, atomic_mass: 79.904 },
    "Kr" => ElementInfo { symbol: "Kr", name: "Krypton", atomic_number: 36, atomic_mass: 83.798 },
    "Rb" => ElementInfo { symbol: "Rb", name: "Rubidium", atomic_number: 37, atomic_mass: 85.468 },
    "Sr" => ElementInfo { symbol: "Sr", name: "Strontium", atomic_number: 38, atomic_mass: 87.62 },
    "Y" => ElementInfo { symbol: "Y", name: "Yttrium", atomic_number: 39, atomic_mass: 88.906 },
    "Zr" => ElementInfo { symbol: "Zr", name: "Zirconium", atomic_number: 40, atomic_mass: 91.224 },
    "Nb" => ElementInfo { symbol: "Nb", name: "Niobium", atomic_number: 41, atomic_mass: 92.906 },
    "Mo" => ElementInfo { symbol: "Mo", name: "Molybdenum", atomic_number: 42, atomic_mass: 95.95 },
    "Tc" => ElementInfo { symbol: "Tc", name: "Technetium", atomic_number: 43, atomic_mass: 98.0 },
    "Ru" => ElementInfo { symbol: "Ru", name: "Ruthenium", atomic_number: 44, atomic_mass: 101.07 },
    "Rh" => ElementInfo { symbol: "Rh", name: "Rhodium", atomic_number: 45, atomic_mass: 102.91 },
    "Pd" => ElementInfo { symbol: "Pd", name: "Palladium", atomic_number: 46, atomic_mass: 106.42 },
    "Ag" => ElementInfo { symbol: "Ag", name: "Silver", atomic_number: 47, atomic_mass: 107.87 },
    "Cd" => ElementInfo { symbol: "Cd", name: "Cadmium", atomic_number: 48, atomic_mass: 112.41 },
    "In" => ElementInfo { symbol: "In", name: "Indium", atomic_number: 49, atomic_mass: 114.82 },
    "Sn" => ElementInfo { symbol: "Sn", name: "Tin", atomic_number: 50, atomic_mass: 118.71 },
    "Sb" => ElementInfo { symbol: "Sb", name: "Antimony", atomic_number: 51, atomic_mass: 121.76 },
    "Te" => ElementInfo { symbol: "Te", name: "Tellurium", atomic_number: 52, atomic_mass: 127.6 },
    "I" => ElementInfo { symbol: "I", name: "Iodine", atomic_number: 53, atomic_mass: 126.9 },
    "Xe" => ElementInfo { symbol: "Xe", name: "Xenon", atomic_number: 54, atomic_mass: 131.29 },
    "Cs" => ElementInfo { symbol: "Cs", name: "Caesium", atomic_number: 55, atomic_mass: 132.91 },
    "Ba" => ElementInfo { symbol: "Ba", name: "Barium", atomic_number: 56, atomic_mass: 137.33 },
    "La" => ElementInfo { symbol: "La", name: "Lanthanum", atomic_number: 57, atomic_mass: 138.91 },
    "Ce" => ElementInfo { symbol: "Ce", name: "Cerium", atomic_number: 58, atomic_mass: 140.12 },
    "Pr" => ElementInfo { symbol: "Pr", name: "Praseodymium", atomic_number: 59, atomic_mass: 140.91 },
    "Nd" => ElementInfo { symbol: "Nd", name: "Neodymium", atomic_number: 60, atomic_mass: 144.24 },
    "Pm" => ElementInfo { symbol: "Pm", name: "Promethium", atomic_number: 61, atomic_mass: 145.0 },
    "Sm" => ElementInfo { symbol: "Sm", name: "Samarium", atomic_number: 62, atomic_mass: 150.36 },
    "Eu" => ElementInfo { symbol: "Eu", name: "Europium", atomic_number: 63, atomic_mass: 151.96 },
    "Gd" => ElementInfo { symbol: "Gd", name: "Gadolinium", atomic_number: 64, atomic_mass: 157.25 },
    "Tb" => ElementInfo { symbol: "Tb", name: "Terbium", atomic_number: 65, atomic_mass: 158.93 },
    "Dy" => ElementInfo { symbol: "Dy", name: "Dysprosium", atomic_number: 66, atomic_mass: 162.5 },
    "Ho" => ElementInfo { symbol: "Ho", name: "Holmium", atomic_number: 67, atomic_mass: 164.93 },
    "Er" => ElementInfo { symbol: "Er", name: "Erbium", atomic_number: 68, atomic_mass: 167.26 },
    "Tm" => ElementInfo { symbol: "Tm", name: "Thulium", atomic_number: 69, atomic_mass: 168.93 },
    "Yb" => ElementInfo { symbol: "Yb", name: "Ytterbium", atomic_number: 70, atomic_mass: 173.05 },
    "Lu" => ElementInfo { symbol: "Lu", name: "Lutetium", atomic_number: 71, atomic_mass: 174.97 },
    "Hf" => ElementInfo { symbol: "Hf", name: "Hafnium", atomic_number: 72, atomic_mass: 178.49 },
    "Ta" => ElementInfo { symbol: "Ta", name: "Tantalum", atomic_number: 73, atomic_mass: 180.95 },
    "W" => ElementInfo { symbol: "W", name: "Tungsten", atomic_number: 74, atomic_mass: 183.84 },
    "Re" => ElementInfo { symbol: "Re", name: "Rhenium", atomic_number: 75, atomic_mass: 186.21 },
    "Os" => ElementInfo { symbol: "Os", name: "Osmium", atomic_number: 76, atomic_mass: 190.23 },
    "Ir" => ElementInfo { symbol: "Ir", name: "Iridium", atomic_number: 77, atomic_mass: 192.22 },
    "Pt" => ElementInfo { symbol: "Pt", name: "Platinum", atomic_number: 78, atomic_mass: 195.08 },
    "Au" => ElementInfo { symbol: "Au", name: "Gold", atomic_number: 79, atomic_mass: 196.97 },
    "Hg" => ElementInfo { symbol: "Hg", name: "Mercury", atomic_number: 80, atomic_mass: 200.59 },
    "Tl" => ElementInfo { symbol: "Tl", name: "Thallium", atomic_number: 81, atomic_mass: 204.38 },
    "Pb" => ElementInfo { symbol: "Pb", name: "Lead", atomic_number: 82, atomic_mass: 207.2 },
    "Bi" => ElementInfo { symbol: "Bi", name: "Bismuth", atomic_number: 83, atomic_mass: 208.98 },
    "Po" => ElementInfo { symbol: "Po", name: "Polonium", atomic_number: 84, atomic_mass: 209.0 },
    "At" => ElementInfo { symbol: "At", name: "Astatine", atomic_number: 85, atomic_mass: 210.0 },
    "Rn" => ElementInfo { symbol: "Rn", name: "Radon", atomic_number: 86, atomic_mass: 222.0 },
    "Fr" => ElementInfo { symbol: "Fr", name: "Francium", atomic_number: 87, atomic_mass: 223.0 },
    "Ra" => ElementInfo { symbol: "Ra", name: "Radium", atomic_number: 88, atomic_mass: 226.0 },
    "Ac" => ElementInfo { symbol: "Ac", name: "Actinium", atomic_number: 89, atomic_mass: 227.0 },
    "Th" => ElementInfo { symbol: "Th", name: "Thorium", atomic_number: 90, atomic_mass: 232.04 },
    "Pa" => ElementInfo { symbol: "Pa", name: "Protactinium", atomic_number: 91, atomic_mass: 231.04 },
    "U" => ElementInfo { symbol: "U", name: "Uranium", atomic_number: 92, atomic_mass: 238.03 },
    "Np" => ElementInfo { symbol: "Np", name: "Neptunium", atomic_number: 93, atomic_mass: 237.0 },
    "Pu" => ElementInfo { symbol: "Pu", name: "Plutonium", atomic_number: 94, atomic_mass: 244.0 },
    "Am" => ElementInfo { symbol: "Am", name: "Americium", atomic_number: 95, atomic_mass: 243.0 },
    "Cm" => ElementInfo { symbol: "Cm", name: "Curium", atomic_number: 96, atomic_mass: 247.0 },
    "Bk" => ElementInfo { symbol: "Bk", name: "Berkelium", atomic_number: 97, atomic_mass: 247.0 },
    "Cf" => ElementInfo { symbol: "Cf", name: "Californium", atomic_number: 98, atomic_mass: 251.0 },
    "Es" => ElementInfo { symbol: "Es", name: "Einsteinium", atomic_number: 99, atomic_mass: 252.0 },
    "Fm" => ElementInfo { symbol: "Fm", name: "Fermium", atomic_number: 100, atomic_mass: 257.0 },
    "Md" => ElementInfo { symbol: "Md", name: "Mendelevium", atomic_number: 101, atomic_mass: 258.0 },
    "No" => ElementInfo { symbol: "No", name: "Nobelium", atomic_number: 102, atomic_mass: 259.0 },
    "Lr" => ElementInfo { symbol: "Lr", name: "Lawrencium", atomic_number: 103, atomic_mass: 262.0 },
    "Rf" => ElementInfo { symbol: "Rf", name: "Rutherfordium", atomic_number: 104, atomic_mass: 267.0 },
    "Db" => ElementInfo { symbol: "Db", name: "Dubnium", atomic_number: 105, atomic_mass: 270.0 },
    "Sg" => ElementInfo { symbol: "Sg", name: "Seaborgium", atomic_number: 106, atomic_mass: 271.0 },
    "Bh" => ElementInfo { symbol: "Bh", name: "Bohrium", atomic_number: 107, atomic_mass: 270.0 },
    "Hs" => ElementInfo { symbol: "Hs", name: "Hassium", atomic_number: 108, atomic_mass: 277.0 },
    "Mt" => ElementInfo { symbol: "Mt", name: "Meitnerium", atomic_number: 109, atomic_mass: 276.0 },
    "Ds" => ElementInfo { symbol: "Ds", name: "Darmstadtium", atomic_number: 110, atomic_mass: 281.0 },
    "Rg" => ElementInfo { symbol: "Rg", name: "Roentgenium", atomic_number: 111, atomic_mass: 280.0 },
    "Cn" => ElementInfo { symbol: "Cn", name: "Copernicium", atomic_number: 112, atomic_mass: 285.0 },
    "Nh" => ElementInfo { symbol: "Nh", name: "Nihonium", atomic_number: 113, atomic_mass: 284.0 },
    "Fl" => ElementInfo { symbol: "Fl", name: "Flerovium", atomic_number: 114, atomic_mass: 289.0 },
    "Mc" => ElementInfo { symbol: "Mc", name: "Moscovium", atomic_number: 115, atomic_mass: 288.0 },
    "Lv" => ElementInfo { symbol: "Lv", name: "Livermorium", atomic_number: 116, atomic_mass: 293.0 },
    "Ts" => ElementInfo { symbol: "Ts", name: "Tennessine", atomic_number: 117, atomic_mass: 294.0 },
    "Og" => ElementInfo { symbol: "Og", name: "Oganesson", atomic_number: 118, atomic_mass: 294.0 },
};

static SYMBOLS_BY_NUMBER: [&str; ELEMENT_COUNT] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S",
    "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga",
    "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd",
    "Ag", "Cd", "In", "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm",
    "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os",
    "Ir", "Pt", "Au", "Hg", "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa",
    "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg",
    "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Looks up an element by its symbol. The match is case-sensitive.
pub fn lookup(symbol: &str) -> Option<&'static ElementInfo> {
    ELEMENTS.get(symbol)
}

pub fn is_valid_symbol(symbol: &str) -> bool {
    ELEMENTS.contains_key(symbol)
}

pub fn atomic_mass(symbol: &str) -> Option<f64> {
    lookup(symbol).map(|info| info.atomic_mass)
}

pub fn by_atomic_number(atomic_number: u8) -> Option<&'static ElementInfo> {
    let index = usize::from(atomic_number).checked_sub(1)?;
    SYMBOLS_BY_NUMBER.get(index).and_then(|symbol| lookup(symbol))
}

/// Iterates over all elements in periodic-table order (H first, Og last).
pub fn iter_by_atomic_number() -> impl Iterator<Item = &'static ElementInfo> {
    SYMBOLS_BY_NUMBER.iter().filter_map(|symbol| lookup(symbol))
}
