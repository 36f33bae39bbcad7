use super::tokenizer::parse_formula_elements;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Total number of atoms per element symbol across a collection of formulas.
///
/// Symbols iterate in alphabetical order. A symbol that is not present counts as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AtomCountMap(BTreeMap<String, u64>);

impl AtomCountMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, symbol: &str, count: u64) {
        let entry = self.0.entry(symbol.to_string()).or_insert(0);
        *entry = entry.saturating_add(count);
    }

    pub fn get(&self, symbol: &str) -> u64 {
        self.0.get(symbol).copied().unwrap_or(0)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.0.contains_key(symbol)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(symbol, &count)| (symbol.as_str(), count))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total_atoms(&self) -> u64 {
        self.0.values().fold(0u64, |acc, &n| acc.saturating_add(n))
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for AtomCountMap {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (symbol, count) in iter {
            let symbol: String = symbol.into();
            map.add(&symbol, count);
        }
        map
    }
}

impl IntoIterator for AtomCountMap {
    type Item = (String, u64);
    type IntoIter = btree_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Splits a leading stoichiometric coefficient off a term such as `"2H2O"`.
///
/// Returns the coefficient (`1` when there are no leading digits) and the remaining
/// formula. Only the term's outer whitespace is trimmed, so `"2 H2O"` leaves `" H2O"`
/// behind. Oversized coefficients saturate.
pub fn split_coefficient(term: &str) -> (u32, &str) {
    let (digits, formula) = split_coefficient_digits(term);
    if digits.is_empty() {
        return (1, formula);
    }
    (parse_saturating(digits), formula)
}

/// Like [`split_coefficient`], but returns the coefficient's digits exactly as written.
/// The digit slice is empty when the term has no coefficient.
pub fn split_coefficient_digits(term: &str) -> (&str, &str) {
    let term = term.trim();
    let digits_end = term
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(term.len(), |(i, _)| i);
    term.split_at(digits_end)
}

/// Parses a run of ASCII digits, saturating at `u32::MAX`.
pub(crate) fn parse_saturating(digits: &str) -> u32 {
    digits.bytes().fold(0u32, |acc, b| {
        acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
    })
}

/// The number a digit run denotes, as text: leading zeros are dropped and no
/// saturation is applied, so error messages echo the value the user typed.
pub(crate) fn typed_number(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Sums atom counts over every formula in `formulas`.
///
/// Each formula may start with a stoichiometric coefficient, which multiplies all of
/// its subscripts. No validation is performed: whatever the lenient tokenizer extracts
/// is counted.
pub fn count_atoms<S: AsRef<str>>(formulas: &[S]) -> AtomCountMap {
    let mut atoms = AtomCountMap::new();
    for formula in formulas {
        let (coefficient, body) = split_coefficient(formula.as_ref());
        for token in parse_formula_elements(body) {
            atoms.add(
                &token.symbol,
                u64::from(token.count) * u64::from(coefficient),
            );
        }
    }
    atoms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_summed_across_formulas() {
        let atoms = count_atoms(&["CH4", "O2"]);
        assert_eq!(atoms.get("C"), 1);
        assert_eq!(atoms.get("H"), 4);
        assert_eq!(atoms.get("O"), 2);
        assert_eq!(atoms.len(), 3);
    }

    #[test]
    fn repeated_symbols_within_a_formula_accumulate() {
        let atoms = count_atoms(&["CH3COOH"]);
        assert_eq!(atoms.get("C"), 2);
        assert_eq!(atoms.get("H"), 4);
        assert_eq!(atoms.get("O"), 2);
    }

    #[test]
    fn coefficients_multiply_subscripts() {
        let reactants = count_atoms(&["2H2", "O2"]);
        let products = count_atoms(&["2H2O"]);
        let expected: AtomCountMap = [("H", 4), ("O", 2)].into_iter().collect();
        assert_eq!(reactants, expected);
        assert_eq!(products, expected);
    }

    #[test]
    fn absent_symbols_count_as_zero() {
        let atoms = count_atoms(&["H2O"]);
        assert_eq!(atoms.get("Na"), 0);
        assert!(!atoms.contains("Na"));
    }

    #[test]
    fn empty_input_gives_empty_map() {
        let none: [&str; 0] = [];
        assert!(count_atoms(&none).is_empty());
        assert!(count_atoms(&[""]).is_empty());
    }

    #[test]
    fn symbols_iterate_alphabetically() {
        let atoms = count_atoms(&["O2", "H2", "C"]);
        assert_eq!(atoms.symbols().collect::<Vec<_>>(), vec!["C", "H", "O"]);
        assert_eq!(atoms.total_atoms(), 5);
    }

    #[test]
    fn split_coefficient_handles_common_shapes() {
        assert_eq!(split_coefficient("2H2O"), (2, "H2O"));
        assert_eq!(split_coefficient("H2O"), (1, "H2O"));
        assert_eq!(split_coefficient(" 12CO2 "), (12, "CO2"));
        assert_eq!(split_coefficient("2 H2"), (2, " H2"));
        assert_eq!(split_coefficient("0O2"), (0, "O2"));
        assert_eq!(split_coefficient("3"), (3, ""));
        assert_eq!(split_coefficient(""), (1, ""));
    }

    #[test]
    fn split_coefficient_saturates_large_values() {
        assert_eq!(split_coefficient("99999999999H").0, u32::MAX);
    }

    #[test]
    fn coefficient_digits_are_returned_as_written() {
        assert_eq!(split_coefficient_digits("99999999999H2"), ("99999999999", "H2"));
        assert_eq!(split_coefficient_digits(" 007O2"), ("007", "O2"));
        assert_eq!(split_coefficient_digits("H2O"), ("", "H2O"));
    }

    #[test]
    fn typed_number_keeps_the_full_value() {
        assert_eq!(typed_number("99999999999"), "99999999999");
        assert_eq!(typed_number("0200"), "200");
        assert_eq!(typed_number("000"), "0");
    }

    #[test]
    fn whitespace_after_a_coefficient_is_ignored_by_the_counter() {
        let atoms = count_atoms(&["2 H2"]);
        assert_eq!(atoms.get("H"), 4);
    }
}
