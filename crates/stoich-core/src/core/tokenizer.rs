use serde::Serialize;
use std::fmt;

/// One element symbol together with its subscript inside a formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ElementToken {
    /// Element symbol as written (e.g., "Na", "O").
    pub symbol: String,
    /// Subscript following the symbol, `1` when no digits follow it.
    pub count: u32,
}

impl ElementToken {
    pub fn new(symbol: impl Into<String>, count: u32) -> Self {
        Self {
            symbol: symbol.into(),
            count,
        }
    }
}

impl fmt::Display for ElementToken {
    /// Writes the canonical form: the symbol, followed by the count when it is not 1.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 1 {
            f.write_str(&self.symbol)
        } else {
            write!(f, "{}{}", self.symbol, self.count)
        }
    }
}

#[derive(Default)]
struct ScanState {
    symbol: String,
    digits: Option<u32>,
}

impl ScanState {
    fn push_digit(&mut self, digit: u32) {
        let current = self.digits.unwrap_or(0);
        self.digits = Some(current.saturating_mul(10).saturating_add(digit));
    }

    fn flush_into(&mut self, tokens: &mut Vec<ElementToken>) {
        if !self.symbol.is_empty() {
            let symbol = std::mem::take(&mut self.symbol);
            tokens.push(ElementToken::new(symbol, self.digits.unwrap_or(1)));
        }
        self.digits = None;
    }
}

/// Scans a formula into element/count pairs, left to right.
///
/// The scan is lenient: characters that are neither letters nor ASCII digits are
/// skipped, and digits that precede the first symbol are dropped. Callers that need
/// strict input must run [`crate::engine::formula::validate_chemical_formula`] first.
///
/// Digit runs too large for `u32` saturate at `u32::MAX`.
pub fn parse_formula_elements(formula: &str) -> Vec<ElementToken> {
    let mut tokens = Vec::new();
    let mut state = ScanState::default();

    for c in formula.chars() {
        if c.is_uppercase() {
            state.flush_into(&mut tokens);
            state.symbol.push(c);
        } else if c.is_lowercase() {
            state.symbol.push(c);
        } else if let Some(digit) = c.to_digit(10) {
            state.push_digit(digit);
        }
    }
    state.flush_into(&mut tokens);

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(pairs: &[(&str, u32)]) -> Vec<ElementToken> {
        pairs
            .iter()
            .map(|&(symbol, count)| ElementToken::new(symbol, count))
            .collect()
    }

    #[test]
    fn empty_formula_yields_no_tokens() {
        assert!(parse_formula_elements("").is_empty());
    }

    #[test]
    fn symbols_without_digits_default_to_one() {
        assert_eq!(
            parse_formula_elements("NaCl"),
            tokens(&[("Na", 1), ("Cl", 1)])
        );
    }

    #[test]
    fn multi_digit_counts_are_parsed() {
        assert_eq!(
            parse_formula_elements("C12H22O11"),
            tokens(&[("C", 12), ("H", 22), ("O", 11)])
        );
    }

    #[test]
    fn repeated_symbols_are_kept_as_separate_tokens() {
        assert_eq!(
            parse_formula_elements("CH3COOH"),
            tokens(&[
                ("C", 1),
                ("H", 3),
                ("C", 1),
                ("O", 1),
                ("O", 1),
                ("H", 1)
            ])
        );
    }

    #[test]
    fn leading_digits_are_dropped() {
        assert_eq!(parse_formula_elements("2H2O"), tokens(&[("H", 2), ("O", 1)]));
    }

    #[test]
    fn stray_characters_are_ignored() {
        assert_eq!(
            parse_formula_elements("Ca(OH)2"),
            tokens(&[("Ca", 1), ("O", 1), ("H", 2)])
        );
        assert_eq!(parse_formula_elements("H2 O"), tokens(&[("H", 2), ("O", 1)]));
    }

    #[test]
    fn zero_count_is_preserved() {
        assert_eq!(parse_formula_elements("H0"), tokens(&[("H", 0)]));
    }

    #[test]
    fn huge_counts_saturate() {
        assert_eq!(
            parse_formula_elements("H99999999999999999999"),
            tokens(&[("H", u32::MAX)])
        );
    }

    #[test]
    fn lowercase_letters_extend_the_current_symbol() {
        assert_eq!(parse_formula_elements("Uuo"), tokens(&[("Uuo", 1)]));
        assert_eq!(parse_formula_elements("xH"), tokens(&[("x", 1), ("H", 1)]));
    }

    #[test]
    fn reserializing_tokens_reproduces_canonical_input() {
        for formula in ["H2O", "C6H12O6", "NaCl", "Fe2O3", "KMnO4", "CH4"] {
            let rebuilt: String = parse_formula_elements(formula)
                .iter()
                .map(ToString::to_string)
                .collect();
            assert_eq!(rebuilt, formula);
        }
    }
}
