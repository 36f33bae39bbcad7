use super::config::ValidationConfig;
use super::error::{EquationError, Imbalance};
use super::formula::validate_with_limits;
use crate::core::atoms::{
    AtomCountMap, count_atoms, parse_saturating, split_coefficient_digits, typed_number,
};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

static ARROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("→|->|=").expect("arrow pattern is valid"));

/// The token separating reactants from products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Arrow {
    #[serde(rename = "→")]
    Unicode,
    #[serde(rename = "->")]
    Ascii,
    #[serde(rename = "=")]
    Equals,
}

impl Arrow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Arrow::Unicode => "→",
            Arrow::Ascii => "->",
            Arrow::Equals => "=",
        }
    }

    fn from_match(token: &str) -> Option<Self> {
        match token {
            "→" => Some(Arrow::Unicode),
            "->" => Some(Arrow::Ascii),
            "=" => Some(Arrow::Equals),
            _ => None,
        }
    }
}

impl fmt::Display for Arrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully specified equation whose element totals agree on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedEquation {
    /// Reactant terms as written, including any leading coefficient.
    pub reactants: Vec<String>,
    /// Product terms as written, including any leading coefficient.
    pub products: Vec<String>,
    pub arrow: Arrow,
}

impl ValidatedEquation {
    pub fn reactant_atoms(&self) -> AtomCountMap {
        count_atoms(&self.reactants)
    }

    pub fn product_atoms(&self) -> AtomCountMap {
        count_atoms(&self.products)
    }
}

pub type EquationValidationResult = Result<ValidatedEquation, EquationError>;

/// Validates an equation against the default limits. See [`validate_reaction_equation_with`].
pub fn validate_reaction_equation(equation: &str) -> EquationValidationResult {
    validate_reaction_equation_with(equation, &ValidationConfig::default())
}

/// Validates a reaction equation such as `"2H2 + O2 → 2H2O"` and checks its mass balance.
///
/// The equation is split on the leftmost `→`, `->` or `=`. Each side is split on `+`
/// into terms, and each term may carry a leading coefficient. Every formula is validated
/// and the atom totals of both sides are compared element by element. Missing
/// coefficients are never inferred: the equation must already be balanced.
///
/// # Errors
///
/// Returns the first failure encountered. Structural problems come first, then formula
/// errors in term order, then the list of imbalanced elements in alphabetical order.
pub fn validate_reaction_equation_with(
    equation: &str,
    config: &ValidationConfig,
) -> EquationValidationResult {
    if equation.trim().is_empty() {
        return Err(EquationError::Empty);
    }

    let arrow_match = ARROW.find(equation).ok_or(EquationError::MissingArrow)?;
    let arrow = Arrow::from_match(arrow_match.as_str()).ok_or(EquationError::InvalidFormat)?;

    let left = &equation[..arrow_match.start()];
    let right = &equation[arrow_match.end()..];
    if left.is_empty() || right.is_empty() {
        return Err(EquationError::InvalidFormat);
    }

    let (left, right) = (left.trim(), right.trim());
    if left.is_empty() || right.is_empty() {
        return Err(EquationError::MissingSide);
    }

    let reactants = split_terms(left);
    let products = split_terms(right);

    for term in reactants.iter().chain(products.iter()) {
        validate_term(term, config)?;
    }

    let reactant_atoms = count_atoms(&reactants);
    let product_atoms = count_atoms(&products);
    let imbalances = find_imbalances(&reactant_atoms, &product_atoms);
    if !imbalances.is_empty() {
        debug!(equation, imbalanced = imbalances.len(), "Equation is unbalanced.");
        return Err(EquationError::Unbalanced(imbalances));
    }

    debug!(equation, arrow = %arrow, "Equation accepted.");
    Ok(ValidatedEquation {
        reactants,
        products,
        arrow,
    })
}

fn split_terms(side: &str) -> Vec<String> {
    side.split('+').map(|term| term.trim().to_string()).collect()
}

// Whitespace between a coefficient and its formula is left in place, so the formula
// check rejects "2 H2" as malformed.
fn validate_term(term: &str, config: &ValidationConfig) -> Result<(), EquationError> {
    let (digits, formula) = split_coefficient_digits(term);
    if !digits.is_empty() {
        let coefficient = parse_saturating(digits);
        if coefficient == 0 || coefficient > config.formula.max_coefficient {
            return Err(EquationError::InvalidCoefficient {
                formula: formula.trim_start().to_string(),
                coefficient: typed_number(digits),
            });
        }
    }
    validate_with_limits(formula, &config.formula)?;
    Ok(())
}

/// Compares two atom maps over the union of their symbols, alphabetically.
pub fn find_imbalances(reactants: &AtomCountMap, products: &AtomCountMap) -> Vec<Imbalance> {
    let symbols: BTreeSet<&str> = reactants.symbols().chain(products.symbols()).collect();
    symbols
        .into_iter()
        .filter_map(|symbol| {
            let (r, p) = (reactants.get(symbol), products.get(symbol));
            (r != p).then(|| Imbalance {
                symbol: symbol.to_string(),
                reactants: r,
                products: p,
            })
        })
        .collect()
}

/// Serializable view of an equation validation outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquationReport {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reactants: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrow: Option<Arrow>,
}

impl From<&EquationValidationResult> for EquationReport {
    fn from(result: &EquationValidationResult) -> Self {
        match result {
            Ok(eq) => Self {
                is_valid: true,
                error: None,
                reactants: Some(eq.reactants.clone()),
                products: Some(eq.products.clone()),
                arrow: Some(eq.arrow),
            },
            Err(e) => Self {
                is_valid: false,
                error: Some(e.to_string()),
                reactants: None,
                products: None,
                arrow: None,
            },
        }
    }
}
