use super::config::{FormulaLimits, ValidationConfig};
use super::equation::ValidatedEquation;
use super::error::FormulaError;
use super::formula::validate_with_limits;
use crate::core::atoms::AtomCountMap;
use crate::core::elements;
use tracing::warn;

/// Molar mass of a formula in g/mol, using the default limits.
pub fn molar_mass(formula: &str) -> Result<f64, FormulaError> {
    molar_mass_with_limits(formula, &FormulaLimits::default())
}

/// Molar mass of a formula in g/mol.
///
/// # Errors
///
/// The formula is validated first, and any [`FormulaError`] is returned unchanged.
pub fn molar_mass_with(formula: &str, config: &ValidationConfig) -> Result<f64, FormulaError> {
    molar_mass_with_limits(formula, &config.formula)
}

fn molar_mass_with_limits(formula: &str, limits: &FormulaLimits) -> Result<f64, FormulaError> {
    let atoms: AtomCountMap = validate_with_limits(formula, limits)?
        .into_iter()
        .map(|token| (token.symbol, u64::from(token.count)))
        .collect();
    Ok(molar_mass_of(&atoms))
}

/// Sums `atomic mass × count` over an atom map.
///
/// Symbols that are not in the element table contribute nothing and are logged.
pub fn molar_mass_of(atoms: &AtomCountMap) -> f64 {
    atoms
        .iter()
        .map(|(symbol, count)| match elements::atomic_mass(symbol) {
            Some(mass) => mass * count as f64,
            None => {
                warn!("Unknown atomic mass for element: {}", symbol);
                0.0
            }
        })
        .sum()
}

/// Total mass of the reactant side and of the product side, coefficients included.
pub fn side_masses(equation: &ValidatedEquation) -> (f64, f64) {
    (
        molar_mass_of(&equation.reactant_atoms()),
        molar_mass_of(&equation.product_atoms()),
    )
}
