use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Reasons a single formula is rejected. The `Display` text is the user-facing message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormulaError {
    #[error("Formula cannot be empty")]
    Empty,

    #[error("Invalid formula format. Use element symbols followed by numbers (e.g., H2O, CH4)")]
    InvalidFormat,

    #[error("Invalid element symbol: {0}")]
    UnknownElement(String),

    /// `count` is the subscript as typed, without leading zeros and never saturated.
    #[error("Invalid count for {symbol}: {count}")]
    InvalidCount { symbol: String, count: String },
}

/// A single element whose atom totals differ between the two sides of an equation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Imbalance {
    pub symbol: String,
    pub reactants: u64,
    pub products: u64,
}

impl fmt::Display for Imbalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} → {}", self.symbol, self.reactants, self.products)
    }
}

/// Reasons a reaction equation is rejected. The `Display` text is the user-facing message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EquationError {
    #[error("Equation cannot be empty")]
    Empty,

    #[error("Equation must contain an arrow (→, ->, or =)")]
    MissingArrow,

    #[error("Invalid equation format")]
    InvalidFormat,

    #[error("Both reactants and products are required")]
    MissingSide,

    /// `coefficient` is the number as typed, without leading zeros and never saturated.
    #[error("Invalid coefficient for {formula}: {coefficient}")]
    InvalidCoefficient { formula: String, coefficient: String },

    #[error(transparent)]
    Formula(#[from] FormulaError),

    #[error("Equation is unbalanced: {}", join_imbalances(.0))]
    Unbalanced(Vec<Imbalance>),
}

fn join_imbalances(imbalances: &[Imbalance]) -> String {
    imbalances
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formula_error_messages_match_user_facing_text() {
        assert_eq!(FormulaError::Empty.to_string(), "Formula cannot be empty");
        assert_eq!(
            FormulaError::UnknownElement("Xx".into()).to_string(),
            "Invalid element symbol: Xx"
        );
        assert_eq!(
            FormulaError::InvalidCount {
                symbol: "H".into(),
                count: "200".into()
            }
            .to_string(),
            "Invalid count for H: 200"
        );
    }

    #[test]
    fn formula_errors_display_transparently_inside_equation_errors() {
        let err: EquationError = FormulaError::Empty.into();
        assert_eq!(err.to_string(), "Formula cannot be empty");
    }

    #[test]
    fn unbalanced_error_joins_every_imbalance() {
        let err = EquationError::Unbalanced(vec![
            Imbalance {
                symbol: "H".into(),
                reactants: 4,
                products: 2,
            },
            Imbalance {
                symbol: "O".into(),
                reactants: 2,
                products: 3,
            },
        ]);
        assert_eq!(
            err.to_string(),
            "Equation is unbalanced: H: 4 → 2, O: 2 → 3"
        );
    }
}
