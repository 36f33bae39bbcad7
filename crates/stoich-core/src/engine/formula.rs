use super::config::{FormulaLimits, ValidationConfig};
use super::error::FormulaError;
use crate::core::atoms::typed_number;
use crate::core::elements;
use crate::core::tokenizer::{ElementToken, parse_formula_elements};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::trace;

static FORMULA_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-z]?[0-9]*(?:[A-Z][a-z]?[0-9]*)*$").expect("formula pattern is valid")
});

static FORMULA_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-z]?([0-9]*)").expect("group pattern is valid"));

/// `Ok` with the parsed tokens, or the reason the formula was rejected.
pub type FormulaValidationResult = Result<Vec<ElementToken>, FormulaError>;

/// Validates a formula against the default limits. See [`validate_chemical_formula_with`].
pub fn validate_chemical_formula(formula: &str) -> FormulaValidationResult {
    validate_with_limits(formula, &FormulaLimits::default())
}

/// Validates a single chemical formula such as `"H2O"` or `"KMnO4"`.
///
/// The input must consist solely of groups of one uppercase letter, an optional
/// lowercase letter and optional digits. Every symbol must be a known element and every
/// subscript must lie in `1..=max_count`. Whitespace is not trimmed.
///
/// # Errors
///
/// Returns the first [`FormulaError`] encountered, in the order: empty input, shape,
/// then per token (unknown symbol before count range).
pub fn validate_chemical_formula_with(
    formula: &str,
    config: &ValidationConfig,
) -> FormulaValidationResult {
    validate_with_limits(formula, &config.formula)
}

pub(crate) fn validate_with_limits(
    formula: &str,
    limits: &FormulaLimits,
) -> FormulaValidationResult {
    if formula.trim().is_empty() {
        return Err(FormulaError::Empty);
    }
    if !FORMULA_SHAPE.is_match(formula) {
        return Err(FormulaError::InvalidFormat);
    }

    // A well-shaped formula yields exactly one group per token.
    let tokens = parse_formula_elements(formula);
    let digit_runs = FORMULA_GROUP
        .captures_iter(formula)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()));
    for (token, digits) in tokens.iter().zip(digit_runs) {
        if !elements::is_valid_symbol(&token.symbol) {
            return Err(FormulaError::UnknownElement(token.symbol.clone()));
        }
        if token.count == 0 || token.count > limits.max_count {
            return Err(FormulaError::InvalidCount {
                symbol: token.symbol.clone(),
                count: typed_number(digits),
            });
        }
    }

    trace!(formula, tokens = tokens.len(), "Formula accepted.");
    Ok(tokens)
}

/// Serializable view of a formula validation outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaReport {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<ElementToken>>,
}

impl From<&FormulaValidationResult> for FormulaReport {
    fn from(result: &FormulaValidationResult) -> Self {
        match result {
            Ok(elements) => Self {
                is_valid: true,
                error: None,
                elements: Some(elements.clone()),
            },
            Err(e) => Self {
                is_valid: false,
                error: Some(e.to_string()),
                elements: None,
            },
        }
    }
}
