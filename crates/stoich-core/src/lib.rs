//! # stoich
//!
//! Chemical formula parsing, element lookup and reaction equation balance checking.
//!
//! ```
//! use stoich::{validate_chemical_formula, validate_reaction_equation};
//!
//! assert!(validate_chemical_formula("H2O").is_ok());
//! assert!(validate_reaction_equation("2H2 + O2 → 2H2O").is_ok());
//!
//! let err = validate_reaction_equation("H2 → H").unwrap_err();
//! assert_eq!(err.to_string(), "Equation is unbalanced: H: 2 → 1");
//! ```
//!
//! ## Architecture
//!
//! The library follows three layers:
//!
//! - **[`core`]: The Foundation.** The static element table, the lenient formula
//!   tokenizer and the atom counter. Nothing here rejects input.
//!
//! - **[`engine`]: The Validators.** Strict formula and equation validation, molar mass
//!   and configuration. Every function is pure and returns a `Result` whose error carries
//!   the exact user-facing message.
//!
//! - **[`workflows`]: The Public API for records.** Reaction record validation, loading
//!   reaction libraries from data files, and checking whole libraries at once.

pub mod core;
pub mod engine;
pub mod workflows;

pub use crate::core::atoms::{AtomCountMap, count_atoms};
pub use crate::core::elements::ElementInfo;
pub use crate::core::tokenizer::{ElementToken, parse_formula_elements};
pub use crate::engine::config::ValidationConfig;
pub use crate::engine::equation::{
    Arrow, EquationValidationResult, ValidatedEquation, validate_reaction_equation,
    validate_reaction_equation_with,
};
pub use crate::engine::error::{EquationError, FormulaError, Imbalance};
pub use crate::engine::formula::{
    FormulaValidationResult, validate_chemical_formula, validate_chemical_formula_with,
};
pub use crate::engine::mass::molar_mass;
pub use crate::workflows::reaction::{ReactionData, validate_reaction_data};
