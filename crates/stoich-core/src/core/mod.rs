//! # Core Module
//!
//! Stateless building blocks shared by every validator in the crate.
//!
//! ## Overview
//!
//! - [`elements`] - Immutable table of the 118 IUPAC elements (symbol, name, atomic number, mass)
//! - [`tokenizer`] - Lenient scanner turning a formula into `(symbol, count)` tokens
//! - [`atoms`] - Aggregation of tokens into per-element atom totals, with coefficient handling
//!
//! Nothing in this module rejects input. The scanner and the atom counter extract whatever
//! they can, and strict checks live in [`crate::engine`].

pub mod atoms;
pub mod elements;
pub mod tokenizer;
