//! # Engine Module
//!
//! Strict validation built on top of the lenient [`crate::core`] scanners.
//!
//! ## Overview
//!
//! Every validator here is a pure function: it takes a string and a
//! [`config::ValidationConfig`] and returns a `Result` describing either the parsed value or
//! the reason the input was rejected. Rejections are ordinary user-input feedback, so
//! the error types carry the exact messages meant to be shown to a user.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Count and coefficient ceilings, record field limits
//! - **Error Handling** ([`error`]) - `FormulaError`, `EquationError` and `Imbalance`
//! - **Formula Validation** ([`formula`]) - Shape, element and count checks for one formula
//! - **Equation Validation** ([`equation`]) - Arrow splitting, per-term checks and mass balance
//! - **Molar Mass** ([`mass`]) - Masses of formulas, atom maps and equation sides
//! - **Progress Monitoring** ([`progress`]) - Progress reporting for long-running workflows

pub mod config;
pub mod equation;
pub mod error;
pub mod formula;
pub mod mass;
pub mod progress;
