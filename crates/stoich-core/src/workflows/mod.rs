//! # Workflows Module
//!
//! High-level operations on whole reaction records, built from the [`crate::engine`]
//! validators.
//!
//! ## Architecture
//!
//! - **Reaction Records** ([`reaction`]) - The `ReactionData` record and field-by-field validation
//! - **Reaction Libraries** ([`library`]) - Loading collections of records from JSON, TOML or CSV
//! - **Bulk Checking** ([`check`]) - Validating a whole library with progress reporting,
//!   in parallel when the `parallel` feature is enabled

pub mod check;
pub mod library;
pub mod reaction;
