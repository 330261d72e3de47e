//! # Representing linear programs
//!
//! Linear programs in canonical form contain equality constraints and nonnegative variables only.
//! Once solved, a solution assigns a value to every variable.
pub mod canonical_form;
pub mod solution;
