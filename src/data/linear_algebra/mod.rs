//! # Linear algebra primitives
//!
//! Dense linear algebra primitives used to represent the data of a linear program and to derive
//! the simplex tableau from it.

pub mod matrix;

/// Default tolerance for comparisons with zero.
pub const EPSILON: f64 = 1e-10;
