//! # Number types
//!
//! The algorithms are defined over a field that is approximated by floating point numbers. This
//! module defines the bounds that such a number type should satisfy, such that the same code can
//! run with both `f32` and `f64`.
pub mod traits;
