//! # A linear program solver
//!
//! Linear programs in canonical form, maximize cᵗx subject to Ax = b and x ≥ 0, are solved using
//! the two phase Simplex Method, with the tableau notation of the book Understanding and Using Linear
//! Programming by Jiří Matoušek and Bernd Gärtner. The tableau is derived from scratch in every
//! iteration.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
