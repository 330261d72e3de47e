//! # Representation of optimal solutions
//!
//! Once a linear program is solved to optimality, a solution is derived. It contains a value for
//! every variable, including the artificial variables that were appended during preprocessing.
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::data::number_types::traits::OrderedField;

/// Optimal value and the values of all variables of a linear program.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    /// Value of the objective function for this solution.
    objective_value: F,
    /// Value of each variable, indexed by variable index.
    values: Vec<F>,
    /// Indices of the variables that are basic in the partition that proved optimality, sorted.
    basis: Vec<usize>,
}

impl<F: OrderedField> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// # Arguments
    ///
    /// * `objective_value`: Value of the objective function.
    /// * `values`: One value for each variable.
    /// * `basis`: Sorted indices of the basic variables.
    pub fn new(objective_value: F, values: Vec<F>, basis: Vec<usize>) -> Self {
        debug_assert!(basis.windows(2).all(|pair| pair[0] < pair[1]));
        debug_assert!(basis.last().is_none_or(|&last| last < values.len()));

        Self { objective_value, values, basis }
    }

    /// Value of the objective function.
    pub fn objective_value(&self) -> F {
        self.objective_value
    }

    /// Value of variable `index`.
    pub fn value(&self, index: usize) -> F {
        debug_assert!(index < self.values.len());

        self.values[index]
    }

    /// Values of all variables, indexed by variable index.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Indices of the basic variables, sorted.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// Number of variables this solution assigns a value to.
    pub fn nr_variables(&self) -> usize {
        self.values.len()
    }
}

/// Lists the optimal value and the values of the basic variables.
impl<F: OrderedField> Display for Solution<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(f, "Optimum value: {}", self.objective_value)?;
        writeln!(f, "Solution values:")?;
        for &variable in &self.basis {
            writeln!(f, "x_{}: {}", variable, self.values[variable])?;
        }
        Ok(())
    }
}
