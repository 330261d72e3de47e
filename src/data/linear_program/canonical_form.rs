//! # Linear programs in canonical form
//!
//! maximize cᵗx subject to Ax = b, x ≥ 0.
//!
//! Inequality constraints should be rewritten by the caller, using slack variables, before a
//! problem can be represented in this form.
use itertools::Itertools;

use crate::data::linear_algebra::matrix::{DenseMatrix, inner_product};
use crate::data::number_types::traits::OrderedField;
use crate::io::error::InconsistencyError;

/// An immutable linear program with equality constraints and nonnegative variables.
///
/// The dimensions of the cost vector, constraint matrix and right-hand side are consistent: this
/// is checked when the program is created.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearProgram<F> {
    /// Objective coefficients, one for each variable, to be maximized.
    cost: Vec<F>,
    /// Constraint coefficients of size `m` x `n`.
    constraints: DenseMatrix<F>,
    /// Right-hand side, one value for each constraint row.
    b: Vec<F>,
}

impl<F: OrderedField> LinearProgram<F> {
    /// Create a new linear program from raw data.
    ///
    /// # Arguments
    ///
    /// * `cost`: Objective coefficients `c`, of length `n`.
    /// * `constraints`: Constraint matrix `A`, given as `m` rows of length `n`.
    /// * `b`: Right-hand side, of length `m`.
    ///
    /// # Errors
    ///
    /// An `InconsistencyError` if there are no variables or constraints, if the lengths of `c`, the
    /// rows of `A` and `b` don't agree, or if a value is not finite.
    pub fn new(
        cost: Vec<F>,
        constraints: Vec<Vec<F>>,
        b: Vec<F>,
    ) -> Result<Self, InconsistencyError> {
        if cost.is_empty() {
            return Err(InconsistencyError::new("The objective function has no coefficients"));
        }
        if constraints.is_empty() {
            return Err(InconsistencyError::new("There are no constraints"));
        }
        if let Some((row, coefficients)) = constraints.iter()
            .find_position(|row| row.len() != cost.len()) {
            return Err(InconsistencyError::in_row(
                format!("Expected {} coefficients, found {}", cost.len(), coefficients.len()),
                row,
            ));
        }
        if b.len() != constraints.len() {
            return Err(InconsistencyError::new(format!(
                "Expected {} right-hand side values, one per constraint, found {}",
                constraints.len(), b.len(),
            )));
        }
        if cost.iter().any(|value| !value.is_finite()) {
            return Err(InconsistencyError::new("The objective function has a value that is not finite"));
        }
        if let Some((row, _)) = constraints.iter()
            .zip(&b)
            .find_position(|(row, rhs)| !rhs.is_finite() || row.iter().any(|value| !value.is_finite())) {
            return Err(InconsistencyError::in_row("A value is not finite", row));
        }

        Ok(Self {
            cost,
            constraints: DenseMatrix::from_data(constraints),
            b,
        })
    }

    /// Assemble a program from parts of which the dimensions are known to agree.
    pub(crate) fn from_parts(cost: Vec<F>, constraints: DenseMatrix<F>, b: Vec<F>) -> Self {
        debug_assert_eq!(cost.len(), constraints.nr_columns());
        debug_assert_eq!(b.len(), constraints.nr_rows());

        Self { cost, constraints, b }
    }

    /// The same constraints with a different objective function.
    ///
    /// # Arguments
    ///
    /// * `cost`: New objective coefficients, one for each variable.
    pub fn with_cost(&self, cost: Vec<F>) -> Self {
        debug_assert_eq!(cost.len(), self.nr_columns());

        Self::from_parts(cost, self.constraints.clone(), self.b.clone())
    }

    /// Objective coefficients `c`.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// Constraint matrix `A`.
    pub fn constraints(&self) -> &DenseMatrix<F> {
        &self.constraints
    }

    /// Right-hand side `b`.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// Number of constraints, `m`.
    pub fn nr_rows(&self) -> usize {
        self.constraints.nr_rows()
    }

    /// Number of variables, `n`.
    pub fn nr_columns(&self) -> usize {
        self.constraints.nr_columns()
    }

    /// Value of the objective function `cᵗx`.
    pub fn objective_value(&self, x: &[F]) -> F {
        inner_product(&self.cost, x)
    }

    /// Whether `x` satisfies `Ax = b` and `x ≥ 0`, up to a tolerance.
    pub fn is_feasible(&self, x: &[F], epsilon: F) -> bool {
        debug_assert_eq!(x.len(), self.nr_columns());

        x.iter().all(|&value| value >= -epsilon)
            && self.constraints.mul_vector(x).into_iter()
                .zip(&self.b)
                .all(|(lhs, &rhs)| lhs.is_close_to(rhs, epsilon))
    }
}
