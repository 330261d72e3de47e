//! # Data structures for Simplex
//!
//! Contains the simplex tableau and the logic to select a pivot row from it. The tableau is
//! represented as
//!
//! ```text
//! x_B = p + Q x_N
//! ---------------
//! z   = z_0 + rᵗ x_N
//! ```
//!
//! and is derived from scratch for every partition, rather than being updated after a pivot.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::algorithm::error::SolveError;
use crate::algorithm::two_phase::partition::Partition;
use crate::data::linear_algebra::matrix::{DenseMatrix, inner_product};
use crate::data::linear_program::canonical_form::LinearProgram;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::OrderedField;

/// Which variables may enter the basis.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Kind {
    /// Every non-basic variable may enter the basis.
    AllVariables,
    /// Only the variables with an index below `nr_original_variables` may enter the basis.
    ///
    /// Used after the first phase: the artificial variables are appended after the original ones
    /// and should remain at zero.
    OriginalVariables {
        /// Number of variables of the problem before artificial variables were added.
        nr_original_variables: usize,
    },
}

impl Kind {
    /// Whether a variable is allowed to enter the basis.
    pub fn may_enter(self, variable: usize) -> bool {
        match self {
            Kind::AllVariables => true,
            Kind::OriginalVariables { nr_original_variables } => variable < nr_original_variables,
        }
    }
}

/// The simplex tableau corresponding to a partition of the variables.
///
/// It owns a copy of the partition that it was derived from; positions used by its methods refer
/// to positions within the basic and non-basic variables of that partition.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    /// Sorted basic variable indices.
    basis: Vec<usize>,
    /// Sorted non-basic variable indices.
    non_basis: Vec<usize>,
    /// `Q = -B⁻¹ A_N`, of size `m` x `|N|`.
    pivot_coefficients: DenseMatrix<F>,
    /// `p = B⁻¹ b`, the values of the basic variables.
    constants: Vec<F>,
    /// `r = c_N - (c_Bᵗ B⁻¹) A_N`, one for each non-basic variable.
    reduced_costs: Vec<F>,
    /// `z_0 = c_Bᵗ B⁻¹ b`.
    objective_value: F,

    kind: Kind,
    epsilon: F,
}

impl<F: OrderedField> Tableau<F> {
    /// Derive the tableau of a partition.
    ///
    /// # Arguments
    ///
    /// * `program`: Problem to derive the tableau for; its objective function determines the
    /// reduced costs.
    /// * `partition`: Basic and non-basic variables.
    /// * `kind`: Which variables may enter the basis.
    /// * `epsilon`: Tolerance for comparisons with zero.
    ///
    /// # Errors
    ///
    /// `SolveError::SingularBasis` if the columns of the basic variables are not invertible.
    pub fn derive(
        program: &LinearProgram<F>,
        partition: &Partition,
        kind: Kind,
        epsilon: F,
    ) -> Result<Self, SolveError> {
        debug_assert_eq!(partition.nr_rows(), program.nr_rows());
        debug_assert_eq!(partition.nr_variables(), program.nr_columns());

        let basis = partition.basic().to_vec();
        let non_basis = partition.nonbasic().to_vec();

        let basis_columns = program.constraints().select_columns(&basis);
        let non_basis_columns = program.constraints().select_columns(&non_basis);
        let basis_cost = basis.iter().map(|&j| program.cost()[j]).collect::<Vec<_>>();

        let basis_inverse = basis_columns.inverse(epsilon)
            .ok_or_else(|| SolveError::SingularBasis { basis: basis.clone() })?;

        let pivot_coefficients = basis_inverse.mul(&non_basis_columns).scale(-F::one());
        let constants = basis_inverse.mul_vector(program.b());
        // c_Bᵗ B⁻¹, the dual values
        let duals = basis_inverse.left_mul_vector(&basis_cost);
        let reduced_costs = non_basis.iter()
            .zip(non_basis_columns.left_mul_vector(&duals))
            .map(|(&j, dual_cost)| program.cost()[j] - dual_cost)
            .collect();
        let objective_value = inner_product(&duals, program.b());

        Ok(Self {
            basis,
            non_basis,
            pivot_coefficients,
            constants,
            reduced_costs,
            objective_value,
            kind,
            epsilon,
        })
    }

    /// Non-basic variables that may enter the basis, with their reduced cost.
    ///
    /// # Return value
    ///
    /// Iterator over (position in the non-basic variables, variable index, reduced cost) tuples,
    /// ordered by variable index.
    pub fn entering_candidates(&self) -> impl Iterator<Item = (usize, usize, F)> + '_ {
        self.non_basis.iter()
            .zip(&self.reduced_costs)
            .enumerate()
            .filter(|&(_, (&variable, _))| self.kind.may_enter(variable))
            .map(|(position, (&variable, &cost))| (position, variable, cost))
    }

    /// Whether the objective can be improved by increasing the given reduced cost.
    pub fn is_profitable(&self, reduced_cost: F) -> bool {
        reduced_cost > self.epsilon
    }

    /// Whether no variable that may enter the basis has a positive reduced cost.
    pub fn is_optimal(&self) -> bool {
        self.entering_candidates().all(|(_, _, cost)| !self.is_profitable(cost))
    }

    /// Determine the row to pivot on, given the column.
    ///
    /// Of all rows in which the value of the basic variable decreases as the entering variable
    /// increases, this is the row that limits the increase the most. Ties (within the tolerance)
    /// are broken by taking the first row, which corresponds to the basic variable with the lowest
    /// index.
    ///
    /// # Arguments
    ///
    /// * `column`: Position of the entering variable in the non-basic variables.
    ///
    /// # Return value
    ///
    /// Position of the leaving variable in the basic variables. If not found, the problem is
    /// unbounded.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.non_basis.len());

        let ratios = (0..self.nr_rows())
            .filter_map(|row| {
                let coefficient = self.pivot_coefficients.get_value(row, column);
                (coefficient < -self.epsilon).then(|| (row, self.constants[row] / -coefficient))
            })
            .collect::<Vec<_>>();

        let min_ratio = ratios.iter().map(|&(_, ratio)| ratio).reduce(F::min)?;
        ratios.into_iter()
            .find(|&(_, ratio)| ratio <= min_ratio + self.epsilon)
            .map(|(row, _)| row)
    }

    /// Whether a basic variable decreases as the variable in `column` increases, but at a rate
    /// that is too small to pivot on.
    ///
    /// If no pivot row exists for a profitable column, the problem is unbounded only when this is
    /// not the case. Otherwise, the tolerance hides a bound on the objective value.
    ///
    /// # Arguments
    ///
    /// * `column`: Position of the entering variable in the non-basic variables.
    pub fn has_negligible_decrease(&self, column: usize) -> bool {
        debug_assert!(column < self.non_basis.len());

        (0..self.nr_rows()).any(|row| {
            let coefficient = self.pivot_coefficients.get_value(row, column);
            // Rounding errors stay below the machine epsilon
            coefficient < -F::epsilon() && coefficient >= -self.epsilon
        })
    }

    /// Ratio of the value of a basic variable and the rate at which it decreases.
    pub fn ratio(&self, row: usize, column: usize) -> F {
        self.constants[row] / -self.pivot_coefficients.get_value(row, column)
    }

    /// Get the current basic feasible solution.
    ///
    /// Basic variables take the values of `p`, non-basic variables are zero.
    pub fn current_bfs(&self) -> Solution<F> {
        let mut values = vec![F::zero(); self.nr_columns()];
        for (&variable, &value) in self.basis.iter().zip(&self.constants) {
            values[variable] = value;
        }

        Solution::new(self.objective_value, values, self.basis.clone())
    }

    /// Whether all basic variables are nonnegative, up to a tolerance.
    pub fn is_in_basic_feasible_solution_state(&self) -> bool {
        let tolerance = self.epsilon.sqrt().max(self.epsilon);
        self.constants.iter().all(|&value| value >= -tolerance)
    }

    /// `Q = -B⁻¹ A_N`.
    pub fn pivot_coefficients(&self) -> &DenseMatrix<F> {
        &self.pivot_coefficients
    }

    /// `p = B⁻¹ b`, one value for each basic variable.
    pub fn constants(&self) -> &[F] {
        &self.constants
    }

    /// `r`, one value for each non-basic variable.
    pub fn reduced_costs(&self) -> &[F] {
        &self.reduced_costs
    }

    /// `z_0`, the value of the objective function at the current basic solution.
    pub fn objective_value(&self) -> F {
        self.objective_value
    }

    /// Non-basic variables, sorted.
    pub fn non_basis(&self) -> &[usize] {
        &self.non_basis
    }

    /// Number of rows in the tableau.
    pub fn nr_rows(&self) -> usize {
        self.basis.len()
    }

    /// Number of variables in the problem.
    pub fn nr_columns(&self) -> usize {
        self.basis.len() + self.non_basis.len()
    }
}

impl<F: OrderedField> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "=== Tableau ===")?;
        writeln!(
            f, "{:>8} | {:>10} | {}",
            "", "p", self.non_basis.iter().map(|j| format!("{:>10}", format!("x_{}", j))).join(" "),
        )?;
        for (row, (variable, constant)) in self.basis.iter().zip(&self.constants).enumerate() {
            writeln!(
                f, "{:>8} | {:>10.4} | {}",
                format!("x_{}", variable),
                constant,
                self.pivot_coefficients.row(row).map(|value| format!("{:>10.4}", value)).join(" "),
            )?;
        }
        writeln!(
            f, "{:>8} | {:>10.4} | {}",
            "z", self.objective_value,
            self.reduced_costs.iter().map(|value| format!("{:>10.4}", value)).join(" "),
        )
    }
}
