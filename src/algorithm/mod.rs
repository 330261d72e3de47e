//! # Algorithms
use crate::algorithm::config::SolverConfig;
use crate::algorithm::error::SolveError;
use crate::data::linear_program::canonical_form::LinearProgram;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::OrderedField;

pub mod config;
pub mod error;
pub mod two_phase;

/// A problem formulation of which a relaxation can be solved.
///
/// There are no integer constraints for linear programs in canonical form, so the relaxation is
/// the problem itself.
pub trait SolveRelaxation<F> {
    /// Solve the relaxed version of this problem.
    ///
    /// # Return value
    ///
    /// Whether the problem is feasible, and if so, a solution if the problem is bounded.
    ///
    /// # Errors
    ///
    /// If the algorithm could not come to a conclusion, see `SolveError`.
    fn solve_relaxation(&self, config: &SolverConfig<F>) -> Result<OptimizationResult<F>, SolveError>;
}

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm
#[derive(Clone, Debug, PartialEq)]
pub enum OptimizationResult<F> {
    /// No point satisfies all constraints.
    Infeasible,
    /// An optimal basic feasible solution.
    FiniteOptimum(Solution<F>),
    /// The objective value can be increased without limit.
    Unbounded {
        /// Index of the non-basic variable along which the objective increases without limit.
        column: usize,
    },
}

/// Maximize `cᵗx` subject to `Ax = b` and `x ≥ 0`.
///
/// # Arguments
///
/// * `cost`: Objective coefficients `c`, of length `n`.
/// * `constraints`: Constraint matrix `A`, given as `m` rows of length `n`.
/// * `b`: Right-hand side, of length `m`.
/// * `config`: Tolerance and pivot limit.
///
/// # Errors
///
/// `SolveError::MalformedInput` if the dimensions don't agree, and any error of the simplex method.
pub fn solve<F: OrderedField>(
    cost: Vec<F>,
    constraints: Vec<Vec<F>>,
    b: Vec<F>,
    config: &SolverConfig<F>,
) -> Result<OptimizationResult<F>, SolveError> {
    let program = LinearProgram::new(cost, constraints, b)?;
    program.solve_relaxation(config)
}
