//! # Phase two: simplex
//!
//! Reducing the cost of a basic feasible solution until it is optimal, or until it is clear that
//! the problem is unbounded.
use log::{debug, trace};

use crate::algorithm::config::SolverConfig;
use crate::algorithm::error::SolveError;
use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::partition::Partition;
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule};
use crate::algorithm::two_phase::tableau::{Kind, Tableau};
use crate::data::linear_program::canonical_form::LinearProgram;
use crate::data::number_types::traits::OrderedField;

/// Result of a single run of the simplex method.
#[derive(Clone, Debug, PartialEq)]
pub struct SimplexOutcome<F> {
    /// Either a finite optimum or an unbounded direction. Never infeasible, as a feasible
    /// solution is needed to start.
    pub result: OptimizationResult<F>,
    /// Number of basis changes made.
    pub nr_pivots: usize,
}

/// Run the simplex method from a partition, allowing every variable to enter the basis.
///
/// # Arguments
///
/// * `program`: Problem to maximize.
/// * `partition`: Basic feasible partition to start from. Is updated in place, and describes the
/// final basis afterwards.
/// * `config`: Tolerance and pivot limit.
///
/// # Errors
///
/// See `primal`.
pub fn simplex<F: OrderedField>(
    program: &LinearProgram<F>,
    partition: &mut Partition,
    config: &SolverConfig<F>,
) -> Result<SimplexOutcome<F>, SolveError> {
    primal::<_, FirstProfitable>(program, partition, Kind::AllVariables, config)
}

/// Increases the objective value of the basic feasible solution to the maximum.
///
/// The tableau is derived again after every pivot.
///
/// While calling this method, a number of requirements should be satisfied:
/// - The basic variables of the partition form an invertible matrix
/// - All basic variables are nonnegative (primal feasibility)
///
/// # Errors
///
/// - `SolveError::SingularBasis` if a basis is not invertible.
/// - `SolveError::InfeasibleBasis` if a basic variable is negative.
/// - `SolveError::NumericalInstability` if a profitable variable is bounded only by coefficients
/// within the tolerance.
/// - `SolveError::IterationLimit` if no terminal state was reached within the configured number
/// of pivots.
pub fn primal<F, PR>(
    program: &LinearProgram<F>,
    partition: &mut Partition,
    kind: Kind,
    config: &SolverConfig<F>,
) -> Result<SimplexOutcome<F>, SolveError>
where
    F: OrderedField,
    PR: PivotRule,
{
    let mut rule = PR::new();
    let mut nr_pivots = 0;
    loop {
        let tableau = Tableau::derive(program, partition, kind, config.epsilon)?;
        trace!("{}", tableau);
        if !tableau.is_in_basic_feasible_solution_state() {
            return Err(SolveError::InfeasibleBasis { basis: partition.basic().to_vec() });
        }

        let result = match rule.select_primal_pivot_column(&tableau) {
            Some((column, cost)) => match tableau.select_primal_pivot_row(column) {
                Some(row) => {
                    if config.max_iterations.is_some_and(|max| nr_pivots >= max) {
                        return Err(SolveError::IterationLimit { iterations: nr_pivots });
                    }

                    let ratio = tableau.ratio(row, column);
                    let (entering, leaving) = partition.pivot(column, row);
                    nr_pivots += 1;
                    trace!(
                        "Pivot {}: x_{} enters, x_{} leaves, reduced cost {}, step {}",
                        nr_pivots, entering, leaving, cost, ratio,
                    );
                    continue;
                },
                None if tableau.has_negligible_decrease(column) => {
                    return Err(SolveError::NumericalInstability { column: tableau.non_basis()[column] });
                },
                None => OptimizationResult::Unbounded { column: tableau.non_basis()[column] },
            },
            None => OptimizationResult::FiniteOptimum(tableau.current_bfs()),
        };

        match &result {
            OptimizationResult::FiniteOptimum(solution) => debug!(
                "Optimal after {} pivots with objective value {}",
                nr_pivots, solution.objective_value(),
            ),
            OptimizationResult::Unbounded { column } => debug!(
                "Unbounded after {} pivots along x_{}", nr_pivots, column,
            ),
            OptimizationResult::Infeasible => {},
        }

        break Ok(SimplexOutcome { result, nr_pivots });
    }
}
