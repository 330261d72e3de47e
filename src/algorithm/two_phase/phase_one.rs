//! # Phase one: finding a basic feasible solution
//!
//! Starting from a basis of artificial variables, their sum is driven to zero if possible. In
//! doing so, a basic feasible solution of the original problem is found.
use log::{debug, trace, warn};

use crate::algorithm::config::SolverConfig;
use crate::algorithm::error::SolveError;
use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::partition::Partition;
use crate::algorithm::two_phase::phase_two::primal;
use crate::algorithm::two_phase::strategy::pivot_rule::FirstProfitable;
use crate::algorithm::two_phase::tableau::{Kind, Tableau};
use crate::data::linear_program::canonical_form::LinearProgram;
use crate::data::number_types::traits::OrderedField;

/// Decide whether the problem allows a solution without artificial variables.
///
/// The variables that are basic in `partition` are treated as artificial: the auxiliary
/// objective has cost `-1` for each of them and `0` for all other variables. Maximizing it drives
/// the sum of the artificial variables to zero, if possible.
///
/// # Arguments
///
/// * `program`: Problem in which the basic variables of `partition` form an identity matrix.
/// * `partition`: Initial basis of artificial variables. Is updated in place to the final basis of
/// the auxiliary problem, from which phase two can continue.
/// * `config`: Tolerance and pivot limit.
///
/// # Return value
///
/// Whether the auxiliary optimum is zero and all artificial variables are zero, that is, whether
/// the problem is feasible.
pub fn check_feasibility<F: OrderedField>(
    program: &LinearProgram<F>,
    partition: &mut Partition,
    config: &SolverConfig<F>,
) -> Result<bool, SolveError> {
    let artificial = partition.basic().to_vec();
    let auxiliary_cost = (0..program.nr_columns())
        .map(|j| if artificial.binary_search(&j).is_ok() { -F::one() } else { F::zero() })
        .collect();
    let auxiliary = program.with_cost(auxiliary_cost);

    let outcome = primal::<_, FirstProfitable>(&auxiliary, partition, Kind::AllVariables, config)?;
    let feasible = match outcome.result {
        OptimizationResult::FiniteOptimum(solution) => {
            solution.objective_value().is_negligible(config.epsilon)
                && artificial.iter().all(|&j| solution.value(j).is_negligible(config.epsilon))
        },
        // The auxiliary objective is bounded by zero, a ray is an artifact of the tolerance
        OptimizationResult::Unbounded { column } => {
            return Err(SolveError::NumericalInstability { column });
        },
        OptimizationResult::Infeasible => false,
    };

    debug!(
        "Phase one finished after {} pivots: {}",
        outcome.nr_pivots, if feasible { "feasible" } else { "infeasible" },
    );
    Ok(feasible)
}

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
///
/// If the problem is feasible, it can either have full rank, or be rank deficient.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RankedFeasibilityResult {
    /// The problem is feasible; the partition passed to `compute_bfs` is a basic feasible
    /// solution.
    Feasible {
        /// Whether the problem contains redundant rows.
        rank: Rank,
    },
    /// The problem is not feasible.
    Infeasible,
}

/// A matrix or linear program either has full rank, or be rank deficient.
///
/// In case it is rank deficient, a sorted, deduplicated list of (row)indices is provided, that
/// when removed, makes the matrix or linear program full rank.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Rank {
    /// The matrix is full rank, no rows need to be removed.
    Full,
    /// The `Vec<usize>` is sorted and contains no duplicate values.
    Deficient(Vec<usize>),
}

/// Compute a basic feasible solution for an augmented problem.
///
/// After a feasible first phase, artificial variables that are still basic (at value zero) are
/// replaced by original variables where possible.
///
/// # Arguments
///
/// * `program`: Problem as returned by preprocessing: the last variables are artificial and their
/// columns form an identity matrix.
/// * `partition`: Initial basis of artificial variables. Is updated in place.
/// * `nr_original_variables`: Number of variables before the artificial ones.
/// * `config`: Tolerance and pivot limit.
pub fn compute_bfs<F: OrderedField>(
    program: &LinearProgram<F>,
    partition: &mut Partition,
    nr_original_variables: usize,
    config: &SolverConfig<F>,
) -> Result<RankedFeasibilityResult, SolveError> {
    debug_assert!(partition.basic().iter().all(|&j| j >= nr_original_variables));

    let artificial = partition.basic().to_vec();
    if !check_feasibility(program, partition, config)? {
        return Ok(RankedFeasibilityResult::Infeasible);
    }

    let rows_to_remove = remove_artificial_basis_variables(
        program,
        partition,
        &artificial,
        nr_original_variables,
        config,
    )?;
    let rank = if rows_to_remove.is_empty() {
        Rank::Full
    } else {
        Rank::Deficient(rows_to_remove)
    };

    Ok(RankedFeasibilityResult::Feasible { rank })
}

/// Removes artificial variables from the basis by making a basis change "at zero level", that is,
/// without changing the current solution.
///
/// # Arguments
///
/// * `artificial`: The initial basic variables, sorted. The `i`-th of these has its coefficient in
/// row `i`.
///
/// # Return value
///
/// A `Vec` with indices of rows that are redundant. Is sorted as a side effect of the algorithm.
fn remove_artificial_basis_variables<F: OrderedField>(
    program: &LinearProgram<F>,
    partition: &mut Partition,
    artificial: &[usize],
    nr_original_variables: usize,
    config: &SolverConfig<F>,
) -> Result<Vec<usize>, SolveError> {
    let kind = Kind::OriginalVariables { nr_original_variables };
    let mut rows_to_remove = Vec::new();

    for (row, &variable) in artificial.iter().enumerate() {
        let Ok(pivot_row) = partition.basic().binary_search(&variable) else {
            continue;
        };

        let tableau = Tableau::derive(program, partition, kind, config.epsilon)?;
        let pivot_column = tableau.entering_candidates()
            .map(|(position, _, _)| position)
            .find(|&position| {
                !tableau.pivot_coefficients().get_value(pivot_row, position).is_negligible(config.epsilon)
            });

        if let Some(pivot_column) = pivot_column {
            let (entering, leaving) = partition.pivot(pivot_column, pivot_row);
            trace!("Zero level pivot: x_{} enters, artificial x_{} leaves", entering, leaving);
        } else {
            warn!("Constraint row {} is redundant", row);
            rows_to_remove.push(row);
        }
    }

    debug_assert!(rows_to_remove.is_sorted());
    Ok(rows_to_remove)
}
