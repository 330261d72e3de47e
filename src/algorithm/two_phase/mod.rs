//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm. The
//! algorithm is implemented as described in chapter 5 of Understanding and Using Linear
//! Programming, a book by Jiří Matoušek and Bernd Gärtner.
//!
//! Artificial variables are added to find an initial basis, their sum is minimized in the first
//! phase, and the original objective is maximized from the resulting basis in the second phase.
use log::debug;

use crate::algorithm::config::SolverConfig;
use crate::algorithm::error::SolveError;
use crate::algorithm::{OptimizationResult, SolveRelaxation};
use crate::algorithm::two_phase::phase_one::{compute_bfs, Rank, RankedFeasibilityResult};
use crate::algorithm::two_phase::phase_two::primal;
use crate::algorithm::two_phase::preprocess::preprocess;
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule};
use crate::algorithm::two_phase::tableau::Kind;
use crate::data::linear_program::canonical_form::LinearProgram;
use crate::data::number_types::traits::OrderedField;

pub mod partition;
pub mod phase_one;
pub mod phase_two;
pub mod preprocess;
pub mod strategy;
pub mod tableau;

impl<F: OrderedField> SolveRelaxation<F> for LinearProgram<F> {
    fn solve_relaxation(&self, config: &SolverConfig<F>) -> Result<OptimizationResult<F>, SolveError> {
        // Default choice
        solve::<_, FirstProfitable>(self, config)
    }
}

/// Solve a linear program with the two phase method.
///
/// # Arguments
///
/// * `program`: Problem to maximize.
/// * `config`: Tolerance and pivot limit, the limit applies to each phase separately.
///
/// # Return value
///
/// Whether the problem is feasible, and if so, a solution if the problem is bounded. The solution
/// contains a value for every variable, including the artificial variables appended to the
/// problem, which are zero.
pub fn solve<F, PR>(
    program: &LinearProgram<F>,
    config: &SolverConfig<F>,
) -> Result<OptimizationResult<F>, SolveError>
where
    F: OrderedField,
    PR: PivotRule,
{
    let (mut partition, augmented) = preprocess(program);
    let nr_original_variables = program.nr_columns();

    match compute_bfs(&augmented, &mut partition, nr_original_variables, config)? {
        RankedFeasibilityResult::Feasible { rank } => {
            if let Rank::Deficient(rows) = &rank {
                debug!("Continuing with {} redundant rows", rows.len());
            }

            let kind = Kind::OriginalVariables { nr_original_variables };
            let outcome = primal::<_, PR>(&augmented, &mut partition, kind, config)?;
            Ok(outcome.result)
        },
        RankedFeasibilityResult::Infeasible => {
            debug!("Problem is infeasible");
            Ok(OptimizationResult::Infeasible)
        },
    }
}

#[cfg(test)]
mod test;
