//! # Errors while solving
//!
//! Infeasible and unbounded problems are regular outcomes of the algorithm and are reported with
//! an `OptimizationResult`. The errors in this module describe situations in which no such
//! outcome could be determined.
use std::error::Error;
use std::fmt::{self, Display};

use itertools::Itertools;

use crate::io::error::InconsistencyError;

/// A `SolveError` is returned when a linear program could not be solved.
///
/// None of these errors is recovered from or retried.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SolveError {
    /// The dimensions of the cost vector, constraint matrix and right-hand side don't agree.
    MalformedInput(InconsistencyError),
    /// The columns of the basic variables don't form an invertible matrix.
    ///
    /// This indicates a defect in the bookkeeping of the basis, or a partition provided by the
    /// caller that is not a basis.
    SingularBasis {
        /// Indices of the basic variables, sorted.
        basis: Vec<usize>,
    },
    /// The basic solution of a partition provided by the caller has a negative value.
    InfeasibleBasis {
        /// Indices of the basic variables, sorted.
        basis: Vec<usize>,
    },
    /// A variable can increase the objective value, and is bounded only by coefficients that are
    /// within the tolerance of zero.
    ///
    /// Pivoting on such a coefficient is not stable, while ignoring it would wrongly report the
    /// problem as unbounded. A smaller tolerance, or scaling the problem, can help.
    NumericalInstability {
        /// Index of the variable that should enter the basis.
        column: usize,
    },
    /// The simplex method performed the maximum number of pivots without terminating.
    IterationLimit {
        /// Number of pivots performed.
        iterations: usize,
    },
}

impl Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::MalformedInput(error) => error.fmt(f),
            SolveError::SingularBasis { basis } => write!(
                f, "The basis matrix of variables {{{}}} is singular", basis.iter().join(", "),
            ),
            SolveError::InfeasibleBasis { basis } => write!(
                f, "The basic solution of variables {{{}}} is not feasible", basis.iter().join(", "),
            ),
            SolveError::NumericalInstability { column } => write!(
                f, "Variable x_{} improves the objective, but its coefficients are too small to pivot on",
                column,
            ),
            SolveError::IterationLimit { iterations } => write!(
                f, "No optimum was found within {} pivots", iterations,
            ),
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SolveError::MalformedInput(error) => Some(error),
            SolveError::SingularBasis { .. }
            | SolveError::InfeasibleBasis { .. }
            | SolveError::NumericalInstability { .. }
            | SolveError::IterationLimit { .. } => None,
        }
    }
}

impl From<InconsistencyError> for SolveError {
    fn from(error: InconsistencyError) -> Self {
        SolveError::MalformedInput(error)
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::error::SolveError;

    #[test]
    fn display() {
        let error = SolveError::SingularBasis { basis: vec![0, 3] };
        assert_eq!(error.to_string(), "The basis matrix of variables {0, 3} is singular");

        let error = SolveError::InfeasibleBasis { basis: vec![1] };
        assert_eq!(error.to_string(), "The basic solution of variables {1} is not feasible");

        let error = SolveError::NumericalInstability { column: 2 };
        assert_eq!(
            error.to_string(),
            "Variable x_2 improves the objective, but its coefficients are too small to pivot on",
        );

        let error = SolveError::IterationLimit { iterations: 7 };
        assert_eq!(error.to_string(), "No optimum was found within 7 pivots");
    }
}
