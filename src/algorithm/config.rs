//! # Solver configuration
//!
//! Tolerances and limits shared by both phases of the algorithm.
use crate::data::number_types::traits::OrderedField;

/// Default maximum number of pivots of a single run of the simplex method.
pub const DEFAULT_MAX_ITERATIONS: usize = 50_000;

/// Parameters of the simplex method.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolverConfig<F> {
    /// Values with an absolute value at most this large are treated as zero, and ratios within
    /// this distance of each other are treated as ties.
    pub epsilon: F,
    /// Maximum number of pivots of a single run of the simplex method, `None` for no limit.
    ///
    /// The default pivot rule does not cycle. Other rules, such as `LargestCoefficient`, might not
    /// terminate on degenerate problems without a limit.
    pub max_iterations: Option<usize>,
}

impl<F: OrderedField> SolverConfig<F> {
    /// Use a different tolerance.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: F) -> Self {
        debug_assert!(epsilon >= F::zero());

        self.epsilon = epsilon;
        self
    }

    /// Use a different pivot limit.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: Option<usize>) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

impl<F: OrderedField> Default for SolverConfig<F> {
    fn default() -> Self {
        Self {
            epsilon: F::default_epsilon(),
            max_iterations: Some(DEFAULT_MAX_ITERATIONS),
        }
    }
}
