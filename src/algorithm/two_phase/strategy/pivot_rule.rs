//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::OrderedField;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made independent
/// of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// Position of the entering variable in the non-basic variables, and its reduced cost. `None`
    /// if no variable is profitable, that is, the tableau is optimal.
    fn select_primal_pivot_column<F: OrderedField>(
        &mut self,
        tableau: &Tableau<F>,
    ) -> Option<(usize, F)>;
}

/// Simply pivot on the first column, which has a positive reduced cost.
///
/// Columns are considered in the order of their variable index. This is not Dantzig's rule; it is
/// the default to keep the sequence of pivots predictable.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: OrderedField>(
        &mut self,
        tableau: &Tableau<F>,
    ) -> Option<(usize, F)> {
        tableau.entering_candidates()
            .find(|&(_, _, cost)| tableau.is_profitable(cost))
            .map(|(position, _, cost)| (position, cost))
    }
}

/// Pivot on the column with the largest reduced cost (Dantzig's rule).
///
/// Among equal reduced costs, the column with the lowest variable index is chosen.
pub struct LargestCoefficient;
impl PivotRule for LargestCoefficient {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: OrderedField>(
        &mut self,
        tableau: &Tableau<F>,
    ) -> Option<(usize, F)> {
        let mut largest: Option<(usize, F)> = None;
        for (position, _, cost) in tableau.entering_candidates()
            .filter(|&(_, _, cost)| tableau.is_profitable(cost)) {
            if largest.is_none_or(|(_, existing_cost)| cost > existing_cost) {
                largest = Some((position, cost));
            }
        }

        largest
    }
}
