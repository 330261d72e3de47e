//! # Artificial variables
//!
//! Before a basic feasible solution is known, one artificial variable is added for every
//! constraint. Together, their columns form an identity matrix, which is the initial basis.
use log::debug;

use crate::algorithm::two_phase::partition::Partition;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::canonical_form::LinearProgram;
use crate::data::number_types::traits::OrderedField;

/// Append an artificial variable to every constraint of a linear program.
///
/// Rows with a negative right-hand side are multiplied by `-1` first, such that setting each
/// artificial variable to its right-hand side value is a basic feasible solution.
///
/// # Arguments
///
/// * `program`: Problem with `n` variables and `m` constraints.
///
/// # Return value
///
/// A partition with the `m` artificial variables `n..n + m` basic and the original variables
/// `0..n` non-basic, and the augmented problem. The cost of the artificial variables is zero.
pub fn preprocess<F: OrderedField>(program: &LinearProgram<F>) -> (Partition, LinearProgram<F>) {
    let nr_rows = program.nr_rows();
    let nr_columns = program.nr_columns();

    let mut constraints = program.constraints().clone();
    let mut b = program.b().to_vec();
    for (row, value) in b.iter_mut().enumerate() {
        if *value < F::zero() {
            constraints.multiply_row(row, -F::one());
            *value = -*value;
        }
    }

    let constraints = constraints.hcat(DenseMatrix::identity(nr_rows));
    let cost = program.cost().iter().copied()
        .chain(std::iter::repeat_n(F::zero(), nr_rows))
        .collect();

    debug!("Added {} artificial variables to {} original variables", nr_rows, nr_columns);

    let partition = Partition::new(
        (nr_columns..nr_columns + nr_rows).collect(),
        (0..nr_columns).collect(),
    );
    (partition, LinearProgram::from_parts(cost, constraints, b))
}
