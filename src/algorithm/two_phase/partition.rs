//! # Basic and non-basic variables
//!
//! The state of the simplex method between two iterations is fully described by which variables
//! are basic. Both index sets are kept sorted, because that order determines which variable is
//! selected when several are eligible.
use itertools::Itertools;

/// Two disjoint, sorted sets of variable indices that together contain every variable once.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Partition {
    /// One variable for each constraint row.
    basic: Vec<usize>,
    /// All other variables, their value is zero.
    nonbasic: Vec<usize>,
}

impl Partition {
    /// Create a new partition.
    ///
    /// # Arguments
    ///
    /// * `basic`: Sorted indices of the basic variables.
    /// * `nonbasic`: Sorted indices of the non-basic variables. Together with `basic`, contains
    /// every index from `0` until the total number of variables exactly once.
    pub fn new(basic: Vec<usize>, nonbasic: Vec<usize>) -> Self {
        let partition = Self { basic, nonbasic };
        debug_assert!(partition.is_valid());

        partition
    }

    /// Sorted indices of the basic variables.
    pub fn basic(&self) -> &[usize] {
        &self.basic
    }

    /// Sorted indices of the non-basic variables.
    pub fn nonbasic(&self) -> &[usize] {
        &self.nonbasic
    }

    /// Number of basic variables, equal to the number of constraints.
    pub fn nr_rows(&self) -> usize {
        self.basic.len()
    }

    /// Total number of variables.
    pub fn nr_variables(&self) -> usize {
        self.basic.len() + self.nonbasic.len()
    }

    /// Exchange a non-basic variable with a basic variable.
    ///
    /// # Arguments
    ///
    /// * `entering`: Position (not variable index) in the non-basic variables of the variable that
    /// enters the basis.
    /// * `leaving`: Position (not variable index) in the basic variables of the variable that
    /// leaves the basis.
    ///
    /// # Return value
    ///
    /// The variable indices of the entering and leaving variable.
    pub fn pivot(&mut self, entering: usize, leaving: usize) -> (usize, usize) {
        debug_assert!(entering < self.nonbasic.len());
        debug_assert!(leaving < self.basic.len());

        let entering_variable = self.nonbasic.remove(entering);
        let leaving_variable = self.basic.remove(leaving);
        insert_sorted(&mut self.nonbasic, leaving_variable);
        insert_sorted(&mut self.basic, entering_variable);

        debug_assert!(self.is_valid());
        (entering_variable, leaving_variable)
    }

    /// Both sets are strictly increasing and together they are exactly `0..nr_variables`.
    pub fn is_valid(&self) -> bool {
        let strictly_increasing = |indices: &[usize]| indices.iter().tuple_windows().all(|(a, b)| a < b);

        strictly_increasing(self.basic.as_slice())
            && strictly_increasing(self.nonbasic.as_slice())
            && self.basic.iter().merge(&self.nonbasic).copied().eq(0..self.nr_variables())
    }
}

/// Insert a value in a sorted vector, such that it remains sorted.
fn insert_sorted(values: &mut Vec<usize>, value: usize) {
    let position = values.partition_point(|&existing| existing < value);
    debug_assert!(values.get(position) != Some(&value));

    values.insert(position, value);
}
