//! # Traits
//!
//! Floating point numbers approximate an ordered field. The contracts that the names of these
//! traits imply are not kept precisely: finite representation causes rounding errors, which the
//! algorithms deal with by comparing against a tolerance.
use std::fmt::{Debug, Display};
use std::iter::Sum;

use num_traits::{Float, NumCast};

use crate::data::linear_algebra::EPSILON;

/// The simplex algorithm is defined over the ordered fields. All methods containing algorithmic
/// logic are written against this trait.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait OrderedField: Float + Sum + Debug + Display + Send + Sync + 'static {
    /// Default tolerance for comparisons with zero and for ties.
    ///
    /// Never below the machine epsilon of the type, which is used instead for types less precise
    /// than `EPSILON`.
    fn default_epsilon() -> Self {
        <Self as NumCast>::from(EPSILON)
            .map_or_else(Self::epsilon, |epsilon| epsilon.max(Self::epsilon()))
    }

    /// Whether this value is within `epsilon` of zero.
    fn is_negligible(self, epsilon: Self) -> bool {
        self.abs() <= epsilon
    }

    /// Whether two values are within `epsilon` of each other.
    fn is_close_to(self, other: Self, epsilon: Self) -> bool {
        (self - other).is_negligible(epsilon)
    }
}

impl<T: Float + Sum + Debug + Display + Send + Sync + 'static> OrderedField for T {}

#[cfg(test)]
mod test {
    use crate::data::number_types::traits::OrderedField;

    #[test]
    fn negligible() {
        assert!(1e-12f64.is_negligible(1e-10));
        assert!((-1e-12f64).is_negligible(1e-10));
        assert!(!1e-8f64.is_negligible(1e-10));
        assert!(0f32.is_negligible(f32::default_epsilon()));
    }

    #[test]
    fn close() {
        assert!(0.1f64.is_close_to(0.3 - 0.2, 1e-10));
        assert!(!1f64.is_close_to(1.001, 1e-10));
    }

    #[test]
    fn default_epsilon() {
        assert_eq!(f64::default_epsilon(), 1e-10);
        assert_eq!(f32::default_epsilon(), f32::EPSILON);
    }
}
