//! # Matrix implementations
//!
//! A dense, row-major matrix with the elementary row operations needed to invert a basis. The
//! simplex tableau is derived from scratch every iteration using these operations.
use std::cmp::Ordering;
use std::slice::Iter;

use crate::data::number_types::traits::OrderedField;

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: OrderedField> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided row-major data.
    ///
    /// All rows should have the same length; this is not checked in release builds, callers
    /// validate their input before creating a matrix.
    pub fn from_data(data: Vec<Vec<F>>) -> Self {
        let (nr_rows, nr_columns) = get_data_dimensions(&data);
        Self { data, nr_rows, nr_columns }
    }

    /// Create a dense square identity matrix of size `len`.
    pub fn identity(len: usize) -> Self {
        debug_assert!(len > 0);

        let data = (0..len)
            .map(|i| (0..len).map(|j| if i == j { F::one() } else { F::zero() }).collect())
            .collect();

        Self { data, nr_rows: len, nr_columns: len }
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> Iter<'_, F> {
        debug_assert!(i < self.nr_rows);

        self.data[i].iter()
    }

    /// Multiply row `i` with a factor `factor`.
    pub fn multiply_row(&mut self, i: usize, factor: F) {
        debug_assert!(i < self.nr_rows);

        for value in &mut self.data[i] {
            *value = *value * factor;
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: F) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            let addition = factor * self.data[read_row][j];
            self.data[write_row][j] = self.data[write_row][j] + addition;
        }
    }

    /// Exchange rows `i` and `k`.
    pub fn swap_rows(&mut self, i: usize, k: usize) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(k < self.nr_rows);

        self.data.swap(i, k);
    }

    /// Create a new matrix consisting of the given columns, in the given order.
    ///
    /// # Arguments
    ///
    /// * `columns`: Column indices, each in range `0` until `self.nr_columns()`. May be empty.
    pub fn select_columns(&self, columns: &[usize]) -> Self {
        debug_assert!(columns.iter().all(|&j| j < self.nr_columns));

        let data = self.data.iter()
            .map(|row| columns.iter().map(|&j| row[j]).collect())
            .collect();

        Self { data, nr_rows: self.nr_rows, nr_columns: columns.len() }
    }

    /// Concatenate another matrix to the "right" (high column indices) of this matrix
    /// "horizontally" (number of rows must be equal).
    pub fn hcat(self, other: Self) -> Self {
        debug_assert_eq!(self.nr_rows, other.nr_rows);

        let nr_columns = self.nr_columns + other.nr_columns;
        let data = self.data.into_iter()
            .zip(other.data)
            .map(|(mut left, right)| {
                left.extend(right);
                left
            })
            .collect();

        Self { data, nr_rows: self.nr_rows, nr_columns }
    }

    /// Matrix product `self * other`.
    pub fn mul(&self, other: &Self) -> Self {
        debug_assert_eq!(self.nr_columns, other.nr_rows);

        let data = self.data.iter()
            .map(|row| {
                (0..other.nr_columns)
                    .map(|j| row.iter().zip(&other.data).map(|(&x, other_row)| x * other_row[j]).sum::<F>())
                    .collect()
            })
            .collect();

        Self { data, nr_rows: self.nr_rows, nr_columns: other.nr_columns }
    }

    /// Product of this matrix with a column vector, `self * vector`.
    pub fn mul_vector(&self, vector: &[F]) -> Vec<F> {
        debug_assert_eq!(vector.len(), self.nr_columns);

        self.data.iter()
            .map(|row| inner_product(row, vector))
            .collect()
    }

    /// Product of a row vector with this matrix, `vectorᵗ * self`.
    pub fn left_mul_vector(&self, vector: &[F]) -> Vec<F> {
        debug_assert_eq!(vector.len(), self.nr_rows);

        (0..self.nr_columns)
            .map(|j| vector.iter().zip(&self.data).map(|(&x, row)| x * row[j]).sum::<F>())
            .collect()
    }

    /// Multiply every value of this matrix by `factor`.
    pub fn scale(mut self, factor: F) -> Self {
        for row in &mut self.data {
            for value in row.iter_mut() {
                *value = *value * factor;
            }
        }

        self
    }

    /// Compute the inverse using Gauss-Jordan elimination with partial pivoting.
    ///
    /// # Arguments
    ///
    /// * `epsilon`: Pivots with an absolute value at most this large are considered zero.
    ///
    /// # Return value
    ///
    /// `None` if the matrix is singular (with respect to `epsilon`).
    pub fn inverse(&self, epsilon: F) -> Option<Self> {
        debug_assert_eq!(self.nr_rows, self.nr_columns);

        let size = self.nr_rows;
        let mut work = self.clone();
        let mut inverse = Self::identity(size);

        for k in 0..size {
            let pivot_row = (k..size)
                .max_by(|&i, &j| {
                    work.data[i][k].abs()
                        .partial_cmp(&work.data[j][k].abs())
                        .unwrap_or(Ordering::Equal)
                })?;
            if work.data[pivot_row][k].is_nan() || work.data[pivot_row][k].abs() <= epsilon {
                return None;
            }

            if pivot_row != k {
                work.swap_rows(k, pivot_row);
                inverse.swap_rows(k, pivot_row);
            }

            let factor = F::one() / work.data[k][k];
            work.multiply_row(k, factor);
            inverse.multiply_row(k, factor);

            for i in (0..size).filter(|&i| i != k) {
                let multiple = -work.data[i][k];
                if multiple != F::zero() {
                    work.mul_add_rows(k, i, multiple);
                    inverse.mul_add_rows(k, i, multiple);
                }
            }
        }

        Some(inverse)
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

/// Inner product of two vectors of equal length.
pub fn inner_product<F: OrderedField>(left: &[F], right: &[F]) -> F {
    debug_assert_eq!(left.len(), right.len());

    left.iter().zip(right).map(|(&x, &y)| x * y).sum()
}

/// If all row sizes agree, return the dimensions of the matrix `data`.
fn get_data_dimensions<F>(data: &[Vec<F>]) -> (usize, usize) {
    let nr_rows = data.len();
    let nr_columns = data.first().map_or(0, Vec::len);

    debug_assert!(
        data.iter().all(|row| row.len() == nr_columns),
        "Row lengths not equal: first row has length {}", nr_columns,
    );

    (nr_rows, nr_columns)
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::data::linear_algebra::matrix::{DenseMatrix, inner_product};

    fn test_matrix() -> DenseMatrix<f64> {
        DenseMatrix::from_data(vec![
            vec![1f64, 2f64, 0f64],
            vec![0f64, 5f64, 6f64],
        ])
    }

    fn assert_matrix_eq(left: &DenseMatrix<f64>, right: &DenseMatrix<f64>) {
        assert_eq!(left.nr_rows(), right.nr_rows());
        assert_eq!(left.nr_columns(), right.nr_columns());
        for i in 0..left.nr_rows() {
            for j in 0..left.nr_columns() {
                assert_abs_diff_eq!(left.get_value(i, j), right.get_value(i, j), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn create() {
        let m = test_matrix();
        assert_eq!(m.get_value(0, 0), 1f64);
        assert_eq!(m.get_value(1, 2), 6f64);

        let size = 13;
        let m = DenseMatrix::<f64>::identity(size);
        assert_eq!(m.get_value(0, 0), 1f64);
        assert_eq!(m.get_value(size - 1, size - 1), 1f64);
        assert_eq!(m.get_value(0, 1), 0f64);
        assert_eq!(m.get_value(size - 1, size - 2), 0f64);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_get() {
        test_matrix().get_value(2, 0);
    }

    #[test]
    fn row() {
        let m = test_matrix();

        assert_eq!(m.row(0).copied().collect::<Vec<_>>(), vec![1f64, 2f64, 0f64]);
        assert_eq!(m.row(1).sum::<f64>(), 5f64 + 6f64);
    }

    #[test]
    fn row_operations() {
        let mut m = test_matrix();
        m.mul_add_rows(0, 1, -7.5f64);
        assert_abs_diff_eq!(m.get_value(1, 1), 5f64 - 7.5f64 * 2f64);
        assert_abs_diff_eq!(m.get_value(1, 0), -7.5f64);

        let mut m = test_matrix();
        m.multiply_row(1, 0.5f64);
        assert_eq!(m.row(1).copied().collect::<Vec<_>>(), vec![0f64, 2.5f64, 3f64]);

        m.swap_rows(0, 1);
        assert_eq!(m.get_value(0, 2), 3f64);
        assert_eq!(m.get_value(1, 0), 1f64);
    }

    #[test]
    fn select_and_concatenate() {
        let m = test_matrix();

        let selected = m.select_columns(&[2, 0]);
        assert_eq!(selected, DenseMatrix::from_data(vec![vec![0f64, 1f64], vec![6f64, 0f64]]));

        let empty = m.select_columns(&[]);
        assert_eq!(empty.nr_rows(), 2);
        assert_eq!(empty.nr_columns(), 0);

        let concatenated = m.hcat(DenseMatrix::identity(2));
        assert_eq!(concatenated.nr_columns(), 5);
        assert_eq!(concatenated, DenseMatrix::from_data(vec![
            vec![1f64, 2f64, 0f64, 1f64, 0f64],
            vec![0f64, 5f64, 6f64, 0f64, 1f64],
        ]));
    }

    #[test]
    fn products() {
        let m = test_matrix();

        assert_eq!(m.mul_vector(&[1f64, 1f64, 1f64]), vec![3f64, 11f64]);
        assert_eq!(m.left_mul_vector(&[1f64, -1f64]), vec![1f64, -3f64, -6f64]);
        assert_eq!(inner_product(&[1f64, 2f64], &[3f64, 4f64]), 11f64);

        let product = DenseMatrix::identity(2).mul(&m);
        assert_eq!(product, m);

        let negated = m.clone().scale(-1f64);
        assert_eq!(negated.get_value(1, 2), -6f64);
    }

    #[test]
    fn inverse() {
        let m = DenseMatrix::from_data(vec![
            vec![1f64, 1f64],
            vec![1f64, 0f64],
        ]);
        let inverse = m.inverse(1e-10).unwrap();
        assert_matrix_eq(&inverse, &DenseMatrix::from_data(vec![
            vec![0f64, 1f64],
            vec![1f64, -1f64],
        ]));
        assert_matrix_eq(&m.mul(&inverse), &DenseMatrix::identity(2));

        // Requires a row exchange
        let m = DenseMatrix::from_data(vec![
            vec![0f64, 2f64, 1f64],
            vec![1f64, 0f64, 0f64],
            vec![3f64, 1f64, 4f64],
        ]);
        let inverse = m.inverse(1e-10).unwrap();
        assert_matrix_eq(&inverse.mul(&m), &DenseMatrix::identity(3));
    }

    #[test]
    fn singular() {
        let m = DenseMatrix::from_data(vec![
            vec![1f64, 2f64],
            vec![2f64, 4f64],
        ]);
        assert_eq!(m.inverse(1e-10), None);

        let m = DenseMatrix::from_data(vec![vec![0f64]]);
        assert_eq!(m.inverse(1e-10), None);
    }
}
