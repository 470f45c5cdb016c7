use nalgebra::{SMatrix, Scalar};

use crate::error::{MatrixError, Result};

/// Read access to the elements of a fixed-size matrix.
///
/// Linear indices are row-major: `index = row * COLUMNS + column`,
/// regardless of how the implementor stores its elements.
pub trait Matrix<T> {
    const ROWS: usize;
    const COLUMNS: usize;

    /// Total number of elements.
    fn element_count(&self) -> usize {
        Self::ROWS * Self::COLUMNS
    }

    /// Returns the element at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::CellOutOfRange`] if either coordinate is
    /// outside the matrix.
    fn at_cell(&self, row: usize, column: usize) -> Result<T>;

    /// Returns the element at row-major linear `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if `index` is not below
    /// [`Matrix::element_count`].
    fn at(&self, index: usize) -> Result<T> {
        let len = self.element_count();
        if index >= len {
            return Err(MatrixError::IndexOutOfRange { index, len }.into());
        }
        self.at_cell(index / Self::COLUMNS, index % Self::COLUMNS)
    }
}

/// A matrix that can produce its transpose.
pub trait TransposedMatrix<T>: Matrix<T> {
    type Transposed: Matrix<T>;

    #[must_use]
    fn transposed(&self) -> Self::Transposed;
}

fn check_cell(row: usize, column: usize, rows: usize, columns: usize) -> Result<()> {
    if row >= rows || column >= columns {
        return Err(MatrixError::CellOutOfRange {
            row,
            column,
            rows,
            columns,
        }
        .into());
    }
    Ok(())
}

impl<T: Scalar + Copy, const R: usize, const C: usize> Matrix<T> for SMatrix<T, R, C> {
    const ROWS: usize = R;
    const COLUMNS: usize = C;

    fn at_cell(&self, row: usize, column: usize) -> Result<T> {
        check_cell(row, column, R, C)?;
        Ok(self[(row, column)])
    }
}

impl<T: Scalar + Copy, const R: usize, const C: usize> TransposedMatrix<T> for SMatrix<T, R, C> {
    type Transposed = SMatrix<T, C, R>;

    fn transposed(&self) -> Self::Transposed {
        self.transpose()
    }
}

/// Row-major nested arrays, `rows[row][column]`.
impl<T: Copy, const R: usize, const C: usize> Matrix<T> for [[T; C]; R] {
    const ROWS: usize = R;
    const COLUMNS: usize = C;

    fn at_cell(&self, row: usize, column: usize) -> Result<T> {
        check_cell(row, column, R, C)?;
        Ok(self[row][column])
    }
}

impl<T: Copy, const R: usize, const C: usize> TransposedMatrix<T> for [[T; C]; R] {
    type Transposed = [[T; R]; C];

    fn transposed(&self) -> Self::Transposed {
        std::array::from_fn(|column| std::array::from_fn(|row| self[row][column]))
    }
}
