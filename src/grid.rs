//! Rectangular grids of complex samples.
//!
//! A grid is indexed `[x][y]` with `x` in `0..width` (columns, the outer
//! dimension) and `y` in `0..height` (rows, the inner dimension). Samples
//! are stored flat and column-major, so column `x` is the contiguous slice
//! `data[x * height..(x + 1) * height]`.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Index;

use crate::dft::DftError;
use crate::num::{Complex, Float};

#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T: Float> {
    data: Vec<Complex<T>>,
    width: usize,
    height: usize,
}

/// Validate `width × height` and return the cell count.
pub(crate) fn cell_count(width: usize, height: usize) -> Result<usize, DftError> {
    if width == 0 || height == 0 {
        return Err(DftError::EmptyInput);
    }
    width.checked_mul(height).ok_or(DftError::Overflow)
}

impl<T: Float> Grid<T> {
    /// A `width × height` grid of complex zeros.
    pub fn zeros(width: usize, height: usize) -> Result<Self, DftError> {
        let len = cell_count(width, height)?;
        Ok(Self {
            data: vec![Complex::zero(); len],
            width,
            height,
        })
    }

    /// Wrap a column-major buffer of exactly `width * height` samples.
    pub fn from_vec(width: usize, height: usize, data: Vec<Complex<T>>) -> Result<Self, DftError> {
        let len = cell_count(width, height)?;
        if data.len() != len {
            return Err(DftError::MismatchedLengths);
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Build a grid by evaluating `f(x, y)` for every cell.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self, DftError>
    where
        F: FnMut(usize, usize) -> Complex<T>,
    {
        let len = cell_count(width, height)?;
        let mut data = Vec::with_capacity(len);
        for x in 0..width {
            for y in 0..height {
                data.push(f(x, y));
            }
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Flatten nested `[x][y]` columns.
    ///
    /// Every column must have the same, non-zero length.
    pub fn from_columns(columns: Vec<Vec<Complex<T>>>) -> Result<Self, DftError> {
        let width = columns.len();
        let height = columns.first().map_or(0, Vec::len);
        let len = cell_count(width, height)?;
        if columns.iter().any(|c| c.len() != height) {
            return Err(DftError::MismatchedLengths);
        }
        let mut data = Vec::with_capacity(len);
        for column in columns {
            data.extend(column);
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Like [`Grid::from_columns`] but copies from borrowed columns.
    pub fn from_column_slices(columns: &[Vec<Complex<T>>]) -> Result<Self, DftError> {
        let width = columns.len();
        let height = columns.first().map_or(0, Vec::len);
        let len = cell_count(width, height)?;
        if columns.iter().any(|c| c.len() != height) {
            return Err(DftError::MismatchedLengths);
        }
        let mut data = Vec::with_capacity(len);
        for column in columns {
            data.extend_from_slice(column);
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Complex<T>> {
        if x < self.width && y < self.height {
            Some(self.data[x * self.height + y])
        } else {
            None
        }
    }

    /// Column `x` as a contiguous slice of `height` samples.
    pub fn column(&self, x: usize) -> Option<&[Complex<T>]> {
        if x < self.width {
            Some(&self.data[x * self.height..(x + 1) * self.height])
        } else {
            None
        }
    }

    pub fn columns(&self) -> core::slice::Chunks<'_, Complex<T>> {
        self.data.chunks(self.height)
    }

    pub fn as_slice(&self) -> &[Complex<T>] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<Complex<T>> {
        self.data
    }

    /// Split back into nested `[x][y]` columns.
    pub fn into_columns(self) -> Vec<Vec<Complex<T>>> {
        self.data
            .chunks(self.height)
            .map(|c| c.to_vec())
            .collect()
    }

    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(&Complex<T>) -> Complex<T>,
    {
        Self {
            data: self.data.iter().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Combine two equally shaped grids cell by cell.
    pub fn zip_with<F>(&self, other: &Self, mut f: F) -> Result<Self, DftError>
    where
        F: FnMut(Complex<T>, Complex<T>) -> Complex<T>,
    {
        if self.dims() != other.dims() {
            return Err(DftError::MismatchedLengths);
        }
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            width: self.width,
            height: self.height,
        })
    }

    /// Largest per-component absolute difference, or `None` if the shapes differ.
    pub fn max_abs_diff(&self, other: &Self) -> Option<T> {
        if self.dims() != other.dims() {
            return None;
        }
        let mut max = T::zero();
        for (a, b) in self.data.iter().zip(other.data.iter()) {
            let err_re = (a.re - b.re).abs();
            let err_im = (a.im - b.im).abs();
            if err_re > max {
                max = err_re;
            }
            if err_im > max {
                max = err_im;
            }
        }
        Some(max)
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Complex<T>] {
        &mut self.data
    }
}

impl<T: Float> Index<(usize, usize)> for Grid<T> {
    type Output = Complex<T>;

    fn index(&self, (x, y): (usize, usize)) -> &Complex<T> {
        assert!(y < self.height, "row {} out of range", y);
        &self.data[x * self.height + y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::Complex64;

    fn c(re: f64) -> Complex64 {
        Complex64::new(re, 0.0)
    }

    #[test]
    fn test_from_columns_layout() {
        let g = Grid::from_columns(vec![vec![c(1.0), c(2.0)], vec![c(3.0), c(4.0)]]).unwrap();
        assert_eq!(g.dims(), (2, 2));
        assert_eq!(g[(0, 1)], c(2.0));
        assert_eq!(g[(1, 0)], c(3.0));
        assert_eq!(g.column(1).unwrap(), &[c(3.0), c(4.0)]);
        assert_eq!(g.as_slice(), &[c(1.0), c(2.0), c(3.0), c(4.0)]);
    }

    #[test]
    fn test_from_columns_non_rectangular() {
        let res = Grid::from_columns(vec![vec![c(1.0), c(2.0)], vec![c(3.0)]]);
        assert_eq!(res, Err(DftError::MismatchedLengths));
    }

    #[test]
    fn test_empty_dimensions() {
        assert_eq!(Grid::<f64>::from_columns(vec![]), Err(DftError::EmptyInput));
        assert_eq!(
            Grid::<f64>::from_columns(vec![vec![], vec![]]),
            Err(DftError::EmptyInput)
        );
        assert_eq!(Grid::<f64>::zeros(0, 3), Err(DftError::EmptyInput));
    }

    #[test]
    fn test_cell_count_overflow() {
        assert_eq!(Grid::<f64>::zeros(usize::MAX, 2), Err(DftError::Overflow));
    }

    #[test]
    fn test_from_vec_length_checked() {
        let res = Grid::from_vec(2, 2, vec![c(0.0); 3]);
        assert_eq!(res, Err(DftError::MismatchedLengths));
    }

    #[test]
    fn test_from_fn_and_into_columns() {
        let g = Grid::from_fn(3, 2, |x, y| c((10 * x + y) as f64)).unwrap();
        assert_eq!(g.get(2, 1), Some(c(21.0)));
        assert_eq!(g.get(3, 0), None);
        let cols = g.into_columns();
        assert_eq!(cols.len(), 3);
        assert_eq!(cols[1], vec![c(10.0), c(11.0)]);
    }

    #[test]
    fn test_max_abs_diff() {
        let a = Grid::from_fn(2, 2, |_, _| Complex64::new(1.0, 1.0)).unwrap();
        let b = a.map(|v| Complex64::new(v.re, v.im + 0.5));
        assert_eq!(a.max_abs_diff(&b), Some(0.5));
        let other = Grid::<f64>::zeros(1, 4).unwrap();
        assert_eq!(a.max_abs_diff(&other), None);
        assert_eq!(a.zip_with(&other, |x, _| x), Err(DftError::MismatchedLengths));
    }
}
