//! Separable two-dimensional DFT.
//!
//! The transform runs two sweeps of the direct 1D DFT:
//!
//! 1. along the second axis, for every column `x`:
//!    `T[x][y2] = Σ_y grid[x][y] · e^{s·i·2π·y2·y/H}`
//! 2. along the first axis, for every row `y`:
//!    `R[x2][y] = Σ_x T[x][y] · e^{s·i·2π·x2·x/W}`
//!
//! with `s = +1` forward and `s = -1` inverse. Each output cell is then scaled
//! by `1/H` (forward) or `1/W` (inverse). The two factors multiply to
//! `1/(W·H)`, so a forward transform followed by an inverse one reproduces
//! the input.
//!
//! Pass 1 completes before pass 2 reads the intermediate grid. Every cell is
//! summed in ascending index order starting from zero.

use alloc::vec::Vec;
use core::cell::RefCell;

use crate::dft::{len_to_float, AxisKernel, DftError, DftPlanner};
use crate::grid::Grid;
use crate::num::{Complex, Float};

/// Direction of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Inverse,
}

impl Direction {
    pub fn is_inverse(self) -> bool {
        matches!(self, Direction::Inverse)
    }
}

impl From<bool> for Direction {
    /// `true` selects the inverse transform.
    fn from(inverse: bool) -> Self {
        if inverse {
            Direction::Inverse
        } else {
            Direction::Forward
        }
    }
}

/// A 2D transform with a uniform signature.
pub trait Transformer<T: Float> {
    /// Transform `grid`, returning a new grid of the same dimensions.
    /// `inverse == false` is the forward transform.
    fn transform(&self, grid: &Grid<T>, inverse: bool) -> Result<Grid<T>, DftError>;

    fn transform_direction(
        &self,
        grid: &Grid<T>,
        direction: Direction,
    ) -> Result<Grid<T>, DftError> {
        self.transform(grid, direction.is_inverse())
    }

    fn forward(&self, grid: &Grid<T>) -> Result<Grid<T>, DftError> {
        self.transform(grid, false)
    }

    fn inverse(&self, grid: &Grid<T>) -> Result<Grid<T>, DftError> {
        self.transform(grid, true)
    }
}

/// Everything both passes need for one `width × height` transform.
pub(crate) struct Plan<T: Float> {
    pub(crate) width: usize,
    pub(crate) height: usize,
    /// Second axis, length `height` (pass 1).
    pub(crate) y_axis: AxisKernel<T>,
    /// First axis, length `width` (pass 2).
    pub(crate) x_axis: AxisKernel<T>,
    pub(crate) scale: T,
}

/// Pass 1 for one column: `output[y2] = Σ_y input[y] · e^{s·i·2π·y2·y/H}`.
pub(crate) fn column_pass<T: Float>(
    kernel: &AxisKernel<T>,
    input: &[Complex<T>],
    output: &mut [Complex<T>],
) {
    for (y2, cell) in output.iter_mut().enumerate() {
        *cell = kernel.accumulate(y2, input.iter().copied());
    }
}

/// Pass 2 for output column `x2`, reading row `y` of the column-major
/// intermediate buffer with stride `height`.
pub(crate) fn row_pass<T: Float>(
    kernel: &AxisKernel<T>,
    intermediate: &[Complex<T>],
    height: usize,
    x2: usize,
    scale: T,
    output: &mut [Complex<T>],
) {
    for (y, cell) in output.iter_mut().enumerate() {
        let row = intermediate.iter().skip(y).step_by(height).copied();
        *cell = kernel.accumulate(x2, row).scale(scale);
    }
}

fn run_sequential<T: Float>(plan: &Plan<T>, grid: &Grid<T>) -> Result<Grid<T>, DftError> {
    let height = plan.height;
    let mut intermediate = Grid::zeros(plan.width, height)?;
    for (input, out) in grid
        .columns()
        .zip(intermediate.as_mut_slice().chunks_mut(height))
    {
        column_pass(&plan.y_axis, input, out);
    }
    crate::trace_log!("dft2d: column pass done");

    let mut transformed = Grid::zeros(plan.width, height)?;
    let intermediate = intermediate.as_slice();
    for (x2, out) in transformed.as_mut_slice().chunks_mut(height).enumerate() {
        row_pass(&plan.x_axis, intermediate, height, x2, plan.scale, out);
    }
    crate::trace_log!("dft2d: row pass done");
    Ok(transformed)
}

/// Separable 2D DFT by direct summation.
///
/// `SeparableDft2d::default()` computes every twiddle angle directly and is
/// the reference path. [`SeparableDft2d::with_planner`] reuses cached
/// per-length tables instead; results agree within rounding.
pub struct SeparableDft2d<T: Float> {
    planner: Option<RefCell<DftPlanner<T>>>,
}

impl<T: Float> Default for SeparableDft2d<T> {
    fn default() -> Self {
        Self { planner: None }
    }
}

impl<T: Float> SeparableDft2d<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fresh [`DftPlanner`] to cache twiddle tables across calls.
    pub fn with_planner() -> Self {
        Self::from_planner(DftPlanner::new())
    }

    pub fn from_planner(planner: DftPlanner<T>) -> Self {
        Self {
            planner: Some(RefCell::new(planner)),
        }
    }

    pub fn is_planned(&self) -> bool {
        self.planner.is_some()
    }

    /// Number of lengths cached by the planner (zero in direct mode).
    pub fn cached_lengths(&self) -> usize {
        self.planner
            .as_ref()
            .map_or(0, |p| p.borrow().cached_lengths())
    }

    pub(crate) fn plan(
        &self,
        width: usize,
        height: usize,
        inverse: bool,
    ) -> Result<Plan<T>, DftError> {
        let (y_axis, x_axis) = match &self.planner {
            Some(planner) => {
                let mut planner = planner.borrow_mut();
                (
                    AxisKernel::planned(&mut planner, height, inverse)?,
                    AxisKernel::planned(&mut planner, width, inverse)?,
                )
            }
            None => (
                AxisKernel::direct(height, inverse)?,
                AxisKernel::direct(width, inverse)?,
            ),
        };
        let norm = if inverse { width } else { height };
        let scale = T::one() / len_to_float::<T>(norm)?;
        Ok(Plan {
            width,
            height,
            y_axis,
            x_axis,
            scale,
        })
    }

    /// Run both passes on the rayon pool regardless of grid size.
    #[cfg(feature = "parallel")]
    pub fn transform_parallel(&self, grid: &Grid<T>, inverse: bool) -> Result<Grid<T>, DftError> {
        let plan = self.plan(grid.width(), grid.height(), inverse)?;
        crate::debug_log!(
            "dft2d: {} {}x{} planned={} parallel=true",
            if inverse { "inverse" } else { "forward" },
            grid.width(),
            grid.height(),
            self.is_planned()
        );
        crate::parallel::run(&plan, grid)
    }
}

impl<T: Float> Transformer<T> for SeparableDft2d<T> {
    fn transform(&self, grid: &Grid<T>, inverse: bool) -> Result<Grid<T>, DftError> {
        let plan = self.plan(grid.width(), grid.height(), inverse)?;
        #[cfg(feature = "parallel")]
        {
            if grid.len() >= crate::parallel::parallel_threshold() {
                crate::debug_log!(
                    "dft2d: {} {}x{} planned={} parallel=true",
                    if inverse { "inverse" } else { "forward" },
                    grid.width(),
                    grid.height(),
                    self.is_planned()
                );
                return crate::parallel::run(&plan, grid);
            }
        }
        crate::debug_log!(
            "dft2d: {} {}x{} planned={} parallel=false",
            if inverse { "inverse" } else { "forward" },
            grid.width(),
            grid.height(),
            self.is_planned()
        );
        run_sequential(&plan, grid)
    }
}

/// Transform nested `[x][y]` columns with the reference path.
///
/// Fails with [`DftError::MismatchedLengths`] if the columns differ in length
/// and [`DftError::EmptyInput`] if either dimension is zero.
///
/// # Examples
/// ```
/// use sepdft::dft2d::transform;
/// use sepdft::Complex64;
/// let samples = vec![
///     vec![Complex64::new(1.0, 0.0), Complex64::new(2.0, 0.0)],
///     vec![Complex64::new(3.0, 0.0), Complex64::new(4.0, 0.0)],
/// ];
/// let spectrum = transform(&samples, false).unwrap();
/// assert!((spectrum[0][0].re - 5.0).abs() < 1e-12);
/// let restored = transform(&spectrum, true).unwrap();
/// assert!((restored[1][1].re - 4.0).abs() < 1e-12);
/// ```
pub fn transform<T: Float>(
    columns: &[Vec<Complex<T>>],
    inverse: bool,
) -> Result<Vec<Vec<Complex<T>>>, DftError> {
    let grid = Grid::from_column_slices(columns)?;
    let dft = SeparableDft2d::<T>::default();
    Ok(dft.transform(&grid, inverse)?.into_columns())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::Complex64;
    use alloc::vec;

    fn c(re: f64) -> Complex64 {
        Complex64::new(re, 0.0)
    }

    #[test]
    fn test_plan_normalization() {
        let dft = SeparableDft2d::<f64>::default();
        let fwd = dft.plan(4, 2, false).unwrap();
        let inv = dft.plan(4, 2, true).unwrap();
        assert_eq!(fwd.scale, 0.5);
        assert_eq!(inv.scale, 0.25);
        assert_eq!(fwd.y_axis.len(), 2);
        assert_eq!(fwd.x_axis.len(), 4);
    }

    #[test]
    fn test_column_pass_single_column() {
        let kernel = AxisKernel::<f64>::direct(2, false).unwrap();
        let mut out = [Complex64::zero(); 2];
        column_pass(&kernel, &[c(1.0), c(2.0)], &mut out);
        assert!((out[0].re - 3.0).abs() < 1e-12);
        assert!((out[1].re + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_row_pass_strided_read() {
        // Two columns of height 2, pass 2 for x2 = 1.
        let kernel = AxisKernel::<f64>::direct(2, false).unwrap();
        let intermediate = [c(3.0), c(-1.0), c(7.0), c(-1.0)];
        let mut out = [Complex64::zero(); 2];
        row_pass(&kernel, &intermediate, 2, 1, 0.5, &mut out);
        assert!((out[0].re + 2.0).abs() < 1e-12);
        assert!(out[1].re.abs() < 1e-12);
    }

    #[test]
    fn test_direction_from_bool() {
        assert_eq!(Direction::from(true), Direction::Inverse);
        assert_eq!(Direction::from(false), Direction::Forward);
        assert!(!Direction::default().is_inverse());
    }

    #[test]
    fn test_planned_transform_caches_both_axes() {
        let dft = SeparableDft2d::<f64>::with_planner();
        let grid = Grid::from_fn(3, 5, |x, y| c((x + y) as f64)).unwrap();
        dft.forward(&grid).unwrap();
        dft.inverse(&grid).unwrap();
        assert_eq!(dft.cached_lengths(), 2);
    }

    #[test]
    fn test_free_transform_rejects_ragged() {
        let ragged = vec![vec![c(1.0), c(2.0)], vec![c(3.0)]];
        assert_eq!(transform(&ragged, false), Err(DftError::MismatchedLengths));
    }
}
