//! Rayon-backed execution of the two DFT passes.
//!
//! Both passes are split across output columns. Pass 1 finishes on every
//! worker before pass 2 starts, and each cell is summed in the same order as
//! the sequential path, so results are bit-identical.
//!
//! The size at which [`SeparableDft2d`](crate::dft2d::SeparableDft2d) switches
//! to this path is tunable through environment variables (read once) or
//! [`set_parallel_threshold`]:
//!
//! - `SEPDFT_PAR_THRESHOLD`: minimum `width * height`; `0` uses the heuristic
//! - `SEPDFT_PAR_PER_CORE_CELLS`: cells each core should own (default 256)
//! - `SEPDFT_PAR_THREADS`: assumed worker count (default: logical CPUs)

use core::sync::atomic::{AtomicUsize, Ordering};
use rayon::prelude::*;
use std::sync::OnceLock;

use crate::dft::DftError;
use crate::dft2d::{column_pass, row_pass, Plan, SeparableDft2d};
use crate::grid::Grid;
use crate::num::Float;

const DEFAULT_PER_CORE_CELLS: usize = 256;

/// `0` means no override.
static PARALLEL_THRESHOLD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);
static PARALLEL_ENV: OnceLock<ParallelEnv> = OnceLock::new();

struct ParallelEnv {
    threshold: usize,
    per_core_cells: usize,
    threads: usize,
}

fn env_usize(key: &str) -> Option<usize> {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
}

fn parallel_env() -> &'static ParallelEnv {
    PARALLEL_ENV.get_or_init(|| {
        let env = ParallelEnv {
            threshold: env_usize("SEPDFT_PAR_THRESHOLD").unwrap_or(0),
            per_core_cells: env_usize("SEPDFT_PAR_PER_CORE_CELLS")
                .filter(|&v| v > 0)
                .unwrap_or(DEFAULT_PER_CORE_CELLS),
            threads: env_usize("SEPDFT_PAR_THREADS")
                .filter(|&v| v > 0)
                .unwrap_or_else(|| num_cpus::get().max(1)),
        };
        crate::debug_log!(
            "parallel config: threshold={} per_core_cells={} threads={}",
            env.threshold,
            env.per_core_cells,
            env.threads
        );
        env
    })
}

/// Set the minimum cell count (`width * height`) for the parallel path.
///
/// Passing `0` reverts to the environment or built-in heuristic.
pub fn set_parallel_threshold(cells: usize) {
    PARALLEL_THRESHOLD_OVERRIDE.store(cells, Ordering::Relaxed);
}

/// Current minimum cell count for the parallel path.
pub fn parallel_threshold() -> usize {
    let cells = PARALLEL_THRESHOLD_OVERRIDE.load(Ordering::Relaxed);
    if cells != 0 {
        return cells;
    }
    let env = parallel_env();
    if env.threshold != 0 {
        env.threshold
    } else {
        env.per_core_cells.saturating_mul(env.threads)
    }
}

pub(crate) fn run<T: Float>(plan: &Plan<T>, grid: &Grid<T>) -> Result<Grid<T>, DftError> {
    let height = plan.height;
    let mut intermediate = Grid::zeros(plan.width, height)?;
    intermediate
        .as_mut_slice()
        .par_chunks_mut(height)
        .zip(grid.as_slice().par_chunks(height))
        .for_each(|(out, input)| column_pass(&plan.y_axis, input, out));
    crate::trace_log!("dft2d: parallel column pass done");

    let mut transformed = Grid::zeros(plan.width, height)?;
    let intermediate = intermediate.as_slice();
    transformed
        .as_mut_slice()
        .par_chunks_mut(height)
        .enumerate()
        .for_each(|(x2, out)| row_pass(&plan.x_axis, intermediate, height, x2, plan.scale, out));
    crate::trace_log!("dft2d: parallel row pass done");
    Ok(transformed)
}

/// Parallel transform with the reference (direct twiddle) path.
///
/// # Examples
/// ```
/// use sepdft::parallel::transform_parallel;
/// use sepdft::{Complex64, Grid};
/// let grid = Grid::from_fn(4, 4, |x, y| Complex64::new((x * 4 + y) as f64, 0.0)).unwrap();
/// let spectrum = transform_parallel(&grid, false).unwrap();
/// assert_eq!(spectrum.dims(), (4, 4));
/// ```
pub fn transform_parallel<T: Float>(grid: &Grid<T>, inverse: bool) -> Result<Grid<T>, DftError> {
    SeparableDft2d::<T>::default().transform_parallel(grid, inverse)
}
