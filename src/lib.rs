//! # sepdft - separable 2D discrete Fourier transform
//!
//! Computes the forward and inverse two-dimensional DFT of a rectangular grid
//! of complex samples (typically image intensities) by direct summation: a 1D
//! DFT down every column, then across every row.
//!
//! This is deliberately not an FFT. Each output cell is an explicit O(N) sum,
//! so a `W × H` transform costs `O(W·H·(W+H))`, and outputs match the direct
//! summation reference term for term.
//!
//! ## Conventions
//!
//! - Grids are indexed `[x][y]`: `x` selects the column (`0..width`), `y` the
//!   row (`0..height`).
//! - The forward transform rotates by `e^{+i·2π·k·n/N}`, the inverse by
//!   `e^{-i·2π·k·n/N}`.
//! - The forward output is scaled by `1/height`, the inverse output by
//!   `1/width`. A forward transform followed by an inverse one is the identity.
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` for [`DftError`]
//! - `parallel`: split each pass across a Rayon pool (see [`parallel`])
//! - `verbose-logging`: emit `log` records for every transform
//!
//! ## Example
//!
//! ```
//! use sepdft::{Complex64, Grid, SeparableDft2d, Transformer};
//!
//! let grid = Grid::from_columns(vec![
//!     vec![Complex64::new(1.0, 0.0), Complex64::new(2.0, 0.0)],
//!     vec![Complex64::new(3.0, 0.0), Complex64::new(4.0, 0.0)],
//! ])
//! .unwrap();
//! let dft = SeparableDft2d::default();
//! let spectrum = dft.forward(&grid).unwrap();
//! let restored = dft.inverse(&spectrum).unwrap();
//! assert!(restored.max_abs_diff(&grid).unwrap() < 1e-12);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        {
            log::debug!($($arg)*);
        }
    };
}

macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        {
            log::trace!($($arg)*);
        }
    };
}

pub(crate) use debug_log;
pub(crate) use trace_log;

/// Float and complex value types.
pub mod num;

/// Rectangular sample grids.
pub mod grid;

/// Direct 1D DFT, twiddle planner and the crate error type.
pub mod dft;

/// Separable 2D DFT.
pub mod dft2d;

/// Parallel two-pass execution and its tuning knobs.
#[cfg(feature = "parallel")]
pub mod parallel;

pub use dft::{DftError, DftPlanner};
pub use dft2d::{Direction, SeparableDft2d, Transformer};
pub use grid::Grid;
pub use num::{Complex, Complex32, Complex64, Float};
