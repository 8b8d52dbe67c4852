//! Direct (O(N²)) discrete Fourier transform along a single axis.
//!
//! Each output bin is the sum of every input sample rotated by
//! `s · 2π·k·n/N`, with `s = +1` for the forward direction and `s = -1` for
//! the inverse. No fast-transform decomposition is performed.
//!
//! Twiddles come either straight from `sin`/`cos` of the angle (the
//! reference path) or from a per-length table cached in a [`DftPlanner`].

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use hashbrown::HashMap;

use crate::num::{Complex, Float};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DftError {
    /// A dimension was zero or the input slice was empty.
    EmptyInput,
    /// Columns of differing length, or a buffer that does not match its shape.
    MismatchedLengths,
    /// A size overflows `usize` or is not exactly representable in the float type.
    Overflow,
}

impl fmt::Display for DftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DftError::EmptyInput => write!(f, "input has a zero-length dimension"),
            DftError::MismatchedLengths => write!(f, "input is not rectangular"),
            DftError::Overflow => write!(f, "dimension too large for the sample type"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DftError {}

/// Convert a length to `T`, failing with [`DftError::Overflow`] when it is not exact.
pub(crate) fn len_to_float<T: Float>(n: usize) -> Result<T, DftError> {
    T::from_usize(n).ok_or(DftError::Overflow)
}

/// Caches `(sin, cos)` of `2π·j/N` for `j` in `0..N`, one table per length.
pub struct DftPlanner<T: Float> {
    cache: HashMap<usize, Arc<[(T, T)]>>,
}

impl<T: Float> Default for DftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> DftPlanner<T> {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Retrieve (building on first use) the twiddle table for length `n`.
    pub fn get_twiddles(&mut self, n: usize) -> Result<Arc<[(T, T)]>, DftError> {
        if n == 0 {
            return Err(DftError::EmptyInput);
        }
        if let Some(table) = self.cache.get(&n) {
            return Ok(Arc::clone(table));
        }
        crate::trace_log!("dft planner: building twiddle table for n={}", n);
        let len = len_to_float::<T>(n)?;
        let two_pi = T::two_pi();
        let mut table = Vec::with_capacity(n);
        for j in 0..n {
            let angle = two_pi * len_to_float::<T>(j)? / len;
            table.push(angle.sin_cos());
        }
        let table: Arc<[(T, T)]> = Arc::from(table);
        self.cache.insert(n, Arc::clone(&table));
        Ok(table)
    }

    /// Number of cached lengths.
    pub fn cached_lengths(&self) -> usize {
        self.cache.len()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

#[derive(Clone, Debug)]
enum Twiddles<T: Float> {
    /// Angles computed per term as `((2π·k)·n)/N`.
    Direct { index: Vec<T>, len: T },
    /// Lookup into a cached table by `(k·n) mod N`.
    Table(Arc<[(T, T)]>),
}

/// One axis of a transform: its length, direction and twiddle source.
///
/// Shared read-only by both passes (and by worker threads when the
/// `parallel` feature is enabled).
#[derive(Clone, Debug)]
pub(crate) struct AxisKernel<T: Float> {
    n: usize,
    inverse: bool,
    twiddles: Twiddles<T>,
}

impl<T: Float> AxisKernel<T> {
    /// Kernel that evaluates `sin`/`cos` for every term.
    pub(crate) fn direct(n: usize, inverse: bool) -> Result<Self, DftError> {
        if n == 0 {
            return Err(DftError::EmptyInput);
        }
        let len = len_to_float::<T>(n)?;
        let index = (0..n)
            .map(len_to_float::<T>)
            .collect::<Result<Vec<T>, DftError>>()?;
        Ok(Self {
            n,
            inverse,
            twiddles: Twiddles::Direct { index, len },
        })
    }

    /// Kernel backed by a planner table.
    pub(crate) fn planned(
        planner: &mut DftPlanner<T>,
        n: usize,
        inverse: bool,
    ) -> Result<Self, DftError> {
        let table = planner.get_twiddles(n)?;
        Ok(Self {
            n,
            inverse,
            twiddles: Twiddles::Table(table),
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.n
    }

    /// `(sin θ, cos θ)` for the term pairing output bin `k` with input index `j`.
    #[inline(always)]
    fn sin_cos(&self, k: usize, j: usize) -> (T, T) {
        match &self.twiddles {
            Twiddles::Direct { index, len } => {
                let a = T::two_pi() * index[k] * index[j] / *len;
                let a = if self.inverse { -a } else { a };
                a.sin_cos()
            }
            Twiddles::Table(table) => {
                let (sin, cos) = table[(k * j) % self.n];
                if self.inverse {
                    (-sin, cos)
                } else {
                    (sin, cos)
                }
            }
        }
    }

    /// Sum `samples` (ascending index, starting from zero) rotated for output bin `k`.
    ///
    /// `samples` must yield exactly `self.len()` values.
    #[inline]
    pub(crate) fn accumulate<I>(&self, k: usize, samples: I) -> Complex<T>
    where
        I: IntoIterator<Item = Complex<T>>,
    {
        let mut acc = Complex::zero();
        for (j, sample) in samples.into_iter().enumerate() {
            let (sin, cos) = self.sin_cos(k, j);
            acc = acc.add(sample.rotate(sin, cos));
        }
        acc
    }
}

/// Unnormalized direct DFT of a 1D slice.
///
/// `X[k] = Σ_n x[n] · e^{s·i·2π·k·n/N}` with `s = +1` forward and `s = -1` inverse.
pub fn dft1d<T: Float>(input: &[Complex<T>], inverse: bool) -> Result<Vec<Complex<T>>, DftError> {
    let kernel = AxisKernel::direct(input.len(), inverse)?;
    Ok((0..kernel.len())
        .map(|k| kernel.accumulate(k, input.iter().copied()))
        .collect())
}
