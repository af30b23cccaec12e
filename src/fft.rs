//! Fast Fourier Transform (FFT) algorithms.
//!
//! This module implements the radix-2
//! [Cooley–Tukey algorithm](https://en.wikipedia.org/wiki/Cooley%E2%80%93Tukey_FFT_algorithm)
//! for power-of-two lengths. [`RecursiveFft`] is the reference engine: it
//! splits the input into even and odd halves, transforms each, and combines
//! them with one butterfly per bin. [`IterativeFft`] computes the same
//! coefficients in place with a bit-reversal permutation followed by
//! butterfly stages. Both implement [`FftImpl`], which also supplies the
//! inverse transform through the conjugation identity
//! `ifft(x) = conj(fft(conj(x))) / N`.
//!
//! With the `parallel` feature the recursive engine transforms the two halves
//! on separate Rayon workers once a sub-problem is large enough.

use alloc::vec;
use alloc::vec::Vec;

#[cfg(feature = "parallel")]
use core::sync::atomic::{AtomicUsize, Ordering};
#[cfg(feature = "parallel")]
use std::sync::OnceLock;

pub use crate::num::{complexify, magnitudes, Complex, Complex32, Complex64, Float};

/// Default minimum sub-problem length before the recursive engine forks.
#[cfg(feature = "parallel")]
const DEFAULT_PARALLEL_FFT_THRESHOLD: usize = 4096;

/// Override for the parallel FFT threshold.
///
/// `0` means no override and the environment/default value is used.
#[cfg(feature = "parallel")]
static PARALLEL_FFT_THRESHOLD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);
#[cfg(feature = "parallel")]
static PARALLEL_FFT_THREAD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);
#[cfg(feature = "parallel")]
static PARALLEL_ENV: OnceLock<ParallelEnv> = OnceLock::new();

#[cfg(feature = "parallel")]
struct ParallelEnv {
    threshold: usize,
    threads: usize,
}

#[cfg(feature = "parallel")]
fn parallel_env() -> &'static ParallelEnv {
    PARALLEL_ENV.get_or_init(|| {
        let threshold = std::env::var("COOLEY_PAR_FFT_THRESHOLD")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&v| v != 0)
            .unwrap_or(DEFAULT_PARALLEL_FFT_THRESHOLD);
        let threads = std::env::var("COOLEY_PAR_FFT_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&v| v != 0)
            .unwrap_or_else(|| num_cpus::get().max(1));
        crate::debug_log!(
            "parallel fft environment: threshold={} threads={}",
            threshold,
            threads
        );
        ParallelEnv { threshold, threads }
    })
}

#[cfg(feature = "parallel")]
/// Set a custom minimum sub-problem length at which the recursive FFT
/// transforms its even and odd halves in parallel.
///
/// Passing `0` reverts to `COOLEY_PAR_FFT_THRESHOLD` or the built-in default.
pub fn set_parallel_fft_threshold(threshold: usize) {
    crate::debug_log!("parallel fft threshold override: {}", threshold);
    PARALLEL_FFT_THRESHOLD_OVERRIDE.store(threshold, Ordering::Relaxed);
}

#[cfg(feature = "parallel")]
/// Override the number of threads the fork depth is sized for. `0` uses
/// `COOLEY_PAR_FFT_THREADS` or the number of logical CPUs.
pub fn set_parallel_fft_threads(threads: usize) {
    crate::debug_log!("parallel fft thread override: {}", threads);
    PARALLEL_FFT_THREAD_OVERRIDE.store(threads, Ordering::Relaxed);
}

#[cfg(feature = "parallel")]
/// Effective parallel threshold after overrides.
pub fn parallel_fft_threshold() -> usize {
    match PARALLEL_FFT_THRESHOLD_OVERRIDE.load(Ordering::Relaxed) {
        0 => parallel_env().threshold,
        t => t,
    }
}

#[cfg(feature = "parallel")]
fn parallel_fft_threads() -> usize {
    match PARALLEL_FFT_THREAD_OVERRIDE.load(Ordering::Relaxed) {
        0 => parallel_env().threads,
        t => t,
    }
}

/// Number of recursion levels that may fork: `ceil(log2(threads))`.
#[cfg(feature = "parallel")]
fn max_fork_depth() -> usize {
    parallel_fft_threads().next_power_of_two().trailing_zeros() as usize
}

#[cfg(feature = "parallel")]
fn should_fork(n: usize, depth: usize) -> bool {
    n >= parallel_fft_threshold() && depth < max_fork_depth()
}

/// Errors reported by the transforms, convolutions and detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The sequence length is zero or not a power of two.
    InvalidLength { len: usize },
    /// Two sequences that must have equal length do not.
    DimensionMismatch { left: usize, right: usize },
    /// An input block contains no samples.
    EmptyInput,
    /// A scalar parameter is out of range or not finite.
    InvalidValue,
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FftError::InvalidLength { len } => {
                write!(f, "sequence length {len} is not a power of two")
            }
            FftError::DimensionMismatch { left, right } => {
                write!(f, "dimensions don't agree: {left} vs {right}")
            }
            FftError::EmptyInput => write!(f, "input is empty"),
            FftError::InvalidValue => write!(f, "parameter out of range"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Check the radix-2 length precondition before any work is done.
#[inline]
pub fn check_len(n: usize) -> Result<(), FftError> {
    if n.is_power_of_two() {
        Ok(())
    } else {
        Err(FftError::InvalidLength { len: n })
    }
}

/// Twiddle factor `exp(-2πi k / n)`.
#[inline(always)]
fn twiddle<T: Float>(k: usize, n: usize) -> Complex<T> {
    let theta = -2.0 * core::f64::consts::PI * (k as f64) / (n as f64);
    Complex::expi(T::from_f64(theta))
}

fn conj_in_place<T: Float>(data: &mut [Complex<T>]) {
    for c in data.iter_mut() {
        *c = c.conj();
    }
}

/// Common interface of the FFT engines.
pub trait FftImpl<T: Float> {
    /// Forward transform into a freshly allocated sequence.
    fn fft(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError>;

    /// Inverse transform: conjugate, transform, conjugate, scale by `1/N`.
    fn ifft(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let n = input.len();
        check_len(n)?;
        let conj: Vec<Complex<T>> = input.iter().map(|c| c.conj()).collect();
        let mut out = self.fft(&conj)?;
        let scale = T::one() / T::from_f64(n as f64);
        for c in out.iter_mut() {
            *c = c.conj().scale(scale);
        }
        Ok(out)
    }

    /// Forward transform overwriting `data`.
    fn fft_in_place(&self, data: &mut [Complex<T>]) -> Result<(), FftError> {
        let out = self.fft(data)?;
        data.copy_from_slice(&out);
        Ok(())
    }

    /// Inverse transform overwriting `data`.
    fn ifft_in_place(&self, data: &mut [Complex<T>]) -> Result<(), FftError> {
        let out = self.ifft(data)?;
        data.copy_from_slice(&out);
        Ok(())
    }
}

/// Recursive radix-2 decimation-in-time engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecursiveFft;

impl RecursiveFft {
    pub fn new() -> Self {
        Self
    }
}

/// `x.len()` is a power of two; checked by the caller.
fn fft_recursive<T: Float>(x: &[Complex<T>], depth: usize) -> Vec<Complex<T>> {
    let n = x.len();
    if n == 1 {
        return vec![x[0]];
    }
    let half = n / 2;
    let even: Vec<Complex<T>> = x.iter().step_by(2).copied().collect();
    let odd: Vec<Complex<T>> = x.iter().skip(1).step_by(2).copied().collect();
    let (q, r) = transform_halves(&even, &odd, depth);

    let mut y = vec![Complex::zero(); n];
    for k in 0..half {
        let t = twiddle::<T>(k, n).mul(r[k]);
        y[k] = q[k].add(t);
        y[k + half] = q[k].sub(t);
    }
    y
}

#[cfg(feature = "parallel")]
fn transform_halves<T: Float>(
    even: &[Complex<T>],
    odd: &[Complex<T>],
    depth: usize,
) -> (Vec<Complex<T>>, Vec<Complex<T>>) {
    if should_fork(even.len() * 2, depth) {
        #[cfg(feature = "verbose-logging")]
        log::trace!("forking fft halves of length {} at depth {}", even.len(), depth);
        rayon::join(
            || fft_recursive(even, depth + 1),
            || fft_recursive(odd, depth + 1),
        )
    } else {
        (fft_recursive(even, depth + 1), fft_recursive(odd, depth + 1))
    }
}

#[cfg(not(feature = "parallel"))]
fn transform_halves<T: Float>(
    even: &[Complex<T>],
    odd: &[Complex<T>],
    depth: usize,
) -> (Vec<Complex<T>>, Vec<Complex<T>>) {
    (fft_recursive(even, depth + 1), fft_recursive(odd, depth + 1))
}

impl<T: Float> FftImpl<T> for RecursiveFft {
    fn fft(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        check_len(input.len())?;
        Ok(fft_recursive(input, 0))
    }
}

/// In-place iterative radix-2 engine (bit-reversal followed by butterflies).
#[derive(Debug, Default, Clone, Copy)]
pub struct IterativeFft;

impl IterativeFft {
    pub fn new() -> Self {
        Self
    }
}

fn bit_reverse_permute<T: Float>(data: &mut [Complex<T>]) {
    let n = data.len();
    let bits = n.trailing_zeros();
    if bits == 0 {
        return;
    }
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if i < j {
            data.swap(i, j);
        }
    }
}

impl<T: Float> FftImpl<T> for IterativeFft {
    fn fft(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let mut out = input.to_vec();
        self.fft_in_place(&mut out)?;
        Ok(out)
    }

    fn fft_in_place(&self, data: &mut [Complex<T>]) -> Result<(), FftError> {
        let n = data.len();
        check_len(n)?;
        bit_reverse_permute(data);
        let mut len = 2;
        while len <= n {
            let half = len / 2;
            // one twiddle per k, shared by every block of the stage
            for k in 0..half {
                let w = twiddle::<T>(k, len);
                for start in (0..n).step_by(len) {
                    let t = w.mul(data[start + k + half]);
                    let u = data[start + k];
                    data[start + k] = u.add(t);
                    data[start + k + half] = u.sub(t);
                }
            }
            len <<= 1;
        }
        Ok(())
    }

    fn ifft_in_place(&self, data: &mut [Complex<T>]) -> Result<(), FftError> {
        let n = data.len();
        check_len(n)?;
        conj_in_place(data);
        self.fft_in_place(data)?;
        let scale = T::one() / T::from_f64(n as f64);
        for c in data.iter_mut() {
            *c = c.conj().scale(scale);
        }
        Ok(())
    }
}

/// Forward FFT with the reference recursive engine.
///
/// Fails with [`FftError::InvalidLength`] unless `x.len()` is a power of two.
///
/// ```
/// use cooley::fft::{fft, Complex64};
/// let x = [Complex64::new(1.0, 0.0), Complex64::zero(), Complex64::zero(), Complex64::zero()];
/// let y = fft(&x).unwrap();
/// assert!(y.iter().all(|c| (c.re - 1.0).abs() < 1e-12 && c.im.abs() < 1e-12));
/// ```
pub fn fft<T: Float>(x: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    crate::debug_log!("fft: n={}", x.len());
    RecursiveFft.fft(x)
}

/// Inverse FFT with the reference recursive engine.
pub fn ifft<T: Float>(x: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    crate::debug_log!("ifft: n={}", x.len());
    RecursiveFft.ifft(x)
}
