//! Convolution through the convolution theorem.
//!
//! Circular convolution in the time domain is pointwise multiplication in
//! the frequency domain, so `cconvolve(x, y) = ifft(fft(x) * fft(y))`.
//! Linear convolution zero-pads both operands so the circular wrap-around
//! falls entirely on padding.

use alloc::vec::Vec;

use crate::fft::{Complex, FftError, FftImpl, Float, RecursiveFft};

/// Circular convolution of two equal-length, power-of-two sequences.
///
/// Returns [`FftError::DimensionMismatch`] when the lengths differ and
/// [`FftError::InvalidLength`] when the common length is not a power of two.
pub fn cconvolve<T: Float>(x: &[Complex<T>], y: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    cconvolve_with(&RecursiveFft, x, y)
}

/// [`cconvolve`] on a caller-chosen FFT engine.
pub fn cconvolve_with<T: Float, F: FftImpl<T>>(
    fft: &F,
    x: &[Complex<T>],
    y: &[Complex<T>],
) -> Result<Vec<Complex<T>>, FftError> {
    if x.len() != y.len() {
        return Err(FftError::DimensionMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    crate::debug_log!("cconvolve: n={}", x.len());
    let a = fft.fft(x)?;
    let b = fft.fft(y)?;
    let c: Vec<Complex<T>> = a.iter().zip(b.iter()).map(|(&p, &q)| p.mul(q)).collect();
    fft.ifft(&c)
}

/// Linear (acyclic) convolution.
///
/// Both inputs are zero-padded to `2 * max(x.len(), y.len())`, which must be a
/// power of two. The result has that padded length; entries past
/// `x.len() + y.len() - 1` are zero up to rounding.
///
/// ```
/// use cooley::convolve::convolve;
/// use cooley::Complex64;
/// let one = Complex64::new(1.0, 0.0);
/// let z = convolve(&[one, one], &[one, one]).unwrap();
/// let re: Vec<f64> = z.iter().map(|c| c.re.round()).collect();
/// assert_eq!(re, [1.0, 2.0, 1.0, 0.0]);
/// ```
pub fn convolve<T: Float>(x: &[Complex<T>], y: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    convolve_with(&RecursiveFft, x, y)
}

/// [`convolve`] on a caller-chosen FFT engine.
pub fn convolve_with<T: Float, F: FftImpl<T>>(
    fft: &F,
    x: &[Complex<T>],
    y: &[Complex<T>],
) -> Result<Vec<Complex<T>>, FftError> {
    let padded = 2 * x.len().max(y.len());
    crate::debug_log!(
        "convolve: lengths {} and {} padded to {}",
        x.len(),
        y.len(),
        padded
    );
    let a = zero_pad(x, padded);
    let b = zero_pad(y, padded);
    cconvolve_with(fft, &a, &b)
}

fn zero_pad<T: Float>(x: &[Complex<T>], len: usize) -> Vec<Complex<T>> {
    let mut out = Vec::with_capacity(len);
    out.extend_from_slice(x);
    out.resize(len, Complex::zero());
    out
}
