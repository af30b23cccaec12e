//! Goertzel algorithm: efficient single-bin DFT detector
//! no_std + alloc compatible

use crate::fft::{FftError, Float};

/// How a target frequency is mapped onto a DFT bin index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinRounding {
    /// `round(N * f / fs)` in floating point.
    #[default]
    Nearest,
    /// `floor(N * f / fs)`, matching detectors that evaluate the bin index
    /// with integer arithmetic.
    Truncate,
}

/// Map `target_freq` (Hz) to a bin index of an `n`-point DFT sampled at
/// `sample_rate` (Hz).
///
/// The DFT is periodic in `k`, so frequencies at or above `sample_rate` alias
/// onto `k mod n` and the result is always below `n`.
///
/// Returns [`FftError::InvalidValue`] when `sample_rate` is not a positive
/// finite number, `target_freq` is negative or not finite, or `n * f / fs`
/// overflows. Returns [`FftError::EmptyInput`] when `n` is zero.
pub fn target_bin<T: Float>(
    n: usize,
    target_freq: T,
    sample_rate: T,
    rounding: BinRounding,
) -> Result<usize, FftError> {
    if n == 0 {
        return Err(FftError::EmptyInput);
    }
    if !sample_rate.is_finite() || sample_rate <= T::zero() {
        return Err(FftError::InvalidValue);
    }
    if !target_freq.is_finite() || target_freq < T::zero() {
        return Err(FftError::InvalidValue);
    }
    let exact = n as f64 * target_freq.to_f64() / sample_rate.to_f64();
    if !exact.is_finite() {
        return Err(FftError::InvalidValue);
    }
    let k = match rounding {
        BinRounding::Nearest => libm::round(exact),
        BinRounding::Truncate => libm::floor(exact),
    };
    // k is integral, so fmod is exact even far beyond usize::MAX
    Ok(libm::fmod(k, n as f64) as usize)
}

/// Compute the magnitude at a single DFT bin using the Goertzel algorithm.
/// - `input`: real-valued signal
/// - `target_freq`: frequency to detect in Hz
/// - `sample_rate`: sample rate in Hz
///
/// The bin nearest `target_freq` is used (see [`BinRounding::Nearest`]). The
/// result equals `|X[k]|` of the unnormalised DFT.
pub fn goertzel<T: Float>(input: &[T], target_freq: T, sample_rate: T) -> Result<T, FftError> {
    goertzel_with(input, target_freq, sample_rate, BinRounding::Nearest)
}

/// [`goertzel`] with an explicit bin rounding rule.
pub fn goertzel_with<T: Float>(
    input: &[T],
    target_freq: T,
    sample_rate: T,
    rounding: BinRounding,
) -> Result<T, FftError> {
    if input.is_empty() {
        return Err(FftError::EmptyInput);
    }
    let k = target_bin(input.len(), target_freq, sample_rate, rounding)?;
    crate::debug_log!(
        "goertzel: n={} target={} Hz rate={} Hz bin={}",
        input.len(),
        target_freq,
        sample_rate,
        k
    );
    goertzel_bin(input, k)
}

/// Magnitude of bin `k` of the `input.len()`-point DFT.
pub fn goertzel_bin<T: Float>(input: &[T], k: usize) -> Result<T, FftError> {
    if input.is_empty() {
        return Err(FftError::EmptyInput);
    }
    let omega = 2.0 * core::f64::consts::PI * k as f64 / input.len() as f64;
    let coeff = T::from_f64(2.0 * libm::cos(omega));
    let mut s_prev = T::zero();
    let mut s_prev2 = T::zero();
    for &x in input {
        let s = coeff * s_prev - s_prev2 + x;
        s_prev2 = s_prev;
        s_prev = s;
    }
    let power = s_prev * s_prev + s_prev2 * s_prev2 - s_prev * s_prev2 * coeff;
    // rounding can push an exact zero slightly negative
    if power <= T::zero() {
        return Ok(T::zero());
    }
    Ok(power.sqrt())
}
