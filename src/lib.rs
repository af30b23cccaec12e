//! # cooley - radix-2 FFT, convolution and Goertzel detection
//!
//! Building blocks for digital signal processing on finite complex sequences:
//!
//! - **[`num`]**: an immutable [`Complex`] value type with the arithmetic the
//!   transforms need (including `exp`, `sin`, `cos`, `tan`).
//! - **[`fft`]**: recursive radix-2 Cooley-Tukey FFT and its inverse, plus an
//!   equivalent in-place iterative engine.
//! - **[`convolve`]**: circular and linear convolution via the convolution
//!   theorem.
//! - **[`goertzel`]**: single-bin magnitude detection in linear time.
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` for [`fft::FftError`]
//! - `parallel`: fork the recursive FFT's even/odd halves with Rayon
//! - `verbose-logging`: debug logging through the `log` facade
//!
//! ## Quick start
//!
//! ```
//! use cooley::{fft, ifft, Complex64};
//!
//! let x: Vec<Complex64> = (0..8).map(|i| Complex64::new(i as f64, 0.0)).collect();
//! let y = fft(&x).unwrap();
//! let z = ifft(&y).unwrap();
//! for (a, b) in x.iter().zip(z.iter()) {
//!     assert!((a.re - b.re).abs() < 1e-9);
//! }
//! ```
//!
//! Transforms accept power-of-two lengths only; anything else is reported as
//! [`fft::FftError::InvalidLength`].
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
#[cfg(any(feature = "std", test))]
extern crate std;

/// Emit a `log::debug!` record when the `verbose-logging` feature is enabled.
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        {
            log::debug!($($arg)*);
        }
    };
}
pub(crate) use debug_log;

/// Complex numbers and the scalar `Float` abstraction.
pub mod num;

/// Fast Fourier Transform (FFT) implementations
///
/// Recursive and iterative radix-2 engines with a shared error type.
pub mod fft;

/// Convolution built on the FFT
///
/// Circular and zero-padded linear convolution.
pub mod convolve;

/// Goertzel algorithm
///
/// Efficient single-frequency detection algorithm.
pub mod goertzel;

pub use convolve::{cconvolve, convolve};
pub use fft::{fft, ifft, FftError, FftImpl, IterativeFft, RecursiveFft};
pub use goertzel::{goertzel, BinRounding};
pub use num::{Complex, Complex32, Complex64, Float};
