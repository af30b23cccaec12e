//! Scalar and complex number types shared by every transform in the crate.
//!
//! [`Complex`] is an immutable `Copy` value: every operation returns a new
//! number and leaves its operands untouched. All transcendental functions go
//! through [`libm`] so the crate works without `std`.

use alloc::vec::Vec;
use core::fmt;

// Minimal float trait for generic FFT (no_std, libm-backed)
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_f64(x: f64) -> Self;
    fn to_f64(self) -> f64;
    fn sqrt(self) -> Self;
    fn exp(self) -> Self;
    fn cos(self) -> Self;
    fn sin(self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn cosh(self) -> Self;
    fn sinh(self) -> Self;
    fn hypot(self, other: Self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn is_finite(self) -> bool;
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    fn to_f64(self) -> f64 {
        self as f64
    }
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }
    fn exp(self) -> Self {
        libm::expf(self)
    }
    fn cos(self) -> Self {
        libm::cosf(self)
    }
    fn sin(self) -> Self {
        libm::sinf(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincosf(self)
    }
    fn cosh(self) -> Self {
        libm::coshf(self)
    }
    fn sinh(self) -> Self {
        libm::sinhf(self)
    }
    fn hypot(self, other: Self) -> Self {
        libm::hypotf(self, other)
    }
    fn atan2(self, other: Self) -> Self {
        libm::atan2f(self, other)
    }
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x
    }
    fn to_f64(self) -> f64 {
        self
    }
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
    fn exp(self) -> Self {
        libm::exp(self)
    }
    fn cos(self) -> Self {
        libm::cos(self)
    }
    fn sin(self) -> Self {
        libm::sin(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincos(self)
    }
    fn cosh(self) -> Self {
        libm::cosh(self)
    }
    fn sinh(self) -> Self {
        libm::sinh(self)
    }
    fn hypot(self, other: Self) -> Self {
        libm::hypot(self, other)
    }
    fn atan2(self, other: Self) -> Self {
        libm::atan2(self, other)
    }
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

/// A point in the complex plane.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

impl<T: Float> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
    pub fn zero() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }
    /// Unit phasor `cos(theta) + i sin(theta)`.
    #[inline(always)]
    pub fn expi(theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { re: cos, im: sin }
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
    /// Multiply by a real scalar.
    #[inline(always)]
    pub fn scale(self, alpha: T) -> Self {
        Self {
            re: alpha * self.re,
            im: alpha * self.im,
        }
    }
    #[inline(always)]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }
    /// `1 / self`.
    ///
    /// A zero-magnitude input divides by zero and yields non-finite
    /// components, exactly as IEEE-754 division does.
    pub fn reciprocal(self) -> Self {
        let scale = self.re * self.re + self.im * self.im;
        Self {
            re: self.re / scale,
            im: -self.im / scale,
        }
    }
    /// `self / other`, computed as `self * other.reciprocal()`.
    ///
    /// Dividing by zero propagates NaN/Inf like [`Complex::reciprocal`].
    #[allow(clippy::should_implement_trait)]
    pub fn div(self, other: Self) -> Self {
        self.mul(other.reciprocal())
    }
    /// Modulus, computed with `hypot` to avoid intermediate overflow.
    pub fn abs(self) -> T {
        self.re.hypot(self.im)
    }
    /// Argument in `(-π, π]`.
    pub fn phase(self) -> T {
        // adding +0 turns a -0 imaginary part into +0, so the negative
        // real axis maps to π instead of -π
        (self.im + T::zero()).atan2(self.re)
    }
    pub fn exp(self) -> Self {
        let m = self.re.exp();
        let (sin, cos) = self.im.sin_cos();
        Self {
            re: m * cos,
            im: m * sin,
        }
    }
    pub fn sin(self) -> Self {
        let (sin, cos) = self.re.sin_cos();
        Self {
            re: sin * self.im.cosh(),
            im: cos * self.im.sinh(),
        }
    }
    pub fn cos(self) -> Self {
        let (sin, cos) = self.re.sin_cos();
        Self {
            re: cos * self.im.cosh(),
            im: -(sin * self.im.sinh()),
        }
    }
    pub fn tan(self) -> Self {
        self.sin().div(self.cos())
    }
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl<T: Float> core::ops::Neg for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T: Float> core::ops::Add for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Complex::<T>::add(self, other)
    }
}

impl<T: Float> core::ops::Sub for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Complex::<T>::sub(self, other)
    }
}

impl<T: Float> core::ops::Mul for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Complex::<T>::mul(self, other)
    }
}

impl<T: Float> core::ops::Mul<T> for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, alpha: T) -> Self {
        self.scale(alpha)
    }
}

impl<T: Float> core::ops::Div for Complex<T> {
    type Output = Self;
    fn div(self, other: Self) -> Self {
        Complex::<T>::div(self, other)
    }
}

impl<T: Float> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im == T::zero() {
            write!(f, "{}", self.re)
        } else if self.re == T::zero() {
            write!(f, "{}i", self.im)
        } else if self.im < T::zero() {
            write!(f, "{} - {}i", self.re, -self.im)
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

/// Lift real samples onto the real axis.
pub fn complexify<T: Float>(samples: &[T]) -> Vec<Complex<T>> {
    samples.iter().map(|&x| Complex::new(x, T::zero())).collect()
}

/// Modulus of every element.
pub fn magnitudes<T: Float>(data: &[Complex<T>]) -> Vec<T> {
    data.iter().map(|c| c.abs()).collect()
}
