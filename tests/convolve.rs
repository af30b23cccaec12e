// Test intent: verifies circular and linear convolution including edge cases.
use cooley::convolve::{cconvolve, cconvolve_with, convolve};
use cooley::fft::{fft, Complex64, FftError, IterativeFft};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const EPSILON: f64 = 1e-9;

fn real(v: &[f64]) -> Vec<Complex64> {
    v.iter().map(|&x| Complex64::new(x, 0.0)).collect()
}

fn assert_real_close(got: &[Complex64], want: &[f64]) {
    assert_eq!(got.len(), want.len());
    for (a, &b) in got.iter().zip(want.iter()) {
        assert!((a.re - b).abs() < EPSILON, "{} vs {}", a.re, b);
        assert!(a.im.abs() < EPSILON, "im = {}", a.im);
    }
}

#[test]
fn linear_convolution_is_polynomial_product() {
    // (1 + x)(1 + x) = 1 + 2x + x²
    let z = convolve(&real(&[1.0, 1.0]), &real(&[1.0, 1.0])).unwrap();
    assert_real_close(&z, &[1.0, 2.0, 1.0, 0.0]);
}

#[test]
fn linear_convolution_longer_polynomials() {
    // (1 + 2x + 3x² + 4x³)(1 - x) = 1 + x + x² + x³ - 4x⁴
    let z = convolve(&real(&[1.0, 2.0, 3.0, 4.0]), &real(&[1.0, -1.0, 0.0, 0.0])).unwrap();
    assert_real_close(&z, &[1.0, 1.0, 1.0, 1.0, -4.0, 0.0, 0.0, 0.0]);
}

#[test]
fn circular_convolution_with_identity() {
    let x = real(&[3.0, -1.0, 2.0, 5.0]);
    let delta = real(&[1.0, 0.0, 0.0, 0.0]);
    assert_real_close(&cconvolve(&x, &delta).unwrap(), &[3.0, -1.0, 2.0, 5.0]);
}

#[test]
fn convolution_theorem_holds() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut random = |n: usize| -> Vec<Complex64> {
        (0..n)
            .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
            .collect()
    };
    let x = random(32);
    let y = random(32);
    let lhs = fft(&cconvolve(&x, &y).unwrap()).unwrap();
    let fx = fft(&x).unwrap();
    let fy = fft(&y).unwrap();
    for k in 0..32 {
        let rhs = fx[k] * fy[k];
        assert!((lhs[k].re - rhs.re).abs() < EPSILON);
        assert!((lhs[k].im - rhs.im).abs() < EPSILON);
    }
}

#[test]
fn engines_agree_on_circular_convolution() {
    let x = real(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    let y = real(&[0.5, 0.0, -1.0, 0.0, 0.0, 2.0, 0.0, 0.0]);
    let a = cconvolve(&x, &y).unwrap();
    let b = cconvolve_with(&IterativeFft, &x, &y).unwrap();
    for (p, q) in a.iter().zip(b.iter()) {
        assert!((p.re - q.re).abs() < EPSILON);
        assert!((p.im - q.im).abs() < EPSILON);
    }
}

#[test]
fn mismatched_lengths_are_rejected() {
    let x = real(&[1.0, 2.0, 3.0, 4.0]);
    let y = real(&[1.0, 2.0]);
    assert_eq!(
        cconvolve(&x, &y),
        Err(FftError::DimensionMismatch { left: 4, right: 2 })
    );
}

#[test]
fn linear_convolution_needs_power_of_two_padding() {
    // padded length 6 is not a power of two
    let x = real(&[1.0, 2.0, 3.0]);
    assert_eq!(convolve(&x, &x), Err(FftError::InvalidLength { len: 6 }));
}
