// Test intent: verifies fft/ifft against known spectra, a direct DFT and error cases.
use cooley::fft::{fft, ifft, Complex64, FftError, FftImpl, IterativeFft, RecursiveFft};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Tolerance for comparing floating-point results.
const EPSILON: f64 = 1e-9;

fn real(v: &[f64]) -> Vec<Complex64> {
    v.iter().map(|&x| Complex64::new(x, 0.0)).collect()
}

fn random_signal(n: usize, seed: u64) -> Vec<Complex64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect()
}

/// Direct O(N²) DFT used only as a reference.
fn dft(x: &[Complex64]) -> Vec<Complex64> {
    let n = x.len();
    (0..n)
        .map(|k| {
            x.iter().enumerate().fold(Complex64::zero(), |acc, (t, &v)| {
                let theta = -2.0 * std::f64::consts::PI * (k * t) as f64 / n as f64;
                acc + v * Complex64::expi(theta)
            })
        })
        .collect()
}

fn assert_close(got: &[Complex64], want: &[Complex64], eps: f64) {
    assert_eq!(got.len(), want.len());
    for (i, (a, b)) in got.iter().zip(want.iter()).enumerate() {
        assert!(
            (a.re - b.re).abs() < eps && (a.im - b.im).abs() < eps,
            "index {i}: {a} vs {b}"
        );
    }
}

#[test]
fn impulse_transforms_to_all_ones() {
    let y = fft(&real(&[1.0, 0.0, 0.0, 0.0])).unwrap();
    assert_close(&y, &real(&[1.0, 1.0, 1.0, 1.0]), EPSILON);
}

#[test]
fn constant_transforms_to_dc() {
    let y = fft(&real(&[1.0, 1.0, 1.0, 1.0])).unwrap();
    assert_close(&y, &real(&[4.0, 0.0, 0.0, 0.0]), EPSILON);
}

#[test]
fn matches_direct_dft() {
    for &n in &[2usize, 4, 8, 16, 32, 128] {
        let x = random_signal(n, n as u64);
        assert_close(&fft(&x).unwrap(), &dft(&x), 1e-9);
    }
}

#[test]
fn roundtrip_recovers_input() {
    for &n in &[1usize, 2, 8, 512, 4096] {
        let x = random_signal(n, 99 + n as u64);
        let back = ifft(&fft(&x).unwrap()).unwrap();
        assert_close(&back, &x, 1e-9);
    }
}

#[test]
fn nyquist_bin_of_alternating_signal() {
    let y = fft(&real(&[1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0])).unwrap();
    let mut want = real(&[0.0; 8]);
    want[4] = Complex64::new(8.0, 0.0);
    assert_close(&y, &want, EPSILON);
}

#[test]
fn length_three_is_invalid() {
    let x = real(&[1.0, 2.0, 3.0]);
    assert_eq!(fft(&x), Err(FftError::InvalidLength { len: 3 }));
    assert_eq!(ifft(&x), Err(FftError::InvalidLength { len: 3 }));
    assert_eq!(
        IterativeFft.fft(&x),
        Err(FftError::InvalidLength { len: 3 })
    );
}

#[test]
fn even_but_not_power_of_two_is_invalid() {
    let x = real(&[1.0; 12]);
    assert_eq!(fft(&x), Err(FftError::InvalidLength { len: 12 }));
}

#[test]
fn engines_are_interchangeable() {
    let x = random_signal(64, 3);
    let engines: [&dyn FftImpl<f64>; 2] = [&RecursiveFft, &IterativeFft];
    let reference = dft(&x);
    for engine in engines {
        assert_close(&engine.fft(&x).unwrap(), &reference, 1e-9);
        let back = engine.ifft(&engine.fft(&x).unwrap()).unwrap();
        assert_close(&back, &x, 1e-9);
    }
}

#[test]
fn error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(FftError::InvalidLength { len: 5 });
    assert_eq!(err.to_string(), "sequence length 5 is not a power of two");
}
