// Test intent: verifies the transforms run with a debug logger installed.
#![cfg(feature = "verbose-logging")]

use cooley::{cconvolve, fft, goertzel, Complex64};

#[test]
fn logging_does_not_change_results() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();

    let x = vec![Complex64::new(1.0, 0.0); 4];
    let y = fft(&x).unwrap();
    assert!((y[0].re - 4.0).abs() < 1e-12);
    let c = cconvolve(&x, &x).unwrap();
    assert!((c[0].re - 4.0).abs() < 1e-12);
    let mag = goertzel(&[1.0f64, 1.0, 1.0, 1.0], 0.0, 8000.0).unwrap();
    assert!((mag - 4.0).abs() < 1e-12);
}
