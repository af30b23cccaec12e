//! Demonstrates enabling verbose logging for cooley.
use cooley::{convolve, fft, goertzel, Complex64};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let signal = vec![1.0, 2.0, 3.0, 4.0];
    let x: Vec<Complex64> = signal.iter().map(|&s| Complex64::new(s, 0.0)).collect();

    fft(&x).unwrap();
    convolve(&x, &x).unwrap();
    goertzel(&signal, 2000.0, 8000.0).unwrap();
}
