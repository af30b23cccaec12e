//! Goertzel algorithm example.
//!
//! Detects the magnitude of a target frequency in a signal and compares it
//! with the matching bin of a full FFT.

use cooley::fft::{complexify, fft};
use cooley::goertzel::{goertzel, goertzel_with, target_bin, BinRounding};

fn main() -> Result<(), cooley::FftError> {
    println!("=== Goertzel example ===\n");

    let sample_rate = 8000.0;
    let n = 256;
    let tone = 1000.0;
    let signal: Vec<f64> = (0..n)
        .map(|i| (2.0 * std::f64::consts::PI * tone * i as f64 / sample_rate).sin())
        .collect();

    let spectrum = fft(&complexify(&signal))?;
    for target_freq in [500.0, 1000.0, 1010.0, 2000.0] {
        let k = target_bin(n, target_freq, sample_rate, BinRounding::Nearest)?;
        let magnitude = goertzel(&signal, target_freq, sample_rate)?;
        let legacy = goertzel_with(&signal, target_freq, sample_rate, BinRounding::Truncate)?;
        println!(
            "{target_freq:>7} Hz -> bin {k:>3}: goertzel {magnitude:>9.3}  truncated-bin {legacy:>9.3}  fft {:>9.3}",
            spectrum[k].abs()
        );
    }
    Ok(())
}
