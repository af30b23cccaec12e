//! Basic usage example for cooley
//!
//! Generates `N` random real samples (default 8, or the first argument),
//! then prints the FFT, the inverse FFT, the circular self-convolution and the
//! linear self-convolution.
//!
//! ```bash
//! cargo run --example basic_usage -- 16
//! ```

use cooley::{cconvolve, convolve, fft, ifft, Complex64};
use rand::Rng;

fn print_sequence(title: &str, data: &[Complex64]) {
    println!("{title}");
    println!("-------------------");
    for c in data {
        println!("{c}");
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let n: usize = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 8,
    };

    let mut rng = rand::thread_rng();
    let x: Vec<Complex64> = (0..n)
        .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), 0.0))
        .collect();
    print_sequence("x", &x);

    let y = fft(&x)?;
    print_sequence("y = fft(x)", &y);

    let z = ifft(&y)?;
    print_sequence("z = ifft(y)", &z);

    let c = cconvolve(&x, &x)?;
    print_sequence("c = cconvolve(x, x)", &c);

    let d = convolve(&x, &x)?;
    print_sequence("d = convolve(x, x)", &d);

    Ok(())
}
