//! Piecewise Taylor approximation corrected by a wavelet-reconstructed
//! residual, compared against the plain Taylor values.

use adataylor::{estimate_error_bound, perform_mixed_approximation, WaveletKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let x_values: Vec<f64> = (0..100).map(|i| i as f64 / 99.0).collect();

    let result = perform_mixed_approximation(
        f64::sin,
        &x_values,
        &[0.0, 0.5, 1.0],
        &[3, 3],
        &[0.25, 0.75],
        WaveletKind::Haar,
        3,
    )?;

    println!("Mixed Taylor + wavelet approximation of sin on [0, 1]");
    println!("two intervals, order 3 each, Haar residual correction\n");

    for i in (0..x_values.len()).step_by(10) {
        println!(
            "x = {:.3}  exact = {:+.6}  approx = {:+.6}  |err| = {:.3e}",
            result.x_values[i],
            result.exact_values[i],
            result.approximate_values[i],
            result.errors[i]
        );
    }

    println!("\nmean error          = {:.3e}", result.mean_error);
    println!(
        "theoretical bound   = {:.3e}",
        estimate_error_bound(1.0, 3, 0.5, 3)
    );

    Ok(())
}
