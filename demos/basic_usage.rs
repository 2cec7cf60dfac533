//! Walkthrough of the Taylor, remainder, Padé and wavelet engines.

use adataylor::{
    adaptive_taylor, approximate_from_handles, evaluate_remainder, forward_transform,
    generate_expansion_text, generate_signal, inverse_transform, predefined,
    reconstruction_error, remainder_latex, taylor, RemainderKind, SignalKind, WaveletKind,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== AdaTaylor Examples ===\n");

    // Example 1: fixed-order Taylor expansion of sin around 0
    let sine = predefined::sine();
    let result = taylor(&sine, 0.1, 0.0, 3);
    println!("1. Taylor sin(0.1), order 3:");
    println!("   exact       = {:.10}", result.exact_value);
    println!("   approximate = {:.10}", result.approximate_value);
    println!("   |error|     = {:.3e}", result.absolute_error);

    let derivatives = sine.derivative_values(0.0, 4);
    println!("   expansion   = {}", generate_expansion_text(0.0, &derivatives, 3));

    // Example 2: adaptive order selection for e^x
    let exp = predefined::exponential();
    let adaptive = adaptive_taylor(&exp, 0.8, 0.0, 1e-6);
    println!("\n2. Adaptive Taylor e^0.8 targeting 1e-6:");
    println!("   chosen order   = {}", adaptive.order);
    println!("   error estimate = {:.3e}", adaptive.error_estimate);
    println!("   actual error   = {:.3e}", adaptive.absolute_error);

    // Example 3: remainder formulas for the same expansion
    println!("\n3. Remainder of e^x at x = 0.5, order 3:");
    for kind in [
        RemainderKind::Lagrange,
        RemainderKind::Cauchy,
        RemainderKind::Integral,
    ] {
        let remainder = evaluate_remainder(&exp, 0.5, 0.0, 3, kind)?;
        println!(
            "   {:?}: |R| = {:.3e} (actual {:.3e})   {}",
            kind,
            remainder.remainder_value,
            remainder.actual_error,
            remainder_latex(3, kind)
        );
    }

    // Example 4: Padé vs Taylor away from the expansion point
    let pade = approximate_from_handles(&exp, 1.0, 0.0, 2, 2)?;
    let plain = taylor(&exp, 1.0, 0.0, 4);
    println!("\n4. e^1 = {:.6}:", 1.0f64.exp());
    println!("   Padé (2,2)     = {:.6}", pade);
    println!("   Taylor order 4 = {:.6}", plain.approximate_value);

    // Example 5: wavelet decomposition and reconstruction
    println!("\n5. Haar round trip on a chirp of 64 samples:");
    let signal = generate_signal(SignalKind::Chirp, 64);
    let coefficients = forward_transform(&signal, WaveletKind::Haar)?;
    let reconstructed = inverse_transform(&coefficients, WaveletKind::Haar)?;
    println!("   levels = {}", coefficients.levels());
    println!(
        "   RMS reconstruction error = {:.3e}",
        reconstruction_error(&signal, &reconstructed)
    );

    Ok(())
}
