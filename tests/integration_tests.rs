use adataylor::{
    adaptive_taylor, approximate_from_handles, estimate_error_bound, evaluate_remainder,
    forward_transform, generate_expansion_latex, generate_expansion_text, generate_signal,
    inverse_transform, perform_mixed_approximation, predefined, reconstruction_error,
    remainder_latex, series_coefficients, taylor, AdaTaylorError, FunctionModel, RemainderKind,
    SignalKind, WaveletKind,
};
use approx::assert_abs_diff_eq;

#[test]
fn test_sine_taylor_end_to_end() {
    // f = sin, x0 = 0, x = 0.1, order 3: the canonical smoke scenario.
    let sine = predefined::sine();
    let result = taylor(&sine, 0.1, 0.0, 3);

    assert_abs_diff_eq!(result.approximate_value, 0.0998333, epsilon = 1e-6);
    assert_abs_diff_eq!(result.exact_value, 0.0998334, epsilon = 1e-6);
    assert!(result.absolute_error < 1e-6);
    assert_eq!(result.order, 3);
}

#[test]
fn test_adaptive_workflow_meets_target() {
    let exp = predefined::exponential();
    let target = 1e-6;
    let result = adaptive_taylor(&exp, 0.8, 0.0, target);

    assert!(result.error_estimate < target);
    // The bound is conservative enough that the real error also lands below it
    // for e^x, whose derivatives at 0 are all 1.
    assert!(result.absolute_error < 1e-4);
}

#[test]
fn test_remainder_formulas_bracket_actual_error() {
    let exp = predefined::exponential();

    for kind in [
        RemainderKind::Lagrange,
        RemainderKind::Cauchy,
        RemainderKind::Integral,
    ] {
        let result = evaluate_remainder(&exp, 0.5, 0.0, 3, kind).unwrap();
        let ratio = result.remainder_value / result.actual_error;
        assert!(
            ratio > 0.1 && ratio < 10.0,
            "{:?}: remainder {} vs actual {}",
            kind,
            result.remainder_value,
            result.actual_error
        );
    }
}

#[test]
fn test_remainder_requires_next_derivative() {
    let model = FunctionModel::from_function("square", "x^2", |x| x * x, 2, 0.0, (-1.0, 1.0));
    // 3 handles available, order 3 needs handle index 4.
    let err = evaluate_remainder(&model, 0.5, 0.0, 3, RemainderKind::Lagrange).unwrap_err();
    assert!(matches!(
        err,
        AdaTaylorError::InsufficientDerivatives {
            required: 5,
            available: 3
        }
    ));
}

#[test]
fn test_pade_outperforms_taylor_away_from_center() {
    // Classic Padé selling point: for e^x at x = 1, the (2,2) approximant
    // beats the order-4 Taylor polynomial built from the same coefficients.
    let exp = predefined::exponential();
    let exact = 1.0f64.exp();

    let pade = approximate_from_handles(&exp, 1.0, 0.0, 2, 2).unwrap();
    let taylor_result = taylor(&exp, 1.0, 0.0, 4);

    assert!((exact - pade).abs() < taylor_result.absolute_error);
}

#[test]
fn test_pade_pole_yields_nan_not_error() {
    let exp = predefined::exponential();
    // (1,1) approximant of e^x is (1 + x/2)/(1 − x/2), undefined at x = 2.
    let value = approximate_from_handles(&exp, 2.0, 0.0, 1, 1).unwrap();
    assert!(value.is_nan());
}

#[test]
fn test_pade_error_rejection() {
    let coefficients = vec![0.0; 6];
    let err = adataylor::compute_approximation(0.5, 0.0, &coefficients, 2, 3).unwrap_err();
    assert_eq!(err, AdaTaylorError::SingularSystem);

    let err = adataylor::compute_approximation(0.5, 0.0, &[1.0, 2.0], 2, 3).unwrap_err();
    assert_eq!(
        err,
        AdaTaylorError::InsufficientCoefficients {
            required: 6,
            available: 2
        }
    );
}

#[test]
fn test_geometric_series_coefficients() {
    // 1/(1−x) has the series 1 + x + x² + …, so every c_k is 1.
    let geometric = predefined::geometric();
    let coefficients = series_coefficients(&geometric, 0.0, 5);
    for c in &coefficients {
        assert_abs_diff_eq!(c, &1.0, epsilon = 1e-9);
    }
}

#[test]
fn test_haar_round_trip_across_signal_kinds() {
    for kind in [
        SignalKind::Sine,
        SignalKind::Cosine,
        SignalKind::Square,
        SignalKind::Sawtooth,
        SignalKind::Chirp,
    ] {
        let signal = generate_signal(kind, 64);
        let coefficients = forward_transform(&signal, WaveletKind::Haar).unwrap();
        let reconstructed = inverse_transform(&coefficients, WaveletKind::Haar).unwrap();

        assert_eq!(reconstructed.len(), signal.len());
        let rms = reconstruction_error(&signal, &reconstructed);
        assert!(rms < 1e-9, "{:?}: rms {}", kind, rms);
    }
}

#[test]
fn test_wavelet_length_validation() {
    let err = forward_transform(&vec![0.0; 17], WaveletKind::Haar).unwrap_err();
    assert_eq!(err, AdaTaylorError::InvalidSignalLength(17));

    // Dyadic lengths pass regardless of wavelet kind.
    for kind in [
        WaveletKind::Haar,
        WaveletKind::Daubechies4,
        WaveletKind::MexicanHat,
    ] {
        assert!(forward_transform(&vec![1.0; 32], kind).is_ok());
    }
}

#[test]
fn test_hybrid_pipeline_on_sine() {
    let x_values: Vec<f64> = (0..100).map(|i| i as f64 / 99.0).collect();
    let result = perform_mixed_approximation(
        f64::sin,
        &x_values,
        &[0.0, 0.5, 1.0],
        &[3, 3],
        &[0.25, 0.75],
        WaveletKind::Haar,
        3,
    )
    .unwrap();

    assert_eq!(result.approximate_values.len(), x_values.len());
    assert_eq!(result.errors.len(), x_values.len());
    assert!(result.mean_error.is_finite());
    assert!(result.mean_error < 1e-3);

    // The theoretical bound must dominate the observed mean error.
    let bound = estimate_error_bound(1.0, 3, 0.5, 3);
    assert!(result.mean_error < bound);
}

#[test]
fn test_hybrid_rejects_mismatched_partition() {
    let err = perform_mixed_approximation(
        f64::sin,
        &[0.5],
        &[0.0, 1.0],
        &[3, 3, 3],
        &[0.5],
        WaveletKind::Haar,
        2,
    )
    .unwrap_err();
    assert!(matches!(err, AdaTaylorError::ParameterMismatch { .. }));
}

#[test]
fn test_formula_rendering_content() {
    let sine = predefined::sine();
    let derivatives = sine.derivative_values(0.0, 4);

    let text = generate_expansion_text(0.0, &derivatives, 3);
    assert_eq!(text, "0 + x - x^3/3!");

    let latex = generate_expansion_latex(0.0, &derivatives, 3);
    assert_eq!(latex, "0 + x - \\frac{x^{3}}{3!}");

    let remainder = remainder_latex(3, RemainderKind::Lagrange);
    assert!(remainder.contains("\\frac{f^{(4)}(\\xi)}{4!}"));
}

#[test]
fn test_numeric_adapter_feeds_every_engine() {
    // A model built from a bare closure (the expression-evaluator contract)
    // must work everywhere a closed-form table does.
    let model = FunctionModel::from_function("sin", "sin(x)", f64::sin, 6, 0.0, (-1.0, 1.0));

    let taylor_result = taylor(&model, 0.1, 0.0, 3);
    assert!(taylor_result.absolute_error < 1e-4);

    let remainder = evaluate_remainder(&model, 0.1, 0.0, 2, RemainderKind::Lagrange).unwrap();
    assert!(remainder.remainder_value < 1e-2);

    // (1,2): sin is odd, so even/odd degree pairs like (2,1) are singular.
    let pade = approximate_from_handles(&model, 0.1, 0.0, 1, 2).unwrap();
    assert_abs_diff_eq!(pade, 0.1f64.sin(), epsilon = 1e-3);
}
