//! # AdaTaylor
//!
//! Numerical approximation of scalar real functions near a point, four
//! interchangeable ways:
//!
//! - Truncated Taylor expansion with adaptive order selection
//! - Rational (Padé) approximation built from the same series coefficients
//! - Multiresolution discrete wavelet decomposition/reconstruction of
//!   sampled signals
//! - A hybrid scheme that corrects a piecewise Taylor approximation with a
//!   wavelet-reconstructed residual
//!
//! A companion module computes the truncation error (remainder) of a Taylor
//! expansion under the Lagrange, Cauchy and integral formulas.
//!
//! All engines are pure, synchronous functions over immutable inputs: a
//! computation takes a function handle (plus derivative handles), produces a
//! value object, and holds nothing afterwards. Per-point degeneracies inside a
//! batch (poles, out-of-domain samples) surface as NaN entries, never as
//! errors; malformed call shapes surface as [`AdaTaylorError`].
//!
//! ## Example
//!
//! ```rust
//! use adataylor::{predefined, taylor};
//!
//! let sine = predefined::sine();
//! let result = taylor(&sine, 0.1, 0.0, 3);
//! assert!(result.absolute_error < 1e-6);
//! ```

mod error;
mod function;
mod hybrid;
mod pade;
mod remainder;
mod series;
mod wavelet;

pub use error::{AdaTaylorError, Result};
pub use function::{
    numerical_derivative, predefined, DerivativeFn, FunctionModel, DEFAULT_STEP,
};
pub use hybrid::{
    estimate_error_bound, perform_mixed_approximation, MixedApproximationResult,
};
pub use pade::{
    approximate_from_handles, compute_approximation, pade_coefficients, series_coefficients,
};
pub use remainder::{
    compute_remainder, evaluate_remainder, remainder_by_order, remainder_latex, RemainderKind,
    RemainderResult,
};
pub use series::{
    adaptive_order, compute_expansion, estimate_error, evaluate_adaptive, evaluate_taylor,
    factorial, generate_expansion_latex, generate_expansion_text, TaylorResult,
    DEFAULT_MAX_ORDER,
};
pub use wavelet::{
    analysis_filters, forward_transform, generate_signal, inverse_transform,
    reconstruction_error, SignalKind, WaveletCoefficients, WaveletKind,
};

/// Taylor-expands a function model around `x0` and evaluates at `x`.
///
/// This is a convenience wrapper over [`evaluate_taylor`].
///
/// # Example
///
/// ```rust
/// use adataylor::{predefined, taylor};
///
/// let exp = predefined::exponential();
/// let result = taylor(&exp, 0.5, 0.0, 4);
/// assert!(result.absolute_error < 1e-3);
/// ```
pub fn taylor(model: &FunctionModel, x: f64, x0: f64, order: usize) -> TaylorResult {
    evaluate_taylor(model, x, x0, order)
}

/// Taylor evaluation at an adaptively chosen order (capped at
/// [`DEFAULT_MAX_ORDER`]): the lowest probed order whose truncation estimate
/// falls below `target_error`.
///
/// # Example
///
/// ```rust
/// use adataylor::{adaptive_taylor, predefined};
///
/// let exp = predefined::exponential();
/// let result = adaptive_taylor(&exp, 0.5, 0.0, 1e-4);
/// assert!(result.error_estimate < 1e-4);
/// ```
pub fn adaptive_taylor(
    model: &FunctionModel,
    x: f64,
    x0: f64,
    target_error: f64,
) -> TaylorResult {
    evaluate_adaptive(model, x, x0, target_error, DEFAULT_MAX_ORDER)
}
