use crate::error::{AdaTaylorError, Result};
use crate::series::{compute_expansion, factorial};
use crate::wavelet::{forward_transform, inverse_transform, WaveletKind};

/// Residual sample count per interval. Power of two by construction.
const RESIDUAL_SAMPLES: usize = 64;
/// Step for the hybrid path's internal central differences.
const DIFFERENTIATION_STEP: f64 = 1e-4;
/// Order of the midpoint Taylor baseline the residual is measured against.
const RESIDUAL_BASELINE_ORDER: usize = 3;

/// Pointwise outcome of a mixed Taylor + wavelet approximation run.
/// All four arrays have the same length as the requested sample points.
#[derive(Debug, Clone, PartialEq)]
pub struct MixedApproximationResult {
    pub x_values: Vec<f64>,
    pub exact_values: Vec<f64>,
    pub approximate_values: Vec<f64>,
    /// Per-point |exact − approximate|; NaN where the point was undefined.
    pub errors: Vec<f64>,
    /// Arithmetic mean of the finite entries of `errors`; NaN when none are.
    pub mean_error: f64,
}

/// Piecewise Taylor approximation with a wavelet-reconstructed residual
/// correction.
///
/// The domain is split by `intervals` (shared boundaries; a point on a
/// boundary belongs to the lower interval). Each interval carries its own
/// Taylor order and expansion point; derivative values come from central
/// differences with step 1e-4, where every order above 2 reuses the symmetric
/// second difference. On top of the local Taylor value, the residual against a
/// fixed order-3 midpoint baseline is sampled at 64 points, decomposed and
/// immediately reconstructed (no coefficient thresholding happens in between),
/// and linearly interpolated at the query point. Any failure along the wavelet
/// path, or a non-finite corrected value, falls back to the plain Taylor
/// value.
///
/// Points outside every interval get NaN for the exact value, approximation
/// and error alike, never an error: one bad point must not abort the batch.
///
/// `_wavelet_levels` is accepted but currently unused: the decomposition depth
/// is fixed by the 64-sample residual grid.
pub fn perform_mixed_approximation<F>(
    f: F,
    x_values: &[f64],
    intervals: &[f64],
    taylor_orders: &[usize],
    expansion_points: &[f64],
    wavelet: WaveletKind,
    _wavelet_levels: usize,
) -> Result<MixedApproximationResult>
where
    F: Fn(f64) -> f64,
{
    if intervals.len() < 2
        || taylor_orders.len() != intervals.len() - 1
        || expansion_points.len() != intervals.len() - 1
    {
        return Err(AdaTaylorError::ParameterMismatch {
            intervals: intervals.len(),
            orders: taylor_orders.len(),
            expansion_points: expansion_points.len(),
        });
    }

    let mut exact_values = Vec::with_capacity(x_values.len());
    let mut approximate_values = Vec::with_capacity(x_values.len());
    let mut errors = Vec::with_capacity(x_values.len());

    for &x in x_values {
        let interval = match find_interval(x, intervals) {
            Some(i) => i,
            None => {
                exact_values.push(f64::NAN);
                approximate_values.push(f64::NAN);
                errors.push(f64::NAN);
                continue;
            }
        };

        let exact = f(x);
        exact_values.push(exact);

        let order = taylor_orders[interval];
        let x0 = expansion_points[interval];

        let taylor_value = taylor_part(&f, x, x0, order);
        let corrected = wavelet_part(
            &f,
            x,
            intervals[interval],
            intervals[interval + 1],
            wavelet,
            taylor_value,
        );

        let approximate = if corrected.is_finite() {
            corrected
        } else {
            taylor_value
        };
        approximate_values.push(approximate);
        errors.push((exact - approximate).abs());
    }

    let mean_error = mean_of_finite(&errors);

    Ok(MixedApproximationResult {
        x_values: x_values.to_vec(),
        exact_values,
        approximate_values,
        errors,
        mean_error,
    })
}

/// Theoretical (non-tight) bound for the mixed scheme:
/// M·s^(k+1)/(k+1)! for the piecewise Taylor part plus an assumed 0.5·2^(−L)
/// wavelet-detail decay.
pub fn estimate_error_bound(
    max_derivative_bound: f64,
    max_taylor_order: usize,
    interval_size: f64,
    wavelet_level: usize,
) -> f64 {
    let taylor_error = max_derivative_bound * interval_size.powi(max_taylor_order as i32 + 1)
        / factorial(max_taylor_order + 1);
    let wavelet_error = 0.5 * 2.0f64.powi(-(wavelet_level as i32));
    taylor_error + wavelet_error
}

/// First interval [b_i, b_{i+1}] containing x; boundary points land in the
/// lower interval.
fn find_interval(x: f64, intervals: &[f64]) -> Option<usize> {
    (0..intervals.len() - 1).find(|&i| x >= intervals[i] && x <= intervals[i + 1])
}

fn taylor_part<F: Fn(f64) -> f64>(f: &F, x: f64, x0: f64, order: usize) -> f64 {
    let derivatives = central_derivatives(f, x0, order);
    compute_expansion(x, x0, &derivatives, order)
}

/// Derivative values at x0 by central differencing. Orders above 2 reuse the
/// symmetric second difference; this caps the scheme's accuracy but keeps
/// every interval's Taylor part cheap and pole-free.
fn central_derivatives<F: Fn(f64) -> f64>(f: &F, x0: f64, max_order: usize) -> Vec<f64> {
    let h = DIFFERENTIATION_STEP;
    let mut derivatives = Vec::with_capacity(max_order + 1);

    derivatives.push(f(x0));
    if max_order >= 1 {
        derivatives.push((f(x0 + h) - f(x0 - h)) / (2.0 * h));
    }
    if max_order >= 2 {
        let second = (f(x0 + h) - 2.0 * f(x0) + f(x0 - h)) / (h * h);
        for _ in 2..=max_order {
            derivatives.push(second);
        }
    }

    derivatives
}

/// Wavelet-corrected value at x, or NaN/fallback when the correction cannot
/// be formed.
fn wavelet_part<F: Fn(f64) -> f64>(
    f: &F,
    x: f64,
    interval_start: f64,
    interval_end: f64,
    wavelet: WaveletKind,
    taylor_value: f64,
) -> f64 {
    let midpoint = (interval_start + interval_end) / 2.0;
    let step = (interval_end - interval_start) / (RESIDUAL_SAMPLES - 1) as f64;

    let mut sample_x = Vec::with_capacity(RESIDUAL_SAMPLES);
    let mut residuals = Vec::with_capacity(RESIDUAL_SAMPLES);
    for i in 0..RESIDUAL_SAMPLES {
        let xi = interval_start + i as f64 * step;
        let baseline = taylor_part(f, xi, midpoint, RESIDUAL_BASELINE_ORDER);
        sample_x.push(xi);
        residuals.push(f(xi) - baseline);
    }

    let reconstructed = match forward_transform(&residuals, wavelet)
        .and_then(|coefficients| inverse_transform(&coefficients, wavelet))
    {
        Ok(signal) => signal,
        Err(_) => return taylor_value,
    };

    // NaN interpolation (x outside the sampled range) propagates to the
    // caller's fallback check.
    taylor_value + interpolate(&sample_x, &reconstructed, x)
}

/// Linear interpolation over sorted sample points; NaN outside their range.
fn interpolate(xs: &[f64], ys: &[f64], target: f64) -> f64 {
    let count = xs.len().min(ys.len());
    for i in 0..count.saturating_sub(1) {
        if target >= xs[i] && target <= xs[i + 1] {
            let ratio = (target - xs[i]) / (xs[i + 1] - xs[i]);
            return ys[i] + ratio * (ys[i + 1] - ys[i]);
        }
    }
    f64::NAN
}

fn mean_of_finite(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &v in values {
        if v.is_finite() {
            sum += v;
            count += 1;
        }
    }
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}
