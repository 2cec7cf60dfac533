use crate::error::{AdaTaylorError, Result};
use crate::function::FunctionModel;
use crate::series::{compute_expansion, factorial};

/// Classical truncation-error formulas for a Taylor expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemainderKind {
    Lagrange,
    Cauchy,
    Integral,
}

/// Outcome of one remainder evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct RemainderResult {
    pub x: f64,
    pub x0: f64,
    pub order: usize,
    pub kind: RemainderKind,
    pub exact_value: f64,
    pub approximate_value: f64,
    /// |exact − Taylor approximation|
    pub actual_error: f64,
    /// |R_order(x)| under the selected formula.
    pub remainder_value: f64,
}

/// Signed remainder R_order(x) under the selected formula.
///
/// All three formulas need the derivative handle of index `order + 1`.
/// The intermediate point ξ is never solved for: Lagrange uses the midpoint of
/// `[x0, x]` and Cauchy uses `x0 + 0.6·(x − x0)`. Both are fixed heuristics and
/// downstream numerics are calibrated against them.
pub fn compute_remainder(
    model: &FunctionModel,
    x: f64,
    x0: f64,
    order: usize,
    kind: RemainderKind,
) -> Result<f64> {
    if order + 1 >= model.derivatives.len() {
        return Err(AdaTaylorError::InsufficientDerivatives {
            required: order + 2,
            available: model.derivatives.len(),
        });
    }
    let next_derivative = &model.derivatives[order + 1];

    let value = match kind {
        RemainderKind::Lagrange => {
            let xi = (x0 + x) / 2.0;
            next_derivative(xi) * (x - x0).powi(order as i32 + 1) / factorial(order + 1)
        }
        RemainderKind::Cauchy => {
            let xi = x0 + 0.6 * (x - x0);
            next_derivative(xi) * (x - x0).powi(order as i32) * (x - xi) / factorial(order)
        }
        RemainderKind::Integral => {
            // Composite trapezoid over [x0, x] with a fixed 100 subintervals;
            // no adaptive refinement.
            let segments = 100;
            let step = (x - x0) / segments as f64;
            let integrand = |t: f64| next_derivative(t) * (x - t).powi(order as i32);

            let mut sum = 0.0;
            for i in 0..segments {
                let t1 = x0 + i as f64 * step;
                let t2 = x0 + (i + 1) as f64 * step;
                sum += (integrand(t1) + integrand(t2)) * step / 2.0;
            }
            sum / factorial(order)
        }
    };

    Ok(value)
}

/// Evaluates the Taylor approximation at `x` and its remainder side by side.
pub fn evaluate_remainder(
    model: &FunctionModel,
    x: f64,
    x0: f64,
    order: usize,
    kind: RemainderKind,
) -> Result<RemainderResult> {
    let remainder = compute_remainder(model, x, x0, order, kind)?;

    let exact_value = model.eval(x);
    let derivatives = model.derivative_values(x0, order + 1);
    let approximate_value = compute_expansion(x, x0, &derivatives, order);

    Ok(RemainderResult {
        x,
        x0,
        order,
        kind,
        exact_value,
        approximate_value,
        actual_error: (exact_value - approximate_value).abs(),
        remainder_value: remainder.abs(),
    })
}

/// |R_order| for order = 1..=max_order, stopping at the first order the
/// derivative list cannot support instead of failing the whole sweep.
pub fn remainder_by_order(
    model: &FunctionModel,
    x: f64,
    x0: f64,
    kind: RemainderKind,
    max_order: usize,
) -> Vec<(usize, f64)> {
    let mut results = Vec::new();
    for order in 1..=max_order {
        match compute_remainder(model, x, x0, order, kind) {
            Ok(value) => results.push((order, value.abs())),
            Err(_) => break,
        }
    }
    results
}

/// LaTeX form of the selected remainder formula (symbolic, not numeric).
pub fn remainder_latex(order: usize, kind: RemainderKind) -> String {
    let n = order;
    match kind {
        RemainderKind::Lagrange => format!(
            "R_{{{n}}}(x) = \\frac{{f^{{({m})}}(\\xi)}}{{{m}!}}(x-x_0)^{{{m}}}",
            n = n,
            m = n + 1
        ),
        RemainderKind::Cauchy => format!(
            "R_{{{n}}}(x) = \\frac{{f^{{({m})}}(\\xi)}}{{{n}!}}(x-x_0)^{{{n}}}(x-\\xi)",
            n = n,
            m = n + 1
        ),
        RemainderKind::Integral => format!(
            "R_{{{n}}}(x) = \\frac{{1}}{{{n}!}}\\int_{{x_0}}^{{x}}f^{{({m})}}(t)(x-t)^{{{n}}}dt",
            n = n,
            m = n + 1
        ),
    }
}
