use crate::function::{DerivativeFn, FunctionModel};

/// Default cap for adaptive order selection.
pub const DEFAULT_MAX_ORDER: usize = 15;

/// Outcome of one Taylor evaluation at a point.
#[derive(Debug, Clone, PartialEq)]
pub struct TaylorResult {
    pub x: f64,
    pub x0: f64,
    pub order: usize,
    pub exact_value: f64,
    pub approximate_value: f64,
    /// |exact − approximate|
    pub absolute_error: f64,
    /// Lagrange-style bound from the next-order derivative at x0.
    /// Zero when no next-order handle is available.
    pub error_estimate: f64,
}

/// Iterative factorial. `factorial(0) = 1`.
pub fn factorial(n: usize) -> f64 {
    let mut result = 1.0;
    for i in 2..=n {
        result *= i as f64;
    }
    result
}

/// Evaluates the truncated power series Σ d_k·(x−x0)^k / k! for k = 0..=order.
///
/// `derivatives[k]` is the k-th derivative value at `x0`. A list shorter than
/// `order + 1` is not an error: missing terms contribute nothing, so callers
/// can probe incrementally.
pub fn compute_expansion(x: f64, x0: f64, derivatives: &[f64], order: usize) -> f64 {
    let mut result = 0.0;
    for (n, d) in derivatives.iter().enumerate().take(order + 1) {
        result += d * (x - x0).powi(n as i32) / factorial(n);
    }
    result
}

/// Lagrange-remainder-style truncation bound:
/// |next_derivative| · |x−x0|^(order+1) / (order+1)!.
///
/// `next_derivative` is the (order+1)-th derivative evaluated at x0, not at
/// the true intermediate point.
pub fn estimate_error(x: f64, x0: f64, next_derivative: f64, order: usize) -> f64 {
    let next_order = order + 1;
    next_derivative.abs() * (x - x0).abs().powi(next_order as i32) / factorial(next_order)
}

/// Greedy order search: starting at order 1, returns the first order whose
/// [`estimate_error`] falls strictly below `target_error`.
///
/// Returns the last order tried when `max_order` is reached or the handle list
/// runs out (each probe needs handle index `order + 1`). The estimate is not
/// guaranteed monotonic in the order, so this is a first-hit search, not a
/// minimum.
pub fn adaptive_order(
    x: f64,
    x0: f64,
    derivatives: &[DerivativeFn],
    target_error: f64,
    max_order: usize,
) -> usize {
    let mut order = 1;
    while order < max_order {
        if order + 1 >= derivatives.len() {
            break;
        }
        let next_derivative = derivatives[order + 1](x0);
        if estimate_error(x, x0, next_derivative, order) < target_error {
            return order;
        }
        order += 1;
    }
    order
}

/// Full Taylor evaluation of a function model at `x`, expanded around `x0`.
pub fn evaluate_taylor(model: &FunctionModel, x: f64, x0: f64, order: usize) -> TaylorResult {
    let derivatives = model.derivative_values(x0, order + 1);
    let approximate_value = compute_expansion(x, x0, &derivatives, order);
    let exact_value = model.eval(x);

    let error_estimate = if order + 1 < model.derivatives.len() {
        let next_derivative = model.derivatives[order + 1](x0);
        estimate_error(x, x0, next_derivative, order)
    } else {
        0.0
    };

    TaylorResult {
        x,
        x0,
        order,
        exact_value,
        approximate_value,
        absolute_error: (exact_value - approximate_value).abs(),
        error_estimate,
    }
}

/// Picks an order with [`adaptive_order`] and evaluates at it.
pub fn evaluate_adaptive(
    model: &FunctionModel,
    x: f64,
    x0: f64,
    target_error: f64,
    max_order: usize,
) -> TaylorResult {
    let order = adaptive_order(x, x0, &model.derivatives, target_error, max_order);
    evaluate_taylor(model, x, x0, order)
}

/// Plain-text rendering of the expansion built from derivative values at x0.
/// Zero-valued terms are skipped; a ±1 coefficient drops its multiplier.
pub fn generate_expansion_text(x0: f64, derivatives: &[f64], order: usize) -> String {
    let mut out = format_number(derivatives.first().copied().unwrap_or(0.0));

    for (i, &d) in derivatives.iter().enumerate().take(order + 1).skip(1) {
        if d == 0.0 {
            continue;
        }

        out.push_str(if d > 0.0 { " + " } else { " - " });

        let coefficient = d.abs();
        if coefficient != 1.0 {
            out.push_str(&format_number(coefficient));
            out.push('·');
        }
        out.push_str(&x_term_text(x0));
        if i > 1 {
            out.push_str(&format!("^{}", i));
            out.push_str(&format!("/{}!", i));
        }
    }

    out
}

/// LaTeX rendering of the same expansion.
pub fn generate_expansion_latex(x0: f64, derivatives: &[f64], order: usize) -> String {
    let mut out = format_number(derivatives.first().copied().unwrap_or(0.0));

    for (i, &d) in derivatives.iter().enumerate().take(order + 1).skip(1) {
        if d == 0.0 {
            continue;
        }

        out.push_str(if d > 0.0 { " + " } else { " - " });

        let coefficient = d.abs();
        let mut term = String::new();
        if coefficient != 1.0 {
            term.push_str(&format_number(coefficient));
            term.push_str(" \\cdot ");
        }
        term.push_str(&x_term_latex(x0));
        if i > 1 {
            term.push_str(&format!("^{{{}}}", i));
            out.push_str(&format!("\\frac{{{}}}{{{}!}}", term, i));
        } else {
            out.push_str(&term);
        }
    }

    out
}

fn x_term_text(x0: f64) -> String {
    if x0 == 0.0 {
        "x".to_string()
    } else if x0 < 0.0 {
        format!("(x+{})", format_number(-x0))
    } else {
        format!("(x-{})", format_number(x0))
    }
}

fn x_term_latex(x0: f64) -> String {
    if x0 == 0.0 {
        "x".to_string()
    } else if x0 < 0.0 {
        format!("(x+{})", format_number(-x0))
    } else {
        format!("(x-{})", format_number(x0))
    }
}

/// Fixed display policy: "0" for zero; scientific with 4 fractional digits
/// outside [0.0001, 10000]; integers without a decimal point; otherwise up to
/// 4 fractional digits with trailing zeros trimmed.
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude < 0.0001 || magnitude > 10000.0 {
        return format!("{:.4e}", value);
    }
    if value == value.trunc() {
        return format!("{}", value as i64);
    }
    format!("{:.4}", value)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
