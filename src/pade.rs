use nalgebra::{DMatrix, DVector};

use crate::error::{AdaTaylorError, Result};
use crate::function::FunctionModel;
use crate::series::factorial;

/// Pivot magnitude below which the Toeplitz system counts as singular.
const PIVOT_EPSILON: f64 = 1e-10;
/// Denominator magnitude below which the approximant is undefined (NaN).
const DENOMINATOR_EPSILON: f64 = 1e-10;

/// Numerator and denominator coefficients of the (m, n) Padé approximant,
/// both as polynomials in (x − x0).
///
/// Needs at least `m + n + 1` series coefficients `c_k = f⁽ᵏ⁾(x0)/k!`.
/// The denominator is normalized to `b0 = 1`; `b1..bn` come from the
/// Toeplitz-like system with rows `M[i][j] = c_{m+i−j}` (zero when the index
/// is out of range) and right-hand side `−c_{m+i+1}`. Numerator coefficients
/// follow by discrete convolution: `a_i = c_i + Σ_{j=1}^{min(i,n)} b_j·c_{i−j}`.
pub fn pade_coefficients(
    coefficients: &[f64],
    m: usize,
    n: usize,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let required = m + n + 1;
    if coefficients.len() < required {
        return Err(AdaTaylorError::InsufficientCoefficients {
            required,
            available: coefficients.len(),
        });
    }

    let b_tail = if n > 0 {
        let mut matrix = DMatrix::<f64>::zeros(n, n);
        let mut rhs = DVector::<f64>::zeros(n);
        for i in 0..n {
            for j in 0..n {
                let index = m as isize + i as isize - j as isize;
                if index >= 0 && (index as usize) < coefficients.len() {
                    matrix[(i, j)] = coefficients[index as usize];
                }
            }
            rhs[i] = -coefficients[m + i + 1];
        }
        solve_linear_system(&matrix, &rhs)?
    } else {
        Vec::new()
    };

    let mut denominator = Vec::with_capacity(n + 1);
    denominator.push(1.0);
    denominator.extend(b_tail);

    let mut numerator = Vec::with_capacity(m + 1);
    for i in 0..=m {
        let mut a = coefficients[i];
        for j in 1..=i.min(n) {
            a += denominator[j] * coefficients[i - j];
        }
        numerator.push(a);
    }

    Ok((numerator, denominator))
}

/// Evaluates the (m, n) Padé approximant at `x`.
///
/// Returns NaN (not an error) when the denominator magnitude at `x` drops
/// below 1e-10: near-pole evaluation is an expected outcome and must not
/// abort a batch of points.
pub fn compute_approximation(
    x: f64,
    x0: f64,
    coefficients: &[f64],
    m: usize,
    n: usize,
) -> Result<f64> {
    let (numerator, denominator) = pade_coefficients(coefficients, m, n)?;

    let num = evaluate_polynomial(&numerator, x - x0);
    let den = evaluate_polynomial(&denominator, x - x0);

    if den.abs() < DENOMINATOR_EPSILON {
        return Ok(f64::NAN);
    }
    Ok(num / den)
}

/// Padé approximation straight from a function model's derivative handles.
///
/// Series coefficients are built up to degree `m + n`; orders the handle list
/// cannot supply are filled with 0.0 silently (a precision ceiling, not a
/// failure).
pub fn approximate_from_handles(
    model: &FunctionModel,
    x: f64,
    x0: f64,
    m: usize,
    n: usize,
) -> Result<f64> {
    let coefficients = series_coefficients(model, x0, m + n);
    compute_approximation(x, x0, &coefficients, m, n)
}

/// Series coefficients c_k = f⁽ᵏ⁾(x0)/k! for k = 0..=max_order, with 0.0 for
/// orders beyond the handle list.
pub fn series_coefficients(model: &FunctionModel, x0: f64, max_order: usize) -> Vec<f64> {
    let mut coefficients = Vec::with_capacity(max_order + 1);
    coefficients.push(model.eval(x0));
    for i in 1..=max_order {
        if i < model.derivatives.len() {
            coefficients.push(model.derivatives[i](x0) / factorial(i));
        } else {
            coefficients.push(0.0);
        }
    }
    coefficients
}

fn evaluate_polynomial(coefficients: &[f64], t: f64) -> f64 {
    coefficients
        .iter()
        .enumerate()
        .map(|(i, c)| c * t.powi(i as i32))
        .sum()
}

/// Gaussian elimination with partial pivoting over the augmented matrix.
/// A pivot of magnitude below 1e-10 after row exchange is a singular system.
fn solve_linear_system(matrix: &DMatrix<f64>, rhs: &DVector<f64>) -> Result<Vec<f64>> {
    let n = rhs.len();
    let mut aug = DMatrix::<f64>::zeros(n, n + 1);
    for i in 0..n {
        for j in 0..n {
            aug[(i, j)] = matrix[(i, j)];
        }
        aug[(i, n)] = rhs[i];
    }

    for i in 0..n {
        // Largest-magnitude pivot in the remaining column.
        let mut max_row = i;
        for j in (i + 1)..n {
            if aug[(j, i)].abs() > aug[(max_row, i)].abs() {
                max_row = j;
            }
        }
        if max_row != i {
            aug.swap_rows(i, max_row);
        }

        let pivot = aug[(i, i)];
        if pivot.abs() < PIVOT_EPSILON {
            return Err(AdaTaylorError::SingularSystem);
        }

        for j in i..=n {
            aug[(i, j)] /= pivot;
        }
        for j in 0..n {
            if j != i {
                let factor = aug[(j, i)];
                for k in i..=n {
                    aug[(j, k)] -= factor * aug[(i, k)];
                }
            }
        }
    }

    Ok((0..n).map(|i| aug[(i, n)]).collect())
}
