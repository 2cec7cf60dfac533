use std::rc::Rc;

/// A derivative handle: evaluates one derivative order of a function at a point.
/// Index 0 in a handle list is always the function itself.
pub type DerivativeFn = Box<dyn Fn(f64) -> f64>;

/// Default step for central-difference differentiation.
pub const DEFAULT_STEP: f64 = 1e-4;

/// A scalar function bundled with its ordered derivative handles.
///
/// This is a plain value object: it is built per computation, handed to the
/// engines, and dropped. Handles come either from a closed-form table
/// (see [`predefined`]) or from the numeric-differentiation adapter
/// ([`FunctionModel::from_function`]); the engines cannot tell the two apart.
pub struct FunctionModel {
    pub name: String,
    pub expression: String,
    /// Derivative handles, index 0 = the function itself.
    pub derivatives: Vec<DerivativeFn>,
    pub default_x0: f64,
    /// Closed interval the function is meant to be sampled on.
    pub domain: (f64, f64),
}

impl FunctionModel {
    pub fn new(
        name: impl Into<String>,
        expression: impl Into<String>,
        derivatives: Vec<DerivativeFn>,
        default_x0: f64,
        domain: (f64, f64),
    ) -> Self {
        Self {
            name: name.into(),
            expression: expression.into(),
            derivatives,
            default_x0,
            domain,
        }
    }

    /// Builds a model for an arbitrary closure, deriving handles up to
    /// `max_order` by repeated central differencing with [`DEFAULT_STEP`].
    ///
    /// This is the adapter used for functions coming out of an external
    /// expression evaluator, where no closed-form derivatives exist.
    pub fn from_function<F>(
        name: impl Into<String>,
        expression: impl Into<String>,
        f: F,
        max_order: usize,
        default_x0: f64,
        domain: (f64, f64),
    ) -> Self
    where
        F: Fn(f64) -> f64 + 'static,
    {
        let f: Rc<dyn Fn(f64) -> f64> = Rc::new(f);
        let derivatives = (0..=max_order)
            .map(|order| numerical_derivative(Rc::clone(&f), order, DEFAULT_STEP))
            .collect();

        Self {
            name: name.into(),
            expression: expression.into(),
            derivatives,
            default_x0,
            domain,
        }
    }

    /// Evaluates the function itself. NaN if no handles were supplied.
    pub fn eval(&self, x: f64) -> f64 {
        self.derivatives.first().map(|f| f(x)).unwrap_or(f64::NAN)
    }

    /// Evaluates the first `count` derivative handles at `x0`.
    /// Returns fewer values when fewer handles exist.
    pub fn derivative_values(&self, x0: f64, count: usize) -> Vec<f64> {
        self.derivatives.iter().take(count).map(|d| d(x0)).collect()
    }
}

/// Central-difference derivative of the given order as a reusable handle.
///
/// Orders 1 through 4 use fixed symmetric stencils; higher orders fall back to
/// a recursive first difference of the next-lower order. Accuracy degrades
/// quickly above order 4.
pub fn numerical_derivative(f: Rc<dyn Fn(f64) -> f64>, order: usize, h: f64) -> DerivativeFn {
    match order {
        0 => Box::new(move |x| f(x)),
        1 => Box::new(move |x| (f(x + h) - f(x - h)) / (2.0 * h)),
        2 => Box::new(move |x| (f(x + h) - 2.0 * f(x) + f(x - h)) / (h * h)),
        3 => Box::new(move |x| {
            (f(x + 2.0 * h) - 2.0 * f(x + h) + 2.0 * f(x - h) - f(x - 2.0 * h))
                / (2.0 * h * h * h)
        }),
        4 => Box::new(move |x| {
            (f(x + 2.0 * h) - 4.0 * f(x + h) + 6.0 * f(x) - 4.0 * f(x - h) + f(x - 2.0 * h))
                / (h * h * h * h)
        }),
        _ => {
            let lower = numerical_derivative(f, order - 1, h);
            Box::new(move |x| (lower(x + h) - lower(x - h)) / (2.0 * h))
        }
    }
}

/// Closed-form derivative tables for a few standard functions.
///
/// Each model carries 10 handles (orders 0 through 9), enough for every
/// operation in this crate at its default limits.
pub mod predefined {
    use super::{DerivativeFn, FunctionModel};
    use crate::series::factorial;
    use std::f64::consts::{FRAC_PI_2, PI};

    const HANDLE_COUNT: usize = 10;

    /// sin(x); the n-th derivative is sin(x + n·π/2).
    pub fn sine() -> FunctionModel {
        let derivatives: Vec<DerivativeFn> = (0..HANDLE_COUNT)
            .map(|n| -> DerivativeFn {
                let shift = n as f64 * FRAC_PI_2;
                Box::new(move |x| (x + shift).sin())
            })
            .collect();
        FunctionModel::new("sin", "sin(x)", derivatives, 0.0, (-PI, PI))
    }

    /// cos(x); the n-th derivative is cos(x + n·π/2).
    pub fn cosine() -> FunctionModel {
        let derivatives: Vec<DerivativeFn> = (0..HANDLE_COUNT)
            .map(|n| -> DerivativeFn {
                let shift = n as f64 * FRAC_PI_2;
                Box::new(move |x| (x + shift).cos())
            })
            .collect();
        FunctionModel::new("cos", "cos(x)", derivatives, 0.0, (-PI, PI))
    }

    /// eˣ; every derivative is eˣ itself.
    pub fn exponential() -> FunctionModel {
        let derivatives: Vec<DerivativeFn> = (0..HANDLE_COUNT)
            .map(|_| -> DerivativeFn { Box::new(f64::exp) })
            .collect();
        FunctionModel::new("exp", "e^x", derivatives, 0.0, (-2.0, 2.0))
    }

    /// 1/(1−x); the n-th derivative is n!/(1−x)^(n+1).
    pub fn geometric() -> FunctionModel {
        let derivatives: Vec<DerivativeFn> = (0..HANDLE_COUNT)
            .map(|n| -> DerivativeFn {
                let scale = factorial(n);
                Box::new(move |x| scale / (1.0 - x).powi(n as i32 + 1))
            })
            .collect();
        FunctionModel::new("geometric", "1/(1-x)", derivatives, 0.0, (-0.9, 0.9))
    }
}
