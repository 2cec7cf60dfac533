use std::fmt;

/// Error types for approximation operations
#[derive(Debug, Clone, PartialEq)]
pub enum AdaTaylorError {
    /// Not enough derivative handles for the requested order
    InsufficientDerivatives { required: usize, available: usize },
    /// Not enough series coefficients for the requested Padé degrees
    InsufficientCoefficients { required: usize, available: usize },
    /// Gaussian elimination hit a near-zero pivot
    SingularSystem,
    /// Wavelet input length is not a power of two
    InvalidSignalLength(usize),
    /// Hybrid approximation list lengths do not line up
    ParameterMismatch {
        intervals: usize,
        orders: usize,
        expansion_points: usize,
    },
}

impl fmt::Display for AdaTaylorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdaTaylorError::InsufficientDerivatives { required, available } => {
                write!(
                    f,
                    "Insufficient derivatives: {} handles available, need at least {}",
                    available, required
                )
            }
            AdaTaylorError::InsufficientCoefficients { required, available } => {
                write!(
                    f,
                    "Insufficient series coefficients: {} available, need at least {}",
                    available, required
                )
            }
            AdaTaylorError::SingularSystem => {
                write!(f, "Singular linear system: near-zero pivot in elimination")
            }
            AdaTaylorError::InvalidSignalLength(len) => {
                write!(
                    f,
                    "Invalid signal length: {}. Length must be a power of two",
                    len
                )
            }
            AdaTaylorError::ParameterMismatch {
                intervals,
                orders,
                expansion_points,
            } => {
                write!(
                    f,
                    "Parameter mismatch: {} interval boundaries require {} orders and expansion points, got {} and {}",
                    intervals,
                    intervals.saturating_sub(1),
                    orders,
                    expansion_points
                )
            }
        }
    }
}

impl std::error::Error for AdaTaylorError {}

/// Result type for approximation operations
pub type Result<T> = std::result::Result<T, AdaTaylorError>;
