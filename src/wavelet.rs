use std::f64::consts::PI;

use crate::error::{AdaTaylorError, Result};

/// Fixed bank of analysis filter pairs. Not user-extensible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveletKind {
    Haar,
    Daubechies4,
    /// Discretized approximation of the continuous Mexican-hat wavelet.
    /// Unlike the other two, this pair is not orthogonal, so reconstruction
    /// through it is approximate only.
    MexicanHat,
}

/// Deterministic test signals, one period over the sample count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Sine,
    Cosine,
    Square,
    Sawtooth,
    Chirp,
}

/// Per-level decomposition output. `approximation[l]` and `detail[l]` are the
/// level-(l+1) coefficient arrays, coarsest level last, each half the length
/// of the previous level.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveletCoefficients {
    pub approximation: Vec<Vec<f64>>,
    pub detail: Vec<Vec<f64>>,
}

impl WaveletCoefficients {
    pub fn levels(&self) -> usize {
        self.detail.len()
    }
}

/// Matched low-pass/high-pass analysis filter taps for a wavelet kind.
pub fn analysis_filters(kind: WaveletKind) -> (Vec<f64>, Vec<f64>) {
    match kind {
        WaveletKind::Haar => {
            let s = 1.0 / 2.0f64.sqrt();
            (vec![s, s], vec![s, -s])
        }
        WaveletKind::Daubechies4 => {
            let root3 = 3.0f64.sqrt();
            let scale = 4.0 * 2.0f64.sqrt();
            let h0 = (1.0 + root3) / scale;
            let h1 = (3.0 + root3) / scale;
            let h2 = (3.0 - root3) / scale;
            let h3 = (1.0 - root3) / scale;
            (vec![h0, h1, h2, h3], vec![h3, -h2, h1, -h0])
        }
        WaveletKind::MexicanHat => {
            // 8-tap discretization of ψ(t) = 2/√(3√π)·(1−t²)e^(−t²/2)
            // sampled on t = (i − 3.5)/3.
            let factor = 2.0 / (3.0 * PI.sqrt()).sqrt();
            let mut low = Vec::with_capacity(8);
            let mut high = Vec::with_capacity(8);
            for i in 0..8 {
                let t = (i as f64 - 3.5) / 3.0;
                let gaussian = (-t * t / 2.0).exp();
                low.push(factor * (1.0 - t * t) * gaussian);
                high.push(-factor * t * gaussian);
            }
            (low, high)
        }
    }
}

fn is_power_of_two(n: usize) -> bool {
    n > 0 && n & (n - 1) == 0
}

/// Multilevel discrete wavelet decomposition of a dyadic-length signal.
///
/// Each level circularly convolves with the low-pass and high-pass filters and
/// downsamples by two, recursing on the approximation until the working length
/// is at most 2. Fails with [`AdaTaylorError::InvalidSignalLength`] unless the
/// input length is a power of two.
pub fn forward_transform(signal: &[f64], kind: WaveletKind) -> Result<WaveletCoefficients> {
    if !is_power_of_two(signal.len()) {
        return Err(AdaTaylorError::InvalidSignalLength(signal.len()));
    }

    let (low, high) = analysis_filters(kind);
    let max_level = signal.len().trailing_zeros() as usize;

    let mut current = signal.to_vec();
    let mut approximation = Vec::new();
    let mut detail = Vec::new();

    for _ in 0..max_level {
        let n = current.len();
        let half = n / 2;
        let mut approx = vec![0.0; half];
        let mut det = vec![0.0; half];

        for i in 0..half {
            let mut a = 0.0;
            let mut d = 0.0;
            for (j, (&l, &h)) in low.iter().zip(high.iter()).enumerate() {
                let sample = current[(2 * i + j) % n];
                a += l * sample;
                d += h * sample;
            }
            approx[i] = a;
            det[i] = d;
        }

        approximation.push(approx.clone());
        detail.push(det);
        current = approx;

        if current.len() <= 2 {
            break;
        }
    }

    Ok(WaveletCoefficients {
        approximation,
        detail,
    })
}

/// Multilevel reconstruction, coarsest level first.
///
/// Each level applies the transpose of the analysis step: every coefficient
/// scatters its filter taps back onto the doubled output grid with circular
/// indexing. For the orthogonal pairs (Haar, Daubechies-4) this is the exact
/// inverse of [`forward_transform`]; for the Mexican-hat pair it is only an
/// approximate reconstruction.
pub fn inverse_transform(
    coefficients: &WaveletCoefficients,
    kind: WaveletKind,
) -> Result<Vec<f64>> {
    let (low, high) = analysis_filters(kind);

    let mut reconstructed = coefficients
        .approximation
        .last()
        .ok_or(AdaTaylorError::InvalidSignalLength(0))?
        .clone();

    for detail in coefficients.detail.iter().rev() {
        if detail.len() != reconstructed.len() {
            return Err(AdaTaylorError::InvalidSignalLength(detail.len()));
        }
        reconstructed = reconstruct_level(&reconstructed, detail, &low, &high);
    }

    Ok(reconstructed)
}

fn reconstruct_level(
    approximation: &[f64],
    detail: &[f64],
    low: &[f64],
    high: &[f64],
) -> Vec<f64> {
    let half = approximation.len();
    let n = 2 * half;
    let mut out = vec![0.0; n];

    for k in 0..half {
        for (j, (&l, &h)) in low.iter().zip(high.iter()).enumerate() {
            let idx = (2 * k + j) % n;
            out[idx] += l * approximation[k] + h * detail[k];
        }
    }

    out
}

/// Samples one period of a deterministic signal over `size` points.
pub fn generate_signal(kind: SignalKind, size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| {
            let t = i as f64 / size as f64;
            match kind {
                SignalKind::Sine => (2.0 * PI * t).sin(),
                SignalKind::Cosine => (2.0 * PI * t).cos(),
                SignalKind::Square => {
                    if i < size / 2 {
                        1.0
                    } else {
                        -1.0
                    }
                }
                SignalKind::Sawtooth => 2.0 * t - 1.0,
                SignalKind::Chirp => (2.0 * PI * 10.0 * t * t).sin(),
            }
        })
        .collect()
}

/// Root-mean-square difference between two signals; NaN on length mismatch.
pub fn reconstruction_error(original: &[f64], reconstructed: &[f64]) -> f64 {
    if original.len() != reconstructed.len() {
        return f64::NAN;
    }

    let sum_squared: f64 = original
        .iter()
        .zip(reconstructed.iter())
        .map(|(a, b)| (a - b) * (a - b))
        .sum();

    (sum_squared / original.len() as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_non_dyadic_length_rejected() {
        let signal = vec![0.0; 17];
        let err = forward_transform(&signal, WaveletKind::Haar).unwrap_err();
        assert_eq!(err, AdaTaylorError::InvalidSignalLength(17));
    }

    #[test]
    fn test_decomposition_shape() {
        let signal = generate_signal(SignalKind::Sine, 16);
        let coefficients = forward_transform(&signal, WaveletKind::Haar).unwrap();

        // 16 → 8 → 4 → 2, stopping once the working length reaches 2.
        assert_eq!(coefficients.levels(), 3);
        assert_eq!(coefficients.approximation[0].len(), 8);
        assert_eq!(coefficients.approximation[1].len(), 4);
        assert_eq!(coefficients.approximation[2].len(), 2);
        assert_eq!(coefficients.detail[2].len(), 2);
    }

    #[test]
    fn test_haar_round_trip() {
        for size in [4usize, 16, 64] {
            let signal = generate_signal(SignalKind::Chirp, size);
            let coefficients = forward_transform(&signal, WaveletKind::Haar).unwrap();
            let reconstructed = inverse_transform(&coefficients, WaveletKind::Haar).unwrap();

            assert_eq!(reconstructed.len(), signal.len());
            for (a, b) in signal.iter().zip(reconstructed.iter()) {
                assert_abs_diff_eq!(a, b, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_haar_round_trip_constant_signal() {
        let signal = vec![3.0; 8];
        let coefficients = forward_transform(&signal, WaveletKind::Haar).unwrap();
        let reconstructed = inverse_transform(&coefficients, WaveletKind::Haar).unwrap();
        for value in &reconstructed {
            assert_abs_diff_eq!(value, &3.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_daubechies4_round_trip() {
        let signal = generate_signal(SignalKind::Sine, 32);
        let coefficients = forward_transform(&signal, WaveletKind::Daubechies4).unwrap();
        let reconstructed = inverse_transform(&coefficients, WaveletKind::Daubechies4).unwrap();

        for (a, b) in signal.iter().zip(reconstructed.iter()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_empty_coefficients_rejected() {
        let empty = WaveletCoefficients {
            approximation: Vec::new(),
            detail: Vec::new(),
        };
        let err = inverse_transform(&empty, WaveletKind::Haar).unwrap_err();
        assert_eq!(err, AdaTaylorError::InvalidSignalLength(0));
    }

    #[test]
    fn test_generate_signal_values() {
        let sine = generate_signal(SignalKind::Sine, 8);
        assert_eq!(sine.len(), 8);
        assert_abs_diff_eq!(sine[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sine[2], 1.0, epsilon = 1e-12);

        let square = generate_signal(SignalKind::Square, 8);
        assert_eq!(square[0], 1.0);
        assert_eq!(square[3], 1.0);
        assert_eq!(square[4], -1.0);
        assert_eq!(square[7], -1.0);

        let sawtooth = generate_signal(SignalKind::Sawtooth, 4);
        assert_abs_diff_eq!(sawtooth[0], -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sawtooth[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reconstruction_error() {
        let a = vec![1.0, 2.0, 3.0];
        assert_eq!(reconstruction_error(&a, &a), 0.0);
        assert!(reconstruction_error(&a, &[1.0, 2.0]).is_nan());

        let b = vec![1.0, 2.0, 4.0];
        assert_abs_diff_eq!(
            reconstruction_error(&a, &b),
            (1.0f64 / 3.0).sqrt(),
            epsilon = 1e-12
        );
    }
}
