use serde::{Deserialize, Serialize};

/// Default observed 1/alpha (CODATA 2018-ish).
pub const DEFAULT_ALPHA_INVERSE: f64 = 137.035999084;

/// Spectral-side constants and the target envelope normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralTarget {
    /// Spectral constant κ1 ζ(-1) + κ3 ζ(-3).
    pub a_spec: f64,
    /// Observed constant alpha_inv² / 64.
    pub a_obs: f64,
    /// Target normalization A_obs / A_spec.
    pub c_target: f64,
    /// Inverse fine-structure value the observed constant was built from.
    pub alpha_inverse: f64,
}

/// Evaluates the spectral target for the given observed 1/alpha.
///
/// The pinned coefficients are κ1 = 9/16 and κ3 = (735/256) ζ(4), with
/// ζ(-1) = -1/12, ζ(-3) = 1/120 and ζ(4) = π⁴/90. A_spec is a fixed
/// non-zero constant, so the ratio is always defined.
pub fn spectral_target(alpha_inverse: f64) -> SpectralTarget {
    let zeta4 = std::f64::consts::PI.powi(4) / 90.0;
    let a_spec = -(9.0 / 16.0) / 12.0 + (735.0 / 256.0) * zeta4 / 120.0;
    let a_obs = alpha_inverse.powi(2) / 64.0;
    SpectralTarget {
        a_spec,
        a_obs,
        c_target: a_obs / a_spec,
        alpha_inverse,
    }
}
