use serde::{Deserialize, Serialize};

fn default_circle_length() -> f64 {
    2.0 * std::f64::consts::PI
}

fn default_vol_s3() -> f64 {
    2.0 * std::f64::consts::PI.powi(2)
}

fn default_vol_rp3() -> f64 {
    std::f64::consts::PI.powi(2)
}

fn default_curvature() -> f64 {
    6.0
}

/// Geometry of the macro-fold pair S^1 x RP^3 vs. S^1 x S^3.
///
/// Defaults carry the unit-round normalization: circle length L = 2π,
/// Vol(S^3) = 2π², Vol(RP^3) = π², scalar curvature R = 6. Every field
/// can be overridden so the coefficient formulas stay testable against
/// arbitrary volumes and curvatures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Geometry {
    /// Length of the S^1 factor.
    #[serde(default = "default_circle_length")]
    pub circle_length: f64,
    /// Volume of the orientable cover S^3.
    #[serde(default = "default_vol_s3")]
    pub vol_s3: f64,
    /// Volume of the quotient RP^3.
    #[serde(default = "default_vol_rp3")]
    pub vol_rp3: f64,
    /// Scalar curvature shared by both unit-round factors.
    #[serde(default = "default_curvature")]
    pub curvature: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            circle_length: default_circle_length(),
            vol_s3: default_vol_s3(),
            vol_rp3: default_vol_rp3(),
            curvature: default_curvature(),
        }
    }
}
