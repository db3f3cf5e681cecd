use mobius_core::half_ratio;
use serde::{Deserialize, Serialize};

/// Small-t expansion coefficients for one parity-projected trace
/// difference, truncated at cubic order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesCoeffs {
    /// Leading (volume) coefficient.
    #[serde(default)]
    pub d_a0: f64,
    /// Curvature coefficient, multiplying t.
    #[serde(default)]
    pub d_a2: f64,
    /// Optional second-order coefficient, multiplying t².
    #[serde(default)]
    pub d_a4: f64,
    /// Optional third-order coefficient, multiplying t³.
    #[serde(default)]
    pub d_a6: f64,
}

impl SeriesCoeffs {
    /// Evaluates the cubic expansion at t.
    pub fn evaluate(&self, t: f64) -> f64 {
        self.d_a0 + self.d_a2 * t + self.d_a4 * t.powi(2) + self.d_a6 * t.powi(3)
    }

    /// Returns a copy with the leading coefficient forced to zero.
    pub fn without_leading(mut self) -> Self {
        self.d_a0 = 0.0;
        self
    }
}

/// Envelope ratio of the series model at t: half the Maxwell expansion
/// over the Dirac expansion, with the NaN sentinel when the denominator
/// vanishes.
pub fn series_ratio(maxwell: &SeriesCoeffs, dirac: &SeriesCoeffs, t: f64) -> f64 {
    half_ratio(maxwell.evaluate(t), dirac.evaluate(t))
}
