use mobius_core::errors::{ErrorInfo, MobiusError};
use mobius_core::{half_ratio, round_value};
use serde::{Deserialize, Serialize};

use crate::fields::{field_coefficients, parity_difference, FieldKind, HeatCoefficients};
use crate::geometry::Geometry;
use crate::kernel::{kernel_scan, KernelSample, KernelSpec};
use crate::series::{series_ratio, SeriesCoeffs};
use crate::spectral::{spectral_target, SpectralTarget, DEFAULT_ALPHA_INVERSE};

fn report_error(code: &str, message: impl Into<String>) -> MobiusError {
    MobiusError::Config(ErrorInfo::new(code, message))
}

fn default_alpha_inverse() -> f64 {
    DEFAULT_ALPHA_INVERSE
}

fn default_t_grid() -> Vec<f64> {
    vec![0.1, 0.05, 0.02, 0.01, 0.005]
}

/// Aggregated configuration for an envelope analysis run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnvelopeOpts {
    /// Observed inverse fine-structure value for the spectral target.
    #[serde(default = "default_alpha_inverse")]
    pub alpha_inverse: f64,
    /// Force dA0 = 0 on both series to expose the A2-dominated limit.
    #[serde(default)]
    pub zero_a0: bool,
    /// Optional second-order coefficient for the Maxwell difference.
    #[serde(default)]
    pub maxwell_d_a4: f64,
    /// Optional third-order coefficient for the Maxwell difference.
    #[serde(default)]
    pub maxwell_d_a6: f64,
    /// Optional second-order coefficient for the Dirac difference.
    #[serde(default)]
    pub dirac_d_a4: f64,
    /// Optional third-order coefficient for the Dirac difference.
    #[serde(default)]
    pub dirac_d_a6: f64,
    /// Proper-time grid for the series-model ratio.
    #[serde(default = "default_t_grid")]
    pub t_grid: Vec<f64>,
    /// Odd-winding kernel scan; `None` skips the section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel: Option<KernelSpec>,
}

impl Default for EnvelopeOpts {
    fn default() -> Self {
        Self {
            alpha_inverse: default_alpha_inverse(),
            zero_a0: false,
            maxwell_d_a4: 0.0,
            maxwell_d_a6: 0.0,
            dirac_d_a4: 0.0,
            dirac_d_a6: 0.0,
            t_grid: default_t_grid(),
            kernel: None,
        }
    }
}

/// Coefficient triple for one manifold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifoldCoefficients {
    /// Manifold label ("S^3" or "RP^3").
    pub manifold: String,
    /// Scalar field coefficients.
    pub scalar: HeatCoefficients,
    /// Gauge-fixed Maxwell coefficients.
    pub maxwell: HeatCoefficients,
    /// Dirac coefficients.
    pub dirac: HeatCoefficients,
}

/// One evaluated point of the series-model ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Proper-time argument.
    pub t: f64,
    /// Envelope ratio C_env(t); NaN marks an undefined ratio.
    pub c_env: f64,
}

/// Complete envelope analysis output, assembled once and rendered by the
/// CLI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeReport {
    /// Geometry the report was computed from.
    pub geometry: Geometry,
    /// Per-manifold coefficient triples, S^3 first.
    pub manifolds: Vec<ManifoldCoefficients>,
    /// Parity-projected Maxwell difference (RP^3 − S^3).
    pub maxwell_difference: HeatCoefficients,
    /// Parity-projected Dirac difference (RP^3 − S^3).
    pub dirac_difference: HeatCoefficients,
    /// Naive envelope ratio from the A0 coefficients.
    pub c_env_a0: f64,
    /// Naive envelope ratio from the A2 coefficients.
    pub c_env_a2: f64,
    /// Maxwell series coefficients used by the series model.
    pub maxwell_series: SeriesCoeffs,
    /// Dirac series coefficients used by the series model.
    pub dirac_series: SeriesCoeffs,
    /// Series-model ratio over the configured grid.
    pub series: Vec<SeriesPoint>,
    /// Spectral-side constants and the target normalization.
    pub spectral: SpectralTarget,
    /// Odd-winding kernel samples, present when a scan was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel: Option<Vec<KernelSample>>,
    /// Rounding granularity applied to O(1) floats.
    pub rounding: f64,
}

fn manifold_coefficients(label: &str, vol: f64, curvature: f64) -> ManifoldCoefficients {
    let mut triple = [HeatCoefficients { a0: 0.0, a2: 0.0 }; 3];
    for (slot, field) in triple.iter_mut().zip(FieldKind::ALL) {
        *slot = field_coefficients(field, vol, curvature);
    }
    ManifoldCoefficients {
        manifold: label.to_string(),
        scalar: triple[0],
        maxwell: triple[1],
        dirac: triple[2],
    }
}

/// Computes the full envelope report for the given geometry and options.
pub fn analyze_envelope(
    geometry: &Geometry,
    opts: &EnvelopeOpts,
) -> Result<EnvelopeReport, MobiusError> {
    if opts.t_grid.is_empty() {
        return Err(report_error(
            "empty-t-grid",
            "envelope analysis requires at least one t value",
        ));
    }

    let curvature = geometry.curvature;
    let s3 = manifold_coefficients("S^3", geometry.vol_s3, curvature);
    let rp3 = manifold_coefficients("RP^3", geometry.vol_rp3, curvature);

    let maxwell_difference = parity_difference(rp3.maxwell, s3.maxwell);
    let dirac_difference = parity_difference(rp3.dirac, s3.dirac);

    let c_env_a0 = half_ratio(maxwell_difference.a0, dirac_difference.a0);
    let c_env_a2 = half_ratio(maxwell_difference.a2, dirac_difference.a2);

    let mut maxwell_series = SeriesCoeffs {
        d_a0: maxwell_difference.a0,
        d_a2: maxwell_difference.a2,
        d_a4: opts.maxwell_d_a4,
        d_a6: opts.maxwell_d_a6,
    };
    let mut dirac_series = SeriesCoeffs {
        d_a0: dirac_difference.a0,
        d_a2: dirac_difference.a2,
        d_a4: opts.dirac_d_a4,
        d_a6: opts.dirac_d_a6,
    };
    if opts.zero_a0 {
        maxwell_series = maxwell_series.without_leading();
        dirac_series = dirac_series.without_leading();
    }

    let series = opts
        .t_grid
        .iter()
        .map(|&t| SeriesPoint {
            t,
            c_env: round_value(series_ratio(&maxwell_series, &dirac_series, t)),
        })
        .collect();

    let kernel = match &opts.kernel {
        Some(spec) => Some(kernel_scan(geometry.circle_length, spec)?),
        None => None,
    };

    Ok(EnvelopeReport {
        geometry: geometry.clone(),
        manifolds: vec![s3, rp3],
        maxwell_difference,
        dirac_difference,
        c_env_a0: round_value(c_env_a0),
        c_env_a2: round_value(c_env_a2),
        maxwell_series,
        dirac_series,
        series,
        spectral: spectral_target(opts.alpha_inverse),
        kernel,
        rounding: 1e-9,
    })
}
