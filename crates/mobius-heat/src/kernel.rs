use mobius_core::errors::{ErrorInfo, MobiusError};
use serde::{Deserialize, Serialize};

fn kernel_error(code: &str, message: impl Into<String>) -> MobiusError {
    MobiusError::Config(ErrorInfo::new(code, message))
}

fn default_winding_max() -> i64 {
    25
}

fn default_samples() -> Vec<f64> {
    vec![0.5, 0.2, 0.1, 0.05, 0.02]
}

/// Options for the truncated odd-winding kernel scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KernelSpec {
    /// Symmetric truncation bound on the winding number.
    #[serde(default = "default_winding_max")]
    pub winding_max: i64,
    /// Proper-time sample points printed for confirmation.
    #[serde(default = "default_samples")]
    pub samples: Vec<f64>,
}

impl Default for KernelSpec {
    fn default() -> Self {
        Self {
            winding_max: default_winding_max(),
            samples: default_samples(),
        }
    }
}

/// One evaluated kernel sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KernelSample {
    /// Proper-time argument.
    pub t: f64,
    /// Kernel value K_odd(t).
    pub value: f64,
}

/// Truncated odd-winding S^1 heat kernel.
///
/// Sums exp(-l²w²/(4t)) over odd w in [-winding_max, winding_max] and
/// scales by 2l/sqrt(4πt). The truncation bound is a fixed parameter,
/// not adaptively chosen; the kernel cancels in the envelope ratio and
/// is reported only for confirmation.
pub fn odd_winding_kernel(t: f64, circle_length: f64, winding_max: i64) -> f64 {
    let mut sum = 0.0;
    for w in -winding_max..=winding_max {
        if w % 2 != 0 {
            let w = w as f64;
            sum += (-(circle_length * circle_length) * (w * w) / (4.0 * t)).exp();
        }
    }
    (2.0 * circle_length) / (4.0 * std::f64::consts::PI * t).sqrt() * sum
}

/// Evaluates the kernel over the configured sample grid.
pub fn kernel_scan(
    circle_length: f64,
    spec: &KernelSpec,
) -> Result<Vec<KernelSample>, MobiusError> {
    if spec.winding_max <= 0 {
        return Err(kernel_error(
            "invalid-winding-max",
            "kernel scans require a positive truncation bound",
        ));
    }
    if spec.samples.is_empty() {
        return Err(kernel_error(
            "empty-kernel-grid",
            "kernel scans require at least one sample point",
        ));
    }
    let mut out = Vec::with_capacity(spec.samples.len());
    for &t in &spec.samples {
        if t <= 0.0 {
            return Err(MobiusError::Config(
                ErrorInfo::new(
                    "invalid-kernel-sample",
                    "kernel sample points must be positive",
                )
                .with_context("t", format!("{t}")),
            ));
        }
        out.push(KernelSample {
            t,
            value: odd_winding_kernel(t, circle_length, spec.winding_max),
        });
    }
    Ok(out)
}
