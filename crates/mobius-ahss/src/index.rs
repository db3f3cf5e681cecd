use mobius_core::errors::{ErrorInfo, MobiusError};
use serde::{Deserialize, Serialize};

fn default_planck_density() -> f64 {
    5.16e96
}

fn default_observed_density() -> f64 {
    5.83e-27
}

/// Physical reference densities for the prediction, in kg/m³.
///
/// The labels are carried from the source analysis; nothing here
/// validates the physics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PhysicalInputs {
    /// Reference (Planck) density the decade index scales down from.
    #[serde(default = "default_planck_density")]
    pub planck_density: f64,
    /// Observed vacuum density the prediction is compared against.
    #[serde(default = "default_observed_density")]
    pub observed_density: f64,
}

impl Default for PhysicalInputs {
    fn default() -> Self {
        Self {
            planck_density: default_planck_density(),
            observed_density: default_observed_density(),
        }
    }
}

/// Decade index I_10(m) = (2^m - 1) - m + 3.
///
/// Checked u128 arithmetic: m above 127 overflows the representable
/// range and surfaces as an error rather than wrapping.
pub fn decade_index(m: u32) -> Result<u128, MobiusError> {
    let power = 1u128.checked_shl(m).ok_or_else(|| {
        MobiusError::Overflow(
            ErrorInfo::new("decade-index-overflow", "2^m exceeds the u128 range")
                .with_context("m", m.to_string()),
        )
    })?;
    Ok(power - 1 - u128::from(m) + 3)
}

/// Predicted density: reference scaled down by 10^(-i10). Pure and
/// total; absurdly large indices underflow to zero.
pub fn predict_density(reference: f64, i10: u128) -> f64 {
    reference * 10f64.powf(-(i10 as f64))
}

/// Agreement between observed and predicted densities, in decades.
pub fn agreement_decades(observed: f64, predicted: f64) -> Result<f64, MobiusError> {
    if observed <= 0.0 || predicted <= 0.0 {
        return Err(MobiusError::Domain(
            ErrorInfo::new(
                "non-positive-density",
                "agreement requires strictly positive densities",
            )
            .with_context("observed", format!("{observed:e}"))
            .with_context("predicted", format!("{predicted:e}")),
        ));
    }
    Ok((observed / predicted).log10())
}
