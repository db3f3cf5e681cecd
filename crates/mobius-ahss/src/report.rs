use mobius_core::errors::{ErrorInfo, MobiusError};
use serde::{Deserialize, Serialize};

use crate::index::{agreement_decades, decade_index, predict_density, PhysicalInputs};
use crate::tables::AhssInputs;

fn lookup_error(table: &str, degree: u32) -> MobiusError {
    MobiusError::Lookup(
        ErrorInfo::new(
            "missing-table-entry",
            format!("no {table} entry for degree {degree}"),
        )
        .with_context("table", table)
        .with_context("degree", degree.to_string())
        .with_hint("supply a complete table covering every panel index"),
    )
}

/// One E2 panel on the diagonal, with its contributing factors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct E2Panel {
    /// Panel label, e.g. "E^{5,0}_2".
    pub panel: String,
    /// Cohomology degree p.
    pub p: u32,
    /// Coefficient degree q.
    pub q: u32,
    /// dim H^p looked up from the cohomology table.
    pub h_dim: u64,
    /// rank_2(Ω^Pin+_q) looked up from the coefficient table.
    pub pin_rank: u64,
    /// Panel rank, the product of the two factors.
    pub rank: u64,
}

/// Per-panel breakdown and total of the E2-diagonal rank sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct E2Breakdown {
    /// Panels in the configured order.
    pub panels: Vec<E2Panel>,
    /// Sum of the panel ranks.
    pub total_rank: u64,
}

/// One row of the sensitivity scan over neighboring ranks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityRow {
    /// Hypothetical total rank.
    pub m: u32,
    /// Decade index for this rank.
    pub i10: u128,
    /// Predicted density at this rank, kg/m³.
    pub predicted_density: f64,
    /// Agreement with the observed density, in decades.
    pub agreement_decades: f64,
}

/// Complete index verification output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexReport {
    /// Input tables the report was computed from.
    pub inputs: AhssInputs,
    /// Physical reference densities.
    pub physical: PhysicalInputs,
    /// E2-diagonal breakdown.
    pub breakdown: E2Breakdown,
    /// Topological rank m fed into the decade index.
    pub m: u32,
    /// Decade index I_10(m).
    pub i10: u128,
    /// Predicted density rho_P * 10^(-I10), kg/m³.
    pub predicted_density: f64,
    /// log10(observed / predicted), in decades.
    pub agreement_decades: f64,
    /// Accuracy figure carried from the source analysis.
    pub accuracy_percent: f64,
    /// Whether the agreement magnitude clears the 0.1-decade bar.
    pub pass: bool,
    /// Sensitivity rows for neighboring ranks.
    pub sensitivity: Vec<SensitivityRow>,
}

/// Computes the per-panel ranks and their sum.
///
/// Every panel index must resolve in its table; a missing degree is a
/// caller defect and surfaces immediately as a lookup error.
pub fn e2_rank_sum(inputs: &AhssInputs) -> Result<E2Breakdown, MobiusError> {
    let mut panels = Vec::with_capacity(inputs.panels.len());
    let mut total_rank = 0u64;
    for &(p, q) in &inputs.panels {
        let h_dim = *inputs
            .cohomology_dims
            .get(&p)
            .ok_or_else(|| lookup_error("cohomology", p))?;
        let pin_rank = *inputs
            .pin_ranks
            .get(&q)
            .ok_or_else(|| lookup_error("pin-rank", q))?;
        let rank = h_dim * pin_rank;
        total_rank += rank;
        panels.push(E2Panel {
            panel: format!("E^{{{p},{q}}}_2"),
            p,
            q,
            h_dim,
            pin_rank,
            rank,
        });
    }
    Ok(E2Breakdown { panels, total_rank })
}

/// Evaluates the prediction pipeline for each rank in the given range.
pub fn sensitivity_scan(
    physical: &PhysicalInputs,
    ranks: impl IntoIterator<Item = u32>,
) -> Result<Vec<SensitivityRow>, MobiusError> {
    let mut rows = Vec::new();
    for m in ranks {
        let i10 = decade_index(m)?;
        let predicted_density = predict_density(physical.planck_density, i10);
        let agreement = agreement_decades(physical.observed_density, predicted_density)?;
        rows.push(SensitivityRow {
            m,
            i10,
            predicted_density,
            agreement_decades: agreement,
        });
    }
    Ok(rows)
}

/// Runs the full verification: rank sum, decade index, density
/// prediction, agreement, and the sensitivity scan over m in 6..=8.
pub fn verify_index(
    inputs: &AhssInputs,
    physical: &PhysicalInputs,
) -> Result<IndexReport, MobiusError> {
    let breakdown = e2_rank_sum(inputs)?;
    let m = u32::try_from(breakdown.total_rank).map_err(|_| {
        MobiusError::Overflow(
            ErrorInfo::new("rank-overflow", "total rank exceeds the supported range")
                .with_context("total_rank", breakdown.total_rank.to_string()),
        )
    })?;
    let i10 = decade_index(m)?;
    let predicted_density = predict_density(physical.planck_density, i10);
    let agreement = agreement_decades(physical.observed_density, predicted_density)?;
    let baseline = agreement_decades(physical.observed_density, physical.planck_density)?;
    let accuracy_percent = (1.0 - agreement.abs() / baseline) * 100.0;
    let sensitivity = sensitivity_scan(physical, 6..=8)?;

    Ok(IndexReport {
        inputs: inputs.clone(),
        physical: *physical,
        breakdown,
        m,
        i10,
        predicted_density,
        agreement_decades: agreement,
        accuracy_percent,
        pass: agreement.abs() < 0.1,
        sensitivity,
    })
}
