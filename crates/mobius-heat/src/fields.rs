use serde::{Deserialize, Serialize};

/// Field content entering the envelope normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Minimally coupled scalar.
    Scalar,
    /// Gauge-fixed Maxwell field: coexact one-forms minus the ghost scalar.
    Maxwell,
    /// 3d Dirac spinor (rank 2, Lichnerowicz D^2 = -∇^2 + R/4).
    Dirac,
}

impl FieldKind {
    /// All field kinds in report order.
    pub const ALL: [FieldKind; 3] = [FieldKind::Scalar, FieldKind::Maxwell, FieldKind::Dirac];

    /// Display label used by the console renderer.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Scalar => "Scalar",
            FieldKind::Maxwell => "Maxwell",
            FieldKind::Dirac => "Dirac",
        }
    }
}

/// Leading Seeley–DeWitt coefficients for one field on one manifold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatCoefficients {
    /// Zeroth coefficient (volume term).
    pub a0: f64,
    /// Second coefficient (curvature term).
    pub a2: f64,
}

fn scalar_coefficients(vol: f64, curvature: f64) -> HeatCoefficients {
    HeatCoefficients {
        a0: vol,
        a2: curvature * vol / 6.0,
    }
}

fn oneform_coefficients(vol: f64, curvature: f64) -> HeatCoefficients {
    // Hodge–de Rham on the rank-3 bundle: (1/6) R tr Id - tr Ric, with
    // tr Ric = R in three dimensions.
    HeatCoefficients {
        a0: 3.0 * vol,
        a2: curvature * (3.0 * vol) / 6.0 - curvature * vol,
    }
}

fn dirac_coefficients(vol: f64, curvature: f64) -> HeatCoefficients {
    let rank = 2.0 * vol;
    HeatCoefficients {
        a0: rank,
        a2: curvature * rank / 6.0 + (curvature / 4.0) * rank,
    }
}

/// Returns the (A0, A2) pair for the given field on a manifold of the
/// given volume and scalar curvature. Total for all real inputs.
pub fn field_coefficients(field: FieldKind, vol: f64, curvature: f64) -> HeatCoefficients {
    match field {
        FieldKind::Scalar => scalar_coefficients(vol, curvature),
        FieldKind::Maxwell => {
            let oneform = oneform_coefficients(vol, curvature);
            let ghost = scalar_coefficients(vol, curvature);
            HeatCoefficients {
                a0: oneform.a0 - ghost.a0,
                a2: oneform.a2 - ghost.a2,
            }
        }
        FieldKind::Dirac => dirac_coefficients(vol, curvature),
    }
}

/// Elementwise difference of two coefficient pairs, conventionally the
/// parity-projected RP^3 minus S^3 combination. Total.
pub fn parity_difference(lhs: HeatCoefficients, rhs: HeatCoefficients) -> HeatCoefficients {
    HeatCoefficients {
        a0: lhs.a0 - rhs.a0,
        a2: lhs.a2 - rhs.a2,
    }
}
