use mobius_heat::{field_coefficients, parity_difference, FieldKind, Geometry};
use proptest::prelude::*;

fn close(lhs: f64, rhs: f64) -> bool {
    let scale = lhs.abs().max(rhs.abs()).max(1.0);
    (lhs - rhs).abs() <= 1e-12 * scale
}

#[test]
fn scalar_coefficients_match_closed_form() {
    let coeffs = field_coefficients(FieldKind::Scalar, 7.0, 6.0);
    assert_eq!(coeffs.a0, 7.0);
    assert_eq!(coeffs.a2, 7.0);
}

#[test]
fn maxwell_is_oneform_minus_ghost() {
    // A0 = 3V - V, A2 = (RV/2 - RV) - RV/6 = -2RV/3.
    let coeffs = field_coefficients(FieldKind::Maxwell, 3.0, 6.0);
    assert!(close(coeffs.a0, 6.0));
    assert!(close(coeffs.a2, -12.0));
}

#[test]
fn default_geometry_naive_ratios() {
    let geometry = Geometry::default();
    let maxwell = parity_difference(
        field_coefficients(FieldKind::Maxwell, geometry.vol_rp3, geometry.curvature),
        field_coefficients(FieldKind::Maxwell, geometry.vol_s3, geometry.curvature),
    );
    let dirac = parity_difference(
        field_coefficients(FieldKind::Dirac, geometry.vol_rp3, geometry.curvature),
        field_coefficients(FieldKind::Dirac, geometry.vol_s3, geometry.curvature),
    );
    let pi_sq = std::f64::consts::PI.powi(2);
    assert!(close(maxwell.a0, -2.0 * pi_sq));
    assert!(close(maxwell.a2, 4.0 * pi_sq));
    assert!(close(dirac.a0, -2.0 * pi_sq));
    assert!(close(dirac.a2, -5.0 * pi_sq));
}

proptest! {
    #[test]
    fn dirac_a2_satisfies_lichnerowicz_form(vol in -1e6f64..1e6, curvature in -1e3f64..1e3) {
        // A2 = (R/6)(2V) + (R/4)(2V) for the rank-2 spinor bundle.
        let coeffs = field_coefficients(FieldKind::Dirac, vol, curvature);
        let expected = (curvature / 6.0) * (2.0 * vol) + (curvature / 4.0) * (2.0 * vol);
        prop_assert!(close(coeffs.a2, expected));
        prop_assert!(close(coeffs.a0, 2.0 * vol));
    }

    #[test]
    fn parity_difference_is_elementwise(
        a0_l in -1e6f64..1e6, a2_l in -1e6f64..1e6,
        a0_r in -1e6f64..1e6, a2_r in -1e6f64..1e6,
    ) {
        let lhs = mobius_heat::HeatCoefficients { a0: a0_l, a2: a2_l };
        let rhs = mobius_heat::HeatCoefficients { a0: a0_r, a2: a2_r };
        let diff = parity_difference(lhs, rhs);
        prop_assert_eq!(diff.a0, a0_l - a0_r);
        prop_assert_eq!(diff.a2, a2_l - a2_r);
    }
}
