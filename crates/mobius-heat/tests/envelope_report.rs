use mobius_heat::{
    analyze_envelope, spectral_target, EnvelopeOpts, EnvelopeReport, Geometry, KernelSpec,
};

fn close(lhs: f64, rhs: f64, tol: f64) -> bool {
    (lhs - rhs).abs() <= tol * lhs.abs().max(rhs.abs()).max(1.0)
}

#[test]
fn default_report_fixed_points() {
    let report = analyze_envelope(&Geometry::default(), &EnvelopeOpts::default())
        .expect("envelope report");

    // Unit-round normalization: dA0 ratio is exactly 0.5, dA2 ratio -0.4.
    assert!(close(report.c_env_a0, 0.5, 1e-9));
    assert!(close(report.c_env_a2, -0.4, 1e-9));

    assert_eq!(report.manifolds.len(), 2);
    assert_eq!(report.manifolds[0].manifold, "S^3");
    assert_eq!(report.manifolds[1].manifold, "RP^3");
    assert_eq!(report.series.len(), 5);
    assert!(report.kernel.is_none());
    assert_eq!(report.rounding, 1e-9);
}

#[test]
fn spectral_constants_match_pinned_values() {
    let target = spectral_target(137.035999084);
    let zeta4 = std::f64::consts::PI.powi(4) / 90.0;
    let expected_spec = -(9.0 / 16.0) / 12.0 + (735.0 / 256.0) * zeta4 / 120.0;
    assert_eq!(target.a_spec, expected_spec);
    assert!(close(target.a_obs, 137.035999084_f64.powi(2) / 64.0, 1e-12));
    assert!(close(target.c_target, target.a_obs / target.a_spec, 1e-12));
    assert!(target.a_spec != 0.0);
}

#[test]
fn zero_a0_forces_the_a2_dominated_limit() {
    let opts = EnvelopeOpts {
        zero_a0: true,
        ..EnvelopeOpts::default()
    };
    let report = analyze_envelope(&Geometry::default(), &opts).expect("envelope report");
    assert_eq!(report.maxwell_series.d_a0, 0.0);
    assert_eq!(report.dirac_series.d_a0, 0.0);
    // With dA0 dropped the cubic ratio collapses to the A2 ratio at
    // every t (no higher-order terms configured).
    for point in &report.series {
        assert!(close(point.c_env, report.c_env_a2, 1e-9));
    }
}

#[test]
fn higher_order_coefficients_feed_the_series() {
    let opts = EnvelopeOpts {
        maxwell_d_a4: 1.5,
        dirac_d_a6: -0.25,
        ..EnvelopeOpts::default()
    };
    let report = analyze_envelope(&Geometry::default(), &opts).expect("envelope report");
    assert_eq!(report.maxwell_series.d_a4, 1.5);
    assert_eq!(report.dirac_series.d_a6, -0.25);
}

#[test]
fn reports_repeat_and_round_trip() {
    let opts = EnvelopeOpts {
        kernel: Some(KernelSpec::default()),
        ..EnvelopeOpts::default()
    };
    let geometry = Geometry::default();
    let first = analyze_envelope(&geometry, &opts).expect("envelope report");
    let second = analyze_envelope(&geometry, &opts).expect("envelope report");
    assert_eq!(first, second);

    let json = serde_json::to_string(&first).expect("serialize report");
    let restored: EnvelopeReport = serde_json::from_str(&json).expect("deserialize report");
    assert_eq!(first, restored);
}

#[test]
fn empty_t_grid_is_a_config_error() {
    let opts = EnvelopeOpts {
        t_grid: Vec::new(),
        ..EnvelopeOpts::default()
    };
    let err = analyze_envelope(&Geometry::default(), &opts).unwrap_err();
    assert_eq!(err.info().code, "empty-t-grid");
}
