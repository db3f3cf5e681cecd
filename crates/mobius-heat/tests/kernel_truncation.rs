use mobius_heat::{kernel_scan, odd_winding_kernel, KernelSpec};

const L: f64 = 2.0 * std::f64::consts::PI;

#[test]
fn even_windings_do_not_contribute() {
    // Raising the bound from an odd to the next even value adds only
    // even windings, which the sum skips.
    for &t in &[0.5, 0.2, 0.1, 0.05] {
        assert_eq!(odd_winding_kernel(t, L, 25), odd_winding_kernel(t, L, 26));
    }
}

#[test]
fn kernel_is_positive_and_decays() {
    let coarse = odd_winding_kernel(0.5, L, 25);
    let fine = odd_winding_kernel(0.02, L, 25);
    assert!(coarse > 0.0);
    assert!(fine >= 0.0);
    assert!(fine < coarse);
}

#[test]
fn truncation_has_converged_at_default_bound() {
    // The Gaussian tail is far below f64 resolution at w=25 for every
    // sample point in the default grid.
    for &t in &KernelSpec::default().samples {
        let default_bound = odd_winding_kernel(t, L, 25);
        let wider = odd_winding_kernel(t, L, 101);
        assert_eq!(default_bound, wider);
    }
}

#[test]
fn scan_uses_the_configured_grid() {
    let spec = KernelSpec {
        winding_max: 25,
        samples: vec![0.5, 0.1],
    };
    let samples = kernel_scan(L, &spec).expect("kernel scan");
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].t, 0.5);
    assert_eq!(samples[0].value, odd_winding_kernel(0.5, L, 25));
}

#[test]
fn scan_rejects_bad_configs() {
    let no_samples = KernelSpec {
        winding_max: 25,
        samples: Vec::new(),
    };
    assert!(kernel_scan(L, &no_samples).is_err());

    let bad_bound = KernelSpec {
        winding_max: 0,
        samples: vec![0.1],
    };
    assert!(kernel_scan(L, &bad_bound).is_err());

    let negative_t = KernelSpec {
        winding_max: 25,
        samples: vec![0.1, -0.5],
    };
    let err = kernel_scan(L, &negative_t).unwrap_err();
    assert_eq!(err.info().code, "invalid-kernel-sample");
}
