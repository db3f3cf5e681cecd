use mobius_ahss::{agreement_decades, decade_index, predict_density, PhysicalInputs};
use proptest::prelude::*;

#[test]
fn known_values() {
    assert_eq!(decade_index(0).expect("index"), 3);
    // (2^m - 1) - m + 3 plateaus at the origin before growing.
    assert_eq!(decade_index(1).expect("index"), 3);
    assert_eq!(decade_index(6).expect("index"), 60);
    assert_eq!(decade_index(7).expect("index"), 123);
    assert_eq!(decade_index(8).expect("index"), 250);
}

#[test]
fn overflows_past_the_u128_range() {
    assert!(decade_index(127).is_ok());
    assert!(decade_index(128).is_err());
}

#[test]
fn predicted_density_scales_by_powers_of_ten() {
    let predicted = predict_density(5.16e96, 123);
    let expected = 5.16e96 * 10f64.powi(-123);
    assert!((predicted - expected).abs() <= 1e-10 * expected.abs());
    assert!((predicted - 5.16e-27).abs() <= 1e-36);
}

#[test]
fn agreement_rejects_non_positive_densities() {
    assert!(agreement_decades(0.0, 1.0).is_err());
    assert!(agreement_decades(1.0, -2.0).is_err());
    assert!(agreement_decades(1.0, 1.0).expect("agreement").abs() < 1e-15);
}

#[test]
fn round_trip_matches_direct_substitution() {
    let physical = PhysicalInputs::default();
    for m in 0..=50u32 {
        let i10 = decade_index(m).expect("index");
        let predicted = predict_density(physical.planck_density, i10);
        if predicted > 0.0 {
            let via_pipeline =
                agreement_decades(physical.observed_density, predicted).expect("agreement");
            let direct = physical.observed_density.log10()
                - physical.planck_density.log10()
                + i10 as f64;
            assert!(
                (via_pipeline - direct).abs() <= 1e-6 * direct.abs().max(1.0),
                "m={m}: pipeline {via_pipeline} vs direct {direct}"
            );
        } else {
            // Indices past the f64 exponent range underflow the
            // prediction to zero, which the agreement refuses.
            assert!(agreement_decades(physical.observed_density, predicted).is_err());
        }
    }
}

#[test]
fn non_decreasing_at_the_origin() {
    assert!(decade_index(1).expect("index") >= decade_index(0).expect("index"));
}

proptest! {
    #[test]
    fn strictly_increasing_past_the_plateau(m in 1u32..120) {
        prop_assert!(decade_index(m + 1).unwrap() > decade_index(m).unwrap());
    }
}
