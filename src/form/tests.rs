use approx::assert_relative_eq;

use crate::{error::GearError, misc::round5};

use super::*;

fn reference_form() -> GearForm<f64> {
    compute_form(0.13, 17, 112).unwrap()
}

fn gear_error(err: &anyhow::Error) -> &GearError {
    err.downcast_ref::<GearError>()
        .expect("error should carry a GearError")
}

#[test]
fn reference_pair_shared_dimensions() {
    let form = reference_form();
    assert_eq!(form.gear_ratio(), 6.58824);
    assert_eq!(form.circular_pitch(), 0.40841);
    assert_eq!(form.dedendum(), 0.2042);
    assert_eq!(form.center_distance(), 8.385);
    assert_relative_eq!(form.addendum_factor(), 2.0419809666459763, epsilon = 1e-9);
    assert_eq!(form.flank_factor(), 1.93988);
}

#[test]
fn reference_pair_wheel() {
    let form = reference_form();
    let wheel = form.wheel();
    assert_eq!(wheel.tooth_count(), 112);
    assert_eq!(wheel.pitch_diameter(), 14.56);
    assert_eq!(wheel.addendum(), 0.25218);
    assert_eq!(wheel.addendum_radius(), 0.37164);
    assert_eq!(wheel.half_tooth_angle(), 0.01402);
    assert_eq!(wheel.dedendum(), 0.08125);
    assert_eq!(wheel.inner_radius(), 7.19875);
    assert_eq!(wheel.outer_radius(), 7.53218);
}

#[test]
fn reference_pair_pinion() {
    let form = reference_form();
    let pinion = form.pinion();
    assert_eq!(pinion.tooth_count(), 17);
    assert_eq!(pinion.leaf_profile(), LeafProfile::RoundTopWide);
    assert_eq!(pinion.pitch_diameter(), 2.21);
    assert_eq!(pinion.addendum(), 0.08125);
    assert_eq!(pinion.addendum_radius(), 0.08125);
    assert_eq!(pinion.half_tooth_angle(), 0.07353);
    assert_eq!(pinion.dedendum(), 0.25218);
    assert_eq!(pinion.inner_radius(), 0.85282);
    assert_eq!(pinion.outer_radius(), 1.18625);
    assert_eq!(pinion.angular_offset_degrees(), 190.58824);
    assert_eq!(pinion.center().x, 8.385);
    assert_eq!(pinion.center().y, 0.0);
}

#[test]
fn pinion_addendum_table() {
    assert_eq!(pinion_addendum(5, 1.0).as_tuple(), (0.855, 1.050));
    assert_eq!(pinion_addendum(7, 1.0).as_tuple(), (0.855, 1.050));
    assert_eq!(pinion_addendum(8, 1.0).as_tuple(), (0.670, 0.700));
    assert_eq!(pinion_addendum(9, 1.0).as_tuple(), (0.670, 0.700));
    assert_eq!(pinion_addendum(10, 1.0).as_tuple(), (0.525, 0.525));
    assert_eq!(pinion_addendum(11, 1.0).as_tuple(), (0.625, 0.625));
    assert_eq!(pinion_addendum(20, 1.0).as_tuple(), (0.625, 0.625));

    let scaled = pinion_addendum(6, 0.5_f64);
    assert_eq!(scaled.profile(), LeafProfile::HighOgival);
    assert_relative_eq!(scaled.addendum(), 0.4275);
    assert_relative_eq!(scaled.addendum_radius(), 0.525);
}

#[test]
fn pinion_addendum_ignores_wheel() {
    let base = compute_form(1.0, 8, 16).unwrap();
    for wheel_teeth in [24, 64, 120, 400] {
        let form = compute_form(1.0, 8, wheel_teeth).unwrap();
        assert_eq!(form.pinion().addendum(), base.pinion().addendum());
        assert_eq!(
            form.pinion().addendum_radius(),
            base.pinion().addendum_radius()
        );
        assert_eq!(form.pinion().addendum(), 0.67);
    }
}

#[test]
fn addendum_factor_is_deterministic() {
    let a = solve_addendum_factor::<f64>(17, 112, None).unwrap();
    let b = solve_addendum_factor::<f64>(17, 112, None).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn addendum_factor_known_values() {
    let cases = [
        (6, 30, 1.3614729455744508),
        (8, 64, 1.5521807967023378),
        (10, 80, 1.6913797215269444),
        (12, 96, 1.8116491555545977),
    ];
    for (pinion, wheel, expected) in cases {
        let factor = solve_addendum_factor::<f64>(pinion, wheel, None).unwrap();
        assert_relative_eq!(factor, expected, epsilon = 1e-9);
    }
}

#[test]
fn addendum_factor_converges_over_common_ratios() {
    for pinion in 3..=40 {
        for wheel in (pinion..=600).step_by(13) {
            let factor = solve_addendum_factor::<f64>(pinion, wheel, None);
            assert!(factor.is_ok(), "{}/{} did not converge", pinion, wheel);
            assert!(factor.unwrap().is_finite());
        }
    }
}

#[test]
fn addendum_factor_iteration_cap() {
    let options = AddendumFactorSolverOptions::default().with_max_iters(2);
    let err = solve_addendum_factor::<f64>(17, 112, Some(options)).unwrap_err();
    assert!(matches!(
        gear_error(&err),
        GearError::NumericConvergence { .. }
    ));
}

#[test]
fn addendum_factor_rejects_zero_teeth() {
    let err = solve_addendum_factor::<f64>(0, 112, None).unwrap_err();
    assert!(matches!(gear_error(&err), GearError::InvalidGearSpec(_)));
}

#[test]
fn invalid_specs() {
    let cases = [
        GearSpec::<f64>::try_new(0.0, 17, 112),
        GearSpec::<f64>::try_new(-0.13, 17, 112),
        GearSpec::<f64>::try_new(f64::NAN, 17, 112),
        GearSpec::<f64>::try_new(0.13, 0, 112),
        GearSpec::<f64>::try_new(0.13, 17, -1),
        GearSpec::<f64>::try_new(0.13, 17, 16),
    ];
    for case in cases {
        let err = case.unwrap_err();
        assert!(matches!(gear_error(&err), GearError::InvalidGearSpec(_)));
    }
}

#[test]
fn equal_tooth_counts_are_accepted() {
    let form = compute_form(1.0, 12, 12).unwrap();
    assert_eq!(form.gear_ratio(), 1.0);
    assert_eq!(form.center_distance(), 12.0);
}

#[test]
fn small_pinion_uses_narrow_half_tooth_angle() {
    let form = compute_form(1.0, 8, 64).unwrap();
    assert_eq!(form.pinion().leaf_profile(), LeafProfile::MediumOgival);
    assert_eq!(form.pinion().half_tooth_angle(), 0.13125);
    assert_eq!(form.pinion().angular_offset_degrees(), 202.5);
    assert_eq!(form.wheel().inner_radius(), 31.33);
    assert_eq!(form.pinion().inner_radius(), 2.52543);
}

#[test]
fn custom_slop_deepens_roots() {
    let spec = GearSpec::try_new(0.13, 17, 112).unwrap();
    let options = GearFormOptions::default().with_clearance(DedendumClearance::Slop(0.01));
    let form = GearForm::try_new(&spec, Some(options)).unwrap();
    assert_eq!(form.wheel().dedendum(), 0.09125);
    assert_eq!(form.wheel().inner_radius(), 7.18875);
    assert_eq!(form.pinion().inner_radius(), 0.84282);
    // tips are untouched
    assert_eq!(form.wheel().outer_radius(), 7.53218);
    assert_eq!(form.pinion().outer_radius(), 1.18625);
}

#[test]
fn nominal_clearance() {
    let spec = GearSpec::try_new(0.13, 17, 112).unwrap();
    let options = GearFormOptions::default().with_clearance(DedendumClearance::Nominal);
    let form = GearForm::try_new(&spec, Some(options)).unwrap();
    assert_eq!(form.wheel().dedendum(), 0.2042);
    assert_eq!(form.wheel().inner_radius(), 7.0758);
    assert_eq!(form.pinion().dedendum(), 0.30418);
    assert_eq!(form.pinion().inner_radius(), 0.80082);
}

#[test]
fn negative_slop_is_rejected() {
    let spec = GearSpec::try_new(0.13, 17, 112).unwrap();
    let options =
        GearFormOptions::default().with_pinion_clearance(DedendumClearance::Slop(-0.01));
    let err = GearForm::try_new(&spec, Some(options)).unwrap_err();
    assert!(matches!(gear_error(&err), GearError::InvalidGearSpec(_)));
}

#[test]
fn leaf_profile_boundaries() {
    assert_eq!(LeafProfile::from_tooth_count(1), LeafProfile::HighOgival);
    assert_eq!(LeafProfile::from_tooth_count(7), LeafProfile::HighOgival);
    assert_eq!(LeafProfile::from_tooth_count(8), LeafProfile::MediumOgival);
    assert_eq!(LeafProfile::from_tooth_count(9), LeafProfile::MediumOgival);
    assert_eq!(LeafProfile::from_tooth_count(10), LeafProfile::RoundTopNarrow);
    assert_eq!(LeafProfile::from_tooth_count(11), LeafProfile::RoundTopWide);
}

#[test]
fn addendum_factor_is_the_only_raw_value() {
    let form = reference_form();
    assert_ne!(form.addendum_factor(), round5(form.addendum_factor()));
    assert_eq!(form.flank_factor(), round5(0.95 * form.addendum_factor()));
}
