use approx::assert_relative_eq;
use cycloid::prelude::*;
use nalgebra::Point2;

const TOLERANCE: f64 = 1e-9;

#[test]
fn reference_pair() {
    let form: GearForm<f64> = compute_form(0.13, 17, 112).unwrap();
    assert_eq!(form.gear_ratio(), 6.58824);
    assert_eq!(form.center_distance(), 8.385);

    let wheel = form.wheel_profile(None).unwrap();
    let pinion = form.pinion_profile(None).unwrap();

    // teeth of both gears reach their outer circles
    for (tooth, _) in wheel.placed_teeth() {
        assert_relative_eq!(
            (tooth.apex() - wheel.center()).norm(),
            wheel.outer_radius(),
            epsilon = TOLERANCE
        );
        assert!(tooth.is_closed(TOLERANCE));
    }
    for (tooth, _) in pinion.placed_teeth() {
        assert_relative_eq!(
            (tooth.apex() - pinion.center()).norm(),
            pinion.outer_radius(),
            epsilon = TOLERANCE
        );
        assert!(tooth.is_closed(TOLERANCE));
    }

    // pitch circles touch at the center distance
    let pitch_sum = form.wheel().pitch_radius() + form.pinion().pitch_radius();
    assert_relative_eq!(
        (pinion.center() - wheel.center()).norm(),
        pitch_sum,
        epsilon = 1e-5
    );
}

#[test]
fn single_precision_pair() {
    let form: GearForm<f32> = compute_form(0.13_f32, 17, 112).unwrap();
    assert_relative_eq!(form.gear_ratio(), 6.58824, epsilon = 1e-4);
    assert_relative_eq!(form.wheel().outer_radius(), 7.53218, epsilon = 1e-4);

    let pinion = form.pinion_profile(None).unwrap();
    assert_eq!(pinion.teeth().len(), 17);
    assert_relative_eq!(pinion.center(), Point2::new(8.385, 0.0), epsilon = 1e-4);
}

#[test]
fn solver_options_flow_through_the_form() {
    let spec = GearSpec::try_new(0.13, 17, 112).unwrap();
    let options = GearFormOptions::default()
        .with_solver(AddendumFactorSolverOptions::default().with_tolerance(1e-9));
    let form = GearForm::try_new(&spec, Some(options)).unwrap();
    assert_relative_eq!(form.addendum_factor(), 2.0419809666459763, epsilon = 1e-5);

    let options = GearFormOptions::default()
        .with_solver(AddendumFactorSolverOptions::default().with_max_iters(1));
    let err = GearForm::<f64>::try_new(&spec, Some(options)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<GearError>(),
        Some(GearError::NumericConvergence { .. })
    ));
}

#[test]
fn invalid_pairs_are_rejected() {
    for (module, pinion, wheel) in [(0.0, 17, 112), (0.13, 0, 112), (0.13, 112, 17)] {
        let err = compute_form::<f64, i32>(module, pinion, wheel).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GearError>(),
            Some(GearError::InvalidGearSpec(_))
        ));
    }
}
