use cycloid::prelude::*;

#[test]
fn test_form_serialization() {
    let form: GearForm<f64> = compute_form(0.13, 17, 112).unwrap();
    let json = serde_json::to_string_pretty(&form).unwrap();
    let restored: GearForm<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, form);
    assert_eq!(restored.pinion().leaf_profile(), LeafProfile::RoundTopWide);
}

#[test]
fn test_profile_serialization() {
    let form: GearForm<f64> = compute_form(0.13, 17, 112).unwrap();
    let pinion = form.pinion_profile(None).unwrap();
    let json = serde_json::to_string(&pinion).unwrap();
    let restored: GearProfile<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.tooth_count(), 17);
    assert_eq!(restored.proto_tooth(), pinion.proto_tooth());
    assert_eq!(restored.placement(), pinion.placement());
}

#[test]
fn test_spec_deserialization_is_validated() {
    let spec: GearSpec<f64> =
        serde_json::from_str(r#"{"module":0.13,"pinion_teeth":17,"wheel_teeth":112}"#).unwrap();
    assert_eq!(spec, GearSpec::try_new(0.13, 17, 112).unwrap());

    let invalid = [
        r#"{"module":-0.13,"pinion_teeth":17,"wheel_teeth":112}"#,
        r#"{"module":0.13,"pinion_teeth":17,"wheel_teeth":3}"#,
        r#"{"module":0.13,"pinion_teeth":0,"wheel_teeth":112}"#,
    ];
    for json in invalid {
        let err = serde_json::from_str::<GearSpec<f64>>(json).unwrap_err();
        assert!(err.to_string().contains("invalid gear spec"), "{}", err);
    }

    // a form carrying a bad spec is rejected as well
    let form: GearForm<f64> = compute_form(0.13, 17, 112).unwrap();
    let json = serde_json::to_string(&form)
        .unwrap()
        .replace(r#""module":0.13"#, r#""module":-0.13"#);
    assert!(serde_json::from_str::<GearForm<f64>>(&json).is_err());
}
