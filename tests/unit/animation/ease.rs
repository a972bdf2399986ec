use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::Smooth,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
];

#[test]
fn endpoints_are_exact() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::Linear.apply(-1.0), 0.0);
    assert_eq!(Ease::Linear.apply(2.0), 1.0);
}

#[test]
fn smooth_is_symmetric_and_monotonic() {
    assert!((Ease::Smooth.apply(0.5) - 0.5).abs() < 1e-12);
    let mut prev = 0.0;
    for i in 1..=20 {
        let v = Ease::Smooth.apply(f64::from(i) / 20.0);
        assert!(v >= prev);
        prev = v;
    }
    let a = Ease::Smooth.apply(0.2);
    let b = Ease::Smooth.apply(0.8);
    assert!((a + b - 1.0).abs() < 1e-12);
}

#[test]
fn serde_uses_snake_case_and_defaults_to_smooth() {
    assert_eq!(serde_json::to_string(&Ease::InOutQuad).unwrap(), "\"in_out_quad\"");
    assert_eq!(Ease::default(), Ease::Smooth);
}
