use super::*;

fn fault(step: &Step) -> LifecycleFault {
    let err = step.validate().unwrap_err();
    err.as_authoring().expect("authoring error").fault.clone()
}

#[test]
fn default_step_spans_one_second() {
    let s = Step::create("A", Primitive::dot(Point::ZERO));
    assert_eq!(s.run_time, DEFAULT_RUN_TIME);
    assert_eq!(s.wait, 0.0);
    assert_eq!(s.ease, Ease::Smooth);
    assert_eq!(s.span(), 1.0);
    assert!(s.validate().is_ok());
}

#[test]
fn pause_has_no_ops_and_only_waits() {
    let s = Step::pause(2.5);
    assert!(s.ops.is_empty());
    assert_eq!(s.run_time, 0.0);
    assert_eq!(s.span(), 2.5);
}

#[test]
fn rejects_negative_or_nan_timing() {
    let s = Step::pause(1.0).with_run_time(-0.1);
    assert_eq!(fault(&s), LifecycleFault::InvalidTiming { field: "run_time" });
    let s = Step::pause(f64::NAN);
    assert_eq!(fault(&s), LifecycleFault::InvalidTiming { field: "wait" });
    let s = Step::pause(1.0).with_lag_ratio(1.5);
    assert_eq!(fault(&s), LifecycleFault::InvalidTiming { field: "lag_ratio" });
}

#[test]
fn rejects_id_repeated_within_step() {
    let s = Step::new(vec![
        Op::Create {
            id: "A".into(),
            primitive: Primitive::dot(Point::ZERO),
            reveal: Reveal::Instant,
        },
        Op::Remove {
            id: "A".into(),
            conceal: Conceal::Fade,
        },
    ]);
    let err = s.validate().unwrap_err();
    let a = err.as_authoring().unwrap();
    assert_eq!(a.fault, LifecycleFault::RepeatedInStep);
    assert_eq!(a.id.as_deref(), Some("A"));
}

#[test]
fn rejects_invalid_geometry_as_layout_error() {
    let s = Step::create("A", Primitive::polygon(vec![Point::ZERO, Point::new(1.0, 0.0)]));
    assert!(matches!(s.validate(), Err(AlephError::Layout(_))));
}

#[test]
fn lag_windows_are_staggered_and_end_at_one() {
    let ops = (0..3)
        .map(|i| Op::Create {
            id: EntryId::new(format!("d{i}")),
            primitive: Primitive::dot(Point::ZERO),
            reveal: Reveal::Fade,
        })
        .collect();
    let s = Step::new(ops).with_lag_ratio(0.5);
    // d = 1 / (1 + 2 * 0.5) = 0.5
    assert_eq!(s.op_window(0), (0.0, 0.5));
    assert_eq!(s.op_window(1), (0.25, 0.75));
    assert_eq!(s.op_window(2), (0.5, 1.0));

    let s = s.with_lag_ratio(0.0);
    assert_eq!(s.op_window(2), (0.0, 1.0));
}

#[test]
fn orbit_moves_anchor_around_center() {
    let m = Motion::Orbit {
        center: Point::ZERO,
        radius: 2.0,
        angular_velocity: std::f64::consts::FRAC_PI_2,
        start_angle: 0.0,
    };
    let dot = Primitive::dot(Point::new(2.0, 0.0));
    let moved = m.apply(&dot, 1.0);
    assert!((moved.anchor().x - 0.0).abs() < 1e-9);
    assert!((moved.anchor().y - 2.0).abs() < 1e-9);
    assert!(m.validate().is_ok());
}

#[test]
fn drift_translates_by_velocity_times_elapsed() {
    let m = Motion::Drift {
        velocity: Vec2::new(1.0, -0.5),
    };
    let moved = m.apply(&Primitive::dot(Point::ZERO), 2.0);
    assert_eq!(moved.anchor(), Point::new(2.0, -1.0));
    assert_eq!(m.orbit_angle(2.0), None);
}

#[test]
fn motion_rejects_non_finite_parameters() {
    let m = Motion::Spin {
        about: Point::ZERO,
        angular_velocity: f64::INFINITY,
    };
    assert!(matches!(m.validate(), Err(AlephError::Layout(_))));
}

#[test]
fn ops_serialize_with_tag() {
    let op = Op::Remove {
        id: "A".into(),
        conceal: Conceal::Shrink,
    };
    let v = serde_json::to_value(&op).unwrap();
    assert_eq!(v["op"], "remove");
    assert_eq!(v["id"], "A");
    assert_eq!(v["conceal"], "shrink");
    assert_eq!(op.name(), "remove");
    assert_eq!(Op::Clear { conceal: Conceal::Fade }.id(), None);
}
