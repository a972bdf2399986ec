use super::*;

#[test]
fn identity_mapping_on_matching_length() {
    for v in [0.0, 2.5, 7.0, 10.0] {
        assert_eq!(map_value(v, 0.0, 10.0, 10.0).unwrap(), v);
    }
}

#[test]
fn scaled_mapping_hits_expected_coordinate() {
    assert_eq!(map_value(5.0, 0.0, 10.0, 4.0).unwrap(), 2.0);
}

#[test]
fn values_outside_range_extrapolate() {
    assert_eq!(map_value(-5.0, 0.0, 10.0, 4.0).unwrap(), -2.0);
    assert_eq!(map_value(20.0, 0.0, 10.0, 4.0).unwrap(), 8.0);
}

#[test]
fn empty_range_and_non_finite_inputs_fail() {
    assert!(matches!(
        map_value(1.0, 3.0, 3.0, 4.0),
        Err(AlephError::Layout(_))
    ));
    assert!(map_value(f64::NAN, 0.0, 1.0, 4.0).is_err());
    assert!(map_value(1.0, 0.0, 1.0, f64::INFINITY).is_err());
}

#[test]
fn axis_is_centered_on_origin() {
    let axis = Axis::horizontal(0.0, 1.0, 10.0).unwrap();
    assert_eq!(axis.number_to_point(0.0).unwrap(), Point::new(-5.0, 0.0));
    assert_eq!(axis.number_to_point(0.5).unwrap(), Point::new(0.0, 0.0));
    assert_eq!(axis.number_to_point(1.0).unwrap(), Point::new(5.0, 0.0));
}

#[test]
fn shifted_axis_round_trips_points() {
    let axis = Axis::horizontal(0.0, 4.0, 8.0)
        .unwrap()
        .shifted(Vec2::new(0.0, -0.5));
    let p = axis.number_to_point(3.0).unwrap();
    assert_eq!(p, Point::new(2.0, -0.5));
    assert!((axis.point_to_number(p) - 3.0).abs() < 1e-12);
}

#[test]
fn direction_is_normalized() {
    let axis = Axis::new(0.0, 1.0, 2.0, Point::ORIGIN, Vec2::new(0.0, 3.0)).unwrap();
    assert_eq!(axis.direction, Vec2::new(0.0, 1.0));
    assert_eq!(axis.end(), Point::new(0.0, 1.0));
}

#[test]
fn degenerate_axis_is_rejected() {
    assert!(Axis::horizontal(1.0, 1.0, 4.0).is_err());
    assert!(Axis::horizontal(0.0, 1.0, 0.0).is_err());
    assert!(Axis::new(0.0, 1.0, 2.0, Point::ORIGIN, Vec2::ZERO).is_err());
}
