use super::*;

fn unit_items(n: usize) -> Vec<Size> {
    vec![Size::new(1.0, 1.0); n]
}

fn assert_close(a: Point, b: Point) {
    assert!((a - b).hypot() < 1e-12, "{a:?} != {b:?}");
}

#[test]
fn empty_input_yields_empty_layout() {
    assert!(arrange(&[], Arrangement::Row, 0.3).unwrap().is_empty());
    assert!(
        arrange_centered(&[], Arrangement::Column, 0.3, Point::ORIGIN)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn row_uses_uniform_spacing_in_input_order() {
    let corners = arrange(&unit_items(3), Arrangement::Row, 0.3).unwrap();
    let xs: Vec<f64> = corners.iter().map(|p| p.x).collect();
    assert_eq!(xs.len(), 3);
    for (x, expected) in xs.iter().zip([0.0, 1.3, 2.6]) {
        assert!((x - expected).abs() < 1e-12, "{xs:?}");
    }
    assert!(corners.iter().all(|p| p.y == 0.0));
}

#[test]
fn row_aligns_shorter_items_on_cross_axis() {
    let sizes = [Size::new(1.0, 2.0), Size::new(1.0, 1.0)];
    let center = arrange(&sizes, Arrangement::Row, 0.0).unwrap();
    assert_close(center[1], Point::new(1.0, -0.5));
    let top = arrange_aligned(&sizes, Arrangement::Row, 0.0, Align::Start).unwrap();
    assert_close(top[1], Point::new(1.0, 0.0));
    let bottom = arrange_aligned(&sizes, Arrangement::Row, 0.0, Align::End).unwrap();
    assert_close(bottom[1], Point::new(1.0, -1.0));
}

#[test]
fn column_goes_downwards() {
    let corners = arrange(&unit_items(3), Arrangement::Column, 0.5).unwrap();
    assert_close(corners[0], Point::new(0.0, 0.0));
    assert_close(corners[1], Point::new(0.0, -1.5));
    assert_close(corners[2], Point::new(0.0, -3.0));
}

#[test]
fn grid_is_row_major() {
    let corners = arrange(&unit_items(5), Arrangement::Grid { columns: 2 }, 0.0).unwrap();
    assert_close(corners[0], Point::new(0.0, 0.0));
    assert_close(corners[1], Point::new(1.0, 0.0));
    assert_close(corners[2], Point::new(0.0, -1.0));
    assert_close(corners[4], Point::new(0.0, -2.0));
}

#[test]
fn centered_row_is_symmetric_about_center() {
    let centers = arrange_centered(
        &unit_items(3),
        Arrangement::Row,
        0.5,
        Point::new(0.0, 2.0),
    )
    .unwrap();
    assert_close(centers[0], Point::new(-1.5, 2.0));
    assert_close(centers[1], Point::new(0.0, 2.0));
    assert_close(centers[2], Point::new(1.5, 2.0));
}

#[test]
fn invalid_inputs_are_layout_errors() {
    assert!(matches!(
        arrange(&unit_items(2), Arrangement::Row, -0.1),
        Err(AlephError::Layout(_))
    ));
    assert!(arrange(&unit_items(2), Arrangement::Row, f64::NAN).is_err());
    assert!(arrange(&unit_items(2), Arrangement::Grid { columns: 0 }, 0.0).is_err());
    assert!(arrange(&[Size::new(-1.0, 1.0)], Arrangement::Row, 0.0).is_err());
}
