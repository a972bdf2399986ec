use super::*;

fn frame() -> Rect {
    Rect::new(-7.0, -4.0, 7.0, 4.0)
}

#[test]
fn next_to_places_subject_beside_anchor() {
    let anchor = Rect::new(-1.0, -1.0, 1.0, 1.0);
    let subject = Rect::new(10.0, 10.0, 12.0, 11.0);
    assert_eq!(
        next_to(anchor, subject, Direction::Up, 0.25),
        Point::new(0.0, 1.75)
    );
    assert_eq!(
        next_to(anchor, subject, Direction::Down, 0.25),
        Point::new(0.0, -1.75)
    );
    assert_eq!(
        next_to(anchor, subject, Direction::Right, 0.5),
        Point::new(2.5, 0.0)
    );
    assert_eq!(
        next_to(anchor, subject, Direction::Left, 0.5),
        Point::new(-2.5, 0.0)
    );
}

#[test]
fn to_edge_keeps_other_coordinate() {
    let subject = Rect::new(1.0, 0.0, 3.0, 1.0);
    assert_eq!(
        to_edge(frame(), subject, Direction::Up, DEFAULT_EDGE_BUFF),
        Point::new(2.0, 3.0)
    );
    assert_eq!(
        to_edge(frame(), subject, Direction::Left, DEFAULT_EDGE_BUFF),
        Point::new(-5.5, 0.5)
    );
}

#[test]
fn to_corner_combines_both_edges() {
    let subject = Rect::new(0.0, 0.0, 2.0, 1.0);
    assert_eq!(
        to_corner(frame(), subject, Corner::UpperLeft, 1.0),
        Point::new(-5.0, 2.5)
    );
    assert_eq!(
        to_corner(frame(), subject, Corner::LowerRight, 1.0),
        Point::new(5.0, -2.5)
    );
}

#[test]
fn ratio_rejects_zero_denominator() {
    assert_eq!(ratio(1.0, 4.0).unwrap(), 0.25);
    assert!(matches!(ratio(1.0, 0.0), Err(AlephError::Layout(_))));
    assert!(ratio(f64::NAN, 1.0).is_err());
}
