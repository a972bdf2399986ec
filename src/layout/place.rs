use crate::{
    foundation::core::{Point, Rect, Vec2},
    foundation::error::{AlephError, AlephResult},
};

/// Gap used by [`next_to`] when callers have no preference.
pub const DEFAULT_NEXT_TO_BUFF: f64 = 0.25;
/// Gap kept between an item and the frame edge.
pub const DEFAULT_EDGE_BUFF: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn unit(self) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, 1.0),
            Self::Down => Vec2::new(0.0, -1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Corner {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl Corner {
    fn directions(self) -> (Direction, Direction) {
        match self {
            Self::UpperLeft => (Direction::Up, Direction::Left),
            Self::UpperRight => (Direction::Up, Direction::Right),
            Self::LowerLeft => (Direction::Down, Direction::Left),
            Self::LowerRight => (Direction::Down, Direction::Right),
        }
    }
}

/// Center for `subject` placed beside `anchor` in `direction`, `buff` apart.
///
/// The subject stays centered on the anchor along the other axis.
pub fn next_to(anchor: Rect, subject: Rect, direction: Direction, buff: f64) -> Point {
    let c = anchor.center();
    let (w, h) = (subject.width(), subject.height());
    match direction {
        Direction::Up => Point::new(c.x, anchor.y1 + buff + h / 2.0),
        Direction::Down => Point::new(c.x, anchor.y0 - buff - h / 2.0),
        Direction::Left => Point::new(anchor.x0 - buff - w / 2.0, c.y),
        Direction::Right => Point::new(anchor.x1 + buff + w / 2.0, c.y),
    }
}

/// Center for `subject` pushed against one edge of `frame`, keeping its other coordinate.
pub fn to_edge(frame: Rect, subject: Rect, direction: Direction, buff: f64) -> Point {
    let c = subject.center();
    let (w, h) = (subject.width(), subject.height());
    match direction {
        Direction::Up => Point::new(c.x, frame.y1 - buff - h / 2.0),
        Direction::Down => Point::new(c.x, frame.y0 + buff + h / 2.0),
        Direction::Left => Point::new(frame.x0 + buff + w / 2.0, c.y),
        Direction::Right => Point::new(frame.x1 - buff - w / 2.0, c.y),
    }
}

pub fn to_corner(frame: Rect, subject: Rect, corner: Corner, buff: f64) -> Point {
    let (vertical, horizontal) = corner.directions();
    let y = to_edge(frame, subject, vertical, buff).y;
    let x = to_edge(frame, subject, horizontal, buff).x;
    Point::new(x, y)
}

/// `num / den`, rejecting a zero or non-finite denominator.
pub fn ratio(num: f64, den: f64) -> AlephResult<f64> {
    if den == 0.0 || !den.is_finite() || !num.is_finite() {
        return Err(AlephError::layout(format!(
            "ratio {num} / {den} has no finite value"
        )));
    }
    Ok(num / den)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/place.rs"]
mod tests;
