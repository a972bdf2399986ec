use crate::{
    foundation::core::{Point, Vec2},
    foundation::error::{AlephError, AlephResult},
};

/// Map `value` from `[lo, hi]` onto `[0, length]`.
///
/// The mapping is affine and does not clamp: values outside `[lo, hi]` extrapolate.
pub fn map_value(value: f64, lo: f64, hi: f64, length: f64) -> AlephResult<f64> {
    if !(value.is_finite() && lo.is_finite() && hi.is_finite() && length.is_finite()) {
        return Err(AlephError::layout("axis mapping inputs must be finite"));
    }
    if lo == hi {
        return Err(AlephError::layout(format!(
            "axis range is empty (lo == hi == {lo})"
        )));
    }
    Ok((value - lo) / (hi - lo) * length)
}

/// A number line placed in the scene.
///
/// The axis is centered on `origin` and runs along `direction` (normalized on construction),
/// so `lo` sits at `origin - direction * length / 2`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Axis {
    pub lo: f64,
    pub hi: f64,
    pub length: f64,
    pub origin: Point,
    pub direction: Vec2,
}

impl Axis {
    /// Horizontal axis centered on the frame origin.
    pub fn horizontal(lo: f64, hi: f64, length: f64) -> AlephResult<Self> {
        Self::new(lo, hi, length, Point::ORIGIN, Vec2::new(1.0, 0.0))
    }

    pub fn new(lo: f64, hi: f64, length: f64, origin: Point, direction: Vec2) -> AlephResult<Self> {
        // Validates the range once so point mapping cannot fail later.
        map_value(lo, lo, hi, length)?;
        if length <= 0.0 {
            return Err(AlephError::layout("axis length must be > 0"));
        }
        let norm = direction.hypot();
        if !norm.is_finite() || norm == 0.0 {
            return Err(AlephError::layout("axis direction must be a non-zero vector"));
        }
        if !(origin.x.is_finite() && origin.y.is_finite()) {
            return Err(AlephError::layout("axis origin must be finite"));
        }
        Ok(Self {
            lo,
            hi,
            length,
            origin,
            direction: direction / norm,
        })
    }

    /// Return a copy moved by `delta`.
    pub fn shifted(self, delta: Vec2) -> Self {
        Self {
            origin: self.origin + delta,
            ..self
        }
    }

    pub fn start(&self) -> Point {
        self.origin - self.direction * (self.length / 2.0)
    }

    pub fn end(&self) -> Point {
        self.origin + self.direction * (self.length / 2.0)
    }

    pub fn number_to_point(&self, value: f64) -> AlephResult<Point> {
        let along = map_value(value, self.lo, self.hi, self.length)?;
        Ok(self.start() + self.direction * along)
    }

    /// Project `p` onto the axis and return the corresponding value.
    pub fn point_to_number(&self, p: Point) -> f64 {
        let along = (p - self.start()).dot(self.direction);
        self.lo + along / self.length * (self.hi - self.lo)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/axis.rs"]
mod tests;
