use crate::{
    animation::lerp::Lerp,
    foundation::core::{Affine, Color, Point, Rect, Size, Vec2},
    foundation::error::{AlephError, AlephResult},
    layout::place::{self, Corner, Direction},
};

/// Scene units per font-size point; size 48 text is half a unit tall.
const TEXT_HEIGHT_PER_PT: f64 = 1.0 / 96.0;
/// Average glyph advance as a fraction of the text height.
const TEXT_ADVANCE_RATIO: f64 = 0.55;

pub const DEFAULT_DOT_RADIUS: f64 = 0.08;
pub const DEFAULT_STROKE_WIDTH: f64 = 4.0;
pub const DEFAULT_TIP_LENGTH: f64 = 0.35;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Paint attributes shared by every primitive.
pub struct Style {
    /// Outline color.
    pub stroke: Color,
    /// Outline width in renderer points.
    pub stroke_width: f64,
    /// Interior color.
    pub fill: Color,
    /// Interior opacity in `[0, 1]`.
    pub fill_opacity: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: Color::WHITE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            fill: Color::WHITE,
            fill_opacity: 0.0,
        }
    }
}

impl Style {
    /// Solid interior, no outline (dots and text).
    pub fn solid(color: Color) -> Self {
        Self {
            stroke: color,
            stroke_width: 0.0,
            fill: color,
            fill_opacity: 1.0,
        }
    }
}

impl Lerp for Style {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            stroke: Color::lerp(&a.stroke, &b.stroke, t),
            stroke_width: <f64 as Lerp>::lerp(&a.stroke_width, &b.stroke_width, t),
            fill: Color::lerp(&a.fill, &b.fill, t),
            fill_opacity: <f64 as Lerp>::lerp(&a.fill_opacity, &b.fill_opacity, t),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Geometry of a primitive, in y-up scene units.
pub enum Shape {
    /// Small filled disc marking a point.
    Dot {
        /// Disc center.
        center: Point,
        /// Disc radius.
        radius: f64,
    },
    /// Straight segment.
    Line {
        /// Segment start.
        from: Point,
        /// Segment end.
        to: Point,
    },
    /// Segment with an arrow head at `to`.
    Arrow {
        /// Tail.
        from: Point,
        /// Tip.
        to: Point,
        /// Arrow head length.
        tip_length: f64,
    },
    /// Circle outline.
    Circle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f64,
    },
    /// Axis-aligned rectangle.
    Rect {
        /// Rectangle center.
        center: Point,
        /// Horizontal extent.
        width: f64,
        /// Vertical extent.
        height: f64,
    },
    /// Closed polygon.
    Polygon {
        /// Vertices in drawing order.
        vertices: Vec<Point>,
    },
    /// A run of text, typeset by the renderer.
    Text {
        /// Plain text or TeX source.
        content: String,
        /// Center of the text box.
        center: Point,
        /// Font size in points.
        font_size: f64,
        /// `true` when `content` is TeX math.
        math: bool,
    },
    /// Ordered group moved and styled as one.
    Group {
        /// Members in drawing order.
        children: Vec<Primitive>,
    },
}

/// Immutable geometric or text drawing object.
///
/// Every repositioning or restyling method returns a new value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Primitive {
    shape: Shape,
    style: Style,
}

impl Primitive {
    pub fn new(shape: Shape, style: Style) -> Self {
        Self { shape, style }
    }

    pub fn dot(center: Point) -> Self {
        Self::new(
            Shape::Dot {
                center,
                radius: DEFAULT_DOT_RADIUS,
            },
            Style::solid(Color::WHITE),
        )
    }

    pub fn line(from: Point, to: Point) -> Self {
        Self::new(Shape::Line { from, to }, Style::default())
    }

    pub fn arrow(from: Point, to: Point) -> Self {
        Self::new(
            Shape::Arrow {
                from,
                to,
                tip_length: DEFAULT_TIP_LENGTH,
            },
            Style::default(),
        )
    }

    pub fn circle(center: Point, radius: f64) -> Self {
        Self::new(Shape::Circle { center, radius }, Style::default())
    }

    pub fn rect(center: Point, width: f64, height: f64) -> Self {
        Self::new(
            Shape::Rect {
                center,
                width,
                height,
            },
            Style::default(),
        )
    }

    pub fn square(center: Point, side: f64) -> Self {
        Self::rect(center, side, side)
    }

    pub fn polygon(vertices: Vec<Point>) -> Self {
        Self::new(Shape::Polygon { vertices }, Style::default())
    }

    /// Plain text centered on the origin.
    pub fn text(content: impl Into<String>, font_size: f64) -> Self {
        Self::new(
            Shape::Text {
                content: content.into(),
                center: Point::ORIGIN,
                font_size,
                math: false,
            },
            Style::solid(Color::WHITE),
        )
    }

    /// TeX math centered on the origin.
    pub fn math(tex: impl Into<String>, font_size: f64) -> Self {
        Self::new(
            Shape::Text {
                content: tex.into(),
                center: Point::ORIGIN,
                font_size,
                math: true,
            },
            Style::solid(Color::WHITE),
        )
    }

    pub fn group(children: Vec<Primitive>) -> Self {
        Self::new(Shape::Group { children }, Style::default())
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Short name of the shape kind, e.g. `"circle"`.
    pub fn kind(&self) -> &'static str {
        match &self.shape {
            Shape::Dot { .. } => "dot",
            Shape::Line { .. } => "line",
            Shape::Arrow { .. } => "arrow",
            Shape::Circle { .. } => "circle",
            Shape::Rect { .. } => "rect",
            Shape::Polygon { .. } => "polygon",
            Shape::Text { .. } => "text",
            Shape::Group { .. } => "group",
        }
    }

    /// Children of a group, or an empty slice for other shapes.
    pub fn children(&self) -> &[Primitive] {
        match &self.shape {
            Shape::Group { children } => children,
            _ => &[],
        }
    }

    /// Replace the style; groups restyle their members too.
    pub fn with_style(&self, style: Style) -> Self {
        let shape = match &self.shape {
            Shape::Group { children } => Shape::Group {
                children: children.iter().map(|c| c.with_style(style)).collect(),
            },
            other => other.clone(),
        };
        Self { shape, style }
    }

    fn restyled(&self, f: &dyn Fn(Style) -> Style) -> Self {
        let shape = match &self.shape {
            Shape::Group { children } => Shape::Group {
                children: children.iter().map(|c| c.restyled(f)).collect(),
            },
            other => other.clone(),
        };
        Self {
            shape,
            style: f(self.style),
        }
    }

    /// Set both stroke and fill color, keeping widths and opacity.
    pub fn with_color(&self, color: Color) -> Self {
        self.restyled(&|s| Style {
            stroke: color,
            fill: color,
            ..s
        })
    }

    pub fn with_stroke(&self, color: Color, width: f64) -> Self {
        self.restyled(&|s| Style {
            stroke: color,
            stroke_width: width,
            ..s
        })
    }

    pub fn with_fill(&self, color: Color, opacity: f64) -> Self {
        self.restyled(&|s| Style {
            fill: color,
            fill_opacity: opacity,
            ..s
        })
    }

    /// Change the radius of dots and circles; other shapes are returned unchanged.
    pub fn with_radius(&self, radius: f64) -> Self {
        let shape = match &self.shape {
            Shape::Dot { center, .. } => Shape::Dot {
                center: *center,
                radius,
            },
            Shape::Circle { center, .. } => Shape::Circle {
                center: *center,
                radius,
            },
            other => other.clone(),
        };
        Self {
            shape,
            style: self.style,
        }
    }

    pub fn bounding_box(&self) -> Rect {
        match &self.shape {
            Shape::Dot { center, radius } | Shape::Circle { center, radius } => {
                Rect::from_center_size(*center, Size::new(2.0 * radius, 2.0 * radius))
            }
            Shape::Line { from, to } | Shape::Arrow { from, to, .. } => Rect::from_points(*from, *to),
            Shape::Rect {
                center,
                width,
                height,
            } => Rect::from_center_size(*center, Size::new(*width, *height)),
            Shape::Polygon { vertices } => union_all(
                vertices
                    .iter()
                    .map(|v| Rect::from_points(*v, *v)),
            ),
            Shape::Text {
                content,
                center,
                font_size,
                math,
            } => {
                let h = font_size * TEXT_HEIGHT_PER_PT;
                let w = visible_len(content, *math) as f64 * h * TEXT_ADVANCE_RATIO;
                Rect::from_center_size(*center, Size::new(w, h))
            }
            Shape::Group { children } => union_all(children.iter().map(Primitive::bounding_box)),
        }
    }

    pub fn size(&self) -> Size {
        self.bounding_box().size()
    }

    pub fn center(&self) -> Point {
        self.bounding_box().center()
    }

    /// Point that motions and anchor moves track: the center of round shapes, rectangles and
    /// text, the first member of a group, and the bounding-box center otherwise.
    pub fn anchor(&self) -> Point {
        match &self.shape {
            Shape::Dot { center, .. }
            | Shape::Circle { center, .. }
            | Shape::Rect { center, .. }
            | Shape::Text { center, .. } => *center,
            Shape::Group { children } => children
                .first()
                .map_or_else(|| self.center(), Primitive::anchor),
            _ => self.center(),
        }
    }

    fn mapped(&self, f: &dyn Fn(Point) -> Point, length_scale: f64) -> Self {
        let shape = match &self.shape {
            Shape::Dot { center, radius } => Shape::Dot {
                center: f(*center),
                radius: radius * length_scale,
            },
            Shape::Line { from, to } => Shape::Line {
                from: f(*from),
                to: f(*to),
            },
            Shape::Arrow {
                from,
                to,
                tip_length,
            } => Shape::Arrow {
                from: f(*from),
                to: f(*to),
                tip_length: tip_length * length_scale,
            },
            Shape::Circle { center, radius } => Shape::Circle {
                center: f(*center),
                radius: radius * length_scale,
            },
            Shape::Rect {
                center,
                width,
                height,
            } => Shape::Rect {
                center: f(*center),
                width: width * length_scale,
                height: height * length_scale,
            },
            Shape::Polygon { vertices } => Shape::Polygon {
                vertices: vertices.iter().map(|v| f(*v)).collect(),
            },
            Shape::Text {
                content,
                center,
                font_size,
                math,
            } => Shape::Text {
                content: content.clone(),
                center: f(*center),
                font_size: font_size * length_scale,
                math: *math,
            },
            Shape::Group { children } => Shape::Group {
                children: children.iter().map(|c| c.mapped(f, length_scale)).collect(),
            },
        };
        Self {
            shape,
            style: self.style,
        }
    }

    pub fn translated(&self, delta: Vec2) -> Self {
        self.mapped(&|p| p + delta, 1.0)
    }

    /// Translate so the bounding-box center lands on `target`.
    pub fn moved_to(&self, target: Point) -> Self {
        self.translated(target - self.center())
    }

    /// Translate so [`Primitive::anchor`] lands on `target`.
    pub fn anchor_moved_to(&self, target: Point) -> Self {
        self.translated(target - self.anchor())
    }

    /// Scale about the bounding-box center.
    pub fn scaled(&self, factor: f64) -> Self {
        let c = self.center();
        self.mapped(&|p| c + (p - c) * factor, factor)
    }

    /// Rotate every defining point about `pivot`.
    ///
    /// Rectangles and text stay axis-aligned; only their centers move.
    pub fn rotated_about(&self, pivot: Point, angle_rad: f64) -> Self {
        let rot = Affine::rotate_about(angle_rad, pivot);
        self.mapped(&|p| rot * p, 1.0)
    }

    pub fn next_to(&self, anchor: &Primitive, direction: Direction, buff: f64) -> Self {
        self.moved_to(place::next_to(
            anchor.bounding_box(),
            self.bounding_box(),
            direction,
            buff,
        ))
    }

    pub fn to_edge(&self, frame: Rect, direction: Direction, buff: f64) -> Self {
        self.moved_to(place::to_edge(frame, self.bounding_box(), direction, buff))
    }

    pub fn to_corner(&self, frame: Rect, corner: Corner, buff: f64) -> Self {
        self.moved_to(place::to_corner(frame, self.bounding_box(), corner, buff))
    }

    /// Check that every numeric parameter is finite and in range.
    pub fn validate(&self) -> AlephResult<()> {
        let s = &self.style;
        if !s.stroke_width.is_finite() || s.stroke_width < 0.0 {
            return Err(AlephError::layout("stroke_width must be finite and >= 0"));
        }
        if !(0.0..=1.0).contains(&s.fill_opacity) {
            return Err(AlephError::layout("fill_opacity must be in [0, 1]"));
        }

        let finite = |p: &Point| p.x.is_finite() && p.y.is_finite();
        let non_negative = |v: f64| v.is_finite() && v >= 0.0;
        let ok = match &self.shape {
            Shape::Dot { center, radius } | Shape::Circle { center, radius } => {
                finite(center) && non_negative(*radius)
            }
            Shape::Line { from, to } => finite(from) && finite(to),
            Shape::Arrow {
                from,
                to,
                tip_length,
            } => finite(from) && finite(to) && non_negative(*tip_length),
            Shape::Rect {
                center,
                width,
                height,
            } => finite(center) && non_negative(*width) && non_negative(*height),
            Shape::Polygon { vertices } => {
                if vertices.len() < 3 {
                    return Err(AlephError::layout("polygon needs at least 3 vertices"));
                }
                vertices.iter().all(finite)
            }
            Shape::Text {
                center, font_size, ..
            } => finite(center) && font_size.is_finite() && *font_size > 0.0,
            Shape::Group { children } => {
                for child in children {
                    child.validate()?;
                }
                true
            }
        };
        if !ok {
            return Err(AlephError::layout(format!(
                "{} has non-finite or negative geometry",
                self.kind()
            )));
        }
        Ok(())
    }
}

impl Lerp for Primitive {
    /// Morph between two primitives of the same kind and arity; otherwise swap at the midpoint.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t <= 0.0 {
            return a.clone();
        }
        if t >= 1.0 {
            return b.clone();
        }
        match lerp_shape(&a.shape, &b.shape, t) {
            Some(shape) => Self {
                shape,
                style: Style::lerp(&a.style, &b.style, t),
            },
            None if t < 0.5 => a.clone(),
            None => b.clone(),
        }
    }
}

fn lerp_shape(a: &Shape, b: &Shape, t: f64) -> Option<Shape> {
    let p = |x: &Point, y: &Point| <Point as Lerp>::lerp(x, y, t);
    let f = |x: &f64, y: &f64| <f64 as Lerp>::lerp(x, y, t);
    let shape = match (a, b) {
        (
            Shape::Dot {
                center: c0,
                radius: r0,
            },
            Shape::Dot {
                center: c1,
                radius: r1,
            },
        ) => Shape::Dot {
            center: p(c0, c1),
            radius: f(r0, r1),
        },
        (Shape::Line { from: f0, to: t0 }, Shape::Line { from: f1, to: t1 }) => Shape::Line {
            from: p(f0, f1),
            to: p(t0, t1),
        },
        (
            Shape::Arrow {
                from: f0,
                to: t0,
                tip_length: l0,
            },
            Shape::Arrow {
                from: f1,
                to: t1,
                tip_length: l1,
            },
        ) => Shape::Arrow {
            from: p(f0, f1),
            to: p(t0, t1),
            tip_length: f(l0, l1),
        },
        (
            Shape::Circle {
                center: c0,
                radius: r0,
            },
            Shape::Circle {
                center: c1,
                radius: r1,
            },
        ) => Shape::Circle {
            center: p(c0, c1),
            radius: f(r0, r1),
        },
        (
            Shape::Rect {
                center: c0,
                width: w0,
                height: h0,
            },
            Shape::Rect {
                center: c1,
                width: w1,
                height: h1,
            },
        ) => Shape::Rect {
            center: p(c0, c1),
            width: f(w0, w1),
            height: f(h0, h1),
        },
        (Shape::Polygon { vertices: v0 }, Shape::Polygon { vertices: v1 })
            if v0.len() == v1.len() =>
        {
            Shape::Polygon {
                vertices: v0.iter().zip(v1).map(|(x, y)| p(x, y)).collect(),
            }
        }
        (
            Shape::Text {
                content: s0,
                center: c0,
                font_size: z0,
                math: m0,
            },
            Shape::Text {
                content: s1,
                center: c1,
                font_size: z1,
                math: m1,
            },
        ) if s0 == s1 && m0 == m1 => Shape::Text {
            content: s0.clone(),
            center: p(c0, c1),
            font_size: f(z0, z1),
            math: *m0,
        },
        (Shape::Group { children: g0 }, Shape::Group { children: g1 }) if g0.len() == g1.len() => {
            Shape::Group {
                children: g0
                    .iter()
                    .zip(g1)
                    .map(|(x, y)| Primitive::lerp(x, y, t))
                    .collect(),
            }
        }
        _ => return None,
    };
    Some(shape)
}

fn union_all(mut rects: impl Iterator<Item = Rect>) -> Rect {
    let Some(first) = rects.next() else {
        return Rect::ZERO;
    };
    rects.fold(first, |acc, r| acc.union(r))
}

/// Approximate count of rendered glyphs; TeX control words and grouping are skipped.
fn visible_len(content: &str, math: bool) -> usize {
    if !math {
        return content.chars().count();
    }
    let mut count = 0;
    let mut in_command = false;
    for ch in content.chars() {
        match ch {
            '\\' => in_command = true,
            c if in_command && c.is_ascii_alphabetic() => {}
            '{' | '}' | '^' | '_' | ' ' => in_command = false,
            _ => {
                in_command = false;
                count += 1;
            }
        }
    }
    count.max(1)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/primitive.rs"]
mod tests;
