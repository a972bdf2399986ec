use crate::{
    foundation::core::{Point, Size, Vec2},
    foundation::error::{AlephError, AlephResult},
};

/// How a sequence of items is laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Arrangement {
    /// Left to right.
    Row,
    /// Top to bottom.
    Column,
    /// Row-major grid with a fixed column count; every cell is as large as the largest item.
    Grid { columns: u32 },
}

/// Cross-axis alignment of items smaller than their row, column or cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
}

/// Lay out `sizes` with uniform `spacing`.
///
/// Returns the top-left corner of each item relative to the group's top-left corner, in
/// input order. The frame is y-up, so items further down have smaller `y`.
pub fn arrange(sizes: &[Size], arrangement: Arrangement, spacing: f64) -> AlephResult<Vec<Point>> {
    arrange_aligned(sizes, arrangement, spacing, Align::Center)
}

pub fn arrange_aligned(
    sizes: &[Size],
    arrangement: Arrangement,
    spacing: f64,
    align: Align,
) -> AlephResult<Vec<Point>> {
    if !spacing.is_finite() || spacing < 0.0 {
        return Err(AlephError::layout("arrangement spacing must be finite and >= 0"));
    }
    if let Some(bad) = sizes.iter().position(|s| !valid_size(*s)) {
        return Err(AlephError::layout(format!(
            "item {bad} has a negative or non-finite size"
        )));
    }
    if let Arrangement::Grid { columns: 0 } = arrangement {
        return Err(AlephError::layout("grid arrangement needs at least one column"));
    }

    let mut corners = Vec::with_capacity(sizes.len());
    if sizes.is_empty() {
        return Ok(corners);
    }

    match arrangement {
        Arrangement::Row => {
            let row_h = sizes.iter().map(|s| s.height).fold(0.0, f64::max);
            let mut x = 0.0;
            for s in sizes {
                corners.push(Point::new(x, -align_offset(row_h, s.height, align)));
                x += s.width + spacing;
            }
        }
        Arrangement::Column => {
            let col_w = sizes.iter().map(|s| s.width).fold(0.0, f64::max);
            let mut y = 0.0;
            for s in sizes {
                corners.push(Point::new(align_offset(col_w, s.width, align), -y));
                y += s.height + spacing;
            }
        }
        Arrangement::Grid { columns } => {
            let cols = usize::try_from(columns).unwrap_or(usize::MAX);
            let cell_w = sizes.iter().map(|s| s.width).fold(0.0, f64::max);
            let cell_h = sizes.iter().map(|s| s.height).fold(0.0, f64::max);
            for (idx, s) in sizes.iter().enumerate() {
                let row = idx / cols;
                let col = idx % cols;
                let base_x = (col as f64) * (cell_w + spacing);
                let base_y = (row as f64) * (cell_h + spacing);
                corners.push(Point::new(
                    base_x + align_offset(cell_w, s.width, align),
                    -(base_y + align_offset(cell_h, s.height, align)),
                ));
            }
        }
    }
    Ok(corners)
}

/// Lay out `sizes` like [`arrange`] and return item centers, with the whole group centered on
/// `center`.
pub fn arrange_centered(
    sizes: &[Size],
    arrangement: Arrangement,
    spacing: f64,
    center: Point,
) -> AlephResult<Vec<Point>> {
    let corners = arrange(sizes, arrangement, spacing)?;
    let (total_w, total_h) = corners
        .iter()
        .zip(sizes)
        .fold((0.0f64, 0.0f64), |(w, h), (c, s)| {
            (w.max(c.x + s.width), h.max(-c.y + s.height))
        });
    let group_top_left = center + Vec2::new(-total_w / 2.0, total_h / 2.0);
    Ok(corners
        .iter()
        .zip(sizes)
        .map(|(c, s)| group_top_left + c.to_vec2() + Vec2::new(s.width / 2.0, -s.height / 2.0))
        .collect())
}

fn valid_size(s: Size) -> bool {
    s.width.is_finite() && s.height.is_finite() && s.width >= 0.0 && s.height >= 0.0
}

fn align_offset(container: f64, content: f64, align: Align) -> f64 {
    let rem = (container - content).max(0.0);
    match align {
        Align::Start => 0.0,
        Align::Center => rem * 0.5,
        Align::End => rem,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/arrange.rs"]
mod tests;
