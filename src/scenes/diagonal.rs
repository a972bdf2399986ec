use crate::{
    config::SceneConfig,
    foundation::core::{Color, Point, Vec2},
    foundation::error::AlephResult,
    layout::place::Direction,
    layout::random::Rng64,
    scene::primitive::Primitive,
    timeline::builder::SceneBuilder,
    timeline::director::Timeline,
};

const ROWS: usize = 10;
const COLS: usize = 10;

fn cell(row: usize, col: usize) -> Point {
    Point::new(-2.5 + col as f64 * 0.4, 2.0 - row as f64 * 0.5)
}

fn digits(bits: &[u8]) -> String {
    bits.iter().map(|b| char::from(b'0' + b)).collect()
}

fn highlight(
    color: Color,
    width: f64,
    opacity: f64,
    rows: impl Iterator<Item = usize>,
) -> Primitive {
    Primitive::group(
        rows.map(|i| {
            Primitive::square(cell(i, i), 0.3)
                .with_stroke(color, width)
                .with_fill(color, opacity)
        })
        .collect(),
    )
}

pub(super) fn build(cfg: &SceneConfig) -> AlephResult<Timeline> {
    let mut rng = Rng64::new(cfg.seed);
    let table: Vec<Vec<u8>> = (0..ROWS)
        .map(|_| (0..COLS).map(|_| u8::from(rng.next_bool())).collect())
        .collect();

    let mut s = SceneBuilder::new();

    let naturals = Primitive::group(
        (0..ROWS)
            .map(|i| {
                Primitive::text((i + 1).to_string(), 24.0)
                    .moved_to(Point::new(-4.0, 2.0 - i as f64 * 0.5))
            })
            .collect(),
    );
    s.play(|st| st.write("naturals", naturals));
    s.play(|st| {
        st.create(
            "mapping_arrow",
            Primitive::arrow(Point::new(-3.5, 0.0), Point::new(-2.8, 0.0)),
        )
    });

    for (i, row) in table.iter().enumerate() {
        let row_digits = Primitive::group(
            row.iter()
                .enumerate()
                .map(|(j, bit)| Primitive::text(bit.to_string(), 20.0).moved_to(cell(i, j)))
                .collect(),
        );
        s.play(|st| st.write(format!("row_{i}"), row_digits).run_time(0.1));
    }
    s.wait(2.0);

    let n = ROWS.min(COLS);
    let diagonal: Vec<u8> = (0..n).map(|i| table[i][i]).collect();
    let flipped: Vec<u8> = diagonal.iter().map(|b| 1 - b).collect();

    let boxes = highlight(Color::RED, 3.0, 0.2, 0..n);
    s.play(|st| st.create("diagonal_boxes", boxes.clone())).wait(2.0);

    let diagonal_text = Primitive::text(format!("Diagonal: {}...", digits(&diagonal)), 28.0)
        .with_color(Color::RED)
        .next_to(&boxes, Direction::Right, 0.5)
        .translated(Vec2::new(0.0, 1.5));
    let new_text = Primitive::text(format!("New number: {}...", digits(&flipped)), 28.0)
        .with_color(Color::BLUE)
        .next_to(&diagonal_text, Direction::Down, 0.3);
    s.play(|st| st.write("diagonal_text", diagonal_text)).wait(2.0);
    s.play(|st| st.write("new_number", new_text)).wait(2.0);

    // Every flipped digit differs from the diagonal, so every box turns blue.
    let differences = highlight(
        Color::BLUE,
        4.0,
        0.3,
        (0..n).filter(|&i| flipped[i] != table[i][i]),
    );
    s.play(|st| st.transform("diagonal_boxes", differences)).wait(1.0);

    s.build()
}
