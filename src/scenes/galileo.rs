use crate::{
    config::SceneConfig,
    foundation::core::{Color, Point, Vec2},
    foundation::error::AlephResult,
    layout::axis::Axis,
    layout::place::Direction,
    scene::primitive::Primitive,
    timeline::builder::SceneBuilder,
    timeline::director::Timeline,
    timeline::step::Conceal,
};

const COLORS: [Color; 10] = [
    Color::RED,
    Color::BLUE,
    Color::GREEN,
    Color::YELLOW,
    Color::PURPLE,
    Color::ORANGE,
    Color::PINK,
    Color::TEAL,
    Color::MAROON,
    Color::GOLD,
];

fn axis_line(axis: &Axis) -> Primitive {
    Primitive::line(axis.start(), axis.end())
}

/// The two population discs and their labels for squares and naturals up to `limit`.
fn populations(
    line: &Primitive,
    limit: &str,
    squares_radius: f64,
    naturals_radius: f64,
    naturals_color: Color,
) -> [(&'static str, Primitive); 4] {
    let squares = Primitive::circle(Point::ORIGIN, squares_radius)
        .with_color(Color::YELLOW)
        .with_fill(Color::YELLOW, 0.5)
        .next_to(line, Direction::Down, 2.0)
        .translated(Vec2::new(-2.0, 0.0));
    let naturals = Primitive::circle(Point::ORIGIN, naturals_radius)
        .with_color(naturals_color)
        .with_fill(naturals_color, 0.5)
        .next_to(&squares, Direction::Right, 1.0);
    let squares_label = Primitive::math(format!("\\text{{Squares }}_{{\\le {limit}}}"), 22.0)
        .next_to(&squares, Direction::Up, 0.3);
    let naturals_label = Primitive::math(format!("\\text{{Naturals }}_{{\\le {limit}}}"), 22.0)
        .next_to(&naturals, Direction::Up, 0.3);
    [
        ("squares", squares),
        ("naturals", naturals),
        ("squares_label", squares_label),
        ("naturals_label", naturals_label),
    ]
}

pub(super) fn build(_cfg: &SceneConfig) -> AlephResult<Timeline> {
    let mut s = SceneBuilder::new();

    // Squares are sparse among the first hundred naturals.
    let hundred = Axis::new(0.0, 100.0, 10.0, Point::new(0.0, 2.0), Vec2::new(1.0, 0.0))?;
    let hundred_line = axis_line(&hundred);
    s.play(|st| st.create("naturals_100", hundred_line.clone()))
        .wait(1.0);

    for n in 1..=10u32 {
        let square = f64::from(n * n);
        let mark = Primitive::dot(hundred.number_to_point(square)?)
            .with_radius(0.06)
            .with_color(Color::YELLOW);
        let label = Primitive::text((n * n).to_string(), 14.0)
            .with_color(Color::YELLOW)
            .next_to(&mark, Direction::Down, 0.15);
        s.play(|st| {
            st.create(format!("square_{n}"), mark)
                .write(format!("square_label_{n}"), label)
                .run_time(0.2)
        })
        .wait(0.1);
    }
    s.wait(1.0);

    s.play(|mut st| {
        for (id, p) in populations(&hundred_line, "100", 0.3, 0.9, Color::WHITE) {
            st = st.create(id, p);
        }
        st
    })
    .wait(2.0);
    s.play(|mut st| {
        st = st.fade_out("naturals_100");
        for n in 1..=10 {
            st = st
                .fade_out(format!("square_{n}"))
                .fade_out(format!("square_label_{n}"));
        }
        st
    });

    // The squares shrink relative to the naturals as the range grows.
    for (limit, sq, nat, color) in [
        ("10000", 0.15, 1.5, Color::WHITE),
        ("1000000", 0.015, 2.0, Color::BLUE),
    ] {
        s.play(|mut st| {
            for (id, p) in populations(&hundred_line, limit, sq, nat, color) {
                st = st.transform(id, p);
            }
            st
        })
        .wait(1.0);
    }
    s.play(|st| {
        st.fade_out("squares")
            .fade_out("naturals")
            .fade_out("squares_label")
            .fade_out("naturals_label")
    })
    .wait(1.0);

    // One-to-one: every natural n maps to exactly one square.
    let zoom = Axis::new(1.0, 10.0, 8.0, Point::new(0.0, 0.8), Vec2::new(1.0, 0.0))?;
    let zoom_line = axis_line(&zoom);
    let naturals_label =
        Primitive::text("Naturals", 22.0).next_to(&zoom_line, Direction::Left, 0.3);
    let squares_label =
        Primitive::text("Squares", 22.0).next_to(&naturals_label, Direction::Down, 2.0);
    let function =
        Primitive::text("f(n) = n²", 24.0).next_to(&naturals_label, Direction::Down, 1.0);
    s.play(|st| {
        st.create("naturals_zoom", zoom_line)
            .write("naturals_zoom_label", naturals_label)
            .write("squares_zoom_label", squares_label)
    })
    .wait(0.5);
    s.play(|st| st.write("function", function)).wait(1.0);

    for n in 1..=10u32 {
        let color = COLORS[(n - 1) as usize];
        let at = zoom.number_to_point(f64::from(n))?;
        let end = at + Vec2::new(0.0, -2.0);
        let mark = Primitive::dot(at).with_color(color);
        let label = Primitive::text(n.to_string(), 18.0)
            .with_color(color)
            .next_to(&mark, Direction::Up, 0.1);
        let arrow = Primitive::arrow(at, end).with_stroke(color, 3.0);
        let formula_at = end + Vec2::new(0.0, -0.3);
        let formula = Primitive::text(format!("{n}²"), 20.0)
            .with_color(color)
            .moved_to(formula_at);
        let result = Primitive::text((n * n).to_string(), 20.0)
            .with_color(color)
            .moved_to(formula_at);

        s.play(|st| {
            st.create(format!("n_{n}"), mark)
                .write(format!("n_label_{n}"), label)
                .run_time(0.2)
        });
        s.play(|st| st.create(format!("arrow_{n}"), arrow).run_time(0.3));
        s.play(|st| st.write(format!("image_{n}"), formula).run_time(0.2));
        s.play(|st| st.transform(format!("image_{n}"), result).run_time(0.5))
            .wait(0.2);
    }
    s.wait(2.0);

    s.play(|st| st.clear(Conceal::Fade)).wait(1.0);
    s.build()
}
