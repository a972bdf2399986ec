use crate::{
    config::SceneConfig,
    foundation::core::{Color, Point, Vec2},
    foundation::error::AlephResult,
    layout::arrange::{Arrangement, arrange_centered},
    layout::axis::Axis,
    layout::place::{DEFAULT_EDGE_BUFF, DEFAULT_NEXT_TO_BUFF, Direction},
    scene::primitive::Primitive,
    timeline::builder::SceneBuilder,
    timeline::director::Timeline,
};

const HALVINGS: usize = 7;
const TERM_SPACING: f64 = 0.3;
const COLORS: [Color; 7] = [
    Color::YELLOW,
    Color::ORANGE,
    Color::PINK,
    Color::PURPLE,
    Color::BLUE,
    Color::TEAL,
    Color::MAROON,
];

fn term(i: usize) -> Primitive {
    let den = 1u64 << (i + 1);
    let tex = if i == 0 {
        format!("\\frac{{1}}{{{den}}}")
    } else {
        format!("+ \\frac{{1}}{{{den}}}")
    };
    Primitive::math(tex, 48.0).with_color(COLORS[i % COLORS.len()])
}

pub(super) fn build(cfg: &SceneConfig) -> AlephResult<Timeline> {
    let frame = cfg.frame_rect();
    let mut s = SceneBuilder::new();

    let title =
        Primitive::text("The Dichotomy", 48.0).to_edge(frame, Direction::Up, DEFAULT_EDGE_BUFF);
    s.play(|st| st.write("title", title)).wait(1.0);

    let line = Axis::new(0.0, 1.0, 10.0, Point::new(0.0, -0.5), Vec2::new(1.0, 0.0))?;
    s.play(|st| st.create("number_line", Primitive::line(line.start(), line.end())))
        .wait(0.5);

    let start = Primitive::dot(line.number_to_point(0.0)?)
        .with_radius(0.1)
        .with_color(Color::GREEN);
    let finish = Primitive::dot(line.number_to_point(1.0)?)
        .with_radius(0.1)
        .with_color(Color::RED);
    let start_label = Primitive::text("Start", 24.0)
        .with_color(Color::GREEN)
        .next_to(&start, Direction::Up, DEFAULT_NEXT_TO_BUFF);
    let finish_label = Primitive::text("Finish Line", 24.0)
        .with_color(Color::RED)
        .next_to(&finish, Direction::Up, DEFAULT_NEXT_TO_BUFF);
    s.play(|st| {
        st.create("start", start)
            .create("finish", finish)
            .write("start_label", start_label)
            .write("finish_label", finish_label)
    })
    .wait(1.0);

    // The partial sum stays centered where the five-term sum would sit.
    let sum_center = Point::new(0.0, 2.0);
    let mut current = 0.0;
    for i in 0..HALVINGS {
        let mid = (current + 1.0) / 2.0;
        let color = COLORS[i % COLORS.len()];
        let segment = Primitive::line(line.number_to_point(current)?, line.number_to_point(mid)?)
            .with_stroke(color, 8.0);
        let mark = Primitive::dot(line.number_to_point(mid)?)
            .with_radius(0.05)
            .with_color(color);
        s.play(|st| {
            st.create(format!("segment_{i}"), segment)
                .create(format!("mid_{i}"), mark)
                .run_time(0.8)
        })
        .wait(1.0 / (i as f64 + 1.0));

        let terms: Vec<Primitive> = (0..=i).map(term).collect();
        let sizes: Vec<_> = terms.iter().map(Primitive::size).collect();
        let centers = arrange_centered(&sizes, Arrangement::Row, TERM_SPACING, sum_center)?;
        s.play(|mut st| {
            for (j, (t, c)) in terms.iter().zip(&centers).enumerate() {
                let placed = t.moved_to(*c);
                st = if j == i {
                    st.write(format!("term_{j}"), placed)
                } else {
                    st.transform(format!("term_{j}"), placed)
                };
            }
            st.run_time(0.6)
        })
        .wait(0.5);
        current = mid;
    }

    s.clear();
    let series = Primitive::math("\\sum_{i=1}^{\\infty} \\frac{1}{2^i}", 48.0)
        .with_color(Color::YELLOW)
        .translated(Vec2::new(-5.0, 0.0));
    let expansion = Primitive::text("= 1/2 + 1/4 + 1/8 + 1/16 + 1/32 + ... = 1", 46.0)
        .with_color(Color::YELLOW)
        .next_to(&series, Direction::Right, DEFAULT_NEXT_TO_BUFF);
    s.play(|st| st.write("series", series)).wait(1.0);
    s.play(|st| st.write("series_terms", expansion).run_time(5.0))
        .wait(3.0);

    s.build()
}
