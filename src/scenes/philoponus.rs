use std::f64::consts::TAU;

use crate::{
    animation::ease::Ease,
    config::SceneConfig,
    foundation::core::{Color, Point, Rect},
    foundation::error::AlephResult,
    layout::place::{Corner, Direction},
    scene::primitive::Primitive,
    timeline::builder::{SceneBuilder, StepBuilder},
    timeline::director::Timeline,
    timeline::step::{Conceal, Motion},
};

const INNER_RADIUS: f64 = 1.5;
const OUTER_RADIUS: f64 = 2.5;
/// Radians per second.
const INNER_SPEED: f64 = 8.0;
const OUTER_SPEED: f64 = 2.0;
const SECONDS: usize = 9;
const COUNTER_RUN_TIME: f64 = 0.3;

fn revolutions(speed: f64, elapsed: f64) -> u64 {
    (speed * elapsed / TAU).floor() as u64
}

fn orbit(radius: f64, speed: f64, elapsed: f64) -> Motion {
    Motion::Orbit {
        center: Point::ORIGIN,
        radius,
        angular_velocity: speed,
        start_angle: speed * elapsed,
    }
}

fn planet(radius: f64, color: Color, name: &str) -> Primitive {
    let body = Primitive::dot(Point::new(radius, 0.0)).with_color(color);
    let label = Primitive::text(name, 16.0)
        .with_color(color)
        .next_to(&body, Direction::Right, 0.1);
    Primitive::group(vec![body, label])
}

struct Counters {
    inner: Primitive,
    outer: Primitive,
}

fn counters(frame: Rect, elapsed: f64) -> Counters {
    let inner = Primitive::text(
        format!("Revolutions: {}", revolutions(INNER_SPEED, elapsed)),
        20.0,
    )
    .with_color(Color::YELLOW)
    .to_corner(frame, Corner::UpperLeft, 1.0);
    let outer = Primitive::text(
        format!("Revolutions: {}", revolutions(OUTER_SPEED, elapsed)),
        20.0,
    )
    .with_color(Color::RED)
    .next_to(&inner, Direction::Down, 0.3);
    Counters { inner, outer }
}

fn orbiting(st: StepBuilder, elapsed: f64) -> StepBuilder {
    st.continuous("inner_planet", orbit(INNER_RADIUS, INNER_SPEED, elapsed))
        .continuous("outer_planet", orbit(OUTER_RADIUS, OUTER_SPEED, elapsed))
        .ease(Ease::Linear)
}

pub(super) fn build(cfg: &SceneConfig) -> AlephResult<Timeline> {
    let frame = cfg.frame_rect();
    let mut s = SceneBuilder::new();

    let earth = Primitive::dot(Point::ORIGIN)
        .with_radius(0.15)
        .with_color(Color::BLUE);
    let earth_label = Primitive::text("Earth", 20.0).next_to(&earth, Direction::Down, 0.3);
    let faint = Color::WHITE.with_alpha(77);
    let inner_orbit = Primitive::circle(Point::ORIGIN, INNER_RADIUS).with_color(faint);
    let outer_orbit = Primitive::circle(Point::ORIGIN, OUTER_RADIUS).with_color(faint);
    s.play(|st| {
        st.create("earth", earth)
            .write("earth_label", earth_label)
            .create("inner_orbit", inner_orbit)
            .create("outer_orbit", outer_orbit)
    });
    s.play(|st| {
        st.create("inner_planet", planet(INNER_RADIUS, Color::YELLOW, "Mercury"))
            .create("outer_planet", planet(OUTER_RADIUS, Color::RED, "Mars"))
    });

    let start = counters(frame, 0.0);
    let ratio = Primitive::text("Ratio: 4:1", 20.0).next_to(&start.outer, Direction::Down, 0.3);
    s.play(|st| {
        st.write("inner_counter", start.inner)
            .write("outer_counter", start.outer)
    })
    .wait(1.0);

    // Each second: free orbit, then orbit while the counters catch up.
    let mut elapsed = 0.0;
    for _ in 0..SECONDS {
        let free = 1.0 - COUNTER_RUN_TIME;
        s.play(|st| orbiting(st, elapsed).run_time(free));
        elapsed += free;

        let next = counters(frame, elapsed + COUNTER_RUN_TIME);
        s.play(|st| {
            orbiting(st, elapsed)
                .transform("inner_counter", next.inner)
                .transform("outer_counter", next.outer)
                .run_time(COUNTER_RUN_TIME)
        });
        elapsed += COUNTER_RUN_TIME;
    }

    s.play(|st| st.write("ratio", ratio)).wait(1.0);
    s.play(|st| st.clear(Conceal::Fade));

    s.build()
}
